//! Configuration loading and management

use crate::core::comparator::OrderDirection;
use crate::core::error::{ConfigError, TableResult};
use crate::core::filter_order::{Filter, Order};
use crate::core::pagination::DEFAULT_PAGE_SIZE;
use crate::table::DEFAULT_MAX_PAGE_SIZE;
use crate::table::column::DataTableColumn;
use anyhow::Result;
use serde::{Deserialize, Serialize};
use std::path::Path;

fn default_page_size() -> usize {
    DEFAULT_PAGE_SIZE
}

fn default_max_page_size() -> usize {
    DEFAULT_MAX_PAGE_SIZE
}

/// Declarative description of a data table
///
/// ```yaml
/// columns:
///   - property_name: Name
///     display_name: Full name
///     is_sortable: true
///     is_filterable: true
/// page_size: 50
/// order:
///   property_name: Name
///   direction: asc
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TableConfig {
    /// Columns in display order
    #[serde(default)]
    pub columns: Vec<DataTableColumn>,

    #[serde(default = "default_page_size")]
    pub page_size: usize,

    #[serde(default)]
    pub page_index: usize,

    /// Largest page size accepted from user input
    #[serde(default = "default_max_page_size")]
    pub max_page_size: usize,

    /// Filters applied when the table is built
    #[serde(default)]
    pub filters: Vec<Filter>,

    /// Order applied when the table is built
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub order: Option<Order>,
}

impl Default for TableConfig {
    fn default() -> Self {
        Self {
            columns: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            filters: Vec::new(),
            order: None,
        }
    }
}

impl TableConfig {
    /// Load and validate configuration from a YAML file
    pub fn from_yaml_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_yaml_str(&content)
    }

    /// Load and validate configuration from a YAML string
    pub fn from_yaml_str(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml).map_err(|e| ConfigError::Parse {
            message: e.to_string(),
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Check the page geometry
    pub fn validate(&self) -> TableResult<()> {
        if self.page_size == 0 {
            return Err(ConfigError::InvalidPageSize {
                value: self.page_size,
                message: "page size must be greater than zero".to_string(),
            }
            .into());
        }
        if self.page_size > self.max_page_size {
            return Err(ConfigError::InvalidPageSize {
                value: self.page_size,
                message: format!("page size exceeds the maximum of {}", self.max_page_size),
            }
            .into());
        }
        Ok(())
    }

    pub fn column(&self, property_name: &str) -> Option<&DataTableColumn> {
        self.columns.iter().find(|c| c.property_name == property_name)
    }

    /// Create a configuration for a table of people, for testing
    pub fn default_config() -> Self {
        let mut name = DataTableColumn::new("Name");
        name.is_sortable = true;
        name.is_filterable = true;

        let mut age = DataTableColumn::new("Age");
        age.is_sortable = true;

        Self {
            columns: vec![name, age],
            order: Some(Order::new("Name", OrderDirection::Ascending)),
            ..Self::default()
        }
    }
}
