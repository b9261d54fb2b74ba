//! Column descriptors and the sort token vocabulary of the table boundary

use serde::{Deserialize, Serialize};

/// Describes one column of a data table
///
/// Columns are fixed when the table is built. The `template` is an opaque
/// rendering schema owned by the host; the engine only carries it.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DataTableColumn {
    /// Record property this column displays
    pub property_name: String,

    /// Header text, empty to fall back to the property name
    #[serde(default)]
    pub display_name: String,

    #[serde(default)]
    pub is_sortable: bool,

    #[serde(default)]
    pub is_filterable: bool,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub template: Option<serde_json::Value>,
}

impl DataTableColumn {
    pub fn new(property_name: impl Into<String>) -> Self {
        let property_name = property_name.into();
        Self {
            display_name: property_name.clone(),
            property_name,
            is_sortable: false,
            is_filterable: false,
            template: None,
        }
    }

    /// Header text shown for this column
    pub fn label(&self) -> &str {
        if self.display_name.is_empty() {
            &self.property_name
        } else {
            &self.display_name
        }
    }
}

/// Fluent configuration of a single column
#[derive(Debug)]
pub struct ColumnBuilder {
    column: DataTableColumn,
}

impl ColumnBuilder {
    fn new(property_name: &str) -> Self {
        Self {
            column: DataTableColumn::new(property_name),
        }
    }

    pub fn display_name(&mut self, display_name: impl Into<String>) -> &mut Self {
        self.column.display_name = display_name.into();
        self
    }

    pub fn sortable(&mut self, sortable: bool) -> &mut Self {
        self.column.is_sortable = sortable;
        self
    }

    pub fn filterable(&mut self, filterable: bool) -> &mut Self {
        self.column.is_filterable = filterable;
        self
    }

    pub fn template(&mut self, template: serde_json::Value) -> &mut Self {
        self.column.template = Some(template);
        self
    }
}

/// Collects the columns of a table in display order
///
/// # Example
///
/// ```ignore
/// let mut columns = DataColumnBuilder::new();
/// columns
///     .add_column("Name")
///     .add_column_with("Age", |c| {
///         c.display_name("Age (years)").sortable(true);
///     });
/// let columns = columns.build();
/// ```
#[derive(Debug, Default)]
pub struct DataColumnBuilder {
    columns: Vec<DataTableColumn>,
}

impl DataColumnBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a column that is neither sortable nor filterable
    pub fn add_column(&mut self, property_name: &str) -> &mut Self {
        self.columns.push(DataTableColumn::new(property_name));
        self
    }

    pub fn add_column_with(
        &mut self,
        property_name: &str,
        configure: impl FnOnce(&mut ColumnBuilder),
    ) -> &mut Self {
        let mut builder = ColumnBuilder::new(property_name);
        configure(&mut builder);
        self.columns.push(builder.column);
        self
    }

    pub fn add(&mut self, column: DataTableColumn) -> &mut Self {
        self.columns.push(column);
        self
    }

    pub fn build(self) -> Vec<DataTableColumn> {
        self.columns
    }
}

/// Sort intent received from user input
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortToken {
    Ascending,
    Descending,
    /// No sort on the column
    Clear,
}

impl SortToken {
    /// Parse `asc` / `desc` ignoring case; an empty token clears the sort
    ///
    /// Returns `None` for anything else. Callers ignore such input rather
    /// than failing.
    pub fn parse(token: &str) -> Option<Self> {
        let token = token.trim();
        if token.is_empty() {
            Some(SortToken::Clear)
        } else if token.eq_ignore_ascii_case("asc") {
            Some(SortToken::Ascending)
        } else if token.eq_ignore_ascii_case("desc") {
            Some(SortToken::Descending)
        } else {
            None
        }
    }
}
