//! DataTableBuilder for fluent construction of data tables

use crate::config::TableConfig;
use crate::core::accessor::Record;
use crate::core::comparator::OrderDirection;
use crate::core::error::{ConfigError, TableResult};
use crate::core::filter_order::{Filter, FilterOrderConfiguration, Order};
use crate::core::pagination::{DEFAULT_PAGE_SIZE, PageInfo, PaginationConfiguration};
use crate::core::source::DataSource;
use crate::provider::{DataProviderBuilder, FilteredDataProvider, Release};
use crate::table::column::{DataColumnBuilder, DataTableColumn};
use crate::table::data_table::{DataTable, PageLoadedFn};

/// Largest page size a table accepts unless configured otherwise
pub const DEFAULT_MAX_PAGE_SIZE: usize = 100;

/// Builder for [`DataTable`]
///
/// # Example
///
/// ```ignore
/// let table = DataTableBuilder::new()
///     .with_data_source(people, |p: &Person| PersonRow::from(p))
///     .with_columns(|columns| {
///         columns.add_column_with("Name", |c| {
///             c.sortable(true).filterable(true);
///         });
///     })
///     .with_initial_page_size(50)
///     .build()?;
/// ```
pub struct DataTableBuilder<V> {
    provider: Option<Box<dyn FilteredDataProvider<V>>>,
    columns: Vec<DataTableColumn>,
    page_size: usize,
    page_index: usize,
    max_page_size: usize,
    filters: Vec<Filter>,
    order: Option<Order>,
    on_page_loaded: Option<PageLoadedFn>,
}

impl<V: 'static> DataTableBuilder<V> {
    /// Use `source` filtered by record properties and converted by `converter`
    ///
    /// Rows are never released, even when `V` implements [`Release`]; use
    /// [`with_releasing_data_source`](Self::with_releasing_data_source) for
    /// such rows.
    pub fn with_data_source<T: Record>(
        self,
        source: impl DataSource<T> + 'static,
        converter: impl Fn(&T) -> V + 'static,
    ) -> Self {
        self.with_data_source_configured(source, converter, |provider| provider)
    }

    /// Same as [`with_data_source`](Self::with_data_source), with a chance to
    /// customize the provider (filter strategy, paginator, row release)
    pub fn with_data_source_configured<T: Record>(
        self,
        source: impl DataSource<T> + 'static,
        converter: impl Fn(&T) -> V + 'static,
        configure: impl FnOnce(DataProviderBuilder<T, V>) -> DataProviderBuilder<T, V>,
    ) -> Self {
        let provider = configure(DataProviderBuilder::new(source, converter)).build();
        self.with_provider(provider)
    }

    /// Same as [`with_data_source`](Self::with_data_source), releasing every
    /// superseded row through its [`Release`] implementation
    pub fn with_releasing_data_source<T: Record>(
        self,
        source: impl DataSource<T> + 'static,
        converter: impl Fn(&T) -> V + 'static,
    ) -> Self
    where
        V: Release,
    {
        self.with_data_source_configured(source, converter, |provider| provider.releasing_rows())
    }

    /// Use an existing provider
    pub fn with_provider(mut self, provider: impl FilteredDataProvider<V> + 'static) -> Self {
        self.provider = Some(Box::new(provider));
        self
    }
}

impl<V> DataTableBuilder<V> {
    pub fn new() -> Self {
        Self {
            provider: None,
            columns: Vec::new(),
            page_size: DEFAULT_PAGE_SIZE,
            page_index: 0,
            max_page_size: DEFAULT_MAX_PAGE_SIZE,
            filters: Vec::new(),
            order: None,
            on_page_loaded: None,
        }
    }

    pub fn with_columns(mut self, configure: impl FnOnce(&mut DataColumnBuilder)) -> Self {
        let mut builder = DataColumnBuilder::new();
        configure(&mut builder);
        self.columns.extend(builder.build());
        self
    }

    pub fn with_initial_page_index(mut self, page_index: usize) -> Self {
        self.page_index = page_index;
        self
    }

    pub fn with_initial_page_size(mut self, page_size: usize) -> Self {
        self.page_size = page_size;
        self
    }

    /// Upper bound for page sizes requested through the table
    pub fn with_max_page_size(mut self, max_page_size: usize) -> Self {
        self.max_page_size = max_page_size;
        self
    }

    pub fn with_initial_filter(mut self, property_name: &str, value: &str) -> Self {
        self.filters.push(Filter::new(property_name, value));
        self
    }

    pub fn with_initial_order(mut self, property_name: &str, direction: OrderDirection) -> Self {
        self.order = Some(Order::new(property_name, direction));
        self
    }

    /// Apply columns, page geometry, filters and order from a [`TableConfig`]
    pub fn with_config(mut self, config: &TableConfig) -> Self {
        self.columns.extend(config.columns.iter().cloned());
        self.page_size = config.page_size;
        self.page_index = config.page_index;
        self.max_page_size = config.max_page_size;
        self.filters.extend(config.filters.iter().cloned());
        if config.order.is_some() {
            self.order = config.order.clone();
        }
        self
    }

    /// Notify the host after every page reload
    pub fn on_page_loaded(mut self, callback: impl Fn(&PageInfo) + 'static) -> Self {
        self.on_page_loaded = Some(Box::new(callback));
        self
    }

    /// Build the table and load its initial page
    ///
    /// The initial configuration replaces whatever the provider held. An
    /// initial page index past the last page selects the last page.
    pub fn build(self) -> TableResult<DataTable<V>> {
        let mut provider = self.provider.ok_or(ConfigError::MissingDataSource)?;

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

        let mut filter_order = FilterOrderConfiguration::new();
        for filter in &self.filters {
            filter_order.add_or_update_filter(&filter.property_name, &filter.value);
        }
        if let Some(order) = &self.order {
            filter_order.add_or_update_order(&order.property_name, order.direction);
        }

        *provider.pagination_mut()? =
            PaginationConfiguration::new(self.page_size, self.page_index);
        *provider.filter_order_mut()? = filter_order;

        tracing::debug!(
            columns = self.columns.len(),
            page_size = self.page_size,
            page_index = self.page_index,
            "Building data table"
        );

        DataTable::init(provider, self.columns, self.max_page_size, self.on_page_loaded)
    }
}

impl<V> Default for DataTableBuilder<V> {
    fn default() -> Self {
        Self::new()
    }
}
