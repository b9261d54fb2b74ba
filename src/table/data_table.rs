//! The table state coordinator
//!
//! A [`DataTable`] turns user input (page changes, column filters, column
//! sorts) into configuration writes on its [`FilteredDataProvider`] and
//! reloads the current page afterwards. Malformed input never fails: page
//! indices are clamped, unknown sort tokens and undeclared columns are
//! ignored. Errors returned from these operations come from the provider
//! (an unknown property, or use after teardown).

use crate::core::comparator::OrderDirection;
use crate::core::error::TableResult;
use crate::core::pagination::{PageInfo, PaginationConfiguration};
use crate::provider::FilteredDataProvider;
use crate::table::column::{DataTableColumn, SortToken};
use crate::table::page_cache::PageCache;

/// Called with fresh pagination metadata after every reload
pub type PageLoadedFn = Box<dyn Fn(&PageInfo)>;

pub struct DataTable<V> {
    provider: Box<dyn FilteredDataProvider<V>>,
    columns: Vec<DataTableColumn>,
    pages: PageCache,
    info: PageInfo,
    max_page_size: usize,
    on_page_loaded: Option<PageLoadedFn>,
}

impl<V> DataTable<V> {
    /// Take ownership of a configured provider and load its current page
    pub(crate) fn init(
        provider: Box<dyn FilteredDataProvider<V>>,
        columns: Vec<DataTableColumn>,
        max_page_size: usize,
        on_page_loaded: Option<PageLoadedFn>,
    ) -> TableResult<Self> {
        let pagination = *provider.pagination()?;
        let mut table = Self {
            provider,
            columns,
            pages: PageCache::new(),
            info: PageInfo::new(&pagination, 0, 0),
            max_page_size,
            on_page_loaded,
        };
        table.load()?;
        Ok(table)
    }

    /// Move to page `index`
    ///
    /// Negative indices select the first page and indices past the end
    /// select the last one. The page cache is kept.
    pub fn set_page_index(&mut self, index: i64) -> TableResult<()> {
        let total_rows = self.provider.total_rows()?;
        self.provider.pagination_mut()?.current_page_index = usize::try_from(index).unwrap_or(0);
        self.load_with_total(total_rows)
    }

    /// Change the page size and go back to the first page
    ///
    /// Non-positive sizes are ignored; sizes above the table maximum are
    /// clamped to it.
    pub fn set_page_size(&mut self, page_size: i64) -> TableResult<()> {
        let requested = usize::try_from(page_size).unwrap_or(0);
        if requested == 0 {
            tracing::debug!(page_size, "Ignored non-positive page size");
            return Ok(());
        }

        *self.provider.pagination_mut()? =
            PaginationConfiguration::new(requested.min(self.max_page_size), 0);
        self.reload_from_first_page()
    }

    /// Filter `property_name` by `value`; an empty value removes the filter
    pub fn set_column_filter(&mut self, property_name: &str, value: &str) -> TableResult<()> {
        if !self.column(property_name).is_some_and(|c| c.is_filterable) {
            tracing::debug!(property = property_name, "Ignored filter on non-filterable column");
            return Ok(());
        }

        self.provider
            .filter_order_mut()?
            .add_or_update_filter(property_name, value);
        self.reload_from_first_page()
    }

    /// Sort by `property_name` according to a raw direction token
    ///
    /// `asc` and `desc` (any case) make this column the only sort key and an
    /// empty token clears its sort. Any other token leaves the table
    /// untouched and does not reload.
    pub fn set_column_sort(&mut self, property_name: &str, token: &str) -> TableResult<()> {
        match SortToken::parse(token) {
            Some(sort) => self.sort_column(property_name, sort),
            None => {
                tracing::debug!(property = property_name, token, "Ignored unknown sort token");
                Ok(())
            }
        }
    }

    pub fn sort_column(&mut self, property_name: &str, sort: SortToken) -> TableResult<()> {
        if !self.column(property_name).is_some_and(|c| c.is_sortable) {
            tracing::debug!(property = property_name, "Ignored sort on non-sortable column");
            return Ok(());
        }

        let filter_order = self.provider.filter_order_mut()?;
        match sort {
            SortToken::Ascending => {
                filter_order.add_or_update_order(property_name, OrderDirection::Ascending)
            }
            SortToken::Descending => {
                filter_order.add_or_update_order(property_name, OrderDirection::Descending)
            }
            SortToken::Clear => filter_order.remove_order_for(property_name),
        }
        self.reload_from_first_page()
    }

    /// Reload the current page after writing to the provider directly
    ///
    /// A page index past the last page is clamped like user input.
    pub fn refresh(&mut self) -> TableResult<()> {
        self.load()
    }

    /// Dispose the provider; every later operation fails
    pub fn teardown(&mut self) {
        if self.provider.is_disposed() {
            return;
        }
        self.provider.dispose();
        self.pages.clear();
        tracing::debug!("Data table torn down");
    }

    pub fn is_torn_down(&self) -> bool {
        self.provider.is_disposed()
    }

    /// Rows of the current page
    pub fn rows(&self) -> &[V] {
        self.provider.materialized_rows()
    }

    pub fn page_info(&self) -> &PageInfo {
        &self.info
    }

    pub fn page_index(&self) -> usize {
        self.info.page_index
    }

    pub fn page_size(&self) -> usize {
        self.info.page_size
    }

    pub fn total_rows(&self) -> usize {
        self.info.total_rows
    }

    pub fn pages_count(&self) -> usize {
        self.info.pages_count
    }

    pub fn max_page_size(&self) -> usize {
        self.max_page_size
    }

    pub fn pages(&self) -> &PageCache {
        &self.pages
    }

    pub fn columns(&self) -> &[DataTableColumn] {
        &self.columns
    }

    pub fn column(&self, property_name: &str) -> Option<&DataTableColumn> {
        self.columns.iter().find(|c| c.property_name == property_name)
    }

    /// Filter value currently applied to `property_name`
    pub fn column_filter(&self, property_name: &str) -> Option<&str> {
        self.provider
            .filter_order()
            .ok()
            .and_then(|config| config.filter_value(property_name))
    }

    /// Sort direction currently applied to `property_name`
    pub fn column_sort(&self, property_name: &str) -> Option<OrderDirection> {
        self.provider
            .filter_order()
            .ok()
            .and_then(|config| {
                config
                    .ordering()
                    .iter()
                    .find(|order| order.property_name == property_name)
            })
            .map(|order| order.direction)
    }

    pub fn provider(&self) -> &dyn FilteredDataProvider<V> {
        self.provider.as_ref()
    }

    /// Direct access to the provider configuration; call
    /// [`refresh`](Self::refresh) afterwards
    pub fn provider_mut(&mut self) -> &mut dyn FilteredDataProvider<V> {
        self.provider.as_mut()
    }

    fn reload_from_first_page(&mut self) -> TableResult<()> {
        self.provider.pagination_mut()?.current_page_index = 0;
        self.pages.clear();
        self.load()
    }

    fn load(&mut self) -> TableResult<()> {
        let total_rows = self.provider.total_rows()?;
        self.load_with_total(total_rows)
    }

    /// Load the current page, first clamping its index to the last page
    fn load_with_total(&mut self, total_rows: usize) -> TableResult<()> {
        let pagination = {
            let pagination = self.provider.pagination_mut()?;
            let last = pagination.pages_count(total_rows).saturating_sub(1);
            if pagination.current_page_index > last {
                tracing::debug!(
                    requested = pagination.current_page_index,
                    page_index = last,
                    "Clamped page index"
                );
                pagination.current_page_index = last;
            }
            *pagination
        };
        let page_rows = self.provider.current_page_rows()?.len();

        self.pages.load(pagination.current_page_index, page_rows);
        self.info = PageInfo::new(&pagination, page_rows, total_rows);

        tracing::debug!(
            page_index = self.info.page_index,
            page_size = self.info.page_size,
            rows = page_rows,
            total_rows,
            "Loaded page"
        );

        if let Some(on_page_loaded) = &self.on_page_loaded {
            on_page_loaded(&self.info);
        }
        Ok(())
    }
}

impl<V> Drop for DataTable<V> {
    fn drop(&mut self) {
        self.teardown();
    }
}

impl<V> std::fmt::Debug for DataTable<V> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("DataTable")
            .field("columns", &self.columns)
            .field("info", &self.info)
            .field("pages", &self.pages.len())
            .finish_non_exhaustive()
    }
}
