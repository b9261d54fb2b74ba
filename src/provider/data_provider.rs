//! Filtered, paginated data provider with row lifecycle management

use crate::core::error::{TableError, TableResult};
use crate::core::filter_order::FilterOrderConfiguration;
use crate::core::filter_sorter::FilterSorter;
use crate::core::pagination::PaginationConfiguration;
use crate::core::paginator::Paginator;
use crate::core::source::DataSource;
use crate::provider::release::{Release, ReleaseFn, release_row, release_rows};

/// Provides the current page of rows to a table
///
/// Every read of [`current_page_rows`](Self::current_page_rows) or
/// [`total_rows`](Self::total_rows) reflects the configuration as it is at
/// the time of the call; nothing is cached across configuration writes.
///
/// Implement this trait to expose data that does not come from a
/// [`DataSource`], or to substitute a provider in tests.
pub trait FilteredDataProvider<V> {
    fn pagination(&self) -> TableResult<&PaginationConfiguration>;

    fn pagination_mut(&mut self) -> TableResult<&mut PaginationConfiguration>;

    fn filter_order(&self) -> TableResult<&FilterOrderConfiguration>;

    fn filter_order_mut(&mut self) -> TableResult<&mut FilterOrderConfiguration>;

    /// Recompute and return the rows of the current page
    ///
    /// The previously materialized rows are released before the new set
    /// replaces them.
    fn current_page_rows(&mut self) -> TableResult<&[V]>;

    /// Number of records passing the filters, computed without converting
    fn total_rows(&self) -> TableResult<usize>;

    /// Rows materialized by the last `current_page_rows` call
    fn materialized_rows(&self) -> &[V];

    /// Release the materialized rows; every later operation fails
    ///
    /// Calling `dispose` more than once is a no-op.
    fn dispose(&mut self);

    fn is_disposed(&self) -> bool;
}

/// The standard [`FilteredDataProvider`] over a [`DataSource`]
///
/// Records are filtered and ordered by a [`FilterSorter`], sliced by a
/// [`Paginator`] and converted with the converter given at construction.
/// These four collaborators never change after construction.
pub struct DataProvider<T, V> {
    filter_sorter: Box<dyn FilterSorter<T>>,
    paginator: Box<dyn Paginator<T, V>>,
    source: Box<dyn DataSource<T>>,
    converter: Box<dyn Fn(&T) -> V>,
    release: Option<ReleaseFn<V>>,
    pagination: PaginationConfiguration,
    filter_order: FilterOrderConfiguration,
    current_rows: Vec<V>,
    disposed: bool,
}

impl<T, V> DataProvider<T, V> {
    /// Create a provider with default pagination and no filters
    ///
    /// Rows built by this provider are never released, even when `V`
    /// implements [`Release`]; use [`new_releasing`](Self::new_releasing)
    /// for such rows.
    pub fn new(
        filter_sorter: impl FilterSorter<T> + 'static,
        paginator: impl Paginator<T, V> + 'static,
        source: impl DataSource<T> + 'static,
        converter: impl Fn(&T) -> V + 'static,
    ) -> Self {
        Self::from_parts(
            Box::new(filter_sorter),
            Box::new(paginator),
            Box::new(source),
            Box::new(converter),
            None,
            PaginationConfiguration::default(),
            FilterOrderConfiguration::default(),
        )
    }

    pub(crate) fn from_parts(
        filter_sorter: Box<dyn FilterSorter<T>>,
        paginator: Box<dyn Paginator<T, V>>,
        source: Box<dyn DataSource<T>>,
        converter: Box<dyn Fn(&T) -> V>,
        release: Option<ReleaseFn<V>>,
        pagination: PaginationConfiguration,
        filter_order: FilterOrderConfiguration,
    ) -> Self {
        Self {
            filter_sorter,
            paginator,
            source,
            converter,
            release,
            pagination,
            filter_order,
            current_rows: Vec::new(),
            disposed: false,
        }
    }

    /// Whether materialized rows are released when superseded
    pub fn releases_rows(&self) -> bool {
        self.release.is_some()
    }

    fn check_disposed(&self) -> TableResult<()> {
        if self.disposed {
            Err(TableError::Disposed)
        } else {
            Ok(())
        }
    }

    fn filtered(&self) -> TableResult<Vec<&T>> {
        let records: Vec<&T> = self.source.records().collect();
        self.filter_sorter.apply(records, &self.filter_order)
    }

    fn release_current_rows(&mut self) {
        let previous = std::mem::take(&mut self.current_rows);
        let count = previous.len();
        let failures = release_rows(previous, self.release);
        if count > 0 {
            tracing::trace!(rows = count, failures, "Released previous page");
        }
    }
}

impl<T, V: Release> DataProvider<T, V> {
    /// Create a provider that releases every superseded row through its
    /// [`Release`] implementation
    pub fn new_releasing(
        filter_sorter: impl FilterSorter<T> + 'static,
        paginator: impl Paginator<T, V> + 'static,
        source: impl DataSource<T> + 'static,
        converter: impl Fn(&T) -> V + 'static,
    ) -> Self {
        Self::from_parts(
            Box::new(filter_sorter),
            Box::new(paginator),
            Box::new(source),
            Box::new(converter),
            Some(release_row::<V>),
            PaginationConfiguration::default(),
            FilterOrderConfiguration::default(),
        )
    }
}

impl<T, V> FilteredDataProvider<V> for DataProvider<T, V> {
    fn pagination(&self) -> TableResult<&PaginationConfiguration> {
        self.check_disposed()?;
        Ok(&self.pagination)
    }

    fn pagination_mut(&mut self) -> TableResult<&mut PaginationConfiguration> {
        self.check_disposed()?;
        Ok(&mut self.pagination)
    }

    fn filter_order(&self) -> TableResult<&FilterOrderConfiguration> {
        self.check_disposed()?;
        Ok(&self.filter_order)
    }

    fn filter_order_mut(&mut self) -> TableResult<&mut FilterOrderConfiguration> {
        self.check_disposed()?;
        Ok(&mut self.filter_order)
    }

    fn current_page_rows(&mut self) -> TableResult<&[V]> {
        self.check_disposed()?;

        let rows = {
            let filtered = self.filtered()?;
            self.paginator
                .get_rows(&filtered, &self.pagination, self.converter.as_ref())
        };

        self.release_current_rows();
        self.current_rows = rows;

        tracing::debug!(
            page_index = self.pagination.current_page_index,
            page_size = self.pagination.page_size,
            rows = self.current_rows.len(),
            "Materialized page"
        );

        Ok(&self.current_rows)
    }

    fn total_rows(&self) -> TableResult<usize> {
        self.check_disposed()?;
        let filtered = self.filtered()?;
        Ok(self.paginator.get_total_rows(&filtered))
    }

    fn materialized_rows(&self) -> &[V] {
        &self.current_rows
    }

    fn dispose(&mut self) {
        if self.disposed {
            return;
        }
        self.release_current_rows();
        self.disposed = true;
        tracing::debug!("Data provider disposed");
    }

    fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl<T, V> Drop for DataProvider<T, V> {
    fn drop(&mut self) {
        self.dispose();
    }
}
