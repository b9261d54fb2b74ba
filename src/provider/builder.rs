//! DataProviderBuilder for fluent construction of data providers

use crate::core::accessor::Record;
use crate::core::filter_order::FilterOrderConfiguration;
use crate::core::filter_sorter::{FilterSorter, PropertyFilterSorter};
use crate::core::pagination::PaginationConfiguration;
use crate::core::paginator::{Paginator, WindowPaginator};
use crate::core::source::DataSource;
use crate::provider::data_provider::DataProvider;
use crate::provider::release::{Release, ReleaseFn, release_row};

/// Builder for [`DataProvider`]
///
/// # Example
///
/// ```ignore
/// let provider = DataProviderBuilder::new(people, |p: &Person| PersonRow::from(p))
///     .with_filter_sorter(MyFilterSorter)
///     .releasing_rows()
///     .build();
/// ```
pub struct DataProviderBuilder<T, V> {
    source: Box<dyn DataSource<T>>,
    converter: Box<dyn Fn(&T) -> V>,
    filter_sorter: Box<dyn FilterSorter<T>>,
    paginator: Box<dyn Paginator<T, V>>,
    release: Option<ReleaseFn<V>>,
    pagination: PaginationConfiguration,
    filter_order: FilterOrderConfiguration,
}

impl<T: Record, V> DataProviderBuilder<T, V> {
    /// Start from a data source and a converter, filtering by record properties
    pub fn new(
        source: impl DataSource<T> + 'static,
        converter: impl Fn(&T) -> V + 'static,
    ) -> Self {
        Self::with_strategy(source, converter, PropertyFilterSorter::new())
    }
}

impl<T, V> DataProviderBuilder<T, V> {
    /// Start from a data source, a converter and a custom filter strategy
    ///
    /// Use this for record types that do not implement [`Record`].
    pub fn with_strategy(
        source: impl DataSource<T> + 'static,
        converter: impl Fn(&T) -> V + 'static,
        filter_sorter: impl FilterSorter<T> + 'static,
    ) -> Self {
        Self {
            source: Box::new(source),
            converter: Box::new(converter),
            filter_sorter: Box::new(filter_sorter),
            paginator: Box::new(WindowPaginator),
            release: None,
            pagination: PaginationConfiguration::default(),
            filter_order: FilterOrderConfiguration::default(),
        }
    }

    /// Override the default filter and order logic
    pub fn with_filter_sorter(mut self, filter_sorter: impl FilterSorter<T> + 'static) -> Self {
        self.filter_sorter = Box::new(filter_sorter);
        self
    }

    /// Override the default paging logic
    pub fn with_paginator(mut self, paginator: impl Paginator<T, V> + 'static) -> Self {
        self.paginator = Box::new(paginator);
        self
    }

    /// Override the record to row converter
    pub fn with_converter(mut self, converter: impl Fn(&T) -> V + 'static) -> Self {
        self.converter = Box::new(converter);
        self
    }

    /// Release superseded rows with a custom hook
    pub fn with_release(mut self, release: ReleaseFn<V>) -> Self {
        self.release = Some(release);
        self
    }

    pub fn with_pagination(mut self, pagination: PaginationConfiguration) -> Self {
        self.pagination = pagination;
        self
    }

    pub fn with_filter_order(mut self, filter_order: FilterOrderConfiguration) -> Self {
        self.filter_order = filter_order;
        self
    }

    pub fn build(self) -> DataProvider<T, V> {
        DataProvider::from_parts(
            self.filter_sorter,
            self.paginator,
            self.source,
            self.converter,
            self.release,
            self.pagination,
            self.filter_order,
        )
    }
}

impl<T, V: Release> DataProviderBuilder<T, V> {
    /// Release superseded rows through their [`Release`] implementation
    pub fn releasing_rows(mut self) -> Self {
        self.release = Some(release_row::<V>);
        self
    }
}
