//! Filter and ordering strategies

use crate::core::accessor::{Record, resolve};
use crate::core::comparator::{ChainedComparator, build_comparator};
use crate::core::error::TableResult;
use crate::core::filter_order::{Filter, FilterOrderConfiguration, Order};
use crate::core::predicate::build_predicate;
use std::marker::PhantomData;

/// Applies a [`FilterOrderConfiguration`] to a record sequence
///
/// Implement this trait to support custom filter or order logic for a data
/// source. [`apply`](Self::apply) runs every filter in configuration order
/// and then the ordering; override it only when both stages must be
/// replaced together.
pub trait FilterSorter<T> {
    /// Narrow `data` to the records matching one filter
    fn apply_filter<'a>(&self, data: Vec<&'a T>, filter: &Filter) -> TableResult<Vec<&'a T>>;

    /// Order `data` by the given keys, first key most significant
    fn apply_ordering<'a>(&self, data: Vec<&'a T>, ordering: &[Order]) -> TableResult<Vec<&'a T>>;

    /// Filter, then order
    fn apply<'a>(
        &self,
        data: Vec<&'a T>,
        configuration: &FilterOrderConfiguration,
    ) -> TableResult<Vec<&'a T>> {
        let mut data = data;
        for filter in configuration.filters() {
            data = self.apply_filter(data, filter)?;
        }
        self.apply_ordering(data, configuration.ordering())
    }
}

/// Default strategy resolving property names through [`Record`]
#[derive(Debug)]
pub struct PropertyFilterSorter<T> {
    _record: PhantomData<fn(&T)>,
}

impl<T> PropertyFilterSorter<T> {
    pub fn new() -> Self {
        Self {
            _record: PhantomData,
        }
    }
}

impl<T> Default for PropertyFilterSorter<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Record> FilterSorter<T> for PropertyFilterSorter<T> {
    fn apply_filter<'a>(&self, data: Vec<&'a T>, filter: &Filter) -> TableResult<Vec<&'a T>> {
        let accessor = resolve::<T>(&filter.property_name)?;
        let predicate = build_predicate(accessor, &filter.value);

        if !predicate.predicate().is_satisfiable() {
            tracing::trace!(
                property = %filter.property_name,
                value = %filter.value,
                "Filter value cannot match its property type"
            );
            return Ok(Vec::new());
        }

        Ok(data
            .into_iter()
            .filter(|record| predicate.matches(record))
            .collect())
    }

    fn apply_ordering<'a>(&self, data: Vec<&'a T>, ordering: &[Order]) -> TableResult<Vec<&'a T>> {
        let keys = ordering
            .iter()
            .map(|order| {
                resolve::<T>(&order.property_name)
                    .map(|accessor| build_comparator(accessor, order.direction))
            })
            .collect::<TableResult<Vec<_>>>()?;

        Ok(ChainedComparator::new(keys).sort(data))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::comparator::OrderDirection;
    use crate::core::error::TableError;

    struct RowData {
        name: &'static str,
        number: i32,
        active: bool,
    }

    crate::impl_record!(RowData, {
        "Name" => name,
        "Number" => number,
        "Active" => active,
    });

    fn data() -> Vec<RowData> {
        vec![
            RowData {
                name: "Ann",
                number: 0,
                active: true,
            },
            RowData {
                name: "Amanda",
                number: 1,
                active: false,
            },
            RowData {
                name: "Tom",
                number: 2,
                active: true,
            },
        ]
    }

    fn run(config: &FilterOrderConfiguration) -> TableResult<Vec<&'static str>> {
        let data = data();
        let sorter = PropertyFilterSorter::<RowData>::new();
        let result = sorter.apply(data.iter().collect(), config)?;
        Ok(result.iter().map(|r| r.name).collect())
    }

    #[test]
    fn test_exact_text_filter() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Name", "Ann"));
        assert_eq!(run(&config).expect("filter should apply"), vec!["Ann"]);
    }

    #[test]
    fn test_partial_text_filter() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Name", "A"));
        assert_eq!(run(&config).expect("filter should apply"), vec!["Ann", "Amanda"]);
    }

    #[test]
    fn test_numeric_filter() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Number", "2"));
        assert_eq!(run(&config).expect("filter should apply"), vec!["Tom"]);
    }

    #[test]
    fn test_unparsable_numeric_filter_matches_nothing() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Number", "two"));
        assert!(run(&config).expect("filter should apply").is_empty());
    }

    #[test]
    fn test_boolean_filter() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Active", "false"));
        assert_eq!(run(&config).expect("filter should apply"), vec!["Amanda"]);
    }

    #[test]
    fn test_duplicate_filters_combine_with_and() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Name", "A"));
        config.add_filter(Filter::new("Name", "nn"));
        assert_eq!(run(&config).expect("filter should apply"), vec!["Ann"]);
    }

    #[test]
    fn test_filter_then_order() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Active", "true"));
        config.add_or_update_order("Name", OrderDirection::Descending);
        assert_eq!(run(&config).expect("config should apply"), vec!["Tom", "Ann"]);
    }

    #[test]
    fn test_unknown_filter_property_fails() {
        let mut config = FilterOrderConfiguration::new();
        config.add_filter(Filter::new("Surname", "Ann"));
        assert!(matches!(
            run(&config),
            Err(TableError::PropertyNotFound { ref property, .. }) if property == "Surname"
        ));
    }

    #[test]
    fn test_unknown_order_property_fails() {
        let mut config = FilterOrderConfiguration::new();
        config.add_order(Order::new("Name", OrderDirection::Ascending));
        config.add_order(Order::new("Surname", OrderDirection::Ascending));
        assert!(matches!(run(&config), Err(TableError::PropertyNotFound { .. })));
    }
}
