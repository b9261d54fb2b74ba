//! Tests for the data provider
//!
//! These tests verify that:
//! - Filters, ordering and paging observe the same view of the data
//! - Counting rows never converts records
//! - Superseded rows are released exactly once, in order
//! - A disposed provider refuses every operation

use anyhow::anyhow;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use this_table::prelude::*;

#[derive(Debug, Clone)]
struct Person {
    id: u32,
    name: String,
    age: u32,
    score: f64,
    active: bool,
}

impl_record!(Person, {
    "Name" => name,
    "Age" => age,
    "Score" => score,
    "Active" => active,
});

#[derive(Debug, Clone)]
struct Reading {
    value: f32,
}

impl_record!(Reading, {
    "Value" => value,
});

fn person(id: u32, name: &str, age: u32) -> Person {
    Person {
        id,
        name: name.to_string(),
        age,
        score: f64::from(age) / 2.0,
        active: id % 2 == 0,
    }
}

fn people() -> Vec<Person> {
    vec![
        person(0, "Ann", 31),
        person(1, "Tom", 25),
        person(2, "Amanda", 31),
        person(3, "Joan", 40),
        person(4, "Bob", 25),
    ]
}

fn numbered(count: u32) -> Vec<Person> {
    (0..count).map(|i| person(i, &format!("P{i:03}"), i % 50)).collect()
}

fn ids(rows: &[u32]) -> Vec<u32> {
    rows.to_vec()
}

/// Row that records its release in a shared log
struct TrackedRow {
    id: u32,
    log: Rc<RefCell<Vec<u32>>>,
    fail: bool,
}

impl Release for TrackedRow {
    fn release(&mut self) -> Result<()> {
        self.log.borrow_mut().push(self.id);
        if self.fail {
            Err(anyhow!("row {} is busy", self.id))
        } else {
            Ok(())
        }
    }
}

fn tracked_provider(
    records: Vec<Person>,
    log: &Rc<RefCell<Vec<u32>>>,
) -> DataProvider<Person, TrackedRow> {
    let log = Rc::clone(log);
    DataProviderBuilder::new(records, move |p: &Person| TrackedRow {
        id: p.id,
        log: Rc::clone(&log),
        fail: p.id % 3 == 1,
    })
    .releasing_rows()
    .build()
}

// =============================================================================
// Filtering and Ordering
// =============================================================================

mod query_tests {
    use super::*;

    fn provider() -> DataProvider<Person, u32> {
        DataProviderBuilder::new(people(), |p: &Person| p.id).build()
    }

    #[test]
    fn test_text_filter_is_case_sensitive_substring() {
        let mut provider = provider();
        provider
            .filter_order_mut()
            .unwrap()
            .add_or_update_filter("Name", "an");

        assert_eq!(ids(provider.current_page_rows().unwrap()), vec![2, 3]);
        assert_eq!(provider.total_rows().unwrap(), 2);
    }

    #[test]
    fn test_filters_combine_with_and() {
        let mut provider = provider();
        let config = provider.filter_order_mut().unwrap();
        config.add_filter(Filter::new("Name", "A"));
        config.add_filter(Filter::new("Age", "31"));
        config.add_filter(Filter::new("Active", "true"));

        assert_eq!(ids(provider.current_page_rows().unwrap()), vec![0, 2]);
    }

    #[test]
    fn test_unparsable_numeric_filter_matches_nothing() {
        let mut provider = provider();
        provider
            .filter_order_mut()
            .unwrap()
            .add_or_update_filter("Age", "thirty");

        assert!(provider.current_page_rows().unwrap().is_empty());
        assert_eq!(provider.total_rows().unwrap(), 0);
    }

    #[test]
    fn test_float_filter() {
        let mut provider = provider();
        provider
            .filter_order_mut()
            .unwrap()
            .add_or_update_filter("Score", "12.5");

        assert_eq!(ids(provider.current_page_rows().unwrap()), vec![1, 4]);
    }

    #[test]
    fn test_f32_filter_matches_parsed_value() {
        let readings = [2.1_f32, 0.3, 2.1, 7.25]
            .into_iter()
            .map(|value| Reading { value })
            .collect::<Vec<_>>();
        let mut provider = DataProviderBuilder::new(readings, |r: &Reading| r.value).build();
        provider
            .filter_order_mut()
            .unwrap()
            .add_or_update_filter("Value", "2.1");

        assert_eq!(provider.current_page_rows().unwrap(), &[2.1_f32, 2.1]);

        provider
            .filter_order_mut()
            .unwrap()
            .add_or_update_filter("Value", "0.3");
        assert_eq!(provider.total_rows().unwrap(), 1);
    }

    #[test]
    fn test_sort_is_stable() {
        let mut provider = provider();
        provider
            .filter_order_mut()
            .unwrap()
            .add_or_update_order("Age", OrderDirection::Ascending);

        // Tom and Bob share age 25, Ann and Amanda share 31
        assert_eq!(ids(provider.current_page_rows().unwrap()), vec![1, 4, 0, 2, 3]);
    }

    #[test]
    fn test_multi_key_ordering() {
        let mut provider = provider();
        let config = provider.filter_order_mut().unwrap();
        config.add_order(Order::new("Age", OrderDirection::Descending));
        config.add_order(Order::new("Name", OrderDirection::Ascending));

        assert_eq!(ids(provider.current_page_rows().unwrap()), vec![3, 2, 0, 4, 1]);
    }

    #[test]
    fn test_unknown_order_property_is_an_error() {
        let mut provider = provider();
        provider
            .filter_order_mut()
            .unwrap()
            .add_or_update_order("Salary", OrderDirection::Ascending);

        let err = provider.total_rows().unwrap_err();
        assert_eq!(err.error_code(), "PROPERTY_NOT_FOUND");
    }

    #[test]
    fn test_page_past_the_end_is_empty() {
        let mut provider = DataProviderBuilder::new(numbered(45), |p: &Person| p.id)
            .with_pagination(PaginationConfiguration::new(20, 5))
            .build();

        assert!(provider.current_page_rows().unwrap().is_empty());
        assert_eq!(provider.total_rows().unwrap(), 45);
    }
}

// =============================================================================
// Conversion Cost
// =============================================================================

mod conversion_tests {
    use super::*;

    fn counting_provider(count: u32, conversions: &Rc<Cell<usize>>) -> DataProvider<Person, u32> {
        let conversions = Rc::clone(conversions);
        DataProviderBuilder::new(numbered(count), move |p: &Person| {
            conversions.set(conversions.get() + 1);
            p.id
        })
        .build()
    }

    #[test]
    fn test_total_rows_never_converts() {
        let conversions = Rc::new(Cell::new(0));
        let provider = counting_provider(500, &conversions);

        assert_eq!(provider.total_rows().unwrap(), 500);
        assert_eq!(conversions.get(), 0);
    }

    #[test]
    fn test_current_page_converts_one_page() {
        let conversions = Rc::new(Cell::new(0));
        let mut provider = counting_provider(500, &conversions);

        provider.current_page_rows().unwrap();
        assert_eq!(conversions.get(), 20);

        provider.total_rows().unwrap();
        assert_eq!(conversions.get(), 20);
    }
}

// =============================================================================
// Row Lifecycle
// =============================================================================

mod lifecycle_tests {
    use super::*;

    #[test]
    fn test_previous_page_released_before_new_page_returned() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut provider = tracked_provider(numbered(50), &log);
        provider.pagination_mut().unwrap().page_size = 5;

        provider.current_page_rows().unwrap();
        assert!(log.borrow().is_empty());

        provider.pagination_mut().unwrap().current_page_index = 1;
        let rows: Vec<u32> = provider
            .current_page_rows()
            .unwrap()
            .iter()
            .map(|r| r.id)
            .collect();

        assert_eq!(rows, vec![5, 6, 7, 8, 9]);
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3, 4]);
    }

    #[test]
    fn test_release_failure_does_not_stop_sweep() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut provider = tracked_provider(numbered(6), &log);

        provider.current_page_rows().unwrap();
        provider.dispose();

        // Rows 1 and 4 fail to release; the others are still released
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3, 4, 5]);
    }

    #[test]
    fn test_dispose_releases_exactly_once() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut provider = tracked_provider(numbered(30), &log);

        provider.current_page_rows().unwrap();
        provider.dispose();
        assert_eq!(*log.borrow(), (0..20).collect::<Vec<_>>());

        provider.dispose();
        drop(provider);
        assert_eq!(log.borrow().len(), 20);
    }

    #[test]
    fn test_drop_runs_disposal() {
        let log = Rc::new(RefCell::new(Vec::new()));
        {
            let mut provider = tracked_provider(numbered(3), &log);
            provider.current_page_rows().unwrap();
        }
        assert_eq!(*log.borrow(), vec![0, 1, 2]);
    }

    #[test]
    fn test_provider_built_without_release_never_releases() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let row_log = Rc::clone(&log);
        let mut provider = DataProviderBuilder::new(numbered(10), move |p: &Person| TrackedRow {
            id: p.id,
            log: Rc::clone(&row_log),
            fail: false,
        })
        .build();

        assert!(!provider.releases_rows());
        provider.current_page_rows().unwrap();
        provider.current_page_rows().unwrap();
        provider.dispose();

        assert!(log.borrow().is_empty());
    }

    #[test]
    fn test_new_releasing_releases_superseded_rows() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let row_log = Rc::clone(&log);
        let mut provider = DataProvider::new_releasing(
            PropertyFilterSorter::new(),
            WindowPaginator,
            numbered(8),
            move |p: &Person| TrackedRow {
                id: p.id,
                log: Rc::clone(&row_log),
                fail: false,
            },
        );
        provider.pagination_mut().unwrap().page_size = 4;

        assert!(provider.releases_rows());
        provider.current_page_rows().unwrap();
        provider.pagination_mut().unwrap().current_page_index = 1;
        provider.current_page_rows().unwrap();
        assert_eq!(*log.borrow(), vec![0, 1, 2, 3]);

        provider.dispose();
        assert_eq!(*log.borrow(), (0..8).collect::<Vec<_>>());
    }

    #[test]
    fn test_custom_release_hook() {
        fn mark_released(row: &mut (u32, bool)) -> Result<()> {
            row.1 = true;
            Ok(())
        }

        let mut provider = DataProviderBuilder::new(numbered(4), |p: &Person| (p.id, false))
            .with_release(mark_released)
            .build();

        assert!(provider.releases_rows());
        assert_eq!(provider.current_page_rows().unwrap().len(), 4);
        provider.dispose();
        assert!(provider.materialized_rows().is_empty());
    }

    #[test]
    fn test_disposed_provider_refuses_operations() {
        let log = Rc::new(RefCell::new(Vec::new()));
        let mut provider = tracked_provider(numbered(3), &log);
        provider.dispose();

        assert!(matches!(provider.current_page_rows(), Err(TableError::Disposed)));
        assert!(matches!(provider.total_rows(), Err(TableError::Disposed)));
        assert!(matches!(provider.pagination_mut(), Err(TableError::Disposed)));
        assert!(matches!(provider.filter_order(), Err(TableError::Disposed)));
        assert_eq!(TableError::Disposed.error_code(), "PROVIDER_DISPOSED");
    }
}
