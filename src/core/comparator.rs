//! Property comparators and stable multi-key ordering

use crate::core::accessor::Accessor;
use crate::core::error::TableError;
use crate::core::field::FieldValue;
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

/// Direction of an order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OrderDirection {
    #[serde(alias = "asc")]
    Ascending,
    #[serde(alias = "desc")]
    Descending,
}

impl OrderDirection {
    /// Apply this direction to a natural ordering
    pub fn apply(self, ordering: Ordering) -> Ordering {
        match self {
            OrderDirection::Ascending => ordering,
            OrderDirection::Descending => ordering.reverse(),
        }
    }
}

impl fmt::Display for OrderDirection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            OrderDirection::Ascending => write!(f, "ascending"),
            OrderDirection::Descending => write!(f, "descending"),
        }
    }
}

impl FromStr for OrderDirection {
    type Err = TableError;

    /// Parse `ascending`, `descending`, `asc` or `desc`, ignoring case
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "asc" | "ascending" => Ok(OrderDirection::Ascending),
            "desc" | "descending" => Ok(OrderDirection::Descending),
            _ => Err(TableError::InvalidOrderDirection {
                value: s.to_string(),
            }),
        }
    }
}

/// Compares records by one property in one direction
#[derive(Debug)]
pub struct PropertyComparator<'r, T> {
    accessor: &'r Accessor<T>,
    direction: OrderDirection,
}

impl<T> PropertyComparator<'_, T> {
    pub fn direction(&self) -> OrderDirection {
        self.direction
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.compare_keys(&self.accessor.get(a), &self.accessor.get(b))
    }

    fn key(&self, record: &T) -> FieldValue {
        self.accessor.get(record)
    }

    fn compare_keys(&self, a: &FieldValue, b: &FieldValue) -> Ordering {
        self.direction.apply(a.total_cmp(b))
    }
}

/// Build the comparator for `accessor`'s property in `direction`
pub fn build_comparator<T>(
    accessor: &Accessor<T>,
    direction: OrderDirection,
) -> PropertyComparator<'_, T> {
    PropertyComparator {
        accessor,
        direction,
    }
}

/// Comparators applied left to right as primary, secondary, ... keys
#[derive(Debug)]
pub struct ChainedComparator<'r, T> {
    keys: Vec<PropertyComparator<'r, T>>,
}

impl<'r, T> ChainedComparator<'r, T> {
    pub fn new(keys: Vec<PropertyComparator<'r, T>>) -> Self {
        Self { keys }
    }

    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }

    pub fn compare(&self, a: &T, b: &T) -> Ordering {
        self.keys
            .iter()
            .map(|key| key.compare(a, b))
            .find(|ordering| ordering.is_ne())
            .unwrap_or(Ordering::Equal)
    }

    /// Sort records by the chained keys
    ///
    /// Keys are read once per record. Records that compare equal on every key
    /// keep their input order.
    pub fn sort<'a>(&self, records: Vec<&'a T>) -> Vec<&'a T> {
        if self.keys.is_empty() {
            return records;
        }

        let mut decorated: Vec<(Vec<FieldValue>, &'a T)> = records
            .into_iter()
            .map(|record| (self.keys.iter().map(|key| key.key(record)).collect(), record))
            .collect();

        decorated.sort_by(|(a, _), (b, _)| {
            self.keys
                .iter()
                .zip(a.iter().zip(b.iter()))
                .map(|(key, (a, b))| key.compare_keys(a, b))
                .find(|ordering| ordering.is_ne())
                .unwrap_or(Ordering::Equal)
        });

        decorated.into_iter().map(|(_, record)| record).collect()
    }
}
