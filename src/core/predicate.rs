//! Type-aware filter predicates
//!
//! A raw filter value is always user text. How it is interpreted depends on
//! the kind of the property it targets:
//!
//! - text properties match when their value contains the raw text
//!   (case-sensitive)
//! - integer and float properties match when the raw text parses to the same
//!   number at the property's own precision
//! - boolean properties match when the raw text is exactly `true` / `false`
//!
//! Anything that cannot be interpreted produces [`Predicate::Unsatisfiable`]:
//! the filter matches nothing instead of failing.

use crate::core::accessor::Accessor;
use crate::core::field::{FieldKind, FieldValue};

/// A value test built from one raw filter value
#[derive(Debug, Clone, PartialEq)]
pub enum Predicate {
    /// Text value contains the given substring
    Contains(String),
    /// Value equals the parsed filter value
    Equals(FieldValue),
    /// No value can match
    Unsatisfiable,
}

impl Predicate {
    /// Interpret `raw` against a property of the given kind
    pub fn build(kind: FieldKind, raw: &str) -> Self {
        match kind {
            FieldKind::Text => Predicate::Contains(raw.to_string()),
            FieldKind::Integer => raw
                .parse::<i64>()
                .map_or(Predicate::Unsatisfiable, |v| {
                    Predicate::Equals(FieldValue::Integer(v))
                }),
            // f32 values are stored widened, so widen the parsed f32 the same way
            FieldKind::Float32 => raw
                .parse::<f32>()
                .map_or(Predicate::Unsatisfiable, |v| {
                    Predicate::Equals(FieldValue::Float(f64::from(v)))
                }),
            FieldKind::Float64 => raw
                .parse::<f64>()
                .map_or(Predicate::Unsatisfiable, |v| {
                    Predicate::Equals(FieldValue::Float(v))
                }),
            FieldKind::Boolean => match raw {
                "true" => Predicate::Equals(FieldValue::Boolean(true)),
                "false" => Predicate::Equals(FieldValue::Boolean(false)),
                _ => Predicate::Unsatisfiable,
            },
            FieldKind::Uuid | FieldKind::DateTime => Predicate::Unsatisfiable,
        }
    }

    pub fn is_satisfiable(&self) -> bool {
        !matches!(self, Predicate::Unsatisfiable)
    }

    pub fn matches(&self, value: &FieldValue) -> bool {
        match self {
            Predicate::Contains(needle) => value
                .as_string()
                .is_some_and(|text| text.contains(needle.as_str())),
            Predicate::Equals(expected) => value == expected,
            Predicate::Unsatisfiable => false,
        }
    }
}

/// A predicate bound to the property it reads
#[derive(Debug)]
pub struct PropertyPredicate<'r, T> {
    accessor: &'r Accessor<T>,
    predicate: Predicate,
}

impl<T> PropertyPredicate<'_, T> {
    pub fn predicate(&self) -> &Predicate {
        &self.predicate
    }

    pub fn matches(&self, record: &T) -> bool {
        self.predicate.matches(&self.accessor.get(record))
    }
}

/// Build the predicate for `raw_value` on `accessor`'s property
pub fn build_predicate<'r, T>(
    accessor: &'r Accessor<T>,
    raw_value: &str,
) -> PropertyPredicate<'r, T> {
    PropertyPredicate {
        accessor,
        predicate: Predicate::build(accessor.kind(), raw_value),
    }
}
