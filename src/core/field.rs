//! Field value types exposed by record properties

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use uuid::Uuid;

/// A polymorphic field value read from a record property
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Integer(i64),
    Float(f64),
    Boolean(bool),
    Uuid(Uuid),
    DateTime(DateTime<Utc>),
    Null,
}

/// The declared type of a record property
///
/// The kind is fixed per property at registration time, so a property keeps
/// its kind even when a particular record holds [`FieldValue::Null`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum FieldKind {
    Text,
    Integer,
    /// Single-precision float, compared at `f32` precision
    Float32,
    Float64,
    Boolean,
    Uuid,
    DateTime,
}

impl FieldValue {
    /// Get the value as a string if possible
    pub fn as_string(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the value as an integer if possible
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            FieldValue::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Check if the value is null
    pub fn is_null(&self) -> bool {
        matches!(self, FieldValue::Null)
    }

    fn rank(&self) -> u8 {
        match self {
            FieldValue::Null => 0,
            FieldValue::Boolean(_) => 1,
            FieldValue::Integer(_) => 2,
            FieldValue::Float(_) => 3,
            FieldValue::String(_) => 4,
            FieldValue::Uuid(_) => 5,
            FieldValue::DateTime(_) => 6,
        }
    }

    /// Natural ordering of two values
    ///
    /// Null sorts before everything else, floats use IEEE total ordering and
    /// values of different variants order by variant.
    pub fn total_cmp(&self, other: &FieldValue) -> Ordering {
        match (self, other) {
            (FieldValue::String(a), FieldValue::String(b)) => a.cmp(b),
            (FieldValue::Integer(a), FieldValue::Integer(b)) => a.cmp(b),
            (FieldValue::Float(a), FieldValue::Float(b)) => a.total_cmp(b),
            (FieldValue::Boolean(a), FieldValue::Boolean(b)) => a.cmp(b),
            (FieldValue::Uuid(a), FieldValue::Uuid(b)) => a.cmp(b),
            (FieldValue::DateTime(a), FieldValue::DateTime(b)) => a.cmp(b),
            _ => self.rank().cmp(&other.rank()),
        }
    }
}

/// Rust types that can back a record property
pub trait FieldType {
    /// Kind reported by properties of this type
    const KIND: FieldKind;

    fn into_field_value(self) -> FieldValue;
}

impl FieldType for String {
    const KIND: FieldKind = FieldKind::Text;

    fn into_field_value(self) -> FieldValue {
        FieldValue::String(self)
    }
}

impl FieldType for &'static str {
    const KIND: FieldKind = FieldKind::Text;

    fn into_field_value(self) -> FieldValue {
        FieldValue::String(self.to_string())
    }
}

macro_rules! integer_field_type {
    ($($ty:ty),*) => {
        $(
            impl FieldType for $ty {
                const KIND: FieldKind = FieldKind::Integer;

                fn into_field_value(self) -> FieldValue {
                    FieldValue::Integer(i64::from(self))
                }
            }
        )*
    };
}

integer_field_type!(i8, i16, i32, i64, u8, u16, u32);

impl FieldType for f32 {
    const KIND: FieldKind = FieldKind::Float32;

    fn into_field_value(self) -> FieldValue {
        FieldValue::Float(f64::from(self))
    }
}

impl FieldType for f64 {
    const KIND: FieldKind = FieldKind::Float64;

    fn into_field_value(self) -> FieldValue {
        FieldValue::Float(self)
    }
}

impl FieldType for bool {
    const KIND: FieldKind = FieldKind::Boolean;

    fn into_field_value(self) -> FieldValue {
        FieldValue::Boolean(self)
    }
}

impl FieldType for Uuid {
    const KIND: FieldKind = FieldKind::Uuid;

    fn into_field_value(self) -> FieldValue {
        FieldValue::Uuid(self)
    }
}

impl FieldType for DateTime<Utc> {
    const KIND: FieldKind = FieldKind::DateTime;

    fn into_field_value(self) -> FieldValue {
        FieldValue::DateTime(self)
    }
}

impl<V: FieldType> FieldType for Option<V> {
    const KIND: FieldKind = V::KIND;

    fn into_field_value(self) -> FieldValue {
        self.map_or(FieldValue::Null, FieldType::into_field_value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_field_value_string() {
        let value = FieldValue::String("test".to_string());
        assert_eq!(value.as_string(), Some("test"));
        assert_eq!(value.as_integer(), None);
        assert!(!value.is_null());
    }

    #[test]
    fn test_field_value_integer() {
        let value = 42_u16.into_field_value();
        assert_eq!(value.as_integer(), Some(42));
        assert_eq!(value.as_string(), None);
    }

    #[test]
    fn test_option_keeps_inner_kind() {
        assert_eq!(<Option<i32> as FieldType>::KIND, FieldKind::Integer);
        assert!(None::<i32>.into_field_value().is_null());
        assert_eq!(Some(7_i32).into_field_value(), FieldValue::Integer(7));
    }

    #[test]
    fn test_total_cmp_same_variant() {
        let a = FieldValue::String("Ann".to_string());
        let b = FieldValue::String("Tom".to_string());
        assert_eq!(a.total_cmp(&b), Ordering::Less);
        assert_eq!(
            FieldValue::Integer(3).total_cmp(&FieldValue::Integer(3)),
            Ordering::Equal
        );
        assert_eq!(
            FieldValue::Boolean(true).total_cmp(&FieldValue::Boolean(false)),
            Ordering::Greater
        );
    }

    #[test]
    fn test_total_cmp_null_sorts_first() {
        assert_eq!(
            FieldValue::Null.total_cmp(&FieldValue::Integer(i64::MIN)),
            Ordering::Less
        );
        assert_eq!(
            FieldValue::String(String::new()).total_cmp(&FieldValue::Null),
            Ordering::Greater
        );
    }

    #[test]
    fn test_total_cmp_floats_with_nan() {
        let nan = FieldValue::Float(f64::NAN);
        let one = FieldValue::Float(1.0);
        assert_eq!(one.total_cmp(&nan), Ordering::Less);
        assert_eq!(nan.total_cmp(&nan), Ordering::Equal);
    }

    #[test]
    fn test_serde_roundtrip_integer() {
        let original = FieldValue::Integer(42);
        let json = serde_json::to_string(&original).expect("serialize should succeed");
        let restored: FieldValue =
            serde_json::from_str(&json).expect("deserialize should succeed");
        assert_eq!(original, restored);
    }
}
