//! Macros for reducing boilerplate when exposing record properties
//!
//! These macros generate the [`Record`](crate::core::accessor::Record)
//! implementation that filters and orders resolve property names against.

/// Implement `Record` for a struct by listing its addressable fields
///
/// Each entry maps a public property name to a struct field. The field type
/// must implement [`FieldType`](crate::core::field::FieldType); the field is
/// cloned on every read.
///
/// # Example
///
/// ```rust,ignore
/// use this_table::prelude::*;
///
/// struct Person {
///     name: String,
///     age: i32,
/// }
///
/// impl_record!(Person, {
///     "Name" => name,
///     "Age" => age,
/// });
///
/// let accessor = resolve::<Person>("Name")?;
/// ```
#[macro_export]
macro_rules! impl_record {
    (
        $type:ty,
        {
            $( $property:literal => $field:ident ),* $(,)?
        }
    ) => {
        impl $crate::core::accessor::Record for $type {
            fn properties() -> &'static $crate::core::accessor::PropertyRegistry<Self> {
                use std::sync::OnceLock;
                static REGISTRY: OnceLock<$crate::core::accessor::PropertyRegistry<$type>> =
                    OnceLock::new();
                REGISTRY.get_or_init(|| {
                    $crate::core::accessor::PropertyRegistry::<$type>::new()
                        $( .with($property, |record: &$type| record.$field.clone()) )*
                })
            }
        }
    };
}
