//! Property name to typed accessor resolution
//!
//! Each record type registers its readable properties once, in a
//! [`PropertyRegistry`] held behind a static. Filters and orders resolve
//! property names against that registry instead of inspecting records at
//! runtime, so resolving a name is a single map lookup.

use crate::core::error::{TableError, TableResult};
use crate::core::field::{FieldKind, FieldType, FieldValue};
use indexmap::IndexMap;
use std::fmt;

type Getter<T> = Box<dyn Fn(&T) -> FieldValue + Send + Sync>;

/// Typed getter for one property of `T`
pub struct Accessor<T> {
    name: String,
    kind: FieldKind,
    getter: Getter<T>,
}

impl<T: 'static> Accessor<T> {
    /// Create an accessor from a getter returning any [`FieldType`]
    pub fn new<V, F>(name: impl Into<String>, getter: F) -> Self
    where
        V: FieldType + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        Self {
            name: name.into(),
            kind: V::KIND,
            getter: Box::new(move |record| getter(record).into_field_value()),
        }
    }
}

impl<T> Accessor<T> {
    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn kind(&self) -> FieldKind {
        self.kind
    }

    /// Read the property from a record
    pub fn get(&self, record: &T) -> FieldValue {
        (self.getter)(record)
    }
}

impl<T> fmt::Debug for Accessor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Accessor")
            .field("name", &self.name)
            .field("kind", &self.kind)
            .finish()
    }
}

/// The readable properties of a record type, in registration order
pub struct PropertyRegistry<T> {
    type_name: &'static str,
    accessors: IndexMap<String, Accessor<T>>,
}

impl<T> PropertyRegistry<T> {
    /// Create an empty registry for `T`
    pub fn new() -> Self {
        Self {
            type_name: std::any::type_name::<T>(),
            accessors: IndexMap::new(),
        }
    }

    /// Register a property, replacing any previous one with the same name
    pub fn with<V, F>(mut self, name: &str, getter: F) -> Self
    where
        T: 'static,
        V: FieldType + 'static,
        F: Fn(&T) -> V + Send + Sync + 'static,
    {
        self.accessors
            .insert(name.to_string(), Accessor::new(name, getter));
        self
    }

    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    pub fn get(&self, name: &str) -> Option<&Accessor<T>> {
        self.accessors.get(name)
    }

    /// Resolve a property name, failing with `PropertyNotFound`
    pub fn resolve(&self, name: &str) -> TableResult<&Accessor<T>> {
        self.get(name).ok_or_else(|| TableError::PropertyNotFound {
            type_name: self.type_name,
            property: name.to_string(),
        })
    }

    /// Property names in registration order
    pub fn names(&self) -> impl Iterator<Item = &str> {
        self.accessors.keys().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.accessors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.accessors.is_empty()
    }
}

impl<T> Default for PropertyRegistry<T> {
    fn default() -> Self {
        Self::new()
    }
}

/// A record type whose properties can be addressed by name
///
/// Usually implemented with [`impl_record!`](crate::impl_record), which
/// builds the registry lazily on first use and keeps it for the lifetime of
/// the process.
pub trait Record: Sized + 'static {
    fn properties() -> &'static PropertyRegistry<Self>;
}

/// Resolve `property` on record type `T`
pub fn resolve<T: Record>(property: &str) -> TableResult<&'static Accessor<T>> {
    T::properties().resolve(property)
}
