//! Filter and order configuration

use crate::core::comparator::OrderDirection;
use serde::{Deserialize, Serialize};

/// Describes a user intention to filter the data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Filter {
    /// Property by which the user wishes to filter the data
    pub property_name: String,

    /// User-supplied value of the filter
    pub value: String,
}

impl Filter {
    pub fn new(property_name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            property_name: property_name.into(),
            value: value.into(),
        }
    }
}

/// Describes a user intention to order the data
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Order {
    /// Property by which the user wishes to order the data
    pub property_name: String,

    /// The direction of ordering
    pub direction: OrderDirection,
}

impl Order {
    pub fn new(property_name: impl Into<String>, direction: OrderDirection) -> Self {
        Self {
            property_name: property_name.into(),
            direction,
        }
    }
}

/// Combines filtering and ordering of tabular data
///
/// Filters always combine with logical AND. [`add_filter`](Self::add_filter)
/// keeps duplicates for the same property; the per-column operations
/// ([`add_or_update_filter`](Self::add_or_update_filter)) keep at most one
/// filter per property.
///
/// Ordering is a list of primary, secondary, ... keys. The single-order
/// operations ([`add_or_update_order`](Self::add_or_update_order),
/// [`remove_order`](Self::remove_order)) keep at most one order active.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterOrderConfiguration {
    #[serde(default)]
    filters: Vec<Filter>,

    #[serde(default)]
    ordering: Vec<Order>,
}

impl FilterOrderConfiguration {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn filters(&self) -> &[Filter] {
        &self.filters
    }

    pub fn ordering(&self) -> &[Order] {
        &self.ordering
    }

    /// The active order when the single-order operations are used
    pub fn order(&self) -> Option<&Order> {
        self.ordering.first()
    }

    /// Filter value currently set for `property_name`
    pub fn filter_value(&self, property_name: &str) -> Option<&str> {
        self.filters
            .iter()
            .find(|f| f.property_name == property_name)
            .map(|f| f.value.as_str())
    }

    /// Append a filter, even if one already exists for the same property
    pub fn add_filter(&mut self, filter: Filter) {
        self.filters.push(filter);
    }

    /// Set the filter for `property_name`
    ///
    /// An existing filter has its value overwritten. An empty value removes
    /// the filter: a cleared filter box means no filter on that column.
    pub fn add_or_update_filter(&mut self, property_name: &str, value: &str) {
        if value.is_empty() {
            self.remove_filter(property_name);
            return;
        }

        match self
            .filters
            .iter_mut()
            .find(|f| f.property_name == property_name)
        {
            Some(filter) => filter.value = value.to_string(),
            None => self.filters.push(Filter::new(property_name, value)),
        }
    }

    /// Remove every filter on `property_name`
    pub fn remove_filter(&mut self, property_name: &str) {
        self.filters.retain(|f| f.property_name != property_name);
    }

    pub fn clear_filters(&mut self) {
        self.filters.clear();
    }

    /// Append a lower-priority order key
    pub fn add_order(&mut self, order: Order) {
        self.ordering.push(order);
    }

    /// Replace the active order with `property_name` / `direction`
    pub fn add_or_update_order(&mut self, property_name: &str, direction: OrderDirection) {
        self.ordering.clear();
        self.ordering.push(Order::new(property_name, direction));
    }

    /// Remove all ordering
    pub fn remove_order(&mut self) {
        self.ordering.clear();
    }

    /// Remove ordering keys on `property_name`
    pub fn remove_order_for(&mut self, property_name: &str) {
        self.ordering.retain(|o| o.property_name != property_name);
    }
}
