//! Backing record sequences

use std::sync::Arc;

/// An ordered sequence of backing records owned by the caller
///
/// The engine only ever reads records through this trait; it never mutates
/// them or takes ownership of individual records.
pub trait DataSource<T> {
    /// Iterate the records in their natural order
    fn records(&self) -> Box<dyn Iterator<Item = &T> + '_>;
}

impl<T> DataSource<T> for Vec<T> {
    fn records(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> DataSource<T> for Box<[T]> {
    fn records(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> DataSource<T> for Arc<[T]> {
    fn records(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

impl<T> DataSource<T> for Arc<Vec<T>> {
    fn records(&self) -> Box<dyn Iterator<Item = &T> + '_> {
        Box::new(self.iter())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_shared_source_iterates_in_order() {
        let shared: Arc<[u32]> = Arc::from(vec![3, 1, 2]);
        let seen: Vec<u32> = shared.records().copied().collect();
        assert_eq!(seen, vec![3, 1, 2]);
    }
}
