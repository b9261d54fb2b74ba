//! Page slicing and row conversion

use crate::core::pagination::PaginationConfiguration;

/// Slices a filtered and ordered record sequence into a page of rows
///
/// Infrastructure code normally uses [`WindowPaginator`]; the trait exists so
/// a provider can be given a different paging strategy.
pub trait Paginator<T, V> {
    /// Convert the records of the current page
    fn get_rows(
        &self,
        data: &[&T],
        pagination: &PaginationConfiguration,
        convert: &dyn Fn(&T) -> V,
    ) -> Vec<V>;

    /// Count the records without converting any of them
    fn get_total_rows(&self, data: &[&T]) -> usize;
}

/// Skip `page_size * current_page_index`, take `page_size`
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowPaginator;

impl<T, V> Paginator<T, V> for WindowPaginator {
    fn get_rows(
        &self,
        data: &[&T],
        pagination: &PaginationConfiguration,
        convert: &dyn Fn(&T) -> V,
    ) -> Vec<V> {
        data.iter()
            .skip(pagination.skip())
            .take(pagination.page_size)
            .map(|record| convert(record))
            .collect()
    }

    fn get_total_rows(&self, data: &[&T]) -> usize {
        data.len()
    }
}
