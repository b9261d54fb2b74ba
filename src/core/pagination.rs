//! Pagination configuration and metadata

use serde::{Deserialize, Serialize};

/// Page size used when none is configured
pub const DEFAULT_PAGE_SIZE: usize = 20;

/// Window geometry of the current page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PaginationConfiguration {
    /// Number of rows per page
    pub page_size: usize,

    /// Zero-based index of the current page
    #[serde(default)]
    pub current_page_index: usize,
}

impl PaginationConfiguration {
    pub fn new(page_size: usize, current_page_index: usize) -> Self {
        Self {
            page_size,
            current_page_index,
        }
    }

    /// Number of records before the current page
    pub fn skip(&self) -> usize {
        self.page_size.saturating_mul(self.current_page_index)
    }

    /// Number of pages needed to show `total_rows`
    pub fn pages_count(&self, total_rows: usize) -> usize {
        pages_count(total_rows, self.page_size)
    }
}

impl Default for PaginationConfiguration {
    fn default() -> Self {
        Self::new(DEFAULT_PAGE_SIZE, 0)
    }
}

/// `ceil(total_rows / page_size)`, zero when the page size is zero
pub fn pages_count(total_rows: usize, page_size: usize) -> usize {
    if page_size == 0 {
        0
    } else {
        total_rows.div_ceil(page_size)
    }
}

/// Pagination metadata published after every recompute
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageInfo {
    /// Current page index (starts at 0)
    pub page_index: usize,

    /// Number of rows per page
    pub page_size: usize,

    /// Number of rows on the current page
    pub page_rows: usize,

    /// Total number of rows (after filters)
    pub total_rows: usize,

    /// Total number of pages
    pub pages_count: usize,

    /// Whether there is a next page
    pub has_next: bool,

    /// Whether there is a previous page
    pub has_prev: bool,
}

impl PageInfo {
    pub fn new(pagination: &PaginationConfiguration, page_rows: usize, total_rows: usize) -> Self {
        let start = pagination.skip();

        Self {
            page_index: pagination.current_page_index,
            page_size: pagination.page_size,
            page_rows,
            total_rows,
            pages_count: pagination.pages_count(total_rows),
            has_next: start.saturating_add(pagination.page_size) < total_rows,
            has_prev: pagination.current_page_index > 0,
        }
    }
}
