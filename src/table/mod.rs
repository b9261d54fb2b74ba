//! Table state coordination: columns, page cache and user input handling

pub mod builder;
pub mod column;
pub mod data_table;
pub mod page_cache;

pub use builder::{DEFAULT_MAX_PAGE_SIZE, DataTableBuilder};
pub use column::{ColumnBuilder, DataColumnBuilder, DataTableColumn, SortToken};
pub use data_table::{DataTable, PageLoadedFn};
pub use page_cache::{PageCache, PageSlot, PageSnapshot};
