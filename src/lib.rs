//! # This-Table
//!
//! A generic filter, sort and paginate engine for tabular views in Rust.
//!
//! ## Features
//!
//! - **Property Registry**: Records expose named, typed properties through a macro
//! - **Type-Aware Filters**: Text matches by substring, numbers and booleans by value
//! - **Stable Multi-Key Ordering**: Ties keep their input order
//! - **Recompute On Read**: Every read reflects the configuration as it is now
//! - **Row Lifecycle**: Superseded rows are released exactly once
//! - **Table Coordinator**: Page, filter and sort input with graceful clamping
//! - **Configuration-Based**: Describe tables via YAML configuration
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use this_table::prelude::*;
//!
//! struct Person {
//!     name: String,
//!     age: u32,
//! }
//!
//! impl_record!(Person, {
//!     "Name" => name,
//!     "Age" => age,
//! });
//!
//! let mut table = DataTableBuilder::new()
//!     .with_data_source(people, |p: &Person| p.name.clone())
//!     .with_columns(|columns| {
//!         columns.add_column_with("Name", |c| {
//!             c.sortable(true).filterable(true);
//!         });
//!     })
//!     .build()?;
//!
//! table.set_column_filter("Name", "Ann")?;
//! table.set_column_sort("Name", "desc")?;
//! table.set_page_index(2)?;
//!
//! for row in table.rows() {
//!     println!("{row}");
//! }
//! ```

pub mod config;
pub mod core;
pub mod provider;
pub mod records;
pub mod table;

/// Re-exports of commonly used types and traits
pub mod prelude {
    // === Core ===
    pub use crate::core::{
        accessor::{Accessor, PropertyRegistry, Record, resolve},
        comparator::{ChainedComparator, OrderDirection, PropertyComparator, build_comparator},
        error::{ConfigError, ErrorResponse, TableError, TableResult},
        field::{FieldKind, FieldType, FieldValue},
        filter_order::{Filter, FilterOrderConfiguration, Order},
        filter_sorter::{FilterSorter, PropertyFilterSorter},
        pagination::{DEFAULT_PAGE_SIZE, PageInfo, PaginationConfiguration, pages_count},
        paginator::{Paginator, WindowPaginator},
        predicate::{Predicate, PropertyPredicate, build_predicate},
        source::DataSource,
    };

    // === Macros ===
    pub use crate::impl_record;

    // === Provider ===
    pub use crate::provider::{
        DataProvider, DataProviderBuilder, FilteredDataProvider, Release, ReleaseFn,
    };

    // === Table ===
    pub use crate::table::{
        ColumnBuilder, DEFAULT_MAX_PAGE_SIZE, DataColumnBuilder, DataTable, DataTableBuilder,
        DataTableColumn, PageCache, PageLoadedFn, PageSlot, PageSnapshot, SortToken,
    };

    // === Config ===
    pub use crate::config::TableConfig;

    // === External dependencies ===
    pub use anyhow::Result;
    pub use chrono::{DateTime, Utc};
    pub use serde::{Deserialize, Serialize};
    pub use uuid::Uuid;
}
