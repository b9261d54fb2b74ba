//! Core module containing the filter, order and pagination building blocks

pub mod accessor;
pub mod comparator;
pub mod error;
pub mod field;
pub mod filter_order;
pub mod filter_sorter;
pub mod pagination;
pub mod paginator;
pub mod predicate;
pub mod source;

pub use accessor::{Accessor, PropertyRegistry, Record, resolve};
pub use comparator::{ChainedComparator, OrderDirection, PropertyComparator, build_comparator};
pub use error::{ConfigError, ErrorResponse, TableError, TableResult};
pub use field::{FieldKind, FieldType, FieldValue};
pub use filter_order::{Filter, FilterOrderConfiguration, Order};
pub use filter_sorter::{FilterSorter, PropertyFilterSorter};
pub use pagination::{DEFAULT_PAGE_SIZE, PageInfo, PaginationConfiguration, pages_count};
pub use paginator::{Paginator, WindowPaginator};
pub use predicate::{Predicate, PropertyPredicate, build_predicate};
pub use source::DataSource;
