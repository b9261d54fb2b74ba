//! Data providers composing filtering, ordering, paging and row lifecycle

pub mod builder;
pub mod data_provider;
pub mod release;

pub use builder::DataProviderBuilder;
pub use data_provider::{DataProvider, FilteredDataProvider};
pub use release::{Release, ReleaseFn};
