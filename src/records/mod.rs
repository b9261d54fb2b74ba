//! Macros for registering record properties

pub mod macros;
