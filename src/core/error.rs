//! Typed error handling for the table engine
//!
//! Configuration-time and programming errors (an unknown property, an order
//! direction outside the defined set, use after disposal) surface as
//! [`TableError`]. End-user input problems never reach this type: unparsable
//! filter values match nothing, unknown sort tokens are ignored and page
//! indices are clamped.
//!
//! # Example
//!
//! ```rust,ignore
//! use this_table::prelude::*;
//!
//! match provider.current_page_rows() {
//!     Ok(rows) => render(rows),
//!     Err(TableError::PropertyNotFound { property, .. }) => {
//!         eprintln!("Column '{}' is not backed by a record property", property);
//!     }
//!     Err(e) => eprintln!("Other error: {}", e),
//! }
//! ```

use serde::Serialize;
use thiserror::Error;

/// Result alias used by every fallible engine operation
pub type TableResult<T> = std::result::Result<T, TableError>;

/// The main error type of the engine
#[derive(Debug, Error)]
pub enum TableError {
    /// A filter or order references a property the record type does not have
    #[error("Type '{type_name}' has no property '{property}'")]
    PropertyNotFound {
        type_name: &'static str,
        property: String,
    },

    /// An order direction outside `Ascending` / `Descending`
    #[error("Invalid order direction: '{value}'")]
    InvalidOrderDirection { value: String },

    /// The data provider has already been disposed
    #[error("Data provider has been disposed")]
    Disposed,

    /// Table or provider configuration is invalid
    #[error(transparent)]
    Config(#[from] ConfigError),
}

/// Errors related to building or loading a table configuration
#[derive(Debug, Error)]
pub enum ConfigError {
    /// A table was built without a data source
    #[error("Data source has not been configured; call with_data_source before build")]
    MissingDataSource,

    /// Page size must be strictly positive and within the configured maximum
    #[error("Invalid page size {value}: {message}")]
    InvalidPageSize { value: usize, message: String },

    /// Failed to parse a configuration document
    #[error("Failed to parse config: {message}")]
    Parse { message: String },
}

/// Error response structure for host frameworks
#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    /// Error code for programmatic handling
    pub code: String,
    /// Human-readable error message
    pub message: String,
    /// Optional additional details
    #[serde(skip_serializing_if = "Option::is_none")]
    pub details: Option<serde_json::Value>,
}

impl TableError {
    /// Get the error code for this error
    pub fn error_code(&self) -> &'static str {
        match self {
            TableError::PropertyNotFound { .. } => "PROPERTY_NOT_FOUND",
            TableError::InvalidOrderDirection { .. } => "INVALID_ORDER_DIRECTION",
            TableError::Disposed => "PROVIDER_DISPOSED",
            TableError::Config(_) => "CONFIG_ERROR",
        }
    }

    /// Convert to an error response
    pub fn to_response(&self) -> ErrorResponse {
        ErrorResponse {
            code: self.error_code().to_string(),
            message: self.to_string(),
            details: self.details(),
        }
    }

    fn details(&self) -> Option<serde_json::Value> {
        match self {
            TableError::PropertyNotFound {
                type_name,
                property,
            } => Some(serde_json::json!({
                "type_name": type_name,
                "property": property
            })),
            TableError::InvalidOrderDirection { value } => {
                Some(serde_json::json!({ "value": value }))
            }
            TableError::Config(ConfigError::InvalidPageSize { value, .. }) => {
                Some(serde_json::json!({ "page_size": value }))
            }
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_property_not_found_message() {
        let err = TableError::PropertyNotFound {
            type_name: "Person",
            property: "Surname".to_string(),
        };
        assert_eq!(err.to_string(), "Type 'Person' has no property 'Surname'");
        assert_eq!(err.error_code(), "PROPERTY_NOT_FOUND");
    }

    #[test]
    fn test_config_error_converts_into_table_error() {
        let err: TableError = ConfigError::MissingDataSource.into();
        assert!(matches!(
            err,
            TableError::Config(ConfigError::MissingDataSource)
        ));
        assert_eq!(err.error_code(), "CONFIG_ERROR");
    }

    #[test]
    fn test_response_carries_details() {
        let err = TableError::PropertyNotFound {
            type_name: "Person",
            property: "Surname".to_string(),
        };
        let response = err.to_response();
        assert_eq!(response.code, "PROPERTY_NOT_FOUND");
        let details = response.details.expect("details should be present");
        assert_eq!(details["property"], "Surname");
    }

    #[test]
    fn test_disposed_response_has_no_details() {
        let response = TableError::Disposed.to_response();
        assert_eq!(response.code, "PROVIDER_DISPOSED");
        assert!(response.details.is_none());

        let json = serde_json::to_value(&response).expect("serialize should succeed");
        assert!(json.get("details").is_none());
    }
}
