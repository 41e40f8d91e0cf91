//! Error types for pagekit
//!
//! This module defines the error hierarchy for the entire crate.
//! All public APIs return `Result<T, Error>` where Error is defined here.

use thiserror::Error;

/// The main error type for pagekit
#[derive(Error, Debug)]
pub enum Error {
    // ============================================================================
    // Pagination Argument Errors
    // ============================================================================
    //
    // Display text is part of the public contract; callers match on it.
    #[error("You must provide a 'first' or 'last' value for pagination.")]
    MissingPageBound,

    #[error("Provide either 'first' or 'last', not both.")]
    ConflictingPageBounds,

    #[error("'first' must be a non-negative integer")]
    NegativeFirst,

    #[error("'last' must be a non-negative integer")]
    NegativeLast,

    // ============================================================================
    // Cursor Errors
    // ============================================================================
    #[error("Invalid cursor '{cursor}': {message}")]
    InvalidCursor { cursor: String, message: String },

    // ============================================================================
    // Store Errors
    // ============================================================================
    #[error("Store error: {0}")]
    Store(#[from] duckdb::Error),

    #[error("Query error: {message}")]
    Query { message: String },

    #[error("Failed to parse JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    // ============================================================================
    // Configuration Errors
    // ============================================================================
    #[error("Configuration error: {message}")]
    Config { message: String },

    #[error("Invalid config value for '{field}': {message}")]
    InvalidConfigValue { field: String, message: String },

    // ============================================================================
    // I/O Errors
    // ============================================================================
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    // ============================================================================
    // Generic Errors
    // ============================================================================
    #[error("{0}")]
    Other(String),

    #[error(transparent)]
    Anyhow(#[from] anyhow::Error),
}

impl Error {
    /// Create an invalid-cursor error
    pub fn invalid_cursor(cursor: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidCursor {
            cursor: cursor.into(),
            message: message.into(),
        }
    }

    /// Create a query error
    pub fn query(message: impl Into<String>) -> Self {
        Self::Query {
            message: message.into(),
        }
    }

    /// Create a config error
    pub fn config(message: impl Into<String>) -> Self {
        Self::Config {
            message: message.into(),
        }
    }

    /// Create an invalid config value error
    pub fn invalid_config_value(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self::InvalidConfigValue {
            field: field.into(),
            message: message.into(),
        }
    }

    /// Check if this error is an argument validation error
    pub fn is_validation(&self) -> bool {
        matches!(
            self,
            Error::MissingPageBound
                | Error::ConflictingPageBounds
                | Error::NegativeFirst
                | Error::NegativeLast
        )
    }
}

/// Result type alias for pagekit
pub type Result<T> = std::result::Result<T, Error>;

/// Extension trait for adding context to errors
pub trait ResultExt<T> {
    /// Add context to an error
    fn context(self, message: impl Into<String>) -> Result<T>;

    /// Add context with a closure (lazy evaluation)
    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T>;
}

impl<T, E: Into<Error>> ResultExt<T> for std::result::Result<T, E> {
    fn context(self, message: impl Into<String>) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", message.into(), inner))
        })
    }

    fn with_context<F: FnOnce() -> String>(self, f: F) -> Result<T> {
        self.map_err(|e| {
            let inner = e.into();
            Error::Other(format!("{}: {}", f(), inner))
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validation_error_display() {
        assert_eq!(
            Error::MissingPageBound.to_string(),
            "You must provide a 'first' or 'last' value for pagination."
        );
        assert_eq!(
            Error::ConflictingPageBounds.to_string(),
            "Provide either 'first' or 'last', not both."
        );
        assert_eq!(
            Error::NegativeFirst.to_string(),
            "'first' must be a non-negative integer"
        );
        assert_eq!(
            Error::NegativeLast.to_string(),
            "'last' must be a non-negative integer"
        );
    }

    #[test]
    fn test_error_display() {
        let err = Error::invalid_cursor("bm90aGluZw==", "missing prefix");
        assert_eq!(
            err.to_string(),
            "Invalid cursor 'bm90aGluZw==': missing prefix"
        );

        let err = Error::config("test message");
        assert_eq!(err.to_string(), "Configuration error: test message");

        let err = Error::invalid_config_value("PAGEKIT_PAGE_SIZE", "not a number");
        assert_eq!(
            err.to_string(),
            "Invalid config value for 'PAGEKIT_PAGE_SIZE': not a number"
        );
    }

    #[test]
    fn test_is_validation() {
        assert!(Error::MissingPageBound.is_validation());
        assert!(Error::ConflictingPageBounds.is_validation());
        assert!(Error::NegativeFirst.is_validation());
        assert!(Error::NegativeLast.is_validation());

        assert!(!Error::invalid_cursor("x", "y").is_validation());
        assert!(!Error::config("test").is_validation());
    }

    #[test]
    fn test_result_context() {
        let result: Result<()> = Err(Error::config("inner"));
        let with_context = result.context("outer");
        assert!(with_context
            .unwrap_err()
            .to_string()
            .contains("outer: Configuration error: inner"));
    }
}
