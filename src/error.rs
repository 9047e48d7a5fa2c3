//! Error types for the caching abstraction
//!
//! Provides unified error handling using thiserror.
//!
//! A missing key is deliberately NOT an error: `get` returns
//! `Result<Option<String>>` so that "not found" can never be confused with a
//! stored value that happens to be empty or falsy.

use thiserror::Error;

// == Cache Error Enum ==
/// Unified error type for cache drivers and the stack composite.
#[derive(Error, Debug)]
pub enum CacheError {
    /// Invalid driver or stack configuration (empty driver list, unknown
    /// driver kind, malformed parameter bag). Fatal at construction.
    #[error("Invalid configuration: {0}")]
    Configuration(String),

    /// Invalid request data (empty key, oversized key or value)
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// A backend driver's I/O or logic failure
    #[error("Backend failure in driver '{driver}': {message}")]
    Backend {
        /// Name of the failing driver
        driver: String,
        /// Description of the failure
        message: String,
    },
}

impl CacheError {
    /// Shorthand for a backend failure attributed to a named driver.
    pub fn backend(driver: impl Into<String>, message: impl Into<String>) -> Self {
        CacheError::Backend {
            driver: driver.into(),
            message: message.into(),
        }
    }
}

// == Result Type Alias ==
/// Convenience Result type for cache operations.
pub type Result<T> = std::result::Result<T, CacheError>;
