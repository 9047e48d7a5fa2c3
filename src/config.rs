//! Configuration Module
//!
//! Handles driver defaults loaded from environment variables and the
//! descriptor types a stack is built from.

use std::env;

use serde::Deserialize;

use crate::driver::DEFAULT_LIFETIME;
use crate::error::{CacheError, Result};

// == Cache Config ==
/// Driver-level configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct CacheConfig {
    /// Default lifetime in seconds for entries stored without an explicit one
    pub default_lifetime: u64,
    /// Background purge task interval in seconds
    pub purge_interval: u64,
}

impl CacheConfig {
    /// Creates a new CacheConfig by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `CACHE_LIFETIME` - Default entry lifetime in seconds (default: 86400)
    /// - `CACHE_PURGE_INTERVAL` - Purge frequency in seconds (default: 60)
    pub fn from_env() -> Self {
        Self {
            default_lifetime: env::var("CACHE_LIFETIME")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(DEFAULT_LIFETIME),
            purge_interval: env::var("CACHE_PURGE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(60),
        }
    }
}

impl Default for CacheConfig {
    fn default() -> Self {
        Self {
            default_lifetime: DEFAULT_LIFETIME,
            purge_interval: 60,
        }
    }
}

// == Driver Spec ==
/// A single `(kind, params)` driver descriptor.
///
/// The parameter bag is opaque to the stack; each factory decodes the params
/// it understands for the given kind.
#[derive(Debug, Clone, Deserialize)]
pub struct DriverSpec {
    /// Driver kind identifier, e.g. `"memory"`
    pub kind: String,
    /// Driver-specific parameters
    #[serde(default)]
    pub params: serde_json::Value,
}

// == Stack Config ==
/// Ordered stack descriptor: drivers listed by ascending read priority,
/// with the last entry acting as the master.
#[derive(Debug, Clone, Deserialize)]
pub struct StackConfig {
    /// Member driver descriptors, in priority order
    pub drivers: Vec<DriverSpec>,
}

impl StackConfig {
    /// Parses a stack descriptor from a JSON document.
    pub fn from_json(json: &str) -> Result<Self> {
        serde_json::from_str(json)
            .map_err(|e| CacheError::Configuration(format!("Invalid stack descriptor: {}", e)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = CacheConfig::default();
        assert_eq!(config.default_lifetime, 86_400);
        assert_eq!(config.purge_interval, 60);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("CACHE_LIFETIME");
        env::remove_var("CACHE_PURGE_INTERVAL");

        let config = CacheConfig::from_env();
        assert_eq!(config.default_lifetime, 86_400);
        assert_eq!(config.purge_interval, 60);
    }

    #[test]
    fn test_stack_config_from_json() {
        let config = StackConfig::from_json(
            r#"{"drivers":[{"kind":"memory","params":{"max_entries":10}},{"kind":"memory"}]}"#,
        )
        .unwrap();

        assert_eq!(config.drivers.len(), 2);
        assert_eq!(config.drivers[0].kind, "memory");
        assert_eq!(config.drivers[0].params["max_entries"], 10);
        assert!(config.drivers[1].params.is_null());
    }

    #[test]
    fn test_stack_config_invalid_json() {
        let result = StackConfig::from_json("{not json");
        assert!(matches!(result, Err(CacheError::Configuration(_))));
    }
}
