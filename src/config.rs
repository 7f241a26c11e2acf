//! Configuration Module
//!
//! Handles loading client configuration from environment variables.

use std::env;

/// Client configuration parameters.
///
/// All values can be configured via environment variables with sensible defaults.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL that request paths are resolved against. Paths nest under
    /// any path the base carries: `http://host/archer` + `/api/files` is
    /// `http://host/archer/api/files`.
    pub base_url: String,
    /// Maximum number of responses the request cache can hold
    pub cache_capacity: usize,
    /// Width of the rolling error window in seconds
    pub error_window: u64,
    /// Artificial delay before each cache lookup, in milliseconds
    pub request_delay_ms: u64,
    /// Background prune task interval in seconds
    pub prune_interval: u64,
}

impl Config {
    /// Creates a new Config by loading values from environment variables.
    ///
    /// # Environment Variables
    /// - `API_BASE_URL` - Server base URL (default: http://localhost:2724)
    /// - `CACHE_CAPACITY` - Maximum cached responses (default: 100)
    /// - `ERROR_WINDOW_SECS` - Rolling error window in seconds (default: 60)
    /// - `REQUEST_DELAY_MS` - Delay before cache lookup (default: 1)
    /// - `PRUNE_INTERVAL` - Prune frequency in seconds (default: 1)
    pub fn from_env() -> Self {
        let defaults = Self::default();
        Self {
            base_url: env::var("API_BASE_URL").unwrap_or(defaults.base_url),
            cache_capacity: env::var("CACHE_CAPACITY")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.cache_capacity),
            error_window: env::var("ERROR_WINDOW_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.error_window),
            request_delay_ms: env::var("REQUEST_DELAY_MS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.request_delay_ms),
            prune_interval: env::var("PRUNE_INTERVAL")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(defaults.prune_interval),
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:2724".to_string(),
            cache_capacity: crate::cache::DEFAULT_CAPACITY,
            error_window: crate::api::DEFAULT_WINDOW_SECS,
            request_delay_ms: 1,
            prune_interval: 1,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_default() {
        let config = Config::default();
        assert_eq!(config.base_url, "http://localhost:2724");
        assert_eq!(config.cache_capacity, 100);
        assert_eq!(config.error_window, 60);
        assert_eq!(config.request_delay_ms, 1);
        assert_eq!(config.prune_interval, 1);
    }

    #[test]
    fn test_config_from_env_defaults() {
        // Clear any existing env vars to test defaults
        env::remove_var("API_BASE_URL");
        env::remove_var("CACHE_CAPACITY");
        env::remove_var("ERROR_WINDOW_SECS");
        env::remove_var("REQUEST_DELAY_MS");
        env::remove_var("PRUNE_INTERVAL");

        let config = Config::from_env();
        assert_eq!(config.base_url, "http://localhost:2724");
        assert_eq!(config.cache_capacity, 100);
        assert_eq!(config.error_window, 60);
        assert_eq!(config.request_delay_ms, 1);
        assert_eq!(config.prune_interval, 1);
    }
}
