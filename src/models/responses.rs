//! Response models
//!
//! Server error bodies and the client status snapshot shown to users.

use serde::{Deserialize, Serialize};

use crate::cache::CacheStats;

/// Error body the dashboard server sends with non-2xx responses.
#[derive(Debug, Clone, Deserialize)]
pub struct ErrorBody {
    #[serde(default)]
    pub error: String,
}

/// Snapshot of the client state for display.
#[derive(Debug, Clone, Serialize)]
pub struct ApiStatus {
    /// True while a request is in flight
    pub loading: bool,
    /// Failures from the trailing error window, one per line
    pub errors: String,
    pub cache: CacheStats,
    /// Share of cache lookups answered without a request
    pub hit_rate: f64,
}

impl ApiStatus {
    pub fn new(loading: bool, errors: impl Into<String>, cache: CacheStats) -> Self {
        Self {
            loading,
            errors: errors.into(),
            hit_rate: cache.hit_rate(),
            cache,
        }
    }

    pub fn has_errors(&self) -> bool {
        !self.errors.is_empty()
    }
}
