//! Cache Entry Module
//!
//! A cached response body and when it was fetched.

use chrono::{DateTime, Duration, Utc};
use serde_json::Value;

// == Cache Entry ==
/// Last successful response body for one request URL.
///
/// Entries carry no TTL; they leave the cache only through LRU eviction
/// or a full invalidation.
#[derive(Debug, Clone)]
pub struct CacheEntry {
    /// Response body as returned by the transport
    pub body: Value,
    /// When the body was fetched
    pub fetched_at: DateTime<Utc>,
}

impl CacheEntry {
    pub fn new(body: Value) -> Self {
        Self {
            body,
            fetched_at: Utc::now(),
        }
    }

    /// Time elapsed since the body was fetched.
    pub fn age(&self) -> Duration {
        Utc::now() - self.fetched_at
    }
}
