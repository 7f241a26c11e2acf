//! Response Cache Module
//!
//! Bounded store of response bodies keyed by request URL, evicting the
//! least recently used URL when full.

use std::collections::HashMap;

use serde_json::Value;
use tracing::debug;

use crate::cache::{CacheEntry, CacheStats, LruTracker};

// == Response Cache ==
#[derive(Debug)]
pub struct ResponseCache {
    /// Cached bodies by request URL
    entries: HashMap<String, CacheEntry>,
    /// Recency order of cached URLs
    lru: LruTracker,
    stats: CacheStats,
    capacity: usize,
}

impl ResponseCache {
    // == Constructor ==
    /// Creates an empty cache holding at most `capacity` responses.
    ///
    /// A capacity of zero is treated as one.
    pub fn new(capacity: usize) -> Self {
        Self {
            entries: HashMap::new(),
            lru: LruTracker::new(),
            stats: CacheStats::new(),
            capacity: capacity.max(1),
        }
    }

    // == Get ==
    /// Returns the cached body for `url` and marks it most recently used.
    pub fn get(&mut self, url: &str) -> Option<Value> {
        match self.entries.get(url) {
            Some(entry) => {
                debug!(url, age_ms = entry.age().num_milliseconds(), "cache hit");
                let body = entry.body.clone();
                self.stats.record_hit();
                self.lru.touch(url);
                Some(body)
            }
            None => {
                debug!(url, "cache miss");
                self.stats.record_miss();
                None
            }
        }
    }

    // == Insert ==
    /// Stores `body` under `url`, evicting the least recently used URL if
    /// the cache is full and `url` is new.
    pub fn insert(&mut self, url: &str, body: Value) {
        if !self.entries.contains_key(url) && self.entries.len() >= self.capacity {
            if let Some(evicted) = self.lru.evict_oldest() {
                debug!(url = %evicted, "evicting least recently used response");
                self.entries.remove(&evicted);
                self.stats.record_eviction();
            }
        }

        self.entries.insert(url.to_string(), CacheEntry::new(body));
        self.lru.touch(url);
        self.stats.set_total_entries(self.entries.len());
    }

    // == Clear ==
    /// Drops every cached response. Returns how many were dropped.
    pub fn clear(&mut self) -> usize {
        let count = self.entries.len();
        self.entries.clear();
        self.lru.clear();
        self.stats.record_invalidation();
        self.stats.set_total_entries(0);
        count
    }

    pub fn contains(&self, url: &str) -> bool {
        self.entries.contains_key(url)
    }

    pub fn stats(&self) -> CacheStats {
        let mut stats = self.stats.clone();
        stats.set_total_entries(self.entries.len());
        stats
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }
}
