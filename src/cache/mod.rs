//! Cache Module
//!
//! Bounded in-memory cache of response bodies with LRU eviction.

mod entry;
mod lru;
mod stats;
mod store;


// Re-export public types
pub use entry::CacheEntry;
pub use lru::LruTracker;
pub use stats::CacheStats;
pub use store::ResponseCache;

// == Public Constants ==
/// Default number of responses kept in the request cache
pub const DEFAULT_CAPACITY: usize = 100;
