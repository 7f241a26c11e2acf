//! LRU Tracker Module
//!
//! Tracks request URLs by recency for cache eviction.

use std::collections::VecDeque;

// == LRU Tracker ==
/// Tracks access order of cached URLs.
///
/// Front of the deque is the most recently used URL, back is the least.
#[derive(Debug, Default)]
pub struct LruTracker {
    order: VecDeque<String>,
}

impl LruTracker {
    // == Constructor ==
    /// Creates a new empty LRU tracker.
    pub fn new() -> Self {
        Self {
            order: VecDeque::new(),
        }
    }

    // == Touch ==
    /// Marks a URL as most recently used, inserting it if absent.
    pub fn touch(&mut self, url: &str) {
        if let Some(pos) = self.order.iter().position(|u| u == url) {
            if pos == 0 {
                return;
            }
            if let Some(existing) = self.order.remove(pos) {
                self.order.push_front(existing);
            }
        } else {
            self.order.push_front(url.to_string());
        }
    }

    // == Evict Oldest ==
    /// Removes and returns the least recently used URL.
    pub fn evict_oldest(&mut self) -> Option<String> {
        self.order.pop_back()
    }

    // == Clear ==
    /// Forgets every tracked URL.
    pub fn clear(&mut self) {
        self.order.clear();
    }

    pub fn len(&self) -> usize {
        self.order.len()
    }

    pub fn is_empty(&self) -> bool {
        self.order.is_empty()
    }
}
