//! Outcome Log
//!
//! Rolling window of request outcomes and the error summary rendered from it.

use std::sync::Arc;

use chrono::{DateTime, Duration, Local};
use tracing::debug;

use crate::clock::Clock;

/// Default width of the rolling window in seconds
pub const DEFAULT_WINDOW_SECS: u64 = 60;

/// Widest window a `chrono::Duration` can represent, in seconds
pub const MAX_WINDOW_SECS: u64 = i64::MAX as u64 / 1000;

// == Outcome Record ==
/// Result of one completed request.
#[derive(Debug, Clone, PartialEq)]
pub struct OutcomeRecord {
    /// Formatted failure message, `None` on success
    pub error: Option<String>,
    pub timestamp: DateTime<Local>,
}

impl OutcomeRecord {
    pub fn is_failure(&self) -> bool {
        self.error.is_some()
    }
}

// == Outcome Log ==
/// Outcomes from the trailing window, oldest first.
#[derive(Debug)]
pub struct OutcomeLog {
    records: Vec<OutcomeRecord>,
    window: Duration,
    clock: Arc<dyn Clock>,
    /// Cached rendering of the failures in `records`
    summary: String,
}

impl OutcomeLog {
    /// Creates an empty log. Windows wider than [`MAX_WINDOW_SECS`] are
    /// clamped to it.
    pub fn new(window_secs: u64, clock: Arc<dyn Clock>) -> Self {
        Self {
            records: Vec::new(),
            window: Duration::seconds(window_secs.min(MAX_WINDOW_SECS) as i64),
            clock,
            summary: String::new(),
        }
    }

    // == Record ==
    pub fn record_success(&mut self) {
        self.record(None);
    }

    pub fn record_failure(&mut self, message: impl Into<String>) {
        self.record(Some(message.into()));
    }

    /// Appends an outcome stamped with the clock's current time, then
    /// prunes relative to that time.
    fn record(&mut self, error: Option<String>) {
        let now = self.clock.now();
        self.records.push(OutcomeRecord {
            error,
            timestamp: now,
        });
        self.prune_at(now);
    }

    // == Prune ==
    /// Drops outcomes that fell out of the window as of the clock's
    /// current time. Returns how many were dropped.
    pub fn prune(&mut self) -> usize {
        let now = self.clock.now();
        self.prune_at(now)
    }

    fn prune_at(&mut self, now: DateTime<Local>) -> usize {
        let before = self.records.len();
        // A window reaching past the earliest representable time keeps everything
        if let Some(limit) = now.checked_sub_signed(self.window) {
            self.records.retain(|r| r.timestamp > limit);
        }
        let removed = before - self.records.len();
        if removed > 0 {
            debug!(removed, "pruned outcomes outside the error window");
        }

        self.summary = self
            .records
            .iter()
            .filter_map(|r| {
                r.error
                    .as_ref()
                    .map(|e| format!("[{}] {}", r.timestamp.format("%H:%M:%S"), e))
            })
            .collect::<Vec<_>>()
            .join("\n");

        removed
    }

    // == Accessors ==
    /// Newline-joined `[HH:MM:SS] message` lines, one per failure in the window.
    pub fn summary(&self) -> &str {
        &self.summary
    }

    pub fn records(&self) -> &[OutcomeRecord] {
        &self.records
    }

    pub fn failure_count(&self) -> usize {
        self.records.iter().filter(|r| r.is_failure()).count()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}
