//! Caching API Client
//!
//! Wraps a [`Transport`] with the response cache, the outcome log and a
//! loading flag.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use std::time::Duration;

use serde_json::Value;
use tokio::sync::RwLock;
use tracing::{info, warn};

use crate::api::outcomes::OutcomeLog;
use crate::api::transport::{HttpTransport, Transport};
use crate::cache::{CacheStats, ResponseCache};
use crate::clock::SystemClock;
use crate::config::Config;
use crate::error::Result;
use crate::models::ApiStatus;

/// Sets the loading flag on creation and clears it on drop, so the flag
/// drops back even when the request future errors or is cancelled.
struct LoadingGuard<'a>(&'a AtomicBool);

impl<'a> LoadingGuard<'a> {
    fn start(flag: &'a AtomicBool) -> Self {
        flag.store(true, Ordering::SeqCst);
        Self(flag)
    }
}

impl Drop for LoadingGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::SeqCst);
    }
}

// == Api Client ==
/// Read-through cache in front of the dashboard API.
///
/// Reads are cached by URL until evicted or until any write succeeds.
/// Every completed transport call lands in the outcome log, whose
/// failures make up [`ApiClient::errors`].
///
/// Locks are never held across a transport call; two concurrent reads of
/// the same uncached URL both reach the transport.
pub struct ApiClient {
    transport: Arc<dyn Transport>,
    cache: RwLock<ResponseCache>,
    outcomes: Arc<RwLock<OutcomeLog>>,
    /// Last writer wins when requests overlap
    loading: AtomicBool,
    request_delay: Duration,
}

impl ApiClient {
    // == Constructors ==
    pub fn new(transport: Arc<dyn Transport>, cache: ResponseCache, outcomes: OutcomeLog) -> Self {
        Self {
            transport,
            cache: RwLock::new(cache),
            outcomes: Arc::new(RwLock::new(outcomes)),
            loading: AtomicBool::new(false),
            request_delay: Duration::from_millis(1),
        }
    }

    /// Builds an HTTP-backed client from configuration.
    pub fn from_config(config: &Config) -> Result<Self> {
        let transport = HttpTransport::new(&config.base_url)?;
        let cache = ResponseCache::new(config.cache_capacity);
        let outcomes = OutcomeLog::new(config.error_window, Arc::new(SystemClock));
        Ok(Self::new(Arc::new(transport), cache, outcomes)
            .with_request_delay(Duration::from_millis(config.request_delay_ms)))
    }

    /// Sets the pause taken before each cache lookup.
    pub fn with_request_delay(mut self, delay: Duration) -> Self {
        self.request_delay = delay;
        self
    }

    /// Never resolves synchronously, even for a zero delay.
    async fn pause(&self) {
        if self.request_delay.is_zero() {
            tokio::task::yield_now().await;
        } else {
            tokio::time::sleep(self.request_delay).await;
        }
    }

    // == Get ==
    /// Returns the body for `url`, from the cache when present.
    ///
    /// Cache hits are not recorded as outcomes. A failed read caches
    /// nothing and is recorded as `get {url}: {message}`.
    pub async fn get(&self, url: &str) -> Result<Value> {
        let _loading = LoadingGuard::start(&self.loading);
        self.pause().await;

        if let Some(body) = self.cache.write().await.get(url) {
            return Ok(body);
        }

        match self.transport.get(url).await {
            Ok(body) => {
                self.cache.write().await.insert(url, body.clone());
                self.outcomes.write().await.record_success();
                Ok(body)
            }
            Err(err) => {
                let message = err.message();
                warn!(url, error = %message, "GET failed");
                self.outcomes
                    .write()
                    .await
                    .record_failure(format!("get {}: {}", url, message));
                Err(err)
            }
        }
    }

    // == Patch ==
    /// Sends a write and, on success, drops every cached response.
    pub async fn patch(&self, url: &str, body: &Value) -> Result<Value> {
        let _loading = LoadingGuard::start(&self.loading);

        match self.transport.patch(url, body).await {
            Ok(response) => {
                let dropped = self.cache.write().await.clear();
                info!(url, dropped, "write succeeded, response cache cleared");
                self.outcomes.write().await.record_success();
                Ok(response)
            }
            Err(err) => {
                let message = err.message();
                warn!(url, error = %message, "PATCH failed");
                self.outcomes
                    .write()
                    .await
                    .record_failure(format!("patch {}: {}", url, message));
                Err(err)
            }
        }
    }

    // == Invalidate ==
    /// Drops every cached response without issuing a request.
    pub async fn invalidate(&self) -> usize {
        let dropped = self.cache.write().await.clear();
        info!(dropped, "response cache cleared");
        dropped
    }

    // == Observers ==
    pub fn loading(&self) -> bool {
        self.loading.load(Ordering::SeqCst)
    }

    /// Failures from the trailing error window as `[HH:MM:SS] message` lines.
    pub async fn errors(&self) -> String {
        self.outcomes.read().await.summary().to_string()
    }

    pub async fn stats(&self) -> CacheStats {
        self.cache.read().await.stats()
    }

    pub async fn status(&self) -> ApiStatus {
        ApiStatus::new(self.loading(), self.errors().await, self.stats().await)
    }

    /// Shared handle to the outcome log, for the background prune task.
    pub fn outcomes(&self) -> Arc<RwLock<OutcomeLog>> {
        self.outcomes.clone()
    }
}
