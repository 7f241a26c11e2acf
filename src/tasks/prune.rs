//! Error Window Prune Task
//!
//! Background task that ages failures out of the error summary when no new
//! requests complete.

use std::sync::Arc;
use std::time::Duration;

use tokio::sync::RwLock;
use tokio::task::JoinHandle;
use tracing::{debug, info};

use crate::api::OutcomeLog;

/// Spawns a task that prunes the outcome log every `interval_secs` seconds.
///
/// Returns the task's JoinHandle so it can be aborted on shutdown.
///
/// # Example
/// ```ignore
/// let client = ApiClient::from_config(&config)?;
/// let prune_handle = spawn_prune_task(client.outcomes(), 1);
/// // Later, during shutdown:
/// prune_handle.abort();
/// ```
pub fn spawn_prune_task(outcomes: Arc<RwLock<OutcomeLog>>, interval_secs: u64) -> JoinHandle<()> {
    let interval = Duration::from_secs(interval_secs.max(1));

    tokio::spawn(async move {
        info!("Starting error window prune task with interval of {} seconds", interval_secs);

        loop {
            tokio::time::sleep(interval).await;

            let removed = outcomes.write().await.prune();
            if removed > 0 {
                debug!("Error window prune: dropped {} outcomes", removed);
            }
        }
    })
}
