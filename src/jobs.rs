use std::sync::Arc;

use crate::services::Store;

/// Periodic no-op query that keeps the database connection warm. Failures
/// are logged and otherwise ignored; request serving is unaffected.
pub async fn keep_alive_task(store: Arc<dyn Store>, interval_secs: u64) {
    // Create a Tokio interval. The first tick fires immediately.
    let mut interval = tokio::time::interval(std::time::Duration::from_secs(interval_secs));

    loop {
        interval.tick().await;
        if let Err(err) = store.ping().await {
            tracing::error!("Keep-alive query failed: {}", err);
        }
    }
}
