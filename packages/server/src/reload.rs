//! Periodic bookmark reloading
//!
//! Reloading is independent of request handling: a background task re-reads
//! the bookmark file on a fixed period. Failures are logged by the store and
//! leave the current tree in service; the task keeps running.

use bookmarkd_core::BookmarkStore;
use std::sync::Arc;
use std::time::Duration;
use tokio::task::JoinHandle;
use tokio::time::MissedTickBehavior;
use tracing::{debug, info};

/// Spawn a task reloading `store` every `period`.
///
/// The first reload happens one full period after spawning; the caller is
/// expected to have loaded once at startup.
pub fn spawn_reload_timer(store: Arc<BookmarkStore>, period: Duration) -> JoinHandle<()> {
    info!("Reloading bookmarks every {:?}", period);

    tokio::spawn(async move {
        let mut interval = tokio::time::interval_at(tokio::time::Instant::now() + period, period);
        interval.set_missed_tick_behavior(MissedTickBehavior::Delay);

        loop {
            interval.tick().await;
            match store.reload().await {
                Ok(tree) => debug!(links = tree.link_count(), "Periodic reload complete"),
                Err(e) => debug!("Periodic reload failed: {}", e),
            }
        }
    })
}
