//! bookmarkd binary
//!
//! # Usage
//!
//! ```bash
//! # Serve the default Chromium profile on port 9898, logging to ./bookmarkd.log
//! bookmarkd
//!
//! # Another browser profile, sorted, logging to stderr, reloading every minute
//! bookmarkd --bookmarkfile ~/.config/google-chrome/Default/Bookmarks \
//!     --use-sort --logfile - --reload-interval 60
//! ```
//!
//! # Environment Variables
//!
//! - `BOOKMARKD_FILE`, `BOOKMARKD_LOG_FILE`, `BOOKMARKD_PORT`, `BOOKMARKD_BIND`,
//!   `BOOKMARKD_USE_SORT`, `BOOKMARKD_RELOAD_INTERVAL`: same as the flags
//! - `RUST_LOG`: Logging level (e.g., "info", "debug", "trace")

use anyhow::Context;
use clap::Parser;
use std::sync::Arc;
use tracing::{error, info};

use bookmarkd::cli::Args;
use bookmarkd::http::{start_server, AppState};
use bookmarkd::{logging, reload, shutdown};
use bookmarkd_core::BookmarkStore;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let config = Args::parse().into_config();

    logging::init(config.log_file.as_deref())?;

    info!("🚀 bookmarkd {}", env!("CARGO_PKG_VERSION"));
    info!("📚 Bookmark file: {}", config.bookmark_file.display());

    if let Err(e) = config.validate() {
        error!("{}", e);
        return Err(e.into());
    }

    if !config.bookmark_file.exists() {
        error!("Bookmark file not found: {}", config.bookmark_file.display());
        anyhow::bail!(
            "Bookmark file not found: {}",
            config.bookmark_file.display()
        );
    }

    let store = Arc::new(BookmarkStore::new(&config));

    // No previous tree to fall back on yet, so the first load must succeed
    store
        .reload()
        .await
        .context("Initial bookmark load failed")?;

    let reload_task = config
        .reload_interval()
        .map(|period| reload::spawn_reload_timer(store.clone(), period));

    let state = AppState::new(Arc::new(config), store);
    let result = start_server(state, shutdown::shutdown_signal()).await;

    if let Some(task) = reload_task {
        task.abort();
    }

    result
}
