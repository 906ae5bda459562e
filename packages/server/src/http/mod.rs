//! HTTP surface of bookmarkd
//!
//! # Architecture
//!
//! Endpoints are split by audience and merged into one router:
//! - `page_endpoints`: the HTML folder pages and their icons
//! - `api_endpoints`: JSON views, root listing, explicit reload, health
//!
//! Every request resolves against a snapshot of the store taken at the start
//! of the handler, so a concurrent reload never changes a page mid-render.
//!
//! # Usage
//!
//! ```bash
//! bookmarkd --bookmarkfile ~/.config/chromium/Default/Bookmarks --port 9898
//! curl "http://localhost:9898/?fp=Work"
//! curl "http://localhost:9898/api/view?fp=Work"
//! curl -X POST http://localhost:9898/api/reload
//! ```

use axum::Router;
use bookmarkd_core::{BookmarkStore, BookmarkdConfig, NavigationResolver};
use std::future::Future;
use std::sync::Arc;
use tower_http::trace::TraceLayer;

mod api_endpoints;
mod http_error;
mod page_endpoints;
pub mod query;
pub mod render;

pub use http_error::HttpError;

/// Application state shared across all endpoints
///
/// The store swaps whole trees internally; handlers only ever read a
/// snapshot. Config and resolver are fixed for the process lifetime.
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<BookmarkdConfig>,
    pub store: Arc<BookmarkStore>,
    pub resolver: NavigationResolver,
}

impl AppState {
    pub fn new(config: Arc<BookmarkdConfig>, store: Arc<BookmarkStore>) -> Self {
        let resolver = NavigationResolver::from_config(&config);
        Self {
            config,
            store,
            resolver,
        }
    }
}

/// Create the application router with all endpoint modules
pub fn create_router(state: AppState) -> Router {
    Router::new()
        .merge(page_endpoints::routes(state.clone()))
        .merge(api_endpoints::routes(state))
        .layer(TraceLayer::new_for_http())
}

/// Serve the router until `shutdown` resolves
///
/// # Errors
///
/// Returns error if the listener fails to bind or the server fails.
pub async fn start_server<F>(state: AppState, shutdown: F) -> anyhow::Result<()>
where
    F: Future<Output = ()> + Send + 'static,
{
    let addr = state.config.listen_addr();
    let app = create_router(state);

    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("📡 Start listening on http://{}", addr);

    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown)
        .await?;

    tracing::info!("Server stopped");
    Ok(())
}
