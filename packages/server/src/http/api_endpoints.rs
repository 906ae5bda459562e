//! JSON API endpoints
//!
//! # Endpoints
//!
//! - `GET /api/health` - Health check with load bookkeeping
//! - `GET /api/view` - Navigation view as JSON (`fp` repeatable, `root`)
//! - `GET /api/roots` - Root names of the loaded tree
//! - `GET /api/roots/:name` - Summary of one root folder
//! - `POST /api/reload` - Re-read the bookmark file
//!
//! # Usage
//!
//! ```bash
//! curl "http://localhost:9898/api/view?fp=Work&fp=Projects"
//! curl http://localhost:9898/api/roots/other
//! curl -X POST http://localhost:9898/api/reload
//! ```

use axum::{
    extract::{Path, RawQuery, State},
    response::Json,
    routing::{get, post},
    Router,
};
use bookmarkd_core::{LoadStatus, NavigationView};
use serde::Serialize;
use tracing::{debug, info, instrument};

use super::http_error::HttpError;
use super::query::NavQuery;
use crate::http::AppState;

/// Health check response
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct HealthStatus {
    pub status: String,
    pub version: String,
    pub loads: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_error: Option<String>,
}

/// Navigation view plus the request context it was resolved in
#[derive(Debug, Serialize)]
pub struct ViewResponse {
    pub root: String,
    pub sorted: bool,
    #[serde(flatten)]
    pub view: NavigationView,
}

/// Summary of a root folder
#[derive(Debug, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct RootSummary {
    /// Key in the `roots` map, e.g. "bookmark_bar"
    pub key: String,
    pub id: String,
    /// Display name stored in the file, e.g. "Bookmarks bar"
    pub name: String,
    pub date_added: String,
    pub date_modified: String,
    /// Direct children of the root
    pub children: usize,
}

/// Health check endpoint
///
/// Reports `degraded` when the most recent load attempt failed; the server
/// keeps answering from the last good tree in that state.
async fn health_check(State(state): State<AppState>) -> Json<HealthStatus> {
    let status = state.store.status();
    Json(HealthStatus {
        status: if status.last_error.is_some() {
            "degraded".to_string()
        } else {
            "ok".to_string()
        },
        version: env!("CARGO_PKG_VERSION").to_string(),
        loads: status.loads,
        last_error: status.last_error,
    })
}

/// Resolve a selector path and return the view as JSON
///
/// Never fails: unknown roots and unmatched selectors produce the same
/// clamped view as the HTML page.
#[instrument(skip_all)]
async fn get_view(State(state): State<AppState>, RawQuery(raw_query): RawQuery) -> Json<ViewResponse> {
    let query = NavQuery::parse(raw_query.as_deref());
    debug!("View query: {:?}", query);

    let tree = state.store.snapshot();
    let root = query.root_or(state.resolver.default_root()).to_string();
    let view = state
        .resolver
        .resolve_in(&tree, Some(root.as_str()), &query.selectors);

    Json(ViewResponse {
        root,
        sorted: state.resolver.sort_enabled(),
        view,
    })
}

/// List root names in sorted order
async fn list_roots(State(state): State<AppState>) -> Json<Vec<String>> {
    let tree = state.store.snapshot();
    Json(tree.root_names().map(str::to_string).collect())
}

/// Summary of a single root
///
/// Unlike page navigation, asking for a root by name is strict: an unknown
/// name is a 404 with code `ROOT_NOT_FOUND`.
async fn get_root(
    State(state): State<AppState>,
    Path(name): Path<String>,
) -> Result<Json<RootSummary>, HttpError> {
    let tree = state.store.snapshot();
    let root = tree.root(&name)?;

    Ok(Json(RootSummary {
        key: name.clone(),
        id: root.id.clone(),
        name: root.name.clone(),
        date_added: root.date_added.clone(),
        date_modified: root.date_modified.clone(),
        children: root.children.len(),
    }))
}

/// Re-read the bookmark file
///
/// Returns the updated load status. On failure the previous tree stays in
/// service and the error is returned (`IO_ERROR` 500, `PARSE_ERROR` 422).
#[instrument(skip_all)]
async fn reload(State(state): State<AppState>) -> Result<Json<LoadStatus>, HttpError> {
    info!("Reload requested");
    state.store.reload().await?;
    Ok(Json(state.store.status()))
}

/// Create router for API endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/api/health", get(health_check))
        .route("/api/view", get(get_view))
        .route("/api/roots", get(list_roots))
        .route("/api/roots/:name", get(get_root))
        .route("/api/reload", post(reload))
        .with_state(state)
}
