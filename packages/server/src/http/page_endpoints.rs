//! HTML page endpoints
//!
//! # Endpoints
//!
//! - `GET /` - Folder page; `fp` (repeatable) selects the path, `root` the root
//! - `GET /folder.svg` - Folder icon
//! - `GET /file.svg` - Link icon

use axum::{
    extract::{RawQuery, State},
    http::header,
    response::{Html, IntoResponse},
    routing::get,
    Router,
};
use tracing::{debug, instrument, warn};

use super::query::NavQuery;
use super::render::{render_page, PageContext, FILE_SVG, FOLDER_SVG};
use crate::http::AppState;

/// Render one folder level as HTML
///
/// With `reload_on_root` enabled, a request without selectors re-reads the
/// bookmark file first. A failed reload is logged and shown as a warning;
/// the page renders from the last good tree.
#[instrument(skip_all)]
async fn folder_page(State(state): State<AppState>, RawQuery(raw_query): RawQuery) -> Html<String> {
    let query = NavQuery::parse(raw_query.as_deref());
    debug!("Folder page: {:?}", query);

    let mut warning = None;
    if query.is_root_view() && state.config.reload_on_root {
        if let Err(e) = state.store.reload().await {
            warn!("Reload on root visit failed: {}", e);
            warning = Some(format!("Reload failed, showing previous bookmarks: {}", e));
        }
    }

    let tree = state.store.snapshot();
    let default_root = state.resolver.default_root();
    let current_root = query.root_or(default_root);
    let view = state
        .resolver
        .resolve_in(&tree, Some(current_root), &query.selectors);

    let ctx = PageContext {
        home_label: &state.config.home_label,
        link_root: query.link_root(default_root),
        current_root,
        root_names: tree.root_names().collect(),
        warning,
    };

    Html(render_page(&view, &ctx))
}

async fn folder_icon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], FOLDER_SVG)
}

async fn file_icon() -> impl IntoResponse {
    ([(header::CONTENT_TYPE, "image/svg+xml")], FILE_SVG)
}

/// Create router for page endpoints
pub fn routes(state: AppState) -> Router {
    Router::new()
        .route("/", get(folder_page))
        .route("/folder.svg", get(folder_icon))
        .route("/file.svg", get(file_icon))
        .with_state(state)
}
