//! Router assembly.
//!
//! SYSTEM CONTEXT
//! ==============
//! The site is a client-rendered bundle. Files under the dist directory are
//! served as-is; every other GET falls through to `site::index` so the client
//! router can take over. Known site routes answer 200, anything else 404.

pub mod site;

use std::path::Path;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::get;
use tower_http::compression::CompressionLayer;
use tower_http::services::ServeDir;
use tower_http::trace::TraceLayer;

/// Static host for the built client bundle in `dist_dir`.
pub fn app(dist_dir: &Path) -> Router {
    let index = site::SiteIndex::new(dist_dir.join("index.html"));
    let assets = ServeDir::new(dist_dir)
        .append_index_html_on_directories(false)
        .fallback(get(site::index).with_state(index));

    Router::new()
        .route("/healthz", get(healthz))
        .fallback_service(assets)
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
}

async fn healthz() -> StatusCode {
    StatusCode::OK
}
