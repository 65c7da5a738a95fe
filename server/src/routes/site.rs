//! `index.html` fallback for client-side routes.

#[cfg(test)]
#[path = "site_test.rs"]
mod site_test;

use std::path::PathBuf;
use std::sync::Arc;

use axum::extract::State;
use axum::http::{StatusCode, Uri};
use axum::response::{Html, IntoResponse, Response};
use content::routes::SiteRoute;

#[derive(Clone, Debug)]
pub struct SiteIndex {
    path: Arc<PathBuf>,
}

impl SiteIndex {
    pub fn new(path: PathBuf) -> Self {
        Self { path: Arc::new(path) }
    }
}

/// Status for a path the asset directory did not match.
pub fn status_for(path: &str) -> StatusCode {
    if SiteRoute::from_path(path).is_some() { StatusCode::OK } else { StatusCode::NOT_FOUND }
}

pub async fn index(State(site): State<SiteIndex>, uri: Uri) -> Response {
    let status = status_for(uri.path());
    match tokio::fs::read_to_string(site.path.as_path()).await {
        Ok(html) => (status, Html(html)).into_response(),
        Err(e) => {
            tracing::error!(path = %site.path.display(), error = %e, "site index unreadable");
            (StatusCode::SERVICE_UNAVAILABLE, "site bundle not built").into_response()
        }
    }
}
