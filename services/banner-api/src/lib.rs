//! Banner API Service Library
//!
//! HTTP surface for the banner renderer: `GET /` streams a freshly
//! rendered PNG, plus health and Prometheus endpoints. `render_to_file`
//! backs the one-shot `--output` mode.

pub mod config;
pub mod handlers;
pub mod metrics;
pub mod state;

use std::path::Path;
use std::sync::Arc;

use axum::{routing::get, Extension, Router};
use banner_common::{BannerError, BannerResult, BannerSpec};
use chrono::NaiveDateTime;
use renderer::BannerFont;
use tower_http::trace::TraceLayer;

use crate::state::AppState;

/// Build the HTTP router.
pub fn build_router(state: Arc<AppState>) -> Router {
    Router::new()
        .route("/", get(handlers::image::banner_handler))
        .route("/image.png", get(handlers::image::banner_handler))
        .route("/health", get(handlers::health::health_handler))
        .route("/metrics", get(handlers::health::metrics_handler))
        .layer(Extension(state))
        .layer(TraceLayer::new_for_http())
}

/// Render one banner and write it to `path`. Returns the PNG size in bytes.
///
/// Blocking: call it from `spawn_blocking` when on the async runtime.
pub fn render_to_file(
    spec: &BannerSpec,
    font: &BannerFont,
    at: NaiveDateTime,
    path: &Path,
) -> BannerResult<usize> {
    let png = renderer::render_png(spec, font, at)?;

    std::fs::write(path, &png).map_err(|e| {
        BannerError::Internal(format!("Failed to write {}: {}", path.display(), e))
    })?;

    tracing::info!(path = %path.display(), bytes = png.len(), "Wrote banner");
    Ok(png.len())
}
