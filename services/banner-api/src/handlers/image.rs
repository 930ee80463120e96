//! GET / - the banner itself.

use std::sync::Arc;
use std::time::Instant;

use axum::{
    extract::Extension,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use banner_common::BannerError;
use chrono::Local;
use tracing::{debug, error};

use super::error_response;
use crate::metrics;
use crate::state::AppState;

/// Render the banner for the current local time and return it as PNG.
pub async fn banner_handler(Extension(state): Extension<Arc<AppState>>) -> Response {
    let at = Local::now().naive_local();
    let start = Instant::now();

    let render_state = state.clone();
    let result = tokio::task::spawn_blocking(move || {
        renderer::render_png(&render_state.spec, &render_state.font, at)
    })
    .await
    .unwrap_or_else(|e| Err(BannerError::Internal(format!("render task failed: {}", e))));

    match result {
        Ok(png) => {
            let elapsed = start.elapsed();
            metrics::record_render(elapsed, png.len());
            debug!(
                bytes = png.len(),
                elapsed_ms = elapsed.as_secs_f64() * 1000.0,
                "Served banner"
            );

            (
                StatusCode::OK,
                [
                    (header::CONTENT_TYPE, "image/png"),
                    (header::CACHE_CONTROL, "no-store"),
                ],
                png,
            )
                .into_response()
        }
        Err(e) => {
            metrics::record_render_error();
            error!(error = %e, "Banner render failed");
            error_response(&e)
        }
    }
}
