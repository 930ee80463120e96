//! HTTP request handlers.

pub mod health;
pub mod image;

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use banner_common::BannerError;

/// Plain-text error response carrying the error's HTTP status.
pub fn error_response(err: &BannerError) -> Response {
    let status =
        StatusCode::from_u16(err.http_status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    (
        status,
        [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
        format!("Failed to render image: {}", err),
    )
        .into_response()
}
