//! Error types for banner rendering and serving.

use thiserror::Error;

/// Result type alias using BannerError.
pub type BannerResult<T> = Result<T, BannerError>;

/// Primary error type for banner operations.
#[derive(Debug, Error)]
pub enum BannerError {
    // === Input Errors ===
    #[error("Invalid color '{value}': {message}")]
    InvalidColor { value: String, message: String },

    #[error("Invalid configuration: {0}")]
    Config(String),

    // === Rendering Errors ===
    #[error("Failed to load font from {path}: {message}")]
    FontLoad { path: String, message: String },

    #[error("Rendering failed: {0}")]
    Render(String),

    #[error("PNG encoding failed: {0}")]
    Encode(String),

    // === Infrastructure Errors ===
    #[error("Internal server error: {0}")]
    Internal(String),
}

impl BannerError {
    pub fn invalid_color(value: impl Into<String>, message: impl Into<String>) -> Self {
        BannerError::InvalidColor {
            value: value.into(),
            message: message.into(),
        }
    }

    /// Get the HTTP status code for this error.
    pub fn http_status_code(&self) -> u16 {
        match self {
            BannerError::InvalidColor { .. } | BannerError::Config(_) => 400,
            _ => 500,
        }
    }
}

impl From<std::io::Error> for BannerError {
    fn from(err: std::io::Error) -> Self {
        BannerError::Internal(err.to_string())
    }
}
