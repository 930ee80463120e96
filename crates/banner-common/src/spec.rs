//! The scalar inputs of a single banner render.

use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};

use crate::color::Rgb;

/// Timestamp layout appended to the headline.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Colors and text for one banner.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BannerSpec {
    /// Outer rectangle, covering the whole canvas
    pub frame_color: Rgb,
    /// Inner rectangle, inset from the frame
    pub panel_color: Rgb,
    pub headline: String,
    pub caption: String,
    /// Appended to the caption when present and non-empty
    #[serde(default)]
    pub secret: Option<String>,
}

impl Default for BannerSpec {
    fn default() -> Self {
        Self {
            frame_color: Rgb::new(128, 128, 128),
            panel_color: Rgb::new(60, 80, 57),
            headline: "DEVOPS".to_string(),
            caption: "Une superbe image".to_string(),
            secret: None,
        }
    }
}

impl BannerSpec {
    /// First text line: the headline followed by the render timestamp.
    pub fn headline_text(&self, at: NaiveDateTime) -> String {
        format!("{} - {}", self.headline, at.format(TIMESTAMP_FORMAT))
    }

    /// Second text line: the caption, with the secret appended if one is set.
    pub fn caption_text(&self) -> String {
        match self.secret.as_deref() {
            Some(secret) if !secret.is_empty() => {
                format!("{} (secret: {})", self.caption, secret)
            }
            _ => self.caption.clone(),
        }
    }
}
