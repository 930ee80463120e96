//! TrueType font loading for banner text.

use std::fmt;
use std::path::Path;

use banner_common::{BannerError, BannerResult};
use rusttype::{Font, Scale};

/// Embedded font data - DejaVu Sans Mono (a clean, readable monospace font)
const FONT_DATA: &[u8] = include_bytes!("../assets/DejaVuSansMono.ttf");

/// Text sizes are given in points and rasterized at 96 DPI.
pub const POINTS_TO_PIXELS: f32 = 96.0 / 72.0;

/// A parsed font plus where it came from, for logging.
#[derive(Clone)]
pub struct BannerFont {
    font: Font<'static>,
    source: String,
}

impl BannerFont {
    /// The font compiled into the binary.
    pub fn embedded() -> BannerResult<Self> {
        let font = Font::try_from_bytes(FONT_DATA).ok_or_else(|| BannerError::FontLoad {
            path: "<embedded>".to_string(),
            message: "embedded font data is not a valid TrueType font".to_string(),
        })?;

        Ok(Self {
            font,
            source: "<embedded>".to_string(),
        })
    }

    /// Load a TrueType font from disk.
    pub fn from_file(path: impl AsRef<Path>) -> BannerResult<Self> {
        let path = path.as_ref();
        let data = std::fs::read(path).map_err(|e| BannerError::FontLoad {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        Self::parse(data, path.display().to_string())
    }

    /// Parse font data that is already in memory.
    pub fn from_bytes(data: Vec<u8>) -> BannerResult<Self> {
        Self::parse(data, "<memory>".to_string())
    }

    fn parse(data: Vec<u8>, source: String) -> BannerResult<Self> {
        match Font::try_from_vec(data) {
            Some(font) => {
                tracing::debug!(source = %source, glyphs = font.glyph_count(), "Loaded font");
                Ok(Self { font, source })
            }
            None => Err(BannerError::FontLoad {
                path: source,
                message: "not a valid TrueType font".to_string(),
            }),
        }
    }

    pub fn font(&self) -> &Font<'static> {
        &self.font
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    /// Uniform pixel scale for a size in points.
    pub fn scale_for_points(points: f32) -> Scale {
        Scale::uniform(points * POINTS_TO_PIXELS)
    }

    /// Distance from the top of the line box to the baseline.
    pub fn ascent(&self, scale: Scale) -> f32 {
        self.font.v_metrics(scale).ascent
    }
}

impl fmt::Debug for BannerFont {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BannerFont")
            .field("source", &self.source)
            .field("glyphs", &self.font.glyph_count())
            .finish()
    }
}
