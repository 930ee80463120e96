//! Banner image rendering.
//!
//! - Font loading (embedded or from a TrueType file)
//! - Canvas composition: frame, panel, headline, caption
//! - PNG encoding (indexed when the palette fits, truecolor otherwise)

pub mod canvas;
pub mod font;
pub mod png;

pub use canvas::{compose, render_png, CANVAS_HEIGHT, CANVAS_WIDTH};
pub use font::BannerFont;
