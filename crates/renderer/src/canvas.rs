//! Banner composition: two nested rectangles and two lines of text.
//!
//! Geometry is fixed. Rectangle corners are inclusive, the way the classic
//! raster APIs address them, so the panel from (10,10) to (390,190) covers
//! 381 × 181 pixels. Text origins are baselines, not top-left corners.

use std::time::Instant;

use banner_common::{BannerResult, BannerSpec, Rgb};
use chrono::NaiveDateTime;
use image::{Rgb as Pixel, RgbImage};
use imageproc::drawing::{draw_filled_rect_mut, draw_text_mut};
use imageproc::rect::Rect;

use crate::font::BannerFont;
use crate::png::encode_png;

pub const CANVAS_WIDTH: u32 = 400;
pub const CANVAS_HEIGHT: u32 = 200;

/// Panel rectangle, inclusive corners.
const PANEL: (i32, i32, i32, i32) = (10, 10, 390, 190);

/// Where and how large a line of text is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TextPlacement {
    pub size_pt: f32,
    pub x: i32,
    pub baseline_y: i32,
}

pub const HEADLINE: TextPlacement = TextPlacement {
    size_pt: 20.0,
    x: 50,
    baseline_y: 50,
};

pub const CAPTION: TextPlacement = TextPlacement {
    size_pt: 12.0,
    x: 50,
    baseline_y: 80,
};

const TEXT_COLOR: Rgb = Rgb::WHITE;

/// Paint the banner for the given moment.
pub fn compose(spec: &BannerSpec, font: &BannerFont, at: NaiveDateTime) -> RgbImage {
    let mut img = RgbImage::new(CANVAS_WIDTH, CANVAS_HEIGHT);

    // The frame corner sits one past the last pixel; clipping handles it
    fill_inclusive(
        &mut img,
        (0, 0, CANVAS_WIDTH as i32, CANVAS_HEIGHT as i32),
        spec.frame_color,
    );
    fill_inclusive(&mut img, PANEL, spec.panel_color);

    draw_line(&mut img, font, HEADLINE, &spec.headline_text(at));
    draw_line(&mut img, font, CAPTION, &spec.caption_text());

    img
}

/// Compose and encode in one step.
pub fn render_png(spec: &BannerSpec, font: &BannerFont, at: NaiveDateTime) -> BannerResult<Vec<u8>> {
    let start = Instant::now();

    let img = compose(spec, font, at);
    let compose_ms = start.elapsed().as_secs_f64() * 1000.0;

    let png = encode_png(&img)?;

    tracing::debug!(
        bytes = png.len(),
        compose_ms = compose_ms,
        total_ms = start.elapsed().as_secs_f64() * 1000.0,
        "Rendered banner"
    );

    Ok(png)
}

fn fill_inclusive(img: &mut RgbImage, (x1, y1, x2, y2): (i32, i32, i32, i32), color: Rgb) {
    let rect = Rect::at(x1, y1).of_size((x2 - x1 + 1) as u32, (y2 - y1 + 1) as u32);
    draw_filled_rect_mut(img, rect, Pixel(color.channels()));
}

fn draw_line(img: &mut RgbImage, font: &BannerFont, placement: TextPlacement, text: &str) {
    if text.is_empty() {
        return;
    }

    let scale = BannerFont::scale_for_points(placement.size_pt);
    let top = placement.baseline_y - font.ascent(scale).round() as i32;

    draw_text_mut(
        img,
        Pixel(TEXT_COLOR.channels()),
        placement.x,
        top,
        scale,
        font.font(),
        text,
    );
}
