//! Tests for PNG encoding.
//!
//! Covers format selection (indexed vs truecolor) and checks that every
//! encoded file decodes back to the original pixels.

use image::{Rgb, RgbImage};
use renderer::png::{create_png_indexed, create_png_rgb, encode_png};

// ============================================================================
// Helper functions
// ============================================================================

/// Color type byte from the IHDR chunk.
fn color_type(png: &[u8]) -> u8 {
    // signature (8) + length (4) + "IHDR" (4) + width (4) + height (4) + depth (1)
    png[25]
}

fn has_chunk(png: &[u8], name: &[u8; 4]) -> bool {
    png.windows(4).any(|w| w == name)
}

fn decode(png: &[u8]) -> RgbImage {
    image::load_from_memory_with_format(png, image::ImageFormat::Png)
        .unwrap()
        .to_rgb8()
}

/// Two-tone image resembling the banner background.
fn two_tone(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        if x < 10 || y < 10 || x >= width - 10 || y >= height - 10 {
            Rgb([128, 128, 128])
        } else {
            Rgb([60, 80, 57])
        }
    })
}

/// Every pixel a distinct color.
fn noisy(width: u32, height: u32) -> RgbImage {
    RgbImage::from_fn(width, height, |x, y| {
        Rgb([(x % 256) as u8, (y % 256) as u8, ((x * 7 + y * 13) % 256) as u8])
    })
}

// ============================================================================
// Format selection
// ============================================================================

#[test]
fn test_few_colors_use_indexed() {
    let img = two_tone(100, 50);
    let png = encode_png(&img).unwrap();

    assert_eq!(color_type(&png), 3);
    assert!(has_chunk(&png, b"PLTE"));
    assert_eq!(decode(&png), img);
}

#[test]
fn test_many_colors_use_truecolor() {
    let img = noisy(300, 20);
    let png = encode_png(&img).unwrap();

    assert_eq!(color_type(&png), 2);
    assert!(!has_chunk(&png, b"PLTE"));
    assert_eq!(decode(&png), img);
}

#[test]
fn test_large_image_takes_parallel_path() {
    // 400x200 is above the parallel threshold
    let img = two_tone(400, 200);
    let png = encode_png(&img).unwrap();

    assert_eq!(color_type(&png), 3);
    assert_eq!(decode(&png), img);
}

#[test]
fn test_indexed_smaller_than_truecolor_for_flat_images() {
    let img = two_tone(400, 200);
    let indexed = encode_png(&img).unwrap();
    let truecolor = create_png_rgb(img.as_raw(), 400, 200).unwrap();

    assert!(indexed.len() < truecolor.len());
}

// ============================================================================
// Structure
// ============================================================================

#[test]
fn test_signature_and_trailer() {
    let png = encode_png(&two_tone(32, 32)).unwrap();

    assert_eq!(&png[0..8], &[137, 80, 78, 71, 13, 10, 26, 10]);
    assert_eq!(&png[12..16], b"IHDR");
    assert_eq!(&png[png.len() - 8..png.len() - 4], b"IEND");
}

#[test]
fn test_ihdr_dimensions() {
    let png = create_png_rgb(&vec![0u8; 7 * 3 * 3], 7, 3).unwrap();

    assert_eq!(&png[16..20], &7u32.to_be_bytes());
    assert_eq!(&png[20..24], &3u32.to_be_bytes());
    assert_eq!(png[24], 8); // bit depth
}

#[test]
fn test_explicit_indexed_encoding() {
    let palette = [[255, 255, 255], [0, 0, 0]];
    let indices = [0, 1, 1, 0];
    let png = create_png_indexed(2, 2, &palette, &indices).unwrap();

    let img = decode(&png);
    assert_eq!(*img.get_pixel(0, 0), Rgb([255, 255, 255]));
    assert_eq!(*img.get_pixel(1, 0), Rgb([0, 0, 0]));
    assert_eq!(*img.get_pixel(0, 1), Rgb([0, 0, 0]));
    assert_eq!(*img.get_pixel(1, 1), Rgb([255, 255, 255]));
}

#[test]
fn test_empty_palette_rejected() {
    assert!(create_png_indexed(1, 1, &[], &[0]).is_err());
}

#[test]
fn test_empty_image_rejected() {
    assert!(encode_png(&RgbImage::new(0, 0)).is_err());
}
