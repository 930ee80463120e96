//! PNG encoding for opaque RGB canvases.
//!
//! Supports two encoding modes:
//! - **Indexed PNG (color type 3)**: Used when image has ≤256 unique colors.
//!   Flat backgrounds with a little anti-aliased text usually land here.
//! - **Truecolor PNG (color type 2)**: Fallback for images with >256 colors.
//!
//! Use `encode_png` for automatic mode selection, or `create_png_rgb` for
//! explicit truecolor encoding.

use std::collections::{HashMap, HashSet};
use std::io::Write;

use banner_common::{BannerError, BannerResult};
use image::RgbImage;
use rayon::prelude::*;

/// Maximum colors for indexed PNG (PNG8)
const MAX_PALETTE_SIZE: usize = 256;

/// Minimum pixels to benefit from parallel palette extraction
const PARALLEL_THRESHOLD: usize = 4096; // 64x64 or larger

const PNG_SIGNATURE: [u8; 8] = [137, 80, 78, 71, 13, 10, 26, 10];

/// Encode a canvas, choosing indexed or truecolor output.
pub fn encode_png(img: &RgbImage) -> BannerResult<Vec<u8>> {
    let (width, height) = img.dimensions();
    let pixels = img.as_raw();

    if pixels.is_empty() {
        return Err(BannerError::Encode("cannot encode an empty image".to_string()));
    }

    let palette_result = if pixels.len() / 3 >= PARALLEL_THRESHOLD {
        extract_palette_parallel(pixels)
    } else {
        extract_palette_sequential(pixels)
    };

    match palette_result {
        Some((palette, indices)) => create_png_indexed(width, height, &palette, &indices),
        None => create_png_rgb(pixels, width, height),
    }
}

#[inline(always)]
fn pack_color(pixel: &[u8]) -> u32 {
    (pixel[0] as u32) | ((pixel[1] as u32) << 8) | ((pixel[2] as u32) << 16)
}

#[inline(always)]
fn unpack_color(packed: u32) -> [u8; 3] {
    [packed as u8, (packed >> 8) as u8, (packed >> 16) as u8]
}

/// Palette in first-appearance order plus one index per pixel.
fn extract_palette_sequential(pixels: &[u8]) -> Option<(Vec<[u8; 3]>, Vec<u8>)> {
    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 3]> = Vec::with_capacity(MAX_PALETTE_SIZE);
    let mut indices: Vec<u8> = Vec::with_capacity(pixels.len() / 3);

    for chunk in pixels.chunks_exact(3) {
        let packed = pack_color(chunk);

        let index = match color_to_index.get(&packed) {
            Some(&idx) => idx,
            None => {
                if palette.len() >= MAX_PALETTE_SIZE {
                    return None;
                }
                let idx = palette.len() as u8;
                palette.push([chunk[0], chunk[1], chunk[2]]);
                color_to_index.insert(packed, idx);
                idx
            }
        };
        indices.push(index);
    }

    Some((palette, indices))
}

/// Parallel palette extraction for larger images.
///
/// Each chunk reports its colors in first-appearance order, so the merged
/// palette matches what the sequential pass would build.
fn extract_palette_parallel(pixels: &[u8]) -> Option<(Vec<[u8; 3]>, Vec<u8>)> {
    let chunk_size = (pixels.len() / 3 / rayon::current_num_threads()).max(256) * 3;

    let per_chunk: Vec<Vec<u32>> = pixels
        .par_chunks(chunk_size)
        .map(|chunk| {
            let mut seen: HashSet<u32> = HashSet::with_capacity(MAX_PALETTE_SIZE);
            let mut ordered = Vec::new();
            for pixel in chunk.chunks_exact(3) {
                let packed = pack_color(pixel);
                if seen.insert(packed) {
                    ordered.push(packed);
                    // Already too many for a palette
                    if ordered.len() > MAX_PALETTE_SIZE {
                        break;
                    }
                }
            }
            ordered
        })
        .collect();

    let mut color_to_index: HashMap<u32, u8> = HashMap::with_capacity(MAX_PALETTE_SIZE);
    let mut palette: Vec<[u8; 3]> = Vec::with_capacity(MAX_PALETTE_SIZE);

    for packed in per_chunk.into_iter().flatten() {
        if color_to_index.contains_key(&packed) {
            continue;
        }
        if palette.len() >= MAX_PALETTE_SIZE {
            return None;
        }
        color_to_index.insert(packed, palette.len() as u8);
        palette.push(unpack_color(packed));
    }

    let indices: Vec<u8> = pixels
        .par_chunks_exact(3)
        .map(|pixel| color_to_index.get(&pack_color(pixel)).copied().unwrap_or(0))
        .collect();

    Some((palette, indices))
}

/// Create an indexed PNG (color type 3) from palette and indices.
pub fn create_png_indexed(
    width: u32,
    height: u32,
    palette: &[[u8; 3]],
    indices: &[u8],
) -> BannerResult<Vec<u8>> {
    let expected = width as usize * height as usize;
    if indices.len() != expected {
        return Err(BannerError::Encode(format!(
            "expected {} palette indices, got {}",
            expected,
            indices.len()
        )));
    }
    if palette.is_empty() || palette.len() > MAX_PALETTE_SIZE {
        return Err(BannerError::Encode(format!(
            "palette must hold 1..={} colors, got {}",
            MAX_PALETTE_SIZE,
            palette.len()
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 3));

    // PLTE chunk (palette)
    let plte_data: Vec<u8> = palette.iter().flatten().copied().collect();
    write_chunk(&mut png, b"PLTE", &plte_data);

    let idat_data = deflate_scanlines(indices, width as usize)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

/// Create a truecolor PNG (color type 2) from packed RGB pixel data.
pub fn create_png_rgb(pixels: &[u8], width: u32, height: u32) -> BannerResult<Vec<u8>> {
    let expected = width as usize * height as usize * 3;
    if pixels.len() != expected {
        return Err(BannerError::Encode(format!(
            "expected {} bytes of RGB data, got {}",
            expected,
            pixels.len()
        )));
    }

    let mut png = Vec::new();
    png.extend_from_slice(&PNG_SIGNATURE);

    write_chunk(&mut png, b"IHDR", &ihdr(width, height, 2));

    let idat_data = deflate_scanlines(pixels, width as usize * 3)?;
    write_chunk(&mut png, b"IDAT", &idat_data);

    write_chunk(&mut png, b"IEND", &[]);

    Ok(png)
}

fn ihdr(width: u32, height: u32, color_type: u8) -> Vec<u8> {
    let mut data = Vec::with_capacity(13);
    data.extend_from_slice(&width.to_be_bytes());
    data.extend_from_slice(&height.to_be_bytes());
    data.push(8); // bit depth
    data.push(color_type);
    data.push(0); // compression method
    data.push(0); // filter method
    data.push(0); // interlace method
    data
}

/// Write a PNG chunk: length, type, data, CRC over type and data.
fn write_chunk(png: &mut Vec<u8>, chunk_type: &[u8; 4], data: &[u8]) {
    png.extend_from_slice(&(data.len() as u32).to_be_bytes());
    png.extend_from_slice(chunk_type);
    png.extend_from_slice(data);

    let mut hasher = crc32fast::Hasher::new();
    hasher.update(chunk_type);
    hasher.update(data);
    png.extend_from_slice(&hasher.finalize().to_be_bytes());
}

/// Prefix each row with filter type 0 and zlib-compress the result.
fn deflate_scanlines(data: &[u8], row_bytes: usize) -> BannerResult<Vec<u8>> {
    let rows = data.len() / row_bytes;
    let mut uncompressed = Vec::with_capacity(rows * (1 + row_bytes));

    for row in data.chunks_exact(row_bytes) {
        uncompressed.push(0); // filter type: none
        uncompressed.extend_from_slice(row);
    }

    let compress = || -> std::io::Result<Vec<u8>> {
        let mut encoder =
            flate2::write::ZlibEncoder::new(Vec::new(), flate2::Compression::fast());
        encoder.write_all(&uncompressed)?;
        encoder.finish()
    };

    compress().map_err(|e| BannerError::Encode(format!("IDAT compression failed: {}", e)))
}
