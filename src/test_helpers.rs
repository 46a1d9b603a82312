//! Shared test utilities for the pixelforge test suite.
//!
//! Synthetic images, in-memory encoders, and pixel assertions that report
//! the first offending coordinate instead of dumping whole buffers.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let source = solid_image(8, 8, [128, 128, 128, 255]);
//! let bytes = encode_png(&source);
//! assert_pixels_near(&decode_rgba(&bytes), &source, 0);
//! ```

use image::codecs::jpeg::JpegEncoder;
use image::codecs::png::PngEncoder;
use image::{DynamicImage, ExtendedColorType, ImageEncoder, Rgba, RgbaImage};

// =========================================================================
// Synthetic images
// =========================================================================

/// A `width` × `height` image filled with one RGBA value.
pub fn solid_image(width: u32, height: u32, rgba: [u8; 4]) -> RgbaImage {
    RgbaImage::from_pixel(width, height, Rgba(rgba))
}

// =========================================================================
// In-memory codecs
// =========================================================================

pub fn encode_png(image: &RgbaImage) -> Vec<u8> {
    let mut out = Vec::new();
    PngEncoder::new(&mut out)
        .write_image(
            image.as_raw(),
            image.width(),
            image.height(),
            ExtendedColorType::Rgba8,
        )
        .unwrap();
    out
}

/// JPEG at `quality`; alpha is dropped.
pub fn encode_jpeg(image: &RgbaImage, quality: u8) -> Vec<u8> {
    let rgb = DynamicImage::ImageRgba8(image.clone()).to_rgb8();
    let mut out = Vec::new();
    JpegEncoder::new_with_quality(&mut out, quality)
        .write_image(rgb.as_raw(), rgb.width(), rgb.height(), ExtendedColorType::Rgb8)
        .unwrap();
    out
}

pub fn decode_rgba(bytes: &[u8]) -> RgbaImage {
    image::load_from_memory(bytes).unwrap().to_rgba8()
}

// =========================================================================
// Assertions (panic with the first mismatching pixel)
// =========================================================================

/// Assert both images have the same size and every channel differs by at most `tolerance`.
pub fn assert_pixels_near(actual: &RgbaImage, expected: &RgbaImage, tolerance: u8) {
    assert_eq!(
        actual.dimensions(),
        expected.dimensions(),
        "image dimensions differ"
    );
    for (x, y, a) in actual.enumerate_pixels() {
        let e = expected.get_pixel(x, y);
        let within = a
            .0
            .iter()
            .zip(e.0.iter())
            .all(|(a, e)| a.abs_diff(*e) <= tolerance);
        assert!(
            within,
            "pixel ({x}, {y}) is {:?}, expected {:?} ± {tolerance}",
            a.0, e.0
        );
    }
}
