//! Pure Rust image backend built on the `image` crate.
//!
//! ## Crate mapping
//!
//! | Operation | Crate / function |
//! |---|---|
//! | Decode (JPEG, PNG, TIFF, WebP) | `image::load_from_memory` |
//! | Surface | [`Surface`] over a fallibly reserved `RgbaImage` buffer |
//! | Encode → JPEG | `image::codecs::jpeg::JpegEncoder` (quality, flattened over black) |
//! | Encode → PNG | `image::codecs::png::PngEncoder` |
//! | Encode → WebP | `image::codecs::webp::WebPEncoder` (lossless) |
//! | Encode → AVIF | `image::codecs::avif::AvifEncoder` (rav1e, speed 6) |

use super::backend::{BackendError, ImageBackend};
use super::params::{EncodeParams, OutputFormat};
use super::surface::Surface;
use image::{ExtendedColorType, ImageEncoder, ImageFormat, Rgb, RgbImage, RgbaImage};
use std::sync::LazyLock;

/// Extensions whose decoders are compiled in.
///
/// AVIF is excluded: the `image` crate's `"avif"` feature only enables the
/// **encoder** (rav1e). `ImageFormat::reading_enabled()` returns `true` for AVIF when
/// `"avif"` is enabled, so the list is filtered explicitly.
const PHOTO_CANDIDATES: &[(&str, ImageFormat)] = &[
    ("jpg", ImageFormat::Jpeg),
    ("jpeg", ImageFormat::Jpeg),
    ("png", ImageFormat::Png),
    ("tif", ImageFormat::Tiff),
    ("tiff", ImageFormat::Tiff),
    ("webp", ImageFormat::WebP),
];

static SUPPORTED_EXTENSIONS: LazyLock<Vec<&'static str>> = LazyLock::new(|| {
    PHOTO_CANDIDATES
        .iter()
        .filter(|(_, fmt)| fmt.reading_enabled())
        .map(|(ext, _)| *ext)
        .collect()
});

/// Returns the set of image file extensions that have working decoders compiled in.
pub fn supported_input_extensions() -> &'static [&'static str] {
    &SUPPORTED_EXTENSIONS
}

/// `image`-crate backend.
///
/// `max_surface_pixels` caps the surface size; larger sources fail with
/// [`BackendError::SurfaceAllocation`] before any buffer is reserved.
#[derive(Debug, Clone, Default)]
pub struct RustBackend {
    max_surface_pixels: Option<u64>,
}

impl RustBackend {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_max_surface_pixels(max_surface_pixels: Option<u64>) -> Self {
        Self { max_surface_pixels }
    }
}

/// Composite straight-alpha RGBA over opaque black.
///
/// JPEG has no alpha channel. Color stored under transparent pixels must not
/// show through, so each channel is scaled by its alpha.
fn flatten_over_black(image: &RgbaImage) -> RgbImage {
    RgbImage::from_fn(image.width(), image.height(), |x, y| {
        let [r, g, b, a] = image.get_pixel(x, y).0;
        let scale = |c: u8| ((c as u32 * a as u32 + 127) / 255) as u8;
        Rgb([scale(r), scale(g), scale(b)])
    })
}

fn encode_error(format: OutputFormat, e: image::ImageError) -> BackendError {
    BackendError::Encode(format!("{format} encode failed: {e}"))
}

impl ImageBackend for RustBackend {
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, BackendError> {
        image::load_from_memory(bytes)
            .map(|img| img.to_rgba8())
            .map_err(|e| BackendError::Decode(e.to_string()))
    }

    fn allocate_surface(&self, width: u32, height: u32) -> Result<Surface, BackendError> {
        if let Some(max) = self.max_surface_pixels
            && width as u64 * height as u64 > max
        {
            return Err(BackendError::SurfaceAllocation { width, height });
        }
        Surface::allocate(width, height)
    }

    fn encode(&self, image: &RgbaImage, params: &EncodeParams) -> Result<Vec<u8>, BackendError> {
        let (width, height) = image.dimensions();
        let format = params.format;
        let mut out = Vec::new();
        match format {
            OutputFormat::Jpeg => {
                let rgb = flatten_over_black(image);
                image::codecs::jpeg::JpegEncoder::new_with_quality(
                    &mut out,
                    params.quality.value() as u8,
                )
                .write_image(rgb.as_raw(), width, height, ExtendedColorType::Rgb8)
                .map_err(|e| encode_error(format, e))?;
            }
            OutputFormat::Png => {
                image::codecs::png::PngEncoder::new(&mut out)
                    .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| encode_error(format, e))?;
            }
            OutputFormat::WebP => {
                image::codecs::webp::WebPEncoder::new_lossless(&mut out)
                    .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
                    .map_err(|e| encode_error(format, e))?;
            }
            OutputFormat::Avif => {
                image::codecs::avif::AvifEncoder::new_with_speed_quality(
                    &mut out,
                    6,
                    params.quality.value() as u8,
                )
                .write_image(image.as_raw(), width, height, ExtendedColorType::Rgba8)
                .map_err(|e| encode_error(format, e))?;
            }
        }
        Ok(out)
    }
}
