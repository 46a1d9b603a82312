//! Same-size RGBA drawing surface.
//!
//! A [`Surface`] starts fully transparent. Drawing the source through a
//! color matrix onto it and then painting a flat overlay reproduces what a
//! canvas with a matrix color filter and a full-frame rect would produce:
//!
//! 1. [`Surface::draw_filtered`]: every source pixel (straight alpha,
//!    0–1) goes through the 4×5 matrix. Results are clamped to 0–1 when
//!    quantized back to 8 bits; that quantization is the only clamp.
//! 2. [`Surface::fill_overlay`]: source-over blend of one translucent
//!    color across the whole frame.
//!
//! Both passes are parallel over pixels.

use super::backend::BackendError;
use crate::color::TintColor;
use crate::matrix::ColorMatrix;
use image::RgbaImage;
use rayon::prelude::*;

pub struct Surface {
    image: RgbaImage,
}

impl Surface {
    /// Allocate a transparent surface, failing instead of aborting when
    /// the buffer cannot be reserved.
    pub fn allocate(width: u32, height: u32) -> Result<Self, BackendError> {
        let failed = || BackendError::SurfaceAllocation { width, height };
        if width == 0 || height == 0 {
            return Err(failed());
        }
        let len = (width as usize)
            .checked_mul(height as usize)
            .and_then(|n| n.checked_mul(4))
            .ok_or_else(failed)?;

        let mut buffer: Vec<u8> = Vec::new();
        buffer.try_reserve_exact(len).map_err(|_| failed())?;
        buffer.resize(len, 0);

        let image = RgbaImage::from_raw(width, height, buffer).ok_or_else(failed)?;
        Ok(Self { image })
    }

    pub fn width(&self) -> u32 {
        self.image.width()
    }

    pub fn height(&self) -> u32 {
        self.image.height()
    }

    /// Draw `source` through `matrix`, replacing the surface contents.
    ///
    /// The surface is transparent before this pass, so source-over of the
    /// filtered pixel equals the filtered pixel.
    pub fn draw_filtered(&mut self, source: &RgbaImage, matrix: &ColorMatrix) {
        debug_assert_eq!(source.dimensions(), self.image.dimensions());
        let dst: &mut [u8] = &mut self.image;
        dst.par_chunks_exact_mut(4)
            .zip(source.as_raw().par_chunks_exact(4))
            .for_each(|(d, s)| {
                let out = matrix.apply([unit(s[0]), unit(s[1]), unit(s[2]), unit(s[3])]);
                for (slot, value) in d.iter_mut().zip(out) {
                    *slot = quantize(value);
                }
            });
    }

    /// Source-over composite `color` onto every pixel.
    pub fn fill_overlay(&mut self, color: TintColor) {
        let [sr, sg, sb, sa] = color.to_unit();
        let sa = sa.clamp(0.0, 1.0);
        if sa == 0.0 {
            return;
        }
        let dst: &mut [u8] = &mut self.image;
        dst.par_chunks_exact_mut(4).for_each(|d| {
            let da = unit(d[3]);
            let out_a = sa + da * (1.0 - sa);
            if out_a <= 0.0 {
                d.fill(0);
                return;
            }
            let blend = |s: f64, d: u8| (s * sa + unit(d) * da * (1.0 - sa)) / out_a;
            d[0] = quantize(blend(sr, d[0]));
            d[1] = quantize(blend(sg, d[1]));
            d[2] = quantize(blend(sb, d[2]));
            d[3] = quantize(out_a);
        });
    }

    /// Read-only view of the current pixels, for encoding.
    pub fn snapshot(&self) -> &RgbaImage {
        &self.image
    }
}

#[inline]
fn unit(v: u8) -> f64 {
    v as f64 / 255.0
}

#[inline]
fn quantize(v: f64) -> u8 {
    (v.clamp(0.0, 1.0) * 255.0).round() as u8
}
