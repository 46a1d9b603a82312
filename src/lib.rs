//! # PixelForge
//!
//! The color-adjustment engine of a photo editor: five sliders and a filter
//! preset go in, one 4×5 color matrix comes out, and that matrix (plus an
//! optional flat tint) is painted over a decoded image and re-encoded.
//!
//! # Architecture: Compose, Then Render
//!
//! ```text
//! AdjustmentState + FilterPreset?  ──compose──▶  ColorMatrix (+ overlay tint)
//!                                                     │
//! source bytes ──decode──▶ pixels ──matrix pass──▶ surface ──overlay──▶ encode ──▶ bytes / file
//! ```
//!
//! The two halves differ in kind:
//!
//! - **Compose** is pure arithmetic on `f64`: no I/O, no errors, no clamping.
//!   It can be called from any thread, as often as a slider moves.
//! - **Render** does I/O and allocates one image-sized surface. Each call
//!   owns its buffers, so batches run in parallel with no locks.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`adjustments`] | The five sliders, their domains and neutral values |
//! | [`color`] | `rgba(r, g, b, a)` tint colors |
//! | [`filters`] | The built-in filter preset catalog and lookups |
//! | [`matrix`] | 4×5 color matrix, step builders, offsets-add composition |
//! | [`compose`] | Slider + preset merge and the fixed composition order |
//! | [`imaging`] | Decode/encode backend, drawing surface, encode parameters |
//! | [`render`] | Render pipeline, unique output naming, parallel batches |
//! | [`presets`] | Saved user presets and share codes |
//! | [`config`] | `pixelforge.toml` loading, merging, and validation |
//! | [`output`] | CLI output formatting |
//!
//! # Design Decisions
//!
//! ## Offsets Add, Linear Blocks Multiply
//!
//! Two matrices are combined by multiplying their 4×4 linear blocks and
//! *adding* their offset columns. This is not a homogeneous 5×5 product:
//! a later step's scale does not apply to an earlier step's offset. The
//! textbook product would change every brightness + temperature result.
//! See [`matrix::ColorMatrix::multiply`].
//!
//! ## One Clamp, At Quantization
//!
//! [`compose::compose`] never clamps; extreme sliders produce extreme but
//! well-defined matrices. Channel values are clamped to `[0, 1]` exactly
//! once, when the surface converts the matrix output back to 8 bits.
//!
//! ## Presets Are Baselines, Not Replacements
//!
//! A filter preset and the live sliders apply together. Brightness adds,
//! contrast and saturation multiply, and temperature/tint come only from
//! the sliders. A preset's tint color is not matrix math at all: it is a
//! flat source-over fill painted after the matrix pass.
//!
//! ## Storage Stays Out Of The Pipeline
//!
//! Rendering takes plain values. Loading and saving presets lives in
//! [`presets`]; the only file the pipeline writes is its own output, and
//! only when a destination was requested.
//!
//! ## Pure-Rust Imaging
//!
//! Decoding and encoding use the `image` crate (AVIF through `rav1e`), so
//! the binary has no system dependencies.

pub mod adjustments;
pub mod color;
pub mod compose;
pub mod config;
pub mod filters;
pub mod imaging;
pub mod matrix;
pub mod output;
pub mod presets;
pub mod render;

#[cfg(test)]
pub(crate) mod test_helpers;
