//! Image I/O and pixel work in pure Rust, with no system libraries.
//!
//! | Operation | Crate / function |
//! |---|---|
//! | **Decode** | `image::load_from_memory` → straight-alpha RGBA8 |
//! | **Surface** | [`Surface`]: fallible allocation, matrix draw, overlay fill |
//! | **Encode** | JPEG / PNG / WebP / AVIF via `image::codecs` |
//!
//! The module is split into:
//! - **Parameters**: [`Quality`], [`OutputFormat`], [`EncodeParams`]
//! - **Surface**: the same-size drawing target and its two paint passes
//! - **Backend**: [`ImageBackend`] trait + [`RustBackend`]

pub mod backend;
mod params;
pub mod rust_backend;
mod surface;

pub use backend::{BackendError, ImageBackend};
pub use params::{EncodeParams, OutputFormat, Quality};
pub use rust_backend::{RustBackend, supported_input_extensions};
pub use surface::Surface;
