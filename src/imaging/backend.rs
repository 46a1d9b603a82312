//! Image backend trait and shared error type.
//!
//! The [`ImageBackend`] trait is the seam to the image-rendering surface:
//! decode encoded bytes into pixels, allocate a same-size drawing
//! [`Surface`], and encode a finished snapshot. The render pipeline only
//! talks to this trait, so tests can swap in a recording mock.
//!
//! The production implementation is
//! [`RustBackend`](super::rust_backend::RustBackend), built on the `image` crate,
//! pure Rust, statically linked.

use super::params::EncodeParams;
use super::surface::Surface;
use image::RgbaImage;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum BackendError {
    #[error("Decode failed: {0}")]
    Decode(String),
    #[error("Cannot allocate {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },
    #[error("Encode failed: {0}")]
    Encode(String),
}

/// Trait for image backends.
///
/// Implementations must be `Sync`: batch renders share one backend across
/// the rayon pool. Every call owns its buffers, so no locking is needed
/// unless the underlying library has global state.
pub trait ImageBackend: Sync {
    /// Decode an encoded image into straight-alpha RGBA8 at its native size.
    fn decode(&self, bytes: &[u8]) -> Result<RgbaImage, BackendError>;

    /// Allocate a transparent surface of exactly `width` × `height`.
    fn allocate_surface(&self, width: u32, height: u32) -> Result<Surface, BackendError>;

    /// Serialize a surface snapshot.
    fn encode(&self, image: &RgbaImage, params: &EncodeParams) -> Result<Vec<u8>, BackendError>;
}
