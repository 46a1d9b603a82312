//! Render Pipeline: decode → matrix pass → overlay → encode → (persist).
//!
//! ```text
//! SourceImage ──decode──▶ RgbaImage ──draw_filtered(matrix)──▶ Surface
//!                                                      │
//!                                     fill_overlay(tint)? (preset only)
//!                                                      │
//!                                   snapshot ──encode──▶ EncodedImage
//!                                                      │
//!                          Destination? ──write_unique──▶ <prefix>-<millis>.<ext>
//! ```
//!
//! Every intermediate (source bytes, decoded buffer, surface) is owned by
//! the call and dropped before it returns, on success and on every error
//! path. Nothing is shared between calls, so [`render_batch`] runs jobs on
//! the rayon pool with no locking.
//!
//! ## Errors
//!
//! | Failure | Variant |
//! |---|---|
//! | Source unreadable or undecodable | [`RenderError::Decode`] |
//! | Same-size surface cannot be allocated | [`RenderError::SurfaceAllocation`] |
//! | Snapshot cannot be serialized | [`RenderError::Encode`] |
//! | Destination cannot be created or written | [`RenderError::Storage`] |
//!
//! Nothing is retried here. Storage errors only happen when a
//! [`Destination`] was requested.

use crate::adjustments::AdjustmentState;
use crate::compose::compose_look;
use crate::filters::FilterPreset;
use crate::imaging::{BackendError, EncodeParams, ImageBackend, OutputFormat, RustBackend};
use rayon::prelude::*;
use std::borrow::Cow;
use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::mpsc::Sender;
use std::time::{SystemTime, UNIX_EPOCH};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum RenderError {
    #[error("Cannot decode source: {0}")]
    Decode(String),
    #[error("Cannot allocate {width}x{height} surface")]
    SurfaceAllocation { width: u32, height: u32 },
    #[error("Cannot encode output: {0}")]
    Encode(String),
    #[error("Cannot write {}: {source}", path.display())]
    Storage {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
}

impl From<BackendError> for RenderError {
    fn from(e: BackendError) -> Self {
        match e {
            BackendError::Decode(msg) => RenderError::Decode(msg),
            BackendError::SurfaceAllocation { width, height } => {
                RenderError::SurfaceAllocation { width, height }
            }
            BackendError::Encode(msg) => RenderError::Encode(msg),
        }
    }
}

/// Where the pixels come from.
#[derive(Debug, Clone)]
pub enum SourceImage {
    Path(PathBuf),
    Bytes(Vec<u8>),
}

impl SourceImage {
    fn read(&self) -> Result<Cow<'_, [u8]>, RenderError> {
        match self {
            SourceImage::Path(path) => fs::read(path)
                .map(Cow::Owned)
                .map_err(|e| RenderError::Decode(format!("{}: {e}", path.display()))),
            SourceImage::Bytes(bytes) => Ok(Cow::Borrowed(bytes.as_slice())),
        }
    }

    /// Short name for progress output.
    pub fn label(&self) -> String {
        match self {
            SourceImage::Path(path) => path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_else(|| path.display().to_string()),
            SourceImage::Bytes(bytes) => format!("<{} bytes>", bytes.len()),
        }
    }
}

impl From<PathBuf> for SourceImage {
    fn from(path: PathBuf) -> Self {
        SourceImage::Path(path)
    }
}

impl From<&Path> for SourceImage {
    fn from(path: &Path) -> Self {
        SourceImage::Path(path.to_path_buf())
    }
}

impl From<Vec<u8>> for SourceImage {
    fn from(bytes: Vec<u8>) -> Self {
        SourceImage::Bytes(bytes)
    }
}

/// A writable directory plus the file-name prefix for persisted renders.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Destination {
    pub directory: PathBuf,
    pub file_prefix: String,
}

impl Destination {
    pub fn new(directory: impl Into<PathBuf>, file_prefix: impl Into<String>) -> Self {
        Self {
            directory: directory.into(),
            file_prefix: file_prefix.into(),
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct OutputOptions {
    pub encode: EncodeParams,
    /// `None` keeps the result in memory.
    pub destination: Option<Destination>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EncodedImage {
    pub bytes: Vec<u8>,
    pub format: OutputFormat,
    pub width: u32,
    pub height: u32,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderOutput {
    InMemory(EncodedImage),
    Saved { path: PathBuf, image: EncodedImage },
}

impl RenderOutput {
    pub fn image(&self) -> &EncodedImage {
        match self {
            RenderOutput::InMemory(image) | RenderOutput::Saved { image, .. } => image,
        }
    }

    pub fn path(&self) -> Option<&Path> {
        match self {
            RenderOutput::InMemory(_) => None,
            RenderOutput::Saved { path, .. } => Some(path),
        }
    }
}

/// Render with the default [`RustBackend`].
pub fn render(
    source: &SourceImage,
    adjustments: &AdjustmentState,
    filter: Option<&FilterPreset>,
    options: &OutputOptions,
) -> Result<RenderOutput, RenderError> {
    render_with_backend(&RustBackend::new(), source, adjustments, filter, options)
}

/// Render using a specific backend (allows testing with mock).
pub fn render_with_backend(
    backend: &impl ImageBackend,
    source: &SourceImage,
    adjustments: &AdjustmentState,
    filter: Option<&FilterPreset>,
    options: &OutputOptions,
) -> Result<RenderOutput, RenderError> {
    let image = paint(backend, source, adjustments, filter, &options.encode)?;
    match &options.destination {
        None => Ok(RenderOutput::InMemory(image)),
        Some(destination) => {
            let path = write_unique(destination, image.format.extension(), &image.bytes)?;
            Ok(RenderOutput::Saved { path, image })
        }
    }
}

fn paint(
    backend: &impl ImageBackend,
    source: &SourceImage,
    adjustments: &AdjustmentState,
    filter: Option<&FilterPreset>,
    encode: &EncodeParams,
) -> Result<EncodedImage, RenderError> {
    let decoded = {
        let bytes = source.read()?;
        backend.decode(&bytes)?
    };
    let (width, height) = decoded.dimensions();
    let look = compose_look(adjustments, filter);

    let mut surface = backend.allocate_surface(width, height)?;
    if (surface.width(), surface.height()) != (width, height) {
        return Err(RenderError::SurfaceAllocation { width, height });
    }
    surface.draw_filtered(&decoded, &look.matrix);
    drop(decoded);
    if let Some(tint) = look.overlay {
        surface.fill_overlay(tint);
    }

    let bytes = backend.encode(surface.snapshot(), encode)?;
    Ok(EncodedImage {
        bytes,
        format: encode.format,
        width,
        height,
    })
}

/// `<prefix>-<millis>.<ext>`, with `-<attempt>` before the extension on retries.
pub fn output_file_name(prefix: &str, millis: u128, attempt: u32, extension: &str) -> String {
    if attempt == 0 {
        format!("{prefix}-{millis}.{extension}")
    } else {
        format!("{prefix}-{millis}-{attempt}.{extension}")
    }
}

/// Write `bytes` to a path in `destination` that did not exist before.
///
/// Files are opened with create-new semantics, so concurrent renders in the
/// same millisecond never overwrite each other. A partially written file is
/// removed before the error is returned.
fn write_unique(
    destination: &Destination,
    extension: &str,
    bytes: &[u8],
) -> Result<PathBuf, RenderError> {
    let dir = &destination.directory;
    fs::create_dir_all(dir).map_err(|source| RenderError::Storage {
        path: dir.clone(),
        source,
    })?;

    let millis = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .unwrap_or_default()
        .as_millis();

    let mut attempt = 0;
    loop {
        let path = dir.join(output_file_name(
            &destination.file_prefix,
            millis,
            attempt,
            extension,
        ));
        match OpenOptions::new().write(true).create_new(true).open(&path) {
            Ok(mut file) => {
                if let Err(source) = file.write_all(bytes).and_then(|_| file.flush()) {
                    drop(file);
                    let _ = fs::remove_file(&path);
                    return Err(RenderError::Storage { path, source });
                }
                return Ok(path);
            }
            Err(e) if e.kind() == io::ErrorKind::AlreadyExists => attempt += 1,
            Err(source) => return Err(RenderError::Storage { path, source }),
        }
    }
}

// ============================================================================
// Batch rendering
// ============================================================================

/// One unit of work for [`render_batch`].
#[derive(Debug, Clone)]
pub struct RenderJob {
    pub source: SourceImage,
    pub adjustments: AdjustmentState,
    pub filter: Option<FilterPreset>,
    pub options: OutputOptions,
}

impl RenderJob {
    pub fn label(&self) -> String {
        self.source.label()
    }
}

/// Progress events emitted while a batch runs.
///
/// Events from different jobs interleave; `index` is the job's position in
/// the input slice.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RenderEvent {
    Started {
        index: usize,
        label: String,
    },
    Finished {
        index: usize,
        label: String,
        output: Option<PathBuf>,
        width: u32,
        height: u32,
        bytes: usize,
    },
    Failed {
        index: usize,
        label: String,
        error: String,
    },
}

/// Render every job in parallel. Results are returned in job order.
///
/// A failing job does not stop the others.
pub fn render_batch(
    backend: &impl ImageBackend,
    jobs: &[RenderJob],
    events: Option<Sender<RenderEvent>>,
) -> Vec<Result<RenderOutput, RenderError>> {
    jobs.par_iter()
        .enumerate()
        .map_with(events, |tx, (index, job)| {
            let label = job.label();
            emit(
                tx,
                RenderEvent::Started {
                    index,
                    label: label.clone(),
                },
            );
            let result = render_with_backend(
                backend,
                &job.source,
                &job.adjustments,
                job.filter.as_ref(),
                &job.options,
            );
            let event = match &result {
                Ok(output) => RenderEvent::Finished {
                    index,
                    label,
                    output: output.path().map(Path::to_path_buf),
                    width: output.image().width,
                    height: output.image().height,
                    bytes: output.image().bytes.len(),
                },
                Err(e) => RenderEvent::Failed {
                    index,
                    label,
                    error: e.to_string(),
                },
            };
            emit(tx, event);
            result
        })
        .collect()
}

fn emit(tx: &Option<Sender<RenderEvent>>, event: RenderEvent) {
    if let Some(tx) = tx {
        // Receiver gone means nobody is listening; the render still counts.
        let _ = tx.send(event);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::TintColor;
    use crate::filters;
    use crate::imaging::Quality;
    use crate::imaging::backend::tests::{FailAt, MockBackend, RecordedOp};
    use crate::test_helpers::{assert_pixels_near, decode_rgba, encode_png, solid_image};
    use image::RgbaImage;
    use std::sync::mpsc;
    use tempfile::TempDir;

    fn png_options() -> OutputOptions {
        OutputOptions {
            encode: EncodeParams::new(OutputFormat::Png, Quality::default()),
            destination: None,
        }
    }

    fn tinted(tint: &str) -> FilterPreset {
        FilterPreset::new("overlay", "Overlay", filters::ARTISTIC, "*")
            .tint(tint.parse::<TintColor>().unwrap())
    }

    // =========================================================================
    // Pipeline order (mock backend)
    // =========================================================================

    #[test]
    fn pipeline_decodes_allocates_same_size_and_encodes() {
        let backend = MockBackend::with_image(solid_image(12, 7, [1, 2, 3, 255]));
        let options = OutputOptions {
            encode: EncodeParams::new(OutputFormat::Avif, Quality::new(60)),
            destination: None,
        };
        let output = render_with_backend(
            &backend,
            &SourceImage::Bytes(vec![0; 9]),
            &AdjustmentState::neutral(),
            None,
            &options,
        )
        .unwrap();

        assert_eq!(
            backend.get_operations(),
            vec![
                RecordedOp::Decode { len: 9 },
                RecordedOp::Allocate {
                    width: 12,
                    height: 7
                },
                RecordedOp::Encode {
                    width: 12,
                    height: 7,
                    format: OutputFormat::Avif,
                    quality: 60,
                },
            ]
        );
        let image = output.image();
        assert_eq!((image.width, image.height), (12, 7));
        assert_eq!(image.format, OutputFormat::Avif);
        assert!(output.path().is_none());
    }

    #[test]
    fn decode_failure_stops_before_allocation() {
        let backend = MockBackend::failing_at(FailAt::Decode);
        let result = render_with_backend(
            &backend,
            &SourceImage::Bytes(vec![1]),
            &AdjustmentState::neutral(),
            None,
            &OutputOptions::default(),
        );
        assert!(matches!(result, Err(RenderError::Decode(_))));
        assert_eq!(backend.get_operations().len(), 1);
    }

    #[test]
    fn allocation_failure_maps_to_surface_error() {
        let backend = MockBackend::failing_at(FailAt::Allocate);
        let result = render_with_backend(
            &backend,
            &SourceImage::Bytes(vec![1]),
            &AdjustmentState::neutral(),
            None,
            &OutputOptions::default(),
        );
        assert!(matches!(
            result,
            Err(RenderError::SurfaceAllocation {
                width: 2,
                height: 2
            })
        ));
    }

    #[test]
    fn wrong_size_surface_is_surface_error() {
        let backend = MockBackend::with_surface_size(1, 2);
        let result = render_with_backend(
            &backend,
            &SourceImage::Bytes(vec![1]),
            &AdjustmentState::neutral(),
            None,
            &OutputOptions::default(),
        );
        assert!(matches!(
            result,
            Err(RenderError::SurfaceAllocation {
                width: 2,
                height: 2
            })
        ));
        assert!(
            !backend
                .get_operations()
                .iter()
                .any(|op| matches!(op, RecordedOp::Encode { .. }))
        );
    }

    #[test]
    fn encode_failure_maps_to_encode_error() {
        let backend = MockBackend::failing_at(FailAt::Encode);
        let result = render_with_backend(
            &backend,
            &SourceImage::Bytes(vec![1]),
            &AdjustmentState::neutral(),
            None,
            &OutputOptions::default(),
        );
        assert!(matches!(result, Err(RenderError::Encode(_))));
    }

    #[test]
    fn missing_source_file_is_decode_error() {
        let tmp = TempDir::new().unwrap();
        let result = render(
            &SourceImage::Path(tmp.path().join("nope.jpg")),
            &AdjustmentState::neutral(),
            None,
            &OutputOptions::default(),
        );
        assert!(matches!(result, Err(RenderError::Decode(_))));
    }

    #[test]
    fn mock_passes_matrix_result_to_encoder() {
        // MockBackend encodes to the raw RGBA buffer, so the output bytes are the pixels.
        let backend = MockBackend::with_image(solid_image(1, 1, [100, 100, 100, 255]));
        let mut adjustments = AdjustmentState::neutral();
        adjustments.brightness = 0.2;
        let output = render_with_backend(
            &backend,
            &SourceImage::Bytes(vec![0]),
            &adjustments,
            None,
            &OutputOptions::default(),
        )
        .unwrap();
        assert_eq!(output.image().bytes, vec![151, 151, 151, 255]);
    }

    // =========================================================================
    // Real backend round-trips
    // =========================================================================

    #[test]
    fn neutral_jpeg_round_trip_stays_within_one_level() {
        let source = solid_image(32, 32, [128, 128, 128, 255]);
        let output = render(
            &SourceImage::Bytes(encode_png(&source)),
            &AdjustmentState::neutral(),
            None,
            &OutputOptions::default(),
        )
        .unwrap();
        assert_eq!(output.image().format, OutputFormat::Jpeg);
        assert_pixels_near(&decode_rgba(&output.image().bytes), &source, 1);
    }

    #[test]
    fn neutral_png_round_trip_is_exact() {
        let source = RgbaImage::from_fn(10, 6, |x, y| {
            image::Rgba([x as u8 * 25, y as u8 * 40, 9, 255])
        });
        let output = render(
            &SourceImage::Bytes(encode_png(&source)),
            &AdjustmentState::neutral(),
            Some(filters::original()),
            &png_options(),
        )
        .unwrap();
        assert_eq!(decode_rgba(&output.image().bytes), source);
    }

    #[test]
    fn opaque_red_overlay_occludes_everything() {
        let source = RgbaImage::from_fn(8, 8, |x, y| {
            image::Rgba([x as u8 * 30, 255, y as u8 * 30, 255])
        });
        let mut adjustments = AdjustmentState::neutral();
        adjustments.saturation = 1.8;
        adjustments.brightness = -0.3;
        let output = render(
            &SourceImage::Bytes(encode_png(&source)),
            &adjustments,
            Some(&tinted("rgba(255,0,0,1.0)")),
            &png_options(),
        )
        .unwrap();
        let rendered = decode_rgba(&output.image().bytes);
        assert!(rendered.pixels().all(|p| p.0 == [255, 0, 0, 255]));
    }

    #[test]
    fn opaque_red_overlay_survives_jpeg() {
        let source = solid_image(16, 16, [0, 200, 40, 255]);
        let output = render(
            &SourceImage::Bytes(encode_png(&source)),
            &AdjustmentState::neutral(),
            Some(&tinted("rgba(255, 0, 0, 1)")),
            &OutputOptions::default(),
        )
        .unwrap();
        let rendered = decode_rgba(&output.image().bytes);
        assert_pixels_near(&rendered, &solid_image(16, 16, [255, 0, 0, 255]), 3);
    }

    #[test]
    fn transparent_source_renders_black_in_jpeg() {
        let mut source = solid_image(16, 16, [255, 0, 0, 0]);
        for x in 8..16 {
            for y in 0..16 {
                source.put_pixel(x, y, image::Rgba([255, 255, 255, 128]));
            }
        }
        let output = render(
            &SourceImage::Bytes(encode_png(&source)),
            &AdjustmentState::neutral(),
            None,
            &OutputOptions::default(),
        )
        .unwrap();
        let rendered = decode_rgba(&output.image().bytes);
        // Sample away from the edge between the two halves.
        let hidden = rendered.get_pixel(2, 8).0;
        let half = rendered.get_pixel(13, 8).0;
        assert!(hidden[..3].iter().all(|&c| c <= 4), "got {hidden:?}");
        assert!(half[..3].iter().all(|&c| c.abs_diff(128) <= 4), "got {half:?}");
    }

    #[test]
    fn catalog_filter_changes_pixels() {
        let source = solid_image(4, 4, [180, 90, 40, 255]);
        let output = render(
            &SourceImage::Bytes(encode_png(&source)),
            &AdjustmentState::neutral(),
            filters::find("noir"),
            &png_options(),
        )
        .unwrap();
        let p = decode_rgba(&output.image().bytes).get_pixel(0, 0).0;
        assert_eq!(p[0], p[1]);
        assert_eq!(p[1], p[2]);
    }

    // =========================================================================
    // Persistence
    // =========================================================================

    #[test]
    fn output_file_name_format() {
        assert_eq!(
            output_file_name("PixelForge", 1700000000123, 0, "jpg"),
            "PixelForge-1700000000123.jpg"
        );
        assert_eq!(
            output_file_name("PixelForge", 42, 3, "png"),
            "PixelForge-42-3.png"
        );
    }

    #[test]
    fn saved_render_writes_encoded_bytes() {
        let tmp = TempDir::new().unwrap();
        let source_path = tmp.path().join("in.png");
        fs::write(&source_path, encode_png(&solid_image(5, 5, [9, 9, 9, 255]))).unwrap();

        let options = OutputOptions {
            encode: EncodeParams::new(OutputFormat::Png, Quality::default()),
            destination: Some(Destination::new(tmp.path().join("out/nested"), "Edit")),
        };
        let output = render(
            &SourceImage::from(source_path.as_path()),
            &AdjustmentState::neutral(),
            None,
            &options,
        )
        .unwrap();

        let path = output.path().unwrap();
        assert!(path.starts_with(tmp.path().join("out/nested")));
        let name = path.file_name().unwrap().to_str().unwrap();
        assert!(name.starts_with("Edit-"));
        assert!(name.ends_with(".png"));
        assert_eq!(fs::read(path).unwrap(), output.image().bytes);
    }

    #[test]
    fn repeated_saves_never_collide() {
        let tmp = TempDir::new().unwrap();
        let backend = MockBackend::new();
        let options = OutputOptions {
            encode: EncodeParams::default(),
            destination: Some(Destination::new(tmp.path(), "Same")),
        };
        let mut paths = Vec::new();
        for _ in 0..5 {
            let output = render_with_backend(
                &backend,
                &SourceImage::Bytes(vec![0]),
                &AdjustmentState::neutral(),
                None,
                &options,
            )
            .unwrap();
            paths.push(output.path().unwrap().to_path_buf());
        }
        paths.sort();
        paths.dedup();
        assert_eq!(paths.len(), 5);
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 5);
    }

    #[test]
    fn unwritable_destination_is_storage_error() {
        let tmp = TempDir::new().unwrap();
        let blocker = tmp.path().join("file");
        fs::write(&blocker, b"not a dir").unwrap();

        let options = OutputOptions {
            encode: EncodeParams::default(),
            destination: Some(Destination::new(blocker.join("sub"), "X")),
        };
        let result = render_with_backend(
            &MockBackend::new(),
            &SourceImage::Bytes(vec![0]),
            &AdjustmentState::neutral(),
            None,
            &options,
        );
        assert!(matches!(result, Err(RenderError::Storage { .. })));
    }

    #[test]
    fn only_a_destination_writes_files() {
        let tmp = TempDir::new().unwrap();
        let saved = OutputOptions {
            encode: EncodeParams::default(),
            destination: Some(Destination::new(tmp.path(), "Kept")),
        };
        let in_memory = OutputOptions {
            destination: None,
            ..saved.clone()
        };
        let backend = MockBackend::new();
        let source = SourceImage::Bytes(vec![0]);
        let neutral = AdjustmentState::neutral();

        let output = render_with_backend(&backend, &source, &neutral, None, &in_memory).unwrap();
        assert!(matches!(output, RenderOutput::InMemory(_)));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 0);

        let output = render_with_backend(&backend, &source, &neutral, None, &saved).unwrap();
        assert!(output.path().unwrap().starts_with(tmp.path()));
        assert_eq!(fs::read_dir(tmp.path()).unwrap().count(), 1);
    }

    // =========================================================================
    // Batch
    // =========================================================================

    fn job(source: SourceImage) -> RenderJob {
        RenderJob {
            source,
            adjustments: AdjustmentState::neutral(),
            filter: None,
            options: png_options(),
        }
    }

    #[test]
    fn batch_results_keep_job_order_and_isolate_failures() {
        let good = encode_png(&solid_image(3, 2, [50, 60, 70, 255]));
        let jobs = vec![
            job(SourceImage::Bytes(good.clone())),
            job(SourceImage::Bytes(b"garbage".to_vec())),
            job(SourceImage::Bytes(encode_png(&solid_image(6, 1, [1, 1, 1, 255])))),
        ];
        let results = render_batch(&RustBackend::new(), &jobs, None);

        assert_eq!(results.len(), 3);
        assert_eq!(results[0].as_ref().unwrap().image().width, 3);
        assert!(matches!(results[1], Err(RenderError::Decode(_))));
        assert_eq!(results[2].as_ref().unwrap().image().width, 6);
    }

    #[test]
    fn batch_emits_start_and_end_for_every_job() {
        let jobs = vec![
            job(SourceImage::Bytes(encode_png(&solid_image(2, 2, [0, 0, 0, 255])))),
            job(SourceImage::Bytes(Vec::new())),
        ];
        let (tx, rx) = mpsc::channel();
        render_batch(&RustBackend::new(), &jobs, Some(tx));
        let events: Vec<RenderEvent> = rx.iter().collect();

        assert_eq!(events.len(), 4);
        let started = events
            .iter()
            .filter(|e| matches!(e, RenderEvent::Started { .. }))
            .count();
        assert_eq!(started, 2);
        assert!(events.iter().any(|e| matches!(
            e,
            RenderEvent::Finished {
                index: 0,
                width: 2,
                height: 2,
                output: None,
                ..
            }
        )));
        assert!(
            events
                .iter()
                .any(|e| matches!(e, RenderEvent::Failed { index: 1, .. }))
        );
    }

    #[test]
    fn source_labels() {
        assert_eq!(
            SourceImage::from(PathBuf::from("/a/b/photo.jpg")).label(),
            "photo.jpg"
        );
        assert_eq!(SourceImage::from(vec![0u8; 4]).label(), "<4 bytes>");
    }
}
