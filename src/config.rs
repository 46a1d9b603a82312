//! Engine configuration module.
//!
//! Handles loading, validating, and merging `pixelforge.toml`. Stock defaults
//! are the base layer; the user file only needs the keys it wants to change.
//!
//! ## Configuration Options
//!
//! ```toml
//! # All options are optional - defaults shown below
//!
//! [output]
//! format = "jpeg"           # jpeg | png | webp | avif
//! quality = 90              # JPEG/AVIF quality (1-100)
//! # directory = "edits"     # Where saved renders go (omit for the system temp dir)
//! file_prefix = "PixelForge" # Saved files are <prefix>-<unix millis>.<ext>
//!
//! [render]
//! # max_surface_pixels = 100000000  # Refuse larger sources (omit for no limit)
//!
//! [processing]
//! max_processes = 4         # Max parallel renders (omit for auto = CPU cores)
//!
//! [presets]
//! store = "presets.json"    # Saved user presets
//! ```
//!
//! ## Partial Configuration
//!
//! ```toml
//! # Only switch to lossless output
//! [output]
//! format = "png"
//! ```
//!
//! Unknown keys are rejected to catch typos early.

use crate::imaging::{EncodeParams, OutputFormat, Quality};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

/// Default config file name looked up by the CLI.
pub const CONFIG_FILE_NAME: &str = "pixelforge.toml";

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("TOML parse error: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("TOML serialize error: {0}")]
    Serialize(#[from] toml::ser::Error),
    #[error("Config validation error: {0}")]
    Validation(String),
}

/// Engine configuration loaded from `pixelforge.toml`.
///
/// All fields have sensible defaults. Unknown keys are rejected.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EngineConfig {
    /// Encoding and persistence of rendered images.
    pub output: OutputConfig,
    /// Surface limits.
    pub render: RenderConfig,
    /// Parallel processing settings.
    pub processing: ProcessingConfig,
    /// User preset storage.
    pub presets: PresetsConfig,
}

impl EngineConfig {
    /// Validate config values are within acceptable ranges.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(1..=100).contains(&self.output.quality) {
            return Err(ConfigError::Validation(
                "output.quality must be 1-100".into(),
            ));
        }
        if self.output.file_prefix.trim().is_empty() {
            return Err(ConfigError::Validation(
                "output.file_prefix must not be empty".into(),
            ));
        }
        if self.output.file_prefix.contains(['/', '\\']) {
            return Err(ConfigError::Validation(
                "output.file_prefix must not contain path separators".into(),
            ));
        }
        if self.render.max_surface_pixels == Some(0) {
            return Err(ConfigError::Validation(
                "render.max_surface_pixels must be greater than 0".into(),
            ));
        }
        if self.processing.max_processes == Some(0) {
            return Err(ConfigError::Validation(
                "processing.max_processes must be greater than 0".into(),
            ));
        }
        Ok(())
    }

    pub fn encode_params(&self) -> EncodeParams {
        EncodeParams::new(self.output.format, Quality::new(self.output.quality))
    }
}

/// Encoding and persistence settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Output codec.
    pub format: OutputFormat,
    /// Lossy encoding quality (1 = worst, 100 = best). Ignored by PNG and WebP.
    pub quality: u32,
    /// Directory for saved renders. `None` means the system temp directory.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
    /// File-name prefix for saved renders.
    pub file_prefix: String,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            format: OutputFormat::Jpeg,
            quality: 90,
            directory: None,
            file_prefix: "PixelForge".to_string(),
        }
    }
}

impl OutputConfig {
    /// `directory`, falling back to the system temp directory.
    pub fn resolved_directory(&self) -> PathBuf {
        self.directory.clone().unwrap_or_else(std::env::temp_dir)
    }
}

/// Surface settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RenderConfig {
    /// Sources with more pixels than this fail with a surface allocation error.
    /// When absent, only the allocator limits the surface size.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_surface_pixels: Option<u64>,
}

/// Parallel processing settings.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ProcessingConfig {
    /// Maximum number of parallel render workers.
    /// When absent or null, defaults to the number of CPU cores.
    /// Values larger than the core count are clamped down.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_processes: Option<usize>,
}

/// Resolve the effective thread count from config.
///
/// - `None` → use all available cores
/// - `Some(n)` → use `min(n, cores)` (user can constrain down, not up)
pub fn effective_threads(config: &ProcessingConfig) -> usize {
    let cores = std::thread::available_parallelism()
        .map(|n| n.get())
        .unwrap_or(1);
    config.max_processes.map(|n| n.min(cores)).unwrap_or(cores)
}

/// User preset storage settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PresetsConfig {
    /// JSON file holding saved presets.
    pub store: PathBuf,
}

impl Default for PresetsConfig {
    fn default() -> Self {
        Self {
            store: PathBuf::from("presets.json"),
        }
    }
}

// =============================================================================
// Config loading, merging, and validation
// =============================================================================

/// Returns the stock default config as a `toml::Value::Table`.
///
/// This is the canonical representation of all default values, used as the
/// base layer for merging user overrides on top.
pub fn stock_defaults_value() -> Result<toml::Value, ConfigError> {
    Ok(toml::Value::try_from(EngineConfig::default())?)
}

/// Recursively merge `overlay` on top of `base`.
///
/// - Tables are merged key-by-key (overlay keys override base keys).
/// - Non-table values in overlay replace base values entirely.
/// - Keys in base that are not in overlay are preserved.
pub fn merge_toml(base: toml::Value, overlay: toml::Value) -> toml::Value {
    match (base, overlay) {
        (toml::Value::Table(mut base_table), toml::Value::Table(overlay_table)) => {
            for (key, overlay_val) in overlay_table {
                let merged = match base_table.remove(&key) {
                    Some(base_val) => merge_toml(base_val, overlay_val),
                    None => overlay_val,
                };
                base_table.insert(key, merged);
            }
            toml::Value::Table(base_table)
        }
        (_, overlay) => overlay,
    }
}

/// Load a config file as a raw TOML value.
///
/// Returns `Ok(None)` if the file does not exist.
/// Returns `Err` if the file exists but contains invalid TOML.
pub fn load_raw_config(path: &Path) -> Result<Option<toml::Value>, ConfigError> {
    if !path.exists() {
        return Ok(None);
    }
    let content = fs::read_to_string(path)?;
    let value: toml::Value = toml::from_str(&content)?;
    Ok(Some(value))
}

/// Merge an optional overlay onto a base value, then deserialize and validate.
pub fn resolve_config(
    base: toml::Value,
    overlay: Option<toml::Value>,
) -> Result<EngineConfig, ConfigError> {
    let merged = match overlay {
        Some(ov) => merge_toml(base, ov),
        None => base,
    };
    let config: EngineConfig = merged.try_into()?;
    config.validate()?;
    Ok(config)
}

/// Load config from the given file.
///
/// Merges user values on top of stock defaults, rejects unknown keys,
/// and validates the result. A missing file yields the stock defaults.
pub fn load_config(path: &Path) -> Result<EngineConfig, ConfigError> {
    let base = stock_defaults_value()?;
    let overlay = load_raw_config(path)?;
    resolve_config(base, overlay)
}

/// Returns a fully-commented stock `pixelforge.toml` with all keys and explanations.
///
/// Used by the `gen-config` CLI command.
pub fn stock_config_toml() -> &'static str {
    r##"# PixelForge Configuration
# ========================
# All settings are optional. Remove or comment out any you don't need.
# Values shown below are the defaults.
#
# Only the keys you want to override are needed.
# Unknown keys will cause an error.

# ---------------------------------------------------------------------------
# Output
# ---------------------------------------------------------------------------
[output]
# Codec for rendered images: "jpeg", "png", "webp" or "avif".
# PNG and WebP are lossless; JPEG drops the alpha channel.
format = "jpeg"

# JPEG/AVIF encoding quality (1 = worst, 100 = best).
quality = 90

# Directory for saved renders. Omit to use the system temp directory.
# directory = "edits"

# Saved files are named <file_prefix>-<unix millis>.<ext>.
file_prefix = "PixelForge"

# ---------------------------------------------------------------------------
# Render
# ---------------------------------------------------------------------------
[render]
# Refuse sources whose width x height exceeds this many pixels.
# Omit for no limit beyond available memory.
# max_surface_pixels = 100000000

# ---------------------------------------------------------------------------
# Processing
# ---------------------------------------------------------------------------
[processing]
# Maximum parallel renders.
# Omit or comment out to auto-detect (= number of CPU cores).
# max_processes = 4

# ---------------------------------------------------------------------------
# Presets
# ---------------------------------------------------------------------------
[presets]
# JSON file where saved presets are appended.
store = "presets.json"
"##
}
