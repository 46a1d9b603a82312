//! User presets: saved slider + filter snapshots.
//!
//! A [`UserPreset`] is `{ name, adjustments, filter }`. Presets are kept in a
//! JSON array on disk ([`PresetStore`]) and only ever appended to; editing
//! and deleting belong to whatever UI sits on top.
//!
//! Presets travel between devices as a *share code*: the preset's JSON,
//! meant to be rendered as a QR code by the host. Imports accept any JSON
//! object with a non-empty `name` and an `adjustments` object; missing
//! slider fields fall back to neutral.
//!
//! Storage is separate from rendering. The render pipeline only sees the
//! [`Look`] a preset resolves to.

use crate::adjustments::AdjustmentState;
use crate::compose::{Look, compose_look};
use crate::filters::{self, FilterPreset};
use serde::{Deserialize, Serialize};
use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum PresetError {
    #[error("IO error: {0}")]
    Io(#[from] io::Error),
    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),
    #[error("Preset name must not be blank")]
    BlankName,
    #[error("Not a valid preset share code: {0}")]
    InvalidShareCode(String),
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct UserPreset {
    pub name: String,
    pub adjustments: AdjustmentState,
    /// `None` means "Original".
    #[serde(default)]
    pub filter: Option<FilterPreset>,
}

impl UserPreset {
    pub fn new(
        name: &str,
        adjustments: AdjustmentState,
        filter: Option<FilterPreset>,
    ) -> Result<Self, PresetError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PresetError::BlankName);
        }
        Ok(Self {
            name: name.to_string(),
            adjustments,
            filter,
        })
    }

    /// The filter to apply: the saved one, or "Original" when none was saved.
    pub fn resolved_filter(&self) -> &FilterPreset {
        self.filter.as_ref().unwrap_or_else(|| filters::original())
    }

    pub fn look(&self) -> Look {
        compose_look(&self.adjustments, Some(self.resolved_filter()))
    }
}

/// Append-only JSON file of [`UserPreset`]s.
#[derive(Debug, Clone)]
pub struct PresetStore {
    path: PathBuf,
}

impl PresetStore {
    pub fn open(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    /// All saved presets in save order. A missing store is empty.
    pub fn load(&self) -> Result<Vec<UserPreset>, PresetError> {
        let content = match fs::read_to_string(&self.path) {
            Ok(content) => content,
            Err(e) if e.kind() == io::ErrorKind::NotFound => return Ok(Vec::new()),
            Err(e) => return Err(e.into()),
        };
        if content.trim().is_empty() {
            return Ok(Vec::new());
        }
        Ok(serde_json::from_str(&content)?)
    }

    /// Append `preset` and rewrite the store.
    ///
    /// The new list goes to a uniquely named sibling temp file first and is
    /// renamed over the store, so a failed write leaves the previous list
    /// intact. The store has a single writer: two processes appending at
    /// the same moment each rewrite the list they loaded, and the later
    /// rename wins.
    pub fn append(&self, preset: UserPreset) -> Result<Vec<UserPreset>, PresetError> {
        if preset.name.trim().is_empty() {
            return Err(PresetError::BlankName);
        }
        let mut presets = self.load()?;
        presets.push(preset);

        let parent = match self.path.parent() {
            Some(p) if !p.as_os_str().is_empty() => p,
            _ => Path::new("."),
        };
        fs::create_dir_all(parent)?;
        let json = serde_json::to_string_pretty(&presets)?;
        let mut tmp = NamedTempFile::new_in(parent)?;
        tmp.write_all(json.as_bytes())?;
        tmp.persist(&self.path).map_err(|e| e.error)?;
        Ok(presets)
    }

    /// Latest preset saved under `name`. Names are not unique.
    pub fn find(&self, name: &str) -> Result<Option<UserPreset>, PresetError> {
        Ok(self.load()?.into_iter().rev().find(|p| p.name == name))
    }
}

/// Encode a preset as a share code.
pub fn share_code(preset: &UserPreset) -> Result<String, PresetError> {
    Ok(serde_json::to_string(preset)?)
}

/// Decode a share code produced by [`share_code`] or another client.
pub fn import_share_code(code: &str) -> Result<UserPreset, PresetError> {
    let value: serde_json::Value = serde_json::from_str(code.trim())
        .map_err(|e| PresetError::InvalidShareCode(e.to_string()))?;

    let has_name = value
        .get("name")
        .and_then(|n| n.as_str())
        .is_some_and(|n| !n.trim().is_empty());
    if !has_name {
        return Err(PresetError::InvalidShareCode("missing name".into()));
    }
    if !value.get("adjustments").is_some_and(|a| a.is_object()) {
        return Err(PresetError::InvalidShareCode("missing adjustments".into()));
    }

    serde_json::from_value(value).map_err(|e| PresetError::InvalidShareCode(e.to_string()))
}
