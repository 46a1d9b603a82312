//! Flat overlay colors in CSS `rgba()` notation.
//!
//! Filter presets carry their tint as text, e.g. `rgba(255, 230, 200, 0.08)`:
//! three integer channels in 0–255 and an alpha in 0–1. `rgb(r, g, b)` is
//! accepted as shorthand for alpha 1.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ColorParseError {
    #[error("expected rgba(r, g, b, a) or rgb(r, g, b), got {0:?}")]
    Syntax(String),
    #[error("channel {channel} out of range 0-255: {value:?}")]
    Channel { channel: char, value: String },
    #[error("alpha out of range 0-1: {0:?}")]
    Alpha(String),
}

/// Solid translucent color composited over the whole frame.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct TintColor {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    /// Straight (non-premultiplied) alpha, 0–1.
    pub a: f64,
}

impl TintColor {
    pub const fn new(r: u8, g: u8, b: u8, a: f64) -> Self {
        Self { r, g, b, a }
    }

    pub const fn opaque(r: u8, g: u8, b: u8) -> Self {
        Self::new(r, g, b, 1.0)
    }

    /// Channels normalized to 0–1, alpha last.
    pub fn to_unit(self) -> [f64; 4] {
        [
            self.r as f64 / 255.0,
            self.g as f64 / 255.0,
            self.b as f64 / 255.0,
            self.a,
        ]
    }
}

impl FromStr for TintColor {
    type Err = ColorParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let text = s.trim();
        let syntax = || ColorParseError::Syntax(s.to_string());

        let (args, expected) = if let Some(rest) = text.strip_prefix("rgba") {
            (rest, 4)
        } else if let Some(rest) = text.strip_prefix("rgb") {
            (rest, 3)
        } else {
            return Err(syntax());
        };
        let inner = args
            .trim_start()
            .strip_prefix('(')
            .and_then(|rest| rest.trim_end().strip_suffix(')'))
            .ok_or_else(syntax)?;

        let parts: Vec<&str> = inner.split(',').map(str::trim).collect();
        if parts.len() != expected {
            return Err(syntax());
        }

        let channel = |name: char, raw: &str| {
            raw.parse::<u8>().map_err(|_| ColorParseError::Channel {
                channel: name,
                value: raw.to_string(),
            })
        };
        let r = channel('r', parts[0])?;
        let g = channel('g', parts[1])?;
        let b = channel('b', parts[2])?;

        let a = match parts.get(3) {
            Some(raw) => {
                let a: f64 = raw
                    .parse()
                    .map_err(|_| ColorParseError::Alpha(raw.to_string()))?;
                if !(0.0..=1.0).contains(&a) {
                    return Err(ColorParseError::Alpha(raw.to_string()));
                }
                a
            }
            None => 1.0,
        };

        Ok(Self { r, g, b, a })
    }
}

impl fmt::Display for TintColor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "rgba({}, {}, {}, {})", self.r, self.g, self.b, self.a)
    }
}

impl TryFrom<String> for TintColor {
    type Error = ColorParseError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<TintColor> for String {
    fn from(color: TintColor) -> Self {
        color.to_string()
    }
}
