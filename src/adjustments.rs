//! The five user-tunable adjustment sliders.
//!
//! Every field is always present. The neutral tuple
//! `(brightness, contrast, saturation, temperature, tint) = (0, 1, 1, 0, 0)`
//! composes to the identity matrix.
//!
//! | Slider | Domain | Neutral | Effect |
//! |---|---|---|---|
//! | brightness | -1 … 1 | 0 | additive offset on R, G, B |
//! | contrast | 0 … 1.5 | 1 | scale around mid-gray |
//! | saturation | 0 … 2 | 1 | scale chroma around luma |
//! | temperature | -1 … 1 | 0 | warm (red up, blue down) / cool |
//! | tint | -1 … 1 | 0 | green / magenta |
//!
//! Domains describe the slider range a host should offer. The composer
//! accepts values outside them unchanged; [`AdjustmentState::clamped`] is
//! available for callers that want to enforce the range.

use serde::{Deserialize, Serialize};
use std::fmt;
use std::ops::RangeInclusive;

/// Live slider values.
///
/// Missing fields deserialize to their neutral value.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AdjustmentState {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub temperature: f64,
    pub tint: f64,
}

impl AdjustmentState {
    pub const NEUTRAL: Self = Self {
        brightness: 0.0,
        contrast: 1.0,
        saturation: 1.0,
        temperature: 0.0,
        tint: 0.0,
    };

    pub fn neutral() -> Self {
        Self::NEUTRAL
    }

    pub fn is_neutral(&self) -> bool {
        *self == Self::NEUTRAL
    }

    pub fn get(&self, adjustment: Adjustment) -> f64 {
        match adjustment {
            Adjustment::Brightness => self.brightness,
            Adjustment::Contrast => self.contrast,
            Adjustment::Saturation => self.saturation,
            Adjustment::Temperature => self.temperature,
            Adjustment::Tint => self.tint,
        }
    }

    pub fn set(&mut self, adjustment: Adjustment, value: f64) {
        let slot = match adjustment {
            Adjustment::Brightness => &mut self.brightness,
            Adjustment::Contrast => &mut self.contrast,
            Adjustment::Saturation => &mut self.saturation,
            Adjustment::Temperature => &mut self.temperature,
            Adjustment::Tint => &mut self.tint,
        };
        *slot = value;
    }

    /// Copy with every field clamped into its slider domain.
    pub fn clamped(&self) -> Self {
        let mut out = *self;
        for adjustment in Adjustment::ALL {
            let range = adjustment.range();
            out.set(
                adjustment,
                self.get(adjustment).clamp(*range.start(), *range.end()),
            );
        }
        out
    }
}

impl Default for AdjustmentState {
    fn default() -> Self {
        Self::NEUTRAL
    }
}

/// One of the five sliders.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Adjustment {
    Brightness,
    Contrast,
    Saturation,
    Temperature,
    Tint,
}

impl Adjustment {
    /// Display order used by the editor panel and CLI output.
    pub const ALL: [Adjustment; 5] = [
        Adjustment::Brightness,
        Adjustment::Contrast,
        Adjustment::Saturation,
        Adjustment::Temperature,
        Adjustment::Tint,
    ];

    pub fn label(self) -> &'static str {
        match self {
            Adjustment::Brightness => "Brightness",
            Adjustment::Contrast => "Contrast",
            Adjustment::Saturation => "Saturation",
            Adjustment::Temperature => "Temperature",
            Adjustment::Tint => "Tint",
        }
    }

    /// Slider domain.
    pub fn range(self) -> RangeInclusive<f64> {
        match self {
            Adjustment::Contrast => 0.0..=1.5,
            Adjustment::Saturation => 0.0..=2.0,
            Adjustment::Brightness | Adjustment::Temperature | Adjustment::Tint => -1.0..=1.0,
        }
    }

    pub fn neutral(self) -> f64 {
        AdjustmentState::NEUTRAL.get(self)
    }
}

impl fmt::Display for Adjustment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}
