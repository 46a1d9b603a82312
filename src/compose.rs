//! Matrix Composer: sliders + optional preset → one [`ColorMatrix`].
//!
//! ```text
//! identity · saturation(s) · contrast(c) · brightness(b) [· temperature(t)] [· tint(g)]
//! ```
//!
//! where `s`, `c`, `b` are the slider values merged with the preset
//! baselines (brightness adds, contrast and saturation multiply) and the
//! temperature/tint steps are only chained when non-zero.
//!
//! Pure and total: no I/O, no shared state, no clamping. A preset's
//! [`TintColor`] is not part of the matrix; [`compose_look`] returns it
//! alongside as an instruction for the render pass.

use crate::adjustments::AdjustmentState;
use crate::color::TintColor;
use crate::filters::FilterPreset;
use crate::matrix::ColorMatrix;

/// Slider values after merging in a preset's baselines.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct EffectiveAdjustments {
    pub brightness: f64,
    pub contrast: f64,
    pub saturation: f64,
    pub temperature: f64,
    pub tint: f64,
}

impl EffectiveAdjustments {
    pub fn resolve(adjustments: &AdjustmentState, filter: Option<&FilterPreset>) -> Self {
        let brightness = filter.and_then(|f| f.brightness).unwrap_or(0.0);
        let contrast = filter.and_then(|f| f.contrast).unwrap_or(1.0);
        let saturation = filter.and_then(|f| f.saturation).unwrap_or(1.0);
        Self {
            brightness: adjustments.brightness + brightness,
            contrast: adjustments.contrast * contrast,
            saturation: adjustments.saturation * saturation,
            temperature: adjustments.temperature,
            tint: adjustments.tint,
        }
    }

    pub fn to_matrix(&self) -> ColorMatrix {
        let mut matrix = ColorMatrix::IDENTITY
            .multiply(&ColorMatrix::saturation(self.saturation))
            .multiply(&ColorMatrix::contrast(self.contrast))
            .multiply(&ColorMatrix::brightness(self.brightness));

        if self.temperature != 0.0 {
            matrix = matrix.multiply(&ColorMatrix::temperature(self.temperature));
        }
        if self.tint != 0.0 {
            matrix = matrix.multiply(&ColorMatrix::tint(self.tint));
        }
        matrix
    }
}

/// Compose the single color matrix for `adjustments` layered over `filter`.
pub fn compose(adjustments: &AdjustmentState, filter: Option<&FilterPreset>) -> ColorMatrix {
    EffectiveAdjustments::resolve(adjustments, filter).to_matrix()
}

/// Everything the render pass needs: the matrix and the optional overlay.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Look {
    pub matrix: ColorMatrix,
    pub overlay: Option<TintColor>,
}

pub fn compose_look(adjustments: &AdjustmentState, filter: Option<&FilterPreset>) -> Look {
    Look {
        matrix: compose(adjustments, filter),
        overlay: filter.and_then(|f| f.tint_color),
    }
}
