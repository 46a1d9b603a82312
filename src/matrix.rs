//! 4×5 affine color matrices.
//!
//! Layout is row-major, 20 values: one row per output channel (R, G, B, A),
//! one column per input channel (R, G, B, A) plus a constant offset.
//!
//! ```text
//! R' = m[0]·R  + m[1]·G  + m[2]·B  + m[3]·A  + m[4]
//! G' = m[5]·R  + m[6]·G  + m[7]·B  + m[8]·A  + m[9]
//! B' = m[10]·R + m[11]·G + m[12]·B + m[13]·A + m[14]
//! A' = m[15]·R + m[16]·G + m[17]·B + m[18]·A + m[19]
//! ```
//!
//! Channels are normalized to 0–1, so offsets are in the same unit (an
//! offset of 0.5 adds mid-gray, not 0.5/255).
//!
//! Every step matrix built here leaves alpha untouched: row 3 is always
//! `[0, 0, 0, 1, 0]` and column 3 is zero on the color rows.

use std::fmt;

/// Rec. 709-style luma weights used for desaturation.
pub const LUMA_WEIGHTS: [f64; 3] = [0.213, 0.715, 0.072];

/// Per-unit scale applied by the temperature and tint steps.
const WHITE_BALANCE_SCALE: f64 = 0.1;

const COLUMNS: usize = 5;
const OFFSET: usize = 4;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ColorMatrix(pub [f64; 20]);

impl ColorMatrix {
    #[rustfmt::skip]
    pub const IDENTITY: Self = Self([
        1.0, 0.0, 0.0, 0.0, 0.0,
        0.0, 1.0, 0.0, 0.0, 0.0,
        0.0, 0.0, 1.0, 0.0, 0.0,
        0.0, 0.0, 0.0, 1.0, 0.0,
    ]);

    pub fn identity() -> Self {
        Self::IDENTITY
    }

    /// Luminance-preserving saturation. `s = 0` is grayscale, `s = 1`
    /// identity, `s > 1` oversaturates, `s < 0` inverts chroma around luma.
    #[rustfmt::skip]
    pub fn saturation(s: f64) -> Self {
        let [lr, lg, lb] = LUMA_WEIGHTS;
        Self([
            lr + (1.0 - lr) * s, lg - lg * s,         lb - lb * s,         0.0, 0.0,
            lr - lr * s,         lg + (1.0 - lg) * s, lb - lb * s,         0.0, 0.0,
            lr - lr * s,         lg - lg * s,         lb + (1.0 - lb) * s, 0.0, 0.0,
            0.0,                 0.0,                 0.0,                 1.0, 0.0,
        ])
    }

    /// Scale R, G, B by `c` around mid-gray.
    #[rustfmt::skip]
    pub fn contrast(c: f64) -> Self {
        let offset = 0.5 * (1.0 - c);
        Self([
            c,   0.0, 0.0, 0.0, offset,
            0.0, c,   0.0, 0.0, offset,
            0.0, 0.0, c,   0.0, offset,
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])
    }

    /// Add `b` to R, G, B.
    #[rustfmt::skip]
    pub fn brightness(b: f64) -> Self {
        Self([
            1.0, 0.0, 0.0, 0.0, b,
            0.0, 1.0, 0.0, 0.0, b,
            0.0, 0.0, 1.0, 0.0, b,
            0.0, 0.0, 0.0, 1.0, 0.0,
        ])
    }

    /// Positive values scale red up and blue down.
    #[rustfmt::skip]
    pub fn temperature(t: f64) -> Self {
        let k = t * WHITE_BALANCE_SCALE;
        Self([
            1.0 + k, 0.0, 0.0,     0.0, 0.0,
            0.0,     1.0, 0.0,     0.0, 0.0,
            0.0,     0.0, 1.0 - k, 0.0, 0.0,
            0.0,     0.0, 0.0,     1.0, 0.0,
        ])
    }

    /// Positive values scale green up (toward green), negative toward magenta.
    #[rustfmt::skip]
    pub fn tint(t: f64) -> Self {
        let k = t * WHITE_BALANCE_SCALE;
        Self([
            1.0, 0.0,     0.0, 0.0, 0.0,
            0.0, 1.0 + k, 0.0, 0.0, 0.0,
            0.0, 0.0,     1.0, 0.0, 0.0,
            0.0, 0.0,     0.0, 1.0, 0.0,
        ])
    }

    /// Chain `next` after `self`.
    ///
    /// The 4×4 linear blocks are matrix-multiplied (`self · next`) but the
    /// offset columns are simply summed. This is not the homogeneous 5×5
    /// product: an earlier offset is not scaled by later steps. Rendered
    /// output depends on this exact rule, so keep it.
    pub fn multiply(&self, next: &ColorMatrix) -> ColorMatrix {
        let a = &self.0;
        let b = &next.0;
        let mut out = [0.0; 20];
        for row in 0..4 {
            for col in 0..COLUMNS {
                let i = row * COLUMNS + col;
                out[i] = if col == OFFSET {
                    a[i] + b[i]
                } else {
                    (0..4)
                        .map(|k| a[row * COLUMNS + k] * b[k * COLUMNS + col])
                        .sum()
                };
            }
        }
        ColorMatrix(out)
    }

    /// One output row: four input coefficients then the offset.
    pub fn row(&self, row: usize) -> [f64; 5] {
        let start = row * COLUMNS;
        let mut out = [0.0; 5];
        out.copy_from_slice(&self.0[start..start + COLUMNS]);
        out
    }

    /// Transform one straight-alpha RGBA color (0–1). No clamping.
    pub fn apply(&self, rgba: [f64; 4]) -> [f64; 4] {
        let m = &self.0;
        let mut out = [0.0; 4];
        for (row, slot) in out.iter_mut().enumerate() {
            let base = row * COLUMNS;
            *slot = m[base] * rgba[0]
                + m[base + 1] * rgba[1]
                + m[base + 2] * rgba[2]
                + m[base + 3] * rgba[3]
                + m[base + OFFSET];
        }
        out
    }

    pub fn as_array(&self) -> &[f64; 20] {
        &self.0
    }

    /// Single-precision copy, the layout GPU color filters take.
    pub fn to_f32(&self) -> [f32; 20] {
        self.0.map(|v| v as f32)
    }

    pub fn is_identity(&self) -> bool {
        *self == Self::IDENTITY
    }
}

impl Default for ColorMatrix {
    fn default() -> Self {
        Self::IDENTITY
    }
}

impl fmt::Display for ColorMatrix {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for row in 0..4 {
            let values: Vec<String> = self.row(row).iter().map(|v| format!("{v:8.4}")).collect();
            writeln!(f, "[{}]", values.join(", "))?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: &[f64], expected: &[f64]) {
        assert_eq!(actual.len(), expected.len());
        for (i, (a, e)) in actual.iter().zip(expected).enumerate() {
            assert!((a - e).abs() < 1e-9, "index {i}: {a} != {e}");
        }
    }

    #[test]
    fn identity_times_identity_is_identity() {
        let m = ColorMatrix::IDENTITY.multiply(&ColorMatrix::IDENTITY);
        assert!(m.is_identity());
    }

    #[test]
    fn neutral_steps_are_exact_identity() {
        assert!(ColorMatrix::saturation(1.0).is_identity());
        assert!(ColorMatrix::contrast(1.0).is_identity());
        assert!(ColorMatrix::brightness(0.0).is_identity());
        assert!(ColorMatrix::temperature(0.0).is_identity());
        assert!(ColorMatrix::tint(0.0).is_identity());
    }

    #[test]
    fn zero_saturation_rows_are_luma_weights() {
        let m = ColorMatrix::saturation(0.0);
        for row in 0..3 {
            assert_close(&m.row(row)[..3], &LUMA_WEIGHTS);
        }
        assert_eq!(m.row(3), [0.0, 0.0, 0.0, 1.0, 0.0]);
    }

    #[test]
    fn saturation_preserves_gray() {
        for s in [0.0, 0.5, 2.0, -1.0] {
            let out = ColorMatrix::saturation(s).apply([0.3, 0.3, 0.3, 1.0]);
            assert_close(&out, &[0.3, 0.3, 0.3, 1.0]);
        }
    }

    #[test]
    fn contrast_pivots_on_mid_gray() {
        for c in [0.0, 0.25, 1.0, 1.5, 3.0] {
            let out = ColorMatrix::contrast(c).apply([0.5, 0.5, 0.5, 1.0]);
            assert_close(&out, &[0.5, 0.5, 0.5, 1.0]);
        }
    }

    #[test]
    fn temperature_scales_red_and_blue_proportionally() {
        let m = ColorMatrix::temperature(1.0);
        assert_close(&m.row(0), &[1.1, 0.0, 0.0, 0.0, 0.0]);
        assert_close(&m.row(2), &[0.0, 0.0, 0.9, 0.0, 0.0]);
        assert_eq!(m.row(1), [0.0, 1.0, 0.0, 0.0, 0.0]);
    }

    #[test]
    fn tint_scales_only_green() {
        let m = ColorMatrix::tint(-0.5);
        assert_eq!(m.row(0), [1.0, 0.0, 0.0, 0.0, 0.0]);
        assert_close(&m.row(1), &[0.0, 0.95, 0.0, 0.0, 0.0]);
        assert_eq!(m.row(2), [0.0, 0.0, 1.0, 0.0, 0.0]);
    }

    #[test]
    fn multiply_sums_offsets_instead_of_scaling_them() {
        // Homogeneous composition would give 0.2 * 1.1 = 0.22 on the red row.
        let m = ColorMatrix::brightness(0.2).multiply(&ColorMatrix::temperature(1.0));
        assert_close(&m.row(0), &[1.1, 0.0, 0.0, 0.0, 0.2]);
        assert_close(&m.row(2), &[0.0, 0.0, 0.9, 0.0, 0.2]);
    }

    #[test]
    fn multiply_linear_block_is_left_times_right() {
        let a = ColorMatrix::saturation(0.5);
        let b = ColorMatrix::contrast(2.0);
        let m = a.multiply(&b);
        for row in 0..3 {
            let expected: Vec<f64> = a.row(row)[..3].iter().map(|v| v * 2.0).collect();
            assert_close(&m.row(row)[..3], &expected);
            assert_close(&m.row(row)[4..], &[-0.5]);
        }
    }

    #[test]
    fn multiply_order_matters_for_non_commuting_steps() {
        let s = ColorMatrix::saturation(0.0);
        let t = ColorMatrix::temperature(1.0);
        assert_ne!(s.multiply(&t), t.multiply(&s));
    }

    #[test]
    fn apply_leaves_alpha_alone() {
        let m = ColorMatrix::saturation(1.7)
            .multiply(&ColorMatrix::contrast(1.3))
            .multiply(&ColorMatrix::brightness(-0.4));
        assert_eq!(m.apply([0.1, 0.9, 0.4, 0.25])[3], 0.25);
    }

    #[test]
    fn to_f32_keeps_layout() {
        let m = ColorMatrix::brightness(0.25).to_f32();
        assert_eq!(m[4], 0.25);
        assert_eq!(m[18], 1.0);
    }

    #[test]
    fn display_prints_four_rows() {
        let text = ColorMatrix::IDENTITY.to_string();
        assert_eq!(text.lines().count(), 4);
        assert!(text.starts_with("[  1.0000,   0.0000"));
    }
}
