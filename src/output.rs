//! CLI output formatting for every command.
//!
//! # Output Format
//!
//! ## Render
//!
//! ```text
//! 001 beach.jpg
//!     Saved: /tmp/PixelForge-1700000000123.jpg (4032x3024, 2.1 MB)
//! 002 broken.png
//!     Failed: Cannot decode source: ...
//!
//! Rendered 1 of 2 images
//! ```
//!
//! ## Filters
//!
//! ```text
//! Vintage
//!     vintage     Vintage       brightness +0.10  contrast ×0.90  saturation ×0.70
//!     sepia       Sepia         brightness +0.05  saturation ×0.40  overlay rgba(112, 66, 20, 0.25)
//! ```
//!
//! ## Matrix
//!
//! ```text
//! [  0.7885,   0.4648,   0.0468,   0.0000,   0.0500]
//! ...
//! ```
//!
//! # Architecture
//!
//! Each command has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout. Format
//! functions are pure: no I/O, no side effects.

use crate::adjustments::{Adjustment, AdjustmentState};
use crate::filters::FilterPreset;
use crate::matrix::ColorMatrix;
use crate::presets::UserPreset;
use crate::render::RenderEvent;

// ============================================================================
// Shared helpers
// ============================================================================

/// Format a 0-based job index as 1-based, 3-digit zero-padded.
fn format_index(index: usize) -> String {
    format!("{:0>3}", index + 1)
}

/// Return indentation string: 4 spaces per depth level.
fn indent(depth: usize) -> String {
    "    ".repeat(depth)
}

/// Human-readable byte count.
fn format_bytes(bytes: usize) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

/// The overrides a preset carries, e.g. `brightness +0.10  saturation ×0.70`.
fn preset_overrides(preset: &FilterPreset) -> String {
    let mut parts = Vec::new();
    if let Some(b) = preset.brightness {
        parts.push(format!("brightness {b:+.2}"));
    }
    if let Some(c) = preset.contrast {
        parts.push(format!("contrast ×{c:.2}"));
    }
    if let Some(s) = preset.saturation {
        parts.push(format!("saturation ×{s:.2}"));
    }
    if let Some(tint) = preset.tint_color {
        parts.push(format!("overlay {tint}"));
    }
    if parts.is_empty() {
        "no change".to_string()
    } else {
        parts.join("  ")
    }
}

// ============================================================================
// Render
// ============================================================================

/// Format a single render progress event as display lines.
///
/// `Started` events print nothing; the job header is printed once the
/// outcome is known so parallel jobs do not interleave.
pub fn format_render_event(event: &RenderEvent) -> Vec<String> {
    match event {
        RenderEvent::Started { .. } => Vec::new(),
        RenderEvent::Finished {
            index,
            label,
            output,
            width,
            height,
            bytes,
        } => {
            let detail = format!("({width}x{height}, {})", format_bytes(*bytes));
            let line = match output {
                Some(path) => format!("{}Saved: {} {detail}", indent(1), path.display()),
                None => format!("{}Rendered {detail}", indent(1)),
            };
            vec![format!("{} {label}", format_index(*index)), line]
        }
        RenderEvent::Failed {
            index,
            label,
            error,
        } => vec![
            format!("{} {label}", format_index(*index)),
            format!("{}Failed: {error}", indent(1)),
        ],
    }
}

pub fn format_render_summary(succeeded: usize, total: usize) -> Vec<String> {
    let noun = if total == 1 { "image" } else { "images" };
    vec![String::new(), format!("Rendered {succeeded} of {total} {noun}")]
}

// ============================================================================
// Filters
// ============================================================================

/// Format presets grouped under their category, in first-seen category order.
pub fn format_filter_list(presets: &[&FilterPreset]) -> Vec<String> {
    let mut categories: Vec<&str> = Vec::new();
    for preset in presets {
        if !categories.contains(&preset.category.as_str()) {
            categories.push(&preset.category);
        }
    }

    let mut lines = Vec::new();
    for category in categories {
        lines.push(category.to_string());
        for preset in presets.iter().filter(|p| p.category == category) {
            lines.push(format!(
                "{}{:<16}{:<18}{}",
                indent(1),
                preset.id,
                preset.name,
                preset_overrides(preset)
            ));
        }
    }
    if lines.is_empty() {
        lines.push("No matching filters".to_string());
    }
    lines
}

// ============================================================================
// Matrix / adjustments
// ============================================================================

pub fn format_matrix(matrix: &ColorMatrix) -> Vec<String> {
    matrix.to_string().lines().map(str::to_string).collect()
}

/// One line per slider, two decimals.
pub fn format_adjustments(state: &AdjustmentState) -> Vec<String> {
    Adjustment::ALL
        .iter()
        .map(|&a| format!("{:<12}{:>6.2}", a.label(), state.get(a)))
        .collect()
}

// ============================================================================
// User presets
// ============================================================================

pub fn format_presets(presets: &[UserPreset]) -> Vec<String> {
    if presets.is_empty() {
        return vec!["No saved presets".to_string()];
    }
    let mut lines = Vec::new();
    for (i, preset) in presets.iter().enumerate() {
        lines.push(format!(
            "{} {} (filter: {})",
            format_index(i),
            preset.name,
            preset.resolved_filter().name
        ));
        for line in format_adjustments(&preset.adjustments) {
            lines.push(format!("{}{line}", indent(1)));
        }
    }
    lines
}

// ============================================================================
// print_* wrappers
// ============================================================================

fn print_lines(lines: Vec<String>) {
    for line in lines {
        println!("{}", line);
    }
}

pub fn print_render_event(event: &RenderEvent) {
    print_lines(format_render_event(event));
}

pub fn print_render_summary(succeeded: usize, total: usize) {
    print_lines(format_render_summary(succeeded, total));
}

pub fn print_filter_list(presets: &[&FilterPreset]) {
    print_lines(format_filter_list(presets));
}

pub fn print_matrix(matrix: &ColorMatrix) {
    print_lines(format_matrix(matrix));
}

pub fn print_adjustments(state: &AdjustmentState) {
    print_lines(format_adjustments(state));
}

pub fn print_presets(presets: &[UserPreset]) {
    print_lines(format_presets(presets));
}
