//! Debug overlay layout.
//!
//! Pure geometry for the diagnostics panel: one text line per entry inside a
//! semi-transparent box in the top-left corner. [`crate::render`] turns an
//! [`OverlayLayout`] into canvas calls.

#[cfg(test)]
#[path = "overlay_test.rs"]
mod overlay_test;

use crate::math::Rect;

/// One `label: value` line of diagnostics.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DebugEntry {
    pub label: String,
    pub value: String,
}

impl DebugEntry {
    #[must_use]
    pub fn new(label: impl Into<String>, value: impl ToString) -> Self {
        Self { label: label.into(), value: value.to_string() }
    }
}

/// A positioned line of overlay text.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    /// Left edge.
    pub x: f64,
    /// Alphabetic baseline.
    pub y: f64,
    pub max_width: f64,
}

#[derive(Debug, Clone, PartialEq)]
pub struct OverlayLayout {
    pub panel: Rect,
    /// CSS font shorthand, e.g. `12px Consolas`.
    pub font: String,
    pub lines: Vec<TextLine>,
}

impl OverlayLayout {
    /// Lay out `entries` in order. The panel is `width` wide and tall enough
    /// for one line per entry plus one line of padding.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(entries: &[DebugEntry], text_size: f64, width: f64, font_family: &str) -> Self {
        let panel = Rect::new(0.0, 0.0, width, text_size * (1 + entries.len()) as f64);
        let lines = entries
            .iter()
            .enumerate()
            .map(|(i, entry)| TextLine {
                text: format!("{}: {}", entry.label, entry.value),
                x: 0.0,
                y: text_size * (i + 1) as f64,
                max_width: width,
            })
            .collect();
        Self { panel, font: format!("{text_size}px {font_family}"), lines }
    }
}
