#![allow(clippy::float_cmp)]

use super::*;

fn entries() -> Vec<DebugEntry> {
    vec![DebugEntry::new("FPS", 60), DebugEntry::new("Mouse Position", "12, 34")]
}

#[test]
fn entry_formats_value() {
    let entry = DebugEntry::new("FPS", 59);
    assert_eq!(entry.label, "FPS");
    assert_eq!(entry.value, "59");
}

#[test]
fn panel_fits_one_line_per_entry_plus_padding() {
    let layout = OverlayLayout::new(&entries(), 12.0, 300.0, "Consolas");
    assert_eq!(layout.panel, Rect::new(0.0, 0.0, 300.0, 36.0));
}

#[test]
fn lines_are_ordered_and_left_aligned() {
    let layout = OverlayLayout::new(&entries(), 12.0, 300.0, "Consolas");
    assert_eq!(layout.lines.len(), 2);
    assert_eq!(layout.lines[0].text, "FPS: 60");
    assert_eq!(layout.lines[1].text, "Mouse Position: 12, 34");
    assert_eq!(layout.lines[0].y, 12.0);
    assert_eq!(layout.lines[1].y, 24.0);
    assert!(layout.lines.iter().all(|l| l.x == 0.0 && l.max_width == 300.0));
}

#[test]
fn font_uses_text_size() {
    let layout = OverlayLayout::new(&entries(), 12.0, 300.0, "Consolas");
    assert_eq!(layout.font, "12px Consolas");
}

#[test]
fn empty_entries_still_pad_one_line() {
    let layout = OverlayLayout::new(&[], 16.0, 200.0, "monospace");
    assert!(layout.lines.is_empty());
    assert_eq!(layout.panel.height, 16.0);
}
