#![allow(clippy::float_cmp)]

use super::*;
use crate::room::{Rect, RoomStatus};

/// Every glyph is exactly one font-size wide.
struct EmMeasure;

impl TextMeasure for EmMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn width(&self, text: &str, font_px: f64) -> f64 {
        text.chars().count() as f64 * font_px
    }
}

fn room(id: &str, name: &str, w: f64, h: f64) -> Room {
    Room::new(id, name, Rect::new(100.0, 200.0, w, h), RoomStatus::Office)
}

// --- font sizes ---

#[test]
fn name_font_capped_at_eleven() {
    assert_eq!(name_font_size(500.0, 500.0), 11.0);
}

#[test]
fn name_font_width_bound() {
    assert_eq!(name_font_size(60.0, 500.0), 6.0);
}

#[test]
fn name_font_height_bound() {
    assert_eq!(name_font_size(500.0, 40.0), 8.0);
}

#[test]
fn id_font_capped_at_eight() {
    assert_eq!(id_font_size(11.0), 8.0);
    assert!((id_font_size(6.0) - 4.8).abs() < 1e-12);
}

#[test]
fn id_label_threshold_is_strict() {
    assert!(!shows_id_label(40.0));
    assert!(shows_id_label(40.5));
}

// --- truncation ---

#[test]
fn short_text_untouched() {
    assert_eq!(truncate_with_ellipsis("Lobby", 50.0, 10.0, &EmMeasure), "Lobby");
}

#[test]
fn long_text_gets_ellipsis() {
    // 5 glyphs at 10px fit in 50px: 4 chars + ellipsis.
    assert_eq!(truncate_with_ellipsis("Conference", 50.0, 10.0, &EmMeasure), "Conf…");
}

#[test]
fn trailing_space_trimmed_before_ellipsis() {
    assert_eq!(truncate_with_ellipsis("Big Room", 50.0, 10.0, &EmMeasure), "Big…");
}

#[test]
fn nothing_fits_yields_empty() {
    assert_eq!(truncate_with_ellipsis("Conference", 5.0, 10.0, &EmMeasure), "");
}

#[test]
fn approx_measure_scales_with_font() {
    let m = ApproxMeasure;
    assert!((m.width("abcd", 10.0) - 24.0).abs() < 1e-12);
    assert_eq!(m.width("", 10.0), 0.0);
}

// --- layout ---

#[test]
fn tall_room_has_both_labels() {
    let label = RoomLabel::layout(&room("r-1", "Lobby", 200.0, 100.0), &EmMeasure);
    assert_eq!(label.name.text, "Lobby");
    assert_eq!(label.name.font_px, 11.0);
    assert_eq!(label.name.at.x, 200.0);
    let id = label.id.expect("id label");
    assert_eq!(id.text, "r-1");
    assert_eq!(id.font_px, 8.0);
}

#[test]
fn short_room_omits_id_label() {
    let label = RoomLabel::layout(&room("r-1", "Lobby", 200.0, 40.0), &EmMeasure);
    assert!(label.id.is_none());
}

#[test]
fn name_truncated_to_inner_width() {
    // width 60 → font 6, inner width 52 → 8 glyphs.
    let label = RoomLabel::layout(&room("r-1", "Executive Suite", 60.0, 100.0), &EmMeasure);
    assert_eq!(label.name.text, "Executi…");
    assert!(EmMeasure.width(&label.name.text, label.name.font_px) <= 52.0);
}

#[test]
fn name_centered_in_top_half() {
    let label = RoomLabel::layout(&room("r-1", "A", 200.0, 100.0), &EmMeasure);
    // y + 4 + (50 - 4) / 2
    assert_eq!(label.name.at.y, 227.0);
}
