//! Room label sizing and truncation.
//!
//! Labels are laid out in floor units. Text measurement is abstracted behind
//! [`TextMeasure`] so layout is testable without a browser; the canvas
//! renderer supplies real metrics and tests use [`ApproxMeasure`].

#[cfg(test)]
#[path = "label_test.rs"]
mod label_test;

use crate::camera::Point;
use crate::consts::{
    APPROX_GLYPH_WIDTH_EM, ID_FONT_MAX_PX, ID_LABEL_MIN_ROOM_HEIGHT, LABEL_PADDING, NAME_FONT_MAX_PX,
};
use crate::room::Room;

pub const NAME_COLOR: &str = "#1a202c";
pub const ID_COLOR: &str = "#4a5568";
pub const LABEL_FONT_FAMILY: &str = "Arial, sans-serif";

const ELLIPSIS: char = '…';

/// Measures rendered text width.
pub trait TextMeasure {
    /// Advance width of `text` at `font_px`, in the same units as `font_px`.
    fn width(&self, text: &str, font_px: f64) -> f64;
}

/// Fixed-advance estimate used when no rendering context is available.
#[derive(Debug, Clone, Copy, Default)]
pub struct ApproxMeasure;

impl TextMeasure for ApproxMeasure {
    #[allow(clippy::cast_precision_loss)]
    fn width(&self, text: &str, font_px: f64) -> f64 {
        text.chars().count() as f64 * font_px * APPROX_GLYPH_WIDTH_EM
    }
}

/// Name font size: `min(width / 10, height / 5, 11)`.
#[must_use]
pub fn name_font_size(width: f64, height: f64) -> f64 {
    (width / 10.0).min(height / 5.0).min(NAME_FONT_MAX_PX)
}

/// Id font size derived from the name size: `min(0.8 × name, 8)`.
#[must_use]
pub fn id_font_size(name_font: f64) -> f64 {
    (name_font * 0.8).min(ID_FONT_MAX_PX)
}

/// Whether a room is tall enough to carry the secondary id label.
#[must_use]
pub fn shows_id_label(height: f64) -> bool {
    height > ID_LABEL_MIN_ROOM_HEIGHT
}

/// Longest prefix of `text` that fits in `max_width`, with an ellipsis
/// appended when anything was cut. Returns an empty string when not even the
/// ellipsis fits.
#[must_use]
pub fn truncate_with_ellipsis(text: &str, max_width: f64, font_px: f64, measure: &dyn TextMeasure) -> String {
    if measure.width(text, font_px) <= max_width {
        return text.to_owned();
    }
    for end in (0..text.chars().count()).rev() {
        let mut candidate: String = text.chars().take(end).collect::<String>().trim_end().to_owned();
        candidate.push(ELLIPSIS);
        if measure.width(&candidate, font_px) <= max_width {
            return candidate;
        }
    }
    String::new()
}

/// One positioned line of label text. `at` is the horizontal center of the
/// line and its vertical middle.
#[derive(Debug, Clone, PartialEq)]
pub struct TextLine {
    pub text: String,
    pub at: Point,
    pub font_px: f64,
}

/// Labels for one room.
#[derive(Debug, Clone, PartialEq)]
pub struct RoomLabel {
    /// Room name, bold, centered in the top half.
    pub name: TextLine,
    /// Room id near the bottom edge, for rooms taller than the threshold.
    pub id: Option<TextLine>,
}

impl RoomLabel {
    /// Lay out the labels for `room` inside its rectangle.
    #[must_use]
    pub fn layout(room: &Room, measure: &dyn TextMeasure) -> Self {
        let rect = room.rect();
        let inner_width = (rect.width - 2.0 * LABEL_PADDING).max(0.0);
        let center_x = rect.x + rect.width / 2.0;

        let name_px = name_font_size(rect.width, rect.height);
        let name = TextLine {
            text: truncate_with_ellipsis(&room.name, inner_width, name_px, measure),
            at: Point::new(center_x, rect.y + LABEL_PADDING + (rect.height / 2.0 - LABEL_PADDING) / 2.0),
            font_px: name_px,
        };

        let id = shows_id_label(rect.height).then(|| {
            let id_px = id_font_size(name_px);
            TextLine {
                text: truncate_with_ellipsis(&room.id, inner_width, id_px, measure),
                at: Point::new(center_x, rect.max_y() - 16.0 + id_px / 2.0),
                font_px: id_px,
            }
        });

        Self { name, id }
    }
}
