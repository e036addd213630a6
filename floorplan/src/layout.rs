//! Drawing-surface sizing derived from the room set and the container.

#[cfg(test)]
#[path = "layout_test.rs"]
mod layout_test;

use crate::room::{Rect, Room};

/// Width and height pair in floor units or CSS pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Size {
    pub width: f64,
    pub height: f64,
}

impl Size {
    #[must_use]
    pub fn new(width: f64, height: f64) -> Self {
        Self { width, height }
    }

    /// Component-wise maximum.
    #[must_use]
    pub fn max(self, other: Size) -> Size {
        Size { width: self.width.max(other.width), height: self.height.max(other.height) }
    }

    /// Whether both dimensions are positive.
    #[must_use]
    pub fn is_positive(&self) -> bool {
        self.width > 0.0 && self.height > 0.0
    }
}

/// Union of all room rectangles, or `None` for an empty set.
#[must_use]
pub fn room_extent(rooms: &[Room]) -> Option<Rect> {
    rooms.iter().map(Room::rect).reduce(|acc, r| acc.union(&r))
}

/// Far corner of the furthest room plus `margin` on each axis.
///
/// An empty room set has no content and yields a zero size.
#[must_use]
pub fn content_bounds(rooms: &[Room], margin: f64) -> Size {
    extent_bounds(room_extent(rooms), margin)
}

/// Far corner of `extent` plus `margin`; zero when there is no extent.
#[must_use]
pub fn extent_bounds(extent: Option<Rect>, margin: f64) -> Size {
    extent.map_or(Size::default(), |e| Size::new(e.max_x() + margin, e.max_y() + margin))
}

/// Drawing-surface size: the larger of the content bounds, the container and
/// the minimum canvas size, per axis.
#[must_use]
pub fn canvas_size(rooms: &[Room], container: Size, minimum: Size, margin: f64) -> Size {
    surface_size(room_extent(rooms), container, minimum, margin)
}

/// [`canvas_size`] for a precomputed extent.
#[must_use]
pub fn surface_size(extent: Option<Rect>, container: Size, minimum: Size, margin: f64) -> Size {
    extent_bounds(extent, margin).max(container.max(minimum))
}
