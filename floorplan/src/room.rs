//! Room model: records, statuses, and floor-space rectangles.
//!
//! A [`Room`] is one bookable or informational space on the floor plan. Rooms
//! arrive from static datasets or JSON and are never mutated by the viewer.
//! Two historical room shapes (desk floor rooms and mobile conference rooms)
//! are unified here as a single record with optional capacity, equipment and
//! description fields.

#[cfg(test)]
#[path = "room_test.rs"]
mod room_test;

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::camera::Point;

/// Unique identifier for a room.
pub type RoomId = String;

/// Category driving a room's display color and semantics.
///
/// Statuses outside the known set are preserved verbatim in [`RoomStatus::Other`]
/// so they round-trip and fall back to the neutral style instead of failing.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum RoomStatus {
    /// Regular office space.
    Office,
    /// Space held for a forecast provider.
    Forecast,
    /// Temporary hoteling desk.
    Hoteling,
    /// Vacant space.
    Vacant,
    /// Space with a pending request.
    Pending,
    /// Bookable room (conference-room variant).
    Available,
    /// Any status string the viewer does not recognize.
    Other(String),
}

impl RoomStatus {
    /// Statuses shown in the legend, in display order.
    pub const LEGEND_ORDER: [RoomStatus; 5] =
        [Self::Office, Self::Forecast, Self::Hoteling, Self::Vacant, Self::Pending];

    /// Lowercase wire name of the status.
    #[must_use]
    pub fn as_str(&self) -> &str {
        match self {
            Self::Office => "office",
            Self::Forecast => "forecast",
            Self::Hoteling => "hoteling",
            Self::Vacant => "vacant",
            Self::Pending => "pending",
            Self::Available => "available",
            Self::Other(raw) => raw,
        }
    }

    /// Status text with the first letter uppercased, as shown on badges.
    #[must_use]
    pub fn display_name(&self) -> String {
        let raw = self.as_str();
        let mut chars = raw.chars();
        match chars.next() {
            Some(first) => first.to_uppercase().chain(chars).collect(),
            None => String::new(),
        }
    }

    /// Whether the status is one of the known variants.
    #[must_use]
    pub fn is_recognized(&self) -> bool {
        !matches!(self, Self::Other(_))
    }
}

impl From<&str> for RoomStatus {
    fn from(raw: &str) -> Self {
        match raw {
            "office" => Self::Office,
            "forecast" => Self::Forecast,
            "hoteling" => Self::Hoteling,
            "vacant" => Self::Vacant,
            "pending" => Self::Pending,
            "available" => Self::Available,
            other => Self::Other(other.to_owned()),
        }
    }
}

impl From<String> for RoomStatus {
    fn from(raw: String) -> Self {
        match Self::from(raw.as_str()) {
            Self::Other(_) => Self::Other(raw),
            known => known,
        }
    }
}

impl From<RoomStatus> for String {
    fn from(status: RoomStatus) -> Self {
        match status {
            RoomStatus::Other(raw) => raw,
            known => known.as_str().to_owned(),
        }
    }
}

impl fmt::Display for RoomStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Axis-aligned rectangle in floor coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Rect {
    pub x: f64,
    pub y: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    #[must_use]
    pub fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
        Self { x, y, width, height }
    }

    /// Right edge.
    #[must_use]
    pub fn max_x(&self) -> f64 {
        self.x + self.width
    }

    /// Bottom edge.
    #[must_use]
    pub fn max_y(&self) -> f64 {
        self.y + self.height
    }

    /// Inclusive containment test.
    #[must_use]
    pub fn contains(&self, pt: Point) -> bool {
        pt.x >= self.x && pt.x <= self.max_x() && pt.y >= self.y && pt.y <= self.max_y()
    }

    /// Smallest rectangle covering both.
    #[must_use]
    pub fn union(&self, other: &Rect) -> Rect {
        let x = self.x.min(other.x);
        let y = self.y.min(other.y);
        Rect {
            x,
            y,
            width: self.max_x().max(other.max_x()) - x,
            height: self.max_y().max(other.max_y()) - y,
        }
    }

    /// Center point.
    #[must_use]
    pub fn center(&self) -> Point {
        Point::new(self.x + self.width * 0.5, self.y + self.height * 0.5)
    }
}

/// A bookable or informational space on the floor plan.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Room {
    /// Stable identifier, unique within a registry.
    pub id: RoomId,
    /// Display label.
    pub name: String,
    /// Left edge in floor coordinates.
    #[serde(default)]
    pub x: f64,
    /// Top edge in floor coordinates.
    #[serde(default)]
    pub y: f64,
    /// Width in floor units.
    pub width: f64,
    /// Height in floor units.
    pub height: f64,
    /// Display category.
    pub status: RoomStatus,
    /// Seats, when known.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub capacity: Option<u32>,
    /// Installed equipment in display order.
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub equipment: Vec<String>,
    /// Free-form description.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Room {
    /// Room with only the layout fields set.
    #[must_use]
    pub fn new(id: &str, name: &str, rect: Rect, status: RoomStatus) -> Self {
        Self {
            id: id.to_owned(),
            name: name.to_owned(),
            x: rect.x,
            y: rect.y,
            width: rect.width,
            height: rect.height,
            status,
            capacity: None,
            equipment: Vec::new(),
            description: None,
        }
    }

    /// Layout rectangle.
    #[must_use]
    pub fn rect(&self) -> Rect {
        Rect::new(self.x, self.y, self.width, self.height)
    }

    /// Accessible label, e.g. `"Main Lobby, office status"`.
    #[must_use]
    pub fn aria_label(&self) -> String {
        format!("{}, {} status", self.name, self.status)
    }

    /// Dimensions as shown in the detail panel, e.g. `"120 × 80"`.
    #[must_use]
    pub fn dimensions_label(&self) -> String {
        format!("{} × {}", self.width, self.height)
    }

    /// Position as shown in the detail panel, e.g. `"(60, 80)"`.
    #[must_use]
    pub fn position_label(&self) -> String {
        format!("({}, {})", self.x, self.y)
    }
}
