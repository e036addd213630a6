//! Status-to-style mapping shared by every renderer and the legend.
//!
//! [`status_to_style`] is the single source of room colors: the canvas display
//! list, the SVG shape styles, the node-graph nodes and the legend swatches all
//! read from it, so a status always renders with identical values.

#[cfg(test)]
#[path = "style_test.rs"]
mod style_test;

use crate::room::RoomStatus;

/// Fill, stroke and stroke width for one room status.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RoomStyle {
    /// Fill color as a CSS hex string.
    pub fill: &'static str,
    /// Stroke color as a CSS hex string.
    pub stroke: &'static str,
    /// Stroke width in floor units.
    pub stroke_width: f64,
}

/// Style used for any status outside the known set.
pub const FALLBACK_STYLE: RoomStyle = RoomStyle { fill: "#f3f4f6", stroke: "#6b7280", stroke_width: 1.0 };

/// Map a status to its visual attributes. Total and side-effect free.
#[must_use]
pub fn status_to_style(status: &RoomStatus) -> RoomStyle {
    match status {
        RoomStatus::Office => RoomStyle { fill: "#bbf7d0", stroke: "#16a34a", stroke_width: 1.0 },
        RoomStatus::Forecast => RoomStyle { fill: "#bfdbfe", stroke: "#2563eb", stroke_width: 1.0 },
        RoomStatus::Hoteling => RoomStyle { fill: "#fef3c7", stroke: "#d97706", stroke_width: 1.0 },
        RoomStatus::Vacant => RoomStyle { fill: "#ffffff", stroke: "#16a34a", stroke_width: 3.0 },
        RoomStatus::Pending => RoomStyle { fill: "#ffffff", stroke: "#ea580c", stroke_width: 3.0 },
        RoomStatus::Available => RoomStyle { fill: "#c8e6c9", stroke: "#4caf50", stroke_width: 1.0 },
        RoomStatus::Other(_) => FALLBACK_STYLE,
    }
}

impl RoomStyle {
    /// Inline CSS declarations for an SVG shape.
    #[must_use]
    pub fn svg_declarations(&self) -> String {
        format!("fill:{};stroke:{};stroke-width:{}", self.fill, self.stroke, self.stroke_width)
    }
}

/// Whether the status is drawn as an outlined (hollow) room.
#[must_use]
pub fn is_outlined(status: &RoomStatus) -> bool {
    matches!(status, RoomStatus::Vacant | RoomStatus::Pending)
}

/// Tailwind classes for the status badge in the detail panel.
#[must_use]
pub fn badge_class(status: &RoomStatus) -> &'static str {
    match status {
        RoomStatus::Office => "bg-green-100 text-green-800 border-green-200",
        RoomStatus::Forecast => "bg-blue-100 text-blue-800 border-blue-200",
        RoomStatus::Hoteling => "bg-yellow-100 text-yellow-800 border-yellow-200",
        RoomStatus::Vacant => "bg-gray-100 text-gray-800 border-green-400",
        RoomStatus::Pending => "bg-gray-100 text-gray-800 border-orange-400",
        RoomStatus::Available | RoomStatus::Other(_) => "bg-gray-100 text-gray-800 border-gray-200",
    }
}

/// Tailwind class for the status dot on the mobile room sheet.
#[must_use]
pub fn status_dot_class(status: &RoomStatus) -> &'static str {
    match status {
        RoomStatus::Available => "bg-green-500",
        RoomStatus::Vacant => "bg-blue-500",
        RoomStatus::Other(raw) if raw == "reserved" => "bg-red-500",
        _ => "bg-orange-500",
    }
}

/// Label, description and swatch for one legend row.
#[derive(Debug, Clone, PartialEq)]
pub struct LegendDescriptor {
    pub status: RoomStatus,
    pub label: &'static str,
    pub description: &'static str,
    pub swatch: RoomStyle,
}

/// Legend rows in display order.
#[must_use]
pub fn legend_descriptors() -> Vec<LegendDescriptor> {
    RoomStatus::LEGEND_ORDER
        .into_iter()
        .map(|status| {
            let (label, description) = match status {
                RoomStatus::Office => ("Office spaces", "Regular office spaces"),
                RoomStatus::Forecast => ("Forecast provider spaces", "Forecast provider spaces"),
                RoomStatus::Hoteling => ("Hoteling spaces", "Temporary hoteling spaces"),
                RoomStatus::Vacant => ("Vacant spaces", "Available vacant spaces"),
                _ => ("Pending Requests", "Pending request spaces"),
            };
            let swatch = status_to_style(&status);
            LegendDescriptor { status, label, description, swatch }
        })
        .collect()
}
