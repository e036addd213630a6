//! Shared numeric constants for the floorplan crate.

// ── Viewport ────────────────────────────────────────────────────

/// Smallest zoom factor the shape-graph viewer allows.
pub const SHAPE_GRAPH_MIN_ZOOM: f64 = 0.3;

/// Largest zoom factor the shape-graph viewer allows.
pub const SHAPE_GRAPH_MAX_ZOOM: f64 = 2.5;

/// Zoom the shape-graph viewer opens at.
pub const SHAPE_GRAPH_INITIAL_ZOOM: f64 = 0.6;

/// Smallest zoom factor for the vector document viewer.
pub const VECTOR_MIN_ZOOM: f64 = 0.3;

/// Largest zoom factor for the vector document viewer.
pub const VECTOR_MAX_ZOOM: f64 = 10.0;

/// Relative zoom change applied by the zoom buttons and double-click.
pub const ZOOM_STEP: f64 = 0.3;

/// Wheel delta (pixels) that corresponds to one full zoom step.
pub const WHEEL_PIXELS_PER_STEP: f64 = 100.0;

/// Screen distance a press must travel before it becomes a pan.
pub const DRAG_THRESHOLD_PX: f64 = 4.0;

// ── Layout ──────────────────────────────────────────────────────

/// Padding added past the far edge of the furthest room.
pub const CONTENT_MARGIN: f64 = 100.0;

/// Minimum drawing-surface width in floor units.
pub const MIN_CANVAS_WIDTH: f64 = 1400.0;

/// Minimum drawing-surface height in floor units.
pub const MIN_CANVAS_HEIGHT: f64 = 800.0;

/// Inset of the building shell from the drawing-surface edge.
pub const SHELL_INSET: f64 = 50.0;

// ── Labels ──────────────────────────────────────────────────────

/// Upper bound for the room name font size.
pub const NAME_FONT_MAX_PX: f64 = 11.0;

/// Upper bound for the secondary id label font size.
pub const ID_FONT_MAX_PX: f64 = 8.0;

/// Rooms must be strictly taller than this to show the id label.
pub const ID_LABEL_MIN_ROOM_HEIGHT: f64 = 40.0;

/// Horizontal and vertical inset of labels inside a room rectangle.
pub const LABEL_PADDING: f64 = 4.0;

/// Average glyph advance as a fraction of the font size, used when no real
/// text metrics are available.
pub const APPROX_GLYPH_WIDTH_EM: f64 = 0.6;

// ── Placeholders ────────────────────────────────────────────────

/// Nominal edge length of a room synthesized for an unknown shape.
pub const PLACEHOLDER_ROOM_SIZE: f64 = 100.0;
