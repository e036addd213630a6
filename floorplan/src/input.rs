//! Input model: modifier keys, mouse buttons, keys, and the gesture state machine.
//!
//! `InputState` is the active gesture tracked between pointer-down and
//! pointer-up. A press on the floor stays a `Pressed` candidate until it
//! travels past the drag threshold; releasing before that activates the room
//! under the pointer, moving past it turns the gesture into a pan. Two-finger
//! touch switches to `Pinching` regardless of what came before.

#[cfg(test)]
#[path = "input_test.rs"]
mod input_test;

use crate::camera::Point;
use crate::consts::DRAG_THRESHOLD_PX;
use crate::room::RoomId;

/// Keyboard/mouse modifier keys held during an event.
#[allow(clippy::struct_excessive_bools)]
#[derive(Debug, Clone, Copy, Default)]
pub struct Modifiers {
    /// Shift key is held.
    pub shift: bool,
    /// Ctrl key is held.
    pub ctrl: bool,
    /// Alt / Option key is held.
    pub alt: bool,
    /// Meta / Command key is held.
    pub meta: bool,
}

/// Mouse button identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Button {
    /// Left mouse button (or single-finger tap).
    Primary,
    /// Middle mouse button (scroll wheel click).
    Middle,
    /// Right mouse button (or two-finger tap).
    Secondary,
}

/// A keyboard key as reported by the browser (e.g. `"Enter"`, `"Escape"`, `" "`).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Key(pub String);

impl Key {
    /// Enter or Space: activates the focused room.
    #[must_use]
    pub fn is_activate(&self) -> bool {
        matches!(self.0.as_str(), "Enter" | " " | "Spacebar")
    }

    #[must_use]
    pub fn is_escape(&self) -> bool {
        matches!(self.0.as_str(), "Escape" | "Esc")
    }

    #[must_use]
    pub fn is_tab(&self) -> bool {
        self.0 == "Tab"
    }
}

/// Wheel / trackpad scroll delta.
#[derive(Debug, Clone, Copy)]
pub struct WheelDelta {
    /// Horizontal scroll amount in pixels.
    pub dx: f64,
    /// Vertical scroll amount in pixels (positive = down).
    pub dy: f64,
}

/// Internal state for the input state machine.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum InputState {
    /// No gesture in progress; waiting for the next pointer-down.
    #[default]
    Idle,
    /// Pointer is down but has not moved far enough to count as a drag.
    Pressed {
        /// Screen-space position of the pointer-down.
        start_screen: Point,
        /// Room under the pointer at pointer-down, if any.
        room: Option<RoomId>,
    },
    /// The user is panning the floor by dragging.
    Panning {
        /// Screen-space position of the previous pointer event, used to compute pan delta.
        last_screen: Point,
    },
    /// Two-finger pinch in progress.
    Pinching {
        /// Finger distance at the previous pinch event.
        last_distance: f64,
    },
}

impl InputState {
    /// Whether a press that started at `start` and is now at `current` has
    /// moved far enough to become a pan.
    #[must_use]
    pub fn exceeds_drag_threshold(start: Point, current: Point) -> bool {
        start.distance(current) > DRAG_THRESHOLD_PX
    }

    /// Whether any gesture is in progress.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
