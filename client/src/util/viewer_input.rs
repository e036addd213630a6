//! Browser event mapping for the floor viewers.
//!
//! Button/modifier mapping and the DOM drag-to-pan tracker are plain Rust
//! and tested natively; event coordinate readers need `web_sys`.

#[cfg(test)]
#[path = "viewer_input_test.rs"]
mod viewer_input_test;

use floorplan::camera::Point;
use floorplan::input::{Button, InputState, Modifiers};
use floorplan::svg::{LABEL_CLASS, SHAPE_CLASS};

pub fn map_button(button: i16) -> Button {
    match button {
        1 => Button::Middle,
        2 => Button::Secondary,
        _ => Button::Primary,
    }
}

pub fn map_modifiers(shift: bool, ctrl: bool, alt: bool, meta: bool) -> Modifiers {
    Modifiers { shift, ctrl, alt, meta }
}

/// Keys the viewer consumes; the browser must not scroll or move focus on them.
pub fn should_prevent_default_key(key: &str) -> bool {
    matches!(key, "Tab" | "Enter" | " " | "Escape")
}

#[cfg(feature = "hydrate")]
pub fn pointer_point(ev: &leptos::ev::PointerEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn wheel_point(ev: &leptos::ev::WheelEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

#[cfg(feature = "hydrate")]
pub fn mouse_point(ev: &leptos::ev::MouseEvent) -> Point {
    Point::new(f64::from(ev.offset_x()), f64::from(ev.offset_y()))
}

/// Position of a pointer relative to `element`, for DOM viewers whose event
/// targets are nested shapes rather than the viewport itself.
#[cfg(feature = "hydrate")]
pub fn client_point_in(ev: &leptos::ev::MouseEvent, element: &web_sys::Element) -> Point {
    let rect = element.get_bounding_client_rect();
    Point::new(f64::from(ev.client_x()) - rect.x(), f64::from(ev.client_y()) - rect.y())
}

/// CSS selector matching any of `classes`.
pub fn class_selector(classes: &[&str]) -> String {
    classes.iter().map(|class| format!(".{class}")).collect::<Vec<_>>().join(", ")
}

/// Elements that activate a room: shapes and their labels.
pub fn activation_selector() -> String {
    class_selector(&[SHAPE_CLASS, LABEL_CLASS])
}

/// Elements that show hover: shapes only, labels are click targets.
pub fn hover_selector() -> String {
    class_selector(&[SHAPE_CLASS])
}

#[cfg(feature = "hydrate")]
fn closest_target(ev: &leptos::ev::Event, selector: &str) -> Option<web_sys::Element> {
    use wasm_bindgen::JsCast;

    let element = ev.target()?.dyn_into::<web_sys::Element>().ok()?;
    element.closest(selector).ok()?
}

/// Nearest room shape or label enclosing the event target.
#[cfg(feature = "hydrate")]
pub fn room_target(ev: &leptos::ev::Event) -> Option<web_sys::Element> {
    closest_target(ev, &activation_selector())
}

/// Nearest room shape enclosing the event target; labels never hover.
#[cfg(feature = "hydrate")]
pub fn hover_target(ev: &leptos::ev::Event) -> Option<web_sys::Element> {
    closest_target(ev, &hover_selector())
}

/// Id of [`room_target`], when it carries one.
#[cfg(feature = "hydrate")]
pub fn room_target_id(ev: &leptos::ev::Event) -> Option<String> {
    let id = room_target(ev)?.id();
    if id.is_empty() { None } else { Some(id) }
}

/// Drag-to-pan tracker for viewers that render rooms as DOM elements.
///
/// The DOM delivers clicks to the element under the pointer on its own, so
/// these viewers only need to know whether a press turned into a pan, and
/// suppress the click that ends one.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DragPan {
    press: Option<Press>,
}

#[derive(Clone, Copy, Debug, PartialEq)]
struct Press {
    start: Point,
    last: Point,
    panning: bool,
}

impl DragPan {
    pub fn start(&mut self, at: Point) {
        self.press = Some(Press { start: at, last: at, panning: false });
    }

    /// Pan delta since the last move, once the press has left the threshold.
    pub fn move_to(&mut self, at: Point) -> Option<(f64, f64)> {
        let press = self.press.as_mut()?;
        if !press.panning && !InputState::exceeds_drag_threshold(press.start, at) {
            return None;
        }
        press.panning = true;
        let delta = (at.x - press.last.x, at.y - press.last.y);
        press.last = at;
        Some(delta)
    }

    /// End the press. Returns `true` when it was a pan, so the click that
    /// follows should be ignored.
    pub fn finish(&mut self) -> bool {
        self.press.take().is_some_and(|p| p.panning)
    }

    pub fn is_panning(&self) -> bool {
        self.press.is_some_and(|p| p.panning)
    }
}

/// Tracks active touch pointers and reports two-finger pinches.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PinchTracker {
    pointers: Vec<(i32, Point)>,
}

impl PinchTracker {
    /// Register a pointer. Returns the finger distance when this pointer
    /// completes a pair and a pinch begins.
    pub fn down(&mut self, pointer_id: i32, at: Point) -> Option<f64> {
        self.pointers.retain(|(id, _)| *id != pointer_id);
        self.pointers.push((pointer_id, at));
        self.pair().map(|(a, b)| a.distance(b))
    }

    /// Move a pointer. While pinching, returns the midpoint and distance.
    pub fn moved(&mut self, pointer_id: i32, at: Point) -> Option<(Point, f64)> {
        let slot = self.pointers.iter_mut().find(|(id, _)| *id == pointer_id)?;
        slot.1 = at;
        self.pair().map(|(a, b)| (a.midpoint(b), a.distance(b)))
    }

    /// Release a pointer. Returns `true` when this ended a pinch.
    pub fn up(&mut self, pointer_id: i32) -> bool {
        let was_pinching = self.is_pinching();
        self.pointers.retain(|(id, _)| *id != pointer_id);
        was_pinching && !self.is_pinching()
    }

    pub fn is_pinching(&self) -> bool {
        self.pointers.len() == 2
    }

    fn pair(&self) -> Option<(Point, Point)> {
        match self.pointers.as_slice() {
            [(_, a), (_, b)] => Some((*a, *b)),
            _ => None,
        }
    }
}
