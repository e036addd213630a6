//! Optional pan/zoom capability.
//!
//! A viewer's pan/zoom may only become available after asynchronous setup
//! (the vector viewer waits for its document). Until a capability is
//! attached, and after it is detached on teardown, every call is a no-op that
//! reports no change.

#[cfg(test)]
#[path = "panzoom_test.rs"]
mod panzoom_test;

use crate::camera::{Camera, Point};
use crate::layout::Size;
use crate::room::Rect;
use crate::viewport::ViewportController;

/// Pan/zoom operations a viewer exposes to its controls.
pub trait PanZoom {
    fn camera(&self) -> Camera;
    fn pan_by(&mut self, dx: f64, dy: f64);
    fn zoom_in(&mut self) -> bool;
    fn zoom_out(&mut self) -> bool;
    fn wheel(&mut self, anchor: Point, delta_y: f64) -> bool;
    fn double_click(&mut self, anchor: Point) -> bool;
    fn pinch(&mut self, center: Point, ratio: f64) -> bool;
    fn reset(&mut self);
    fn resize(&mut self, view: Size);
    fn set_content(&mut self, content: Rect);
    fn toggle_fullscreen(&mut self) -> bool;
}

impl PanZoom for ViewportController {
    fn camera(&self) -> Camera {
        ViewportController::camera(self)
    }

    fn pan_by(&mut self, dx: f64, dy: f64) {
        ViewportController::pan_by(self, dx, dy);
    }

    fn zoom_in(&mut self) -> bool {
        ViewportController::zoom_in(self)
    }

    fn zoom_out(&mut self) -> bool {
        ViewportController::zoom_out(self)
    }

    fn wheel(&mut self, anchor: Point, delta_y: f64) -> bool {
        ViewportController::wheel(self, anchor, delta_y)
    }

    fn double_click(&mut self, anchor: Point) -> bool {
        ViewportController::double_click(self, anchor)
    }

    fn pinch(&mut self, center: Point, ratio: f64) -> bool {
        ViewportController::pinch(self, center, ratio)
    }

    fn reset(&mut self) {
        self.reset_to_fit();
    }

    fn resize(&mut self, view: Size) {
        ViewportController::resize(self, view);
    }

    fn set_content(&mut self, content: Rect) {
        ViewportController::set_content(self, content);
    }

    fn toggle_fullscreen(&mut self) -> bool {
        ViewportController::toggle_fullscreen(self)
    }
}

/// Holds the pan/zoom capability once it exists.
#[derive(Default)]
pub struct PanZoomSlot {
    inner: Option<Box<dyn PanZoom>>,
}

impl std::fmt::Debug for PanZoomSlot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("PanZoomSlot").field("attached", &self.is_attached()).finish()
    }
}

impl PanZoomSlot {
    /// Install a capability. Refused (returning `false`) if one is already
    /// attached; setup happens once per mount.
    pub fn attach(&mut self, capability: Box<dyn PanZoom>) -> bool {
        if self.inner.is_some() {
            log::debug!("panzoom: already attached");
            return false;
        }
        self.inner = Some(capability);
        true
    }

    /// Drop the capability; later calls become no-ops.
    pub fn detach(&mut self) {
        self.inner = None;
    }

    #[must_use]
    pub fn is_attached(&self) -> bool {
        self.inner.is_some()
    }

    /// Current camera, or identity when nothing is attached.
    #[must_use]
    pub fn camera(&self) -> Camera {
        self.inner.as_ref().map_or_else(Camera::default, |pz| pz.camera())
    }

    pub fn pan_by(&mut self, dx: f64, dy: f64) -> bool {
        self.inner.as_mut().is_some_and(|pz| {
            pz.pan_by(dx, dy);
            true
        })
    }

    pub fn zoom_in(&mut self) -> bool {
        self.inner.as_mut().is_some_and(|pz| pz.zoom_in())
    }

    pub fn zoom_out(&mut self) -> bool {
        self.inner.as_mut().is_some_and(|pz| pz.zoom_out())
    }

    pub fn wheel(&mut self, anchor: Point, delta_y: f64) -> bool {
        self.inner.as_mut().is_some_and(|pz| pz.wheel(anchor, delta_y))
    }

    pub fn double_click(&mut self, anchor: Point) -> bool {
        self.inner.as_mut().is_some_and(|pz| pz.double_click(anchor))
    }

    pub fn pinch(&mut self, center: Point, ratio: f64) -> bool {
        self.inner.as_mut().is_some_and(|pz| pz.pinch(center, ratio))
    }

    pub fn reset(&mut self) -> bool {
        self.inner.as_mut().is_some_and(|pz| {
            pz.reset();
            true
        })
    }

    pub fn resize(&mut self, view: Size) -> bool {
        self.inner.as_mut().is_some_and(|pz| {
            pz.resize(view);
            true
        })
    }

    pub fn set_content(&mut self, content: Rect) -> bool {
        self.inner.as_mut().is_some_and(|pz| {
            pz.set_content(content);
            true
        })
    }

    /// New fullscreen state, or `None` when nothing is attached.
    pub fn toggle_fullscreen(&mut self) -> Option<bool> {
        self.inner.as_mut().map(|pz| pz.toggle_fullscreen())
    }
}
