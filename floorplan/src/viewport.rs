//! Viewport controller: pan, clamped zoom, fit-to-content and fullscreen.
//!
//! The controller owns the [`Camera`] for one viewer. All zoom operations
//! keep a screen-space anchor fixed (the pointer, pinch center or viewport
//! center) and clamp the result to the configured limits. Panning is never
//! constrained.

#[cfg(test)]
#[path = "viewport_test.rs"]
mod viewport_test;

use crate::camera::{Camera, Point};
use crate::config::ViewerConfig;
use crate::consts::WHEEL_PIXELS_PER_STEP;
use crate::layout::Size;
use crate::room::Rect;

/// Inclusive zoom bounds.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ZoomLimits {
    pub min: f64,
    pub max: f64,
}

impl ZoomLimits {
    #[must_use]
    pub fn clamp(&self, zoom: f64) -> f64 {
        zoom.clamp(self.min, self.max)
    }
}

/// How the camera is positioned on load and reset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum FitMode {
    /// Largest zoom at which the whole content fits the viewport.
    Contain,
    /// Fixed zoom, content centered.
    Scale(f64),
}

#[derive(Debug, Clone, PartialEq)]
pub struct ViewportController {
    camera: Camera,
    limits: ZoomLimits,
    step: f64,
    fit: FitMode,
    content: Rect,
    view: Size,
    fullscreen: bool,
}

impl ViewportController {
    #[must_use]
    pub fn new(limits: ZoomLimits, step: f64, fit: FitMode) -> Self {
        Self {
            camera: Camera::default(),
            limits,
            step,
            fit,
            content: Rect::new(0.0, 0.0, 0.0, 0.0),
            view: Size::default(),
            fullscreen: false,
        }
    }

    #[must_use]
    pub fn from_config(config: &ViewerConfig) -> Self {
        let fit = config.initial_zoom.map_or(FitMode::Contain, FitMode::Scale);
        Self::new(ZoomLimits { min: config.min_zoom, max: config.max_zoom }, config.zoom_step, fit)
    }

    #[must_use]
    pub fn camera(&self) -> Camera {
        self.camera
    }

    #[must_use]
    pub fn zoom(&self) -> f64 {
        self.camera.zoom
    }

    #[must_use]
    pub fn limits(&self) -> ZoomLimits {
        self.limits
    }

    #[must_use]
    pub fn view_size(&self) -> Size {
        self.view
    }

    #[must_use]
    pub fn content(&self) -> Rect {
        self.content
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        self.fullscreen
    }

    /// Replace the content extent in world units. Does not move the camera.
    pub fn set_content(&mut self, content: Rect) {
        self.content = content;
    }

    /// Container resized. Keeps the world point at the old view center in
    /// the center of the new view.
    pub fn resize(&mut self, view: Size) {
        if self.view.is_positive() {
            let old_center = Point::new(self.view.width / 2.0, self.view.height / 2.0);
            let world = self.camera.screen_to_world(old_center);
            self.view = view;
            self.center_on(world);
        } else {
            self.view = view;
        }
    }

    /// Put the camera at its load position for the current fit mode.
    pub fn reset_to_fit(&mut self) {
        let zoom = match self.fit {
            FitMode::Scale(scale) => scale,
            FitMode::Contain if self.content.width > 0.0 && self.content.height > 0.0 && self.view.is_positive() => {
                (self.view.width / self.content.width).min(self.view.height / self.content.height)
            }
            FitMode::Contain => 1.0,
        };
        self.camera.zoom = self.limits.clamp(zoom);
        self.center_on(self.content.center());
    }

    fn center_on(&mut self, world: Point) {
        self.camera.pan_x = self.view.width / 2.0 - world.x * self.camera.zoom;
        self.camera.pan_y = self.view.height / 2.0 - world.y * self.camera.zoom;
    }

    fn view_center(&self) -> Point {
        Point::new(self.view.width / 2.0, self.view.height / 2.0)
    }

    /// Translate by a screen-space delta.
    pub fn pan_by(&mut self, dx: f64, dy: f64) {
        self.camera.pan_x += dx;
        self.camera.pan_y += dy;
    }

    /// Set zoom (clamped) keeping `anchor` fixed on screen. Returns whether
    /// the zoom changed.
    pub fn zoom_at(&mut self, anchor: Point, zoom: f64) -> bool {
        let zoom = self.limits.clamp(zoom);
        if (zoom - self.camera.zoom).abs() < f64::EPSILON {
            return false;
        }
        let world = self.camera.screen_to_world(anchor);
        self.camera.zoom = zoom;
        self.camera.pan_x = anchor.x - world.x * zoom;
        self.camera.pan_y = anchor.y - world.y * zoom;
        true
    }

    /// One step in, around the viewport center.
    pub fn zoom_in(&mut self) -> bool {
        self.zoom_at(self.view_center(), self.camera.zoom * (1.0 + self.step))
    }

    /// One step out, around the viewport center.
    pub fn zoom_out(&mut self) -> bool {
        self.zoom_at(self.view_center(), self.camera.zoom / (1.0 + self.step))
    }

    /// Wheel zoom around the pointer; scrolling down zooms out.
    pub fn wheel(&mut self, anchor: Point, delta_y: f64) -> bool {
        let factor = (1.0 + self.step).powf(-delta_y / WHEEL_PIXELS_PER_STEP);
        self.zoom_at(anchor, self.camera.zoom * factor)
    }

    /// Double-click / double-tap zooms in one step around the pointer.
    pub fn double_click(&mut self, anchor: Point) -> bool {
        self.zoom_at(anchor, self.camera.zoom * (1.0 + self.step))
    }

    /// Pinch: scale by `ratio` of finger distances around `center`.
    pub fn pinch(&mut self, center: Point, ratio: f64) -> bool {
        if !ratio.is_finite() || ratio <= 0.0 {
            return false;
        }
        self.zoom_at(center, self.camera.zoom * ratio)
    }

    /// Flip fullscreen and return the new state.
    pub fn toggle_fullscreen(&mut self) -> bool {
        self.fullscreen = !self.fullscreen;
        self.fullscreen
    }

    /// Sync with a fullscreen change made outside the viewer.
    pub fn set_fullscreen(&mut self, fullscreen: bool) {
        self.fullscreen = fullscreen;
    }
}
