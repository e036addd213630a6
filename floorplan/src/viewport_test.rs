#![allow(clippy::float_cmp)]

use super::*;

const EPSILON: f64 = 1e-9;

fn approx_eq(a: f64, b: f64) -> bool {
    (a - b).abs() < EPSILON
}

fn canvas_viewport() -> ViewportController {
    let mut vp = ViewportController::from_config(&ViewerConfig::shape_graph());
    vp.resize(Size::new(1000.0, 600.0));
    vp.set_content(Rect::new(0.0, 0.0, 1400.0, 800.0));
    vp.reset_to_fit();
    vp
}

fn vector_viewport() -> ViewportController {
    let mut vp = ViewportController::from_config(&ViewerConfig::vector_document());
    vp.resize(Size::new(800.0, 400.0));
    vp.set_content(Rect::new(0.0, 0.0, 1600.0, 400.0));
    vp.reset_to_fit();
    vp
}

// --- fit ---

#[test]
fn fixed_scale_fit_centers_content() {
    let vp = canvas_viewport();
    let cam = vp.camera();
    assert!(approx_eq(cam.zoom, 0.6));
    let center = cam.world_to_screen(Point::new(700.0, 400.0));
    assert!(approx_eq(center.x, 500.0) && approx_eq(center.y, 300.0));
}

#[test]
fn contain_fit_uses_tighter_axis() {
    let vp = vector_viewport();
    assert!(approx_eq(vp.zoom(), 0.5));
    let origin = vp.camera().world_to_screen(Point::new(0.0, 0.0));
    assert!(approx_eq(origin.x, 0.0));
    assert!(approx_eq(origin.y, 100.0));
}

#[test]
fn contain_fit_is_clamped() {
    let mut vp = ViewportController::from_config(&ViewerConfig::vector_document());
    vp.resize(Size::new(100.0, 100.0));
    vp.set_content(Rect::new(0.0, 0.0, 10_000.0, 10_000.0));
    vp.reset_to_fit();
    assert!(approx_eq(vp.zoom(), 0.3));
}

#[test]
fn reset_restores_after_pan_and_zoom() {
    let mut vp = canvas_viewport();
    let initial = vp.camera();
    vp.pan_by(120.0, -40.0);
    vp.zoom_in();
    vp.reset_to_fit();
    assert_eq!(vp.camera(), initial);
}

// --- pan ---

#[test]
fn pan_is_unconstrained() {
    let mut vp = canvas_viewport();
    let before = vp.camera();
    vp.pan_by(-1.0e6, 5.0e5);
    assert!(approx_eq(vp.camera().pan_x, before.pan_x - 1.0e6));
    assert!(approx_eq(vp.camera().pan_y, before.pan_y + 5.0e5));
}

// --- zoom ---

#[test]
fn zoom_in_and_out_step() {
    let mut vp = canvas_viewport();
    assert!(vp.zoom_in());
    assert!(approx_eq(vp.zoom(), 0.6 * 1.3));
    assert!(vp.zoom_out());
    assert!(approx_eq(vp.zoom(), 0.6));
}

#[test]
fn zoom_keeps_view_center_fixed() {
    let mut vp = canvas_viewport();
    let world_center = vp.camera().screen_to_world(Point::new(500.0, 300.0));
    vp.zoom_in();
    let after = vp.camera().world_to_screen(world_center);
    assert!(approx_eq(after.x, 500.0) && approx_eq(after.y, 300.0));
}

#[test]
fn zoom_clamped_to_max() {
    let mut vp = canvas_viewport();
    for _ in 0..20 {
        vp.zoom_in();
    }
    assert!(approx_eq(vp.zoom(), 2.5));
    assert!(!vp.zoom_in());
}

#[test]
fn zoom_clamped_to_min() {
    let mut vp = canvas_viewport();
    for _ in 0..20 {
        vp.zoom_out();
    }
    assert!(approx_eq(vp.zoom(), 0.3));
    assert!(!vp.zoom_out());
}

#[test]
fn vector_viewer_zooms_past_canvas_limit() {
    let mut vp = vector_viewport();
    for _ in 0..20 {
        vp.zoom_in();
    }
    assert!(approx_eq(vp.zoom(), 10.0));
}

#[test]
fn wheel_down_zooms_out_around_pointer() {
    let mut vp = canvas_viewport();
    let anchor = Point::new(200.0, 150.0);
    let world = vp.camera().screen_to_world(anchor);
    assert!(vp.wheel(anchor, 100.0));
    assert!(approx_eq(vp.zoom(), 0.6 / 1.3));
    let after = vp.camera().world_to_screen(world);
    assert!(approx_eq(after.x, anchor.x) && approx_eq(after.y, anchor.y));
}

#[test]
fn wheel_up_zooms_in() {
    let mut vp = canvas_viewport();
    vp.wheel(Point::new(0.0, 0.0), -100.0);
    assert!(approx_eq(vp.zoom(), 0.6 * 1.3));
}

#[test]
fn double_click_zooms_in_at_pointer() {
    let mut vp = canvas_viewport();
    let anchor = Point::new(10.0, 10.0);
    let world = vp.camera().screen_to_world(anchor);
    vp.double_click(anchor);
    assert!(approx_eq(vp.zoom(), 0.78));
    let after = vp.camera().world_to_screen(world);
    assert!(approx_eq(after.x, 10.0));
}

#[test]
fn pinch_scales_by_ratio() {
    let mut vp = canvas_viewport();
    assert!(vp.pinch(Point::new(500.0, 300.0), 2.0));
    assert!(approx_eq(vp.zoom(), 1.2));
}

#[test]
fn pinch_rejects_degenerate_ratio() {
    let mut vp = canvas_viewport();
    assert!(!vp.pinch(Point::new(0.0, 0.0), 0.0));
    assert!(!vp.pinch(Point::new(0.0, 0.0), f64::NAN));
    assert!(approx_eq(vp.zoom(), 0.6));
}

// --- resize / fullscreen ---

#[test]
fn resize_keeps_center() {
    let mut vp = canvas_viewport();
    let world = vp.camera().screen_to_world(Point::new(500.0, 300.0));
    vp.resize(Size::new(1600.0, 900.0));
    let after = vp.camera().world_to_screen(world);
    assert!(approx_eq(after.x, 800.0) && approx_eq(after.y, 450.0));
}

#[test]
fn fullscreen_toggles() {
    let mut vp = canvas_viewport();
    assert!(!vp.is_fullscreen());
    assert!(vp.toggle_fullscreen());
    assert!(!vp.toggle_fullscreen());
    vp.set_fullscreen(true);
    assert!(vp.is_fullscreen());
}
