//! Rendering: replays a shape graph display list on a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only [`DisplayList`] and the camera and produces
//! pixels. It does not mutate any viewer state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::backend::{DisplayList, DrawCmd, FOCUS_RING_COLOR, TextAlign};
use crate::camera::{Camera, Point};
use crate::label::{ApproxMeasure, LABEL_FONT_FAMILY, TextMeasure};
use crate::room::Rect;

/// Background behind the floor.
const CLEAR_COLOR: &str = "#f7fafc";

const SHADOW_COLOR: &str = "rgba(0, 0, 0, 0.1)";
const SHADOW_BLUR: f64 = 2.0;
const SHADOW_OFFSET: f64 = 1.0;

/// Focus ring gap and width in screen pixels.
const FOCUS_GAP_PX: f64 = 3.0;
const FOCUS_WIDTH_PX: f64 = 2.0;

/// The canvas's 2D context.
///
/// # Errors
///
/// Returns `Err` if the canvas refuses a 2D context.
pub fn context_2d(canvas: &HtmlCanvasElement) -> Result<CanvasRenderingContext2d, JsValue> {
    canvas
        .get_context("2d")?
        .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
        .dyn_into::<CanvasRenderingContext2d>()
        .map_err(JsValue::from)
}

/// Text metrics from the live context.
pub struct CanvasMeasure {
    ctx: CanvasRenderingContext2d,
}

impl CanvasMeasure {
    #[must_use]
    pub fn new(ctx: CanvasRenderingContext2d) -> Self {
        Self { ctx }
    }
}

impl TextMeasure for CanvasMeasure {
    fn width(&self, text: &str, font_px: f64) -> f64 {
        self.ctx.save();
        self.ctx.set_font(&font(font_px, true));
        let width = match self.ctx.measure_text(text) {
            Ok(metrics) => metrics.width(),
            Err(_) => ApproxMeasure.width(text, font_px),
        };
        self.ctx.restore();
        width
    }
}

fn font(px: f64, bold: bool) -> String {
    let weight = if bold { "bold " } else { "" };
    format!("{weight}{px}px {LABEL_FONT_FAMILY}")
}

/// Draw the full frame.
///
/// `viewport_w` and `viewport_h` are in CSS pixels. `dpr` is the device pixel ratio.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(
    ctx: &CanvasRenderingContext2d,
    list: &DisplayList,
    camera: &Camera,
    viewport_w: f64,
    viewport_h: f64,
    dpr: f64,
) -> Result<(), JsValue> {
    // Layer 1: clear and set up transforms.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.set_fill_style_str(CLEAR_COLOR);
    ctx.fill_rect(0.0, 0.0, viewport_w, viewport_h);
    ctx.translate(camera.pan_x, camera.pan_y)?;
    ctx.scale(camera.zoom, camera.zoom)?;

    // Layer 2: commands, bottom first.
    for cmd in &list.commands {
        draw_cmd(ctx, cmd, camera.zoom)?;
    }
    Ok(())
}

// =============================================================
// Command dispatch
// =============================================================

fn draw_cmd(ctx: &CanvasRenderingContext2d, cmd: &DrawCmd, zoom: f64) -> Result<(), JsValue> {
    match cmd {
        DrawCmd::Rect { rect, fill, stroke, stroke_width, corner_radius, shadow, brightness } => {
            draw_rect(ctx, *rect, *fill, *stroke, *stroke_width, *corner_radius, *shadow, *brightness)
        }
        DrawCmd::Line { from, to, stroke, width } => {
            draw_line(ctx, *from, *to, stroke, *width);
            Ok(())
        }
        DrawCmd::Arc { center, radius, start_deg, sweep_deg, stroke, dash } => {
            draw_arc(ctx, *center, *radius, *start_deg, *sweep_deg, stroke, *dash)
        }
        DrawCmd::Circle { center, radius, fill } => draw_circle(ctx, *center, *radius, fill),
        DrawCmd::Text { text, at, font_px, bold, color, align } => {
            draw_text(ctx, text, *at, *font_px, *bold, color, *align)
        }
        DrawCmd::FocusRing { rect } => draw_focus_ring(ctx, *rect, zoom),
    }
}

// =============================================================
// Primitives
// =============================================================

#[allow(clippy::too_many_arguments)]
fn draw_rect(
    ctx: &CanvasRenderingContext2d,
    rect: Rect,
    fill: Option<&str>,
    stroke: Option<&str>,
    stroke_width: f64,
    corner_radius: f64,
    shadow: bool,
    brightness: f64,
) -> Result<(), JsValue> {
    ctx.save();
    rect_path(ctx, rect, corner_radius)?;

    if let Some(fill) = fill {
        if shadow {
            ctx.set_shadow_color(SHADOW_COLOR);
            ctx.set_shadow_blur(SHADOW_BLUR);
            ctx.set_shadow_offset_x(SHADOW_OFFSET);
            ctx.set_shadow_offset_y(SHADOW_OFFSET);
        }
        ctx.set_fill_style_str(fill);
        ctx.fill();
        ctx.set_shadow_color("transparent");

        // Darken by painting black over the fill.
        if brightness < 1.0 {
            ctx.set_global_alpha(1.0 - brightness);
            ctx.set_fill_style_str("#000");
            ctx.fill();
            ctx.set_global_alpha(1.0);
        }
    }

    if let Some(stroke) = stroke {
        ctx.set_stroke_style_str(stroke);
        ctx.set_line_width(stroke_width);
        ctx.stroke();
    }

    ctx.restore();
    Ok(())
}

fn draw_line(ctx: &CanvasRenderingContext2d, from: Point, to: Point, stroke: &str, width: f64) {
    ctx.save();
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(width);
    ctx.set_line_cap("round");
    ctx.begin_path();
    ctx.move_to(from.x, from.y);
    ctx.line_to(to.x, to.y);
    ctx.stroke();
    ctx.restore();
}

fn draw_arc(
    ctx: &CanvasRenderingContext2d,
    center: Point,
    radius: f64,
    start_deg: f64,
    sweep_deg: f64,
    stroke: &str,
    dash: [f64; 2],
) -> Result<(), JsValue> {
    ctx.save();
    let dash_array = js_sys::Array::new();
    dash_array.push(&dash[0].into());
    dash_array.push(&dash[1].into());
    ctx.set_line_dash(&dash_array)?;
    ctx.set_stroke_style_str(stroke);
    ctx.set_line_width(1.0);
    ctx.begin_path();
    let start = start_deg.to_radians();
    ctx.arc(center.x, center.y, radius, start, start + sweep_deg.to_radians())?;
    ctx.stroke();
    ctx.set_line_dash(&js_sys::Array::new())?;
    ctx.restore();
    Ok(())
}

fn draw_circle(ctx: &CanvasRenderingContext2d, center: Point, radius: f64, fill: &str) -> Result<(), JsValue> {
    ctx.save();
    ctx.begin_path();
    ctx.arc(center.x, center.y, radius, 0.0, 2.0 * PI)?;
    ctx.set_fill_style_str(fill);
    ctx.fill();
    ctx.restore();
    Ok(())
}

fn draw_text(
    ctx: &CanvasRenderingContext2d,
    text: &str,
    at: Point,
    font_px: f64,
    bold: bool,
    color: &str,
    align: TextAlign,
) -> Result<(), JsValue> {
    ctx.save();
    ctx.set_font(&font(font_px, bold));
    ctx.set_fill_style_str(color);
    match align {
        TextAlign::Start => {
            ctx.set_text_align("left");
            ctx.set_text_baseline("top");
        }
        TextAlign::Center => {
            ctx.set_text_align("center");
            ctx.set_text_baseline("middle");
        }
    }
    ctx.fill_text(text, at.x, at.y)?;
    ctx.restore();
    Ok(())
}

fn draw_focus_ring(ctx: &CanvasRenderingContext2d, rect: Rect, zoom: f64) -> Result<(), JsValue> {
    let gap = FOCUS_GAP_PX / zoom;
    let ring = Rect::new(rect.x - gap, rect.y - gap, rect.width + 2.0 * gap, rect.height + 2.0 * gap);
    ctx.save();
    rect_path(ctx, ring, gap)?;
    ctx.set_stroke_style_str(FOCUS_RING_COLOR);
    ctx.set_line_width(FOCUS_WIDTH_PX / zoom);
    ctx.stroke();
    ctx.restore();
    Ok(())
}

// =============================================================
// Helpers
// =============================================================

/// Begin a path tracing `rect` with rounded corners.
fn rect_path(ctx: &CanvasRenderingContext2d, rect: Rect, radius: f64) -> Result<(), JsValue> {
    let r = radius.min(rect.width / 2.0).min(rect.height / 2.0).max(0.0);
    let (x, y, max_x, max_y) = (rect.x, rect.y, rect.max_x(), rect.max_y());
    ctx.begin_path();
    ctx.move_to(x + r, y);
    ctx.arc_to(max_x, y, max_x, max_y, r)?;
    ctx.arc_to(max_x, max_y, x, max_y, r)?;
    ctx.arc_to(x, max_y, x, y, r)?;
    ctx.arc_to(x, y, max_x, y, r)?;
    ctx.close_path();
    Ok(())
}
