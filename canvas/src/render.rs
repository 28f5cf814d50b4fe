//! Rendering: draws the full canvas scene to a 2D context.
//!
//! This module is the only place that touches [`web_sys::CanvasRenderingContext2d`].
//! It receives a read-only view of engine state and produces pixels; it
//! does not mutate any application state.
//!
//! All fallible `Canvas2D` calls propagate errors via `Result<(), JsValue>`.
//! The top-level caller ([`crate::engine::Engine::render`]) handles the result.

use std::f64::consts::PI;

use wasm_bindgen::JsValue;
use web_sys::CanvasRenderingContext2d;

use crate::consts::{SELECTION_PADDING_PX, TEXT_LINE_HEIGHT};
use crate::doc::{Drawable, Shape};
use crate::engine::EngineCore;
use crate::surface::Point;

/// Selection dash segment length in pixels.
const SELECTION_DASH_PX: f64 = 4.0;

const SELECTION_COLOR: &str = "#1E90FF";

/// Draw the full scene: background, objects, in-progress stroke, and selection.
///
/// `dpr` is the device pixel ratio the backing store was sized with.
///
/// # Errors
///
/// Returns `Err` if any `Canvas2D` call fails (e.g. invalid context state).
pub fn draw(ctx: &CanvasRenderingContext2d, core: &EngineCore, dpr: f64) -> Result<(), JsValue> {
    let surface = &core.surface;

    // Layer 1: clear and paint the background.
    ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0)?;
    ctx.clear_rect(0.0, 0.0, surface.width, surface.height);
    ctx.set_fill_style_str(&surface.background);
    ctx.fill_rect(0.0, 0.0, surface.width, surface.height);

    // Layer 2: objects in paint order (bottom first).
    for obj in core.scene.objects() {
        draw_object(ctx, obj)?;
    }

    // Layer 3: live stroke preview.
    if let (Some(points), Some(brush)) = (core.pending_stroke(), core.brush.as_ref()) {
        ctx.set_stroke_style_str(&brush.color);
        ctx.set_line_width(f64::from(brush.width));
        stroke_polyline(ctx, points, Point::new(0.0, 0.0));
    }

    // Layer 4: selection UI.
    if let Some(obj) = core.scene.active() {
        draw_selection(ctx, obj)?;
    }

    Ok(())
}

// =============================================================
// Object dispatch
// =============================================================

fn draw_object(ctx: &CanvasRenderingContext2d, obj: &Drawable) -> Result<(), JsValue> {
    with_saved_state(ctx, |ctx| {
        translate_and_rotate(ctx, obj)?;
        let (w, h) = obj.size();

        match &obj.shape {
            Shape::Rect { width, height } => draw_rect(ctx, obj, *width, *height),
            Shape::Circle { radius } => draw_circle(ctx, obj, *radius)?,
            Shape::Text { text, font_size } => draw_text(ctx, obj, text, *font_size, w, h)?,
            Shape::Path { points } => draw_path(ctx, obj, points, Point::new(-w / 2.0, -h / 2.0)),
        }
        Ok(())
    })
}

// =============================================================
// Shape renderers
// =============================================================

fn draw_rect(ctx: &CanvasRenderingContext2d, obj: &Drawable, w: f64, h: f64) {
    if let Some(fill) = &obj.fill {
        ctx.set_fill_style_str(fill);
        ctx.fill_rect(-w / 2.0, -h / 2.0, w, h);
    }
    if obj.stroke.is_some() {
        apply_stroke_style(ctx, obj);
        ctx.stroke_rect(-w / 2.0, -h / 2.0, w, h);
    }
}

fn draw_circle(ctx: &CanvasRenderingContext2d, obj: &Drawable, radius: f64) -> Result<(), JsValue> {
    if radius <= 0.0 {
        return Ok(());
    }
    ctx.begin_path();
    ctx.arc(0.0, 0.0, radius, 0.0, 2.0 * PI)?;

    if let Some(fill) = &obj.fill {
        ctx.set_fill_style_str(fill);
        ctx.fill();
    }
    if obj.stroke.is_some() {
        apply_stroke_style(ctx, obj);
        ctx.stroke();
    }
    Ok(())
}

fn draw_text(
    ctx: &CanvasRenderingContext2d,
    obj: &Drawable,
    text: &str,
    font_size: f64,
    w: f64,
    h: f64,
) -> Result<(), JsValue> {
    ctx.set_font(&format!("{font_size:.0}px sans-serif"));
    ctx.set_text_align("left");
    ctx.set_text_baseline("top");
    ctx.set_fill_style_str(obj.fill.as_deref().unwrap_or("#000000"));

    let line_h = font_size * TEXT_LINE_HEIGHT;
    let mut y = -h / 2.0;
    for line in text.split('\n') {
        ctx.fill_text(line, -w / 2.0, y)?;
        y += line_h;
    }
    Ok(())
}

/// Freehand stroke. A fill, once set by recolouring, paints the area the
/// polyline encloses before the line itself.
fn draw_path(ctx: &CanvasRenderingContext2d, obj: &Drawable, points: &[Point], origin: Point) {
    if let Some(fill) = &obj.fill {
        if trace_polyline(ctx, points, origin) {
            ctx.set_fill_style_str(fill);
            ctx.fill();
        }
    }
    apply_stroke_style(ctx, obj);
    ctx.set_line_cap("round");
    ctx.set_line_join("round");
    stroke_polyline(ctx, points, origin);
}

/// Stroke `points` as one open polyline, offset by `origin`.
fn stroke_polyline(ctx: &CanvasRenderingContext2d, points: &[Point], origin: Point) {
    if trace_polyline(ctx, points, origin) {
        ctx.stroke();
    }
}

/// Build the polyline as the current path. `false` when there are no points.
fn trace_polyline(ctx: &CanvasRenderingContext2d, points: &[Point], origin: Point) -> bool {
    let Some((first, rest)) = points.split_first() else {
        return false;
    };
    ctx.begin_path();
    ctx.move_to(origin.x + first.x, origin.y + first.y);
    for p in rest {
        ctx.line_to(origin.x + p.x, origin.y + p.y);
    }
    true
}

// =============================================================
// Selection
// =============================================================

fn draw_selection(ctx: &CanvasRenderingContext2d, obj: &Drawable) -> Result<(), JsValue> {
    with_saved_state(ctx, |ctx| {
        // Dashed bounding box (rotated with the object).
        translate_and_rotate(ctx, obj)?;

        let (w, h) = obj.size();
        let pad = SELECTION_PADDING_PX + obj.stroke_width / 2.0;

        ctx.set_stroke_style_str(SELECTION_COLOR);
        ctx.set_line_width(1.0);
        let dash_array = js_sys::Array::new();
        dash_array.push(&SELECTION_DASH_PX.into());
        dash_array.push(&SELECTION_DASH_PX.into());
        ctx.set_line_dash(&dash_array)?;

        ctx.stroke_rect(-w / 2.0 - pad, -h / 2.0 - pad, w + pad * 2.0, h + pad * 2.0);
        ctx.set_line_dash(&js_sys::Array::new())?;
        Ok(())
    })
}

// =============================================================
// Helpers
// =============================================================

/// Run `f` between `save()` and `restore()`. The state is restored on the
/// error path too, so one failed draw cannot skew later ones.
fn with_saved_state(
    ctx: &CanvasRenderingContext2d,
    f: impl FnOnce(&CanvasRenderingContext2d) -> Result<(), JsValue>,
) -> Result<(), JsValue> {
    ctx.save();
    let result = f(ctx);
    ctx.restore();
    result
}

/// Translate to the object's center and rotate by its angle.
fn translate_and_rotate(ctx: &CanvasRenderingContext2d, obj: &Drawable) -> Result<(), JsValue> {
    let c = obj.center();
    ctx.translate(c.x, c.y)?;
    ctx.rotate(obj.angle.to_radians())?;
    Ok(())
}

fn apply_stroke_style(ctx: &CanvasRenderingContext2d, obj: &Drawable) {
    ctx.set_stroke_style_str(obj.stroke.as_deref().unwrap_or("#000000"));
    ctx.set_line_width(obj.stroke_width);
}
