use wasm_bindgen::{JsCast, JsValue};
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

use crate::consts::{
    CIRCLE_PLACEMENT_MARGIN, CIRCLE_RADIUS, RECT_PLACEMENT_MARGIN, RECT_SIZE, SHAPE_FILL, SHAPE_STROKE,
    SHAPE_STROKE_WIDTH, TEXT_FONT_SIZE, TEXT_LEFT, TEXT_PLACEHOLDER, TEXT_TOP,
};
use crate::doc::{Drawable, ObjectId, Scene, Shape};
use crate::hit;
use crate::input::{Brush, BrushWidthError, Button, InputState, ToolState, parse_brush_width};
use crate::snapshot::{self, SnapshotError};
use crate::surface::{Point, SurfaceConfig};

#[cfg(test)]
#[path = "engine_test.rs"]
mod engine_test;

/// Actions returned from tool and input handlers for the host to process.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    ObjectAdded(ObjectId),
    ObjectRemoved(ObjectId),
    ObjectUpdated(ObjectId),
    SelectionChanged(Option<ObjectId>),
    /// Tool state or brush changed; the host should refresh its toolbar mirror.
    ToolsChanged,
    SetCursor(String),
    RenderNeeded,
}

/// Uniform sample in `[0, 1)` for shape placement. Unseeded.
#[cfg(target_arch = "wasm32")]
fn unit_sample() -> f64 {
    js_sys::Math::random()
}

#[cfg(not(target_arch = "wasm32"))]
fn unit_sample() -> f64 {
    rand::random::<f64>()
}

/// Offset for a shape reserving `margin` on an axis of length `extent`,
/// given a unit sample `u`. Never negative.
fn placement(extent: f64, margin: f64, u: f64) -> f64 {
    u.clamp(0.0, 1.0) * (extent - margin).max(0.0)
}

/// Core engine state: all logic that doesn't depend on the canvas element.
///
/// Separated from `Engine` so it can be tested without WASM/browser dependencies.
#[derive(Debug, Default)]
pub struct EngineCore {
    pub scene: Scene,
    pub tools: ToolState,
    pub brush: Option<Brush>,
    pub surface: SurfaceConfig,
    pub input: InputState,
}

impl EngineCore {
    #[must_use]
    pub fn new(surface: SurfaceConfig) -> Self {
        Self { surface, ..Self::default() }
    }

    // --- Document ---

    /// Apply a stored document's snapshot and attach the default brush.
    ///
    /// `None` or JSON `null` leaves the scene empty. On a decode failure the
    /// scene is left empty as well, the brush is still attached, and the
    /// error is returned for the host to report.
    ///
    /// # Errors
    ///
    /// Returns the [`SnapshotError`] from decoding a malformed snapshot.
    pub fn load_document(&mut self, snapshot: Option<&serde_json::Value>) -> Result<Vec<Action>, SnapshotError> {
        self.input = InputState::Idle;
        let decoded = match snapshot {
            Some(value) if !value.is_null() => snapshot::decode(value).map(Some),
            _ => Ok(None),
        };

        let result = match decoded {
            Ok(Some(snap)) => {
                self.surface.background = snap.background;
                self.scene.replace(snap.objects);
                Ok(())
            }
            Ok(None) => {
                self.scene.clear();
                Ok(())
            }
            Err(err) => {
                self.scene.clear();
                Err(err)
            }
        };

        self.attach_brush();
        result.map(|()| vec![Action::ToolsChanged, Action::RenderNeeded])
    }

    /// Serialize the whole scene for saving. Never mutates the scene.
    ///
    /// # Errors
    ///
    /// Returns [`SnapshotError::Encode`] if serialization fails.
    pub fn snapshot(&self) -> Result<serde_json::Value, SnapshotError> {
        snapshot::encode(&self.scene, &self.surface.background)
    }

    /// Attach (or re-configure) the free-draw brush from current tool state.
    pub fn attach_brush(&mut self) {
        self.brush = Some(Brush { color: self.tools.color.clone(), width: self.tools.brush_width });
    }

    // --- Tool actions ---

    /// Add a 100×100 rectangle at a random on-surface position.
    pub fn add_rectangle(&mut self) -> Vec<Action> {
        self.add_rectangle_at(unit_sample(), unit_sample())
    }

    /// Add a rectangle using explicit unit samples for placement.
    pub fn add_rectangle_at(&mut self, u: f64, v: f64) -> Vec<Action> {
        let left = placement(self.surface.width, RECT_PLACEMENT_MARGIN, u);
        let top = placement(self.surface.height, RECT_PLACEMENT_MARGIN, v);
        let obj = Drawable::new(left, top, Shape::Rect { width: RECT_SIZE, height: RECT_SIZE })
            .with_fill(SHAPE_FILL)
            .with_stroke(SHAPE_STROKE, SHAPE_STROKE_WIDTH);
        let id = self.scene.add(obj);
        vec![Action::ObjectAdded(id), Action::RenderNeeded]
    }

    /// Add a radius-50 circle at a random on-surface position.
    pub fn add_circle(&mut self) -> Vec<Action> {
        self.add_circle_at(unit_sample(), unit_sample())
    }

    /// Add a circle using explicit unit samples for placement.
    pub fn add_circle_at(&mut self, u: f64, v: f64) -> Vec<Action> {
        let left = placement(self.surface.width, CIRCLE_PLACEMENT_MARGIN, u);
        let top = placement(self.surface.height, CIRCLE_PLACEMENT_MARGIN, v);
        let obj = Drawable::new(left, top, Shape::Circle { radius: CIRCLE_RADIUS })
            .with_fill(SHAPE_FILL)
            .with_stroke(SHAPE_STROKE, SHAPE_STROKE_WIDTH);
        let id = self.scene.add(obj);
        vec![Action::ObjectAdded(id), Action::RenderNeeded]
    }

    /// Add editable text from the text buffer (or the placeholder) in the
    /// current colour, then clear the buffer.
    pub fn add_text(&mut self) -> Vec<Action> {
        let content = if self.tools.text_input.is_empty() {
            TEXT_PLACEHOLDER.to_owned()
        } else {
            std::mem::take(&mut self.tools.text_input)
        };
        let obj = Drawable::new(TEXT_LEFT, TEXT_TOP, Shape::Text { text: content, font_size: TEXT_FONT_SIZE })
            .with_fill(self.tools.color.clone());
        let id = self.scene.add(obj);
        vec![Action::ObjectAdded(id), Action::ToolsChanged, Action::RenderNeeded]
    }

    /// Remove the active object. No-op without a selection.
    pub fn delete_selected(&mut self) -> Vec<Action> {
        let Some(id) = self.scene.active_id() else {
            return Vec::new();
        };
        if matches!(self.input, InputState::DraggingObject { id: drag_id, .. } if drag_id == id) {
            self.input = InputState::Idle;
        }
        self.scene.remove(&id);
        vec![Action::ObjectRemoved(id), Action::SelectionChanged(None), Action::RenderNeeded]
    }

    /// Flip pen mode. The brush picks up the current colour and width on
    /// every toggle so changes made while the pen was off apply next time.
    pub fn toggle_pen(&mut self) -> Vec<Action> {
        self.tools.pen_mode = !self.tools.pen_mode;
        self.input = InputState::Idle;
        if let Some(brush) = self.brush.as_mut() {
            brush.color.clone_from(&self.tools.color);
            brush.width = self.tools.brush_width;
        }

        let mut actions = vec![Action::ToolsChanged, Action::SetCursor(self.cursor().to_owned())];
        if self.tools.pen_mode && self.scene.active_id().is_some() {
            self.scene.set_active(None);
            actions.push(Action::SelectionChanged(None));
        }
        actions.push(Action::RenderNeeded);
        actions
    }

    /// Parse and apply a brush width from the toolbar field.
    ///
    /// # Errors
    ///
    /// Returns [`BrushWidthError`] for non-numeric input; tool state is unchanged.
    pub fn set_brush_width(&mut self, raw: &str) -> Result<Vec<Action>, BrushWidthError> {
        let width = parse_brush_width(raw)?;
        self.tools.brush_width = width;
        if let Some(brush) = self.brush.as_mut() {
            brush.width = width;
        }
        Ok(vec![Action::ToolsChanged])
    }

    /// Set the draw colour. Also recolours the brush and fills the active
    /// object, if any, with the new colour.
    pub fn change_color(&mut self, color: &str) -> Vec<Action> {
        color.clone_into(&mut self.tools.color);
        if let Some(brush) = self.brush.as_mut() {
            color.clone_into(&mut brush.color);
        }

        let mut actions = vec![Action::ToolsChanged];
        if let Some(obj) = self.scene.active_mut() {
            obj.fill = Some(color.to_owned());
            actions.push(Action::ObjectUpdated(obj.id));
            actions.push(Action::RenderNeeded);
        }
        actions
    }

    /// Replace the text buffer.
    pub fn set_text_input(&mut self, text: &str) {
        text.clone_into(&mut self.tools.text_input);
    }

    /// Replace the active text object's content with the buffer and clear
    /// the buffer. No-op unless the active object is text.
    pub fn update_text(&mut self) -> Vec<Action> {
        let buffer = &mut self.tools.text_input;
        let Some(obj) = self.scene.active_mut() else {
            return Vec::new();
        };
        let Shape::Text { text, .. } = &mut obj.shape else {
            return Vec::new();
        };
        *text = std::mem::take(buffer);
        vec![Action::ObjectUpdated(obj.id), Action::ToolsChanged, Action::RenderNeeded]
    }

    /// Rotate the active object by `delta` degrees, wrapping into `[0, 360)`.
    /// No-op without a selection.
    pub fn rotate_selected(&mut self, delta: f64) -> Vec<Action> {
        let Some(obj) = self.scene.active_mut() else {
            return Vec::new();
        };
        obj.rotate_by(delta);
        vec![Action::ObjectUpdated(obj.id), Action::RenderNeeded]
    }

    // --- Pointer input ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        if button != Button::Primary {
            return Vec::new();
        }

        if self.tools.pen_mode {
            self.input = InputState::DrawingStroke { points: vec![pt] };
            return Vec::new();
        }

        if !self.surface.selection {
            return Vec::new();
        }

        let previous = self.scene.active_id();
        let hit = hit::hit_test(pt, &self.scene);
        self.scene.set_active(hit);
        self.input = match hit {
            Some(id) => InputState::DraggingObject { id, last: pt },
            None => InputState::Idle,
        };

        if previous == hit {
            return Vec::new();
        }
        vec![Action::SelectionChanged(hit), Action::RenderNeeded]
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        match &mut self.input {
            InputState::Idle => Vec::new(),
            InputState::DrawingStroke { points } => {
                if points.last() == Some(&pt) {
                    return Vec::new();
                }
                points.push(pt);
                vec![Action::RenderNeeded]
            }
            InputState::DraggingObject { id, last } => {
                let id = *id;
                let dx = pt.x - last.x;
                let dy = pt.y - last.y;
                *last = pt;
                let Some(obj) = self.scene.get_mut(&id) else {
                    self.input = InputState::Idle;
                    return Vec::new();
                };
                obj.left += dx;
                obj.top += dy;
                vec![Action::ObjectUpdated(id), Action::RenderNeeded]
            }
        }
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::DrawingStroke { mut points } => {
                if points.last() != Some(&pt) {
                    points.push(pt);
                }
                self.commit_stroke(&points)
            }
            InputState::Idle | InputState::DraggingObject { .. } => Vec::new(),
        }
    }

    /// The pointer left the surface: finish a stroke with the points captured
    /// so far, or drop a drag where it is.
    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        match std::mem::take(&mut self.input) {
            InputState::DrawingStroke { points } => self.commit_stroke(&points),
            InputState::Idle | InputState::DraggingObject { .. } => Vec::new(),
        }
    }

    /// Turn captured absolute points into a path object. Strokes with fewer
    /// than two points are discarded.
    fn commit_stroke(&mut self, points: &[Point]) -> Vec<Action> {
        if points.len() < 2 {
            return vec![Action::RenderNeeded];
        }
        let min_x = points.iter().map(|p| p.x).fold(f64::INFINITY, f64::min);
        let min_y = points.iter().map(|p| p.y).fold(f64::INFINITY, f64::min);
        let relative = points.iter().map(|p| Point::new(p.x - min_x, p.y - min_y)).collect();

        let (color, width) = match &self.brush {
            Some(brush) => (brush.color.clone(), brush.width),
            None => (self.tools.color.clone(), self.tools.brush_width),
        };
        let obj = Drawable::new(min_x, min_y, Shape::Path { points: relative }).with_stroke(color, f64::from(width));
        let id = self.scene.add(obj);
        vec![Action::ObjectAdded(id), Action::RenderNeeded]
    }

    // --- Queries ---

    /// The currently selected object, if any.
    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.scene.active_id()
    }

    /// Look up an object by ID.
    #[must_use]
    pub fn object(&self, id: &ObjectId) -> Option<&Drawable> {
        self.scene.get(id)
    }

    /// CSS cursor for the surface.
    #[must_use]
    pub fn cursor(&self) -> &'static str {
        if self.tools.pen_mode { "crosshair" } else { "default" }
    }

    /// Points of the stroke being drawn, for live preview.
    #[must_use]
    pub fn pending_stroke(&self) -> Option<&[Point]> {
        match &self.input {
            InputState::DrawingStroke { points } => Some(points),
            _ => None,
        }
    }
}

/// The full canvas engine. Wraps `EngineCore` and owns the browser canvas
/// element and its 2D context for the lifetime of one editor view.
pub struct Engine {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
    dpr: f64,
    pub core: EngineCore,
}

impl Engine {
    /// Acquire `canvas` as a drawing surface of the configured size.
    ///
    /// # Errors
    ///
    /// Returns `Err` if the element has no 2D context.
    pub fn new(canvas: HtmlCanvasElement, surface: SurfaceConfig, dpr: f64) -> Result<Self, JsValue> {
        let ctx = canvas
            .get_context("2d")?
            .ok_or_else(|| JsValue::from_str("2d context unavailable"))?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| JsValue::from_str("2d context has unexpected type"))?;
        let dpr = if dpr.is_finite() && dpr > 0.0 { dpr } else { 1.0 };
        let engine = Self { canvas, ctx, dpr, core: EngineCore::new(surface) };
        engine.apply_backing_size();
        Ok(engine)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn apply_backing_size(&self) {
        let w = (self.core.surface.width * self.dpr).round().max(0.0) as u32;
        let h = (self.core.surface.height * self.dpr).round().max(0.0) as u32;
        self.canvas.set_width(w);
        self.canvas.set_height(h);
    }

    // --- Delegated document I/O ---

    /// # Errors
    ///
    /// See [`EngineCore::load_document`].
    pub fn load_document(&mut self, snapshot: Option<&serde_json::Value>) -> Result<Vec<Action>, SnapshotError> {
        self.core.load_document(snapshot)
    }

    /// # Errors
    ///
    /// See [`EngineCore::snapshot`].
    pub fn snapshot(&self) -> Result<serde_json::Value, SnapshotError> {
        self.core.snapshot()
    }

    // --- Input events ---

    pub fn on_pointer_down(&mut self, pt: Point, button: Button) -> Vec<Action> {
        self.core.on_pointer_down(pt, button)
    }

    pub fn on_pointer_move(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_move(pt)
    }

    pub fn on_pointer_up(&mut self, pt: Point) -> Vec<Action> {
        self.core.on_pointer_up(pt)
    }

    pub fn on_pointer_leave(&mut self) -> Vec<Action> {
        self.core.on_pointer_leave()
    }

    // --- Render ---

    /// Repaint the whole surface.
    ///
    /// # Errors
    ///
    /// Returns `Err` if a 2D context call fails.
    pub fn render(&self) -> Result<(), JsValue> {
        crate::render::draw(&self.ctx, &self.core, self.dpr)
    }

    /// Release the surface: blank the element and shrink its backing store.
    pub fn dispose(self) {
        self.ctx.clear_rect(0.0, 0.0, f64::from(self.canvas.width()), f64::from(self.canvas.height()));
        self.canvas.set_width(0);
        self.canvas.set_height(0);
    }

    // --- Delegated queries ---

    #[must_use]
    pub fn selection(&self) -> Option<ObjectId> {
        self.core.selection()
    }

    #[must_use]
    pub fn tools(&self) -> &ToolState {
        &self.core.tools
    }
}
