//! Document model: drawable objects and the ordered scene graph.
//!
//! This module defines what is on the canvas. A [`Drawable`] carries the
//! attributes every object shares (position, colours, rotation, selectable
//! flag) plus a [`Shape`] payload for the kind-specific geometry. The
//! [`Scene`] owns all live drawables in paint order and tracks the single
//! active (selected) object.
//!
//! Data flows into this layer from snapshots (JSON deserialization via
//! [`crate::snapshot`]) and from the engine (toolbar actions and pointer
//! gestures). The renderer reads [`Scene::objects`] front to back.

#[cfg(test)]
#[path = "doc_test.rs"]
mod doc_test;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::{TEXT_GLYPH_WIDTH, TEXT_LINE_HEIGHT};
use crate::surface::Point;

/// Unique identifier for a drawable.
pub type ObjectId = Uuid;

/// Kind-specific geometry of a drawable.
///
/// Serialized with a `type` tag so a snapshot object reads
/// `{"type": "rect", "width": 100, ...}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type")]
pub enum Shape {
    /// Axis-aligned rectangle before rotation.
    #[serde(rename = "rect")]
    Rect { width: f64, height: f64 },
    /// Circle; `left`/`top` address its bounding box.
    #[serde(rename = "circle")]
    Circle { radius: f64 },
    /// Editable text. Multi-line content splits on `\n`.
    #[serde(rename = "i-text", rename_all = "camelCase")]
    Text { text: String, font_size: f64 },
    /// Freehand stroke. Points are relative to the drawable's `left`/`top`.
    #[serde(rename = "path")]
    Path { points: Vec<Point> },
}

fn default_stroke_width() -> f64 {
    1.0
}

fn default_selectable() -> bool {
    true
}

/// A drawable object as held in the scene and stored in snapshots.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Drawable {
    /// Unique identifier. Regenerated when a snapshot omits it.
    #[serde(default = "Uuid::new_v4")]
    pub id: ObjectId,
    /// Left edge of the unrotated bounding box.
    pub left: f64,
    /// Top edge of the unrotated bounding box.
    pub top: f64,
    /// Clockwise rotation in degrees about the bounding-box centre, in `[0, 360)`.
    #[serde(default)]
    pub angle: f64,
    /// Fill colour as a CSS colour string. `None` draws no fill.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub fill: Option<String>,
    /// Outline colour as a CSS colour string. `None` draws no outline.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub stroke: Option<String>,
    /// Outline width.
    #[serde(default = "default_stroke_width")]
    pub stroke_width: f64,
    /// Whether pointer interaction may select this object.
    #[serde(default = "default_selectable")]
    pub selectable: bool,
    /// Geometry payload.
    #[serde(flatten)]
    pub shape: Shape,
}

impl Drawable {
    /// Create a drawable at `(left, top)` with no fill, no stroke, and no rotation.
    #[must_use]
    pub fn new(left: f64, top: f64, shape: Shape) -> Self {
        Self {
            id: Uuid::new_v4(),
            left,
            top,
            angle: 0.0,
            fill: None,
            stroke: None,
            stroke_width: default_stroke_width(),
            selectable: true,
            shape,
        }
    }

    #[must_use]
    pub fn with_fill(mut self, fill: impl Into<String>) -> Self {
        self.fill = Some(fill.into());
        self
    }

    #[must_use]
    pub fn with_stroke(mut self, stroke: impl Into<String>, width: f64) -> Self {
        self.stroke = Some(stroke.into());
        self.stroke_width = width;
        self
    }

    /// Width and height of the unrotated bounding box.
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn size(&self) -> (f64, f64) {
        match &self.shape {
            Shape::Rect { width, height } => (*width, *height),
            Shape::Circle { radius } => (radius * 2.0, radius * 2.0),
            Shape::Text { text, font_size } => {
                let lines = text.split('\n');
                let (count, longest) = lines.fold((0_usize, 0_usize), |(n, w), line| (n + 1, w.max(line.chars().count())));
                (longest as f64 * font_size * TEXT_GLYPH_WIDTH, count.max(1) as f64 * font_size * TEXT_LINE_HEIGHT)
            }
            Shape::Path { points } => {
                let w = points.iter().map(|p| p.x).fold(0.0_f64, f64::max);
                let h = points.iter().map(|p| p.y).fold(0.0_f64, f64::max);
                (w, h)
            }
        }
    }

    /// Centre of the bounding box; the rotation pivot.
    #[must_use]
    pub fn center(&self) -> Point {
        let (w, h) = self.size();
        Point::new(self.left + w / 2.0, self.top + h / 2.0)
    }

    /// Whether this drawable is editable text.
    #[must_use]
    pub fn is_text(&self) -> bool {
        matches!(self.shape, Shape::Text { .. })
    }

    /// Rotate by `delta` degrees, wrapping into `[0, 360)`.
    pub fn rotate_by(&mut self, delta: f64) {
        self.angle = wrap_degrees(self.angle + delta);
    }
}

/// `(a) mod 360` normalised into `[0, 360)`, so negative input wraps upward.
#[must_use]
pub fn wrap_degrees(a: f64) -> f64 {
    let wrapped = a.rem_euclid(360.0);
    // rem_euclid can round up to exactly 360.0 for tiny negative inputs.
    if wrapped >= 360.0 { 0.0 } else { wrapped }
}

/// Ordered in-memory scene graph.
///
/// Vector order is paint order: later objects draw on top. At most one
/// object is active at a time, and the active id always names a live object.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    objects: Vec<Drawable>,
    active: Option<ObjectId>,
}

impl Scene {
    /// Create an empty scene.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an object on top of the paint order. Returns its id.
    pub fn add(&mut self, obj: Drawable) -> ObjectId {
        let id = obj.id;
        self.objects.push(obj);
        id
    }

    /// Remove an object by id, returning it if it was present. Clears the
    /// active selection when it pointed at the removed object.
    pub fn remove(&mut self, id: &ObjectId) -> Option<Drawable> {
        let idx = self.objects.iter().position(|o| o.id == *id)?;
        if self.active.as_ref() == Some(id) {
            self.active = None;
        }
        Some(self.objects.remove(idx))
    }

    #[must_use]
    pub fn get(&self, id: &ObjectId) -> Option<&Drawable> {
        self.objects.iter().find(|o| o.id == *id)
    }

    pub fn get_mut(&mut self, id: &ObjectId) -> Option<&mut Drawable> {
        self.objects.iter_mut().find(|o| o.id == *id)
    }

    /// The active object's id, if any.
    #[must_use]
    pub fn active_id(&self) -> Option<ObjectId> {
        self.active
    }

    /// The active object, if any.
    #[must_use]
    pub fn active(&self) -> Option<&Drawable> {
        self.active.as_ref().and_then(|id| self.get(id))
    }

    pub fn active_mut(&mut self) -> Option<&mut Drawable> {
        let id = self.active?;
        self.get_mut(&id)
    }

    /// Set or clear the active object. Returns `false` (and leaves the
    /// selection unchanged) when `id` names no live object.
    pub fn set_active(&mut self, id: Option<ObjectId>) -> bool {
        match id {
            Some(id) if self.get(&id).is_none() => false,
            other => {
                self.active = other;
                true
            }
        }
    }

    /// All objects in paint order (bottom first).
    #[must_use]
    pub fn objects(&self) -> &[Drawable] {
        &self.objects
    }

    /// Replace the whole scene. Clears the selection.
    pub fn replace(&mut self, objects: Vec<Drawable>) {
        self.objects = objects;
        self.active = None;
    }

    /// Remove every object and clear the selection.
    pub fn clear(&mut self) {
        self.objects.clear();
        self.active = None;
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.objects.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.objects.is_empty()
    }
}
