#[cfg(test)]
#[path = "hit_test.rs"]
mod hit_test;

use crate::consts::HIT_SLOP_PX;
use crate::doc::{Drawable, ObjectId, Scene, Shape};
use crate::surface::Point;

/// Topmost selectable object under `pt`, if any.
#[must_use]
pub fn hit_test(pt: Point, scene: &Scene) -> Option<ObjectId> {
    scene
        .objects()
        .iter()
        .rev()
        .find(|obj| obj.selectable && contains(obj, pt))
        .map(|obj| obj.id)
}

/// Whether `pt` falls on `obj`, honouring its rotation.
#[must_use]
pub fn contains(obj: &Drawable, pt: Point) -> bool {
    // Undo the rotation so the test runs against the axis-aligned shape.
    let local = pt.rotated_about(obj.center(), -obj.angle);
    let (w, h) = obj.size();
    let slop = (obj.stroke_width / 2.0).max(0.0);

    match &obj.shape {
        Shape::Rect { .. } | Shape::Text { .. } => {
            local.x >= obj.left - slop
                && local.x <= obj.left + w + slop
                && local.y >= obj.top - slop
                && local.y <= obj.top + h + slop
        }
        Shape::Circle { radius } => local.distance(obj.center()) <= radius + slop,
        Shape::Path { points } => {
            let reach = slop.max(HIT_SLOP_PX);
            let origin = Point::new(obj.left, obj.top);
            let abs = |p: &Point| Point::new(origin.x + p.x, origin.y + p.y);
            match points.as_slice() {
                [] => false,
                [only] => local.distance(abs(only)) <= reach,
                _ => points
                    .windows(2)
                    .any(|seg| distance_to_segment(local, abs(&seg[0]), abs(&seg[1])) <= reach),
            }
        }
    }
}

/// Shortest distance from `p` to the segment `a`–`b`.
#[must_use]
pub fn distance_to_segment(p: Point, a: Point, b: Point) -> f64 {
    let dx = b.x - a.x;
    let dy = b.y - a.y;
    let len_sq = dx * dx + dy * dy;
    if len_sq <= f64::EPSILON {
        return p.distance(a);
    }
    let t = (((p.x - a.x) * dx + (p.y - a.y) * dy) / len_sq).clamp(0.0, 1.0);
    p.distance(Point::new(a.x + t * dx, a.y + t * dy))
}
