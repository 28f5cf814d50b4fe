#[cfg(test)]
#[path = "surface_test.rs"]
mod surface_test;

use serde::{Deserialize, Serialize};

use crate::consts::{BACKGROUND_COLOR, SURFACE_HEIGHT_RATIO, SURFACE_WIDTH_RATIO};

/// A point in surface coordinates (CSS pixels, origin top-left).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Point {
    pub x: f64,
    pub y: f64,
}

impl Point {
    #[must_use]
    pub fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    /// Rotate this point about `pivot` by `deg` degrees (clockwise on screen).
    #[must_use]
    pub fn rotated_about(self, pivot: Point, deg: f64) -> Point {
        let (sin, cos) = deg.to_radians().sin_cos();
        let dx = self.x - pivot.x;
        let dy = self.y - pivot.y;
        Point { x: pivot.x + dx * cos - dy * sin, y: pivot.y + dx * sin + dy * cos }
    }

    /// Euclidean distance to `other`.
    #[must_use]
    pub fn distance(self, other: Point) -> f64 {
        (self.x - other.x).hypot(self.y - other.y)
    }
}

/// Drawing surface configuration.
///
/// `width` / `height` are in CSS pixels. The surface never pans or zooms, so
/// surface coordinates and pointer offsets are the same space.
#[derive(Debug, Clone, PartialEq)]
pub struct SurfaceConfig {
    pub width: f64,
    pub height: f64,
    pub background: String,
    /// Whether pointer selection is enabled.
    pub selection: bool,
}

impl Default for SurfaceConfig {
    fn default() -> Self {
        Self { width: 0.0, height: 0.0, background: BACKGROUND_COLOR.to_owned(), selection: true }
    }
}

impl SurfaceConfig {
    /// Size a surface for a browser viewport of `viewport_w` × `viewport_h`.
    #[must_use]
    pub fn for_viewport(viewport_w: f64, viewport_h: f64) -> Self {
        Self {
            width: (viewport_w * SURFACE_WIDTH_RATIO).max(0.0),
            height: (viewport_h * SURFACE_HEIGHT_RATIO).max(0.0),
            ..Self::default()
        }
    }
}
