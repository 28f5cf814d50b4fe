//! Snapshot codec: the opaque JSON form of a whole scene.
//!
//! A snapshot is what the document store keeps in a canvas document's
//! `canvas_data` field:
//!
//! ```json
//! { "version": 1, "background": "#ffffff", "objects": [ { "type": "rect", ... } ] }
//! ```
//!
//! The store never looks inside it. Decoding validates geometry so a corrupt
//! document surfaces as [`SnapshotError::CorruptSceneData`] instead of
//! producing a scene that cannot be drawn.

#[cfg(test)]
#[path = "snapshot_test.rs"]
mod snapshot_test;

use std::collections::HashSet;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::consts::BACKGROUND_COLOR;
use crate::doc::{Drawable, Scene, Shape};

/// Current snapshot format version.
pub const SNAPSHOT_VERSION: u32 = 1;

#[derive(Debug, thiserror::Error)]
pub enum SnapshotError {
    #[error("corrupt scene data: {0}")]
    CorruptSceneData(String),
    #[error("unsupported snapshot version: {0}")]
    UnsupportedVersion(u32),
    #[error("snapshot encode failed: {0}")]
    Encode(#[from] serde_json::Error),
}

fn default_version() -> u32 {
    SNAPSHOT_VERSION
}

fn default_background() -> String {
    BACKGROUND_COLOR.to_owned()
}

/// Decoded snapshot contents.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Snapshot {
    #[serde(default = "default_version")]
    pub version: u32,
    #[serde(default = "default_background")]
    pub background: String,
    pub objects: Vec<Drawable>,
}

/// Serialize every object of `scene`, in paint order.
///
/// # Errors
///
/// Returns [`SnapshotError::Encode`] if serialization fails.
pub fn encode(scene: &Scene, background: &str) -> Result<serde_json::Value, SnapshotError> {
    let snapshot = Snapshot {
        version: SNAPSHOT_VERSION,
        background: background.to_owned(),
        objects: scene.objects().to_vec(),
    };
    Ok(serde_json::to_value(&snapshot)?)
}

/// Decode and validate a snapshot.
///
/// Duplicate object ids are replaced with fresh ones so the scene's
/// id-uniqueness holds.
///
/// # Errors
///
/// Returns [`SnapshotError::CorruptSceneData`] when the value is not a
/// snapshot object, names an unknown drawable type, or carries invalid
/// geometry; [`SnapshotError::UnsupportedVersion`] for newer formats.
pub fn decode(value: &serde_json::Value) -> Result<Snapshot, SnapshotError> {
    let mut snapshot =
        Snapshot::deserialize(value).map_err(|e| SnapshotError::CorruptSceneData(e.to_string()))?;

    if snapshot.version > SNAPSHOT_VERSION {
        return Err(SnapshotError::UnsupportedVersion(snapshot.version));
    }

    let mut seen = HashSet::with_capacity(snapshot.objects.len());
    for (idx, obj) in snapshot.objects.iter_mut().enumerate() {
        validate(obj).map_err(|reason| SnapshotError::CorruptSceneData(format!("object {idx}: {reason}")))?;
        if !seen.insert(obj.id) {
            obj.id = Uuid::new_v4();
            seen.insert(obj.id);
        }
        obj.angle = crate::doc::wrap_degrees(obj.angle);
    }

    Ok(snapshot)
}

fn validate(obj: &Drawable) -> Result<(), &'static str> {
    if !obj.left.is_finite() || !obj.top.is_finite() || !obj.angle.is_finite() {
        return Err("non-finite position");
    }
    if !obj.stroke_width.is_finite() || obj.stroke_width < 0.0 {
        return Err("invalid stroke width");
    }
    match &obj.shape {
        Shape::Rect { width, height } => {
            if !(width.is_finite() && height.is_finite() && *width >= 0.0 && *height >= 0.0) {
                return Err("invalid rect size");
            }
        }
        Shape::Circle { radius } => {
            if !(radius.is_finite() && *radius >= 0.0) {
                return Err("invalid circle radius");
            }
        }
        Shape::Text { font_size, .. } => {
            if !(font_size.is_finite() && *font_size > 0.0) {
                return Err("invalid font size");
            }
        }
        Shape::Path { points } => {
            if points.iter().any(|p| !p.x.is_finite() || !p.y.is_finite()) {
                return Err("non-finite path point");
            }
        }
    }
    Ok(())
}
