//! Wire DTOs for the canvas document API.
//!
//! DESIGN
//! ======
//! These mirror the server's JSON bodies. `canvas_data` stays an opaque
//! `serde_json::Value`; only the `canvas` crate interprets it.

#[cfg(test)]
#[path = "types_test.rs"]
mod types_test;

use serde::{Deserialize, Serialize};

/// A canvas document as returned by `POST`/`GET`/`PATCH /api/canvases`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct CanvasDoc {
    /// Document identifier (UUID string).
    pub id: String,
    /// Scene snapshot, `None` for a never-saved canvas.
    #[serde(default)]
    pub canvas_data: Option<serde_json::Value>,
}

/// Body of `POST /api/canvases`. A new canvas starts with `null` data.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct CreateCanvasBody {
    pub canvas_data: Option<serde_json::Value>,
}

/// Body of `PATCH /api/canvases/{id}`.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct SaveCanvasBody {
    pub canvas_data: serde_json::Value,
}
