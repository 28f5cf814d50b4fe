//! Canvas document routes.
//!
//! Thin protocol translation over [`crate::services::canvas::CanvasStore`]:
//! path ids are parsed by the `Path<Uuid>` extractor (malformed → 400) and
//! store errors map to status codes in [`canvas_error_to_status`].

use axum::body::Bytes;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::Json;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::services::canvas::{CanvasError, CanvasRecord};
use crate::state::AppState;

#[cfg(test)]
#[path = "canvases_test.rs"]
mod canvases_test;

#[derive(Debug, Serialize, PartialEq)]
pub struct CanvasResponse {
    pub id: Uuid,
    pub canvas_data: Option<serde_json::Value>,
}

impl From<CanvasRecord> for CanvasResponse {
    fn from(record: CanvasRecord) -> Self {
        Self { id: record.id, canvas_data: record.canvas_data }
    }
}

#[derive(Debug, Default, Deserialize)]
pub struct CreateCanvasBody {
    #[serde(default)]
    pub canvas_data: Option<serde_json::Value>,
}

/// `canvas_data` is required; send `null` to clear it.
#[derive(Debug, Deserialize)]
pub struct UpdateCanvasBody {
    pub canvas_data: serde_json::Value,
}

/// `POST /api/canvases`: create a canvas document. The body is optional.
pub async fn create_canvas(
    State(state): State<AppState>,
    body: Bytes,
) -> Result<(StatusCode, Json<CanvasResponse>), StatusCode> {
    let body = parse_create_body(&body)?;
    let record = state
        .store
        .create(body.canvas_data)
        .await
        .map_err(canvas_error_to_status)?;
    Ok((StatusCode::CREATED, Json(record.into())))
}

/// `GET /api/canvases/:id`: fetch a canvas document.
pub async fn get_canvas(
    State(state): State<AppState>,
    Path(canvas_id): Path<Uuid>,
) -> Result<Json<CanvasResponse>, StatusCode> {
    let record = state
        .store
        .get(canvas_id)
        .await
        .map_err(canvas_error_to_status)?;
    Ok(Json(record.into()))
}

/// `PATCH /api/canvases/:id`: overwrite a canvas document's snapshot.
pub async fn update_canvas(
    State(state): State<AppState>,
    Path(canvas_id): Path<Uuid>,
    Json(body): Json<UpdateCanvasBody>,
) -> Result<Json<CanvasResponse>, StatusCode> {
    let record = state
        .store
        .update_data(canvas_id, Some(body.canvas_data))
        .await
        .map_err(canvas_error_to_status)?;
    Ok(Json(record.into()))
}

/// Empty or whitespace-only bodies create an empty document.
pub(crate) fn parse_create_body(raw: &[u8]) -> Result<CreateCanvasBody, StatusCode> {
    if raw.iter().all(u8::is_ascii_whitespace) {
        return Ok(CreateCanvasBody::default());
    }
    serde_json::from_slice(raw).map_err(|e| {
        tracing::debug!(error = %e, "rejected create body");
        StatusCode::BAD_REQUEST
    })
}

pub(crate) fn canvas_error_to_status(err: CanvasError) -> StatusCode {
    match err {
        CanvasError::NotFound(_) => StatusCode::NOT_FOUND,
        CanvasError::Database(e) => {
            tracing::error!(error = %e, "canvas store failure");
            StatusCode::INTERNAL_SERVER_ERROR
        }
    }
}
