//! REST API helpers for the canvas document store.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning an error since these endpoints
//! are only meaningful in the browser.
//!
//! ERROR HANDLING
//! ==============
//! Callers get `Result<_, String>` instead of panics so load/save failures
//! degrade to notices and an empty canvas without crashing hydration.

#![allow(clippy::unused_async)]

#[cfg(test)]
#[path = "api_test.rs"]
mod api_test;

use super::types::CanvasDoc;
#[cfg(feature = "hydrate")]
use super::types::{CreateCanvasBody, SaveCanvasBody};

#[cfg(any(test, feature = "hydrate"))]
const CANVASES_ENDPOINT: &str = "/api/canvases";

#[cfg(any(test, feature = "hydrate"))]
fn canvas_endpoint(canvas_id: &str) -> String {
    format!("{CANVASES_ENDPOINT}/{canvas_id}")
}

#[cfg(any(test, feature = "hydrate"))]
fn request_failed_message(action: &str, status: u16) -> String {
    match status {
        404 => format!("{action} failed: canvas not found"),
        413 => format!("{action} failed: canvas too large"),
        _ => format!("{action} failed: {status}"),
    }
}

/// Create an empty canvas document via `POST /api/canvases`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn create_canvas() -> Result<CanvasDoc, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::post(CANVASES_ENDPOINT)
            .json(&CreateCanvasBody::default())
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("create", resp.status()));
        }
        resp.json::<CanvasDoc>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        Err("not available on server".to_owned())
    }
}

/// Fetch a canvas document via `GET /api/canvases/{id}`.
///
/// # Errors
///
/// Returns an error string on connectivity failure, a missing document, or
/// an unreadable body.
pub async fn fetch_canvas(canvas_id: &str) -> Result<CanvasDoc, String> {
    #[cfg(feature = "hydrate")]
    {
        let resp = gloo_net::http::Request::get(&canvas_endpoint(canvas_id))
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("load", resp.status()));
        }
        resp.json::<CanvasDoc>().await.map_err(|e| e.to_string())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = canvas_id;
        Err("not available on server".to_owned())
    }
}

/// Overwrite a canvas document's snapshot via `PATCH /api/canvases/{id}`.
///
/// # Errors
///
/// Returns an error string if the request fails or the server rejects it.
pub async fn save_canvas(canvas_id: &str, canvas_data: serde_json::Value) -> Result<(), String> {
    #[cfg(feature = "hydrate")]
    {
        let body = SaveCanvasBody { canvas_data };
        let resp = gloo_net::http::Request::patch(&canvas_endpoint(canvas_id))
            .json(&body)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| e.to_string())?;
        if !resp.ok() {
            return Err(request_failed_message("save", resp.status()));
        }
        Ok(())
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = (canvas_id, canvas_data);
        Err("not available on server".to_owned())
    }
}
