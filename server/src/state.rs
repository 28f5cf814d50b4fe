//! Shared application state.
//!
//! DESIGN
//! ======
//! `AppState` is injected into Axum handlers via the `State` extractor.
//! It holds the canvas document store behind the [`CanvasStore`] trait so
//! handlers work the same against Postgres and the in-memory store.

use std::sync::Arc;

use crate::services::canvas::CanvasStore;

/// Shared application state, injected into Axum handlers via State extractor.
/// Clone is required by Axum; the store is Arc-wrapped.
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn CanvasStore>,
    /// Request body limit for canvas writes, in bytes.
    pub max_snapshot_bytes: usize,
}

impl AppState {
    #[must_use]
    pub fn new(store: Arc<dyn CanvasStore>, max_snapshot_bytes: usize) -> Self {
        Self { store, max_snapshot_bytes }
    }
}

// =============================================================================
// TEST HELPERS
// =============================================================================
