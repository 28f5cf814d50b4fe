//! Canvas document store: create, fetch, and overwrite snapshots.
//!
//! DESIGN
//! ======
//! A canvas document is an id plus one opaque `canvas_data` JSON field that
//! holds the editor's scene snapshot. The store never inspects the snapshot.
//! Routes talk to the [`CanvasStore`] trait; `main` picks the Postgres
//! implementation when a database is configured and the in-memory one
//! otherwise.
//!
//! CONCURRENCY
//! ===========
//! Updates overwrite the whole field. Concurrent writers to the same
//! document resolve as last write wins in both implementations.

use std::collections::HashMap;

use serde::Serialize;
use sqlx::PgPool;
use tokio::sync::RwLock;
use tracing::info;
use uuid::Uuid;

#[cfg(test)]
#[path = "canvas_test.rs"]
mod canvas_test;

// =============================================================================
// TYPES
// =============================================================================

#[derive(Debug, thiserror::Error)]
pub enum CanvasError {
    #[error("canvas not found: {0}")]
    NotFound(Uuid),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
}

/// One canvas document as stored.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct CanvasRecord {
    pub id: Uuid,
    /// Scene snapshot; `None` until the first save.
    pub canvas_data: Option<serde_json::Value>,
}

/// JSON `null` and an absent snapshot are the same thing to the store.
fn normalize(data: Option<serde_json::Value>) -> Option<serde_json::Value> {
    data.filter(|v| !v.is_null())
}

/// Persistence boundary for canvas documents.
#[async_trait::async_trait]
pub trait CanvasStore: Send + Sync {
    /// Create a document with a generated id.
    async fn create(&self, canvas_data: Option<serde_json::Value>) -> Result<CanvasRecord, CanvasError>;

    /// Fetch a document by id.
    async fn get(&self, id: Uuid) -> Result<CanvasRecord, CanvasError>;

    /// Overwrite a document's `canvas_data`.
    async fn update_data(&self, id: Uuid, canvas_data: Option<serde_json::Value>) -> Result<CanvasRecord, CanvasError>;
}

// =============================================================================
// POSTGRES
// =============================================================================

pub struct PgCanvasStore {
    pool: PgPool,
}

impl PgCanvasStore {
    #[must_use]
    pub fn new(pool: PgPool) -> Self {
        Self { pool }
    }
}

#[async_trait::async_trait]
impl CanvasStore for PgCanvasStore {
    async fn create(&self, canvas_data: Option<serde_json::Value>) -> Result<CanvasRecord, CanvasError> {
        let id = Uuid::new_v4();
        let canvas_data = normalize(canvas_data);
        sqlx::query("INSERT INTO canvases (id, canvas_data) VALUES ($1, $2)")
            .bind(id)
            .bind(&canvas_data)
            .execute(&self.pool)
            .await?;

        info!(canvas_id = %id, "canvas created");
        Ok(CanvasRecord { id, canvas_data })
    }

    async fn get(&self, id: Uuid) -> Result<CanvasRecord, CanvasError> {
        let row = sqlx::query_as::<_, (Uuid, Option<serde_json::Value>)>(
            "SELECT id, canvas_data FROM canvases WHERE id = $1",
        )
        .bind(id)
        .fetch_optional(&self.pool)
        .await?;

        let (id, canvas_data) = row.ok_or(CanvasError::NotFound(id))?;
        Ok(CanvasRecord { id, canvas_data: normalize(canvas_data) })
    }

    async fn update_data(&self, id: Uuid, canvas_data: Option<serde_json::Value>) -> Result<CanvasRecord, CanvasError> {
        let canvas_data = normalize(canvas_data);
        let row = sqlx::query_as::<_, (Uuid, Option<serde_json::Value>)>(
            "UPDATE canvases
             SET canvas_data = $2, updated_at = now()
             WHERE id = $1
             RETURNING id, canvas_data",
        )
        .bind(id)
        .bind(&canvas_data)
        .fetch_optional(&self.pool)
        .await?;

        let (id, canvas_data) = row.ok_or(CanvasError::NotFound(id))?;
        info!(canvas_id = %id, "canvas saved");
        Ok(CanvasRecord { id, canvas_data: normalize(canvas_data) })
    }
}

// =============================================================================
// IN-MEMORY
// =============================================================================

/// Process-local store used when no database is configured, and in tests.
#[derive(Default)]
pub struct MemoryCanvasStore {
    docs: RwLock<HashMap<Uuid, Option<serde_json::Value>>>,
}

impl MemoryCanvasStore {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

#[async_trait::async_trait]
impl CanvasStore for MemoryCanvasStore {
    async fn create(&self, canvas_data: Option<serde_json::Value>) -> Result<CanvasRecord, CanvasError> {
        let id = Uuid::new_v4();
        let canvas_data = normalize(canvas_data);
        self.docs.write().await.insert(id, canvas_data.clone());
        info!(canvas_id = %id, "canvas created");
        Ok(CanvasRecord { id, canvas_data })
    }

    async fn get(&self, id: Uuid) -> Result<CanvasRecord, CanvasError> {
        let docs = self.docs.read().await;
        let canvas_data = docs.get(&id).ok_or(CanvasError::NotFound(id))?;
        Ok(CanvasRecord { id, canvas_data: canvas_data.clone() })
    }

    async fn update_data(&self, id: Uuid, canvas_data: Option<serde_json::Value>) -> Result<CanvasRecord, CanvasError> {
        let canvas_data = normalize(canvas_data);
        let mut docs = self.docs.write().await;
        let slot = docs.get_mut(&id).ok_or(CanvasError::NotFound(id))?;
        slot.clone_from(&canvas_data);
        info!(canvas_id = %id, "canvas saved");
        Ok(CanvasRecord { id, canvas_data })
    }
}
