mod config;
mod db;
mod routes;
mod services;
mod state;

use std::sync::Arc;

use services::canvas::{CanvasStore, MemoryCanvasStore, PgCanvasStore};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    if let Err(e) = dotenvy::dotenv() {
        if !e.not_found() {
            return Err(e.into());
        }
    }
    tracing_subscriber::fmt::init();

    let config = config::Config::from_env()?;

    let store: Arc<dyn CanvasStore> = match config.database_url.as_deref() {
        Some(url) => {
            let pool = db::init_pool(url, config.db_max_connections).await?;
            tracing::info!(max_connections = config.db_max_connections, "postgres canvas store ready");
            Arc::new(PgCanvasStore::new(pool))
        }
        None => {
            tracing::warn!("DATABASE_URL not set; canvases are kept in memory and lost on restart");
            Arc::new(MemoryCanvasStore::new())
        }
    };

    let state = state::AppState::new(store, config.max_snapshot_bytes);

    let app = match routes::leptos_app(state.clone()) {
        Ok(app) => app,
        Err(e) => {
            tracing::warn!(error = %e, "leptos not configured; serving API only");
            routes::api_routes(state)
        }
    };

    let listener = tokio::net::TcpListener::bind(format!("0.0.0.0:{}", config.port)).await?;
    tracing::info!(port = config.port, "sketchpad listening");
    axum::serve(listener, app).await?;
    Ok(())
}
