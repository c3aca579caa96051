/// Server setup and initialization
///
/// Wires together all components: document store, gateway, controllers and HTTP routes.
/// Provides the main application factory function for creating the Axum app.

use crate::{
    api::{create_grade_routes, create_page_routes, AppState},
    config::{Config, StoreKind},
    store::{MemoryDocumentStore, SqliteDocumentStore, StoreBackend},
};
use anyhow::Result;
use axum::{routing::get, Router};
use tokio::net::TcpListener;

/// Open the document store selected by the configuration
pub async fn open_store(config: &Config) -> Result<StoreBackend> {
    match config.store.kind {
        StoreKind::Sqlite => {
            let path = config.store.database_path();
            tracing::info!("📁 Using SQLite document store: {}", path.display());
            let store = SqliteDocumentStore::open(&path)
                .await
                .map_err(|e| anyhow::anyhow!("Failed to open grade database: {}", e))?;
            Ok(StoreBackend::Sqlite(store))
        }
        StoreKind::Memory => {
            tracing::warn!("⚠️ Using in-memory document store, records are lost on restart");
            Ok(StoreBackend::Memory(MemoryDocumentStore::new()))
        }
    }
}

/// Build the router around an already opened store
pub fn build_router(store: StoreBackend, collection: &str) -> Router {
    let state = AppState::new(store, collection);

    Router::new()
        // Health check endpoint
        .route("/healthz", get(health_check))
        // Input form and listing pages
        .merge(create_page_routes())
        // JSON endpoints
        .merge(create_grade_routes())
        .with_state(state)
}

/// Create the main Axum application with all routes
pub async fn create_app(config: Config) -> Result<Router> {
    tracing::info!("🗄️ Initializing document store");
    let store = open_store(&config).await?;

    tracing::info!("📡 Creating HTTP router (collection: {})", config.store.collection);
    let app = build_router(store, &config.store.collection);

    tracing::info!("✅ Application initialized successfully");
    Ok(app)
}

/// Start the HTTP server with the given configuration
pub async fn start_server(config: Config) -> Result<()> {
    // Initialize tracing subscriber for logging
    tracing_subscriber::fmt()
        .with_target(false)
        .with_thread_ids(true)
        .with_level(true)
        .init();

    tracing::info!("Starting grade form server...");

    let app = create_app(config.clone()).await?;

    let bind_addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&bind_addr).await?;

    tracing::info!("Server listening on http://{}", bind_addr);

    axum::serve(listener, app.into_make_service()).await?;

    Ok(())
}

/// Health check endpoint handler
async fn health_check() -> &'static str {
    "ok"
}
