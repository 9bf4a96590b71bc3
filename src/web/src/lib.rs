mod config;
mod error;
mod games;
mod routes;

pub use config::{ConfigError, ServerConfig};
pub use error::{ApiError, ApiResult};
pub use games::GameRequest;

use crate::routes::ServerRoutes;
use axum::Router;
use axum::response::IntoResponse;
use catalog::CatalogImporter;
use database::GameStore;
use log::{error, info};
use std::path::Path;
use tokio::net::TcpListener;
use tower::ServiceBuilder;
use tower_http::catch_panic::CatchPanicLayer;

pub struct GameCatalogServer {
    config: ServerConfig,
    state: AppState,
}

impl GameCatalogServer {
    pub fn new(config: ServerConfig, state: AppState) -> Self {
        GameCatalogServer { config, state }
    }

    pub async fn run(&self) -> std::io::Result<()> {
        let app = create_app(self.state.clone(), &self.config.static_dir);

        let addr = self.config.address();

        let listener = TcpListener::bind(addr).await.inspect_err(|e| {
            error!("Failed to bind to address {}: {}", addr, e);
        })?;

        info!("Server is up on port {}", addr.port());

        axum::serve(listener, app).await.inspect_err(|e| {
            error!("Server error: {}", e);
        })
    }
}

/// Builds the complete application router with state attached.
pub fn create_app(state: AppState, static_dir: &Path) -> Router {
    ServerRoutes::create(static_dir)
        .layer(
            ServiceBuilder::new()
                // Catch panics in handlers and convert them to 500 errors
                .layer(CatchPanicLayer::custom(|_err| {
                    ApiError::InternalError("Internal server error - handler panicked".to_string())
                        .into_response()
                })),
        )
        .with_state(state)
}

/// Services shared by every handler, built once at startup.
pub struct AppState {
    pub store: GameStore,
    pub importer: CatalogImporter,
}

impl AppState {
    pub fn new(store: GameStore, importer: CatalogImporter) -> Self {
        AppState { store, importer }
    }
}

impl Clone for AppState {
    fn clone(&self) -> Self {
        AppState {
            store: self.store.clone(),
            importer: self.importer.clone(),
        }
    }
}
