use crate::AppState;
use crate::games::game_routes;
use axum::Router;
use std::path::Path;
use tower_http::services::ServeDir;

pub struct ServerRoutes;

impl ServerRoutes {
    /// API routes first; every other path is looked up in the static directory.
    pub fn create(static_dir: &Path) -> Router<AppState> {
        Router::<AppState>::new()
            .merge(game_routes())
            .fallback_service(ServeDir::new(static_dir))
    }
}
