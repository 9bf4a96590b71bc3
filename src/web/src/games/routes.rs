use crate::AppState;
use axum::Router;
use axum::routing::{get, post, put};

pub fn routes() -> Router<AppState> {
    Router::new()
        .route(
            "/api/games",
            get(super::list::game_list_action).post(super::create::game_create_action),
        )
        .route("/api/games/search", post(super::search::game_search_action))
        .route("/api/games/populate", post(super::populate::game_populate_action))
        .route(
            "/api/games/{id}",
            put(super::update::game_update_action).delete(super::delete::game_delete_action),
        )
}
