use crate::{ApiResult, AppState};
use axum::Json;
use axum::body::Bytes;
use axum::extract::State;
use catalog::{Game, SearchFilter};
use log::error;

/// An empty body searches without filters.
pub async fn game_search_action(
    State(state): State<AppState>,
    body: Bytes,
) -> ApiResult<Json<Vec<Game>>> {
    let filter = if body.iter().all(u8::is_ascii_whitespace) {
        SearchFilter::default()
    } else {
        let Json(filter) = Json::<SearchFilter>::from_bytes(&body)?;
        filter
    };

    let games = state
        .store
        .search(filter)
        .await
        .inspect_err(|e| error!("There was an error searching games: {}", e))?;

    Ok(Json(games))
}
