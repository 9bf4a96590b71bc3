use crate::{ApiResult, AppState};
use axum::Json;
use axum::extract::State;
use catalog::Game;
use log::error;

pub async fn game_list_action(State(state): State<AppState>) -> ApiResult<Json<Vec<Game>>> {
    let games = state
        .store
        .list()
        .await
        .inspect_err(|e| error!("There was an error querying games: {}", e))?;

    Ok(Json(games))
}
