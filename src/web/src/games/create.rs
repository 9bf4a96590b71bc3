use crate::games::GameRequest;
use crate::{ApiResult, AppState};
use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use catalog::Game;
use log::{debug, error};

pub async fn game_create_action(
    State(state): State<AppState>,
    payload: Result<Json<GameRequest>, JsonRejection>,
) -> ApiResult<Json<Game>> {
    let Json(request) = payload?;
    let draft = request.into_draft()?;

    let game = state
        .store
        .create(draft)
        .await
        .inspect_err(|e| error!("There was an error creating a game: {}", e))?;

    debug!("game {} created", game.id);

    Ok(Json(game))
}
