use crate::games::{GameRequest, parse_game_id};
use crate::{ApiResult, AppState};
use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::extract::{Path, State};
use catalog::Game;
use log::error;

pub async fn game_update_action(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
    payload: Result<Json<GameRequest>, JsonRejection>,
) -> ApiResult<Json<Game>> {
    let id = parse_game_id(&raw_id)?;
    let Json(request) = payload?;
    let draft = request.into_draft()?;

    let game = state
        .store
        .update(id, draft)
        .await
        .inspect_err(|e| error!("There was an error updating game {}: {}", id, e))?;

    Ok(Json(game))
}
