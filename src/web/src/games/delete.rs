use crate::games::parse_game_id;
use crate::{ApiResult, AppState};
use axum::Json;
use axum::extract::{Path, State};
use log::{error, info};
use serde::Serialize;

#[derive(Serialize)]
pub struct GameDeleteResponse {
    pub id: i64,
}

pub async fn game_delete_action(
    State(state): State<AppState>,
    Path(raw_id): Path<String>,
) -> ApiResult<Json<GameDeleteResponse>> {
    let id = parse_game_id(&raw_id)?;

    let id = state
        .store
        .delete(id)
        .await
        .inspect_err(|e| error!("There was an error deleting game {}: {}", id, e))?;

    info!("game {} deleted", id);

    Ok(Json(GameDeleteResponse { id }))
}
