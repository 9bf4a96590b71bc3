use crate::{ApiError, ApiResult, AppState};
use axum::Json;
use axum::extract::State;
use catalog::{Game, ImportError};
use database::StoreError;
use log::{error, info};
use thiserror::Error;

pub const POPULATE_FAILED_MESSAGE: &str = "Failed to populate database";

#[derive(Debug, Error)]
enum PopulateError {
    #[error("catalog import failed: {0}")]
    Import(#[from] ImportError),
    #[error("store failed: {0}")]
    Store(#[from] StoreError),
}

/// Imports both remote catalogs and responds with every stored game.
/// The cause of a failure is logged, never returned.
pub async fn game_populate_action(State(state): State<AppState>) -> ApiResult<Json<Vec<Game>>> {
    match populate(&state).await {
        Ok(games) => Ok(Json(games)),
        Err(e) => {
            error!("There was an error populating the database: {}", e);
            Err(ApiError::InternalError(POPULATE_FAILED_MESSAGE.to_string()))
        }
    }
}

async fn populate(state: &AppState) -> Result<Vec<Game>, PopulateError> {
    let drafts = state.importer.fetch_all().await?;
    let total = drafts.len();

    let inserted = state.store.insert_ignoring_duplicates(drafts).await?;

    info!(
        "populate: {} catalog games, {} inserted, {} duplicates ignored",
        total,
        inserted,
        total - inserted
    );

    Ok(state.store.list().await?)
}
