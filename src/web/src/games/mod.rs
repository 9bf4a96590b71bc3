pub mod create;
pub mod delete;
pub mod list;
pub mod populate;
pub mod request;
pub mod routes;
pub mod search;
pub mod update;

pub use request::GameRequest;

use crate::{ApiError, ApiResult, AppState};
use axum::Router;

pub fn game_routes() -> Router<AppState> {
    routes::routes()
}

/// Reads the leading base-10 integer of a path id, so `"12abc"` and `"4.5"`
/// name games 12 and 4. Ids without leading digits can't name a game.
pub(crate) fn parse_game_id(raw: &str) -> ApiResult<i64> {
    let trimmed = raw.trim_start();

    let (sign, rest) = match trimmed.as_bytes().first() {
        Some(b'-') => ("-", &trimmed[1..]),
        Some(b'+') => ("", &trimmed[1..]),
        _ => ("", trimmed),
    };

    let digits_len = rest.bytes().take_while(u8::is_ascii_digit).count();

    if digits_len == 0 {
        return Err(ApiError::NotFound(format!("Game '{}' not found", raw)));
    }

    format!("{}{}", sign, &rest[..digits_len])
        .parse()
        .map_err(|_| ApiError::NotFound(format!("Game '{}' not found", raw)))
}
