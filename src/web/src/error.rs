use axum::Json;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use database::StoreError;
use serde_json::json;

/// Custom error type for API handlers
#[derive(Debug)]
pub enum ApiError {
    NotFound(String),
    BadRequest(String),
    Conflict(String),
    ServiceUnavailable(String),
    InternalError(String),
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::NotFound(_) => StatusCode::NOT_FOUND,
            ApiError::BadRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Conflict(_) => StatusCode::CONFLICT,
            ApiError::ServiceUnavailable(_) => StatusCode::SERVICE_UNAVAILABLE,
            ApiError::InternalError(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();

        let error_message = match self {
            ApiError::NotFound(msg)
            | ApiError::BadRequest(msg)
            | ApiError::Conflict(msg)
            | ApiError::ServiceUnavailable(msg)
            | ApiError::InternalError(msg) => msg,
        };

        let body = Json(json!({
            "error": error_message,
        }));

        (status, body).into_response()
    }
}

/// Driver details stay in the logs; clients only see a stable message.
impl From<StoreError> for ApiError {
    fn from(err: StoreError) -> Self {
        match err {
            StoreError::NotFound(id) => ApiError::NotFound(format!("Game with ID {} not found", id)),
            StoreError::Conflict(_) => ApiError::Conflict(
                "A game with this platform and bundle id (or name) already exists".to_string(),
            ),
            StoreError::Unavailable(_) => {
                ApiError::ServiceUnavailable("Game store is unavailable".to_string())
            }
            StoreError::Sqlite(_) => ApiError::InternalError("Game store error".to_string()),
        }
    }
}

impl From<JsonRejection> for ApiError {
    fn from(rejection: JsonRejection) -> Self {
        ApiError::BadRequest(rejection.body_text())
    }
}

/// Helper type for handler results
pub type ApiResult<T> = Result<T, ApiError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn store_errors_map_to_conventional_statuses() {
        assert_eq!(ApiError::from(StoreError::NotFound(3)).status(), StatusCode::NOT_FOUND);
        assert_eq!(
            ApiError::from(StoreError::Conflict("UNIQUE constraint failed".to_string())).status(),
            StatusCode::CONFLICT
        );
        assert_eq!(
            ApiError::from(StoreError::Unavailable("poisoned".to_string())).status(),
            StatusCode::SERVICE_UNAVAILABLE
        );
    }

    #[test]
    fn driver_text_is_not_exposed() {
        let error = ApiError::from(StoreError::Conflict(
            "UNIQUE constraint failed: games.platform, games.bundle_id".to_string(),
        ));

        match error {
            ApiError::Conflict(msg) => assert!(!msg.contains("UNIQUE")),
            other => panic!("unexpected error: {:?}", other),
        }
    }
}
