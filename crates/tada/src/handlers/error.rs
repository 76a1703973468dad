use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use tada_core::storage::{repository_error_to_status_code, RepositoryError};
use tada_core::todo::ValidationError;

/// Error type returned by API handlers.
///
/// Every variant renders as a JSON body of the shape `{"detail": ...}`.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error(transparent)]
    Repository(#[from] RepositoryError),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, detail) = match &self {
            ApiError::Validation(err) => (StatusCode::UNPROCESSABLE_ENTITY, err.to_string()),
            ApiError::Repository(RepositoryError::NotFound { .. }) => {
                (StatusCode::NOT_FOUND, "Todo not found".to_string())
            }
            ApiError::Repository(err) => {
                tracing::error!(error = %err, "storage error");
                let code = repository_error_to_status_code(err);
                let status =
                    StatusCode::from_u16(code).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);
                (status, "Internal server error".to_string())
            }
        };

        (status, Json(serde_json::json!({ "detail": detail }))).into_response()
    }
}
