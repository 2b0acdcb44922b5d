use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use horizon_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

/// API failure, already carrying the user-facing message.
///
/// Every route answers errors with the same `{code, message}` body; the
/// variant picks the status and the machine-readable code.
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),
    #[error("{0}")]
    Denied(String),
    #[error("{0}")]
    NotFound(String),
    #[error("{0}")]
    Conflict(String),
    #[error("{0}")]
    RateLimited(String),
    #[error("{0}")]
    Configuration(String),
    #[error("{0}")]
    Upstream(String),
}

#[derive(Serialize)]
struct ErrorBody {
    code: &'static str,
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code) = match &self {
            ApiError::BadRequest(_) => (StatusCode::BAD_REQUEST, "invalid_input"),
            ApiError::Denied(_) => (StatusCode::FORBIDDEN, "access_denied"),
            ApiError::NotFound(_) => (StatusCode::NOT_FOUND, "not_found"),
            ApiError::Conflict(_) => (StatusCode::CONFLICT, "conflict"),
            ApiError::RateLimited(_) => (StatusCode::TOO_MANY_REQUESTS, "rate_limited"),
            ApiError::Configuration(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, "configuration_error")
            }
            ApiError::Upstream(_) => (StatusCode::INTERNAL_SERVER_ERROR, "upstream_error"),
        };
        let body = Json(ErrorBody {
            code,
            message: self.to_string(),
        });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;

impl From<CoreError> for ApiError {
    fn from(err: CoreError) -> Self {
        let message = err.user_message();
        match err {
            CoreError::Validation(_) => ApiError::BadRequest(message),
            CoreError::AccessDenied(_) => ApiError::Denied(message),
            CoreError::NotFound(_) => ApiError::NotFound(message),
            CoreError::Conflict(_) => ApiError::Conflict(message),
        }
    }
}
