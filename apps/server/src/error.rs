use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use coinboard_core::errors::Error as CoreError;
use serde::Serialize;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    Core(#[from] CoreError),
}

#[derive(Serialize)]
struct ErrorBody {
    message: String,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, msg) = match &self {
            ApiError::Core(e) => match e {
                CoreError::UpstreamUnavailable(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Failed to fetch crypto data".to_string(),
                ),
                CoreError::Decode(_) => (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "Error decoding response".to_string(),
                ),
                CoreError::NotFound(_) => (StatusCode::NOT_FOUND, "Crypto not found".to_string()),
                CoreError::NoData => (StatusCode::BAD_REQUEST, e.to_string()),
                CoreError::Snapshot(_) => (StatusCode::INTERNAL_SERVER_ERROR, e.to_string()),
            },
        };
        if status.is_server_error() {
            tracing::error!("Request failed: {}", self);
        }
        let body = Json(ErrorBody { message: msg });
        (status, body).into_response()
    }
}

pub type ApiResult<T> = Result<T, ApiError>;
