use axum::{
    Json,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use serde::Serialize;
use thiserror::Error;
use tracing::error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Alamat tidak valid")]
    InvalidAddress,

    #[error("Gagal memvalidasi alamat")]
    Internal(#[from] Box<dyn std::error::Error + Send + Sync>),
}

#[derive(Serialize)]
struct FailureBody {
    success: bool,
    message: String,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match &self {
            AppError::InvalidAddress => StatusCode::BAD_REQUEST,
            AppError::Internal(source) => {
                error!("Validation request failed: {source}");
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        let body = FailureBody {
            success: false,
            message: self.to_string(),
        };

        (status, Json(body)).into_response()
    }
}
