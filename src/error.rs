use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Malformed payload")]
    MalformedPayload,

    #[error("Unknown category: {0}")]
    UnknownCategory(String),

    #[error("Batch of {len} labels exceeds the limit of {max}")]
    BatchTooLarge { len: usize, max: usize },

    #[error("Environment misconfigured: {0}")]
    Misconfigured(String),

    #[error("Internal error: {0}")]
    InternalError(#[from] Box<dyn std::error::Error + Send + Sync>),
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = match self {
            AppError::MalformedPayload | AppError::UnknownCategory(_) => StatusCode::BAD_REQUEST,
            AppError::BatchTooLarge { .. } => StatusCode::PAYLOAD_TOO_LARGE,
            AppError::Misconfigured(_) | AppError::InternalError(_) => {
                StatusCode::INTERNAL_SERVER_ERROR
            }
        };

        (status, self.to_string()).into_response()
    }
}

impl From<std::io::Error> for AppError {
    fn from(error: std::io::Error) -> Self {
        AppError::InternalError(Box::new(error))
    }
}
