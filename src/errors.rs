use actix_web::{http::StatusCode, HttpResponse, ResponseError};
use ethers::providers::ProviderError;
use thiserror::Error;

use crate::models::api_response::ErrorBody;

#[derive(Error, Debug)]
pub enum ApiError {
    #[error("Invalid Ethereum address.")]
    InvalidAddress,

    #[error("{0}")]
    Provider(#[from] ProviderError),

    #[error("The requested URL was not found on the server.")]
    NotFound,

    #[error("{0}")]
    Internal(String),
}

// Every error leaves the handler boundary as the same JSON envelope; the
// `error` field carries the status reason phrase, `message` the detail.
impl ResponseError for ApiError {
    fn status_code(&self) -> StatusCode {
        match self {
            ApiError::InvalidAddress => StatusCode::BAD_REQUEST,
            ApiError::Provider(_) => StatusCode::INTERNAL_SERVER_ERROR,
            ApiError::NotFound => StatusCode::NOT_FOUND,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    fn error_response(&self) -> HttpResponse {
        let status = self.status_code();
        if status.is_server_error() {
            log::error!("request failed: {}", self);
        }

        HttpResponse::build(status).json(ErrorBody {
            error: status.canonical_reason().unwrap_or("Error").to_string(),
            message: self.to_string(),
        })
    }
}
