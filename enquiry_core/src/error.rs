//! Application error types and handling

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::mail::MailError;
use crate::models::request::ContactResponse;

pub type Result<T> = std::result::Result<T, AppError>;

#[derive(Error, Debug)]
pub enum AppError {
    #[error("Missing required fields")]
    MissingFields,

    #[error("Bad request: {0}")]
    BadRequest(String),

    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    #[error("Request timed out")]
    RequestTimeout,

    #[error("Mail delivery failed: {0}")]
    MailDelivery(#[from] MailError),

    #[error(transparent)]
    Other(#[from] anyhow::Error),
}

impl AppError {
    pub fn status_code(&self) -> StatusCode {
        match self {
            AppError::MissingFields
            | AppError::BadRequest(_)
            | AppError::InvalidRequest(_) => StatusCode::BAD_REQUEST,
            AppError::RequestTimeout => StatusCode::REQUEST_TIMEOUT,
            AppError::MailDelivery(_) | AppError::Other(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let status = self.status_code();
        let error_message = match self {
            AppError::MissingFields => "Missing required fields".to_string(),
            AppError::BadRequest(msg) => msg,
            AppError::InvalidRequest(detail) => {
                tracing::debug!("Rejected request body: {}", detail);
                "Invalid request".to_string()
            }
            AppError::RequestTimeout => {
                tracing::warn!("Request exceeded the configured timeout");
                "Request timed out".to_string()
            }
            AppError::MailDelivery(err) => {
                tracing::error!("Mail provider error: {}", err);
                "Email failed to send".to_string()
            }
            AppError::Other(err) => {
                tracing::error!("Unexpected error: {:?}", err);
                "Internal server error".to_string()
            }
        };

        (status, Json(ContactResponse::failure(error_message))).into_response()
    }
}
