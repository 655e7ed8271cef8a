use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;
use crate::skills::validation::ValidationError;

/// Application-level error type.
/// Implements `IntoResponse` so Axum handlers can return `Result<T, AppError>`.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("Not found: {0}")]
    NotFound(String),

    #[error("Validation error: {0}")]
    Validation(String),

    #[error("LLM error: {0}")]
    Llm(#[from] LlmError),

    #[error("Internal server error: {0}")]
    Internal(#[from] anyhow::Error),
}

impl From<ValidationError> for AppError {
    fn from(err: ValidationError) -> Self {
        AppError::Validation(err.to_string())
    }
}

impl AppError {
    fn parts(&self) -> (StatusCode, &'static str, String) {
        match self {
            AppError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg.clone()),
            AppError::Validation(msg) => (StatusCode::BAD_REQUEST, "VALIDATION_ERROR", msg.clone()),
            AppError::Llm(LlmError::RateLimited { attempts }) => {
                tracing::warn!("Generative service still rate limited after {attempts} attempts");
                (
                    StatusCode::TOO_MANY_REQUESTS,
                    "LLM_RATE_LIMITED",
                    "The recommendation service is busy. Try again shortly.".to_string(),
                )
            }
            AppError::Llm(LlmError::Auth(msg)) => {
                tracing::error!("Generative service rejected credentials: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_AUTH_FAILED",
                    "The recommendation service rejected our credentials".to_string(),
                )
            }
            AppError::Llm(LlmError::BadRequest(msg)) => {
                tracing::error!("Generative service rejected the request: {msg}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_BAD_REQUEST",
                    "The recommendation service could not process the request".to_string(),
                )
            }
            AppError::Llm(e) => {
                tracing::error!("LLM error: {e}");
                (
                    StatusCode::BAD_GATEWAY,
                    "LLM_ERROR",
                    "An AI processing error occurred".to_string(),
                )
            }
            AppError::Internal(e) => {
                tracing::error!("Internal error: {e:?}");
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    "INTERNAL_ERROR",
                    "An internal server error occurred".to_string(),
                )
            }
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        let (status, code, message) = self.parts();

        let body = Json(json!({
            "error": {
                "code": code,
                "message": message
            }
        }));

        (status, body).into_response()
    }
}
