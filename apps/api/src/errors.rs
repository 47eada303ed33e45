use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use serde_json::json;
use thiserror::Error;

use crate::llm_client::LlmError;

/// Application-level error type shared by the resolver, bias store and orchestrator.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("LLM error: {0}")]
    Upstream(#[from] LlmError),

    #[error("failed to fetch PDF: {0}")]
    Fetch(String),

    #[error("failed to extract text from PDF: {0}")]
    Extraction(String),

    #[error("bias store error: {0}")]
    Store(String),

    #[error("internal error: {0}")]
    Internal(#[from] anyhow::Error),
}

/// An `AppError` tagged with the endpoint's human-readable summary.
/// Every failure maps to a 500 with `{"error": "<summary>: <cause>"}`.
#[derive(Debug)]
pub struct ApiError {
    summary: &'static str,
    source: AppError,
}

impl ApiError {
    pub fn new(summary: &'static str, source: AppError) -> Self {
        Self { summary, source }
    }

    fn message(&self) -> String {
        format!("{}: {}", self.summary, self.source)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        tracing::error!("{}: {:?}", self.summary, self.source);
        let body = Json(json!({ "error": self.message() }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Failure shape for `/add-bias`, which reports `{"success": false, "error": ...}`.
#[derive(Debug)]
pub struct BiasApiError(pub AppError);

impl IntoResponse for BiasApiError {
    fn into_response(self) -> Response {
        tracing::error!("Error adding bias: {:?}", self.0);
        let body = Json(json!({
            "success": false,
            "error": format!("Failed to add bias: {}", self.0),
        }));
        (StatusCode::INTERNAL_SERVER_ERROR, body).into_response()
    }
}

/// Attaches an endpoint summary to a domain result.
pub trait Summarize<T> {
    fn summarize(self, summary: &'static str) -> Result<T, ApiError>;
}

impl<T> Summarize<T> for Result<T, AppError> {
    fn summarize(self, summary: &'static str) -> Result<T, ApiError> {
        self.map_err(|e| ApiError::new(summary, e))
    }
}
