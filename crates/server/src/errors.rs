use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::Json;
use serde::Serialize;
use serde_json::error::Category;
use thiserror::Error;
use tracing::error;

/// Failures that abort a single request. Never escalated past the handler.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("failed to read request body: {0}")]
    BodyRead(String),
    #[error("failed to encode response: {0}")]
    Encode(#[from] serde_json::Error),
}

impl ApiError {
    fn status(&self) -> StatusCode {
        match self {
            ApiError::BodyRead(_) => StatusCode::BAD_REQUEST,
            ApiError::Encode(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = self.status();
        let msg = self.to_string();
        error!(error = %msg, status = status.as_u16(), "request failed");
        (status, Json(serde_json::json!({"error": msg}))).into_response()
    }
}

/// Body of a 422 reply: where and why a request payload failed to decode.
#[derive(Debug, Clone, Serialize, PartialEq, Eq)]
pub struct DecodeError {
    pub error: String,
    pub category: &'static str,
    pub line: usize,
    pub column: usize,
}

impl From<&serde_json::Error> for DecodeError {
    fn from(e: &serde_json::Error) -> Self {
        let category = match e.classify() {
            Category::Io => "io",
            Category::Syntax => "syntax",
            Category::Data => "data",
            Category::Eof => "eof",
        };
        Self { error: e.to_string(), category, line: e.line(), column: e.column() }
    }
}
