use axum::http::{header, StatusCode};
use axum::response::{IntoResponse, Response};
use serde::Serialize;

use crate::errors::ApiError;

/// A JSON response made of one or more documents, each terminated by `\n`.
///
/// Delete answers with the removed item followed by an acknowledgement, and a
/// replace with a bad body answers with the decode error followed by the
/// update; both are written as consecutive documents in one body.
#[derive(Debug)]
pub struct JsonDocuments {
    status: StatusCode,
    body: Vec<u8>,
}

impl JsonDocuments {
    pub fn new(status: StatusCode) -> Self {
        Self { status, body: Vec::new() }
    }

    pub fn ok() -> Self {
        Self::new(StatusCode::OK)
    }

    /// Serialize `doc` and append it. Encoding failure fails this request only.
    pub fn push<T: Serialize + ?Sized>(mut self, doc: &T) -> Result<Self, ApiError> {
        serde_json::to_writer(&mut self.body, doc)?;
        self.body.push(b'\n');
        Ok(self)
    }
}

impl IntoResponse for JsonDocuments {
    fn into_response(self) -> Response {
        (
            self.status,
            [(header::CONTENT_TYPE, "application/json")],
            self.body,
        )
            .into_response()
    }
}

/// Plain-text 404 for anything unmatched under the API prefix.
pub async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "404 Not Found")
}
