//! Response envelope: every JSON body is `{code, data, message}`.

use axum::{
    http::{header, StatusCode},
    response::{IntoResponse, Response},
};
use serde::Serialize;

#[derive(Debug, Serialize)]
pub struct Envelope<T> {
    pub code: u16,
    /// Always serialized; `null` when the operation carries no payload.
    pub data: Option<T>,
    pub message: String,
}

impl<T: Serialize> Envelope<T> {
    pub fn ok(data: T, message: impl Into<String>) -> Self {
        Envelope {
            code: StatusCode::OK.as_u16(),
            data: Some(data),
            message: message.into(),
        }
    }

    /// Render with an explicit HTTP status. The `code` field is independent of it.
    /// A serialization failure becomes a plain-text 500.
    pub fn into_response_with(self, status: StatusCode) -> Response {
        match serde_json::to_vec(&self) {
            Ok(body) => (status, [(header::CONTENT_TYPE, "application/json")], body).into_response(),
            Err(err) => (
                StatusCode::INTERNAL_SERVER_ERROR,
                [(header::CONTENT_TYPE, "text/plain; charset=utf-8")],
                err.to_string(),
            )
                .into_response(),
        }
    }
}

impl Envelope<()> {
    pub fn empty(code: u16, message: impl Into<String>) -> Self {
        Envelope {
            code,
            data: None,
            message: message.into(),
        }
    }
}

impl<T: Serialize> IntoResponse for Envelope<T> {
    fn into_response(self) -> Response {
        self.into_response_with(StatusCode::OK)
    }
}
