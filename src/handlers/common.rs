//! Greeting and the structured router fallbacks.

use crate::response::Envelope;
use axum::{http::StatusCode, response::Response};

pub const GREETING: &str = "Welcome to the homepage";

pub async fn home() -> &'static str {
    GREETING
}

/// No route for the path.
pub async fn not_found() -> Response {
    Envelope::<()>::empty(404, "Method not found").into_response_with(StatusCode::NOT_FOUND)
}

/// Path is routed but the method is not. The `code` field is 403, not 405.
pub async fn method_not_allowed() -> Response {
    Envelope::<()>::empty(403, "Method not allowed").into_response_with(StatusCode::METHOD_NOT_ALLOWED)
}
