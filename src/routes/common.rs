//! Common routes: greeting at `/`.

use crate::handlers::home;
use axum::{routing::any, Router};

/// `/` answers any method with the plain-text greeting.
pub fn common_routes() -> Router {
    Router::new().route("/", any(home))
}
