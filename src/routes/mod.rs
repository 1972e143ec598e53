//! Router assembly: common + entity routes, fallbacks, and middleware.

mod common;
mod entity;

pub use common::common_routes;
pub use entity::{entity_routes, COLLECTION_PATH};

use crate::entity::Entity;
use crate::handlers::not_found;
use crate::state::AppState;
use axum::Router;
use tower::Layer;
use tower_http::limit::RequestBodyLimitLayer;
use tower_http::normalize_path::{NormalizePath, NormalizePathLayer};
use tower_http::trace::TraceLayer;

/// The complete service. Trailing slashes are trimmed before routing, so
/// `/api/products/` and `/api/products` are the same route.
pub fn app<E: Entity>(state: AppState<E>, max_body_bytes: usize) -> NormalizePath<Router> {
    let router = Router::new()
        .merge(common_routes())
        .merge(entity_routes(state))
        .fallback(not_found)
        .layer(RequestBodyLimitLayer::new(max_body_bytes))
        .layer(TraceLayer::new_for_http());
    NormalizePathLayer::trim_trailing_slash().layer(router)
}
