//! Entity CRUD routes under `/api/products`.
//! The `/:id` segment must be a non-negative decimal integer; anything else is
//! answered with the 404 envelope before the method is looked at.

use crate::entity::Entity;
use crate::handlers::{create, delete as delete_handler, list, method_not_allowed, not_found, show, update};
use crate::state::AppState;
use axum::{
    extract::Request,
    middleware::{self, Next},
    response::Response,
    routing::get,
    Router,
};

pub const COLLECTION_PATH: &str = "/api/products";

pub fn entity_routes<E: Entity>(state: AppState<E>) -> Router {
    Router::new()
        .route(
            COLLECTION_PATH,
            get(list::<E>).post(create::<E>).fallback(method_not_allowed),
        )
        .route(
            &format!("{}/:id", COLLECTION_PATH),
            get(show::<E>)
                .put(update::<E>)
                .delete(delete_handler::<E>)
                .fallback(method_not_allowed)
                .layer(middleware::from_fn(numeric_id_only)),
        )
        .with_state(state)
}

/// Ids are non-negative decimal integers that fit in `i64`. The raw
/// (still percent-encoded) segment is checked, so `%31` is not an id.
fn parse_id(raw: &str) -> Option<i64> {
    if raw.is_empty() || !raw.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    raw.parse().ok()
}

async fn numeric_id_only(req: Request, next: Next) -> Response {
    let segment = req
        .uri()
        .path()
        .strip_prefix(COLLECTION_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .unwrap_or_default();
    if parse_id(segment).is_none() {
        return not_found().await;
    }
    next.run(req).await
}
