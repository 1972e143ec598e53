//! Entity CRUD handlers: create, list, show, update, delete.
//!
//! Every handler answers HTTP 200 with an envelope. Malformed bodies decode to
//! the zero value and unknown ids read as the zero value. Ids reaching these
//! handlers have already been checked by the route layer.

use crate::entity::Entity;
use crate::error::AppError;
use crate::response::Envelope;
use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::{Path, State},
};
use serde::de::DeserializeOwned;

fn decode_or_default<T: DeserializeOwned + Default>(body: &[u8], label: &str) -> T {
    if body.is_empty() {
        return T::default();
    }
    serde_json::from_slice(body).unwrap_or_else(|e| {
        tracing::warn!(error = %e, "malformed {} body, using empty value", label);
        T::default()
    })
}

pub async fn create<E: Entity>(State(state): State<AppState<E>>, body: Bytes) -> Result<Envelope<E>, AppError> {
    let entity: E = decode_or_default(&body, E::LABEL);
    let created = state.gateway.create(entity).await?;
    tracing::info!(id = created.id(), "{} created", E::LABEL);
    Ok(Envelope::ok(created, format!("{} created successfully", E::LABEL)))
}

pub async fn list<E: Entity>(State(state): State<AppState<E>>) -> Result<Envelope<Vec<E>>, AppError> {
    let rows = state.gateway.find_all().await?;
    Ok(Envelope::ok(rows, format!("{} indexed successfully", E::LABEL_PLURAL)))
}

pub async fn show<E: Entity>(
    State(state): State<AppState<E>>,
    Path(id): Path<i64>,
) -> Result<Envelope<E>, AppError> {
    let row = state.gateway.find_by_id(id).await?;
    Ok(Envelope::ok(row, format!("{} showed successfully", E::LABEL)))
}

pub async fn update<E: Entity>(
    State(state): State<AppState<E>>,
    Path(id): Path<i64>,
    body: Bytes,
) -> Result<Envelope<E>, AppError> {
    let patch: E::Patch = decode_or_default(&body, E::LABEL);
    let row = state.gateway.update_fields(id, patch).await?;
    tracing::info!(id, "{} updated", E::LABEL);
    Ok(Envelope::ok(row, format!("{} updated successfully", E::LABEL)))
}

pub async fn delete<E: Entity>(
    State(state): State<AppState<E>>,
    Path(id): Path<i64>,
) -> Result<Envelope<()>, AppError> {
    state.gateway.delete_by_id(id).await?;
    tracing::info!(id, "{} deleted", E::LABEL);
    Ok(Envelope::empty(200, format!("{} deleted successfully", E::LABEL)))
}
