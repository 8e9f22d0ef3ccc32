//! Item endpoints
//!
//! Each handler runs exactly one store operation. Update and delete
//! answer 200 whether or not a row matched.

use std::sync::Arc;

use axum::{
    extract::State,
    http::StatusCode,
    routing::{get, put},
    Json, Router,
};
use serde::Serialize;

use crate::http::error::{ApiError, Operation};
use crate::http::extractors::{ItemId, JsonBody};
use crate::http::server::AppState;
use crate::models::{Item, ItemRequest};

/// Update echo body; `id` is the path segment as the caller sent it
#[derive(Debug, Serialize)]
pub struct UpdateResponse {
    pub id: String,
    pub name: String,
    pub description: Option<String>,
}

impl UpdateResponse {
    fn echo(raw_id: String, req: ItemRequest) -> Self {
        Self {
            id: raw_id,
            name: req.name,
            description: req.description,
        }
    }
}

/// Delete confirmation body
#[derive(Debug, Serialize)]
pub struct DeleteResponse {
    pub message: &'static str,
}

/// GET /api/items - list every item
async fn list_items(State(state): State<Arc<AppState>>) -> Result<Json<Vec<Item>>, ApiError> {
    let items = state
        .store
        .list()
        .await
        .map_err(ApiError::store(Operation::Read))?;

    Ok(Json(items))
}

/// POST /api/items - insert an item
async fn create_item(
    State(state): State<Arc<AppState>>,
    JsonBody(req): JsonBody<ItemRequest>,
) -> Result<(StatusCode, Json<Item>), ApiError> {
    let id = state
        .store
        .create(&req)
        .await
        .map_err(ApiError::store(Operation::Create))?;

    tracing::debug!(id, "item created");
    Ok((StatusCode::CREATED, Json(Item::with_id(id, req))))
}

/// PUT /api/items/{id} - overwrite name and description
async fn update_item(
    State(state): State<Arc<AppState>>,
    ItemId { id, raw }: ItemId,
    JsonBody(req): JsonBody<ItemRequest>,
) -> Result<Json<UpdateResponse>, ApiError> {
    let affected = state
        .store
        .update(id, &req)
        .await
        .map_err(ApiError::store(Operation::Update))?;

    if affected == 0 {
        tracing::debug!(id, "update matched no row");
    }
    Ok(Json(UpdateResponse::echo(raw, req)))
}

/// DELETE /api/items/{id} - remove an item
async fn delete_item(
    State(state): State<Arc<AppState>>,
    ItemId { id, .. }: ItemId,
) -> Result<Json<DeleteResponse>, ApiError> {
    let affected = state
        .store
        .delete(id)
        .await
        .map_err(ApiError::store(Operation::Delete))?;

    if affected == 0 {
        tracing::debug!(id, "delete matched no row");
    }
    Ok(Json(DeleteResponse {
        message: "Item deleted successfully",
    }))
}

/// Item routes
pub fn router() -> Router<Arc<AppState>> {
    Router::new()
        .route("/api/items", get(list_items).post(create_item))
        .route("/api/items/{id}", put(update_item).delete(delete_item))
}
