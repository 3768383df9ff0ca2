//! Catalog item endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog::{BatchReport, Category, ItemId, ItemRepository, ItemRequest, ItemResponse};

use crate::error::ApiError;
use crate::state::AppState;

/// GET /api/items: list every item.
#[tracing::instrument(skip(state))]
pub async fn list<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    Ok(Json(state.item_service.list_all().await?))
}

/// GET /api/items/category/:category: list the items of one category.
#[tracing::instrument(skip(state))]
pub async fn list_by_category<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(category): Path<String>,
) -> Result<Json<Vec<ItemResponse>>, ApiError> {
    let category: Category = category.parse()?;
    Ok(Json(state.item_service.list_by_category(category).await?))
}

/// GET /api/items/:id: load one item.
#[tracing::instrument(skip(state))]
pub async fn get<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item_id = parse_item_id(&id)?;
    Ok(Json(state.item_service.get_item(item_id).await?))
}

/// POST /api/items: create an item.
#[tracing::instrument(skip(state, req))]
pub async fn create<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<ItemRequest>,
) -> Result<(StatusCode, Json<ItemResponse>), ApiError> {
    let created = state.item_service.create_item(req).await?;
    Ok((StatusCode::CREATED, Json(created)))
}

/// POST /api/items/batch: create several items, best effort.
///
/// Responds 201 when every element was created and 207 when some were
/// rejected; the body lists both outcomes either way.
#[tracing::instrument(skip(state, reqs))]
pub async fn create_batch<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Json(reqs): Json<Vec<ItemRequest>>,
) -> (StatusCode, Json<BatchReport>) {
    let report = state.item_service.create_item_batch(reqs).await;
    let status = if report.failures.is_empty() {
        StatusCode::CREATED
    } else {
        StatusCode::MULTI_STATUS
    };
    (status, Json(report))
}

/// PUT /api/items/:id: replace every field of an item.
#[tracing::instrument(skip(state, req))]
pub async fn update<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
    Json(req): Json<ItemRequest>,
) -> Result<Json<ItemResponse>, ApiError> {
    let item_id = parse_item_id(&id)?;
    Ok(Json(state.item_service.update_item(item_id, req).await?))
}

/// DELETE /api/items/:id: remove an item.
#[tracing::instrument(skip(state))]
pub async fn delete<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<StatusCode, ApiError> {
    let item_id = parse_item_id(&id)?;
    state.item_service.delete_item(item_id).await?;
    Ok(StatusCode::NO_CONTENT)
}

fn parse_item_id(id: &str) -> Result<ItemId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid item ID format: {e}")))
}
