//! Order storage, receipt preview and print endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Path, State};
use axum::http::StatusCode;
use catalog::ItemRepository;
use common::OrderId;
use printing::{Detail, Order, OrderRepository, OrderRepositoryExt, OrderType, Receipt};
use serde::{Deserialize, Serialize};

use crate::error::ApiError;
use crate::state::AppState;

// -- Request types --

#[derive(Deserialize)]
pub struct CreateOrderRequest {
    pub order_type: OrderType,
    #[serde(default)]
    pub details: Vec<Detail>,
}

// -- Response types --

#[derive(Serialize)]
pub struct OrderCreatedResponse {
    pub order_id: String,
}

// -- Handlers --

/// POST /api/orders: store a placed order.
///
/// Item references are not checked here; a missing item surfaces when the
/// receipt is built.
#[tracing::instrument(skip(state, req), fields(order_type = %req.order_type))]
pub async fn create<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Json(req): Json<CreateOrderRequest>,
) -> Result<(StatusCode, Json<OrderCreatedResponse>), ApiError> {
    let mut order = Order::new(req.order_type);
    for detail in req.details {
        order.add_detail(detail.item_id, detail.quantity);
    }

    let order = state
        .orders
        .save(order)
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    Ok((
        StatusCode::CREATED,
        Json(OrderCreatedResponse {
            order_id: order.id().to_string(),
        }),
    ))
}

/// GET /api/orders: list stored orders.
#[tracing::instrument(skip(state))]
pub async fn list<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<Order>>, ApiError> {
    let orders = state
        .orders
        .find_all()
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;
    Ok(Json(orders))
}

/// GET /api/orders/:id: load a stored order.
#[tracing::instrument(skip(state))]
pub async fn get<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Order>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(state.orders.require(order_id).await?))
}

/// GET /api/orders/:id/receipt: build the receipt without printing.
#[tracing::instrument(skip(state))]
pub async fn receipt<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Receipt>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(
        state.dispatcher.preview_order(&state.orders, order_id).await?,
    ))
}

/// POST /api/orders/:id/print: build the receipt and send it to the printer.
#[tracing::instrument(skip(state))]
pub async fn print<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(id): Path<String>,
) -> Result<Json<Receipt>, ApiError> {
    let order_id = parse_order_id(&id)?;
    Ok(Json(state.dispatcher.print_order(&state.orders, order_id).await?))
}

fn parse_order_id(id: &str) -> Result<OrderId, ApiError> {
    id.parse()
        .map_err(|e| ApiError::BadRequest(format!("Invalid order ID format: {e}")))
}
