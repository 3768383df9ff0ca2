//! HTTP API server for the order-it POS backend.
//!
//! Provides REST endpoints for the item catalog, image uploads and order
//! printing, with structured logging (tracing) and Prometheus metrics.

pub mod config;
pub mod error;
pub mod images;
pub mod routes;
pub mod state;

use std::sync::Arc;

use axum::Router;
use axum::extract::DefaultBodyLimit;
use axum::routing::{get, post};
use catalog::{ItemRepository, ItemService};
use metrics_exporter_prometheus::PrometheusHandle;
use printing::{InMemoryOrderRepository, LogPrinter, PrintDispatcher, SpoolPrinter};
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use config::Config;
use images::ImageStore;
use state::{AppState, SharedPrinter};

/// Creates the Axum application router with all routes and shared state.
pub fn create_app<R: ItemRepository + 'static>(
    state: Arc<AppState<R>>,
    metrics_handle: PrometheusHandle,
    max_upload_bytes: usize,
) -> Router {
    let metrics_router = Router::new()
        .route("/metrics", get(routes::metrics::get))
        .with_state(metrics_handle);

    Router::new()
        .route("/health", get(routes::health::check))
        .route(
            "/api/items",
            get(routes::items::list::<R>).post(routes::items::create::<R>),
        )
        .route("/api/items/batch", post(routes::items::create_batch::<R>))
        .route(
            "/api/items/category/{category}",
            get(routes::items::list_by_category::<R>),
        )
        .route(
            "/api/items/{id}",
            get(routes::items::get::<R>)
                .put(routes::items::update::<R>)
                .delete(routes::items::delete::<R>),
        )
        .route(
            "/api/orders",
            get(routes::orders::list::<R>).post(routes::orders::create::<R>),
        )
        .route("/api/orders/{id}", get(routes::orders::get::<R>))
        .route(
            "/api/orders/{id}/receipt",
            get(routes::orders::receipt::<R>),
        )
        .route("/api/orders/{id}/print", post(routes::orders::print::<R>))
        .route(
            "/api/img",
            post(routes::images::upload::<R>).layer(DefaultBodyLimit::max(max_upload_bytes)),
        )
        .route("/api/img/list", get(routes::images::list::<R>))
        .route(
            "/api/img/{filename}",
            axum::routing::delete(routes::images::delete::<R>),
        )
        .route("/img/{filename}", get(routes::images::get::<R>))
        .with_state(state)
        .merge(metrics_router)
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .layer(TraceLayer::new_for_http())
}

/// Picks the printer sink described by the configuration.
pub fn printer_from_config(config: &Config) -> SharedPrinter {
    match &config.printer_device {
        Some(device) => {
            tracing::info!(%device, "printing receipts to device");
            Arc::new(SpoolPrinter::new(device))
        }
        None => {
            tracing::info!("no printer device configured, printing receipts to the log");
            Arc::new(LogPrinter)
        }
    }
}

/// Creates the application state around an item repository and printer.
///
/// The catalog service and the print dispatcher share the same repository, so
/// receipts always see the catalog's current prices.
pub fn create_state<R: ItemRepository + Clone + 'static>(
    items: R,
    printer: SharedPrinter,
    images: ImageStore,
    config: &Config,
) -> Arc<AppState<R>> {
    Arc::new(AppState {
        item_service: ItemService::new(items.clone()),
        orders: InMemoryOrderRepository::new(),
        dispatcher: PrintDispatcher::new(items, printer).with_retry_policy(config.retry_policy()),
        images,
    })
}
