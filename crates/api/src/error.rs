//! API error types with HTTP response mapping.

use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use catalog::{CatalogError, UnknownCategory};
use printing::PrintError;

use crate::images::ImageError;

/// API-level error type that maps to HTTP responses.
#[derive(Debug)]
pub enum ApiError {
    /// Resource not found.
    NotFound(String),
    /// Bad request from the client.
    BadRequest(String),
    /// Catalog validation or lookup error.
    Catalog(CatalogError),
    /// Category path segment that names no category.
    Category(UnknownCategory),
    /// Receipt build or print error.
    Print(PrintError),
    /// Image store error.
    Image(ImageError),
    /// Internal server error.
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, code, message) = match self {
            ApiError::NotFound(msg) => (StatusCode::NOT_FOUND, "NOT_FOUND", msg),
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, "BAD_REQUEST", msg),
            ApiError::Catalog(err) => (catalog_status(&err), err.code(), err.to_string()),
            ApiError::Category(err) => (StatusCode::BAD_REQUEST, err.code(), err.to_string()),
            ApiError::Print(err) => (print_status(&err), err.code(), err.to_string()),
            ApiError::Image(err) => (image_status(&err), err.code(), err.to_string()),
            ApiError::Internal(msg) => (StatusCode::INTERNAL_SERVER_ERROR, "INTERNAL", msg),
        };

        if status.is_server_error() {
            tracing::error!(%status, code, error = %message, "request failed");
        }

        let body = serde_json::json!({ "error": message, "code": code });
        (status, axum::Json(body)).into_response()
    }
}

fn catalog_status(err: &CatalogError) -> StatusCode {
    match err {
        CatalogError::MissingField { .. }
        | CatalogError::InvalidPrice { .. }
        | CatalogError::PriceTooHigh { .. } => StatusCode::BAD_REQUEST,
        CatalogError::NotFound { .. } => StatusCode::NOT_FOUND,
        CatalogError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn print_status(err: &PrintError) -> StatusCode {
    match err {
        PrintError::OrderNotFound { .. } => StatusCode::NOT_FOUND,
        PrintError::InvalidQuantity { .. } | PrintError::AmountOverflow { .. } => {
            StatusCode::BAD_REQUEST
        }
        PrintError::DanglingItemReference { .. } => StatusCode::CONFLICT,
        PrintError::PrintFailed(_) => StatusCode::BAD_GATEWAY,
        PrintError::Repository(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

fn image_status(err: &ImageError) -> StatusCode {
    match err {
        ImageError::InvalidFileName(_) | ImageError::UnsupportedType(_) => {
            StatusCode::BAD_REQUEST
        }
        ImageError::NotFound(_) => StatusCode::NOT_FOUND,
        ImageError::Io(_) => StatusCode::INTERNAL_SERVER_ERROR,
    }
}

impl From<CatalogError> for ApiError {
    fn from(err: CatalogError) -> Self {
        ApiError::Catalog(err)
    }
}

impl From<UnknownCategory> for ApiError {
    fn from(err: UnknownCategory) -> Self {
        ApiError::Category(err)
    }
}

impl From<PrintError> for ApiError {
    fn from(err: PrintError) -> Self {
        ApiError::Print(err)
    }
}

impl From<ImageError> for ApiError {
    fn from(err: ImageError) -> Self {
        ApiError::Image(err)
    }
}
