//! Image upload, listing, download and deletion endpoints.

use std::sync::Arc;

use axum::Json;
use axum::extract::{Multipart, Path, State};
use axum::http::{StatusCode, header};
use axum::response::IntoResponse;
use catalog::ItemRepository;
use serde::Serialize;

use crate::error::ApiError;
use crate::state::AppState;

#[derive(Serialize)]
pub struct UploadResponse {
    pub uploaded: bool,
    pub path: String,
}

/// POST /api/img: store the multipart field `file`.
#[tracing::instrument(skip(state, multipart))]
pub async fn upload<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    mut multipart: Multipart,
) -> Result<(StatusCode, Json<UploadResponse>), ApiError> {
    while let Some(field) = multipart
        .next_field()
        .await
        .map_err(|e| ApiError::BadRequest(e.body_text()))?
    {
        if field.name() != Some("file") {
            continue;
        }
        let original_name = field.file_name().unwrap_or_default().to_string();
        let bytes = field
            .bytes()
            .await
            .map_err(|e| ApiError::BadRequest(e.body_text()))?;

        let path = state.images.save(&original_name, &bytes).await?;
        return Ok((
            StatusCode::CREATED,
            Json(UploadResponse {
                uploaded: true,
                path,
            }),
        ));
    }

    Err(ApiError::BadRequest(
        "multipart field 'file' is required".to_string(),
    ))
}

/// GET /api/img/list: list stored image names.
#[tracing::instrument(skip(state))]
pub async fn list<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
) -> Result<Json<Vec<String>>, ApiError> {
    Ok(Json(state.images.list().await?))
}

/// GET /img/:filename: serve an image.
#[tracing::instrument(skip(state))]
pub async fn get<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(filename): Path<String>,
) -> Result<impl IntoResponse, ApiError> {
    let (bytes, content_type) = state.images.read(&filename).await?;
    Ok(([(header::CONTENT_TYPE, content_type)], bytes))
}

/// DELETE /api/img/:filename: remove an image.
#[tracing::instrument(skip(state))]
pub async fn delete<R: ItemRepository + 'static>(
    State(state): State<Arc<AppState<R>>>,
    Path(filename): Path<String>,
) -> Result<StatusCode, ApiError> {
    state.images.delete(&filename).await?;
    Ok(StatusCode::NO_CONTENT)
}
