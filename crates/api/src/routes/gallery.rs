//! Gallery handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use pnm_gardeners_core::{AlbumSet, GalleryImage, MessageResponse, NewGalleryImage};
use tracing::instrument;

use super::ApiJson;
use crate::error::{AppError, Result};
use crate::gallery::load_albums;
use crate::state::AppState;

/// Gallery images.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<GalleryImage>> {
    Json(state.store().gallery().await)
}

/// Add a gallery image.
#[instrument(skip(state, image), fields(category = %image.category))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(image): ApiJson<NewGalleryImage>,
) -> Result<Json<MessageResponse>> {
    if image.src.trim().is_empty() {
        return Err(AppError::Validation("Image URL is required".to_string()));
    }
    let id = state.store().add_gallery_image(image, Utc::now()).await;
    Ok(Json(MessageResponse::created(
        "Gallery image uploaded successfully",
        id,
    )))
}

/// The service album document.
#[instrument(skip(state))]
pub async fn real_photos(State(state): State<AppState>) -> Result<Json<AlbumSet>> {
    Ok(Json(load_albums(&state.config().gallery_data_path).await?))
}
