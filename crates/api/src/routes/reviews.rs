//! Review handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use pnm_gardeners_core::{MessageResponse, NewReview, Review};
use tracing::instrument;

use super::ApiJson;
use crate::error::{AppError, Result};
use crate::state::AppState;

/// Approved reviews, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Review>> {
    Json(state.store().approved_reviews().await)
}

/// Submit a review. It is stored unapproved and not listed until moderated.
#[instrument(skip(state, review), fields(service = %review.service))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(review): ApiJson<NewReview>,
) -> Result<Json<MessageResponse>> {
    for (value, label) in [
        (&review.name, "Name"),
        (&review.text, "Review text"),
        (&review.service, "Service"),
    ] {
        if value.trim().is_empty() {
            return Err(AppError::Validation(format!("{label} is required")));
        }
    }

    let id = state.store().add_review(review, Utc::now()).await;
    tracing::info!(review_id = %id, "Review submitted for approval");

    Ok(Json(MessageResponse::created(
        "Review submitted successfully and is pending approval",
        id,
    )))
}
