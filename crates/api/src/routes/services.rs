//! Service listing handlers.

use axum::{
    Json,
    extract::{Path, State},
};
use pnm_gardeners_core::{Service, ServiceId};
use tracing::instrument;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// All services in listing order.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Service>> {
    Json(state.store().services().await)
}

/// One service by id.
#[instrument(skip(state))]
pub async fn show(State(state): State<AppState>, Path(id): Path<String>) -> Result<Json<Service>> {
    state
        .store()
        .service(&ServiceId::new(id))
        .await
        .map(Json)
        .ok_or_else(|| AppError::NotFound("Service not found".to_string()))
}
