//! Quote request handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use pnm_gardeners_core::{MessageResponse, NewQuoteRequest, QuoteRequest};
use tracing::instrument;

use super::ApiJson;
use crate::error::Result;
use crate::state::AppState;

/// Quote requests, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<QuoteRequest>> {
    Json(state.store().quotes().await)
}

/// Request a quote.
///
/// Responds once the request is stored; notification emails are sent in the
/// background and their failure is only logged.
#[instrument(skip(state, quote), fields(service = %quote.service))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(quote): ApiJson<NewQuoteRequest>,
) -> Result<Json<MessageResponse>> {
    let quote = quote.validated()?;
    let quote = state.store().add_quote(quote, Utc::now()).await;
    tracing::info!(quote_id = %quote.id, "New quote request received");

    let notifier = state.notifier().clone();
    let id = quote.id.clone();
    tokio::spawn(async move { notifier.quote_received(&quote).await });

    Ok(Json(MessageResponse::created(
        "Quote request submitted successfully. We'll get back to you within 24 hours!",
        id,
    )))
}
