//! Contact message handlers.

use axum::{Json, extract::State};
use chrono::Utc;
use pnm_gardeners_core::{Contact, MessageResponse, NewContact};
use tracing::instrument;

use super::ApiJson;
use crate::error::Result;
use crate::state::AppState;

/// Contact messages, newest first.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> Json<Vec<Contact>> {
    Json(state.store().contacts().await)
}

/// Send a contact message. Notifications go out in the background.
#[instrument(skip(state, contact), fields(subject = %contact.subject))]
pub async fn create(
    State(state): State<AppState>,
    ApiJson(contact): ApiJson<NewContact>,
) -> Result<Json<MessageResponse>> {
    let contact = contact.validated()?;
    let contact = state.store().add_contact(contact, Utc::now()).await;
    tracing::info!(contact_id = %contact.id, "New contact form received");

    let notifier = state.notifier().clone();
    let id = contact.id.clone();
    tokio::spawn(async move { notifier.contact_received(&contact).await });

    Ok(Json(MessageResponse::created(
        "Thank you for contacting us. We'll respond to your inquiry soon!",
        id,
    )))
}
