//! Admin summary page.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::State;
use chrono::{DateTime, Utc};
use pnm_gardeners_core::{Contact, ContactStatus, QuoteRequest, QuoteStatus};
use tracing::instrument;

use crate::admin::AdminSummary;
use crate::filters;
use crate::state::AppState;

/// A submission row.
pub struct SubmissionRow {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Service for quotes, subject for contacts.
    pub topic: String,
    pub message: String,
    pub status: &'static str,
    /// Pending quotes and new contacts need attention.
    pub needs_attention: bool,
    pub received: String,
}

/// `5 March 2025, 14:07`
fn format_received(at: &DateTime<Utc>) -> String {
    at.format("%-d %B %Y, %H:%M").to_string()
}

impl From<&QuoteRequest> for SubmissionRow {
    fn from(quote: &QuoteRequest) -> Self {
        Self {
            name: quote.name.clone(),
            email: quote.email.clone(),
            phone: quote.phone.clone(),
            topic: quote.service.clone(),
            message: quote.message.clone(),
            status: quote.status.as_str(),
            needs_attention: quote.status == QuoteStatus::Pending,
            received: format_received(&quote.created_at),
        }
    }
}

impl From<&Contact> for SubmissionRow {
    fn from(contact: &Contact) -> Self {
        Self {
            name: contact.name.clone(),
            email: contact.email.clone(),
            phone: contact.phone.clone(),
            topic: contact.subject.clone(),
            message: contact.message.clone(),
            status: contact.status.as_str(),
            needs_attention: contact.status == ContactStatus::New,
            received: format_received(&contact.created_at),
        }
    }
}

/// Admin page template.
#[derive(Template, WebTemplate)]
#[template(path = "admin.html")]
pub struct AdminTemplate {
    pub quotes: Vec<SubmissionRow>,
    pub quotes_notice: Option<String>,
    pub contacts: Vec<SubmissionRow>,
    pub contacts_notice: Option<String>,
    pub total: usize,
}

/// Display the admin summary.
#[instrument(skip(state))]
pub async fn index(State(state): State<AppState>) -> AdminTemplate {
    let summary = AdminSummary::load(state.backend()).await;

    AdminTemplate {
        quotes: summary.quotes.records.iter().map(SubmissionRow::from).collect(),
        quotes_notice: summary.quotes.notice(),
        contacts: summary.contacts.records.iter().map(SubmissionRow::from).collect(),
        contacts_notice: summary.contacts.notice(),
        total: summary.total_inquiries(),
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::TimeZone;

    use super::*;

    #[test]
    fn test_format_received() {
        let at = Utc.with_ymd_and_hms(2025, 3, 5, 14, 7, 0).unwrap();
        assert_eq!(format_received(&at), "5 March 2025, 14:07");
    }
}
