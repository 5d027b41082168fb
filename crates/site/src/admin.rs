//! Admin summary of quote requests and contact messages.

use pnm_gardeners_core::{Contact, QuoteRequest};
use tracing::warn;

use crate::api::{ApiError, Backend};

/// One list on the admin page.
#[derive(Debug, Clone)]
pub struct Section<T> {
    /// Records as returned, newest first.
    pub records: Vec<T>,
    /// Set when the fetch failed; `records` is then empty.
    pub error: Option<ApiError>,
}

impl<T> Section<T> {
    fn from_result(result: Result<Vec<T>, ApiError>, resource: &str) -> Self {
        match result {
            Ok(records) => Self {
                records,
                error: None,
            },
            Err(error) => {
                warn!(resource, error = %error, kind = error.kind().as_str(), "Admin list unavailable");
                Self {
                    records: Vec::new(),
                    error: Some(error),
                }
            }
        }
    }

    #[must_use]
    pub fn count(&self) -> usize {
        self.records.len()
    }

    /// Message to show in place of the list.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        self.error.as_ref().map(ApiError::message)
    }
}

/// Everything the admin page shows.
#[derive(Debug, Clone)]
pub struct AdminSummary {
    pub quotes: Section<QuoteRequest>,
    pub contacts: Section<Contact>,
}

impl AdminSummary {
    /// Fetch quotes and contacts concurrently.
    ///
    /// Each list degrades independently; no fallback data is used.
    pub async fn load(backend: &dyn Backend) -> Self {
        let (quotes, contacts) = tokio::join!(backend.quotes(), backend.contacts());
        Self {
            quotes: Section::from_result(quotes, "quotes"),
            contacts: Section::from_result(contacts, "contacts"),
        }
    }

    /// Quotes plus contacts.
    #[must_use]
    pub fn total_inquiries(&self) -> usize {
        self.quotes.count() + self.contacts.count()
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Utc;
    use pnm_gardeners_core::{NewContact, NewQuoteRequest};

    use super::*;
    use crate::forms::tests::FakeBackend;

    #[tokio::test]
    async fn test_lists_degrade_independently() {
        let mut backend = FakeBackend::answering(Err(ApiError::Network));
        backend.stored_quotes = Ok(vec![
            QuoteRequest::from_new(NewQuoteRequest::default(), Utc::now()),
            QuoteRequest::from_new(NewQuoteRequest::default(), Utc::now()),
        ]);
        backend.stored_contacts = Err(ApiError::Server {
            status: 500,
            message: "Server error occurred".into(),
        });

        let summary = AdminSummary::load(&backend).await;
        assert_eq!(summary.quotes.count(), 2);
        assert!(summary.quotes.notice().is_none());
        assert_eq!(summary.contacts.count(), 0);
        assert_eq!(summary.contacts.notice().as_deref(), Some("Server error occurred"));
        assert_eq!(summary.total_inquiries(), 2);
    }

    #[tokio::test]
    async fn test_counts() {
        let mut backend = FakeBackend::answering(Err(ApiError::Network));
        backend.stored_quotes = Ok(Vec::new());
        backend.stored_contacts =
            Ok(vec![Contact::from_new(NewContact::default(), Utc::now())]);

        let summary = AdminSummary::load(&backend).await;
        assert_eq!(summary.total_inquiries(), 1);
        assert!(summary.contacts.error.is_none());
    }
}
