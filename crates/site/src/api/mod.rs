//! Data access for the REST backend.
//!
//! Every page gets its records through the [`Backend`] trait. The production
//! implementation is [`ApiClient`], one HTTP call per operation against
//! `{base}/api/...`. Failures collapse into the three-way [`ApiError`]
//! taxonomy so handlers can either fall back to static content or show the
//! message inline.
//!
//! There are no retries, no caching and no request deduplication.

mod client;

pub use client::ApiClient;

use async_trait::async_trait;
use pnm_gardeners_core::{
    AlbumSet, Contact, GalleryImage, MessageResponse, NewContact, NewGalleryImage,
    NewQuoteRequest, NewReview, QuoteRequest, Review, Service, ServiceId,
};
use thiserror::Error;

/// Message shown when the backend could not be reached.
pub const NETWORK_ERROR_MESSAGE: &str =
    "Unable to connect to server. Please check your internet connection.";

/// Message used when an error response carries no usable text.
pub const SERVER_ERROR_MESSAGE: &str = "Server error occurred";

/// Message used when an unexpected failure has no description.
pub const UNKNOWN_ERROR_MESSAGE: &str = "An unexpected error occurred";

/// A failed backend call.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum ApiError {
    /// The backend answered with a non-2xx status.
    #[error("{message}")]
    Server { status: u16, message: String },

    /// No response arrived (connect failure or timeout).
    #[error("{}", NETWORK_ERROR_MESSAGE)]
    Network,

    /// Anything else, such as an undecodable body.
    #[error("{}", unknown_message(.0))]
    Unknown(String),
}

fn unknown_message(detail: &str) -> &str {
    if detail.is_empty() {
        UNKNOWN_ERROR_MESSAGE
    } else {
        detail
    }
}

/// Category of an [`ApiError`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    Server,
    Network,
    Unknown,
}

impl ErrorKind {
    /// Wire name of the category, e.g. `network_error`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Server => "server_error",
            Self::Network => "network_error",
            Self::Unknown => "unknown_error",
        }
    }
}

impl ApiError {
    /// Category of this error.
    #[must_use]
    pub const fn kind(&self) -> ErrorKind {
        match self {
            Self::Server { .. } => ErrorKind::Server,
            Self::Network => ErrorKind::Network,
            Self::Unknown(_) => ErrorKind::Unknown,
        }
    }

    /// HTTP status of a server error, 0 otherwise.
    #[must_use]
    pub const fn status(&self) -> u16 {
        match self {
            Self::Server { status, .. } => *status,
            Self::Network | Self::Unknown(_) => 0,
        }
    }

    /// The user-facing message.
    #[must_use]
    pub fn message(&self) -> String {
        self.to_string()
    }

    /// Build a server error from a status and the raw response body.
    ///
    /// The message is taken from the body's `error`, then `message`, then
    /// `detail` field, defaulting to [`SERVER_ERROR_MESSAGE`].
    #[must_use]
    pub fn from_response(status: u16, body: &str) -> Self {
        let message = serde_json::from_str::<serde_json::Value>(body)
            .ok()
            .and_then(|value| {
                ["error", "message", "detail"].iter().find_map(|key| {
                    value
                        .get(key)
                        .and_then(serde_json::Value::as_str)
                        .filter(|s| !s.trim().is_empty())
                        .map(str::to_owned)
                })
            })
            .unwrap_or_else(|| SERVER_ERROR_MESSAGE.to_string());
        Self::Server { status, message }
    }
}

/// Operations the site needs from the REST backend.
#[async_trait]
pub trait Backend: Send + Sync {
    async fn services(&self) -> Result<Vec<Service>, ApiError>;
    async fn service(&self, id: &ServiceId) -> Result<Service, ApiError>;

    async fn reviews(&self) -> Result<Vec<Review>, ApiError>;
    async fn create_review(&self, review: &NewReview) -> Result<MessageResponse, ApiError>;

    async fn quotes(&self) -> Result<Vec<QuoteRequest>, ApiError>;
    async fn create_quote(&self, quote: &NewQuoteRequest) -> Result<MessageResponse, ApiError>;

    async fn contacts(&self) -> Result<Vec<Contact>, ApiError>;
    async fn create_contact(&self, contact: &NewContact) -> Result<MessageResponse, ApiError>;

    async fn gallery(&self) -> Result<Vec<GalleryImage>, ApiError>;
    async fn create_gallery_image(
        &self,
        image: &NewGalleryImage,
    ) -> Result<MessageResponse, ApiError>;

    /// The album document behind `/api/gallery/real-photos`.
    async fn real_gallery_photos(&self) -> Result<AlbumSet, ApiError>;
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_message_precedence() {
        let err = ApiError::from_response(422, r#"{"error":"Name is required","message":"x"}"#);
        assert_eq!(err.message(), "Name is required");
        assert_eq!(err.status(), 422);

        let err = ApiError::from_response(500, r#"{"message":"boom"}"#);
        assert_eq!(err.message(), "boom");

        let err = ApiError::from_response(400, r#"{"detail":"bad field"}"#);
        assert_eq!(err.message(), "bad field");
    }

    #[test]
    fn test_server_error_default_message() {
        let err = ApiError::from_response(502, "<html>Bad Gateway</html>");
        assert_eq!(err.message(), SERVER_ERROR_MESSAGE);
        assert_eq!(err.kind(), ErrorKind::Server);

        let err = ApiError::from_response(500, r#"{"error":""}"#);
        assert_eq!(err.message(), SERVER_ERROR_MESSAGE);
    }

    #[test]
    fn test_kinds_and_messages() {
        assert_eq!(ApiError::Network.kind().as_str(), "network_error");
        assert_eq!(ApiError::Network.message(), NETWORK_ERROR_MESSAGE);
        assert_eq!(ApiError::Network.status(), 0);

        let err = ApiError::Unknown(String::new());
        assert_eq!(err.kind().as_str(), "unknown_error");
        assert_eq!(err.message(), UNKNOWN_ERROR_MESSAGE);
        assert_eq!(ApiError::Unknown("bad json".into()).message(), "bad json");
    }
}
