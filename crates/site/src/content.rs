//! Fallback content.
//!
//! When the backend cannot serve services, reviews or gallery images the
//! pages render the static arrays from [`pnm_gardeners_core::content`]
//! instead. Substitution is all-or-nothing: a successful response is shown
//! as-is, even when empty, and is never merged with fallback records.

use pnm_gardeners_core::{GalleryImage, Review, Service, content};

use crate::api::{ApiError, Backend};

pub use content::{AREAS_SERVED, PLACEHOLDER_IMAGE, business, faqs};

/// Where a list of records came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Live,
    Fallback,
}

/// Records ready to render, plus the failure that forced a fallback.
#[derive(Debug, Clone)]
pub struct Loaded<T> {
    pub records: Vec<T>,
    pub source: Source,
    /// Set when the live fetch failed.
    pub error: Option<ApiError>,
}

impl<T> Loaded<T> {
    /// Use `result` when it succeeded, otherwise the whole of `fallback`.
    pub fn or_fallback(
        result: Result<Vec<T>, ApiError>,
        fallback: impl FnOnce() -> Vec<T>,
        resource: &str,
    ) -> Self {
        match result {
            Ok(records) => Self {
                records,
                source: Source::Live,
                error: None,
            },
            Err(error) => {
                tracing::warn!(
                    resource,
                    error = %error,
                    kind = error.kind().as_str(),
                    "Backend unavailable, using fallback data"
                );
                Self {
                    records: fallback(),
                    source: Source::Fallback,
                    error: Some(error),
                }
            }
        }
    }

    /// Whether the fallback arrays are being shown.
    #[must_use]
    pub fn is_fallback(&self) -> bool {
        self.source == Source::Fallback
    }

    /// Message of the failure that forced the fallback.
    #[must_use]
    pub fn notice(&self) -> Option<String> {
        self.error.as_ref().map(ApiError::message)
    }
}

/// Services from the backend, or the static list.
pub async fn services(backend: &dyn Backend) -> Loaded<Service> {
    Loaded::or_fallback(backend.services().await, content::services, "services")
}

/// Reviews from the backend, or the static list.
pub async fn reviews(backend: &dyn Backend) -> Loaded<Review> {
    Loaded::or_fallback(backend.reviews().await, content::reviews, "reviews")
}

/// Gallery images from the backend, or the static list.
pub async fn gallery(backend: &dyn Backend) -> Loaded<GalleryImage> {
    Loaded::or_fallback(backend.gallery().await, content::gallery_images, "gallery")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_success_is_never_replaced() {
        let loaded: Loaded<Service> = Loaded::or_fallback(Ok(Vec::new()), content::services, "services");
        assert!(loaded.records.is_empty());
        assert!(!loaded.is_fallback());
        assert!(loaded.notice().is_none());
    }

    #[test]
    fn test_failure_uses_whole_fallback() {
        let loaded = Loaded::or_fallback(Err(ApiError::Network), content::reviews, "reviews");
        assert_eq!(loaded.records, content::reviews());
        assert!(loaded.is_fallback());
        assert_eq!(
            loaded.notice().as_deref(),
            Some(crate::api::NETWORK_ERROR_MESSAGE)
        );
    }
}
