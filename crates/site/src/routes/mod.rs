//! HTTP route handlers for the site.
//!
//! # Route Structure
//!
//! ```text
//! GET  /                       - Home page (?review= opens a map review, ?slide= moves the carousel)
//! POST /quote                  - Submit the quote form
//! POST /contact                - Submit the contact form
//!
//! # Services
//! GET  /build                  - Build services
//! GET  /maintain               - Maintenance services
//!
//! # Galleries
//! GET  /gallery                - Album browser (?album=, ?page=, ?photo=)
//! GET  /gallery/{service_id}   - One service's photos (?photo=)
//! GET  /work                   - Reviewed projects with photos (?q=, ?service=, ?location=, ?review=, ?photo=)
//!
//! # Admin
//! GET  /admin                  - Quote requests and contact messages
//! ```
//!
//! Anything else is a plain-text 404.

pub mod admin;
pub mod forms;
pub mod gallery;
pub mod home;
pub mod services;
pub mod work;

use axum::{
    Router,
    http::Uri,
    routing::{get, post},
};

use serde::{Deserialize, Deserializer};

use crate::error::AppError;
use crate::state::AppState;

/// Create the gallery routes router.
pub fn gallery_routes() -> Router<AppState> {
    Router::new()
        .route("/", get(gallery::index))
        .route("/{service_id}", get(gallery::service))
}

/// Create the main routes router.
pub fn routes() -> Router<AppState> {
    Router::new()
        // Home page and its forms
        .route("/", get(home::home))
        .route("/quote", post(forms::quote))
        .route("/contact", post(forms::contact))
        // Service categories
        .route("/build", get(services::build))
        .route("/maintain", get(services::maintain))
        // Galleries
        .nest("/gallery", gallery_routes())
        .route("/work", get(work::index))
        // Admin
        .route("/admin", get(admin::index))
        .fallback(not_found)
}

/// Read a page, photo or slide number from the query string.
///
/// Anything that is not a non-negative integer reads as absent, so the page
/// falls back to its first entry instead of rejecting the request.
///
/// # Errors
///
/// Only when the value is not a string at all.
pub fn lenient_index<'de, D>(deserializer: D) -> Result<Option<usize>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    Ok(raw.and_then(|value| value.trim().parse().ok()))
}

async fn not_found(uri: Uri) -> AppError {
    AppError::NotFound(uri.path().to_string())
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use axum::extract::Query;

    use super::*;

    #[derive(Debug, Default, Deserialize)]
    #[serde(default)]
    struct Paging {
        #[serde(deserialize_with = "lenient_index")]
        page: Option<usize>,
    }

    fn page(query: &str) -> Option<usize> {
        let uri: Uri = format!("/gallery?{query}").parse().unwrap();
        Query::<Paging>::try_from_uri(&uri).unwrap().0.page
    }

    #[test]
    fn test_lenient_index() {
        assert_eq!(page("page=3"), Some(3));
        assert_eq!(page("page=0"), Some(0));
        assert_eq!(page("page=-1"), None);
        assert_eq!(page("page=two"), None);
        assert_eq!(page("page="), None);
        assert_eq!(page(""), None);
    }
}
