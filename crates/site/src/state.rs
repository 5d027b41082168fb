//! Application state shared across handlers.

use std::sync::Arc;

use crate::api::{ApiClient, Backend};
use crate::config::SiteConfig;

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc` and gives handlers the
/// configuration and the backend the pages read from.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: SiteConfig,
    backend: Arc<dyn Backend>,
}

impl AppState {
    /// Create a new application state talking to the configured backend.
    ///
    /// # Errors
    ///
    /// Returns an error if the HTTP client fails to build.
    pub fn new(config: SiteConfig) -> Result<Self, reqwest::Error> {
        let client = ApiClient::new(config.api_base_url.clone(), config.api_timeout)?;
        Ok(Self::with_backend(config, Arc::new(client)))
    }

    /// Create a state around any [`Backend`].
    #[must_use]
    pub fn with_backend(config: SiteConfig, backend: Arc<dyn Backend>) -> Self {
        Self {
            inner: Arc::new(AppStateInner { config, backend }),
        }
    }

    /// Get a reference to the site configuration.
    #[must_use]
    pub fn config(&self) -> &SiteConfig {
        &self.inner.config
    }

    /// Get a reference to the backend.
    #[must_use]
    pub fn backend(&self) -> &dyn Backend {
        self.inner.backend.as_ref()
    }
}
