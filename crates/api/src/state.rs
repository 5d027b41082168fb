//! Application state shared across handlers.

use std::sync::Arc;
use std::time::Duration;

use crate::config::ApiConfig;
use crate::notify::Notifier;
use crate::store::Store;

/// Upstream timeout for the image proxy.
const PROXY_TIMEOUT: Duration = Duration::from_secs(30);

/// Error creating application state.
#[derive(Debug, thiserror::Error)]
pub enum StateError {
    #[error("smtp setup failed: {0}")]
    Smtp(#[from] lettre::transport::smtp::Error),
    #[error("http client setup failed: {0}")]
    Http(#[from] reqwest::Error),
}

/// Application state shared across all handlers.
///
/// This struct is cheaply cloneable via `Arc`.
#[derive(Clone)]
pub struct AppState {
    inner: Arc<AppStateInner>,
}

struct AppStateInner {
    config: ApiConfig,
    store: Store,
    notifier: Notifier,
    http: reqwest::Client,
}

impl AppState {
    /// Create a new application state around an existing store.
    ///
    /// # Errors
    ///
    /// Returns an error if the SMTP transport or HTTP client cannot be built.
    pub fn new(config: ApiConfig, store: Store) -> Result<Self, StateError> {
        let notifier = Notifier::new(config.email.as_ref(), &config.business_email)?;
        let http = reqwest::Client::builder()
            .timeout(PROXY_TIMEOUT)
            .user_agent(concat!("pnm-gardeners-api/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(AppStateInner {
                config,
                store,
                notifier,
                http,
            }),
        })
    }

    /// Get a reference to the API configuration.
    #[must_use]
    pub fn config(&self) -> &ApiConfig {
        &self.inner.config
    }

    /// Get a reference to the record store.
    #[must_use]
    pub fn store(&self) -> &Store {
        &self.inner.store
    }

    /// Get a reference to the submission notifier.
    #[must_use]
    pub fn notifier(&self) -> &Notifier {
        &self.inner.notifier
    }

    /// Get a reference to the outbound HTTP client.
    #[must_use]
    pub fn http(&self) -> &reqwest::Client {
        &self.inner.http
    }
}
