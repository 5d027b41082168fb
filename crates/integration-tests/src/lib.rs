//! Integration tests for PNM Gardeners.
//!
//! Each test binds the REST backend and, where needed, the site to
//! ephemeral ports on 127.0.0.1 and talks to them over real HTTP. Nothing
//! outside the process is required.
//!
//! # Running Tests
//!
//! ```bash
//! cargo test -p pnm-gardeners-integration-tests
//! ```
//!
//! # Test Categories
//!
//! - `api_client` - The site's `ApiClient` against a live API
//! - `site_pages` - Site pages and forms backed by a live (or missing) API

#![cfg_attr(not(test), forbid(unsafe_code))]

use std::net::SocketAddr;
use std::path::PathBuf;
use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use pnm_gardeners_api::{config::ApiConfig, state::AppState as ApiState, store::Store};
use pnm_gardeners_site::{api::ApiClient, config::SiteConfig, state::AppState as SiteState};
use tokio::net::TcpListener;
use url::Url;

/// Album document shipped with the site.
#[must_use]
pub fn gallery_data_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../site/static/real_gallery_data.json")
}

/// Serve `router` on an ephemeral port and return its base URL.
///
/// # Panics
///
/// Panics if no port can be bound.
pub async fn serve(router: Router) -> Url {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Listener has no address");
    tokio::spawn(async move {
        axum::serve(listener, router).await.ok();
    });
    Url::parse(&format!("http://{addr}")).expect("Socket address is a valid URL")
}

/// A running API and the store behind it.
pub struct TestApi {
    pub base_url: Url,
    pub store: Store,
}

impl TestApi {
    /// Start the API on the seed content.
    ///
    /// # Panics
    ///
    /// Panics if the API state cannot be built.
    pub async fn start() -> Self {
        let store = Store::seeded();
        let state = ApiState::new(ApiConfig::for_tests(gallery_data_path()), store.clone())
            .expect("Failed to build API state");
        let base_url = serve(pnm_gardeners_api::app(state)).await;
        Self { base_url, store }
    }

    /// The site's client pointed at this API.
    ///
    /// # Panics
    ///
    /// Panics if the HTTP client cannot be built.
    #[must_use]
    pub fn client(&self) -> ApiClient {
        ApiClient::new(self.base_url.clone(), Duration::from_secs(5))
            .expect("Failed to build API client")
    }

    /// `/api{path}` on this API.
    #[must_use]
    pub fn url(&self, path: &str) -> String {
        format!("{}api{path}", self.base_url)
    }
}

/// Start the site against `api_base_url` and return its base URL.
///
/// # Panics
///
/// Panics if the site state cannot be built.
pub async fn start_site(api_base_url: Url) -> Url {
    let mut config = SiteConfig::new(api_base_url);
    config.api_timeout = Duration::from_secs(2);
    let client = ApiClient::new(config.api_base_url.clone(), config.api_timeout)
        .expect("Failed to build API client");
    let state = SiteState::with_backend(config, Arc::new(client));
    serve(pnm_gardeners_site::app(state)).await
}

/// A base URL nothing listens on.
///
/// # Panics
///
/// Panics if no port can be bound.
pub async fn unreachable_url() -> Url {
    let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
        .await
        .expect("Failed to bind ephemeral port");
    let addr = listener.local_addr().expect("Listener has no address");
    drop(listener);
    Url::parse(&format!("http://{addr}")).expect("Socket address is a valid URL")
}
