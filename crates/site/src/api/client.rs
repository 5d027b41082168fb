//! reqwest-backed [`Backend`] implementation.

use std::sync::Arc;
use std::time::Duration;

use async_trait::async_trait;
use pnm_gardeners_core::{
    AlbumSet, Contact, GalleryImage, MessageResponse, NewContact, NewGalleryImage,
    NewQuoteRequest, NewReview, QuoteRequest, Review, Service, ServiceId,
};
use reqwest::header::{ACCEPT, HeaderMap, HeaderValue};
use serde::{Serialize, de::DeserializeOwned};
use tracing::{debug, instrument, warn};
use url::Url;

use super::{ApiError, Backend};

/// HTTP client for the PNM Gardeners REST backend.
///
/// Cheap to clone; every clone shares one connection pool.
#[derive(Clone)]
pub struct ApiClient {
    inner: Arc<ApiClientInner>,
}

struct ApiClientInner {
    client: reqwest::Client,
    base_url: Url,
}

impl ApiClient {
    /// Create a client for the backend at `base_url`.
    ///
    /// `timeout` bounds every call, from connect to the end of the body.
    ///
    /// # Errors
    ///
    /// Returns error if the HTTP client fails to build.
    pub fn new(base_url: Url, timeout: Duration) -> Result<Self, reqwest::Error> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .timeout(timeout)
            .user_agent(concat!("pnm-gardeners-site/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            inner: Arc::new(ApiClientInner { client, base_url }),
        })
    }

    /// `{base}/api/{segments...}` with each segment percent-encoded.
    fn endpoint(&self, segments: &[&str]) -> Result<Url, ApiError> {
        let mut url = self.inner.base_url.clone();
        url.path_segments_mut()
            .map_err(|()| ApiError::Unknown(format!("invalid base URL {}", self.inner.base_url)))?
            .pop_if_empty()
            .push("api")
            .extend(segments);
        Ok(url)
    }

    async fn get<T: DeserializeOwned>(&self, segments: &[&str]) -> Result<T, ApiError> {
        let url = self.endpoint(segments)?;
        debug!(method = "GET", %url, "API request");
        let request = self.inner.client.get(url.clone());
        self.execute(request, &url).await
    }

    async fn post<B, T>(&self, segments: &[&str], body: &B) -> Result<T, ApiError>
    where
        B: Serialize + Sync + ?Sized,
        T: DeserializeOwned,
    {
        let url = self.endpoint(segments)?;
        debug!(method = "POST", %url, "API request");
        let request = self.inner.client.post(url.clone()).json(body);
        self.execute(request, &url).await
    }

    /// Send a request and normalize every failure into [`ApiError`].
    async fn execute<T: DeserializeOwned>(
        &self,
        request: reqwest::RequestBuilder,
        url: &Url,
    ) -> Result<T, ApiError> {
        let response = request.send().await.map_err(|e| {
            let err = classify(&e);
            warn!(%url, error = %e, kind = err.kind().as_str(), "API request failed");
            err
        })?;

        let status = response.status();
        debug!(%url, status = status.as_u16(), "API response");

        let body = response.bytes().await.map_err(|e| {
            let err = classify(&e);
            warn!(%url, error = %e, "Failed to read API response body");
            err
        })?;

        if !status.is_success() {
            let err = ApiError::from_response(status.as_u16(), &String::from_utf8_lossy(&body));
            warn!(%url, status = status.as_u16(), message = %err, "API returned error status");
            return Err(err);
        }

        serde_json::from_slice(&body).map_err(|e| {
            warn!(%url, error = %e, "Failed to decode API response");
            ApiError::Unknown(e.to_string())
        })
    }
}

/// Transport failures with no response are network errors, the rest unknown.
fn classify(error: &reqwest::Error) -> ApiError {
    if error.is_builder() || error.is_decode() {
        ApiError::Unknown(error.to_string())
    } else {
        ApiError::Network
    }
}

#[async_trait]
impl Backend for ApiClient {
    #[instrument(skip(self))]
    async fn services(&self) -> Result<Vec<Service>, ApiError> {
        self.get(&["services"]).await
    }

    #[instrument(skip(self))]
    async fn service(&self, id: &ServiceId) -> Result<Service, ApiError> {
        self.get(&["services", id.as_str()]).await
    }

    #[instrument(skip(self))]
    async fn reviews(&self) -> Result<Vec<Review>, ApiError> {
        self.get(&["reviews"]).await
    }

    #[instrument(skip(self, review))]
    async fn create_review(&self, review: &NewReview) -> Result<MessageResponse, ApiError> {
        self.post(&["reviews"], review).await
    }

    #[instrument(skip(self))]
    async fn quotes(&self) -> Result<Vec<QuoteRequest>, ApiError> {
        self.get(&["quotes"]).await
    }

    #[instrument(skip(self, quote))]
    async fn create_quote(&self, quote: &NewQuoteRequest) -> Result<MessageResponse, ApiError> {
        self.post(&["quotes"], quote).await
    }

    #[instrument(skip(self))]
    async fn contacts(&self) -> Result<Vec<Contact>, ApiError> {
        self.get(&["contacts"]).await
    }

    #[instrument(skip(self, contact))]
    async fn create_contact(&self, contact: &NewContact) -> Result<MessageResponse, ApiError> {
        self.post(&["contact"], contact).await
    }

    #[instrument(skip(self))]
    async fn gallery(&self) -> Result<Vec<GalleryImage>, ApiError> {
        self.get(&["gallery"]).await
    }

    #[instrument(skip(self, image))]
    async fn create_gallery_image(
        &self,
        image: &NewGalleryImage,
    ) -> Result<MessageResponse, ApiError> {
        self.post(&["gallery"], image).await
    }

    #[instrument(skip(self))]
    async fn real_gallery_photos(&self) -> Result<AlbumSet, ApiError> {
        self.get(&["gallery", "real-photos"]).await
    }
}
