//! Image proxy.
//!
//! Review photos hosted on Google Storage and album photos on Google Drive
//! refuse hot-linking from some browsers. Clients that hit that can load the
//! image through `/api/proxy-image?url=` instead. Only allow-listed hosts are
//! fetched.

use axum::{
    body::Body,
    extract::{Query, State},
    http::{HeaderValue, header},
    response::Response,
};
use serde::Deserialize;
use tracing::instrument;
use url::Url;

use crate::error::{AppError, Result};
use crate::state::AppState;

/// Hosts the proxy will fetch from.
pub const ALLOWED_HOSTS: &[&str] = &[
    "storage.googleapis.com",
    "drive.google.com",
    "lh3.googleusercontent.com",
];

#[derive(Debug, Deserialize)]
pub struct ProxyQuery {
    pub url: String,
}

/// Parse `raw` and check it targets an allow-listed host over HTTPS.
///
/// # Errors
///
/// Returns [`AppError::BadRequest`] for malformed or disallowed URLs.
pub fn allowed_image_url(raw: &str) -> Result<Url> {
    let url = Url::parse(raw).map_err(|e| AppError::BadRequest(format!("Invalid image URL: {e}")))?;
    let allowed = url.scheme() == "https"
        && url
            .host_str()
            .is_some_and(|host| ALLOWED_HOSTS.contains(&host));
    if !allowed {
        return Err(AppError::BadRequest("Image host not allowed".to_string()));
    }
    Ok(url)
}

/// Fetch a remote image and relay it with its content type.
#[instrument(skip(state))]
pub async fn image(
    State(state): State<AppState>,
    Query(query): Query<ProxyQuery>,
) -> Result<Response> {
    let url = allowed_image_url(&query.url)?;
    fetch_image(state.http(), url).await
}

/// Fetch `url` and relay the body.
///
/// # Errors
///
/// Returns [`AppError::NotFound`] when the upstream answers anything but 200,
/// and [`AppError::Upstream`] when it cannot be reached.
pub async fn fetch_image(http: &reqwest::Client, url: Url) -> Result<Response> {
    let upstream = http
        .get(url)
        .header(header::ACCEPT, "image/webp,image/apng,image/*,*/*;q=0.8")
        .header(header::REFERER, "https://www.checkatrade.com/")
        .send()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    if upstream.status() != reqwest::StatusCode::OK {
        tracing::warn!(status = %upstream.status(), "Failed to fetch image");
        return Err(AppError::NotFound("Image not found".to_string()));
    }

    let content_type = upstream
        .headers()
        .get(reqwest::header::CONTENT_TYPE)
        .and_then(|v| v.to_str().ok())
        .and_then(|v| HeaderValue::from_str(v).ok())
        .unwrap_or_else(|| HeaderValue::from_static("image/jpeg"));
    let bytes = upstream
        .bytes()
        .await
        .map_err(|e| AppError::Upstream(e.to_string()))?;

    let mut response = Response::new(Body::from(bytes));
    response
        .headers_mut()
        .insert(header::CONTENT_TYPE, content_type);
    response.headers_mut().insert(
        header::CACHE_CONTROL,
        HeaderValue::from_static("public, max-age=86400"),
    );
    Ok(response)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::net::SocketAddr;

    use axum::{Router, body::to_bytes, http::StatusCode, response::IntoResponse, routing::get};
    use tokio::net::TcpListener;

    use super::*;

    /// Serve a stand-in image host and return its base URL.
    async fn upstream() -> Url {
        let router = Router::new()
            .route(
                "/leaf.png",
                get(|| async { ([(header::CONTENT_TYPE, "image/png")], "png-bytes") }),
            )
            .route("/gone.png", get(|| async { StatusCode::NOT_FOUND }));
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(listener, router).await.ok();
        });
        Url::parse(&format!("http://{addr}")).unwrap()
    }

    #[tokio::test]
    async fn test_fetch_relays_image() {
        let base = upstream().await;
        let response = fetch_image(&reqwest::Client::new(), base.join("leaf.png").unwrap())
            .await
            .unwrap();

        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(response.headers()[header::CONTENT_TYPE], "image/png");
        assert_eq!(
            response.headers()[header::CACHE_CONTROL],
            "public, max-age=86400"
        );
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        assert_eq!(&body[..], b"png-bytes");
    }

    #[tokio::test]
    async fn test_fetch_missing_image_is_not_found() {
        let base = upstream().await;
        let err = fetch_image(&reqwest::Client::new(), base.join("gone.png").unwrap())
            .await
            .unwrap_err();

        assert!(matches!(err, AppError::NotFound(_)));
        assert_eq!(err.into_response().status(), StatusCode::NOT_FOUND);
    }

    #[tokio::test]
    async fn test_fetch_unreachable_host_is_bad_gateway() {
        let listener = TcpListener::bind(SocketAddr::from(([127, 0, 0, 1], 0)))
            .await
            .unwrap();
        let addr = listener.local_addr().unwrap();
        drop(listener);
        let url = Url::parse(&format!("http://{addr}/leaf.png")).unwrap();

        let err = fetch_image(&reqwest::Client::new(), url).await.unwrap_err();

        assert!(matches!(err, AppError::Upstream(_)));
        assert_eq!(err.into_response().status(), StatusCode::BAD_GATEWAY);
    }

    #[test]
    fn test_allowed_hosts() {
        assert!(allowed_image_url("https://storage.googleapis.com/bucket/a.jpg").is_ok());
        assert!(allowed_image_url("https://drive.google.com/uc?export=view&id=abc").is_ok());
    }

    #[test]
    fn test_rejects_other_hosts_and_schemes() {
        assert!(allowed_image_url("https://evil.example.com/a.jpg").is_err());
        assert!(allowed_image_url("http://storage.googleapis.com/a.jpg").is_err());
        assert!(allowed_image_url("https://storage.googleapis.com.evil.io/a.jpg").is_err());
        assert!(allowed_image_url("not a url").is_err());
    }
}
