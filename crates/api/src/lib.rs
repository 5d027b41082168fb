//! PNM Gardeners API library.
//!
//! The REST backend as a library, so the router can be mounted by the binary
//! and by tests on an ephemeral port.

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod config;
pub mod error;
pub mod gallery;
pub mod notify;
pub mod routes;
pub mod state;
pub mod store;

use axum::{Router, http::HeaderValue, routing::get};
use tower_http::{
    cors::{Any, CorsLayer},
    request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer},
    trace::TraceLayer,
};

use state::AppState;

/// Build the application router with every `/api` route and its layers.
pub fn app(state: AppState) -> Router {
    let cors = state
        .config()
        .cors_origin
        .as_deref()
        .and_then(|origin| HeaderValue::from_str(origin).ok())
        .map_or_else(
            || CorsLayer::new().allow_origin(Any),
            |origin| CorsLayer::new().allow_origin(origin),
        )
        .allow_methods(Any)
        .allow_headers(Any);

    Router::new()
        .route("/api/", get(routes::root))
        .nest("/api", routes::routes())
        .with_state(state)
        .layer(cors)
        .layer(PropagateRequestIdLayer::x_request_id())
        .layer(TraceLayer::new_for_http())
        .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use std::path::Path;

    use axum::{
        body::{Body, Bytes, to_bytes},
        http::{Request, StatusCode, header},
    };
    use pnm_gardeners_core::{ErrorBody, MessageResponse, QuoteId, Review, Service};
    use serde::de::DeserializeOwned;
    use tower::ServiceExt;

    use super::*;
    use crate::config::ApiConfig;
    use crate::store::Store;

    fn test_app() -> (Router, Store) {
        let gallery = Path::new(env!("CARGO_MANIFEST_DIR")).join("../site/static/real_gallery_data.json");
        let store = Store::seeded();
        let state = AppState::new(ApiConfig::for_tests(gallery), store.clone()).unwrap();
        (app(state), store)
    }

    async fn send(app: Router, request: Request<Body>) -> (StatusCode, Bytes) {
        let response = app.oneshot(request).await.unwrap();
        let status = response.status();
        let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
        (status, body)
    }

    fn json<T: DeserializeOwned>(bytes: &[u8]) -> T {
        serde_json::from_slice(bytes).unwrap()
    }

    fn get(uri: &str) -> Request<Body> {
        Request::get(uri).body(Body::empty()).unwrap()
    }

    fn post_json(uri: &str, body: &serde_json::Value) -> Request<Body> {
        Request::post(uri)
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from(body.to_string()))
            .unwrap()
    }

    #[tokio::test]
    async fn test_root_health_message() {
        let (app, _) = test_app();
        let (status, body) = send(app, get("/api")).await;
        assert_eq!(status, StatusCode::OK);
        let message: MessageResponse = json(&body);
        assert_eq!(message.message, "PNM Gardeners API is running");
    }

    #[tokio::test]
    async fn test_root_answers_with_trailing_slash() {
        let (app, _) = test_app();
        let (status, body) = send(app, get("/api/")).await;
        assert_eq!(status, StatusCode::OK);
        let message: MessageResponse = json(&body);
        assert_eq!(message.message, "PNM Gardeners API is running");
    }

    #[tokio::test]
    async fn test_services_and_unknown_service() {
        let (app, _) = test_app();
        let (status, body) = send(app.clone(), get("/api/services")).await;
        assert_eq!(status, StatusCode::OK);
        let services: Vec<Service> = json(&body);
        assert_eq!(services.len(), 12);

        let (status, body) = send(app, get("/api/services/does-not-exist")).await;
        assert_eq!(status, StatusCode::NOT_FOUND);
        let error: ErrorBody = json(&body);
        assert_eq!(error.error, "Service not found");
    }

    #[tokio::test]
    async fn test_reviews_use_ten_point_wire_scale() {
        let (app, _) = test_app();
        let (_, body) = send(app, get("/api/reviews")).await;
        let raw: Vec<serde_json::Value> = json(&body);
        let max = raw
            .iter()
            .filter_map(|r| r.get("rating").and_then(serde_json::Value::as_f64))
            .fold(0.0_f64, f64::max);
        assert!((max - 10.0).abs() < f64::EPSILON);

        let reviews: Vec<Review> = json(&body);
        assert!(reviews.iter().all(|r| r.rating.as_stars() <= 5.0));
    }

    #[tokio::test]
    async fn test_quote_created_and_listed() {
        let (app, store) = test_app();
        let payload = serde_json::json!({
            "name": "Jo",
            "email": "jo@example.com",
            "phone": "07700 900123",
            "service": "Lawn Care",
            "message": "Front and back"
        });
        let (status, body) = send(app.clone(), post_json("/api/quotes", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        let created: MessageResponse = json(&body);
        assert_eq!(
            created.message,
            "Quote request submitted successfully. We'll get back to you within 24 hours!"
        );

        let id = QuoteId::new(created.id.unwrap());
        let stored = store.quotes().await.into_iter().find(|q| q.id == id).unwrap();
        assert_eq!(stored.phone, "07700900123");

        let (_, body) = send(app, get("/api/quotes")).await;
        let quotes: Vec<serde_json::Value> = json(&body);
        assert_eq!(quotes.len(), 1);
        assert_eq!(quotes[0]["status"], "pending");
    }

    #[tokio::test]
    async fn test_quote_validation_is_422_with_error_body() {
        let (app, _) = test_app();
        let payload = serde_json::json!({
            "name": "Jo",
            "email": "jo@example.com",
            "phone": "12345",
            "service": "Lawn Care"
        });
        let (status, body) = send(app, post_json("/api/quotes", &payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
        let error: ErrorBody = json(&body);
        assert_eq!(error.error, "please enter a valid UK phone number");
    }

    #[tokio::test]
    async fn test_malformed_json_has_error_body() {
        let (app, _) = test_app();
        let request = Request::post("/api/quotes")
            .header(header::CONTENT_TYPE, "application/json")
            .body(Body::from("{not json"))
            .unwrap();
        let (status, body) = send(app, request).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
        let error: ErrorBody = json(&body);
        assert!(!error.error.is_empty());
    }

    #[tokio::test]
    async fn test_contact_alias_route() {
        let (app, store) = test_app();
        let payload = serde_json::json!({
            "name": "Sam",
            "email": "sam@example.com",
            "phone": "020 7946 0018",
            "subject": "Hedges"
        });
        let (status, body) = send(app, post_json("/api/contact", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        let created: MessageResponse = json(&body);
        let id = pnm_gardeners_core::ContactId::new(created.id.unwrap());
        let stored = store.contacts().await.into_iter().find(|c| c.id == id).unwrap();
        assert_eq!(stored.subject, "Hedges");
    }

    #[tokio::test]
    async fn test_submitted_review_not_listed() {
        let (app, _) = test_app();
        let payload = serde_json::json!({
            "name": "Alex",
            "rating": 5,
            "text": "Great",
            "service": "Turfing"
        });
        let (status, _) = send(app.clone(), post_json("/api/reviews", &payload)).await;
        assert_eq!(status, StatusCode::OK);
        let (_, body) = send(app, get("/api/reviews")).await;
        let reviews: Vec<Review> = json(&body);
        assert!(reviews.iter().all(|r| r.name != "Alex"));
    }

    #[tokio::test]
    async fn test_review_rating_out_of_range_rejected() {
        let (app, _) = test_app();
        let payload = serde_json::json!({
            "name": "Alex",
            "rating": 9,
            "text": "Great",
            "service": "Turfing"
        });
        let (status, _) = send(app, post_json("/api/reviews", &payload)).await;
        assert_eq!(status, StatusCode::UNPROCESSABLE_ENTITY);
    }

    #[tokio::test]
    async fn test_real_photos_served() {
        let (app, _) = test_app();
        let (status, body) = send(app, get("/api/gallery/real-photos")).await;
        assert_eq!(status, StatusCode::OK);
        let albums: pnm_gardeners_core::AlbumSet = json(&body);
        assert!(albums.contains_key("Patio"));
    }

    #[tokio::test]
    async fn test_proxy_rejects_disallowed_host() {
        let (app, _) = test_app();
        let (status, _) = send(app, get("/api/proxy-image?url=https%3A%2F%2Fexample.com%2Fa.jpg")).await;
        assert_eq!(status, StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn test_request_id_header_set() {
        let (app, _) = test_app();
        let response = app.oneshot(get("/api/services")).await.unwrap();
        assert!(response.headers().contains_key("x-request-id"));
    }
}
