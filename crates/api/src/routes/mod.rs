//! HTTP route handlers for the API.
//!
//! # Route Structure
//!
//! ```text
//! GET  /api                     - Health message
//!
//! # Services
//! GET  /api/services            - All services
//! GET  /api/services/{id}       - One service (404 when unknown)
//!
//! # Reviews
//! GET  /api/reviews             - Approved reviews, newest first
//! POST /api/reviews             - Submit a review (held for approval)
//!
//! # Submissions
//! GET  /api/quotes              - Quote requests, newest first
//! POST /api/quotes              - Request a quote
//! GET  /api/contacts            - Contact messages, newest first
//! POST /api/contacts            - Send a contact message
//! POST /api/contact             - Same as POST /api/contacts
//!
//! # Gallery
//! GET  /api/gallery             - Gallery images
//! POST /api/gallery             - Add a gallery image
//! GET  /api/gallery/real-photos - Service album document
//!
//! # Images
//! GET  /api/proxy-image?url=    - Fetch an allow-listed remote image
//! ```

pub mod contacts;
pub mod gallery;
pub mod proxy;
pub mod quotes;
pub mod reviews;
pub mod services;

use axum::{
    Json, Router,
    extract::FromRequest,
    routing::{get, post},
};
use pnm_gardeners_core::MessageResponse;

use crate::error::AppError;
use crate::state::AppState;

/// JSON body extractor whose rejections render as `{"error": ...}`.
#[derive(FromRequest)]
#[from_request(via(axum::Json), rejection(AppError))]
pub struct ApiJson<T>(pub T);

/// Health message.
pub async fn root() -> Json<MessageResponse> {
    Json(MessageResponse {
        message: "PNM Gardeners API is running".to_string(),
        id: None,
    })
}

/// Create all `/api` routes.
pub fn routes() -> Router<AppState> {
    Router::new()
        .route("/", get(root))
        .route("/services", get(services::index))
        .route("/services/{id}", get(services::show))
        .route("/reviews", get(reviews::index).post(reviews::create))
        .route("/quotes", get(quotes::index).post(quotes::create))
        .route("/contacts", get(contacts::index).post(contacts::create))
        .route("/contact", post(contacts::create))
        .route("/gallery", get(gallery::index).post(gallery::create))
        .route("/gallery/real-photos", get(gallery::real_photos))
        .route("/proxy-image", get(proxy::image))
}
