//! The site's `ApiClient` against a live API.
//!
//! Each test starts its own API on an ephemeral port, so tests never share
//! records.

#![allow(clippy::unwrap_used, clippy::indexing_slicing)]

use pnm_gardeners_core::{
    NewContact, NewGalleryImage, NewQuoteRequest, NewReview, QuoteStatus, Rating, ServiceId,
    content,
};
use pnm_gardeners_integration_tests::{TestApi, unreachable_url};
use pnm_gardeners_site::api::{ApiClient, ApiError, Backend, ErrorKind};
use reqwest::StatusCode;
use serde_json::{Value, json};

fn jane_quote() -> NewQuoteRequest {
    NewQuoteRequest {
        name: "Jane".into(),
        email: "jane@x.com".into(),
        phone: "07000000000".into(),
        service: "Garden Maintenance".into(),
        message: String::new(),
    }
}

// ============================================================================
// Reads
// ============================================================================

#[tokio::test]
async fn test_services_match_seed() {
    let api = TestApi::start().await;
    let services = api.client().services().await.unwrap();
    assert_eq!(services, content::services());
}

#[tokio::test]
async fn test_reads_are_idempotent() {
    let api = TestApi::start().await;
    let client = api.client();

    assert_eq!(client.services().await.unwrap(), client.services().await.unwrap());
    assert_eq!(client.reviews().await.unwrap(), client.reviews().await.unwrap());
    assert_eq!(client.gallery().await.unwrap(), client.gallery().await.unwrap());
}

#[tokio::test]
async fn test_unknown_service_is_server_error() {
    let api = TestApi::start().await;
    let err = api
        .client()
        .service(&ServiceId::new("no-such-service"))
        .await
        .unwrap_err();

    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), 404);
    assert_eq!(err.message(), "Service not found");
}

#[tokio::test]
async fn test_real_gallery_photos() {
    let api = TestApi::start().await;
    let albums = api.client().real_gallery_photos().await.unwrap();
    assert_eq!(albums["Patio"].photos.len(), 45);
}

#[tokio::test]
async fn test_unreachable_api_is_network_error() {
    let client = ApiClient::new(unreachable_url().await, std::time::Duration::from_secs(2)).unwrap();
    let err = client.services().await.unwrap_err();
    assert_eq!(err, ApiError::Network);
    assert_eq!(
        err.message(),
        "Unable to connect to server. Please check your internet connection."
    );
}

// ============================================================================
// Creates
// ============================================================================

#[tokio::test]
async fn test_create_quote_then_list() {
    let api = TestApi::start().await;
    let client = api.client();

    let response = client.create_quote(&jane_quote()).await.unwrap();
    assert!(!response.message.is_empty());
    let id = response.id.unwrap();

    let quotes = client.quotes().await.unwrap();
    let stored = quotes.iter().find(|q| q.id.to_string() == id).unwrap();
    assert_eq!(stored.name, "Jane");
    assert_eq!(stored.status, QuoteStatus::Pending);
    assert_eq!(api.store.quotes().await.len(), quotes.len());
}

#[tokio::test]
async fn test_invalid_quote_is_rejected() {
    let api = TestApi::start().await;
    let quote = NewQuoteRequest {
        email: "not-an-email".into(),
        ..jane_quote()
    };

    let err = api.client().create_quote(&quote).await.unwrap_err();
    assert_eq!(err.status(), 422);
    assert!(err.message().contains("email"));
    assert!(api.store.quotes().await.is_empty());
}

#[tokio::test]
async fn test_create_contact() {
    let api = TestApi::start().await;
    let client = api.client();
    let contact = NewContact {
        name: "Sam".into(),
        email: "sam@example.com".into(),
        phone: "+44 7700 900123".into(),
        subject: "Hedge trimming".into(),
        message: "Two tall hedges".into(),
    };

    let response = client.create_contact(&contact).await.unwrap();
    assert!(response.id.is_some());

    let contacts = client.contacts().await.unwrap();
    assert_eq!(contacts.len(), 1);
    assert_eq!(contacts[0].subject, "Hedge trimming");
}

#[tokio::test]
async fn test_contact_alias_accepts_posts() {
    let api = TestApi::start().await;
    let response = reqwest::Client::new()
        .post(api.url("/contact"))
        .json(&json!({
            "name": "Sam",
            "email": "sam@example.com",
            "phone": "07700900123",
            "subject": "Lawn"
        }))
        .send()
        .await
        .unwrap();

    assert!(response.status().is_success());
    let body: Value = response.json().await.unwrap();
    assert!(body["id"].is_string());
    assert_eq!(api.client().contacts().await.unwrap().len(), 1);
}

#[tokio::test]
async fn test_create_review_is_held_for_approval() {
    let api = TestApi::start().await;
    let client = api.client();
    let before = client.reviews().await.unwrap();
    let review = NewReview {
        name: "Alex".into(),
        rating: Rating::from_stars(5.0).unwrap(),
        text: "Tidy work on the borders".into(),
        service: "Planting Services".into(),
        postcode: Some("SW16".into()),
        lat: None,
        lng: None,
        images: Vec::new(),
    };

    let response = client.create_review(&review).await.unwrap();
    assert_eq!(
        response.message,
        "Review submitted successfully and is pending approval"
    );
    assert!(response.id.is_some());
    assert_eq!(client.reviews().await.unwrap(), before);
}

#[tokio::test]
async fn test_create_gallery_image_then_list() {
    let api = TestApi::start().await;
    let client = api.client();
    let image = NewGalleryImage {
        src: "https://storage.googleapis.com/pnm/new-patio.jpg".into(),
        thumbnail: None,
        title: "New patio".into(),
        category: "Patio".into(),
    };

    let response = client.create_gallery_image(&image).await.unwrap();
    let id = response.id.unwrap();

    let gallery = client.gallery().await.unwrap();
    assert_eq!(gallery.len(), content::gallery_images().len() + 1);
    let stored = gallery.iter().find(|g| g.id.to_string() == id).unwrap();
    assert_eq!(stored.title, "New patio");
    assert_eq!(stored.thumbnail_url(), image.src);
}

#[tokio::test]
async fn test_gallery_image_without_src_is_rejected() {
    let api = TestApi::start().await;
    let image = NewGalleryImage {
        src: "  ".into(),
        thumbnail: None,
        title: "Nothing".into(),
        category: "Patio".into(),
    };

    let err = api.client().create_gallery_image(&image).await.unwrap_err();
    assert_eq!(err.kind(), ErrorKind::Server);
    assert_eq!(err.status(), 422);
    assert_eq!(err.message(), "Image URL is required");
    assert_eq!(
        api.client().gallery().await.unwrap().len(),
        content::gallery_images().len()
    );
}

#[tokio::test]
async fn test_api_root_answers() {
    let api = TestApi::start().await;
    let response = reqwest::get(api.url("/")).await.unwrap();
    assert_eq!(response.status(), StatusCode::OK);
}
