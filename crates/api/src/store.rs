//! In-memory record store.
//!
//! Seeded from [`pnm_gardeners_core::content`] at startup. Nothing survives a
//! restart; submissions live only as long as the process.

use std::sync::Arc;

use chrono::{DateTime, Utc};
use pnm_gardeners_core::{
    Contact, GalleryImage, GalleryImageId, NewContact, NewGalleryImage,
    NewQuoteRequest, NewReview, QuoteRequest, Review, ReviewId, Service, ServiceId,
    content,
};
use tokio::sync::RwLock;

#[derive(Default)]
struct Records {
    services: Vec<Service>,
    /// Newest first.
    reviews: Vec<Review>,
    quotes: Vec<QuoteRequest>,
    contacts: Vec<Contact>,
    gallery: Vec<GalleryImage>,
}

/// Shared handle to the records. Cheap to clone.
#[derive(Clone, Default)]
pub struct Store {
    records: Arc<RwLock<Records>>,
}

impl Store {
    /// An empty store.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A store holding the static services, reviews and gallery images.
    #[must_use]
    pub fn seeded() -> Self {
        let records = Records {
            services: content::services(),
            reviews: content::reviews(),
            gallery: content::gallery_images(),
            ..Records::default()
        };
        tracing::info!(
            services = records.services.len(),
            reviews = records.reviews.len(),
            gallery = records.gallery.len(),
            "Store seeded"
        );
        Self {
            records: Arc::new(RwLock::new(records)),
        }
    }

    pub async fn services(&self) -> Vec<Service> {
        self.records.read().await.services.clone()
    }

    pub async fn service(&self, id: &ServiceId) -> Option<Service> {
        self.records
            .read()
            .await
            .services
            .iter()
            .find(|s| &s.id == id)
            .cloned()
    }

    /// Approved reviews, newest first.
    pub async fn approved_reviews(&self) -> Vec<Review> {
        self.records
            .read()
            .await
            .reviews
            .iter()
            .filter(|r| r.approved)
            .cloned()
            .collect()
    }

    /// Store a review pending moderation.
    pub async fn add_review(&self, new: NewReview, now: DateTime<Utc>) -> ReviewId {
        let review = Review {
            id: ReviewId::generate(),
            name: new.name.trim().to_owned(),
            rating: new.rating,
            date: now.format("%d %b %Y").to_string(),
            text: new.text.trim().to_owned(),
            service: new.service.trim().to_owned(),
            postcode: new.postcode,
            lat: new.lat,
            lng: new.lng,
            images: new.images,
            approved: false,
        };
        let id = review.id.clone();
        self.records.write().await.reviews.insert(0, review);
        id
    }

    /// Quote requests, newest first.
    pub async fn quotes(&self) -> Vec<QuoteRequest> {
        let mut quotes = self.records.read().await.quotes.clone();
        quotes.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        quotes
    }

    /// Store an already validated quote request.
    pub async fn add_quote(&self, new: NewQuoteRequest, now: DateTime<Utc>) -> QuoteRequest {
        let quote = QuoteRequest::from_new(new, now);
        self.records.write().await.quotes.push(quote.clone());
        quote
    }

    /// Contact messages, newest first.
    pub async fn contacts(&self) -> Vec<Contact> {
        let mut contacts = self.records.read().await.contacts.clone();
        contacts.sort_by(|a, b| b.created_at.cmp(&a.created_at));
        contacts
    }

    /// Store an already validated contact message.
    pub async fn add_contact(&self, new: NewContact, now: DateTime<Utc>) -> Contact {
        let contact = Contact::from_new(new, now);
        self.records.write().await.contacts.push(contact.clone());
        contact
    }

    pub async fn gallery(&self) -> Vec<GalleryImage> {
        self.records.read().await.gallery.clone()
    }

    pub async fn add_gallery_image(
        &self,
        new: NewGalleryImage,
        now: DateTime<Utc>,
    ) -> GalleryImageId {
        let image = GalleryImage {
            id: GalleryImageId::generate(),
            src: new.src,
            thumbnail: new.thumbnail,
            title: new.title,
            category: new.category,
            created_at: Some(now),
        };
        let id = image.id.clone();
        self.records.write().await.gallery.push(image);
        id
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use chrono::Duration;
    use pnm_gardeners_core::Rating;

    use super::*;

    fn quote(name: &str) -> NewQuoteRequest {
        NewQuoteRequest {
            name: name.into(),
            email: "jo@example.com".into(),
            phone: "07700900123".into(),
            service: "Lawn Care".into(),
            message: String::new(),
        }
    }

    #[tokio::test]
    async fn test_seeded_matches_content() {
        let store = Store::seeded();
        assert_eq!(store.services().await.len(), content::services().len());
        assert_eq!(store.approved_reviews().await.len(), content::reviews().len());
        assert!(store.quotes().await.is_empty());
    }

    #[tokio::test]
    async fn test_new_reviews_are_hidden_until_approved() {
        let store = Store::seeded();
        let before = store.approved_reviews().await;
        let new = NewReview {
            name: "Alex".into(),
            rating: Rating::from_stars(5.0).unwrap(),
            text: "Lovely".into(),
            service: "Turfing".into(),
            postcode: None,
            lat: None,
            lng: None,
            images: Vec::new(),
        };
        store.add_review(new, Utc::now()).await;
        assert_eq!(store.approved_reviews().await, before);
    }

    #[tokio::test]
    async fn test_quotes_newest_first() {
        let store = Store::new();
        let now = Utc::now();
        store.add_quote(quote("old"), now - Duration::hours(1)).await;
        let newest = store.add_quote(quote("new"), now).await;
        let quotes = store.quotes().await;
        assert_eq!(quotes.first().unwrap().id, newest.id);
        assert_eq!(quotes.first().unwrap().name, "new");
    }

    #[tokio::test]
    async fn test_reads_are_idempotent() {
        let store = Store::seeded();
        assert_eq!(store.services().await, store.services().await);
        assert_eq!(store.gallery().await, store.gallery().await);
    }

    #[tokio::test]
    async fn test_service_lookup() {
        let store = Store::seeded();
        assert!(store.service(&ServiceId::new("turfing")).await.is_some());
        assert!(store.service(&ServiceId::new("nope")).await.is_none());
    }
}
