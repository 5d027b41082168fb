//! Records exchanged between the API and the site.
//!
//! Field names follow the JSON the API serves, so every record derives
//! `Serialize` and `Deserialize` without renames.

pub mod faq;
pub mod gallery;
pub mod message;
pub mod review;
pub mod service;
pub mod submission;

pub use faq::Faq;
pub use gallery::{Album, AlbumSet, GalleryImage, NewGalleryImage, Photo};
pub use message::{ErrorBody, MessageResponse};
pub use review::{NewReview, Review};
pub use service::Service;
pub use submission::{Contact, NewContact, NewQuoteRequest, QuoteRequest, SubmissionError};
