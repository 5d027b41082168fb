//! PNM Gardeners Core - Shared types library.
//!
//! This crate provides the records and value types shared by the two binaries:
//! - `api` - REST backend for services, reviews, quotes, contacts and gallery
//! - `site` - Public marketing site and the admin summary
//!
//! # Architecture
//!
//! The core crate contains only types and static data - no I/O, no HTTP
//! clients. The API seeds its in-memory store from [`content`] and the site
//! renders the same arrays when the API cannot be reached.
//!
//! # Modules
//!
//! - [`types`] - Newtype wrappers for IDs, emails, phone numbers, ratings and statuses
//! - [`models`] - Records exchanged over the REST API
//! - [`content`] - Static seed and fallback content

#![cfg_attr(not(test), forbid(unsafe_code))]

pub mod content;
pub mod models;
pub mod types;

pub use models::*;
pub use types::*;
