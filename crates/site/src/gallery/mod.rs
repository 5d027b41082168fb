//! Photo galleries.
//!
//! - [`albums`] - Loads the service album document (file, then backend, then placeholder)
//! - [`catalog`] - The per-service galleries linked from the gallery index
//! - [`image_url`] - Candidate display URLs for a stored image URL

pub mod albums;
pub mod catalog;
pub mod image_url;

pub use albums::{AlbumSource, Albums, load_albums};
pub use catalog::{GalleryGroup, ServiceGallery};
pub use image_url::resolve_display_urls;
