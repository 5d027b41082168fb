//! Gallery images and service photo albums.

use std::collections::BTreeMap;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{GalleryImageId, PhotoId};

/// An image uploaded to the general gallery.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryImage {
    pub id: GalleryImageId,
    /// Full-size URL.
    pub src: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    /// Caption.
    pub title: String,
    pub category: String,
    #[serde(default)]
    pub created_at: Option<DateTime<Utc>>,
}

impl GalleryImage {
    /// Thumbnail URL, falling back to the full-size image.
    #[must_use]
    pub fn thumbnail_url(&self) -> &str {
        self.thumbnail.as_deref().unwrap_or(&self.src)
    }
}

/// Payload for adding a gallery image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewGalleryImage {
    pub src: String,
    #[serde(default)]
    pub thumbnail: Option<String>,
    pub title: String,
    pub category: String,
}

/// A photo inside a service album.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Photo {
    pub id: PhotoId,
    pub name: String,
    pub url: String,
    #[serde(default)]
    pub thumbnail_url: Option<String>,
    #[serde(default)]
    pub service: String,
    #[serde(default)]
    pub description: String,
}

impl Photo {
    /// Thumbnail URL, falling back to the full-size photo.
    #[must_use]
    pub fn thumbnail(&self) -> &str {
        self.thumbnail_url.as_deref().unwrap_or(&self.url)
    }
}

/// Photos of completed work for one service.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Album {
    pub service_name: String,
    #[serde(default)]
    pub photo_count: usize,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub cover_photo: Option<String>,
    #[serde(default)]
    pub photos: Vec<Photo>,
}

impl Album {
    /// Cover image: the explicit cover, else the first photo's thumbnail.
    #[must_use]
    pub fn cover(&self) -> Option<&str> {
        self.cover_photo
            .as_deref()
            .or_else(|| self.photos.first().map(Photo::thumbnail))
    }
}

/// The gallery document: album name to album.
pub type AlbumSet = BTreeMap<String, Album>;

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_album_document_parses() {
        let json = r#"{
            "Patio": {
                "service_name": "Patio",
                "photo_count": 1,
                "description": "Sandstone patios",
                "photos": [
                    {"id": "p1", "name": "patio-1.jpg", "url": "https://example.com/p1.jpg", "service": "Patio"}
                ]
            }
        }"#;
        let albums: AlbumSet = serde_json::from_str(json).unwrap();
        let patio = albums.get("Patio").unwrap();
        assert_eq!(patio.photos.len(), 1);
        assert_eq!(patio.cover(), Some("https://example.com/p1.jpg"));
    }

    #[test]
    fn test_thumbnail_fallbacks() {
        let photo = Photo {
            id: PhotoId::new("p"),
            name: "n".into(),
            url: "full.jpg".into(),
            thumbnail_url: None,
            service: String::new(),
            description: String::new(),
        };
        assert_eq!(photo.thumbnail(), "full.jpg");

        let image = GalleryImage {
            id: GalleryImageId::new("g"),
            src: "src.jpg".into(),
            thumbnail: Some("thumb.jpg".into()),
            title: "t".into(),
            category: "c".into(),
            created_at: None,
        };
        assert_eq!(image.thumbnail_url(), "thumb.jpg");
    }
}
