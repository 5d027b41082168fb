//! Loading the service album document.
//!
//! The site tries the JSON file shipped under `static/` first, then the
//! backend's `/gallery/real-photos`, and finally a single placeholder album
//! so the page always has something to show.

use std::path::{Path, PathBuf};

use pnm_gardeners_core::{Album, AlbumSet};
use thiserror::Error;
use tracing::{debug, warn};

use crate::api::Backend;

/// Name of the placeholder album.
pub const PLACEHOLDER_ALBUM: &str = "Photos Loading...";

/// Errors reading the album file.
#[derive(Debug, Error)]
pub enum AlbumFileError {
    #[error("failed to read {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("invalid album document: {0}")]
    Parse(#[from] serde_json::Error),

    /// Parsed, but holds no albums.
    #[error("album document is empty")]
    Empty,
}

/// Where the albums came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AlbumSource {
    File,
    Backend,
    Placeholder,
}

/// A loaded album document.
#[derive(Debug, Clone)]
pub struct Albums {
    pub albums: AlbumSet,
    pub source: AlbumSource,
}

impl Albums {
    /// Album by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Album> {
        self.albums.get(name)
    }

    /// Name of the album to open when none is requested: the first by name.
    #[must_use]
    pub fn first_name(&self) -> Option<&str> {
        self.albums.keys().next().map(String::as_str)
    }
}

/// Read the album document from disk.
///
/// # Errors
///
/// Returns [`AlbumFileError`] when the file is missing, unreadable, invalid
/// or empty.
pub async fn read_album_file(path: &Path) -> Result<AlbumSet, AlbumFileError> {
    let bytes = tokio::fs::read(path).await.map_err(|source| AlbumFileError::Io {
        path: path.to_path_buf(),
        source,
    })?;
    let albums: AlbumSet = serde_json::from_slice(&bytes)?;
    if albums.is_empty() {
        return Err(AlbumFileError::Empty);
    }
    Ok(albums)
}

/// Load albums from `path`, then `backend`, then the placeholder.
pub async fn load_albums(path: &Path, backend: &dyn Backend) -> Albums {
    match read_album_file(path).await {
        Ok(albums) => {
            debug!(albums = albums.len(), "Loaded albums from file");
            return Albums {
                albums,
                source: AlbumSource::File,
            };
        }
        Err(e) => warn!(error = %e, "Album file unavailable, asking backend"),
    }

    match backend.real_gallery_photos().await {
        Ok(albums) if !albums.is_empty() => Albums {
            albums,
            source: AlbumSource::Backend,
        },
        Ok(_) => {
            warn!("Backend returned no albums, using placeholder");
            placeholder()
        }
        Err(e) => {
            warn!(error = %e, kind = e.kind().as_str(), "Backend albums unavailable, using placeholder");
            placeholder()
        }
    }
}

/// One empty album telling the visitor photos are on their way.
#[must_use]
pub fn placeholder() -> Albums {
    let album = Album {
        service_name: PLACEHOLDER_ALBUM.to_string(),
        photo_count: 0,
        description:
            "Real Google Drive photos are being loaded. Please refresh the page in a moment."
                .to_string(),
        cover_photo: Some(pnm_gardeners_core::content::PLACEHOLDER_IMAGE.to_string()),
        photos: Vec::new(),
    };
    Albums {
        albums: AlbumSet::from([(PLACEHOLDER_ALBUM.to_string(), album)]),
        source: AlbumSource::Placeholder,
    }
}
