//! The service album document.
//!
//! Albums are curated offline and shipped as a JSON file. The API re-reads it
//! on every request so an updated file is served without a restart.

use std::path::{Path, PathBuf};

use pnm_gardeners_core::AlbumSet;
use thiserror::Error;

/// Errors reading the album document.
#[derive(Debug, Error)]
pub enum GalleryDataError {
    /// The file does not exist.
    #[error("gallery data not found at {}", .0.display())]
    Missing(PathBuf),

    /// The file could not be read.
    #[error("failed to read gallery data: {0}")]
    Io(#[from] std::io::Error),

    /// The file is not a valid album document.
    #[error("invalid gallery data: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Read and parse the album document.
///
/// # Errors
///
/// Returns [`GalleryDataError::Missing`] when the file does not exist, and
/// `Io`/`Parse` for other failures.
pub async fn load_albums(path: &Path) -> Result<AlbumSet, GalleryDataError> {
    let bytes = match tokio::fs::read(path).await {
        Ok(bytes) => bytes,
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            return Err(GalleryDataError::Missing(path.to_path_buf()));
        }
        Err(e) => return Err(e.into()),
    };
    let albums: AlbumSet = serde_json::from_slice(&bytes)?;
    tracing::info!(albums = albums.len(), "Serving real gallery data");
    Ok(albums)
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_missing_file() {
        let result = load_albums(Path::new("/nonexistent/real_gallery_data.json")).await;
        assert!(matches!(result, Err(GalleryDataError::Missing(_))));
    }

    #[tokio::test]
    async fn test_shipped_document_parses() {
        let path = Path::new(env!("CARGO_MANIFEST_DIR"))
            .join("../site/static/real_gallery_data.json");
        let albums = load_albums(&path).await.unwrap();
        assert!(!albums.is_empty());
        for album in albums.values() {
            assert_eq!(album.photo_count, album.photos.len());
        }
    }

    #[tokio::test]
    async fn test_invalid_document() {
        let path = std::env::temp_dir().join(format!("pnm-gallery-{}.json", std::process::id()));
        tokio::fs::write(&path, b"[1, 2, 3]").await.unwrap();
        let result = load_albums(&path).await;
        let _ = tokio::fs::remove_file(&path).await;
        assert!(matches!(result, Err(GalleryDataError::Parse(_))));
    }
}
