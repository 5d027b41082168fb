//! Gallery route handlers.
//!
//! `/gallery` browses the service albums twenty photos at a time, lists
//! recent uploads and the per-service galleries; `/gallery/{service_id}`
//! shows one service. `?q=` searches both the album and the uploads;
//! `?category=` narrows the uploads.
//! Opening a photo is `?photo={index}` on either page; the viewer's
//! previous/next links wrap around the album.

use askama::Template;
use askama_web::WebTemplate;
use axum::extract::{Path, Query, State};
use pnm_gardeners_core::{GalleryImage, Photo};
use serde::Deserialize;
use tracing::instrument;
use url::form_urlencoded;

use crate::content;
use crate::filters;
use crate::gallery::{AlbumSource, GalleryGroup, catalog, load_albums};
use crate::listing::{
    ALL, PHOTOS_PER_PAGE, Page, ServiceBucket, matches_category, search, wrap_next, wrap_previous,
};
use crate::state::AppState;

/// Album browser query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct GalleryQuery {
    /// Album name; the first album when absent or unknown.
    pub album: Option<String>,
    /// 1-indexed page.
    #[serde(deserialize_with = "super::lenient_index")]
    pub page: Option<usize>,
    /// Open photo, as an index into the matching photos.
    #[serde(deserialize_with = "super::lenient_index")]
    pub photo: Option<usize>,
    /// Search over album photos and uploads.
    pub q: String,
    /// Upload category, or `all`.
    pub category: String,
}

/// Service gallery query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct ServiceGalleryQuery {
    #[serde(deserialize_with = "super::lenient_index")]
    pub photo: Option<usize>,
}

/// A photo thumbnail on a grid.
#[derive(Clone)]
pub struct PhotoView {
    pub name: String,
    pub description: String,
    pub thumbnail: String,
    /// Link that opens the photo viewer.
    pub href: String,
}

/// The full-size photo viewer.
pub struct ViewerView {
    pub url: String,
    pub name: String,
    pub description: String,
    /// 1-indexed position for display.
    pub position: usize,
    pub total: usize,
    pub previous_href: String,
    pub next_href: String,
    pub close_href: String,
}

impl ViewerView {
    /// Viewer for `photos[index]`; `href` builds the link for another index.
    fn open(
        photos: &[Photo],
        index: usize,
        href: impl Fn(Option<usize>) -> String,
    ) -> Option<Self> {
        let photo = photos.get(index)?;
        let total = photos.len();
        Some(Self {
            url: photo.url.clone(),
            name: photo.name.clone(),
            description: photo.description.clone(),
            position: index + 1,
            total,
            previous_href: href(Some(wrap_previous(index, total))),
            next_href: href(Some(wrap_next(index, total))),
            close_href: href(None),
        })
    }
}

/// An album card on the browser.
pub struct AlbumCard {
    pub name: String,
    pub description: String,
    pub photo_count: usize,
    pub cover: Option<String>,
    pub href: String,
    pub selected: bool,
}

/// One page number in the pager.
pub struct PageLink {
    pub number: usize,
    pub href: String,
    pub current: bool,
}

/// Pager for the album grid.
pub struct PagerView {
    pub number: usize,
    pub total_pages: usize,
    pub first_index: usize,
    pub last_index: usize,
    pub total: usize,
    pub previous_href: Option<String>,
    pub next_href: Option<String>,
    pub pages: Vec<PageLink>,
}

/// An uploaded gallery image.
pub struct UploadView {
    pub title: String,
    pub category: String,
    pub src: String,
    pub thumbnail: String,
}

/// An upload category choice.
pub struct CategoryOption {
    pub value: String,
    pub label: String,
    pub selected: bool,
}

/// A service gallery link grouped under Design, Build or Maintain.
pub struct GroupView {
    pub title: &'static str,
    pub description: &'static str,
    pub galleries: Vec<&'static catalog::ServiceGallery>,
}

/// Album browser template.
#[derive(Template, WebTemplate)]
#[template(path = "gallery/index.html")]
pub struct GalleryIndexTemplate {
    pub albums: Vec<AlbumCard>,
    /// Key of the open album, carried by the search forms.
    pub album_key: String,
    pub album_name: String,
    pub album_description: String,
    pub album_photo_count: usize,
    pub q: String,
    pub photos: Vec<PhotoView>,
    pub pager: PagerView,
    pub viewer: Option<ViewerView>,
    pub categories: Vec<CategoryOption>,
    pub uploads: Vec<UploadView>,
    pub uploads_notice: Option<String>,
    pub groups: Vec<GroupView>,
    /// Shown when the placeholder album stands in for the real ones.
    pub loading: bool,
}

/// Service gallery template.
#[derive(Template, WebTemplate)]
#[template(path = "gallery/service.html")]
pub struct ServiceGalleryTemplate {
    pub title: &'static str,
    pub description: &'static str,
    pub photos: Vec<PhotoView>,
    pub viewer: Option<ViewerView>,
}

/// `/gallery?album=..&q=..&page=..&photo=..` with empty parts left out.
fn album_href(album: &str, q: &str, page: usize, photo: Option<usize>) -> String {
    let mut query = form_urlencoded::Serializer::new(String::new());
    query.append_pair("album", album);
    if !q.trim().is_empty() {
        query.append_pair("q", q.trim());
    }
    if page > 1 {
        query.append_pair("page", &page.to_string());
    }
    if let Some(photo) = photo {
        query.append_pair("photo", &photo.to_string());
    }
    format!("/gallery?{}", query.finish())
}

impl From<&GalleryImage> for UploadView {
    fn from(image: &GalleryImage) -> Self {
        Self {
            title: image.title.clone(),
            category: image.category.clone(),
            src: image.src.clone(),
            thumbnail: image.thumbnail_url().to_string(),
        }
    }
}

/// Bucket labels of the uploads, `All` first.
fn category_options(images: &[GalleryImage], current: &str) -> Vec<CategoryOption> {
    let labels: std::collections::BTreeSet<&str> = images
        .iter()
        .map(|image| ServiceBucket::from_service(&image.category).label())
        .collect();
    let current = current.trim();
    std::iter::once(CategoryOption {
        value: ALL.to_string(),
        label: "All".to_string(),
        selected: current.is_empty() || current.eq_ignore_ascii_case(ALL),
    })
    .chain(labels.into_iter().map(|label| CategoryOption {
        value: label.to_string(),
        label: label.to_string(),
        selected: label.eq_ignore_ascii_case(current),
    }))
    .collect()
}

fn service_href(service_id: &str, photo: Option<usize>) -> String {
    photo.map_or_else(
        || format!("/gallery/{service_id}"),
        |photo| format!("/gallery/{service_id}?photo={photo}"),
    )
}

/// Display the album browser.
#[instrument(skip(state))]
pub async fn index(
    State(state): State<AppState>,
    Query(query): Query<GalleryQuery>,
) -> GalleryIndexTemplate {
    let loaded = load_albums(&state.config().gallery_data_path, state.backend()).await;

    let album_key = query
        .album
        .clone()
        .filter(|name| loaded.get(name).is_some())
        .or_else(|| loaded.first_name().map(String::from))
        .unwrap_or_default();
    let album = loaded.get(&album_key);
    let all_photos: &[Photo] = album.map(|a| a.photos.as_slice()).unwrap_or_default();
    let photos: Vec<Photo> = search(all_photos, &query.q).into_iter().cloned().collect();
    let q = query.q.trim();

    // The open photo's page wins over the requested page.
    let requested_page = query
        .photo
        .filter(|i| *i < photos.len())
        .map_or(query.page.unwrap_or(1), |i| i / PHOTOS_PER_PAGE + 1);
    let page = Page::new(&photos, requested_page, PHOTOS_PER_PAGE);
    let offset = (page.number - 1) * PHOTOS_PER_PAGE;

    let grid = page
        .items
        .iter()
        .enumerate()
        .map(|(i, photo)| PhotoView {
            name: photo.name.clone(),
            description: photo.description.clone(),
            thumbnail: photo.thumbnail().to_string(),
            href: album_href(&album_key, q, page.number, Some(offset + i)),
        })
        .collect();

    let viewer = query.photo.and_then(|index| {
        ViewerView::open(&photos, index, |photo| {
            let page = photo.map_or(page.number, |i| i / PHOTOS_PER_PAGE + 1);
            album_href(&album_key, q, page, photo)
        })
    });

    let pager = PagerView {
        number: page.number,
        total_pages: page.total_pages,
        first_index: page.first_index(),
        last_index: page.last_index(),
        total: page.total,
        previous_href: page
            .has_previous()
            .then(|| album_href(&album_key, q, page.previous(), None)),
        next_href: page
            .has_next()
            .then(|| album_href(&album_key, q, page.next(), None)),
        pages: page
            .numbers()
            .map(|number| PageLink {
                number,
                href: album_href(&album_key, q, number, None),
                current: number == page.number,
            })
            .collect(),
    };

    let albums = loaded
        .albums
        .iter()
        .map(|(key, a)| AlbumCard {
            name: a.service_name.clone(),
            description: a.description.clone(),
            photo_count: a.photo_count.max(a.photos.len()),
            cover: a.cover().map(String::from),
            href: album_href(key, "", 1, None),
            selected: *key == album_key,
        })
        .collect();

    let images = content::gallery(state.backend()).await;
    let uploads = search(&images.records, q)
        .into_iter()
        .filter(|image| matches_category(&image.category, &query.category))
        .map(UploadView::from)
        .collect();

    GalleryIndexTemplate {
        albums,
        album_name: album.map(|a| a.service_name.clone()).unwrap_or_default(),
        album_description: album.map(|a| a.description.clone()).unwrap_or_default(),
        album_photo_count: all_photos.len(),
        q: q.to_string(),
        photos: grid,
        pager,
        viewer,
        categories: category_options(&images.records, &query.category),
        uploads,
        uploads_notice: images.notice(),
        groups: GalleryGroup::ALL
            .iter()
            .map(|group| GroupView {
                title: group.title(),
                description: group.description(),
                galleries: group.galleries().collect(),
            })
            .collect(),
        loading: loaded.source == AlbumSource::Placeholder,
        album_key,
    }
}

/// Display one service's gallery.
#[instrument(skip(state))]
pub async fn service(
    State(state): State<AppState>,
    Path(service_id): Path<String>,
    Query(query): Query<ServiceGalleryQuery>,
) -> ServiceGalleryTemplate {
    let gallery = catalog::find(&service_id);
    let loaded = load_albums(&state.config().gallery_data_path, state.backend()).await;
    let photos = catalog::photos_for(gallery.and_then(|g| loaded.get(g.album)));

    let grid = photos
        .iter()
        .enumerate()
        .map(|(i, photo)| PhotoView {
            name: photo.name.clone(),
            description: photo.description.clone(),
            thumbnail: photo.thumbnail().to_string(),
            href: service_href(&service_id, Some(i)),
        })
        .collect();

    let viewer = query
        .photo
        .and_then(|index| ViewerView::open(&photos, index, |photo| service_href(&service_id, photo)));

    ServiceGalleryTemplate {
        title: gallery.map_or(catalog::UNKNOWN_TITLE, |g| g.title),
        description: gallery.map_or(catalog::UNKNOWN_DESCRIPTION, |g| g.description),
        photos: grid,
        viewer,
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use pnm_gardeners_core::PhotoId;

    use super::*;

    fn photos(n: usize) -> Vec<Photo> {
        (0..n)
            .map(|i| Photo {
                id: PhotoId::new(format!("p{i}")),
                name: format!("photo-{i}.jpg"),
                url: format!("https://example.com/{i}.jpg"),
                thumbnail_url: None,
                service: "Patio".into(),
                description: String::new(),
            })
            .collect()
    }

    #[test]
    fn test_album_href_encodes_names() {
        assert_eq!(
            album_href("Garden Maintenance", "", 1, None),
            "/gallery?album=Garden+Maintenance"
        );
        assert_eq!(
            album_href("Patio", " slabs ", 3, Some(41)),
            "/gallery?album=Patio&q=slabs&page=3&photo=41"
        );
    }

    #[test]
    fn test_viewer_wraps() {
        let photos = photos(45);
        let viewer = ViewerView::open(&photos, 44, |p| format!("{p:?}")).unwrap();
        assert_eq!(viewer.position, 45);
        assert_eq!(viewer.next_href, "Some(0)");
        assert_eq!(viewer.previous_href, "Some(43)");
        assert_eq!(viewer.close_href, "None");

        assert!(ViewerView::open(&photos, 45, |p| format!("{p:?}")).is_none());
    }

    #[test]
    fn test_category_options() {
        let images = pnm_gardeners_core::content::gallery_images();
        let options = category_options(&images, "");
        assert_eq!(options[0].value, ALL);
        assert!(options[0].selected);
        assert!(options.len() > 1);
        let labels: Vec<_> = options.iter().map(|o| o.label.as_str()).collect();
        let mut sorted = labels[1..].to_vec();
        sorted.sort_unstable();
        assert_eq!(labels[1..], sorted[..]);
    }
}
