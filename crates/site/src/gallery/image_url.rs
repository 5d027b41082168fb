//! Display URL candidates for stored images.
//!
//! Google Drive links in the album document are download links, which
//! browsers will not render inline. Pages emit every candidate in order and
//! the browser moves to the next one when an image fails to load.

use pnm_gardeners_core::content::PLACEHOLDER_IMAGE;
use url::Url;

const DRIVE_HOST: &str = "drive.google.com";

/// Candidate URLs for `url`, best first, always ending with the placeholder.
///
/// 1. the URL itself
/// 2. for Drive `export=download` links, the `export=view` form
/// 3. for Drive links with an `id`, the Drive thumbnail at 800px
/// 4. the site placeholder image
#[must_use]
pub fn resolve_display_urls(url: &str) -> Vec<String> {
    let mut candidates = Vec::with_capacity(4);
    let trimmed = url.trim();

    if !trimmed.is_empty() {
        candidates.push(trimmed.to_string());
    }

    if let Some(drive) = Url::parse(trimmed)
        .ok()
        .filter(|u| u.host_str() == Some(DRIVE_HOST))
    {
        if let Some(view) = export_view(&drive) {
            candidates.push(view);
        }
        if let Some(thumb) = drive
            .query_pairs()
            .find(|(key, _)| key == "id")
            .map(|(_, value)| value.into_owned())
            .filter(|id| !id.is_empty())
            .and_then(|id| thumbnail(&id))
        {
            candidates.push(thumb);
        }
    }

    candidates.push(PLACEHOLDER_IMAGE.to_string());
    candidates.dedup();
    candidates
}

/// The first candidate, for places that can only take one URL.
#[must_use]
pub fn primary_display_url(url: &str) -> String {
    resolve_display_urls(url)
        .into_iter()
        .next()
        .unwrap_or_else(|| PLACEHOLDER_IMAGE.to_string())
}

fn export_view(drive: &Url) -> Option<String> {
    if !drive
        .query_pairs()
        .any(|(key, value)| key == "export" && value == "download")
    {
        return None;
    }
    let mut view = drive.clone();
    let pairs: Vec<(String, String)> = drive
        .query_pairs()
        .map(|(key, value)| {
            let value = if key == "export" { "view".into() } else { value };
            (key.into_owned(), value.into_owned())
        })
        .collect();
    view.query_pairs_mut().clear().extend_pairs(pairs);
    Some(view.into())
}

fn thumbnail(id: &str) -> Option<String> {
    Url::parse_with_params(
        "https://drive.google.com/thumbnail",
        &[("id", id), ("sz", "w800")],
    )
    .ok()
    .map(Into::into)
}
