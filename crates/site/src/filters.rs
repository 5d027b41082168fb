//! Custom Askama template filters.

#![allow(clippy::unnecessary_wraps)]

use std::fmt::Display;

use crate::gallery::image_url;

/// Returns the current year.
///
/// Usage in templates: `{{ ""|current_year }}`
#[askama::filter_fn]
pub fn current_year(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<i32> {
    use chrono::Datelike;
    Ok(chrono::Utc::now().year())
}

/// Returns the stylesheet path, fingerprinted when the build hashed it.
///
/// The hash is computed at build time from the CSS file content.
///
/// Usage in templates: `{{ ""|stylesheet_href }}`
#[askama::filter_fn]
pub fn stylesheet_href(_value: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(stylesheet_path(env!("CSS_HASH")))
}

fn stylesheet_path(hash: &str) -> String {
    if hash.is_empty() {
        "/static/css/site.css".to_string()
    } else {
        format!("/static/css/derived/site.{hash}.css")
    }
}

/// Fallback image candidates after the first, space separated.
///
/// `static/js/site.js` swaps them in one by one when an image fails to load.
///
/// Usage in templates: `<img src="{{ url|display_url }}" data-fallbacks="{{ url|fallback_urls }}">`
#[askama::filter_fn]
pub fn fallback_urls(url: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    let candidates = image_url::resolve_display_urls(&url.to_string());
    Ok(candidates.into_iter().skip(1).collect::<Vec<_>>().join(" "))
}

/// First display candidate for a stored image URL.
///
/// Usage in templates: `{{ url|display_url }}`
#[askama::filter_fn]
pub fn display_url(url: impl Display, _env: &dyn askama::Values) -> askama::Result<String> {
    Ok(image_url::primary_display_url(&url.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_stylesheet_path() {
        assert_eq!(stylesheet_path(""), "/static/css/site.css");
        assert_eq!(stylesheet_path("ab12cd34"), "/static/css/derived/site.ab12cd34.css");
    }
}
