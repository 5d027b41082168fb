//! Home page route handler.
//!
//! The home page carries the services grid, the review map with its detail
//! panel, the review carousel, FAQs, areas served and both forms. Clicking a
//! marker or paging the carousel is a link back to `/` with a query.

use askama::Template;
use axum::{
    extract::{Query, State},
    response::Html,
};
use pnm_gardeners_core::{Faq, Review, ReviewId, Service};
use serde::Deserialize;
use tracing::instrument;

use crate::content::{self, AREAS_SERVED, business};
use crate::error::Result;
use crate::filters;
use crate::forms::{FormKind, FormState};
use crate::listing::{wrap_next, wrap_previous};
use crate::map::{self, DetailPanel, MapStats, MarkerLayer, SelectionStore};
use crate::state::AppState;

use super::forms::FormView;

/// Home page query parameters.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
pub struct HomeQuery {
    /// Review selected on the map.
    pub review: Option<String>,
    /// Carousel position, 0-indexed.
    #[serde(deserialize_with = "super::lenient_index")]
    pub slide: Option<usize>,
}

/// A review as cards, the carousel and the detail panel draw it.
#[derive(Clone)]
pub struct ReviewView {
    pub id: String,
    pub name: String,
    /// e.g. `4.7/5`
    pub rating: String,
    /// e.g. `★★★★☆`
    pub stars: String,
    pub date: String,
    pub text: String,
    pub service: String,
    pub postcode: String,
    pub images: Vec<String>,
}

impl From<&Review> for ReviewView {
    fn from(review: &Review) -> Self {
        Self {
            id: review.id.to_string(),
            name: review.name.clone(),
            rating: review.rating.to_string(),
            stars: star_icons(review.rating.filled_stars(), review.rating.empty_stars()),
            date: review.date.clone(),
            text: review.text.clone(),
            service: review.service.clone(),
            postcode: review.postcode_str().to_string(),
            images: review.images.clone(),
        }
    }
}

/// Filled then empty star characters.
#[must_use]
pub fn star_icons(filled: u8, empty: u8) -> String {
    "\u{2605}".repeat(usize::from(filled)) + &"\u{2606}".repeat(usize::from(empty))
}

/// The review carousel at one position.
pub struct CarouselView {
    pub review: ReviewView,
    /// 1-indexed position for display.
    pub position: usize,
    pub total: usize,
    pub previous: usize,
    pub next: usize,
}

impl CarouselView {
    fn new(reviews: &[Review], requested: usize) -> Option<Self> {
        let total = reviews.len();
        let index = requested.checked_rem(total)?;
        let review = reviews.get(index)?;
        Some(Self {
            review: ReviewView::from(review),
            position: index + 1,
            total,
            previous: wrap_previous(index, total),
            next: wrap_next(index, total),
        })
    }
}

/// Figures under the map.
pub struct StatsView {
    pub total_reviews: usize,
    pub areas: usize,
    pub average: String,
}

/// Home page template.
#[derive(Template)]
#[template(path = "home.html")]
pub struct HomeTemplate {
    pub services: Vec<Service>,
    pub services_notice: Option<String>,
    pub reviews_notice: Option<String>,
    pub carousel: Option<CarouselView>,
    /// Marker data for `static/js/map.js`.
    pub markers_json: String,
    pub map_lat: f64,
    pub map_lng: f64,
    pub map_zoom: u8,
    pub stats: StatsView,
    /// Review opened from a marker.
    pub selected: Option<ReviewView>,
    pub faqs: Vec<Faq>,
    pub areas: &'static [&'static str],
    pub phone: &'static str,
    pub email: &'static str,
    pub checkatrade_url: &'static str,
    pub quote_form: FormView,
    pub contact_form: FormView,
}

/// Display the home page.
#[instrument(skip(state))]
pub async fn home(
    State(state): State<AppState>,
    Query(query): Query<HomeQuery>,
) -> Result<Html<String>> {
    render(
        &state,
        &query,
        FormState::new(FormKind::Quote),
        FormState::new(FormKind::Contact),
    )
    .await
}

/// Render the home page with the given form states.
///
/// # Errors
///
/// Returns [`crate::error::AppError::Render`] if the template fails.
pub async fn render(
    state: &AppState,
    query: &HomeQuery,
    quote_form: FormState,
    contact_form: FormState,
) -> Result<Html<String>> {
    let backend = state.backend();
    let (services, reviews) = tokio::join!(content::services(backend), content::reviews(backend));

    let mut layer = MarkerLayer::new();
    layer.bind(&reviews.records);

    let selection = SelectionStore::new();
    if let Some(id) = query.review.as_deref()
        && !layer.click(&ReviewId::new(id), &selection)
    {
        tracing::debug!(review = id, "No marker for selected review");
    }
    let selected = DetailPanel::new(selection)
        .review(&reviews.records)
        .map(ReviewView::from);

    let markers_json = layer.to_json().map(|json| script_safe(&json)).unwrap_or_else(|e| {
        tracing::error!("Failed to serialize map markers: {e}");
        "[]".to_string()
    });

    let map_stats = MapStats::for_reviews(&reviews.records);
    let service_titles: Vec<String> = services.records.iter().map(|s| s.title.clone()).collect();

    let template = HomeTemplate {
        services_notice: services.notice(),
        reviews_notice: reviews.notice(),
        carousel: CarouselView::new(&reviews.records, query.slide.unwrap_or(0)),
        markers_json,
        map_lat: map::CENTER.0,
        map_lng: map::CENTER.1,
        map_zoom: map::ZOOM,
        stats: StatsView {
            total_reviews: map_stats.total_reviews,
            areas: map_stats.with_coordinates,
            average: map_stats.average_label(),
        },
        selected,
        faqs: content::faqs(),
        areas: AREAS_SERVED,
        phone: business::PHONE,
        email: business::EMAIL,
        checkatrade_url: business::CHECKATRADE_URL,
        quote_form: FormView::new(&quote_form, &service_titles),
        contact_form: FormView::new(&contact_form, &service_titles),
        services: services.records,
    };

    Ok(Html(template.render()?))
}

/// JSON safe to embed in a `<script>` element.
fn script_safe(json: &str) -> String {
    json.replace('<', "\\u003c")
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use pnm_gardeners_core::content as seed;

    use super::*;

    #[test]
    fn test_carousel_wraps() {
        let reviews = seed::reviews();
        let last = reviews.len() - 1;

        let first = CarouselView::new(&reviews, 0).unwrap();
        assert_eq!(first.position, 1);
        assert_eq!(first.previous, last);

        let end = CarouselView::new(&reviews, last).unwrap();
        assert_eq!(end.next, 0);

        let wrapped = CarouselView::new(&reviews, reviews.len()).unwrap();
        assert_eq!(wrapped.position, 1);

        assert!(CarouselView::new(&[], 0).is_none());
    }

    #[test]
    fn test_star_icons() {
        assert_eq!(star_icons(4, 1), "\u{2605}\u{2605}\u{2605}\u{2605}\u{2606}");
        assert_eq!(star_icons(0, 0), "");
    }

    #[test]
    fn test_script_safe() {
        assert_eq!(
            script_safe(r#"{"t":"</script>"}"#),
            r#"{"t":"\u003c/script>"}"#
        );
    }
}
