//! Reviews map.
//!
//! [`MarkerLayer`] turns reviews into markers, one per review with usable
//! coordinates. The markers are serialized into the page and drawn by
//! `static/js/map.js` with Leaflet. Clicking a marker links back to the page
//! with `?review=<id>`; the handler publishes that id into a
//! [`SelectionStore`] and the detail panel reads it from there.

use std::sync::Arc;

use pnm_gardeners_core::{Rating, Review, ReviewId};
use serde::Serialize;
use tokio::sync::watch;

/// Map centre (central London).
pub const CENTER: (f64, f64) = (51.5074, -0.1278);

/// Initial zoom level.
pub const ZOOM: u8 = 11;

/// Characters of review text shown in a popup before truncation.
pub const POPUP_TEXT_LIMIT: usize = 100;

/// Marker style, a pure function of the rating.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerTier {
    Excellent,
    Good,
    Fair,
}

impl MarkerTier {
    /// Tier for a rating on the 0-5 scale: 4.5 and up is excellent, 3.5 and up good.
    #[must_use]
    pub fn for_rating(rating: Rating) -> Self {
        let stars = rating.as_stars();
        if stars >= 4.5 {
            Self::Excellent
        } else if stars >= 3.5 {
            Self::Good
        } else {
            Self::Fair
        }
    }

    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Excellent => "excellent",
            Self::Good => "good",
            Self::Fair => "fair",
        }
    }
}

/// Popup content for one marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Popup {
    pub filled_stars: u8,
    pub empty_stars: u8,
    /// e.g. `4.7/5`
    pub rating: String,
    pub postcode: String,
    pub service: String,
    /// Review text, truncated to [`POPUP_TEXT_LIMIT`] characters.
    pub excerpt: String,
    /// e.g. `View 2 Photos`, absent when the review has no images.
    pub photos_label: Option<String>,
    pub date: String,
    pub author: String,
}

impl Popup {
    #[must_use]
    pub fn for_review(review: &Review) -> Self {
        Self {
            filled_stars: review.rating.filled_stars(),
            empty_stars: review.rating.empty_stars(),
            rating: review.rating.to_string(),
            postcode: review.postcode_str().to_string(),
            service: review.service.clone(),
            excerpt: truncate(&review.text, POPUP_TEXT_LIMIT),
            photos_label: photos_label(review.images.len()),
            date: review.date.clone(),
            author: review.name.clone(),
        }
    }
}

/// One placed marker.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Marker {
    pub id: ReviewId,
    pub lat: f64,
    pub lng: f64,
    pub tier: MarkerTier,
    pub popup: Popup,
}

/// `text` cut to `limit` characters with `...` appended when longer.
#[must_use]
pub fn truncate(text: &str, limit: usize) -> String {
    match text.char_indices().nth(limit) {
        Some((end, _)) => format!("{}...", text.get(..end).unwrap_or(text)),
        None => text.to_string(),
    }
}

/// `View N Photo(s)`, or `None` for zero images.
#[must_use]
pub fn photos_label(count: usize) -> Option<String> {
    match count {
        0 => None,
        1 => Some("View 1 Photo".to_string()),
        n => Some(format!("View {n} Photos")),
    }
}

/// The set of markers currently on the map.
#[derive(Debug, Default)]
pub struct MarkerLayer {
    markers: Vec<Marker>,
}

impl MarkerLayer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace every marker with one per review that has coordinates.
    pub fn bind(&mut self, reviews: &[Review]) {
        self.clear();
        self.markers.extend(reviews.iter().filter_map(|review| {
            let (lat, lng) = review.coordinates()?;
            Some(Marker {
                id: review.id.clone(),
                lat,
                lng,
                tier: MarkerTier::for_rating(review.rating),
                popup: Popup::for_review(review),
            })
        }));
        tracing::debug!(markers = self.markers.len(), reviews = reviews.len(), "Bound map markers");
    }

    /// Remove every marker.
    pub fn clear(&mut self) {
        self.markers.clear();
    }

    #[must_use]
    pub fn markers(&self) -> &[Marker] {
        &self.markers
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.markers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.markers.is_empty()
    }

    /// Publish `id` as the selection if a marker exists for it.
    ///
    /// Returns whether the selection changed hands. Unknown ids are ignored.
    pub fn click(&self, id: &ReviewId, selection: &SelectionStore) -> bool {
        if self.markers.iter().any(|m| &m.id == id) {
            selection.select(Some(id.clone()));
            true
        } else {
            false
        }
    }

    /// Markers as JSON for the map script.
    ///
    /// # Errors
    ///
    /// Returns error if serialization fails.
    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.markers)
    }
}

/// Shared holder of the selected review.
///
/// The map publishes, the detail panel reads or subscribes. Clones share the
/// same state.
#[derive(Debug, Clone)]
pub struct SelectionStore {
    sender: Arc<watch::Sender<Option<ReviewId>>>,
}

impl Default for SelectionStore {
    fn default() -> Self {
        Self::new()
    }
}

impl SelectionStore {
    #[must_use]
    pub fn new() -> Self {
        let (sender, _) = watch::channel(None);
        Self {
            sender: Arc::new(sender),
        }
    }

    /// Replace the selection; `None` clears it.
    pub fn select(&self, id: Option<ReviewId>) {
        self.sender.send_replace(id);
    }

    /// The current selection.
    #[must_use]
    pub fn selected(&self) -> Option<ReviewId> {
        self.sender.borrow().clone()
    }

    /// A receiver notified on every change.
    #[must_use]
    pub fn subscribe(&self) -> watch::Receiver<Option<ReviewId>> {
        self.sender.subscribe()
    }
}

/// The panel beside the map showing the selected review.
#[derive(Debug, Clone)]
pub struct DetailPanel {
    selection: SelectionStore,
}

impl DetailPanel {
    #[must_use]
    pub const fn new(selection: SelectionStore) -> Self {
        Self { selection }
    }

    /// The selected review, if any and still present in `reviews`.
    #[must_use]
    pub fn review<'a>(&self, reviews: &'a [Review]) -> Option<&'a Review> {
        let id = self.selection.selected()?;
        reviews.iter().find(|r| r.id == id)
    }
}

/// Figures shown under the map.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MapStats {
    pub total_reviews: usize,
    /// Reviews with coordinates, shown as "areas served".
    pub with_coordinates: usize,
    pub average: Option<Rating>,
}

impl MapStats {
    #[must_use]
    pub fn for_reviews(reviews: &[Review]) -> Self {
        Self {
            total_reviews: reviews.len(),
            with_coordinates: reviews.iter().filter(|r| r.has_coordinates()).count(),
            average: Rating::average(reviews.iter().map(|r| r.rating)),
        }
    }

    /// Average as `4.9`, or `-` when there are no reviews.
    #[must_use]
    pub fn average_label(&self) -> String {
        self.average.map_or_else(|| "-".to_string(), Rating::short)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use pnm_gardeners_core::content;

    use super::*;

    fn review(id: &str, postcode: &str, coords: Option<(f64, f64)>, ten_point: f64) -> Review {
        Review {
            id: ReviewId::new(id),
            name: "Customer".into(),
            rating: Rating::from_ten_point(ten_point).unwrap(),
            date: "01 Jan 2025".into(),
            text: "Tidy work".into(),
            service: "Garden Maintenance".into(),
            postcode: Some(postcode.into()),
            lat: coords.map(|c| c.0),
            lng: coords.map(|c| c.1),
            images: Vec::new(),
            approved: true,
        }
    }

    #[test]
    fn test_one_marker_per_review_with_coordinates() {
        let reviews = vec![
            review("a", "SW16", Some((51.42, -0.13)), 10.0),
            review("b", "SW16", None, 8.0),
        ];
        let mut layer = MarkerLayer::new();
        layer.bind(&reviews);
        assert_eq!(layer.len(), 1);
        assert_eq!(layer.markers()[0].id, ReviewId::new("a"));
    }

    #[test]
    fn test_zero_coordinates_are_skipped() {
        let reviews = vec![review("a", "SW4", Some((0.0, 0.0)), 10.0)];
        let mut layer = MarkerLayer::new();
        layer.bind(&reviews);
        assert!(layer.is_empty());
    }

    #[test]
    fn test_rebind_clears_previous_markers() {
        let mut layer = MarkerLayer::new();
        layer.bind(&content::reviews());
        let first = layer.len();
        assert!(first > 0);

        layer.bind(&[review("only", "SW12", Some((51.44, -0.15)), 9.0)]);
        assert_eq!(layer.len(), 1);

        layer.bind(&[]);
        assert!(layer.is_empty());
    }

    #[test]
    fn test_marker_count_matches_coordinates() {
        let reviews = content::reviews();
        let mut layer = MarkerLayer::new();
        layer.bind(&reviews);
        assert_eq!(layer.len(), reviews.iter().filter(|r| r.has_coordinates()).count());
    }

    #[test]
    fn test_tiers() {
        let tier = |ten: f64| MarkerTier::for_rating(Rating::from_ten_point(ten).unwrap());
        assert_eq!(tier(10.0), MarkerTier::Excellent);
        assert_eq!(tier(9.0), MarkerTier::Excellent);
        assert_eq!(tier(8.8), MarkerTier::Good);
        assert_eq!(tier(7.0), MarkerTier::Good);
        assert_eq!(tier(6.8), MarkerTier::Fair);
    }

    #[test]
    fn test_truncate() {
        let long = "a".repeat(150);
        let cut = truncate(&long, POPUP_TEXT_LIMIT);
        assert_eq!(cut.len(), 103);
        assert!(cut.ends_with("..."));

        let exact = "b".repeat(100);
        assert_eq!(truncate(&exact, POPUP_TEXT_LIMIT), exact);

        assert_eq!(truncate("ééé", 2), "éé...");
    }

    #[test]
    fn test_popup() {
        let mut r = review("a", "SW16", Some((51.42, -0.13)), 9.3);
        r.images = vec!["https://storage.googleapis.com/x.jpg".into(); 2];
        let popup = Popup::for_review(&r);
        assert_eq!(popup.rating, "4.7/5");
        assert_eq!(popup.photos_label.as_deref(), Some("View 2 Photos"));
        assert_eq!(popup.filled_stars + popup.empty_stars, 5);
        assert_eq!(photos_label(1).as_deref(), Some("View 1 Photo"));
        assert_eq!(photos_label(0), None);
    }

    #[test]
    fn test_click_publishes_to_detail_panel() {
        let reviews = vec![
            review("a", "SW16", Some((51.42, -0.13)), 10.0),
            review("b", "SW16", None, 8.0),
        ];
        let mut layer = MarkerLayer::new();
        layer.bind(&reviews);

        let selection = SelectionStore::new();
        let panel = DetailPanel::new(selection.clone());
        let updates = selection.subscribe();
        assert!(panel.review(&reviews).is_none());

        assert!(layer.click(&ReviewId::new("a"), &selection));
        assert!(updates.has_changed().unwrap());
        assert_eq!(panel.review(&reviews).unwrap().id, ReviewId::new("a"));

        // No marker for "b", so the selection stays on "a".
        assert!(!layer.click(&ReviewId::new("b"), &selection));
        assert_eq!(selection.selected(), Some(ReviewId::new("a")));
    }

    #[test]
    fn test_stats() {
        let reviews = vec![
            review("a", "SW16", Some((51.42, -0.13)), 10.0),
            review("b", "SW16", None, 8.0),
        ];
        let stats = MapStats::for_reviews(&reviews);
        assert_eq!((stats.total_reviews, stats.with_coordinates), (2, 1));
        assert_eq!(stats.average_label(), "4.5");
        assert_eq!(MapStats::for_reviews(&[]).average_label(), "-");
    }

    #[test]
    fn test_markers_serialize_for_script() {
        let mut layer = MarkerLayer::new();
        layer.bind(&[review("a", "SW16", Some((51.42, -0.13)), 10.0)]);
        let json: serde_json::Value = serde_json::from_str(&layer.to_json().unwrap()).unwrap();
        assert_eq!(json[0]["tier"], "excellent");
        assert_eq!(json[0]["popup"]["postcode"], "SW16");
    }
}
