//! Search, filtering and pagination for list views.
//!
//! Everything here is pure and works on borrowed slices, so handlers can
//! filter and page the same records repeatedly without copying them.

use std::collections::BTreeSet;

use pnm_gardeners_core::{GalleryImage, Photo, Review};
use serde::Deserialize;

/// Photos per page in album views.
pub const PHOTOS_PER_PAGE: usize = 20;

/// Filter value meaning "no filter".
pub const ALL: &str = "all";

// =============================================================================
// Pagination
// =============================================================================

/// Number of pages needed for `len` records, never less than 1.
#[must_use]
pub const fn total_pages(len: usize, page_size: usize) -> usize {
    if page_size == 0 || len == 0 {
        return 1;
    }
    len.div_ceil(page_size)
}

/// Clamp a requested 1-indexed page into `1..=total_pages`.
#[must_use]
pub fn clamp_page(requested: usize, total_pages: usize) -> usize {
    requested.clamp(1, total_pages.max(1))
}

/// Records on 1-indexed `page`; empty when the page is past the end.
#[must_use]
pub fn visible<T>(records: &[T], page: usize, page_size: usize) -> &[T] {
    let start = page.saturating_sub(1).saturating_mul(page_size);
    let end = start.saturating_add(page_size).min(records.len());
    records.get(start..end).unwrap_or(&[])
}

/// One page of a list, with the numbers a pager needs.
#[derive(Debug, Clone, Copy)]
pub struct Page<'a, T> {
    pub items: &'a [T],
    /// Current page, 1-indexed.
    pub number: usize,
    pub total_pages: usize,
    /// Records across all pages.
    pub total: usize,
    pub page_size: usize,
}

impl<'a, T> Page<'a, T> {
    /// The page nearest to `requested` that exists.
    #[must_use]
    pub fn new(records: &'a [T], requested: usize, page_size: usize) -> Self {
        let total_pages = total_pages(records.len(), page_size);
        let number = clamp_page(requested, total_pages);
        Self {
            items: visible(records, number, page_size),
            number,
            total_pages,
            total: records.len(),
            page_size,
        }
    }

    #[must_use]
    pub const fn has_previous(&self) -> bool {
        self.number > 1
    }

    #[must_use]
    pub const fn has_next(&self) -> bool {
        self.number < self.total_pages
    }

    #[must_use]
    pub const fn previous(&self) -> usize {
        self.number.saturating_sub(1)
    }

    #[must_use]
    pub const fn next(&self) -> usize {
        self.number + 1
    }

    /// 1-indexed position of the first item on this page, 0 when empty.
    #[must_use]
    pub const fn first_index(&self) -> usize {
        if self.items.is_empty() {
            0
        } else {
            (self.number - 1) * self.page_size + 1
        }
    }

    /// 1-indexed position of the last item on this page.
    #[must_use]
    pub const fn last_index(&self) -> usize {
        (self.number - 1) * self.page_size + self.items.len()
    }

    /// All page numbers, for a numbered pager.
    pub fn numbers(&self) -> impl Iterator<Item = usize> {
        1..=self.total_pages
    }
}

// =============================================================================
// Carousel
// =============================================================================

/// Index after `index` in a wrapping carousel of `len` items.
#[must_use]
pub const fn wrap_next(index: usize, len: usize) -> usize {
    if len == 0 { 0 } else { (index % len + 1) % len }
}

/// Index before `index` in a wrapping carousel of `len` items.
#[must_use]
pub const fn wrap_previous(index: usize, len: usize) -> usize {
    if len == 0 {
        0
    } else {
        (index % len + len - 1) % len
    }
}

// =============================================================================
// Search
// =============================================================================

/// A record with text fields a search box matches against.
pub trait Searchable {
    /// Fields a search string is matched against.
    fn search_fields(&self) -> Vec<&str>;

    /// Case-insensitive substring match on any field; blank matches all.
    fn matches(&self, query: &str) -> bool {
        let needle = query.trim().to_lowercase();
        needle.is_empty()
            || self
                .search_fields()
                .iter()
                .any(|field| field.to_lowercase().contains(&needle))
    }
}

impl Searchable for Review {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.service.as_str(), self.text.as_str(), self.postcode_str()]
    }
}

impl Searchable for Photo {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.name.as_str(), self.description.as_str(), self.service.as_str()]
    }
}

impl Searchable for GalleryImage {
    fn search_fields(&self) -> Vec<&str> {
        vec![self.title.as_str(), self.category.as_str()]
    }
}

/// Records matching `query`, in their original order.
pub fn search<'a, T: Searchable>(records: &'a [T], query: &str) -> Vec<&'a T> {
    records.iter().filter(|r| r.matches(query)).collect()
}

// =============================================================================
// Service buckets
// =============================================================================

/// Normalized service category used by the work gallery filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum ServiceBucket {
    GardenClearance,
    HedgeTrimming,
    LawnCare,
    GardenMaintenance,
    Planting,
    PatioServices,
    TreeServices,
    Other,
}

impl ServiceBucket {
    /// Bucket a free-text service label. The first matching keyword wins.
    #[must_use]
    pub fn from_service(service: &str) -> Self {
        let s = service.to_lowercase();
        if s.contains("clearance") && s.contains("garden") {
            Self::GardenClearance
        } else if s.contains("hedge") {
            Self::HedgeTrimming
        } else if s.contains("lawn") {
            Self::LawnCare
        } else if s.contains("maintenance") {
            Self::GardenMaintenance
        } else if s.contains("planting") {
            Self::Planting
        } else if s.contains("patio") {
            Self::PatioServices
        } else if s.contains("tree") || s.contains("pruning") {
            Self::TreeServices
        } else {
            Self::Other
        }
    }

    #[must_use]
    pub const fn label(self) -> &'static str {
        match self {
            Self::GardenClearance => "Garden Clearance",
            Self::HedgeTrimming => "Hedge Trimming",
            Self::LawnCare => "Lawn Care",
            Self::GardenMaintenance => "Garden Maintenance",
            Self::Planting => "Planting",
            Self::PatioServices => "Patio Services",
            Self::TreeServices => "Tree Services",
            Self::Other => "Other Services",
        }
    }
}

/// Whether `service` falls in `category`.
///
/// Matches when the service's bucket label equals the category or the
/// service contains it, both case-insensitively. Blank or [`ALL`] matches
/// everything.
#[must_use]
pub fn matches_category(service: &str, category: &str) -> bool {
    if !is_set(category) {
        return true;
    }
    let category = category.trim();
    ServiceBucket::from_service(service)
        .label()
        .eq_ignore_ascii_case(category)
        || service.to_lowercase().contains(&category.to_lowercase())
}

/// Whether `postcode` is exactly `location`. Blank or [`ALL`] matches everything.
#[must_use]
pub fn matches_location(postcode: &str, location: &str) -> bool {
    !is_set(location) || postcode == location.trim()
}

// =============================================================================
// Work gallery filter
// =============================================================================

/// Query parameters of the work gallery.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(default)]
pub struct WorkFilter {
    /// Free-text search.
    pub q: String,
    /// Service bucket label, or `all`.
    pub service: String,
    /// Postcode, or `all`.
    pub location: String,
}

impl WorkFilter {
    /// Reviews passing all three filters, in their original order.
    #[must_use]
    pub fn apply<'a>(&self, reviews: &'a [Review]) -> Vec<&'a Review> {
        reviews
            .iter()
            .filter(|r| r.matches(&self.q))
            .filter(|r| matches_category(&r.service, &self.service))
            .filter(|r| matches_location(r.postcode_str(), &self.location))
            .collect()
    }

    /// Whether any filter is set.
    #[must_use]
    pub fn is_active(&self) -> bool {
        !self.q.trim().is_empty() || is_set(&self.service) || is_set(&self.location)
    }
}

fn is_set(filter: &str) -> bool {
    let filter = filter.trim();
    !filter.is_empty() && !filter.eq_ignore_ascii_case(ALL)
}

/// Bucket labels present in `reviews`, sorted by label.
#[must_use]
pub fn service_options(reviews: &[Review]) -> Vec<&'static str> {
    reviews
        .iter()
        .map(|r| ServiceBucket::from_service(&r.service).label())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}

/// Distinct non-empty postcodes in `reviews`, sorted.
#[must_use]
pub fn location_options(reviews: &[Review]) -> Vec<&str> {
    reviews
        .iter()
        .map(Review::postcode_str)
        .filter(|p| !p.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .collect()
}
