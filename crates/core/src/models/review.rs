//! Customer reviews.

use serde::{Deserialize, Serialize};

use crate::types::{Rating, ReviewId, rating};

/// A published (or pending) customer review.
///
/// `rating` travels as a 10-point number and is held on the 0-5 scale.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Review {
    pub id: ReviewId,
    /// Author label, e.g. "Sarah M.".
    pub name: String,
    #[serde(with = "rating::ten_point")]
    pub rating: Rating,
    /// Display date, e.g. "12 Mar 2024".
    pub date: String,
    pub text: String,
    /// Free-text service label; not a reference to a [`crate::Service`].
    pub service: String,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
    #[serde(default = "default_approved")]
    pub approved: bool,
}

const fn default_approved() -> bool {
    true
}

impl Review {
    /// Coordinates for the map, when both are present and usable.
    ///
    /// Zero is treated as missing: the old import filled unknown positions
    /// with `0.0`.
    #[must_use]
    pub fn coordinates(&self) -> Option<(f64, f64)> {
        match (self.lat, self.lng) {
            (Some(lat), Some(lng))
                if lat.is_finite() && lng.is_finite() && lat != 0.0 && lng != 0.0 =>
            {
                Some((lat, lng))
            }
            _ => None,
        }
    }

    /// Whether the review can be placed on the map.
    #[must_use]
    pub fn has_coordinates(&self) -> bool {
        self.coordinates().is_some()
    }

    /// Postcode or an empty string.
    #[must_use]
    pub fn postcode_str(&self) -> &str {
        self.postcode.as_deref().unwrap_or_default()
    }
}

/// Payload for submitting a review. Stored unapproved until moderated.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct NewReview {
    pub name: String,
    /// Whole stars, 1-5.
    #[serde(with = "rating::stars")]
    pub rating: Rating,
    pub text: String,
    pub service: String,
    #[serde(default)]
    pub postcode: Option<String>,
    #[serde(default)]
    pub lat: Option<f64>,
    #[serde(default)]
    pub lng: Option<f64>,
    #[serde(default)]
    pub images: Vec<String>,
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn review(lat: Option<f64>, lng: Option<f64>) -> Review {
        Review {
            id: ReviewId::new("1"),
            name: "Sarah M.".into(),
            rating: Rating::from_ten_point(10.0).unwrap(),
            date: "12 Mar 2024".into(),
            text: "Great work".into(),
            service: "Lawn Care".into(),
            postcode: Some("SW16".into()),
            lat,
            lng,
            images: Vec::new(),
            approved: true,
        }
    }

    #[test]
    fn test_has_coordinates() {
        assert!(review(Some(51.42), Some(-0.13)).has_coordinates());
        assert!(!review(Some(51.42), None).has_coordinates());
        assert!(!review(None, Some(-0.13)).has_coordinates());
        assert!(!review(Some(0.0), Some(0.0)).has_coordinates());
        assert!(!review(Some(f64::NAN), Some(-0.13)).has_coordinates());
    }

    #[test]
    fn test_deserialize_minimal_wire_record() {
        let json = r#"{
            "id": "r1", "name": "Tom", "rating": 9, "date": "1 Jan 2024",
            "text": "Tidy job", "service": "Hedge Trimming"
        }"#;
        let review: Review = serde_json::from_str(json).unwrap();
        assert!(review.approved);
        assert!(review.images.is_empty());
        assert_eq!(review.rating.short(), "4.5");
        assert_eq!(review.postcode_str(), "");
    }
}
