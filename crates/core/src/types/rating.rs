//! Review ratings.
//!
//! Every rating inside the workspace lives on a single 0-5 star scale.
//! Reviews imported from Checkatrade arrive on a 10-point scale; the
//! [`ten_point`] serde adapter converts at the JSON boundary so nothing
//! downstream ever sees the 10-point number.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when constructing a [`Rating`].
#[derive(thiserror::Error, Debug, Clone, Copy, PartialEq)]
pub enum RatingError {
    /// The value is NaN or infinite.
    #[error("rating must be a number")]
    NotFinite,
    /// The value lies outside the accepted scale.
    #[error("rating must be between {min} and {max}")]
    OutOfRange {
        /// Lowest accepted value on the input scale.
        min: f64,
        /// Highest accepted value on the input scale.
        max: f64,
    },
}

/// A rating on the canonical 0-5 star scale.
///
/// Stored as hundredths of a star so 10-point inputs such as `9.3` convert
/// exactly (`4.65`).
///
/// ```
/// use pnm_gardeners_core::Rating;
///
/// let rating = Rating::from_ten_point(9.3).unwrap_or_default();
/// assert_eq!(rating.to_string(), "4.7/5");
/// assert_eq!(rating.filled_stars(), 5);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Default)]
pub struct Rating(u16);

impl Rating {
    /// Highest rating on the canonical scale.
    pub const MAX_STARS: u8 = 5;

    const SCALE: f64 = 100.0;

    /// Build a rating from a 0-5 star value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if the value is not finite or outside 0-5.
    pub fn from_stars(stars: f64) -> Result<Self, RatingError> {
        Self::from_scaled(stars, f64::from(Self::MAX_STARS), 1.0)
    }

    /// Build a rating from a 0-10 Checkatrade value.
    ///
    /// # Errors
    ///
    /// Returns [`RatingError`] if the value is not finite or outside 0-10.
    pub fn from_ten_point(points: f64) -> Result<Self, RatingError> {
        Self::from_scaled(points, 10.0, 0.5)
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    fn from_scaled(value: f64, max: f64, factor: f64) -> Result<Self, RatingError> {
        if !value.is_finite() {
            return Err(RatingError::NotFinite);
        }
        if !(0.0..=max).contains(&value) {
            return Err(RatingError::OutOfRange { min: 0.0, max });
        }
        // Range checked above, so the product fits in 0..=500.
        Ok(Self((value * factor * Self::SCALE).round() as u16))
    }

    /// The rating as stars, e.g. `4.65`.
    #[must_use]
    pub fn as_stars(self) -> f64 {
        f64::from(self.0) / Self::SCALE
    }

    /// The rating on the 10-point scale, e.g. `9.3`.
    #[must_use]
    pub fn as_ten_point(self) -> f64 {
        f64::from(self.0) * 2.0 / Self::SCALE
    }

    /// Number of filled stars to draw, rounded to the nearest whole star.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub const fn filled_stars(self) -> u8 {
        // At most 500 hundredths, so the quotient is at most 5.
        (self.0.saturating_add(50) / 100) as u8
    }

    /// Number of empty stars to draw after the filled ones.
    #[must_use]
    pub const fn empty_stars(self) -> u8 {
        Self::MAX_STARS.saturating_sub(self.filled_stars())
    }

    /// One-decimal rendering without the scale suffix, e.g. `4.7`.
    #[must_use]
    pub fn short(self) -> String {
        let tenths = self.0.saturating_add(5) / 10;
        format!("{}.{}", tenths / 10, tenths % 10)
    }

    /// Mean of the given ratings, `None` when there are none.
    #[must_use]
    #[allow(clippy::cast_possible_truncation)]
    pub fn average<I>(ratings: I) -> Option<Self>
    where
        I: IntoIterator<Item = Self>,
    {
        let (sum, count) = ratings
            .into_iter()
            .fold((0_u64, 0_u64), |(sum, count), r| (sum + u64::from(r.0), count + 1));
        if count == 0 {
            return None;
        }
        // Mean of values <= 500 is itself <= 500.
        Some(Self(((sum + count / 2) / count) as u16))
    }
}

impl fmt::Display for Rating {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}/{}", self.short(), Self::MAX_STARS)
    }
}

/// Serde adapter reading and writing a [`Rating`] as a 10-point number.
///
/// ```ignore
/// #[serde(with = "pnm_gardeners_core::rating::ten_point")]
/// pub rating: Rating,
/// ```
pub mod ten_point {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::Rating;

    /// Serialize as the 10-point value.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(rating: &Rating, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(rating.as_ten_point())
    }

    /// Deserialize from a 10-point value.
    ///
    /// # Errors
    ///
    /// Fails when the number is outside 0-10.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rating, D::Error> {
        let points = f64::deserialize(deserializer)?;
        Rating::from_ten_point(points).map_err(D::Error::custom)
    }
}

/// Serde adapter reading and writing a [`Rating`] as a 1-5 star value.
///
/// Used for submissions, where customers pick a whole number of stars.
pub mod stars {
    use serde::{Deserialize, Deserializer, Serializer, de::Error as _};

    use super::Rating;

    /// Serialize as the star value.
    ///
    /// # Errors
    ///
    /// Propagates serializer errors.
    pub fn serialize<S: Serializer>(rating: &Rating, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_f64(rating.as_stars())
    }

    /// Deserialize from a 1-5 star value.
    ///
    /// # Errors
    ///
    /// Fails when the number is outside 1-5.
    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Rating, D::Error> {
        let stars = f64::deserialize(deserializer)?;
        if stars < 1.0 {
            return Err(D::Error::custom("rating must be between 1 and 5"));
        }
        Rating::from_stars(stars).map_err(D::Error::custom)
    }
}

// Plain serde goes through the star scale.
impl Serialize for Rating {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        stars::serialize(self, serializer)
    }
}

impl<'de> Deserialize<'de> for Rating {
    fn deserialize<D: serde::Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let value = f64::deserialize(deserializer)?;
        Self::from_stars(value).map_err(serde::de::Error::custom)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::float_cmp)]
mod tests {
    use super::*;

    #[derive(Debug, Serialize, Deserialize)]
    struct Wire {
        #[serde(with = "ten_point")]
        rating: Rating,
    }

    #[test]
    fn test_ten_point_converts_once() {
        let wire: Wire = serde_json::from_str(r#"{"rating": 9.3}"#).unwrap();
        assert_eq!(wire.rating.as_stars(), 4.65);
        assert_eq!(wire.rating.to_string(), "4.7/5");

        let json = serde_json::to_string(&wire).unwrap();
        assert_eq!(json, r#"{"rating":9.3}"#);
    }

    #[test]
    fn test_ten_point_rejects_out_of_range() {
        assert!(serde_json::from_str::<Wire>(r#"{"rating": 11}"#).is_err());
        assert!(serde_json::from_str::<Wire>(r#"{"rating": -1}"#).is_err());
    }

    #[test]
    fn test_from_stars_bounds() {
        assert!(Rating::from_stars(0.0).is_ok());
        assert!(Rating::from_stars(5.0).is_ok());
        assert!(matches!(
            Rating::from_stars(5.5),
            Err(RatingError::OutOfRange { .. })
        ));
        assert_eq!(Rating::from_stars(f64::NAN), Err(RatingError::NotFinite));
    }

    #[test]
    fn test_filled_and_empty_stars() {
        let r = Rating::from_stars(3.4).unwrap();
        assert_eq!(r.filled_stars(), 3);
        assert_eq!(r.empty_stars(), 2);
        let r = Rating::from_ten_point(10.0).unwrap();
        assert_eq!(r.filled_stars(), 5);
        assert_eq!(r.empty_stars(), 0);
    }

    #[test]
    fn test_average() {
        let ratings = [10.0, 9.0, 9.3].map(|p| Rating::from_ten_point(p).unwrap());
        let avg = Rating::average(ratings).unwrap();
        assert_eq!(avg.short(), "4.7");
        assert_eq!(Rating::average(Vec::new()), None);
    }

    #[test]
    fn test_stars_adapter_requires_at_least_one() {
        #[derive(Deserialize)]
        struct Submit {
            #[serde(with = "stars")]
            #[allow(dead_code)]
            rating: Rating,
        }
        assert!(serde_json::from_str::<Submit>(r#"{"rating": 0}"#).is_err());
        assert!(serde_json::from_str::<Submit>(r#"{"rating": 4}"#).is_ok());
        assert!(serde_json::from_str::<Submit>(r#"{"rating": 6}"#).is_err());
    }
}
