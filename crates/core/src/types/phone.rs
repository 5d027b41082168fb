//! UK phone number type.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Errors that can occur when parsing a [`PhoneNumber`].
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum PhoneError {
    /// The input has no digits at all.
    #[error("phone number cannot be empty")]
    Empty,
    /// The input contains characters other than digits, spaces, `+`, `-`, `(` or `)`.
    #[error("phone number contains invalid characters")]
    InvalidCharacters,
    /// The normalized number is not 10 or 11 digits long.
    #[error("please enter a valid UK phone number")]
    InvalidLength {
        /// Number of digits after normalization.
        digits: usize,
    },
}

/// A UK phone number, normalized to national format.
///
/// Formatting characters are stripped and an international `+44` or `0044`
/// prefix is replaced with a leading `0`. The result must be 10 or 11 digits.
///
/// ```
/// use pnm_gardeners_core::PhoneNumber;
///
/// assert_eq!(PhoneNumber::parse("+44 7700 900123").map(|p| p.to_string()).as_deref(), Ok("07700900123"));
/// assert!(PhoneNumber::parse("12345").is_err());
/// ```
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(transparent)]
pub struct PhoneNumber(String);

impl PhoneNumber {
    /// Parse and normalize a UK phone number.
    ///
    /// # Errors
    ///
    /// Returns a [`PhoneError`] if the input is empty, contains letters, or
    /// does not normalize to 10-11 digits.
    pub fn parse(s: &str) -> Result<Self, PhoneError> {
        let s = s.trim();
        if s.is_empty() {
            return Err(PhoneError::Empty);
        }

        if !s
            .chars()
            .all(|c| c.is_ascii_digit() || matches!(c, ' ' | '+' | '-' | '(' | ')'))
        {
            return Err(PhoneError::InvalidCharacters);
        }

        let digits: String = s.chars().filter(char::is_ascii_digit).collect();
        if digits.is_empty() {
            return Err(PhoneError::Empty);
        }

        let national = if let Some(rest) = digits.strip_prefix("0044") {
            format!("0{rest}")
        } else if s.starts_with('+') {
            digits
                .strip_prefix("44")
                .map_or_else(|| digits.clone(), |rest| format!("0{rest}"))
        } else {
            digits
        };

        if !(10..=11).contains(&national.len()) {
            return Err(PhoneError::InvalidLength {
                digits: national.len(),
            });
        }

        Ok(Self(national))
    }

    /// Returns the normalized number.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for PhoneNumber {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl std::str::FromStr for PhoneNumber {
    type Err = PhoneError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_national() {
        assert_eq!(PhoneNumber::parse("07700 900123").unwrap().as_str(), "07700900123");
        assert_eq!(PhoneNumber::parse("020 7946 0018").unwrap().as_str(), "02079460018");
        assert_eq!(PhoneNumber::parse("(01632) 960-001").unwrap().as_str(), "01632960001");
    }

    #[test]
    fn test_parse_international_prefixes() {
        assert_eq!(PhoneNumber::parse("+44 7700 900123").unwrap().as_str(), "07700900123");
        assert_eq!(PhoneNumber::parse("0044 7700 900123").unwrap().as_str(), "07700900123");
    }

    #[test]
    fn test_parse_rejects_letters() {
        assert_eq!(
            PhoneNumber::parse("call me maybe"),
            Err(PhoneError::InvalidCharacters)
        );
    }

    #[test]
    fn test_parse_rejects_bad_length() {
        assert_eq!(
            PhoneNumber::parse("12345"),
            Err(PhoneError::InvalidLength { digits: 5 })
        );
        assert!(PhoneNumber::parse("077009001234567").is_err());
    }

    #[test]
    fn test_parse_empty() {
        assert_eq!(PhoneNumber::parse(""), Err(PhoneError::Empty));
        assert_eq!(PhoneNumber::parse(" - "), Err(PhoneError::Empty));
    }
}
