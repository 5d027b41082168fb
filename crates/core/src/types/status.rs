//! Status enums for customer submissions.

use core::fmt;

use serde::{Deserialize, Serialize};

/// Progress of a quote request through the business's inbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum QuoteStatus {
    #[default]
    Pending,
    Contacted,
    Quoted,
    Closed,
}

impl QuoteStatus {
    /// Lowercase label used in JSON and CSS classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Pending => "pending",
            Self::Contacted => "contacted",
            Self::Quoted => "quoted",
            Self::Closed => "closed",
        }
    }
}

impl fmt::Display for QuoteStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Progress of a general contact message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum ContactStatus {
    #[default]
    New,
    Read,
    Replied,
}

impl ContactStatus {
    /// Lowercase label used in JSON and CSS classes.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::New => "new",
            Self::Read => "read",
            Self::Replied => "replied",
        }
    }
}

impl fmt::Display for ContactStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        assert_eq!(QuoteStatus::default(), QuoteStatus::Pending);
        assert_eq!(ContactStatus::default(), ContactStatus::New);
    }

    #[test]
    fn test_serialization_matches_display() {
        let json = serde_json::to_string(&QuoteStatus::Contacted).unwrap_or_default();
        assert_eq!(json, format!("\"{}\"", QuoteStatus::Contacted));
        let json = serde_json::to_string(&ContactStatus::New).unwrap_or_default();
        assert_eq!(json, "\"new\"");
    }
}
