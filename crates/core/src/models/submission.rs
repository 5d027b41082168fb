//! Quote requests and contact messages.
//!
//! Both the API and the site forms validate through [`NewQuoteRequest::validated`]
//! and [`NewContact::validated`], so a submission the form accepts is one the
//! API accepts.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{
    ContactId, ContactStatus, Email, EmailError, PhoneError, PhoneNumber, QuoteId, QuoteStatus,
};

/// Why a submission was rejected.
#[derive(thiserror::Error, Debug, Clone, PartialEq, Eq)]
pub enum SubmissionError {
    /// A required field is blank.
    #[error("{label} is required")]
    Missing {
        /// Form field name.
        field: &'static str,
        /// Human label.
        label: &'static str,
    },
    #[error("please enter a valid email address ({0})")]
    Email(#[from] EmailError),
    #[error("{0}")]
    Phone(#[from] PhoneError),
}

impl SubmissionError {
    /// Name of the offending form field.
    #[must_use]
    pub const fn field(&self) -> &'static str {
        match self {
            Self::Missing { field, .. } => field,
            Self::Email(_) => "email",
            Self::Phone(_) => "phone",
        }
    }
}

fn required(value: &str, field: &'static str, label: &'static str) -> Result<String, SubmissionError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(SubmissionError::Missing { field, label });
    }
    Ok(trimmed.to_owned())
}

/// Payload for requesting a quote.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewQuoteRequest {
    pub name: String,
    pub email: String,
    pub phone: String,
    /// Service the customer is interested in.
    pub service: String,
    #[serde(default)]
    pub message: String,
}

impl NewQuoteRequest {
    /// Trim every field, check required ones and normalize email and phone.
    ///
    /// # Errors
    ///
    /// Returns the first [`SubmissionError`] in form order.
    pub fn validated(self) -> Result<Self, SubmissionError> {
        let name = required(&self.name, "name", "Name")?;
        let email = Email::parse(&required(&self.email, "email", "Email")?)?;
        let phone = PhoneNumber::parse(&required(&self.phone, "phone", "Phone")?)?;
        let service = required(&self.service, "service", "Service")?;
        Ok(Self {
            name,
            email: email.into_inner(),
            phone: phone.to_string(),
            service,
            message: self.message.trim().to_owned(),
        })
    }
}

/// A stored quote request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuoteRequest {
    pub id: QuoteId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub service: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: QuoteStatus,
    pub created_at: DateTime<Utc>,
}

impl QuoteRequest {
    /// Record a validated request as pending.
    #[must_use]
    pub fn from_new(new: NewQuoteRequest, created_at: DateTime<Utc>) -> Self {
        Self {
            id: QuoteId::generate(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            service: new.service,
            message: new.message,
            status: QuoteStatus::Pending,
            created_at,
        }
    }
}

/// Payload for a general enquiry.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewContact {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    #[serde(default)]
    pub message: String,
}

impl NewContact {
    /// Trim every field, check required ones and normalize email and phone.
    ///
    /// # Errors
    ///
    /// Returns the first [`SubmissionError`] in form order.
    pub fn validated(self) -> Result<Self, SubmissionError> {
        let name = required(&self.name, "name", "Name")?;
        let email = Email::parse(&required(&self.email, "email", "Email")?)?;
        let phone = PhoneNumber::parse(&required(&self.phone, "phone", "Phone")?)?;
        let subject = required(&self.subject, "subject", "Subject")?;
        Ok(Self {
            name,
            email: email.into_inner(),
            phone: phone.to_string(),
            subject,
            message: self.message.trim().to_owned(),
        })
    }
}

/// A stored contact message.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Contact {
    pub id: ContactId,
    pub name: String,
    pub email: String,
    pub phone: String,
    pub subject: String,
    #[serde(default)]
    pub message: String,
    #[serde(default)]
    pub status: ContactStatus,
    pub created_at: DateTime<Utc>,
}

impl Contact {
    /// Record a validated message as new.
    #[must_use]
    pub fn from_new(new: NewContact, created_at: DateTime<Utc>) -> Self {
        Self {
            id: ContactId::generate(),
            name: new.name,
            email: new.email,
            phone: new.phone,
            subject: new.subject,
            message: new.message,
            status: ContactStatus::New,
            created_at,
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;

    fn quote() -> NewQuoteRequest {
        NewQuoteRequest {
            name: " Jo ".into(),
            email: "jo@example.com".into(),
            phone: "+44 7700 900123".into(),
            service: "Lawn Care".into(),
            message: String::new(),
        }
    }

    #[test]
    fn test_quote_validated_normalizes() {
        let q = quote().validated().unwrap();
        assert_eq!(q.name, "Jo");
        assert_eq!(q.phone, "07700900123");
    }

    #[test]
    fn test_quote_missing_service() {
        let err = NewQuoteRequest {
            service: "  ".into(),
            ..quote()
        }
        .validated()
        .unwrap_err();
        assert_eq!(err.field(), "service");
        assert_eq!(err.to_string(), "Service is required");
    }

    #[test]
    fn test_quote_bad_phone_reports_phone() {
        let err = NewQuoteRequest {
            phone: "123".into(),
            ..quote()
        }
        .validated()
        .unwrap_err();
        assert_eq!(err.field(), "phone");
    }

    #[test]
    fn test_contact_requires_subject_not_message() {
        let contact = NewContact {
            name: "Sam".into(),
            email: "sam@example.com".into(),
            phone: "020 7946 0018".into(),
            subject: String::new(),
            message: String::new(),
        };
        assert_eq!(contact.clone().validated().unwrap_err().field(), "subject");

        let ok = NewContact {
            subject: "Hedges".into(),
            ..contact
        }
        .validated();
        assert!(ok.is_ok());
    }

    #[test]
    fn test_records_start_in_default_status() {
        let q = QuoteRequest::from_new(quote().validated().unwrap(), Utc::now());
        assert_eq!(q.status, QuoteStatus::Pending);
    }
}
