//! Quote and contact forms.
//!
//! One form model serves both forms; [`FormKind`] decides the fields, the
//! required set and which backend call a submission makes. Status moves
//! `idle -> submitting -> success | error`. Success clears the fields, an
//! error keeps them, and editing any field clears the previous result.

use std::collections::{BTreeMap, HashMap};

use pnm_gardeners_core::{MessageResponse, NewContact, NewQuoteRequest, SubmissionError};
use thiserror::Error;

use crate::api::{ApiError, Backend};

/// Which form is being filled in.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormKind {
    Quote,
    Contact,
}

/// Input control for a field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputType {
    Text,
    Email,
    Tel,
    Select,
    TextArea,
}

/// Static description of one form field.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Field {
    pub name: &'static str,
    pub label: &'static str,
    pub input: InputType,
    pub required: bool,
    pub placeholder: &'static str,
}

const fn field(
    name: &'static str,
    label: &'static str,
    input: InputType,
    required: bool,
    placeholder: &'static str,
) -> Field {
    Field {
        name,
        label,
        input,
        required,
        placeholder,
    }
}

const QUOTE_FIELDS: &[Field] = &[
    field("name", "Full Name", InputType::Text, true, "Enter your full name"),
    field("email", "Email Address", InputType::Email, true, "Enter your email"),
    field("phone", "Phone Number", InputType::Tel, true, "Enter your phone number"),
    field("service", "Service Required", InputType::Select, true, "Choose a service"),
    field(
        "message",
        "Message / Project Details",
        InputType::TextArea,
        false,
        "Tell us about your garden and what you'd like done",
    ),
];

const CONTACT_FIELDS: &[Field] = &[
    field("name", "Full Name", InputType::Text, true, "Enter your full name"),
    field("email", "Email Address", InputType::Email, true, "Enter your email"),
    field("phone", "Phone Number", InputType::Tel, true, "Enter your phone number"),
    field("subject", "Subject", InputType::Text, true, "What is this about?"),
    field("message", "Message", InputType::TextArea, false, "Your message"),
];

impl FormKind {
    /// Fields in display order.
    #[must_use]
    pub const fn fields(self) -> &'static [Field] {
        match self {
            Self::Quote => QUOTE_FIELDS,
            Self::Contact => CONTACT_FIELDS,
        }
    }

    /// Path the form posts to.
    #[must_use]
    pub const fn action(self) -> &'static str {
        match self {
            Self::Quote => "/quote",
            Self::Contact => "/contact",
        }
    }

    #[must_use]
    pub const fn title(self) -> &'static str {
        match self {
            Self::Quote => "Get Your Free Quote Today",
            Self::Contact => "Send Us a Message",
        }
    }

    #[must_use]
    pub const fn submit_label(self) -> &'static str {
        match self {
            Self::Quote => "Get Free Quote",
            Self::Contact => "Send Message",
        }
    }

    /// Label shown on the disabled button while submitting.
    #[must_use]
    pub const fn busy_label(self) -> &'static str {
        "Sending..."
    }

    /// Success message when the server sends none.
    #[must_use]
    pub const fn default_success(self) -> &'static str {
        match self {
            Self::Quote => {
                "Thank you for your inquiry. We'll get back to you within 24 hours with your free quote."
            }
            Self::Contact => "Thank you for your message. We'll get back to you soon.",
        }
    }

    /// Anchor id of the form on the page.
    #[must_use]
    pub const fn anchor(self) -> &'static str {
        match self {
            Self::Quote => "quote",
            Self::Contact => "contact",
        }
    }
}

/// Why a submission did not succeed.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum FormError {
    /// Rejected before anything was sent.
    #[error(transparent)]
    Invalid(#[from] SubmissionError),

    /// The backend call failed.
    #[error(transparent)]
    Api(#[from] ApiError),
}

impl FormError {
    /// Field to highlight, for validation failures.
    #[must_use]
    pub const fn field(&self) -> Option<&'static str> {
        match self {
            Self::Invalid(e) => Some(e.field()),
            Self::Api(_) => None,
        }
    }
}

/// Where a form is in its submit cycle.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum SubmitStatus {
    #[default]
    Idle,
    Submitting,
    Success(String),
    Error {
        message: String,
        field: Option<&'static str>,
    },
}

/// A validated payload ready for the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Submission {
    Quote(NewQuoteRequest),
    Contact(NewContact),
}

/// Field values and submit status of one form.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormState {
    kind: FormKind,
    values: BTreeMap<&'static str, String>,
    status: SubmitStatus,
}

impl FormState {
    /// An empty, idle form.
    #[must_use]
    pub fn new(kind: FormKind) -> Self {
        Self {
            kind,
            values: kind.fields().iter().map(|f| (f.name, String::new())).collect(),
            status: SubmitStatus::Idle,
        }
    }

    /// A form holding posted values. Unknown keys are ignored.
    #[must_use]
    pub fn from_posted(kind: FormKind, posted: &HashMap<String, String>) -> Self {
        let mut form = Self::new(kind);
        for (name, value) in &mut form.values {
            if let Some(posted) = posted.get(*name) {
                value.clone_from(posted);
            }
        }
        form
    }

    #[must_use]
    pub const fn kind(&self) -> FormKind {
        self.kind
    }

    #[must_use]
    pub const fn status(&self) -> &SubmitStatus {
        &self.status
    }

    /// Value of `name`, empty for unknown fields.
    #[must_use]
    pub fn value(&self, name: &str) -> &str {
        self.values.get(name).map_or("", String::as_str)
    }

    /// Edit a field. Clears any previous success or error message.
    ///
    /// Returns `false` for a field this form does not have.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        let Some(slot) = self.values.get_mut(name) else {
            return false;
        };
        *slot = value.into();
        if matches!(self.status, SubmitStatus::Success(_) | SubmitStatus::Error { .. }) {
            self.status = SubmitStatus::Idle;
        }
        true
    }

    #[must_use]
    pub const fn is_busy(&self) -> bool {
        matches!(self.status, SubmitStatus::Submitting)
    }

    /// Label for the submit button in the current status.
    #[must_use]
    pub const fn button_label(&self) -> &'static str {
        if self.is_busy() {
            self.kind.busy_label()
        } else {
            self.kind.submit_label()
        }
    }

    /// Validate the fields and move to `submitting`.
    ///
    /// # Errors
    ///
    /// Returns the first validation failure; the form moves to `error` and
    /// keeps its values.
    pub fn begin(&mut self) -> Result<Submission, FormError> {
        let owned = |name: &str| self.value(name).to_string();
        let validated = match self.kind {
            FormKind::Quote => NewQuoteRequest {
                name: owned("name"),
                email: owned("email"),
                phone: owned("phone"),
                service: owned("service"),
                message: owned("message"),
            }
            .validated()
            .map(Submission::Quote),
            FormKind::Contact => NewContact {
                name: owned("name"),
                email: owned("email"),
                phone: owned("phone"),
                subject: owned("subject"),
                message: owned("message"),
            }
            .validated()
            .map(Submission::Contact),
        };

        match validated {
            Ok(submission) => {
                self.status = SubmitStatus::Submitting;
                Ok(submission)
            }
            Err(e) => {
                let err = FormError::from(e);
                self.fail(&err);
                Err(err)
            }
        }
    }

    /// Record the backend's answer to a submission.
    ///
    /// # Errors
    ///
    /// Passes the backend failure through after recording it.
    pub fn finish(
        &mut self,
        result: Result<MessageResponse, ApiError>,
    ) -> Result<MessageResponse, FormError> {
        match result {
            Ok(response) => {
                let message = if response.message.trim().is_empty() {
                    self.kind.default_success().to_string()
                } else {
                    response.message.clone()
                };
                for value in self.values.values_mut() {
                    value.clear();
                }
                self.status = SubmitStatus::Success(message);
                Ok(response)
            }
            Err(e) => {
                let err = FormError::from(e);
                self.fail(&err);
                Err(err)
            }
        }
    }

    fn fail(&mut self, err: &FormError) {
        self.status = SubmitStatus::Error {
            message: err.to_string(),
            field: err.field(),
        };
    }
}

/// Validate, send and record the outcome of a form submission.
///
/// # Errors
///
/// Returns the validation or backend failure, which is also recorded in
/// the form's status.
pub async fn submit(
    form: &mut FormState,
    backend: &dyn Backend,
) -> Result<MessageResponse, FormError> {
    let submission = form.begin()?;
    let result = match &submission {
        Submission::Quote(quote) => backend.create_quote(quote).await,
        Submission::Contact(contact) => backend.create_contact(contact).await,
    };
    match &result {
        Ok(response) => tracing::info!(
            kind = form.kind().anchor(),
            id = response.id.as_deref().unwrap_or_default(),
            "Form submitted"
        ),
        Err(e) => tracing::warn!(kind = form.kind().anchor(), error = %e, "Form submission failed"),
    }
    form.finish(result)
}
