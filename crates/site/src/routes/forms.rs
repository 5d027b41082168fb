//! Quote and contact form submission handlers.
//!
//! Both forms live on the home page. A submission re-renders the home page
//! with the form's new status: cleared with a success message, or with the
//! values kept and the error shown.

use std::collections::HashMap;

use axum::{
    Form,
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Response},
};
use tracing::instrument;

use crate::error::Result;
use crate::forms::{self, FormError, FormKind, FormState, InputType, SubmitStatus};
use crate::state::AppState;

use super::home::{self, HomeQuery};

/// Option appended to the service list of the quote form.
pub const OTHER_SERVICE: &str = "Other";

/// One field as the template draws it.
#[derive(Clone)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    /// `text`, `email`, `tel`, `select` or `textarea`.
    pub input: &'static str,
    pub required: bool,
    pub placeholder: &'static str,
    pub value: String,
    pub invalid: bool,
    /// Choices for a select.
    pub options: Vec<String>,
}

/// A form as the template draws it.
#[derive(Clone)]
pub struct FormView {
    pub anchor: &'static str,
    pub title: &'static str,
    pub action: &'static str,
    pub button_label: &'static str,
    pub busy_label: &'static str,
    pub busy: bool,
    pub fields: Vec<FieldView>,
    pub success: Option<String>,
    pub error: Option<String>,
}

impl FormView {
    /// View of `form`; `services` fills the service select.
    #[must_use]
    pub fn new(form: &FormState, services: &[String]) -> Self {
        let (success, error, invalid_field) = match form.status() {
            SubmitStatus::Success(message) => (Some(message.clone()), None, None),
            SubmitStatus::Error { message, field } => (None, Some(message.clone()), *field),
            SubmitStatus::Idle | SubmitStatus::Submitting => (None, None, None),
        };

        let kind = form.kind();
        let fields = kind
            .fields()
            .iter()
            .map(|field| FieldView {
                name: field.name,
                label: field.label,
                input: input_name(field.input),
                required: field.required,
                placeholder: field.placeholder,
                value: form.value(field.name).to_string(),
                invalid: invalid_field == Some(field.name),
                options: if field.input == InputType::Select {
                    services
                        .iter()
                        .cloned()
                        .chain(std::iter::once(OTHER_SERVICE.to_string()))
                        .collect()
                } else {
                    Vec::new()
                },
            })
            .collect();

        Self {
            anchor: kind.anchor(),
            title: kind.title(),
            action: kind.action(),
            button_label: form.button_label(),
            busy_label: kind.busy_label(),
            busy: form.is_busy(),
            fields,
            success,
            error,
        }
    }
}

const fn input_name(input: InputType) -> &'static str {
    match input {
        InputType::Text => "text",
        InputType::Email => "email",
        InputType::Tel => "tel",
        InputType::Select => "select",
        InputType::TextArea => "textarea",
    }
}

/// Submit the quote form.
#[instrument(skip(state, posted))]
pub async fn quote(
    State(state): State<AppState>,
    Form(posted): Form<HashMap<String, String>>,
) -> Result<Response> {
    let mut form = FormState::from_posted(FormKind::Quote, &posted);
    let outcome = forms::submit(&mut form, state.backend()).await;
    let contact = FormState::new(FormKind::Contact);
    let page = home::render(&state, &HomeQuery::default(), form, contact).await?;
    Ok((status_for(&outcome), page).into_response())
}

/// Submit the contact form.
#[instrument(skip(state, posted))]
pub async fn contact(
    State(state): State<AppState>,
    Form(posted): Form<HashMap<String, String>>,
) -> Result<Response> {
    let mut form = FormState::from_posted(FormKind::Contact, &posted);
    let outcome = forms::submit(&mut form, state.backend()).await;
    let quote = FormState::new(FormKind::Quote);
    let page = home::render(&state, &HomeQuery::default(), quote, form).await?;
    Ok((status_for(&outcome), page).into_response())
}

/// Rejected input is 422; backend failures are shown inline with 200.
const fn status_for<T>(outcome: &std::result::Result<T, FormError>) -> StatusCode {
    match outcome {
        Err(FormError::Invalid(_)) => StatusCode::UNPROCESSABLE_ENTITY,
        _ => StatusCode::OK,
    }
}
