//! Submission notifications.
//!
//! Each quote or contact produces two emails: one to the business inbox and a
//! confirmation to the customer. Delivery uses SMTP via lettre with Askama
//! templates. Without SMTP settings the rendered emails are logged instead.
//! Notification failure never fails the submission.

use askama::Template;
use lettre::{
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
    message::{MultiPart, SinglePart, header::ContentType},
    transport::smtp::{Error as SmtpError, authentication::Credentials},
};
use pnm_gardeners_core::{Contact, QuoteRequest, content::business};
use secrecy::ExposeSecret;
use thiserror::Error;

use crate::config::EmailConfig;

#[derive(Template)]
#[template(path = "email/quote_notification.html")]
struct QuoteNotificationHtml<'a> {
    quote: &'a QuoteRequest,
}

#[derive(Template)]
#[template(path = "email/quote_notification.txt")]
struct QuoteNotificationText<'a> {
    quote: &'a QuoteRequest,
}

#[derive(Template)]
#[template(path = "email/contact_notification.html")]
struct ContactNotificationHtml<'a> {
    contact: &'a Contact,
}

#[derive(Template)]
#[template(path = "email/contact_notification.txt")]
struct ContactNotificationText<'a> {
    contact: &'a Contact,
}

#[derive(Template)]
#[template(path = "email/customer_confirmation.html")]
struct ConfirmationHtml<'a> {
    name: &'a str,
    kind: &'a str,
    phone: &'a str,
}

#[derive(Template)]
#[template(path = "email/customer_confirmation.txt")]
struct ConfirmationText<'a> {
    name: &'a str,
    kind: &'a str,
    phone: &'a str,
}

/// Errors that can occur when sending email.
#[derive(Debug, Error)]
pub enum EmailError {
    /// SMTP transport error.
    #[error("SMTP error: {0}")]
    Smtp(#[from] SmtpError),

    /// Failed to build email message.
    #[error("Failed to build message: {0}")]
    MessageBuild(#[from] lettre::error::Error),

    /// Invalid email address.
    #[error("Invalid email address: {0}")]
    InvalidAddress(String),

    /// Template rendering error.
    #[error("Template error: {0}")]
    Template(#[from] askama::Error),
}

/// A rendered email ready for delivery.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Outgoing {
    pub to: String,
    pub subject: String,
    pub text: String,
    pub html: String,
}

/// Sends submission emails, or logs them when SMTP is not configured.
#[derive(Clone)]
pub struct Notifier {
    mailer: Option<Mailer>,
    business_email: String,
}

#[derive(Clone)]
struct Mailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    from_address: String,
}

impl Notifier {
    /// Create a notifier delivering over SMTP when `email` is set.
    ///
    /// # Errors
    ///
    /// Returns error if the SMTP relay cannot be configured.
    pub fn new(email: Option<&EmailConfig>, business_email: &str) -> Result<Self, SmtpError> {
        let mailer = email
            .map(|config| {
                let credentials = Credentials::new(
                    config.smtp_username.clone(),
                    config.smtp_password.expose_secret().to_string(),
                );
                AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.smtp_host).map(
                    |builder| Mailer {
                        transport: builder
                            .port(config.smtp_port)
                            .credentials(credentials)
                            .build(),
                        from_address: config.from_address.clone(),
                    },
                )
            })
            .transpose()?;

        Ok(Self {
            mailer,
            business_email: business_email.to_string(),
        })
    }

    /// A notifier that only logs.
    #[must_use]
    pub fn log_only(business_email: &str) -> Self {
        Self {
            mailer: None,
            business_email: business_email.to_string(),
        }
    }

    /// Emails for a new quote request: business notification, then customer confirmation.
    ///
    /// # Errors
    ///
    /// Returns error if a template fails to render.
    pub fn quote_emails(&self, quote: &QuoteRequest) -> Result<[Outgoing; 2], EmailError> {
        let notification = Outgoing {
            to: self.business_email.clone(),
            subject: format!("New Quote Request - {}", quote.service),
            text: QuoteNotificationText { quote }.render()?,
            html: QuoteNotificationHtml { quote }.render()?,
        };
        let confirmation = confirmation(
            &quote.email,
            &quote.name,
            "quote request",
            "Thank you for your quote request - PNM Gardeners",
        )?;
        Ok([notification, confirmation])
    }

    /// Emails for a new contact message: business notification, then customer confirmation.
    ///
    /// # Errors
    ///
    /// Returns error if a template fails to render.
    pub fn contact_emails(&self, contact: &Contact) -> Result<[Outgoing; 2], EmailError> {
        let notification = Outgoing {
            to: self.business_email.clone(),
            subject: format!("New Contact Form Submission - {}", contact.subject),
            text: ContactNotificationText { contact }.render()?,
            html: ContactNotificationHtml { contact }.render()?,
        };
        let confirmation = confirmation(
            &contact.email,
            &contact.name,
            "message",
            "Thank you for contacting us - PNM Gardeners",
        )?;
        Ok([notification, confirmation])
    }

    /// Notify about a quote request. Failures are logged, never returned.
    pub async fn quote_received(&self, quote: &QuoteRequest) {
        match self.quote_emails(quote) {
            Ok(emails) => self.deliver_all(&emails, quote.id.as_str()).await,
            Err(e) => tracing::error!(error = %e, quote_id = %quote.id, "Failed to render quote emails"),
        }
    }

    /// Notify about a contact message. Failures are logged, never returned.
    pub async fn contact_received(&self, contact: &Contact) {
        match self.contact_emails(contact) {
            Ok(emails) => self.deliver_all(&emails, contact.id.as_str()).await,
            Err(e) => {
                tracing::error!(error = %e, contact_id = %contact.id, "Failed to render contact emails");
            }
        }
    }

    async fn deliver_all(&self, emails: &[Outgoing], record_id: &str) {
        for email in emails {
            if let Err(e) = self.deliver(email).await {
                tracing::error!(
                    error = %e,
                    record_id,
                    to = %email.to,
                    "Failed to send email notification"
                );
            }
        }
    }

    async fn deliver(&self, email: &Outgoing) -> Result<(), EmailError> {
        let Some(mailer) = &self.mailer else {
            tracing::info!(
                to = %email.to,
                subject = %email.subject,
                body = %email.text,
                "Email notification (SMTP not configured)"
            );
            return Ok(());
        };

        let message = Message::builder()
            .from(
                mailer
                    .from_address
                    .parse()
                    .map_err(|_| EmailError::InvalidAddress(mailer.from_address.clone()))?,
            )
            .to(email
                .to
                .parse()
                .map_err(|_| EmailError::InvalidAddress(email.to.clone()))?)
            .subject(&email.subject)
            .multipart(
                MultiPart::alternative()
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_PLAIN)
                            .body(email.text.clone()),
                    )
                    .singlepart(
                        SinglePart::builder()
                            .header(ContentType::TEXT_HTML)
                            .body(email.html.clone()),
                    ),
            )?;

        mailer.transport.send(message).await?;

        tracing::info!(to = %email.to, subject = %email.subject, "Email sent successfully");
        Ok(())
    }
}

fn confirmation(to: &str, name: &str, kind: &str, subject: &str) -> Result<Outgoing, EmailError> {
    let phone = business::PHONE;
    Ok(Outgoing {
        to: to.to_string(),
        subject: subject.to_string(),
        text: ConfirmationText { name, kind, phone }.render()?,
        html: ConfirmationHtml { name, kind, phone }.render()?,
    })
}
