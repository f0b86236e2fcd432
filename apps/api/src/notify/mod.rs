//! Notifications: the only operation with I/O.
//!
//! Callers go through [`send_notification`], which turns every delivery outcome
//! into a human-readable sentence. `Mailer` implementations return typed errors
//! and never see that formatting.

pub mod smtp;

use async_trait::async_trait;
use thiserror::Error;
use tracing::{info, warn};

pub use smtp::SmtpMailer;

#[derive(Debug, Error)]
pub enum MailError {
    #[error("SMTP delivery is not configured (set SMTP_USERNAME and SMTP_PASSWORD)")]
    NotConfigured,

    #[error("invalid email address '{address}': {reason}")]
    InvalidAddress { address: String, reason: String },

    #[error("could not build message: {0}")]
    Build(#[from] lettre::error::Error),

    #[error("SMTP transport error: {0}")]
    Transport(#[from] lettre::transport::smtp::Error),
}

/// Outbound mail seam. `AppState` carries an `Arc<dyn Mailer>`.
#[async_trait]
pub trait Mailer: Send + Sync {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), MailError>;
}

/// Stand-in used when no SMTP credentials are configured.
pub struct DisabledMailer;

#[async_trait]
impl Mailer for DisabledMailer {
    async fn send(&self, _recipient: &str, _subject: &str, _body: &str) -> Result<(), MailError> {
        Err(MailError::NotConfigured)
    }
}

/// Delivers one email and reports the outcome as text. Never fails.
pub async fn send_notification(
    mailer: &dyn Mailer,
    recipient: &str,
    subject: &str,
    body: &str,
) -> String {
    match mailer.send(recipient, subject, body).await {
        Ok(()) => {
            info!(recipient, "Notification email sent");
            format!("Email successfully sent to {recipient}!")
        }
        Err(e) => {
            warn!(recipient, error = %e, "Notification email failed");
            format!("Failed to send email: {e}")
        }
    }
}
