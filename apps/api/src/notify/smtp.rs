use std::time::Duration;

use async_trait::async_trait;
use lettre::{
    message::{header::ContentType, Mailbox},
    transport::smtp::authentication::Credentials,
    AsyncSmtpTransport, AsyncTransport, Message, Tokio1Executor,
};
use tracing::debug;

use crate::config::SmtpConfig;
use crate::notify::{MailError, Mailer};

const SMTP_TIMEOUT: Duration = Duration::from_secs(30);

/// SMTP submission over STARTTLS with username/password auth.
pub struct SmtpMailer {
    transport: AsyncSmtpTransport<Tokio1Executor>,
    sender: Mailbox,
}

impl SmtpMailer {
    pub fn new(config: &SmtpConfig) -> Result<Self, MailError> {
        let sender = parse_mailbox(&config.sender)?;
        let transport = AsyncSmtpTransport::<Tokio1Executor>::starttls_relay(&config.host)?
            .port(config.port)
            .credentials(Credentials::new(
                config.username.clone(),
                config.password.clone(),
            ))
            .timeout(Some(SMTP_TIMEOUT))
            .build();
        Ok(Self { transport, sender })
    }

    /// Builds the plain-text message without sending it.
    pub fn compose(&self, recipient: &str, subject: &str, body: &str) -> Result<Message, MailError> {
        let message = Message::builder()
            .from(self.sender.clone())
            .to(parse_mailbox(recipient)?)
            .subject(subject)
            .header(ContentType::TEXT_PLAIN)
            .body(body.to_string())?;
        Ok(message)
    }
}

#[async_trait]
impl Mailer for SmtpMailer {
    async fn send(&self, recipient: &str, subject: &str, body: &str) -> Result<(), MailError> {
        let message = self.compose(recipient, subject, body)?;
        let response = self.transport.send(message).await?;
        debug!(code = %response.code(), "SMTP server accepted message");
        Ok(())
    }
}

fn parse_mailbox(address: &str) -> Result<Mailbox, MailError> {
    address
        .trim()
        .parse::<Mailbox>()
        .map_err(|e| MailError::InvalidAddress {
            address: address.to_string(),
            reason: e.to_string(),
        })
}
