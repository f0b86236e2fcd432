use std::fmt;
use std::path::PathBuf;

use anyhow::{Context, Result};

/// Application configuration loaded from environment variables.
/// Fails at startup if a numeric variable does not parse.
#[derive(Debug, Clone)]
pub struct Config {
    pub resume_path: PathBuf,
    pub port: u16,
    pub rust_log: String,
    /// `None` when SMTP credentials are absent; notifications then report failure.
    pub smtp: Option<SmtpConfig>,
}

/// Outbound mail settings. The password never appears in `Debug` output.
#[derive(Clone)]
pub struct SmtpConfig {
    pub host: String,
    pub port: u16,
    pub username: String,
    pub password: String,
    pub sender: String,
}

impl fmt::Debug for SmtpConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SmtpConfig")
            .field("host", &self.host)
            .field("port", &self.port)
            .field("username", &self.username)
            .field("password", &"<redacted>")
            .field("sender", &self.sender)
            .finish()
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds the config from any key lookup. `from_env` passes the process environment.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let smtp = match (lookup("SMTP_USERNAME"), lookup("SMTP_PASSWORD")) {
            (Some(username), Some(password)) => Some(SmtpConfig {
                host: lookup("SMTP_HOST").unwrap_or_else(|| "smtp.gmail.com".to_string()),
                port: lookup("SMTP_PORT")
                    .unwrap_or_else(|| "587".to_string())
                    .parse::<u16>()
                    .context("SMTP_PORT must be a valid port number")?,
                sender: lookup("MAIL_FROM").unwrap_or_else(|| username.clone()),
                username,
                password,
            }),
            _ => None,
        };

        Ok(Config {
            resume_path: lookup("RESUME_PATH")
                .unwrap_or_else(|| "resume.json".to_string())
                .into(),
            port: lookup("PORT")
                .unwrap_or_else(|| "8080".to_string())
                .parse::<u16>()
                .context("PORT must be a valid port number")?,
            rust_log: lookup("RUST_LOG").unwrap_or_else(|| "info".to_string()),
            smtp,
        })
    }
}
