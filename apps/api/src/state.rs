use std::sync::Arc;

use chrono::{DateTime, Utc};

use crate::models::resume::ResumeDocument;
use crate::notify::Mailer;
use crate::resume::classifier::SectionKeywordTable;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    /// Loaded once at startup; never mutated.
    pub resume: Arc<ResumeDocument>,
    pub keywords: Arc<SectionKeywordTable>,
    /// Pluggable mail backend. `SmtpMailer` when configured, `DisabledMailer` otherwise.
    pub mailer: Arc<dyn Mailer>,
    pub started_at: DateTime<Utc>,
}
