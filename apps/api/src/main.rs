mod config;
mod errors;
mod models;
mod notify;
mod resume;
mod routes;
mod state;
mod tools;

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tower_http::{cors::CorsLayer, trace::TraceLayer};
use tracing::{info, warn};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::Config;
use crate::models::resume::load_resume;
use crate::notify::{DisabledMailer, Mailer, SmtpMailer};
use crate::resume::classifier::SectionKeywordTable;
use crate::routes::build_router;
use crate::state::AppState;

#[tokio::main]
async fn main() -> Result<()> {
    // Load configuration first (fails on malformed numeric env vars)
    let config = Config::from_env()?;

    // Initialize structured logging
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| {
            EnvFilter::new(format!("{}={}", env!("CARGO_PKG_NAME"), &config.rust_log))
        }))
        .with(tracing_subscriber::fmt::layer())
        .init();

    info!("Starting Resume API v{}", env!("CARGO_PKG_VERSION"));

    // Load the resume document once; it stays read-only for the process lifetime
    let resume = load_resume(&config.resume_path)?;

    let keywords = SectionKeywordTable::default();
    info!("Section keyword table ready ({} sections)", keywords.entries().len());

    let mailer = build_mailer(&config)?;

    let state = AppState {
        resume: Arc::new(resume),
        keywords: Arc::new(keywords),
        mailer,
        started_at: chrono::Utc::now(),
    };

    let app = build_router(state)
        .layer(TraceLayer::new_for_http())
        .layer(CorsLayer::permissive());

    let addr: SocketAddr = format!("0.0.0.0:{}", config.port).parse()?;
    info!("Listening on {addr}");

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}

/// SMTP when credentials are configured; otherwise every notification reports failure.
fn build_mailer(config: &Config) -> Result<Arc<dyn Mailer>> {
    match &config.smtp {
        Some(smtp) => {
            let mailer = SmtpMailer::new(smtp)?;
            info!(host = %smtp.host, port = smtp.port, sender = %smtp.sender, "SMTP mailer initialized");
            Ok(Arc::new(mailer))
        }
        None => {
            warn!("SMTP_USERNAME/SMTP_PASSWORD not set; send_notification will report failure");
            Ok(Arc::new(DisabledMailer))
        }
    }
}
