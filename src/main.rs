//! Service binary: load configuration, prove the provider credentials work,
//! then serve.

use std::sync::Arc;

use anyhow::Context;
use tracing::info;
use tracing_subscriber::EnvFilter;

use warelay::config::Config;
use warelay::server::{AppState, build_app};
use warelay::twilio::{MessagingProvider, TwilioClient};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().context("configuration error")?;

    let provider: Arc<dyn MessagingProvider> = Arc::new(TwilioClient::new(
        config.account_sid.clone(),
        config.auth_token.clone(),
        config.api_base_url.clone(),
    ));

    // Refuse to start on bad credentials rather than failing per-request.
    let account = provider
        .fetch_account()
        .await
        .context("Twilio credential check failed")?;
    info!(account_sid = %account.sid, account_status = %account.status, "Twilio credentials verified");

    let state = AppState {
        provider,
        whatsapp_number: Arc::from(config.whatsapp_number.as_str()),
    };

    let app = build_app(state, config.request_timeout_seconds);
    let addr = format!("{}:{}", config.host, config.port);
    let listener = tokio::net::TcpListener::bind(&addr)
        .await
        .with_context(|| format!("failed to bind {addr}"))?;
    info!(%addr, "Listening");
    axum::serve(listener, app).await.context("server error")?;

    Ok(())
}
