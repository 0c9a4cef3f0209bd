use std::sync::Arc;
use std::time::Duration;

use axum::Router;
use axum::http::StatusCode;
use axum::routing::{get, post};
use tower_http::cors::CorsLayer;
use tower_http::timeout::TimeoutLayer;

use crate::handlers;
use crate::twilio::MessagingProvider;

/// Shared application state.
#[derive(Clone)]
pub struct AppState {
    /// Messaging provider the send path relays through.
    pub provider: Arc<dyn MessagingProvider>,
    /// Bare sender number from configuration, without the channel tag.
    pub whatsapp_number: Arc<str>,
}

pub fn build_app(state: AppState, request_timeout_secs: u64) -> Router {
    Router::new()
        .route("/", get(handlers::index))
        .route("/verify-config", get(handlers::verify_config))
        .route("/send-whatsapp/", post(handlers::send_whatsapp))
        .with_state(state)
        .layer(CorsLayer::permissive())
        .layer(TimeoutLayer::with_status_code(
            StatusCode::REQUEST_TIMEOUT,
            Duration::from_secs(request_timeout_secs),
        ))
}
