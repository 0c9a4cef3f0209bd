//! Configuration verification handler.

use axum::Json;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::error;

use crate::response;
use crate::server::AppState;

#[derive(Serialize)]
pub struct VerifyConfigResponse {
    status: &'static str,
    account_sid: String,
    number_configured: bool,
    auth_working: bool,
    whatsapp_number: String,
    account_status: String,
}

/// GET /verify-config
///
/// Re-issues the credential check against the provider and reports the
/// account it resolves to. Failures surface as a 500 envelope; they never
/// propagate as a panic.
pub async fn verify_config(State(state): State<AppState>) -> Response {
    let account = match state.provider.fetch_account().await {
        Ok(account) => account,
        Err(e) => {
            error!(error = %e, "Configuration verification failed");
            return response::internal_error(format!("Configuration verification failed: {e}"))
                .into_response();
        }
    };

    let response = VerifyConfigResponse {
        status: "ok",
        account_sid: account.sid,
        number_configured: true,
        auth_working: true,
        whatsapp_number: state.whatsapp_number.to_string(),
        account_status: account.status,
    };

    (StatusCode::OK, Json(response)).into_response()
}
