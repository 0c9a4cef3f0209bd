//! Message send handler.

use axum::Json;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use serde::Serialize;
use tracing::{error, info, warn};

use crate::response;
use crate::server::AppState;
use crate::translate::to_message_params;
use crate::twilio::ProviderError;
use crate::validate::{SendMessageRequest, validate};

// ============================================================================
// Response Types
// ============================================================================

#[derive(Serialize)]
pub struct SendMessageResponse {
    status: &'static str,
    message_sid: String,
    to: String,
    body: Option<String>,
    num_media: u32,
}

// ============================================================================
// Handlers
// ============================================================================

/// POST /send-whatsapp/
///
/// Validates the request, translates it into provider call parameters and
/// relays it. The provider is invoked at most once; a request that fails
/// parsing or validation never reaches it.
pub async fn send_whatsapp(
    State(state): State<AppState>,
    payload: Result<Json<SendMessageRequest>, JsonRejection>,
) -> Response {
    let Json(request) = match payload {
        Ok(json) => json,
        Err(rejection) => {
            return response::malformed_input(rejection.body_text()).into_response();
        }
    };

    let message = match validate(&request) {
        Ok(message) => message,
        Err(violations) => {
            return response::validation_failed(violations).into_response();
        }
    };

    let params = to_message_params(message, &state.whatsapp_number);

    let sent = match state.provider.send_message(&params).await {
        Ok(sent) => sent,
        Err(ProviderError::Api { status, code, message }) => {
            warn!(status, code, to = %params.to, "Provider rejected send");
            return response::api_error(message).into_response();
        }
        Err(e) => {
            error!(error = %e, "Provider call failed");
            return response::internal_error("Failed to reach messaging provider")
                .into_response();
        }
    };

    info!(sid = %sent.sid, to = %sent.to, num_media = sent.num_media, "Message sent");

    let response = SendMessageResponse {
        status: "success",
        message_sid: sent.sid,
        to: sent.to,
        body: sent.body,
        num_media: sent.num_media,
    };

    (StatusCode::OK, Json(response)).into_response()
}
