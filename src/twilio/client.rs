//! Twilio REST API client.

use async_trait::async_trait;
use reqwest::Client;
use serde::Deserialize;

use super::error::{ProviderError, clean_message};
use super::provider::MessagingProvider;
use super::types::{AccountInfo, MessageParams, SentMessage};

/// Client for Twilio's `2010-04-01` REST API.
///
/// Holds one reusable HTTP client plus the account credentials. The base URL
/// is injected so tests can point the client at a local mock server.
pub struct TwilioClient {
    client: Client,
    base_url: String,
    account_sid: String,
    auth_token: String,
}

impl TwilioClient {
    pub fn new(account_sid: String, auth_token: String, base_url: String) -> Self {
        Self {
            client: Client::new(),
            base_url,
            account_sid,
            auth_token,
        }
    }

    fn messages_url(&self) -> String {
        format!(
            "{}/2010-04-01/Accounts/{}/Messages.json",
            self.base_url, self.account_sid
        )
    }

    fn account_url(&self) -> String {
        format!("{}/2010-04-01/Accounts/{}.json", self.base_url, self.account_sid)
    }

    /// Map a non-success response to `ProviderError::Api`, preferring the
    /// message embedded in Twilio's error body over the raw text.
    async fn api_error(response: reqwest::Response) -> ProviderError {
        let status = response.status().as_u16();
        let raw = response.text().await.unwrap_or_default();
        let (code, message) = match serde_json::from_str::<ErrorBody>(&raw) {
            Ok(body) => (body.code, body.message),
            Err(_) => (None, raw),
        };
        ProviderError::Api {
            status,
            code,
            message: clean_message(&message),
        }
    }
}

#[async_trait]
impl MessagingProvider for TwilioClient {
    async fn send_message(&self, params: &MessageParams) -> Result<SentMessage, ProviderError> {
        let mut form: Vec<(&str, &str)> = vec![
            ("From", params.from.as_str()),
            ("To", params.to.as_str()),
        ];
        if let Some(body) = &params.body {
            form.push(("Body", body.as_str()));
        }
        for url in &params.media_urls {
            form.push(("MediaUrl", url.as_str()));
        }

        let response = self
            .client
            .post(self.messages_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .form(&form)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let message: MessageBody = response.json().await?;
        // Twilio reports num_media as a decimal string; fall back to the
        // request's media count when it is absent or unparseable.
        let num_media = message
            .num_media
            .as_deref()
            .and_then(|value| value.parse().ok())
            .unwrap_or(params.media_urls.len() as u32);
        Ok(SentMessage {
            sid: message.sid,
            to: message.to,
            body: message.body,
            num_media,
        })
    }

    async fn fetch_account(&self) -> Result<AccountInfo, ProviderError> {
        let response = self
            .client
            .get(self.account_url())
            .basic_auth(&self.account_sid, Some(&self.auth_token))
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(Self::api_error(response).await);
        }

        let account: AccountBody = response.json().await?;
        Ok(AccountInfo {
            sid: account.sid,
            status: account.status,
        })
    }
}

// --- Twilio wire types ---

/// Message resource, reduced to the fields the service echoes.
#[derive(Deserialize)]
struct MessageBody {
    sid: String,
    to: String,
    body: Option<String>,
    num_media: Option<String>,
}

#[derive(Deserialize)]
struct AccountBody {
    sid: String,
    status: String,
}

/// Error body, e.g. `{"code": 21211, "message": "...", "status": 400}`.
#[derive(Deserialize)]
struct ErrorBody {
    code: Option<u32>,
    message: String,
}
