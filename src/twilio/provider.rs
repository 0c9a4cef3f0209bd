//! Messaging provider trait.

use async_trait::async_trait;

use super::error::ProviderError;
use super::types::{AccountInfo, MessageParams, SentMessage};

/// Seam between the HTTP surface and the external messaging provider.
///
/// Handlers hold this as a trait object so tests can substitute a fake.
/// Neither operation retries; a failed call surfaces as a `ProviderError`.
#[async_trait]
pub trait MessagingProvider: Send + Sync {
    /// Send one message. Invoked at most once per inbound request.
    async fn send_message(&self, params: &MessageParams) -> Result<SentMessage, ProviderError>;

    /// Fetch the configured account, proving the credentials work.
    async fn fetch_account(&self) -> Result<AccountInfo, ProviderError>;
}
