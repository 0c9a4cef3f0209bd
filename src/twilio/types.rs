//! Gateway parameter and result types.

/// Parameters for one provider send call.
///
/// Ephemeral: built per request and dropped once the call returns. Both
/// numbers carry the `whatsapp:` channel tag.
#[derive(Debug, Clone, PartialEq)]
pub struct MessageParams {
    pub from: String,
    pub to: String,
    /// Omitted from the call entirely when `None`.
    pub body: Option<String>,
    /// Omitted from the call entirely when empty.
    pub media_urls: Vec<String>,
}

/// Normalized result of a successful send.
#[derive(Debug, Clone)]
pub struct SentMessage {
    /// Provider-assigned message identifier.
    pub sid: String,
    pub to: String,
    pub body: Option<String>,
    pub num_media: u32,
}

/// Normalized result of the provider's account-fetch operation.
#[derive(Debug, Clone)]
pub struct AccountInfo {
    pub sid: String,
    /// Provider-reported account status, e.g. `active` or `suspended`.
    pub status: String,
}
