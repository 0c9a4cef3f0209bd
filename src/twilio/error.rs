//! Gateway error taxonomy and provider message cleaning.

use std::sync::LazyLock;

use regex::Regex;
use thiserror::Error;

/// Errors that can occur when calling the messaging provider.
#[derive(Debug, Error)]
pub enum ProviderError {
    /// The provider received the call and rejected it.
    #[error("provider error (status {status}): {message}")]
    Api {
        status: u16,
        /// Provider-assigned numeric error code, when the response carried one.
        code: Option<u32>,
        /// Human-readable message, already passed through [`clean_message`].
        message: String,
    },

    /// The call never completed (network unreachable, timeout).
    #[error("request to provider failed: {0}")]
    Transport(#[from] reqwest::Error),
}

static ANSI_ESCAPES: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\x1b\[[0-9;]*m").expect("valid pattern"));

static CREATE_RECORD: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"Unable to create record:\s*([^\n]+)").expect("valid pattern"));

/// Strip terminal noise from a raw provider message.
///
/// Twilio's SDK-facing errors ship with ANSI color codes and wrap the useful
/// part in an `Unable to create record: <reason>` envelope. Callers get back
/// `<reason>` alone when that envelope is present, otherwise the full text,
/// with escape sequences and control characters removed either way.
pub fn clean_message(raw: &str) -> String {
    let stripped = ANSI_ESCAPES.replace_all(raw, "");
    let message = match CREATE_RECORD.captures(&stripped) {
        Some(captures) => captures[1].to_string(),
        None => stripped.into_owned(),
    };
    message
        .chars()
        .filter(|c| !c.is_control())
        .collect::<String>()
        .trim()
        .to_string()
}
