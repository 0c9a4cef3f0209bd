//! Twilio messaging gateway.

mod client;
mod error;
mod provider;
mod types;

pub use client::TwilioClient;
pub use error::ProviderError;
pub use provider::MessagingProvider;
pub use types::{AccountInfo, MessageParams, SentMessage};
