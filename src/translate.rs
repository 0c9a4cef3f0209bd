//! Mapping from a validated request to the provider call shape.

use crate::twilio::MessageParams;
use crate::validate::ValidMessage;

/// Channel tag the provider requires on WhatsApp-addressed numbers.
pub const CHANNEL_TAG: &str = "whatsapp:";

/// Build the provider call parameters for one send.
///
/// Pure and infallible: the message has already passed validation and the
/// sender number shape is enforced at startup. The recipient already carries
/// the channel tag; the configured sender number gets it here.
pub fn to_message_params(message: ValidMessage, sender_number: &str) -> MessageParams {
    MessageParams {
        from: format!("{CHANNEL_TAG}{sender_number}"),
        to: message.to,
        body: message.body,
        media_urls: message.media_urls,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SENDER: &str = "+14155238886";

    #[test]
    fn tags_sender_and_passes_text_through() {
        let params = to_message_params(
            ValidMessage {
                to: "whatsapp:+254716160370".to_string(),
                body: Some("Hello from Twilio WhatsApp API Test".to_string()),
                media_urls: Vec::new(),
            },
            SENDER,
        );
        assert_eq!(params.from, "whatsapp:+14155238886");
        assert_eq!(params.to, "whatsapp:+254716160370");
        assert_eq!(params.body.as_deref(), Some("Hello from Twilio WhatsApp API Test"));
        assert!(params.media_urls.is_empty());
    }

    #[test]
    fn media_only_message_omits_body() {
        let params = to_message_params(
            ValidMessage {
                to: "whatsapp:+254716160370".to_string(),
                body: None,
                media_urls: vec!["https://example.com/photo.jpg".to_string()],
            },
            SENDER,
        );
        assert_eq!(params.body, None);
        assert_eq!(params.media_urls, vec!["https://example.com/photo.jpg"]);
    }

    #[test]
    fn carries_both_body_and_media() {
        let params = to_message_params(
            ValidMessage {
                to: "whatsapp:+254716160370".to_string(),
                body: Some("Check out this test image!".to_string()),
                media_urls: vec![
                    "https://example.com/a.png".to_string(),
                    "https://example.com/b.pdf".to_string(),
                ],
            },
            SENDER,
        );
        assert_eq!(params.body.as_deref(), Some("Check out this test image!"));
        assert_eq!(params.media_urls.len(), 2);
    }
}
