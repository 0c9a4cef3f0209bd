//! Inbound request validation.
//!
//! Every field is checked independently and all violations are reported
//! together, so a caller can fix a bad request in one round trip. Nothing
//! here touches the network; a request that fails validation never reaches
//! the provider.

use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};
use url::Url;

// ============================================================================
// Request/Validated Types
// ============================================================================

/// Body of `POST /send-whatsapp/`.
#[derive(Debug, Deserialize)]
pub struct SendMessageRequest {
    /// Recipient in `whatsapp:+<digits>` form.
    pub to: String,
    /// Message text. May be omitted when media is supplied.
    #[serde(default)]
    pub body: Option<String>,
    /// Media attachment URLs.
    #[serde(default)]
    pub media_url: Option<Vec<String>>,
}

/// A request that passed every field check.
///
/// The body is trimmed, and a whitespace-only body collapses to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct ValidMessage {
    pub to: String,
    pub body: Option<String>,
    pub media_urls: Vec<String>,
}

/// One field-level contract violation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldViolation {
    pub field: &'static str,
    pub message: String,
}

// ============================================================================
// Rules
// ============================================================================

const MAX_BODY_CHARS: usize = 1600;
const MAX_MEDIA_URL_CHARS: usize = 2000;
const ALLOWED_MEDIA_EXTENSIONS: [&str; 6] = [".png", ".jpg", ".jpeg", ".pdf", ".doc", ".docx"];

static RECIPIENT_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^whatsapp:\+[0-9]{10,15}$").expect("valid pattern"));

/// Check every field of a raw request, collecting all violations.
pub fn validate(request: &SendMessageRequest) -> Result<ValidMessage, Vec<FieldViolation>> {
    let mut violations = Vec::new();

    if let Some(violation) = check_recipient(&request.to) {
        violations.push(violation);
    }

    let body = normalize_body(request.body.as_deref());
    if let Some(text) = &body
        && text.chars().count() > MAX_BODY_CHARS
    {
        violations.push(FieldViolation {
            field: "body",
            message: format!("body must be at most {MAX_BODY_CHARS} characters after trimming"),
        });
    }

    let media_urls = request.media_url.clone().unwrap_or_default();
    for raw in &media_urls {
        if let Some(violation) = check_media_url(raw) {
            violations.push(violation);
        }
    }

    if body.is_none() && media_urls.is_empty() {
        violations.push(FieldViolation {
            field: "body",
            message: "either body or media_url must be provided".to_string(),
        });
    }

    if violations.is_empty() {
        Ok(ValidMessage {
            to: request.to.clone(),
            body,
            media_urls,
        })
    } else {
        Err(violations)
    }
}

fn check_recipient(to: &str) -> Option<FieldViolation> {
    if RECIPIENT_PATTERN.is_match(to) {
        return None;
    }
    Some(FieldViolation {
        field: "to",
        message: "recipient must be in the format \"whatsapp:+254716160370\" (10-15 digits)"
            .to_string(),
    })
}

/// Trimmed body, with whitespace-only collapsing to `None`.
fn normalize_body(body: Option<&str>) -> Option<String> {
    let trimmed = body?.trim();
    if trimmed.is_empty() {
        None
    } else {
        Some(trimmed.to_string())
    }
}

fn check_media_url(raw: &str) -> Option<FieldViolation> {
    if raw.chars().count() > MAX_MEDIA_URL_CHARS {
        return Some(FieldViolation {
            field: "media_url",
            message: format!("media URL must be at most {MAX_MEDIA_URL_CHARS} characters"),
        });
    }

    let parsed = match Url::parse(raw) {
        Ok(url) if url.has_host() => url,
        _ => {
            return Some(FieldViolation {
                field: "media_url",
                message: format!("media URL must be an absolute URL with scheme and host: '{raw}'"),
            });
        }
    };

    let path = parsed.path().to_lowercase();
    if !ALLOWED_MEDIA_EXTENSIONS.iter().any(|ext| path.ends_with(ext)) {
        return Some(FieldViolation {
            field: "media_url",
            message: format!(
                "media URL must end with one of: {}",
                ALLOWED_MEDIA_EXTENSIONS.join(", ")
            ),
        });
    }

    None
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    fn request(to: &str, body: Option<&str>, media: Option<Vec<&str>>) -> SendMessageRequest {
        SendMessageRequest {
            to: to.to_string(),
            body: body.map(|b| b.to_string()),
            media_url: media.map(|urls| urls.into_iter().map(|u| u.to_string()).collect()),
        }
    }

    fn fields(violations: &[FieldViolation]) -> Vec<&'static str> {
        violations.iter().map(|v| v.field).collect()
    }

    #[test]
    fn accepts_text_message() {
        let valid = validate(&request("whatsapp:+254716160370", Some("hello"), None)).unwrap();
        assert_eq!(valid.to, "whatsapp:+254716160370");
        assert_eq!(valid.body.as_deref(), Some("hello"));
        assert!(valid.media_urls.is_empty());
    }

    #[test]
    fn trims_body_whitespace() {
        let valid = validate(&request("whatsapp:+254716160370", Some("  hi  \n"), None)).unwrap();
        assert_eq!(valid.body.as_deref(), Some("hi"));
    }

    #[test]
    fn rejects_recipient_without_channel_tag() {
        let err = validate(&request("+254716160370", Some("hello"), None)).unwrap_err();
        assert_eq!(fields(&err), vec!["to"]);
    }

    #[test]
    fn rejects_recipient_with_bad_digits() {
        for to in [
            "whatsapp:+",
            "whatsapp:+123456789",        // 9 digits, too short
            "whatsapp:+1234567890123456", // 16 digits, too long
            "whatsapp:+12345abc90",
            "whatsapp:254716160370",
            "Whatsapp:+254716160370",
            "whatsapp:+2547161 0370",
        ] {
            let err = validate(&request(to, Some("hello"), None)).unwrap_err();
            assert_eq!(fields(&err), vec!["to"], "should reject {to}");
        }
    }

    #[test]
    fn rejects_empty_body_without_media() {
        for body in [None, Some(""), Some("   \t\n")] {
            let err = validate(&request("whatsapp:+254716160370", body, None)).unwrap_err();
            assert_eq!(fields(&err), vec!["body"]);
        }
    }

    #[test]
    fn rejects_empty_body_and_no_media_even_with_bad_recipient() {
        let err = validate(&request("not-a-number", Some("  "), None)).unwrap_err();
        assert_eq!(fields(&err), vec!["to", "body"]);
    }

    #[test]
    fn rejects_overlong_body() {
        let long = "x".repeat(MAX_BODY_CHARS + 1);
        let err = validate(&request("whatsapp:+254716160370", Some(&long), None)).unwrap_err();
        assert_eq!(fields(&err), vec!["body"]);

        let max = "x".repeat(MAX_BODY_CHARS);
        assert!(validate(&request("whatsapp:+254716160370", Some(&max), None)).is_ok());
    }

    #[test]
    fn accepts_media_only_message() {
        let valid = validate(&request(
            "whatsapp:+254716160370",
            Some("   "),
            Some(vec!["https://example.com/photo.jpg"]),
        ))
        .unwrap();
        assert_eq!(valid.body, None);
        assert_eq!(valid.media_urls, vec!["https://example.com/photo.jpg"]);
    }

    #[test]
    fn rejects_media_url_without_scheme_or_host() {
        for url in ["example.com/a.png", "/relative/a.png", "https:///a.png"] {
            let err = validate(&request("whatsapp:+254716160370", None, Some(vec![url])))
                .unwrap_err();
            assert_eq!(fields(&err), vec!["media_url"], "should reject {url}");
        }
    }

    #[test]
    fn rejects_media_url_with_disallowed_extension() {
        for url in [
            "https://example.com/movie.mp4",
            "https://example.com/page.html",
            "https://example.com/image",
            // extension must be on the path, not the query
            "https://example.com/image?format=.png",
        ] {
            let err = validate(&request("whatsapp:+254716160370", None, Some(vec![url])))
                .unwrap_err();
            assert_eq!(fields(&err), vec!["media_url"], "should reject {url}");
        }
    }

    #[test]
    fn media_extension_check_is_case_insensitive() {
        assert!(
            validate(&request(
                "whatsapp:+254716160370",
                None,
                Some(vec!["https://example.com/SCAN.PDF"]),
            ))
            .is_ok()
        );
    }

    #[test]
    fn rejects_overlong_media_url() {
        let long = format!("https://example.com/{}.png", "a".repeat(MAX_MEDIA_URL_CHARS));
        let err =
            validate(&request("whatsapp:+254716160370", None, Some(vec![&long]))).unwrap_err();
        assert_eq!(fields(&err), vec!["media_url"]);
    }

    #[test]
    fn one_bad_url_fails_the_batch() {
        let err = validate(&request(
            "whatsapp:+254716160370",
            None,
            Some(vec![
                "https://example.com/ok.png",
                "https://example.com/bad.exe",
            ]),
        ))
        .unwrap_err();
        assert_eq!(fields(&err), vec!["media_url"]);
    }

    #[test]
    fn collects_violations_across_all_fields() {
        let long = "x".repeat(MAX_BODY_CHARS + 1);
        let err = validate(&request(
            "whatsapp:bad",
            Some(&long),
            Some(vec!["ftp-nope"]),
        ))
        .unwrap_err();
        assert_eq!(fields(&err), vec!["to", "body", "media_url"]);
    }
}
