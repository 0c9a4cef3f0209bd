use thiserror::Error;

// ============================================================================
// Config
// ============================================================================

/// Process configuration, read from the environment once at startup and held
/// read-only for the process lifetime.
#[derive(Debug, Clone)]
pub struct Config {
    pub account_sid: String,
    pub auth_token: String,
    /// WhatsApp-enabled sender number in `+<digits>` form, without the
    /// `whatsapp:` channel tag. The tag is added when building call params.
    pub whatsapp_number: String,
    pub host: String,
    pub port: u16,
    pub request_timeout_seconds: u64,
    /// Twilio API base URL. Overridable so tests can target a local mock.
    pub api_base_url: String,
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(get: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let account_sid = require(&get, "TWILIO_ACCOUNT_SID")?;
        let auth_token = require(&get, "TWILIO_AUTH_TOKEN")?;
        let whatsapp_number = require(&get, "TWILIO_WHATSAPP_NUMBER")?;

        if !is_bare_number(&whatsapp_number) {
            return Err(ConfigError::Invalid {
                name: "TWILIO_WHATSAPP_NUMBER",
                reason: format!("expected +<digits> without the whatsapp: prefix, got '{whatsapp_number}'"),
            });
        }

        let host = get("WARELAY_HOST").unwrap_or_else(default_host);
        let port = match get("WARELAY_PORT") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "WARELAY_PORT",
                reason: format!("not a valid port number: '{raw}'"),
            })?,
            None => default_port(),
        };
        let request_timeout_seconds = match get("WARELAY_REQUEST_TIMEOUT_SECONDS") {
            Some(raw) => raw.parse().map_err(|_| ConfigError::Invalid {
                name: "WARELAY_REQUEST_TIMEOUT_SECONDS",
                reason: format!("not a valid number of seconds: '{raw}'"),
            })?,
            None => default_request_timeout(),
        };
        let api_base_url = get("TWILIO_API_BASE_URL")
            .map(|url| url.trim_end_matches('/').to_string())
            .unwrap_or_else(default_api_base_url);

        Ok(Self {
            account_sid,
            auth_token,
            whatsapp_number,
            host,
            port,
            request_timeout_seconds,
            api_base_url,
        })
    }
}

/// A variable set to whitespace counts as missing.
fn require(get: &impl Fn(&str) -> Option<String>, name: &'static str) -> Result<String, ConfigError> {
    match get(name) {
        Some(value) if !value.trim().is_empty() => Ok(value),
        _ => Err(ConfigError::Missing(name)),
    }
}

fn is_bare_number(value: &str) -> bool {
    match value.strip_prefix('+') {
        Some(digits) => !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()),
        None => false,
    }
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    8000
}

fn default_request_timeout() -> u64 {
    30
}

fn default_api_base_url() -> String {
    "https://api.twilio.com".to_string()
}

// ============================================================================
// ConfigError
// ============================================================================

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("missing required environment variable: {0}")]
    Missing(&'static str),

    #[error("invalid value for {name}: {reason}")]
    Invalid { name: &'static str, reason: String },
}

// ============================================================================
// Tests
// ============================================================================
