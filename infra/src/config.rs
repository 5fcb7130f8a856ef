//! Infrastructure configuration
//!
//! Provider credentials and connection settings, injected into channel and
//! store constructors at build time. `load_config` is the single environment
//! entry point; every field has a usable development default so a bare
//! environment still assembles a working, mock-backed stack.

use serde::{Deserialize, Serialize};

use ob_shared::config::{DatabaseConfig, ResumeLinkConfig};

/// SMS gateway configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmsConfig {
    /// SMS provider ("two_factor", "mock")
    pub provider: String,
    /// Gateway base URL
    pub base_url: String,
    /// Gateway API key
    pub api_key: String,
    /// Request timeout in seconds
    pub request_timeout_secs: u64,
}

impl Default for SmsConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            base_url: "https://2factor.in/API/V1".to_string(),
            api_key: String::new(),
            request_timeout_secs: 30,
        }
    }
}

impl SmsConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("SMS_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            base_url: std::env::var("SMS_BASE_URL")
                .unwrap_or_else(|_| "https://2factor.in/API/V1".to_string()),
            api_key: std::env::var("SMS_API_KEY").unwrap_or_default(),
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

/// Mail provider configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MailConfig {
    /// Mail provider ("mailgun", "mock")
    pub provider: String,
    /// Provider API key
    pub api_key: String,
    /// Sending domain registered with the provider
    pub domain: String,
    /// Display name on outgoing mail
    pub from_name: String,
    /// Sender address on outgoing mail
    pub from_address: String,
    /// Send timeout in seconds
    pub send_timeout_secs: u64,
}

impl Default for MailConfig {
    fn default() -> Self {
        Self {
            provider: "mock".to_string(),
            api_key: String::new(),
            domain: String::new(),
            from_name: "Onboard".to_string(),
            from_address: "no-reply@onboard.example.com".to_string(),
            send_timeout_secs: 30,
        }
    }
}

impl MailConfig {
    /// Create from environment variables
    pub fn from_env() -> Self {
        Self {
            provider: std::env::var("MAIL_PROVIDER").unwrap_or_else(|_| "mock".to_string()),
            api_key: std::env::var("MAILGUN_API_KEY").unwrap_or_default(),
            domain: std::env::var("MAILGUN_DOMAIN").unwrap_or_default(),
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Onboard".to_string()),
            from_address: std::env::var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "no-reply@onboard.example.com".to_string()),
            send_timeout_secs: std::env::var("MAIL_SEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        }
    }
}

/// Aggregated infrastructure configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct InfraConfig {
    /// Database pool settings
    pub database: DatabaseConfig,
    /// SMS gateway settings
    pub sms: SmsConfig,
    /// Mail provider settings
    pub mail: MailConfig,
    /// Resume-link key and base URL
    pub resume: ResumeLinkConfig,
}

/// Load the full infrastructure configuration from the environment
///
/// Loads `.env` first when present, then reads every section through its
/// `from_env` loader. Numeric variables that fail to parse fall back to
/// their defaults.
pub fn load_config() -> InfraConfig {
    dotenvy::dotenv().ok(); // Load .env file if present

    InfraConfig {
        database: DatabaseConfig::from_env(),
        sms: SmsConfig::from_env(),
        mail: MailConfig::from_env(),
        resume: ResumeLinkConfig::from_env(),
    }
}
