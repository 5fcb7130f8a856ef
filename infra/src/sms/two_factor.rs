//! 2Factor SMS gateway implementation
//!
//! Sends messages through the 2Factor HTTP API. The gateway takes a single
//! GET request with the API key, recipient and message in the path and
//! answers with a small JSON envelope.
//!
//! The API key is part of the request URL, so neither the URL nor raw
//! transport errors (which echo the URL) are ever logged.

use async_trait::async_trait;
use serde::Deserialize;
use std::time::Duration;
use tracing::{debug, info, warn};

use ob_core::errors::DispatchError;
use ob_core::services::channels::SmsChannel;
use ob_shared::utils::{masking, validation};

use crate::InfrastructureError;

/// 2Factor gateway configuration
#[derive(Debug, Clone)]
pub struct TwoFactorConfig {
    /// Gateway base URL
    pub base_url: String,
    /// Gateway API key
    pub api_key: String,
    /// Timeout for API requests in seconds
    pub request_timeout_secs: u64,
}

impl TwoFactorConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_key = std::env::var("SMS_API_KEY")
            .map_err(|_| InfrastructureError::Config("SMS_API_KEY not set".to_string()))?;

        Ok(Self {
            base_url: std::env::var("SMS_BASE_URL")
                .unwrap_or_else(|_| "https://2factor.in/API/V1".to_string()),
            api_key,
            request_timeout_secs: std::env::var("SMS_REQUEST_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Response envelope returned by the 2Factor API
///
/// `Details` carries the session id on success and the failure reason
/// otherwise.
#[derive(Debug, Deserialize)]
struct GatewayResponse {
    #[serde(rename = "Status")]
    status: String,
    #[serde(rename = "Details")]
    details: String,
}

/// 2Factor SMS channel implementation
pub struct TwoFactorSmsChannel {
    client: reqwest::Client,
    config: TwoFactorConfig,
}

impl TwoFactorSmsChannel {
    /// Create a new 2Factor SMS channel
    pub fn new(config: TwoFactorConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "2Factor API key is not set".to_string(),
            ));
        }

        let client = reqwest::Client::builder()
            .timeout(Duration::from_secs(config.request_timeout_secs))
            .build()?;

        info!("2Factor SMS channel initialized");

        Ok(Self { client, config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = TwoFactorConfig::from_env()?;
        Self::new(config)
    }

    /// Build the gateway request URL for a send
    ///
    /// The message travels as a URL path segment, so it goes through the
    /// URL builder instead of string formatting: a resume link full of `/`,
    /// `?` and `=` is percent-encoded into one segment rather than
    /// splitting the request path.
    fn request_url(&self, number: &str, message: &str) -> Result<reqwest::Url, DispatchError> {
        let mut url =
            reqwest::Url::parse(&self.config.base_url).map_err(|_| DispatchError::Sms {
                reason: "Invalid 2Factor base URL".to_string(),
            })?;

        url.path_segments_mut()
            .map_err(|_| DispatchError::Sms {
                reason: "2Factor base URL cannot take path segments".to_string(),
            })?
            .extend([self.config.api_key.as_str(), "SMS", number, message]);

        Ok(url)
    }
}

#[async_trait]
impl SmsChannel for TwoFactorSmsChannel {
    async fn send(&self, number: &str, message: &str) -> Result<String, DispatchError> {
        if !validation::is_valid_mobile_number(number) {
            return Err(DispatchError::Sms {
                reason: format!("Invalid mobile number: {}", masking::mask_phone(number)),
            });
        }

        let url = self.request_url(number, message)?;

        debug!(
            number = %masking::mask_phone(number),
            "Dispatching SMS through 2Factor"
        );

        let response = self.client.get(url).send().await.map_err(|e| {
            // without_url: the URL embeds the API key
            DispatchError::Sms {
                reason: format!("2Factor request failed: {}", e.without_url()),
            }
        })?;

        let status = response.status();
        if !status.is_success() {
            return Err(DispatchError::Sms {
                reason: format!("2Factor returned HTTP {}", status),
            });
        }

        let body: GatewayResponse = response.json().await.map_err(|e| DispatchError::Sms {
            reason: format!("Unreadable 2Factor response: {}", e.without_url()),
        })?;

        if body.status != "Success" {
            warn!(
                number = %masking::mask_phone(number),
                status = %body.status,
                "2Factor rejected the SMS"
            );
            return Err(DispatchError::Sms {
                reason: format!("2Factor rejected the message: {}", body.details),
            });
        }

        info!(
            number = %masking::mask_phone(number),
            session_id = %body.details,
            "SMS dispatched through 2Factor"
        );

        Ok(body.details)
    }
}
