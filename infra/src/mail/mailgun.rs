//! Mailgun mail channel implementation
//!
//! Sends HTML mail through the Mailgun API. The send itself is delegated to
//! `mailgun-rs`; this wrapper adds recipient validation, a timeout bound and
//! masked logging.

use async_trait::async_trait;
use mailgun_rs::{EmailAddress, Mailgun, MailgunRegion, Message};
use std::time::Duration;
use tracing::info;

use ob_core::errors::DispatchError;
use ob_core::services::channels::MailChannel;
use ob_shared::utils::{masking, validation};

use crate::InfrastructureError;

/// Mailgun configuration
#[derive(Debug, Clone)]
pub struct MailgunConfig {
    /// Mailgun API key
    pub api_key: String,
    /// Sending domain registered with Mailgun
    pub domain: String,
    /// Display name on outgoing mail
    pub from_name: String,
    /// Sender address on outgoing mail
    pub from_address: String,
    /// Timeout for a single send in seconds
    pub send_timeout_secs: u64,
}

impl MailgunConfig {
    /// Create configuration from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let api_key = std::env::var("MAILGUN_API_KEY")
            .map_err(|_| InfrastructureError::Config("MAILGUN_API_KEY not set".to_string()))?;
        let domain = std::env::var("MAILGUN_DOMAIN")
            .map_err(|_| InfrastructureError::Config("MAILGUN_DOMAIN not set".to_string()))?;

        Ok(Self {
            api_key,
            domain,
            from_name: std::env::var("MAIL_FROM_NAME").unwrap_or_else(|_| "Onboard".to_string()),
            from_address: std::env::var("MAIL_FROM_ADDRESS")
                .unwrap_or_else(|_| "no-reply@onboard.example.com".to_string()),
            send_timeout_secs: std::env::var("MAIL_SEND_TIMEOUT_SECS")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(30),
        })
    }
}

/// Mailgun mail channel implementation
pub struct MailgunMailChannel {
    config: MailgunConfig,
}

impl MailgunMailChannel {
    /// Create a new Mailgun mail channel
    pub fn new(config: MailgunConfig) -> Result<Self, InfrastructureError> {
        if config.api_key.is_empty() {
            return Err(InfrastructureError::Config(
                "Mailgun API key is not set".to_string(),
            ));
        }
        if config.domain.is_empty() {
            return Err(InfrastructureError::Config(
                "Mailgun domain is not set".to_string(),
            ));
        }

        info!(domain = %config.domain, "Mailgun mail channel initialized");

        Ok(Self { config })
    }

    /// Create from environment variables
    pub fn from_env() -> Result<Self, InfrastructureError> {
        let config = MailgunConfig::from_env()?;
        Self::new(config)
    }

    fn sender(&self) -> EmailAddress {
        EmailAddress::name_address(&self.config.from_name, &self.config.from_address)
    }
}

#[async_trait]
impl MailChannel for MailgunMailChannel {
    async fn send(
        &self,
        address: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, DispatchError> {
        if !validation::is_valid_email(address) {
            return Err(DispatchError::Email {
                reason: format!("Invalid email address: {}", masking::mask_email(address)),
            });
        }

        let message = Message {
            to: vec![EmailAddress::address(address)],
            subject: subject.to_string(),
            html: html_body.to_string(),
            ..Default::default()
        };

        let client = Mailgun {
            api_key: self.config.api_key.clone(),
            domain: self.config.domain.clone(),
            message,
        };

        let response = tokio::time::timeout(
            Duration::from_secs(self.config.send_timeout_secs),
            client.async_send(MailgunRegion::US, &self.sender()),
        )
        .await
        .map_err(|_| DispatchError::Email {
            reason: format!(
                "Mailgun send timed out after {}s",
                self.config.send_timeout_secs
            ),
        })?
        .map_err(|e| DispatchError::Email {
            reason: format!("Mailgun send failed: {}", e),
        })?;

        info!(
            address = %masking::mask_email(address),
            message_id = %response.id,
            "Email dispatched through Mailgun"
        );

        Ok(response.id)
    }
}
