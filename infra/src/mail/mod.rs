//! Mail channel module
//!
//! Implementations of the core `MailChannel` port:
//!
//! - **Mailgun**: Production mail via the Mailgun API
//! - **Mock**: Recorded console output for development and tests

pub mod mailgun;
pub mod mock;

// Re-export commonly used types
pub use mailgun::{MailgunConfig, MailgunMailChannel};
pub use mock::MockMailChannel;

use ob_core::services::channels::MailChannel;

use crate::config::MailConfig;

/// Create a mail channel based on configuration
///
/// Returns the implementation named by `config.provider`, falling back to
/// the mock channel when the provider is unknown or cannot be constructed.
///
/// # Arguments
///
/// * `config` - Mail configuration containing provider settings
///
/// # Returns
///
/// A boxed mail channel implementation
pub fn create_mail_channel(config: &MailConfig) -> Box<dyn MailChannel> {
    match config.provider.as_str() {
        "mock" => Box::new(MockMailChannel::new()),
        "mailgun" => {
            let mailgun_config = MailgunConfig {
                api_key: config.api_key.clone(),
                domain: config.domain.clone(),
                from_name: config.from_name.clone(),
                from_address: config.from_address.clone(),
                send_timeout_secs: config.send_timeout_secs,
            };

            match MailgunMailChannel::new(mailgun_config) {
                Ok(channel) => Box::new(channel),
                Err(e) => {
                    tracing::error!("Failed to initialize Mailgun mail channel: {}", e);
                    tracing::warn!("Falling back to mock mail channel");
                    Box::new(MockMailChannel::new())
                }
            }
        }
        _ => {
            tracing::warn!(
                "Unknown mail provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockMailChannel::new())
        }
    }
}
