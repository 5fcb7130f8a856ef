//! SMS channel module
//!
//! Implementations of the core `SmsChannel` port:
//!
//! - **2Factor**: Production SMS via the 2Factor HTTP gateway
//! - **Mock**: Recorded console output for development and tests

pub mod mock;
pub mod two_factor;

// Re-export commonly used types
pub use mock::MockSmsChannel;
pub use two_factor::{TwoFactorConfig, TwoFactorSmsChannel};

use ob_core::services::channels::SmsChannel;

use crate::config::SmsConfig;

/// Create an SMS channel based on configuration
///
/// Returns the implementation named by `config.provider`, falling back to
/// the mock channel when the provider is unknown or cannot be constructed.
///
/// # Arguments
///
/// * `config` - SMS configuration containing provider settings
///
/// # Returns
///
/// A boxed SMS channel implementation
pub fn create_sms_channel(config: &SmsConfig) -> Box<dyn SmsChannel> {
    match config.provider.as_str() {
        "mock" => Box::new(MockSmsChannel::new()),
        "two_factor" => {
            let two_factor_config = TwoFactorConfig {
                base_url: config.base_url.clone(),
                api_key: config.api_key.clone(),
                request_timeout_secs: config.request_timeout_secs,
            };

            match TwoFactorSmsChannel::new(two_factor_config) {
                Ok(channel) => Box::new(channel),
                Err(e) => {
                    tracing::error!("Failed to initialize 2Factor SMS channel: {}", e);
                    tracing::warn!("Falling back to mock SMS channel");
                    Box::new(MockSmsChannel::new())
                }
            }
        }
        _ => {
            tracing::warn!(
                "Unknown SMS provider '{}', using mock implementation",
                config.provider
            );
            Box::new(MockSmsChannel::new())
        }
    }
}
