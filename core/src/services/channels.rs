//! Outbound delivery channels used by the OTP and resume services.
//!
//! The channels are modeled as traits so that the engine never depends on a
//! concrete provider. Infrastructure supplies gateway-backed implementations,
//! tests supply in-memory ones.

use async_trait::async_trait;

use crate::errors::DispatchError;

/// Delivery channel for text messages.
///
/// # Arguments
///
/// Implementations receive the destination number exactly as stored on the
/// OTP record and must not normalize it.
#[async_trait]
pub trait SmsChannel: Send + Sync {
    /// Sends `message` to `number`.
    ///
    /// # Returns
    ///
    /// The provider's message identifier on success, or a
    /// [`DispatchError::Sms`] describing the failure.
    async fn send(&self, number: &str, message: &str) -> Result<String, DispatchError>;
}

/// Delivery channel for transactional email.
#[async_trait]
pub trait MailChannel: Send + Sync {
    /// Sends an HTML email to `address`.
    async fn send(
        &self,
        address: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, DispatchError>;
}

// Boxed channels delegate to the inner implementation so that services can be
// built from factory-produced trait objects.
#[async_trait]
impl SmsChannel for Box<dyn SmsChannel> {
    async fn send(&self, number: &str, message: &str) -> Result<String, DispatchError> {
        self.as_ref().send(number, message).await
    }
}

#[async_trait]
impl MailChannel for Box<dyn MailChannel> {
    async fn send(
        &self,
        address: &str,
        subject: &str,
        html_body: &str,
    ) -> Result<String, DispatchError> {
        self.as_ref().send(address, subject, html_body).await
    }
}
