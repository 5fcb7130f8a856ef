//! Mock mail channel implementation
//!
//! A mock implementation of the mail channel for development and testing.
//! Mail is recorded and logged instead of being sent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use ob_core::errors::DispatchError;
use ob_core::services::channels::MailChannel;
use ob_shared::utils::{masking, validation};

/// Mock mail channel for development and testing
///
/// Same shape as the mock SMS channel: recorded sends, a counter, and an
/// optional simulated failure.
#[derive(Clone)]
pub struct MockMailChannel {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Recorded (address, subject, html_body) triples
    sent: Arc<Mutex<Vec<(String, String, String)>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockMailChannel {
    /// Create a new mock mail channel
    pub fn new() -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure: false,
            console_output: true,
        }
    }

    /// Create a mock channel with configurable options
    pub fn with_options(console_output: bool, simulate_failure: bool) -> Self {
        Self {
            message_count: Arc::new(AtomicU64::new(0)),
            sent: Arc::new(Mutex::new(Vec::new())),
            simulate_failure,
            console_output,
        }
    }

    /// Get the total number of messages sent
    pub fn message_count(&self) -> u64 {
        self.message_count.load(Ordering::SeqCst)
    }

    /// Get a copy of every recorded (address, subject, html_body) triple
    pub fn sent_messages(&self) -> Vec<(String, String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Reset the counter and the recorded messages
    pub fn reset(&self) {
        self.message_count.store(0, Ordering::SeqCst);
        self.sent.lock().unwrap().clear();
    }
}

impl Default for MockMailChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl MailChannel for MockMailChannel {
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

        if self.simulate_failure {
            warn!(
                address = %masking::mask_email(address),
                "Mock mail channel simulating failure"
            );
            return Err(DispatchError::Email {
                reason: "Simulated mail sending failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut sent = self.sent.lock().unwrap();
            sent.push((
                address.to_string(),
                subject.to_string(),
                html_body.to_string(),
            ));
        }

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK MAIL CHANNEL - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", masking::mask_email(address));
            println!("Subject: {}", subject);
            println!("Message ID: {}", message_id);
            println!("Body: {}", html_body);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            address = %masking::mask_email(address),
            message_id = %message_id,
            "Email sent successfully (mock)"
        );

        Ok(message_id)
    }
}
