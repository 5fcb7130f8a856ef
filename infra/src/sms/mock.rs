//! Mock SMS channel implementation
//!
//! A mock implementation of the SMS channel for development and testing.
//! Messages are recorded and logged instead of being sent.

use async_trait::async_trait;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, Mutex};
use tracing::{info, warn};
use uuid::Uuid;

use ob_core::errors::DispatchError;
use ob_core::services::channels::SmsChannel;
use ob_shared::utils::{masking, validation};

/// Mock SMS channel for development and testing
///
/// This implementation:
/// - Records every message for later inspection
/// - Validates mobile numbers the way real channels do
/// - Generates mock message ids
/// - Can simulate failures
#[derive(Clone)]
pub struct MockSmsChannel {
    /// Counter for tracking number of messages sent
    message_count: Arc<AtomicU64>,
    /// Recorded (number, message) pairs
    sent: Arc<Mutex<Vec<(String, String)>>>,
    /// Whether to simulate failures (for testing)
    simulate_failure: bool,
    /// Whether to print messages to console
    console_output: bool,
}

impl MockSmsChannel {
    /// Create a new mock SMS channel
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

    /// Get a copy of every recorded (number, message) pair
    pub fn sent_messages(&self) -> Vec<(String, String)> {
        self.sent.lock().unwrap().clone()
    }

    /// Reset the counter and the recorded messages
    pub fn reset(&self) {
        self.message_count.store(0, Ordering::SeqCst);
        self.sent.lock().unwrap().clear();
    }
}

impl Default for MockSmsChannel {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl SmsChannel for MockSmsChannel {
    async fn send(&self, number: &str, message: &str) -> Result<String, DispatchError> {
        if !validation::is_valid_mobile_number(number) {
            return Err(DispatchError::Sms {
                reason: format!("Invalid mobile number: {}", masking::mask_phone(number)),
            });
        }

        if self.simulate_failure {
            warn!(
                number = %masking::mask_phone(number),
                "Mock SMS channel simulating failure"
            );
            return Err(DispatchError::Sms {
                reason: "Simulated SMS sending failure".to_string(),
            });
        }

        let message_id = format!("mock_{}", Uuid::new_v4());
        let count = self.message_count.fetch_add(1, Ordering::SeqCst) + 1;

        {
            let mut sent = self.sent.lock().unwrap();
            sent.push((number.to_string(), message.to_string()));
        }

        if self.console_output {
            println!("\n{}", "=".repeat(60));
            println!("MOCK SMS CHANNEL - MESSAGE #{}", count);
            println!("{}", "=".repeat(60));
            println!("To: {}", masking::mask_phone(number));
            println!("Message ID: {}", message_id);
            println!("Content: {}", message);
            println!("{}\n", "=".repeat(60));
        }

        info!(
            provider = "mock",
            number = %masking::mask_phone(number),
            message_id = %message_id,
            message_length = message.len(),
            "SMS sent successfully (mock)"
        );

        Ok(message_id)
    }
}
