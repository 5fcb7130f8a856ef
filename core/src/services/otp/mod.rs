//! OTP engine: issuance, dispatch, verification and record cleanup.

pub mod cleanup;
pub mod service;
pub mod types;

pub use cleanup::{OtpCleanupConfig, OtpCleanupService};
pub use service::{OtpConfig, OtpService};
pub use types::{OtpReceipt, VerificationOutcome, VerifyRequest};

#[cfg(test)]
mod tests;
