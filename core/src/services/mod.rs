//! Business services containing domain logic and use cases.

pub mod channels;
pub mod crypto;
pub mod otp;
pub mod resume;

// Re-export commonly used types
pub use channels::{MailChannel, SmsChannel};
pub use otp::{
    OtpCleanupConfig, OtpCleanupService, OtpConfig, OtpReceipt, OtpService, VerificationOutcome,
    VerifyRequest,
};
pub use resume::{ResumeNotifier, ResumeService, ResumedJourney};
