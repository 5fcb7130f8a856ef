//! Domain entities representing core business objects.

pub mod application;
pub mod otp;

// Re-export commonly used types
pub use application::ApplicationRef;
pub use otp::{DispatchMode, OtpRecord, CODE_LENGTH, DEFAULT_EXPIRY_MINUTES};
