//! Domain-specific error types for OTP issuance and resume-token operations
//!
//! Hard failures only. The soft verification outcomes (already used, wrong
//! code, expired) are legitimate user-facing states and travel as data in
//! `VerificationOutcome`, not as errors.

use thiserror::Error;

/// OTP lifecycle errors
#[derive(Error, Debug)]
pub enum OtpError {
    /// Mode string was neither "sms" nor "email"
    #[error("Invalid dispatch mode: {mode}")]
    InvalidMode { mode: String },

    /// No passcode has ever been issued to the resolved recipient
    #[error("No OTP found for recipient")]
    NotFound,

    /// Verification was requested with neither a recipient nor an application id
    #[error("A recipient or an application id is required")]
    MissingRecipient,
}

/// Channel transport failures, distinguished per channel
///
/// Terminal for the current call: a resend is a fresh generate call, never
/// an automatic retry inside this core.
#[derive(Error, Debug)]
pub enum DispatchError {
    #[error("SMS dispatch failed: {reason}")]
    Sms { reason: String },

    #[error("Email dispatch failed: {reason}")]
    Email { reason: String },
}

/// Resume-token codec failures
#[derive(Error, Debug)]
pub enum CryptoError {
    /// Key material is not exactly 16 bytes
    #[error("Encryption key must be exactly 16 bytes")]
    InvalidKeyLength,

    /// Cipher rejected the plaintext
    #[error("Encryption failed")]
    EncryptionFailed,

    /// Malformed token, failed authentication, or wrong key; a single
    /// variant so callers cannot tell which (no decryption oracle)
    #[error("Decryption failed")]
    DecryptionFailed,
}
