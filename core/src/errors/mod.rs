//! Domain-specific error types and error handling.

mod types;

// Re-export all error types
pub use types::{CryptoError, DispatchError, OtpError};

use thiserror::Error;

/// Core domain errors (general purpose)
#[derive(Error, Debug)]
pub enum DomainError {
    #[error("Application not found: {reference}")]
    ApplicationNotFound { reference: String },

    /// Opaque resume-flow failure covering every way a token can be bad
    #[error("Resume token could not be read")]
    InvalidResumeToken,

    #[error("Internal error: {message}")]
    Internal { message: String },

    // Bridge to specific error types
    #[error(transparent)]
    Otp(#[from] OtpError),

    #[error(transparent)]
    Dispatch(#[from] DispatchError),

    #[error(transparent)]
    Crypto(#[from] CryptoError),
}

pub type DomainResult<T> = Result<T, DomainError>;
