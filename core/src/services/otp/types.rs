//! Request and result types for the OTP engine

use serde::{Deserialize, Serialize};

use crate::domain::entities::otp::{DispatchMode, OtpRecord};

/// Input to a verification call
///
/// Exactly one of `recipient` and `application_id` is expected. When both
/// are present the application id wins and the recipient string is ignored.
#[derive(Debug, Clone)]
pub struct VerifyRequest {
    /// Channel destination exactly as used at generation time
    pub recipient: Option<String>,
    /// Application whose registered mobile number is the target
    pub application_id: Option<i64>,
    /// Code supplied by the caller
    pub code: String,
}

impl VerifyRequest {
    /// Verify against a recipient string (phone number or email address)
    pub fn for_recipient(recipient: String, code: String) -> Self {
        Self {
            recipient: Some(recipient),
            application_id: None,
            code,
        }
    }

    /// Verify against an application's registered mobile number
    pub fn for_application(application_id: i64, code: String) -> Self {
        Self {
            recipient: None,
            application_id: Some(application_id),
            code,
        }
    }
}

/// Result of a successful generation call
///
/// Success is the `Ok` variant itself. `message` is display copy only and
/// is never a contract to be string-matched by callers.
#[derive(Debug, Clone, Serialize)]
pub struct OtpReceipt {
    /// The persisted record with its assigned id
    pub record: OtpRecord,
    /// Message identifier returned by the delivery provider
    pub message_id: String,
    /// Channel the code went out on
    pub mode: DispatchMode,
    /// Human confirmation naming the channel
    pub message: String,
}

/// Outcome of a verification call
///
/// The three non-verified states are legitimate user-facing results, not
/// system faults, so they travel as data rather than as errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum VerificationOutcome {
    /// Code matched an unused, unexpired record; the record is now consumed
    Verified,
    /// The newest record was already consumed, possibly by a concurrent call
    AlreadyUsed,
    /// Supplied code differs from the newest record's code
    InvalidCode,
    /// Code matched but the record is older than the expiry window
    Expired,
}

impl VerificationOutcome {
    /// Whether this outcome consumed the code
    pub fn is_verified(&self) -> bool {
        matches!(self, VerificationOutcome::Verified)
    }

    /// Display copy for the outcome
    pub fn message(&self) -> &'static str {
        match self {
            VerificationOutcome::Verified => "OTP verified successfully.",
            VerificationOutcome::AlreadyUsed => "OTP already used.",
            VerificationOutcome::InvalidCode => "Invalid OTP.",
            VerificationOutcome::Expired => "OTP expired.",
        }
    }
}
