//! One-time passcode entity and dispatch channel selection.

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use rand::{rngs::OsRng, Rng};
use serde::{Deserialize, Serialize};

use crate::errors::OtpError;

/// Length of the passcode
pub const CODE_LENGTH: usize = 6;

/// Default expiry window for passcodes (5 minutes)
pub const DEFAULT_EXPIRY_MINUTES: i64 = 5;

// Code range; the lower bound keeps every code at six digits
const CODE_MIN: u32 = 100_000;
const CODE_MAX: u32 = 999_999;

/// Channel over which a passcode or resume link is delivered
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DispatchMode {
    Sms,
    Email,
}

impl DispatchMode {
    /// Parse a caller-supplied mode string
    ///
    /// Accepts exactly "sms" or "email", case-insensitive. Anything else
    /// fails with `OtpError::InvalidMode` before any dispatch or persistence
    /// happens.
    pub fn parse(mode: &str) -> Result<Self, OtpError> {
        if mode.eq_ignore_ascii_case("sms") {
            Ok(Self::Sms)
        } else if mode.eq_ignore_ascii_case("email") {
            Ok(Self::Email)
        } else {
            Err(OtpError::InvalidMode {
                mode: mode.to_string(),
            })
        }
    }

    /// Canonical lowercase name of the channel
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Sms => "sms",
            Self::Email => "email",
        }
    }
}

impl fmt::Display for DispatchMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// One-time passcode issued to a recipient over a specific channel
///
/// Lifecycle: created unused by generation, flipped to used exactly once by
/// a successful verification, and eventually purged by the retention
/// sweeper. Expiry is computed against `created_at` at verification time
/// and never stored.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OtpRecord {
    /// Database identifier; `None` until the record is persisted
    pub id: Option<i64>,

    /// Phone number or email address the code was sent to
    pub recipient: String,

    /// The 6-digit passcode
    pub code: String,

    /// Channel used to deliver this instance
    pub mode: DispatchMode,

    /// Whether the code has been successfully used
    pub used: bool,

    /// Timestamp when the record was created; immutable afterward
    pub created_at: DateTime<Utc>,
}

impl OtpRecord {
    /// Creates a new unused record carrying an already-generated code
    pub fn new(recipient: String, code: String, mode: DispatchMode) -> Self {
        Self {
            id: None,
            recipient,
            code,
            mode,
            used: false,
            created_at: Utc::now(),
        }
    }

    /// Generates a uniformly random 6-digit code
    ///
    /// Uses OsRng (OS-provided CSPRNG). The range [100000, 999999] keeps
    /// every code at exactly six digits.
    ///
    /// # Returns
    ///
    /// A 6-digit passcode as a string
    pub fn generate_code() -> String {
        let mut rng = OsRng;
        let code: u32 = rng.gen_range(CODE_MIN..=CODE_MAX);
        code.to_string()
    }

    /// Checks whether the record is older than the given expiry window
    ///
    /// # Arguments
    ///
    /// * `expiry_minutes` - Width of the validity window in minutes
    ///
    /// # Returns
    ///
    /// `true` if the code has expired, `false` otherwise
    pub fn is_expired(&self, expiry_minutes: i64) -> bool {
        Utc::now() > self.created_at + Duration::minutes(expiry_minutes)
    }
}
