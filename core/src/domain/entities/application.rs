//! Application reference consumed by verification and resume flows.

use serde::{Deserialize, Serialize};

/// Read-only projection of an onboarding application
///
/// Application records are owned by the application CRUD layer; this core
/// only reads the fields needed to resolve OTP recipients and build resume
/// notifications.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicationRef {
    /// Internal database identifier
    pub id: i64,

    /// Public application identifier, the plaintext inside resume tokens
    pub app_id: String,

    /// Applicant's first name, used in notification greetings
    pub first_name: String,

    /// Applicant's email address
    pub email: String,

    /// Applicant's registered mobile number
    pub mobile_number: String,

    /// Journey this application belongs to (e.g., "savings", "current")
    pub journey_type: String,
}

impl ApplicationRef {
    /// Creates a new application reference
    pub fn new(
        id: i64,
        app_id: String,
        first_name: String,
        email: String,
        mobile_number: String,
        journey_type: String,
    ) -> Self {
        Self {
            id,
            app_id,
            first_name,
            email,
            mobile_number,
            journey_type,
        }
    }
}
