//! Resume flow service implementation

use std::sync::Arc;

use serde::Serialize;
use tracing;

use ob_shared::config::ResumeLinkConfig;
use ob_shared::utils::masking;

use crate::domain::entities::otp::DispatchMode;
use crate::errors::{DomainError, DomainResult};
use crate::repositories::{ApplicationDirectory, OtpStore};
use crate::services::channels::{MailChannel, SmsChannel};
use crate::services::crypto;
use crate::services::otp::OtpService;

/// Result of a successful resume call
#[derive(Debug, Clone, Serialize)]
pub struct ResumedJourney {
    /// Internal id of the application being resumed
    pub application_id: i64,
    /// Display message naming the masked destination of the OTP
    pub message: String,
}

/// Orchestrates token decryption, application lookup and OTP issuance
pub struct ResumeService<O: OtpStore, A: ApplicationDirectory, S: SmsChannel, M: MailChannel> {
    /// Read-only application lookup
    directory: Arc<A>,
    /// Engine that issues the follow-up passcode
    otp_service: Arc<OtpService<O, A, S, M>>,
    /// Secret key configuration for reading tokens
    config: ResumeLinkConfig,
}

impl<O: OtpStore, A: ApplicationDirectory, S: SmsChannel, M: MailChannel>
    ResumeService<O, A, S, M>
{
    /// Create a new resume flow
    pub fn new(
        directory: Arc<A>,
        otp_service: Arc<OtpService<O, A, S, M>>,
        config: ResumeLinkConfig,
    ) -> Self {
        Self {
            directory,
            otp_service,
            config,
        }
    }

    /// Resume an abandoned application from its link token
    ///
    /// This method:
    /// 1. Decrypts the token into the public application id
    /// 2. Resolves the application through the directory
    /// 3. Issues an SMS passcode to the registered mobile number
    ///
    /// Decryption failures answer with the opaque
    /// [`DomainError::InvalidResumeToken`], whatever the underlying cause.
    ///
    /// # Arguments
    ///
    /// * `token` - The opaque token carried by the resume link
    ///
    /// # Returns
    ///
    /// * `Ok(ResumedJourney)` - Application id plus a message naming the
    ///   masked OTP destination
    /// * `Err(DomainError)` - Unreadable token, unknown application, or a
    ///   dispatch/store failure
    pub async fn resume_journey(&self, token: &str) -> DomainResult<ResumedJourney> {
        let app_id = crypto::decrypt(token, &self.config.secret_key).map_err(|e| {
            tracing::warn!(
                error = %e,
                event = "resume_token_rejected",
                "Resume token failed decryption"
            );
            DomainError::InvalidResumeToken
        })?;

        let application = self
            .directory
            .find_by_app_id(&app_id)
            .await?
            .ok_or_else(|| DomainError::ApplicationNotFound {
                reference: app_id.clone(),
            })?;

        self.otp_service
            .generate(&application.mobile_number, DispatchMode::Sms.as_str())
            .await?;

        let masked = masking::mask_phone(&application.mobile_number);

        tracing::info!(
            application_id = application.id,
            event = "journey_resumed",
            "Resumed application and issued an SMS passcode"
        );

        Ok(ResumedJourney {
            application_id: application.id,
            message: format!("OTP sent to your registered mobile number: {}", masked),
        })
    }
}
