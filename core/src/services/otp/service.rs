//! OTP engine service implementation

use std::sync::Arc;

use constant_time_eq::constant_time_eq;
use tracing;

use ob_shared::utils::masking;

use crate::domain::entities::otp::{DispatchMode, OtpRecord, DEFAULT_EXPIRY_MINUTES};
use crate::errors::{DomainError, DomainResult, OtpError};
use crate::repositories::{ApplicationDirectory, OtpStore};
use crate::services::channels::{MailChannel, SmsChannel};

use super::types::{OtpReceipt, VerificationOutcome, VerifyRequest};

/// Configuration for the OTP engine
#[derive(Debug, Clone)]
pub struct OtpConfig {
    /// Minutes an issued code stays verifiable
    pub expiry_minutes: i64,
}

impl Default for OtpConfig {
    fn default() -> Self {
        Self {
            expiry_minutes: DEFAULT_EXPIRY_MINUTES,
        }
    }
}

/// OTP engine handling issuance, dispatch and verification
///
/// State machine per record: `CREATED(unused)` moves to `VERIFIED(used)`
/// exactly once, or stays unused until the expiry window closes. Expiry is
/// computed at verification time and never stored.
pub struct OtpService<O: OtpStore, A: ApplicationDirectory, S: SmsChannel, M: MailChannel> {
    /// Durable store for issued codes
    store: Arc<O>,
    /// Read-only application lookup
    directory: Arc<A>,
    /// SMS delivery channel
    sms_channel: Arc<S>,
    /// Email delivery channel
    mail_channel: Arc<M>,
    /// Engine configuration
    config: OtpConfig,
}

impl<O: OtpStore, A: ApplicationDirectory, S: SmsChannel, M: MailChannel> OtpService<O, A, S, M> {
    /// Create a new OTP engine
    ///
    /// # Arguments
    ///
    /// * `store` - Durable store for issued codes
    /// * `directory` - Application lookup used when verifying by application id
    /// * `sms_channel` - SMS delivery implementation
    /// * `mail_channel` - Email delivery implementation
    /// * `config` - Engine configuration
    pub fn new(
        store: Arc<O>,
        directory: Arc<A>,
        sms_channel: Arc<S>,
        mail_channel: Arc<M>,
        config: OtpConfig,
    ) -> Self {
        Self {
            store,
            directory,
            sms_channel,
            mail_channel,
            config,
        }
    }

    /// Issue a one-time passcode to a recipient
    ///
    /// This method:
    /// 1. Parses `mode` into the closed channel enum
    /// 2. Draws a uniformly random 6-digit code from the OS CSPRNG
    /// 3. Dispatches the code over the selected channel
    /// 4. Persists the record only after the channel accepted the send
    ///
    /// A channel failure therefore leaves no record behind, and the call is
    /// not complete until the store acknowledges the write.
    ///
    /// # Arguments
    ///
    /// * `recipient` - Phone number or email address, stored verbatim
    /// * `mode` - "sms" or "email", case-insensitive
    ///
    /// # Returns
    ///
    /// * `Ok(OtpReceipt)` - The persisted record plus dispatch details
    /// * `Err(DomainError)` - Invalid mode, channel failure, or store failure
    pub async fn generate(&self, recipient: &str, mode: &str) -> DomainResult<OtpReceipt> {
        let mode = DispatchMode::parse(mode)?;
        let code = OtpRecord::generate_code();
        let masked = mask_recipient(recipient, mode);

        let message_id = match mode {
            DispatchMode::Sms => self.sms_channel.send(recipient, &code).await,
            DispatchMode::Email => {
                let body = format!("Your OTP is: {}", code);
                self.mail_channel
                    .send(recipient, "Your OTP Code", &body)
                    .await
            }
        }
        .map_err(|e| {
            tracing::warn!(
                recipient = %masked,
                mode = %mode,
                error = %e,
                event = "otp_dispatch_failed",
                "Channel rejected one-time passcode"
            );
            e
        })?;

        let record = self
            .store
            .save(OtpRecord::new(recipient.to_string(), code, mode))
            .await?;

        tracing::info!(
            recipient = %masked,
            mode = %mode,
            otp_id = ?record.id,
            event = "otp_generated",
            "Generated and dispatched one-time passcode"
        );

        Ok(OtpReceipt {
            message_id,
            mode,
            message: format!("OTP sent successfully via {}", mode),
            record,
        })
    }

    /// Verify a supplied code against the newest record for its recipient
    ///
    /// Check ordering is fixed: used before code before expiry. A consumed
    /// record reports `AlreadyUsed` even when the supplied code is wrong or
    /// stale. The final flip goes through the store's compare-and-set, so
    /// of any number of simultaneous calls at most one observes `Verified`
    /// and every loser observes `AlreadyUsed`.
    ///
    /// # Arguments
    ///
    /// * `request` - Recipient or application id, plus the supplied code
    ///
    /// # Returns
    ///
    /// * `Ok(VerificationOutcome)` - One of the four soft outcomes
    /// * `Err(DomainError)` - Missing input, unknown application, no record,
    ///   or a store failure
    pub async fn verify(&self, request: VerifyRequest) -> DomainResult<VerificationOutcome> {
        let recipient = self.resolve_recipient(&request).await?;

        let record = self
            .store
            .find_latest_by_recipient(&recipient)
            .await?
            .ok_or(OtpError::NotFound)?;

        let masked = mask_recipient(&recipient, record.mode);

        if record.used {
            return Ok(VerificationOutcome::AlreadyUsed);
        }

        if !Self::constant_time_compare(&record.code, &request.code) {
            tracing::warn!(
                recipient = %masked,
                event = "otp_code_mismatch",
                "Supplied code does not match the newest record"
            );
            return Ok(VerificationOutcome::InvalidCode);
        }

        if record.is_expired(self.config.expiry_minutes) {
            return Ok(VerificationOutcome::Expired);
        }

        let id = record.id.ok_or_else(|| DomainError::Internal {
            message: "OTP record loaded without an id".to_string(),
        })?;

        if self.store.mark_used(id).await? {
            tracing::info!(
                recipient = %masked,
                otp_id = id,
                event = "otp_verified",
                "One-time passcode verified"
            );
            Ok(VerificationOutcome::Verified)
        } else {
            // A concurrent verify consumed the record between our read and
            // the guarded write; the race loser reports AlreadyUsed.
            Ok(VerificationOutcome::AlreadyUsed)
        }
    }

    /// Resolve the channel destination for a verification call
    ///
    /// An application id takes precedence and resolves to the applicant's
    /// registered mobile number. With neither input present the call fails
    /// with `OtpError::MissingRecipient`.
    async fn resolve_recipient(&self, request: &VerifyRequest) -> DomainResult<String> {
        if let Some(application_id) = request.application_id {
            let application = self
                .directory
                .find_by_id(application_id)
                .await?
                .ok_or_else(|| DomainError::ApplicationNotFound {
                    reference: application_id.to_string(),
                })?;
            return Ok(application.mobile_number);
        }

        match &request.recipient {
            Some(recipient) => Ok(recipient.clone()),
            None => Err(OtpError::MissingRecipient.into()),
        }
    }

    /// Perform constant-time comparison of two OTP codes
    ///
    /// # Arguments
    ///
    /// * `stored` - The code on the record
    /// * `provided` - The code supplied by the caller
    ///
    /// # Returns
    ///
    /// `true` if the codes match, `false` otherwise
    fn constant_time_compare(stored: &str, provided: &str) -> bool {
        if stored.len() != provided.len() {
            return false;
        }
        constant_time_eq(stored.as_bytes(), provided.as_bytes())
    }
}

/// Mask a recipient for logging, by channel shape
fn mask_recipient(recipient: &str, mode: DispatchMode) -> String {
    match mode {
        DispatchMode::Sms => masking::mask_phone(recipient),
        DispatchMode::Email => masking::mask_email(recipient),
    }
}
