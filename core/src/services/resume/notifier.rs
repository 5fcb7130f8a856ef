//! Resume-link notifier
//!
//! Builds the encrypted resume link for an idle application and delivers it
//! over email or SMS. Only a link minted here (with the configured secret)
//! will be accepted by the resume flow later.

use std::sync::Arc;

use tracing;

use ob_shared::config::ResumeLinkConfig;

use crate::domain::entities::application::ApplicationRef;
use crate::domain::entities::otp::DispatchMode;
use crate::errors::DomainResult;
use crate::services::channels::{MailChannel, SmsChannel};
use crate::services::crypto;

/// Builds and dispatches resume links for idle applications
pub struct ResumeNotifier<S: SmsChannel, M: MailChannel> {
    /// SMS delivery channel
    sms_channel: Arc<S>,
    /// Email delivery channel
    mail_channel: Arc<M>,
    /// Secret key and base URL for link construction
    config: ResumeLinkConfig,
}

impl<S: SmsChannel, M: MailChannel> ResumeNotifier<S, M> {
    /// Create a new notifier
    pub fn new(sms_channel: Arc<S>, mail_channel: Arc<M>, config: ResumeLinkConfig) -> Self {
        Self {
            sms_channel,
            mail_channel,
            config,
        }
    }

    /// Dispatch a resume notification over the requested channel
    ///
    /// # Returns
    ///
    /// The provider message id of the dispatched notification.
    pub async fn notify(
        &self,
        channel: DispatchMode,
        application: &ApplicationRef,
    ) -> DomainResult<String> {
        match channel {
            DispatchMode::Email => self.send_resume_email(application).await,
            DispatchMode::Sms => self.send_resume_sms(application).await,
        }
    }

    /// Email the applicant a resume link
    ///
    /// The body greets the applicant by first name, names the journey type
    /// and carries the encrypted link.
    pub async fn send_resume_email(&self, application: &ApplicationRef) -> DomainResult<String> {
        let link = self.build_resume_link(&application.app_id)?;

        let subject = format!(
            "Just One Step Away – Resume Your Journey Today {}",
            application.app_id
        );
        let html_body = format!(
            "<p>Dear {first_name},</p><p>Your {journey} journey is just one step away from completion. Use the secure link below to pick up right where you left off.</p><p><a href=\"{link}\">Resume Application</a></p><p>If you did not request this, you can ignore this email.</p>",
            first_name = application.first_name,
            journey = application.journey_type,
            link = link
        );

        let message_id = self
            .mail_channel
            .send(&application.email, &subject, &html_body)
            .await?;

        tracing::info!(
            application_id = application.id,
            event = "resume_email_sent",
            "Dispatched resume link by email"
        );

        Ok(message_id)
    }

    /// Text the applicant a resume link
    pub async fn send_resume_sms(&self, application: &ApplicationRef) -> DomainResult<String> {
        let link = self.build_resume_link(&application.app_id)?;
        let message = format!(
            "Resume your {} application here: {}",
            application.journey_type, link
        );

        let message_id = self
            .sms_channel
            .send(&application.mobile_number, &message)
            .await?;

        tracing::info!(
            application_id = application.id,
            event = "resume_sms_sent",
            "Dispatched resume link by SMS"
        );

        Ok(message_id)
    }

    /// Spawn a notification without awaiting its outcome
    ///
    /// Failures are logged and never propagate to the caller.
    pub fn notify_in_background(
        self: &Arc<Self>,
        channel: DispatchMode,
        application: ApplicationRef,
    ) where
        S: 'static,
        M: 'static,
    {
        let notifier = Arc::clone(self);
        tokio::spawn(async move {
            if let Err(e) = notifier.notify(channel, &application).await {
                tracing::error!(
                    application_id = application.id,
                    error = %e,
                    event = "resume_notification_failed",
                    "Background resume notification failed"
                );
            }
        });
    }

    /// Encrypt the public application id into a full resume link
    fn build_resume_link(&self, app_id: &str) -> DomainResult<String> {
        let token = crypto::encrypt(app_id, &self.config.secret_key)?;
        Ok(format!("{}{}", self.config.base_url, token))
    }
}
