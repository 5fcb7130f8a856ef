//! # Infrastructure Layer
//!
//! This crate implements the infrastructure layer for the onboarding
//! backend. It provides concrete implementations for the outbound ports the
//! core defines: passcode and application persistence, SMS dispatch, and
//! mail dispatch.
//!
//! ## Architecture
//!
//! The infrastructure layer contains:
//! - **Database**: MySQL implementations using SQLx
//! - **SMS**: 2Factor gateway plus a mock channel
//! - **Mail**: Mailgun plus a mock channel
//! - **Config**: Environment-driven provider and pool settings

// Re-export core types for convenience
pub use ob_core::errors::*;

/// Configuration module for infrastructure services
pub mod config;

/// Database module - MySQL implementations using SQLx
pub mod database;

/// Mail channel module - External mail providers
pub mod mail;

/// SMS channel module - External SMS providers
pub mod sms;

use ob_core::services::channels::{MailChannel, SmsChannel};

use database::DatabasePool;

/// Assembled infrastructure services
///
/// Everything the composition root needs to build the core services: a
/// connection pool for the MySQL store and directory, plus the configured
/// dispatch channels.
pub struct InfrastructureServices {
    /// Database connection pool
    pub pool: DatabasePool,
    /// SMS dispatch channel
    pub sms: Box<dyn SmsChannel>,
    /// Mail dispatch channel
    pub mail: Box<dyn MailChannel>,
    /// Resume-link configuration loaded alongside the providers
    pub resume: ob_shared::config::ResumeLinkConfig,
}

impl InfrastructureServices {
    /// Release long-lived resources during shutdown
    ///
    /// Drains the connection pool; the dispatch channels hold nothing that
    /// outlives their requests.
    pub async fn shutdown(&self) {
        self.pool.close().await;
    }
}

/// Initialize infrastructure services from the environment
///
/// This function sets up:
/// - The database connection pool, verified with a health check
/// - The configured SMS channel
/// - The configured mail channel
pub async fn initialize() -> Result<InfrastructureServices, InfrastructureError> {
    tracing::info!("Initializing infrastructure services...");

    let config = config::load_config();

    let pool = DatabasePool::new(config.database).await?;
    pool.health_check().await?;
    tracing::info!("Database ready ({})", pool.get_statistics());

    let sms = sms::create_sms_channel(&config.sms);
    let mail = mail::create_mail_channel(&config.mail);

    tracing::info!("Infrastructure services initialized successfully");

    Ok(InfrastructureServices {
        pool,
        sms,
        mail,
        resume: config.resume,
    })
}

/// Infrastructure-specific error types
///
/// Faults in assembling the infrastructure itself. Once a channel or store
/// is running, its failures travel as core `DomainError`/`DispatchError`
/// values instead.
#[derive(Debug, thiserror::Error)]
pub enum InfrastructureError {
    /// Database connection error
    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    /// HTTP client construction error
    #[error("HTTP client error: {0}")]
    Http(#[from] reqwest::Error),

    /// Configuration error
    #[error("Configuration error: {0}")]
    Config(String),
}
