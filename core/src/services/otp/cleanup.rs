//! Retention sweeper for aged OTP records
//!
//! Expiry (minutes, computed at verification time) and retention (hours,
//! enforced here) are different horizons. The sweeper only controls how long
//! consumed and abandoned records stay stored; it never affects whether a
//! code verifies.

use std::sync::Arc;

use chrono::{Duration, Utc};
use tokio::task::JoinHandle;
use tracing::{error, info, warn};

use crate::errors::DomainResult;
use crate::repositories::OtpStore;

/// Configuration for the OTP retention sweeper
#[derive(Debug, Clone)]
pub struct OtpCleanupConfig {
    /// How often to run cleanup (in seconds)
    pub interval_seconds: u64,
    /// Maximum record age before deletion (in hours)
    pub retention_hours: i64,
    /// Whether to enable automatic cleanup
    pub enabled: bool,
}

impl Default for OtpCleanupConfig {
    fn default() -> Self {
        Self {
            interval_seconds: 86_400, // Run once a day
            retention_hours: 24,      // Purge records older than a day
            enabled: true,
        }
    }
}

/// Service purging OTP records past the retention window
pub struct OtpCleanupService<O: OtpStore + 'static> {
    store: Arc<O>,
    config: OtpCleanupConfig,
}

impl<O: OtpStore + 'static> OtpCleanupService<O> {
    /// Create a new cleanup service
    pub fn new(store: Arc<O>, config: OtpCleanupConfig) -> Self {
        Self { store, config }
    }

    /// Run a single cleanup cycle
    ///
    /// Computes `cutoff = now - retention_hours` and deletes every record
    /// older than that. Idempotent: an immediate second run deletes zero
    /// rows.
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records purged
    /// * `Err(DomainError)` - If the store rejects the deletion
    pub async fn run_cleanup(&self) -> DomainResult<u64> {
        if !self.config.enabled {
            return Ok(0);
        }

        info!("Starting OTP cleanup cycle");

        let cutoff = Utc::now() - Duration::hours(self.config.retention_hours);
        let deleted = self.store.delete_older_than(cutoff).await?;

        info!(
            "Deleted {} OTP records older than {} hours",
            deleted, self.config.retention_hours
        );

        Ok(deleted)
    }

    /// Start the sweeper as a background task
    ///
    /// This spawns a tokio task that runs one cleanup per interval tick. A
    /// failed cycle is logged and the loop keeps going; request handling
    /// never depends on this task.
    pub fn start_background_task(self: Arc<Self>) -> JoinHandle<()> {
        let interval = std::time::Duration::from_secs(self.config.interval_seconds);

        tokio::spawn(async move {
            if !self.config.enabled {
                warn!("OTP cleanup service is disabled");
                return;
            }

            info!(
                "OTP cleanup service started - will run every {} seconds",
                self.config.interval_seconds
            );

            let mut interval_timer = tokio::time::interval(interval);

            loop {
                interval_timer.tick().await;

                if let Err(e) = self.run_cleanup().await {
                    error!("OTP cleanup cycle failed: {}", e);
                }
            }
        })
    }
}
