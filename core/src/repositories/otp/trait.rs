//! OTP store trait defining the interface for passcode persistence.

use async_trait::async_trait;
use chrono::{DateTime, Utc};

use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

/// Repository trait for OtpRecord persistence operations
///
/// A plain keyed store with one secondary index (recipient to newest
/// record). No business rules live here; the OTP engine owns the state
/// machine and the retention sweeper owns deletion.
///
/// # Ordering
/// "Newest" is total and stable: creation timestamp descending, tie-broken
/// by the monotonically increasing id, so concurrent inserts for one
/// recipient never produce an ambiguous latest record.
#[async_trait]
pub trait OtpStore: Send + Sync {
    /// Insert a new passcode record
    ///
    /// # Arguments
    /// * `record` - The OtpRecord to persist; `id` is assigned by the store
    ///
    /// # Returns
    /// * `Ok(OtpRecord)` - The stored record with its assigned id
    /// * `Err(DomainError)` - Insert failed
    ///
    /// # Example
    /// ```no_run
    /// # use ob_core::repositories::OtpStore;
    /// # use ob_core::domain::entities::otp::{DispatchMode, OtpRecord};
    /// # async fn example(store: &impl OtpStore) -> Result<(), Box<dyn std::error::Error>> {
    /// let record = OtpRecord::new(
    ///     "9876543210".to_string(),
    ///     OtpRecord::generate_code(),
    ///     DispatchMode::Sms,
    /// );
    ///
    /// let saved = store.save(record).await?;
    /// println!("OTP stored with id: {:?}", saved.id);
    /// # Ok(())
    /// # }
    /// ```
    async fn save(&self, record: OtpRecord) -> Result<OtpRecord, DomainError>;

    /// Find the newest passcode record for a recipient
    ///
    /// # Arguments
    /// * `recipient` - Phone number or email address the codes were sent to
    ///
    /// # Returns
    /// * `Ok(Some(OtpRecord))` - The single newest record
    /// * `Ok(None)` - No record has ever been stored for the recipient
    /// * `Err(DomainError)` - Lookup failed
    async fn find_latest_by_recipient(
        &self,
        recipient: &str,
    ) -> Result<Option<OtpRecord>, DomainError>;

    /// Flip a record's used flag, only if it is currently unused
    ///
    /// This is the serialization point for concurrent verification: the
    /// flip is compare-and-set on `used = false`, so of any number of
    /// simultaneous verify calls exactly one wins.
    ///
    /// # Arguments
    /// * `id` - Store-assigned id of the record
    ///
    /// # Returns
    /// * `Ok(true)` - This call performed the flip
    /// * `Ok(false)` - The record was already used (or gone)
    /// * `Err(DomainError)` - Update failed
    async fn mark_used(&self, id: i64) -> Result<bool, DomainError>;

    /// Bulk-delete records created before the cutoff
    ///
    /// # Arguments
    /// * `cutoff` - Records strictly older than this instant are removed
    ///
    /// # Returns
    /// * `Ok(u64)` - Number of records deleted (zero on a repeat run)
    /// * `Err(DomainError)` - Deletion failed
    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError>;
}
