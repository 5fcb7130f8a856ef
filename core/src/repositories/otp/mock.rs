//! Mock implementation of OtpStore for testing

use std::sync::atomic::{AtomicI64, Ordering};
use std::sync::Arc;

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use tokio::sync::RwLock;

use crate::domain::entities::otp::OtpRecord;
use crate::errors::DomainError;

use super::r#trait::OtpStore;

/// In-memory OTP store for testing
///
/// Reproduces the ordering and compare-and-set guarantees of the real
/// store: ids increase monotonically and `mark_used` flips at most once.
pub struct MockOtpStore {
    records: Arc<RwLock<Vec<OtpRecord>>>,
    next_id: AtomicI64,
}

impl MockOtpStore {
    /// Create a new empty mock store
    pub fn new() -> Self {
        Self {
            records: Arc::new(RwLock::new(Vec::new())),
            next_id: AtomicI64::new(1),
        }
    }

    /// Number of records currently held
    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    /// Fetch a record by id, if present
    pub async fn get(&self, id: i64) -> Option<OtpRecord> {
        self.records
            .read()
            .await
            .iter()
            .find(|r| r.id == Some(id))
            .cloned()
    }
}

impl Default for MockOtpStore {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl OtpStore for MockOtpStore {
    async fn save(&self, mut record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let mut records = self.records.write().await;
        record.id = Some(self.next_id.fetch_add(1, Ordering::SeqCst));
        records.push(record.clone());
        Ok(record)
    }

    async fn find_latest_by_recipient(
        &self,
        recipient: &str,
    ) -> Result<Option<OtpRecord>, DomainError> {
        let records = self.records.read().await;
        Ok(records
            .iter()
            .filter(|r| r.recipient == recipient)
            .max_by_key(|r| (r.created_at, r.id))
            .cloned())
    }

    async fn mark_used(&self, id: i64) -> Result<bool, DomainError> {
        let mut records = self.records.write().await;
        match records.iter_mut().find(|r| r.id == Some(id) && !r.used) {
            Some(record) => {
                record.used = true;
                Ok(true)
            }
            None => Ok(false),
        }
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let mut records = self.records.write().await;
        let initial_count = records.len();
        records.retain(|r| r.created_at >= cutoff);
        Ok((initial_count - records.len()) as u64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::otp::DispatchMode;
    use chrono::Duration;

    fn record_for(recipient: &str) -> OtpRecord {
        OtpRecord::new(
            recipient.to_string(),
            OtpRecord::generate_code(),
            DispatchMode::Sms,
        )
    }

    #[tokio::test]
    async fn test_save_assigns_increasing_ids() {
        let store = MockOtpStore::new();

        let first = store.save(record_for("9876543210")).await.unwrap();
        let second = store.save(record_for("9876543210")).await.unwrap();

        assert_eq!(first.id, Some(1));
        assert_eq!(second.id, Some(2));
        assert_eq!(store.len().await, 2);
    }

    #[tokio::test]
    async fn test_find_latest_prefers_newest_then_highest_id() {
        let store = MockOtpStore::new();

        let shared_instant = Utc::now();
        let mut older = record_for("9876543210");
        older.created_at = shared_instant - Duration::minutes(10);
        store.save(older).await.unwrap();

        // Two records sharing a timestamp: the higher id wins
        let mut a = record_for("9876543210");
        a.created_at = shared_instant;
        let mut b = record_for("9876543210");
        b.created_at = shared_instant;
        store.save(a).await.unwrap();
        let winner = store.save(b).await.unwrap();

        let latest = store
            .find_latest_by_recipient("9876543210")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(latest.id, winner.id);
    }

    #[tokio::test]
    async fn test_find_latest_unknown_recipient() {
        let store = MockOtpStore::new();
        assert!(store
            .find_latest_by_recipient("0000000000")
            .await
            .unwrap()
            .is_none());
    }

    #[tokio::test]
    async fn test_mark_used_flips_exactly_once() {
        let store = MockOtpStore::new();
        let saved = store.save(record_for("9876543210")).await.unwrap();
        let id = saved.id.unwrap();

        assert!(store.mark_used(id).await.unwrap());
        assert!(!store.mark_used(id).await.unwrap());
        assert!(store.get(id).await.unwrap().used);
    }

    #[tokio::test]
    async fn test_mark_used_missing_record() {
        let store = MockOtpStore::new();
        assert!(!store.mark_used(404).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_older_than() {
        let store = MockOtpStore::new();

        let mut old = record_for("9876543210");
        old.created_at = Utc::now() - Duration::hours(25);
        store.save(old).await.unwrap();

        let mut fresh = record_for("9876543210");
        fresh.created_at = Utc::now() - Duration::hours(1);
        store.save(fresh).await.unwrap();

        let cutoff = Utc::now() - Duration::hours(24);
        assert_eq!(store.delete_older_than(cutoff).await.unwrap(), 1);
        assert_eq!(store.len().await, 1);

        // Idempotent: an immediate second sweep removes nothing
        assert_eq!(store.delete_older_than(cutoff).await.unwrap(), 0);
    }
}
