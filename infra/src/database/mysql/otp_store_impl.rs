//! MySQL implementation of the OtpStore trait.
//!
//! Concrete passcode persistence using SQLx over the `otp` table. The
//! used-flag flip is a single conditional UPDATE, so concurrent verification
//! of the same code serializes inside the database.

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use sqlx::{MySqlPool, Row};

use ob_core::domain::entities::otp::{DispatchMode, OtpRecord};
use ob_core::errors::DomainError;
use ob_core::repositories::OtpStore;

/// MySQL implementation of OtpStore
pub struct MySqlOtpStore {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlOtpStore {
    /// Create a new MySQL OTP store
    ///
    /// # Arguments
    /// * `pool` - MySQL connection pool from SQLx
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an OtpRecord entity
    fn row_to_record(row: &sqlx::mysql::MySqlRow) -> Result<OtpRecord, DomainError> {
        let mode: String = row.try_get("mode").map_err(|e| DomainError::Internal {
            message: format!("Failed to get mode: {}", e),
        })?;
        let mode = DispatchMode::parse(&mode).map_err(|_| DomainError::Internal {
            message: format!("Unknown dispatch mode stored in otp row: {}", mode),
        })?;

        Ok(OtpRecord {
            id: Some(row.try_get("id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?),
            recipient: row.try_get("recipient").map_err(|e| DomainError::Internal {
                message: format!("Failed to get recipient: {}", e),
            })?,
            code: row.try_get("otp_code").map_err(|e| DomainError::Internal {
                message: format!("Failed to get otp_code: {}", e),
            })?,
            mode,
            used: row.try_get("used").map_err(|e| DomainError::Internal {
                message: format!("Failed to get used: {}", e),
            })?,
            created_at: row
                .try_get::<DateTime<Utc>, _>("created_at")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get created_at: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl OtpStore for MySqlOtpStore {
    async fn save(&self, mut record: OtpRecord) -> Result<OtpRecord, DomainError> {
        let query = r#"
            INSERT INTO otp (recipient, otp_code, mode, used, created_at)
            VALUES (?, ?, ?, ?, ?)
        "#;

        let result = sqlx::query(query)
            .bind(&record.recipient)
            .bind(&record.code)
            .bind(record.mode.as_str())
            .bind(record.used)
            .bind(record.created_at)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to save OTP record: {}", e),
            })?;

        record.id = Some(result.last_insert_id() as i64);
        Ok(record)
    }

    async fn find_latest_by_recipient(
        &self,
        recipient: &str,
    ) -> Result<Option<OtpRecord>, DomainError> {
        // Tie-break on id so two records in the same instant still order
        let query = r#"
            SELECT id, recipient, otp_code, mode, used, created_at
            FROM otp
            WHERE recipient = ?
            ORDER BY created_at DESC, id DESC
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(recipient)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find latest OTP record: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_record(&row)?)),
            None => Ok(None),
        }
    }

    async fn mark_used(&self, id: i64) -> Result<bool, DomainError> {
        // Conditional flip; of any number of concurrent callers exactly one
        // sees an affected row
        let query = r#"
            UPDATE otp
            SET used = TRUE
            WHERE id = ? AND used = FALSE
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to mark OTP record used: {}", e),
            })?;

        Ok(result.rows_affected() > 0)
    }

    async fn delete_older_than(&self, cutoff: DateTime<Utc>) -> Result<u64, DomainError> {
        let query = r#"
            DELETE FROM otp
            WHERE created_at < ?
        "#;

        let result = sqlx::query(query)
            .bind(cutoff)
            .execute(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to delete old OTP records: {}", e),
            })?;

        Ok(result.rows_affected())
    }
}
