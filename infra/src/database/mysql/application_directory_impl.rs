//! MySQL implementation of the ApplicationDirectory trait.
//!
//! Read-only lookups over the `application` table. Application writes
//! belong to the application CRUD layer; this side only resolves references.

use async_trait::async_trait;
use sqlx::{MySqlPool, Row};

use ob_core::domain::entities::application::ApplicationRef;
use ob_core::errors::DomainError;
use ob_core::repositories::ApplicationDirectory;

/// MySQL implementation of ApplicationDirectory
pub struct MySqlApplicationDirectory {
    /// Database connection pool
    pool: MySqlPool,
}

impl MySqlApplicationDirectory {
    /// Create a new MySQL application directory
    pub fn new(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Convert a database row to an ApplicationRef entity
    fn row_to_application(row: &sqlx::mysql::MySqlRow) -> Result<ApplicationRef, DomainError> {
        Ok(ApplicationRef {
            id: row.try_get("id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get id: {}", e),
            })?,
            app_id: row.try_get("app_id").map_err(|e| DomainError::Internal {
                message: format!("Failed to get app_id: {}", e),
            })?,
            first_name: row.try_get("first_name").map_err(|e| DomainError::Internal {
                message: format!("Failed to get first_name: {}", e),
            })?,
            email: row.try_get("email").map_err(|e| DomainError::Internal {
                message: format!("Failed to get email: {}", e),
            })?,
            mobile_number: row
                .try_get("mobile_number")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get mobile_number: {}", e),
                })?,
            journey_type: row
                .try_get("journey_type")
                .map_err(|e| DomainError::Internal {
                    message: format!("Failed to get journey_type: {}", e),
                })?,
        })
    }
}

#[async_trait]
impl ApplicationDirectory for MySqlApplicationDirectory {
    async fn find_by_id(&self, id: i64) -> Result<Option<ApplicationRef>, DomainError> {
        let query = r#"
            SELECT id, app_id, first_name, email, mobile_number, journey_type
            FROM application
            WHERE id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find application by id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_application(&row)?)),
            None => Ok(None),
        }
    }

    async fn find_by_app_id(&self, app_id: &str) -> Result<Option<ApplicationRef>, DomainError> {
        let query = r#"
            SELECT id, app_id, first_name, email, mobile_number, journey_type
            FROM application
            WHERE app_id = ?
            LIMIT 1
        "#;

        let result = sqlx::query(query)
            .bind(app_id)
            .fetch_optional(&self.pool)
            .await
            .map_err(|e| DomainError::Internal {
                message: format!("Failed to find application by app_id: {}", e),
            })?;

        match result {
            Some(row) => Ok(Some(Self::row_to_application(&row)?)),
            None => Ok(None),
        }
    }
}
