//! Mock implementation of ApplicationDirectory for testing

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::domain::entities::application::ApplicationRef;
use crate::errors::DomainError;

use super::r#trait::ApplicationDirectory;

/// In-memory application directory for testing
pub struct MockApplicationDirectory {
    applications: Arc<RwLock<HashMap<i64, ApplicationRef>>>,
}

impl MockApplicationDirectory {
    /// Create a new empty mock directory
    pub fn new() -> Self {
        Self {
            applications: Arc::new(RwLock::new(HashMap::new())),
        }
    }

    /// Seed an application into the directory
    pub async fn insert(&self, application: ApplicationRef) {
        let mut applications = self.applications.write().await;
        applications.insert(application.id, application);
    }
}

impl Default for MockApplicationDirectory {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl ApplicationDirectory for MockApplicationDirectory {
    async fn find_by_id(&self, id: i64) -> Result<Option<ApplicationRef>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications.get(&id).cloned())
    }

    async fn find_by_app_id(&self, app_id: &str) -> Result<Option<ApplicationRef>, DomainError> {
        let applications = self.applications.read().await;
        Ok(applications.values().find(|a| a.app_id == app_id).cloned())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_application() -> ApplicationRef {
        ApplicationRef::new(
            7,
            "current-1714453821".to_string(),
            "Jane".to_string(),
            "jane@example.com".to_string(),
            "9876543210".to_string(),
            "current".to_string(),
        )
    }

    #[tokio::test]
    async fn test_find_by_id() {
        let directory = MockApplicationDirectory::new();
        directory.insert(sample_application()).await;

        let found = directory.find_by_id(7).await.unwrap().unwrap();
        assert_eq!(found.app_id, "current-1714453821");

        assert!(directory.find_by_id(8).await.unwrap().is_none());
    }

    #[tokio::test]
    async fn test_find_by_app_id() {
        let directory = MockApplicationDirectory::new();
        directory.insert(sample_application()).await;

        let found = directory
            .find_by_app_id("current-1714453821")
            .await
            .unwrap()
            .unwrap();
        assert_eq!(found.id, 7);

        assert!(directory
            .find_by_app_id("missing-0000000000")
            .await
            .unwrap()
            .is_none());
    }
}
