//! Application directory trait for read-only application lookup.

use async_trait::async_trait;

use crate::domain::entities::application::ApplicationRef;
use crate::errors::DomainError;

/// Read-only lookup over onboarding applications
///
/// Application writes belong to the (out-of-scope) application CRUD layer;
/// verification and resume flows only ever resolve references through this
/// directory.
#[async_trait]
pub trait ApplicationDirectory: Send + Sync {
    /// Find an application by its internal database id
    ///
    /// # Returns
    /// * `Ok(Some(ApplicationRef))` - Application found
    /// * `Ok(None)` - No application with the given id
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_id(&self, id: i64) -> Result<Option<ApplicationRef>, DomainError>;

    /// Find an application by its public application identifier
    ///
    /// The public identifier is the plaintext carried inside resume tokens.
    ///
    /// # Returns
    /// * `Ok(Some(ApplicationRef))` - Application found
    /// * `Ok(None)` - No application with the given identifier
    /// * `Err(DomainError)` - Lookup failed
    async fn find_by_app_id(&self, app_id: &str) -> Result<Option<ApplicationRef>, DomainError>;
}
