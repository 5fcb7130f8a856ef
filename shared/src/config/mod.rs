//! Configuration module with business-specific sub-modules
//!
//! This module organizes configuration into logical business areas:
//! - `database` - Database connection and pool configuration
//! - `resume` - Resume-link secret and URL configuration

pub mod database;
pub mod resume;

// Re-export commonly used types
pub use database::DatabaseConfig;
pub use resume::ResumeLinkConfig;
