//! Shared utilities and common types for the onboarding backend
//!
//! This crate provides common functionality used across all server modules:
//! - Configuration types
//! - Utility functions (display masking, recipient validation)

pub mod config;
pub mod utils;

// Re-export commonly used items at crate root
pub use config::{DatabaseConfig, ResumeLinkConfig};
pub use utils::{masking, validation};
