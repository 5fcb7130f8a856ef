//! Resume-link configuration

use serde::{Deserialize, Serialize};

/// Configuration for building and reading encrypted resume links
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ResumeLinkConfig {
    /// Symmetric key protecting resume tokens; must be exactly 16 bytes
    pub secret_key: String,

    /// Base URL the encrypted token is appended to
    pub base_url: String,
}

impl Default for ResumeLinkConfig {
    fn default() -> Self {
        Self {
            secret_key: String::from("change-me-16byte"),
            base_url: String::from("https://onboard.example.com/resume?token="),
        }
    }
}

impl ResumeLinkConfig {
    /// Required secret key length in bytes (AES-128)
    pub const KEY_LENGTH: usize = 16;

    /// Create from environment variables
    pub fn from_env() -> Self {
        let secret_key = std::env::var("RESUME_SECRET_KEY")
            .unwrap_or_else(|_| "change-me-16byte".to_string());
        let base_url = std::env::var("RESUME_BASE_URL")
            .unwrap_or_else(|_| "https://onboard.example.com/resume?token=".to_string());

        Self {
            secret_key,
            base_url,
        }
    }

    /// Create a new resume-link configuration
    pub fn new(secret_key: impl Into<String>, base_url: impl Into<String>) -> Self {
        Self {
            secret_key: secret_key.into(),
            base_url: base_url.into(),
        }
    }

    /// Check the secret has the exact AES-128 key length
    pub fn has_valid_key_length(&self) -> bool {
        self.secret_key.len() == Self::KEY_LENGTH
    }

    /// Check if using the default secret (security warning)
    pub fn is_using_default_secret(&self) -> bool {
        self.secret_key == "change-me-16byte"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resume_link_config_default() {
        let config = ResumeLinkConfig::default();
        assert!(config.has_valid_key_length());
        assert!(config.is_using_default_secret());
        assert!(config.base_url.ends_with("token="));
    }

    #[test]
    fn test_resume_link_config_key_length() {
        let config = ResumeLinkConfig::new("too-short", "https://example.com/r?t=");
        assert!(!config.has_valid_key_length());
        assert!(!config.is_using_default_secret());

        let config = ResumeLinkConfig::new("0123456789abcdef", "https://example.com/r?t=");
        assert!(config.has_valid_key_length());
    }
}
