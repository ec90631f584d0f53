//! # Razorpay Configuration
//!
//! Configuration management for the Razorpay integration.
//! All secrets are loaded from environment variables once at startup and
//! are read-only afterwards. Secret values are never logged in full.

use pay_core::PaymentError;
use std::env;
use std::time::Duration;

/// Razorpay API configuration
#[derive(Debug, Clone)]
pub struct RazorpayConfig {
    /// Key ID (rzp_test_... or rzp_live_...)
    pub key_id: String,

    /// Key secret, used for API auth and payment signature verification
    pub key_secret: String,

    /// Webhook signing secret
    pub webhook_secret: String,

    /// API base URL (for testing/mocking)
    pub api_base_url: String,

    /// Timeout for outbound API calls
    pub timeout: Duration,
}

impl RazorpayConfig {
    /// Load configuration from environment variables.
    ///
    /// Required env vars:
    /// - `RAZORPAY_KEY_ID`
    /// - `RAZORPAY_KEY_SECRET`
    /// - `RAZORPAY_WEBHOOK_SECRET`
    pub fn from_env() -> Result<Self, PaymentError> {
        dotenvy::dotenv().ok(); // Load .env file if present

        let key_id = env::var("RAZORPAY_KEY_ID")
            .map_err(|_| PaymentError::Configuration("RAZORPAY_KEY_ID not set".to_string()))?;

        let key_secret = env::var("RAZORPAY_KEY_SECRET")
            .map_err(|_| PaymentError::Configuration("RAZORPAY_KEY_SECRET not set".to_string()))?;

        let webhook_secret = env::var("RAZORPAY_WEBHOOK_SECRET").map_err(|_| {
            PaymentError::Configuration("RAZORPAY_WEBHOOK_SECRET not set".to_string())
        })?;

        // Validate key format
        if !key_id.starts_with("rzp_test_") && !key_id.starts_with("rzp_live_") {
            return Err(PaymentError::Configuration(
                "RAZORPAY_KEY_ID must start with rzp_test_ or rzp_live_".to_string(),
            ));
        }

        Ok(Self {
            key_id,
            key_secret,
            webhook_secret,
            api_base_url: "https://api.razorpay.com".to_string(),
            timeout: Duration::from_secs(30),
        })
    }

    /// Create config with explicit values (for testing)
    pub fn new(
        key_id: impl Into<String>,
        key_secret: impl Into<String>,
        webhook_secret: impl Into<String>,
    ) -> Self {
        Self {
            key_id: key_id.into(),
            key_secret: key_secret.into(),
            webhook_secret: webhook_secret.into(),
            api_base_url: "https://api.razorpay.com".to_string(),
            timeout: Duration::from_secs(30),
        }
    }

    /// Check if using test keys
    pub fn is_test_mode(&self) -> bool {
        self.key_id.starts_with("rzp_test_")
    }

    /// Check if using live keys
    pub fn is_live_mode(&self) -> bool {
        self.key_id.starts_with("rzp_live_")
    }

    /// Masked key ID for status endpoints and logs (first 8 chars only)
    pub fn key_id_prefix(&self) -> String {
        let prefix: String = self.key_id.chars().take(8).collect();
        format!("{}...", prefix)
    }

    /// Builder: set custom API base URL (for testing)
    pub fn with_api_base_url(mut self, url: impl Into<String>) -> Self {
        self.api_base_url = url.into();
        self
    }

    /// Builder: set the outbound call timeout
    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_modes() {
        let config = RazorpayConfig::new("rzp_test_abc123", "secret", "whsec");
        assert!(config.is_test_mode());
        assert!(!config.is_live_mode());

        let config = RazorpayConfig::new("rzp_live_abc123", "secret", "whsec");
        assert!(!config.is_test_mode());
        assert!(config.is_live_mode());
    }

    #[test]
    fn test_key_id_prefix_is_masked() {
        let config = RazorpayConfig::new("rzp_test_abc123xyz", "secret", "whsec");
        assert_eq!(config.key_id_prefix(), "rzp_test...");
        assert!(!config.key_id_prefix().contains("abc123xyz"));
    }

    #[test]
    fn test_builder_overrides() {
        let config = RazorpayConfig::new("rzp_test_abc", "secret", "whsec")
            .with_api_base_url("http://localhost:9090")
            .with_timeout(Duration::from_secs(5));
        assert_eq!(config.api_base_url, "http://localhost:9090");
        assert_eq!(config.timeout, Duration::from_secs(5));
    }
}
