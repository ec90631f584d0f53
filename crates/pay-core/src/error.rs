//! # Payment Error Types
//!
//! Typed error handling for the razor-relay payment relay.
//! All payment operations return `Result<T, PaymentError>`.

use thiserror::Error;

/// Core error type for all payment operations
#[derive(Debug, Error)]
pub enum PaymentError {
    /// Configuration errors (missing keys, invalid config)
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Invalid request data
    #[error("Invalid request: {0}")]
    InvalidRequest(String),

    /// Signature header/field absent or empty
    #[error("Missing signature")]
    SignatureMissing,

    /// Computed digest disagrees with the received value
    #[error("Signature mismatch")]
    SignatureMismatch,

    /// Webhook payload parsing error
    #[error("Webhook parse error: {0}")]
    WebhookParse(String),

    /// Payment provider API error, with the provider's own fields preserved
    #[error("Provider error [{code}]: {description}")]
    Provider { code: String, description: String },

    /// Network/HTTP error communicating with the provider
    #[error("Network error: {0}")]
    Network(String),

    /// Serialization/deserialization error
    #[error("Serialization error: {0}")]
    Serialization(String),
}

impl PaymentError {
    /// Returns true if this error is retryable.
    ///
    /// Advisory only: nothing in this workspace retries automatically.
    /// Retries, if any, belong to the caller.
    pub fn is_retryable(&self) -> bool {
        matches!(
            self,
            PaymentError::Network(_) | PaymentError::Provider { .. }
        )
    }

    /// Returns the HTTP status code appropriate for this error
    pub fn status_code(&self) -> u16 {
        match self {
            PaymentError::Configuration(_) => 500,
            PaymentError::InvalidRequest(_) => 400,
            PaymentError::SignatureMissing => 400,
            PaymentError::SignatureMismatch => 400,
            PaymentError::WebhookParse(_) => 400,
            PaymentError::Provider { .. } => 500,
            PaymentError::Network(_) => 500,
            PaymentError::Serialization(_) => 500,
        }
    }
}

/// Result type alias for payment operations
pub type PaymentResult<T> = Result<T, PaymentError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_retryable_errors() {
        assert!(PaymentError::Network("timeout".into()).is_retryable());
        assert!(PaymentError::Provider {
            code: "SERVER_ERROR".into(),
            description: "internal error".into()
        }
        .is_retryable());
        assert!(!PaymentError::SignatureMismatch.is_retryable());
        assert!(!PaymentError::InvalidRequest("bad data".into()).is_retryable());
    }

    #[test]
    fn test_status_codes() {
        assert_eq!(
            PaymentError::Configuration("RAZORPAY_KEY_ID not set".into()).status_code(),
            500
        );
        assert_eq!(PaymentError::SignatureMissing.status_code(), 400);
        assert_eq!(PaymentError::SignatureMismatch.status_code(), 400);
        assert_eq!(
            PaymentError::Provider {
                code: "BAD_REQUEST_ERROR".into(),
                description: "Authentication failed".into()
            }
            .status_code(),
            500
        );
    }

    #[test]
    fn test_provider_error_display_preserves_fields() {
        let err = PaymentError::Provider {
            code: "BAD_REQUEST_ERROR".into(),
            description: "The api key provided is invalid".into(),
        };
        let msg = err.to_string();
        assert!(msg.contains("BAD_REQUEST_ERROR"));
        assert!(msg.contains("The api key provided is invalid"));
    }
}
