//! # Application State
//!
//! Shared state for the Axum application: the payment gateway, the
//! webhook handler collaborator and the verification secrets. Everything
//! here is read-only after startup.
//!
//! A missing credential never aborts startup; the corresponding field
//! stays `None` and only the endpoints that need it degrade to an
//! explicit 500.

use pay_core::BoxedPaymentGateway;
use pay_razorpay::{LoggingWebhookHandler, RazorpayClient, RazorpayConfig, WebhookHandler};
use std::sync::Arc;
use tracing::warn;

/// Application configuration
#[derive(Debug, Clone)]
pub struct AppConfig {
    /// Host to bind to
    pub host: String,
    /// Port to listen on
    pub port: u16,
    /// Environment (development, staging, production)
    pub environment: String,
}

impl AppConfig {
    /// Load from environment variables
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        Self {
            host: std::env::var("HOST").unwrap_or_else(|_| "127.0.0.1".to_string()),
            port: std::env::var("PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or(3000),
            environment: std::env::var("ENVIRONMENT").unwrap_or_else(|_| "development".to_string()),
        }
    }

    /// Get the socket address to bind to
    pub fn socket_addr(&self) -> std::net::SocketAddr {
        format!("{}:{}", self.host, self.port)
            .parse()
            .expect("Invalid socket address")
    }

    /// Check if running in production
    pub fn is_production(&self) -> bool {
        self.environment == "production"
    }
}

impl Default for AppConfig {
    fn default() -> Self {
        Self::from_env()
    }
}

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Payment gateway for order creation; `None` when credentials are missing
    pub gateway: Option<BoxedPaymentGateway>,
    /// Injected webhook collaborator (database/ledger update lives behind this)
    pub webhook_handler: Arc<dyn WebhookHandler>,
    /// Webhook signing secret
    pub webhook_secret: Option<String>,
    /// API key secret, used for client payment-confirmation signatures
    pub key_secret: Option<String>,
    /// Masked key ID for the status endpoint (first 8 chars + "...")
    pub key_id_prefix: Option<String>,
    /// Application config
    pub config: AppConfig,
}

impl AppState {
    /// Build state from environment variables.
    ///
    /// Each credential is read independently so a single missing value
    /// only disables the endpoints that depend on it.
    pub fn from_env() -> Self {
        let config = AppConfig::from_env();

        let key_id = env_nonempty("RAZORPAY_KEY_ID");
        let key_secret = env_nonempty("RAZORPAY_KEY_SECRET");
        let webhook_secret = env_nonempty("RAZORPAY_WEBHOOK_SECRET");

        if webhook_secret.is_none() {
            warn!("RAZORPAY_WEBHOOK_SECRET not set; /payment/webhook will return 500");
        }

        let gateway = match (&key_id, &key_secret) {
            (Some(id), Some(secret)) => {
                let razorpay = RazorpayConfig::new(
                    id.clone(),
                    secret.clone(),
                    webhook_secret.clone().unwrap_or_default(),
                );
                match RazorpayClient::new(razorpay) {
                    Ok(client) => Some(Arc::new(client) as BoxedPaymentGateway),
                    Err(e) => {
                        warn!("Failed to initialize Razorpay client: {}", e);
                        None
                    }
                }
            }
            _ => {
                warn!("Razorpay credentials not set; /create-order will return 500");
                None
            }
        };

        Self {
            gateway,
            webhook_handler: Arc::new(LoggingWebhookHandler),
            webhook_secret,
            key_secret,
            key_id_prefix: key_id.as_deref().map(mask_key_id),
            config,
        }
    }

    /// Builder: replace the webhook collaborator
    pub fn with_webhook_handler(mut self, handler: Arc<dyn WebhookHandler>) -> Self {
        self.webhook_handler = handler;
        self
    }
}

fn env_nonempty(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.is_empty())
}

fn mask_key_id(key_id: &str) -> String {
    let prefix: String = key_id.chars().take(8).collect();
    format!("{}...", prefix)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_socket_addr() {
        let config = AppConfig {
            host: "0.0.0.0".to_string(),
            port: 3000,
            environment: "test".to_string(),
        };

        let addr = config.socket_addr();
        assert_eq!(addr.to_string(), "0.0.0.0:3000");
    }

    #[test]
    fn test_is_production() {
        let mut config = AppConfig {
            host: "127.0.0.1".to_string(),
            port: 3000,
            environment: "production".to_string(),
        };
        assert!(config.is_production());
        config.environment = "development".to_string();
        assert!(!config.is_production());
    }

    #[test]
    fn test_mask_key_id() {
        assert_eq!(mask_key_id("rzp_test_abc123xyz"), "rzp_test...");
        assert_eq!(mask_key_id("short"), "short...");
    }
}
