//! # Razorpay API Client
//!
//! Implementation of the order-creation pass-through against Razorpay's
//! Orders API. One immutable client, constructed at process start; faults
//! from the API are surfaced with Razorpay's own code/description fields
//! preserved, never interpreted or retried here.

use crate::config::RazorpayConfig;
use async_trait::async_trait;
use pay_core::{Order, OrderRequest, PaymentError, PaymentGateway, PaymentResult};
use reqwest::Client;
use serde::Deserialize;
use tracing::{debug, error, info, instrument};

/// Razorpay Orders API client
pub struct RazorpayClient {
    config: RazorpayConfig,
    client: Client,
}

impl RazorpayClient {
    /// Create a new client from configuration
    pub fn new(config: RazorpayConfig) -> PaymentResult<Self> {
        let client = Client::builder()
            .timeout(config.timeout)
            .build()
            .map_err(|e| PaymentError::Configuration(format!("HTTP client: {}", e)))?;

        Ok(Self { config, client })
    }

    /// Create from environment variables
    pub fn from_env() -> PaymentResult<Self> {
        let config = RazorpayConfig::from_env()?;
        Self::new(config)
    }

    /// The webhook signing secret from this client's configuration
    pub fn webhook_secret(&self) -> &str {
        &self.config.webhook_secret
    }

    /// The configuration backing this client
    pub fn config(&self) -> &RazorpayConfig {
        &self.config
    }
}

#[async_trait]
impl PaymentGateway for RazorpayClient {
    #[instrument(skip(self, request), fields(receipt = %request.receipt))]
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<Order> {
        if request.amount <= 0 {
            return Err(PaymentError::InvalidRequest(
                "Order amount must be positive".to_string(),
            ));
        }

        let url = format!("{}/v1/orders", self.config.api_base_url);

        debug!(
            "Creating Razorpay order: amount={}, currency={}",
            request.amount, request.currency
        );

        let response = self
            .client
            .post(&url)
            .basic_auth(&self.config.key_id, Some(&self.config.key_secret))
            .json(request)
            .send()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| PaymentError::Network(e.to_string()))?;

        if !status.is_success() {
            error!("Razorpay API error: status={}, body={}", status, body);

            // Razorpay wraps faults as {"error": {"code", "description", ...}}
            if let Ok(fault) = serde_json::from_str::<RazorpayErrorResponse>(&body) {
                debug!(
                    source = ?fault.error.source,
                    step = ?fault.error.step,
                    reason = ?fault.error.reason,
                    "Razorpay fault detail"
                );
                return Err(PaymentError::Provider {
                    code: fault.error.code,
                    description: fault.error.description,
                });
            }

            return Err(PaymentError::Provider {
                code: format!("HTTP_{}", status.as_u16()),
                description: body,
            });
        }

        let order: Order = serde_json::from_str(&body).map_err(|e| {
            PaymentError::Serialization(format!("Failed to parse Razorpay response: {}", e))
        })?;

        info!("Order created successfully: {}", order.id);

        Ok(order)
    }

    fn provider_name(&self) -> &'static str {
        "razorpay"
    }
}

// =============================================================================
// Razorpay API Types
// =============================================================================

#[derive(Debug, Deserialize)]
struct RazorpayErrorResponse {
    error: RazorpayError,
}

#[derive(Debug, Deserialize)]
struct RazorpayError {
    code: String,
    description: String,
    #[serde(default)]
    source: Option<String>,
    #[serde(default)]
    step: Option<String>,
    #[serde(default)]
    reason: Option<String>,
}
