//! # pay-razorpay
//!
//! Razorpay integration for razor-relay-rs.
//!
//! This crate provides:
//!
//! 1. **RazorpayClient** - Orders API pass-through
//!    - Create orders with basic-auth credentials
//!    - Provider faults surfaced verbatim (code + description)
//!
//! 2. **Signature verification** - HMAC-SHA256
//!    - Webhook bodies, signed raw and hex-encoded
//!    - Client payment confirmations over `order_id|payment_id`
//!    - Constant-time comparison
//!
//! 3. **Webhook dispatch** - handler trait keyed by event tag
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use pay_core::{Currency, OrderRequest, PaymentGateway};
//! use pay_razorpay::RazorpayClient;
//!
//! // Create client from environment
//! let client = RazorpayClient::from_env()?;
//!
//! // Forward an order to Razorpay
//! let order = client
//!     .create_order(&OrderRequest::new(100, Currency::INR))
//!     .await?;
//! ```
//!
//! ## Webhook Handling
//!
//! ```rust,ignore
//! use pay_razorpay::{dispatch_webhook_event, verify_signature, WebhookHandler};
//!
//! struct MyHandler;
//!
//! impl WebhookHandler for MyHandler {
//!     fn on_payment_captured(&self, entity: &serde_json::Value) -> PaymentResult<()> {
//!         // Mark the order paid downstream
//!         Ok(())
//!     }
//! }
//!
//! // In your webhook endpoint, over the exact raw body bytes:
//! if verify_signature(&body, secret, signature) {
//!     let envelope: WebhookEnvelope = serde_json::from_slice(&body)?;
//!     dispatch_webhook_event(&MyHandler, &envelope)?;
//! }
//! ```

pub mod client;
pub mod config;
pub mod signature;
pub mod webhook;

// Re-exports
pub use client::RazorpayClient;
pub use config::RazorpayConfig;
pub use signature::{
    compute_signature, payment_message, verify_payment_signature, verify_signature,
};
pub use webhook::{dispatch_webhook_event, LoggingWebhookHandler, WebhookHandler};
