//! # pay-core
//!
//! Core types and traits for the razor-relay payment relay.
//!
//! This crate provides:
//! - `PaymentGateway` trait for implementing payment providers
//! - `OrderRequest` and `Order` for the order-creation pass-through
//! - `WebhookEnvelope` and `WebhookEventType` for webhook notifications
//! - `PaymentError` for typed error handling
//!
//! ## Example
//!
//! ```rust,ignore
//! use pay_core::{Currency, OrderRequest, PaymentGateway};
//!
//! // Build an order request with a generated unique receipt
//! let request = OrderRequest::new(100, Currency::INR)
//!     .with_note("description", "E-commerce purchase");
//!
//! // Forward it through whichever gateway is configured
//! let order = gateway.create_order(&request).await?;
//! ```

pub mod error;
pub mod gateway;
pub mod order;
pub mod webhook;

// Re-exports for convenience
pub use error::{PaymentError, PaymentResult};
pub use gateway::{BoxedPaymentGateway, PaymentGateway};
pub use order::{Currency, Order, OrderRequest};
pub use webhook::{WebhookEnvelope, WebhookEventType};
