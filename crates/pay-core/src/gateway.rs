//! # Payment Gateway Trait
//!
//! Trait seam between the HTTP layer and the payment provider.
//!
//! The provider client is constructed once at process start and passed
//! explicitly as `Arc<dyn PaymentGateway>`; there is no ambient/global
//! client instance.

use crate::error::PaymentResult;
use crate::order::{Order, OrderRequest};
use async_trait::async_trait;
use std::sync::Arc;

/// Order-creation seam implemented by each payment provider.
///
/// A single pass-through call: provider faults are surfaced verbatim
/// (code and description preserved), never interpreted or retried here.
#[async_trait]
pub trait PaymentGateway: Send + Sync {
    /// Create an order with the provider and return it unchanged.
    async fn create_order(&self, request: &OrderRequest) -> PaymentResult<Order>;

    /// Provider name (for logging and diagnostics).
    fn provider_name(&self) -> &'static str;
}

/// Type alias for a shared gateway (dynamic dispatch)
pub type BoxedPaymentGateway = Arc<dyn PaymentGateway>;
