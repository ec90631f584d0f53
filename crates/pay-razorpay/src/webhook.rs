//! # Razorpay Webhook Handling
//!
//! Dispatch of verified webhook envelopes to an injected handler.
//! Webhooks notify the server of payment lifecycle events (payment
//! captured, payment failed, order paid).
//!
//! An envelope must pass signature verification before it reaches
//! `dispatch_webhook_event`; dispatch itself never rejects an event.
//! Unknown event tags go to the fallback handler and are acknowledged,
//! which keeps Razorpay's retry policy from redelivering them.

use pay_core::{PaymentResult, WebhookEnvelope, WebhookEventType};
use tracing::{debug, info, warn};

/// Webhook event handler trait.
///
/// Implement this to wire in the downstream business action (marking an
/// order paid, notifying a ledger). Default impls log only; failures in a
/// handler are the implementor's concern to retry, not the relay's.
#[allow(unused_variables)]
pub trait WebhookHandler: Send + Sync {
    /// Called for `payment.captured` with `payload.payment.entity`
    fn on_payment_captured(&self, entity: &serde_json::Value) -> PaymentResult<()> {
        info!(
            "Payment captured: {}",
            entity.get("id").and_then(|v| v.as_str()).unwrap_or("unknown")
        );
        Ok(())
    }

    /// Called for `payment.failed` with `payload.payment.entity`
    fn on_payment_failed(&self, entity: &serde_json::Value) -> PaymentResult<()> {
        warn!(
            "Payment failed: {}",
            entity.get("id").and_then(|v| v.as_str()).unwrap_or("unknown")
        );
        Ok(())
    }

    /// Called for `order.paid` with `payload.order.entity`
    fn on_order_paid(&self, entity: &serde_json::Value) -> PaymentResult<()> {
        info!(
            "Order paid: {}",
            entity.get("id").and_then(|v| v.as_str()).unwrap_or("unknown")
        );
        Ok(())
    }

    /// Fallback for unrecognized event tags; records the tag, no state change
    fn on_unknown_event(&self, envelope: &WebhookEnvelope) -> PaymentResult<()> {
        debug!("Unhandled webhook event: {}", envelope.event);
        Ok(())
    }
}

/// Default no-op webhook handler (just logs events)
pub struct LoggingWebhookHandler;

impl WebhookHandler for LoggingWebhookHandler {}

/// Dispatch a verified webhook envelope to the appropriate handler method.
///
/// The entity forwarded to the handler is exactly the nested
/// `payload.<kind>.entity` value, unchanged; `Value::Null` when the
/// provider omitted it.
pub fn dispatch_webhook_event(
    handler: &dyn WebhookHandler,
    envelope: &WebhookEnvelope,
) -> PaymentResult<()> {
    match envelope.event_type() {
        WebhookEventType::PaymentCaptured => handler.on_payment_captured(envelope.entity("payment")),
        WebhookEventType::PaymentFailed => handler.on_payment_failed(envelope.entity("payment")),
        WebhookEventType::OrderPaid => handler.on_order_paid(envelope.entity("order")),
        WebhookEventType::Unknown(_) => handler.on_unknown_event(envelope),
    }
}
