//! # Webhook Envelope Types
//!
//! Provider-agnostic webhook envelope. An envelope exists only for the
//! duration of request handling; persistence is an external collaborator's
//! concern, injected behind a handler trait by the provider crate.

use serde::{Deserialize, Serialize};

/// Webhook event type tags.
///
/// Known tags map to dedicated handler methods; anything else is carried
/// through as `Unknown` and acknowledged, never rejected.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WebhookEventType {
    PaymentCaptured,
    PaymentFailed,
    OrderPaid,
    Unknown(String),
}

impl WebhookEventType {
    /// Parse a provider event tag
    pub fn from_tag(tag: &str) -> Self {
        match tag {
            "payment.captured" => WebhookEventType::PaymentCaptured,
            "payment.failed" => WebhookEventType::PaymentFailed,
            "order.paid" => WebhookEventType::OrderPaid,
            other => WebhookEventType::Unknown(other.to_string()),
        }
    }

    /// The wire tag for this event type
    pub fn as_tag(&self) -> &str {
        match self {
            WebhookEventType::PaymentCaptured => "payment.captured",
            WebhookEventType::PaymentFailed => "payment.failed",
            WebhookEventType::OrderPaid => "order.paid",
            WebhookEventType::Unknown(tag) => tag,
        }
    }
}

impl std::fmt::Display for WebhookEventType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_tag())
    }
}

/// A webhook notification envelope as delivered by the provider.
///
/// `payload` is left as raw JSON; the provider crate extracts the
/// entity relevant to each event type at dispatch time.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebhookEnvelope {
    /// Event tag, e.g. "payment.captured"
    pub event: String,

    /// Nested event payload, shape varies per event type
    #[serde(default)]
    pub payload: serde_json::Value,
}

impl WebhookEnvelope {
    /// Typed view of the event tag
    pub fn event_type(&self) -> WebhookEventType {
        WebhookEventType::from_tag(&self.event)
    }

    /// Extract the entity at `payload.<key>.entity`.
    ///
    /// The provider omits entities on some event variants; callers get
    /// `Value::Null` rather than an error in that case.
    pub fn entity(&self, key: &str) -> &serde_json::Value {
        self.payload
            .get(key)
            .and_then(|v| v.get("entity"))
            .unwrap_or(&serde_json::Value::Null)
    }
}
