//! # Order Types
//!
//! Order request/response types for the razor-relay payment relay.
//! Orders are created on the processor side and never persisted here;
//! an `OrderRequest` is forwarded to the provider and discarded.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use uuid::Uuid;

/// Supported currencies (ISO 4217)
///
/// Razorpay expects uppercase codes on the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Currency {
    INR,
    USD,
    EUR,
    GBP,
}

impl Currency {
    /// Returns the ISO 4217 currency code
    pub fn as_str(&self) -> &'static str {
        match self {
            Currency::INR => "INR",
            Currency::USD => "USD",
            Currency::EUR => "EUR",
            Currency::GBP => "GBP",
        }
    }

    /// Returns the number of decimal places for this currency
    pub fn decimal_places(&self) -> u8 {
        2
    }

    /// Convert from smallest unit (paise, cents) back to decimal
    pub fn from_smallest_unit(&self, amount: i64) -> f64 {
        let divisor = 10_f64.powi(self.decimal_places() as i32);
        amount as f64 / divisor
    }
}

impl Default for Currency {
    fn default() -> Self {
        Currency::INR
    }
}

impl std::fmt::Display for Currency {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// A request to create an order with the payment provider.
///
/// Immutable once built: forwarded to the provider and discarded.
#[derive(Debug, Clone, Serialize)]
pub struct OrderRequest {
    /// Amount in the smallest currency unit (paise for INR)
    pub amount: i64,

    /// Currency code
    pub currency: Currency,

    /// Unique receipt string (generated if not supplied)
    pub receipt: String,

    /// Free-form notes forwarded to the provider
    #[serde(skip_serializing_if = "HashMap::is_empty")]
    pub notes: HashMap<String, String>,
}

impl OrderRequest {
    /// Create a new order request with a generated unique receipt
    pub fn new(amount: i64, currency: Currency) -> Self {
        Self {
            amount,
            currency,
            receipt: format!("order_{}", Uuid::new_v4().simple()),
            notes: HashMap::new(),
        }
    }

    /// Builder: set an explicit receipt
    pub fn with_receipt(mut self, receipt: impl Into<String>) -> Self {
        self.receipt = receipt.into();
        self
    }

    /// Builder: attach a note
    pub fn with_note(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.notes.insert(key.into(), value.into());
        self
    }
}

/// A processor-side order record, as returned by the provider's
/// order-creation API. Relayed to the caller verbatim.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Order {
    /// Provider-assigned order ID (e.g. "order_IluGWxBm9U8zJ8")
    pub id: String,

    /// Entity discriminator, always "order"
    pub entity: String,

    /// Amount in smallest currency unit
    pub amount: i64,

    /// Amount already paid against this order
    #[serde(default)]
    pub amount_paid: i64,

    /// Amount outstanding
    #[serde(default)]
    pub amount_due: i64,

    /// Currency code
    pub currency: Currency,

    /// Receipt string echoed back by the provider
    #[serde(default)]
    pub receipt: Option<String>,

    /// Order status: "created", "attempted" or "paid"
    pub status: String,

    /// Number of payment attempts against this order
    #[serde(default)]
    pub attempts: u32,

    /// Notes echoed back by the provider
    #[serde(default)]
    pub notes: serde_json::Value,

    /// Creation time, epoch seconds
    pub created_at: i64,
}

impl Order {
    /// Creation time as a UTC timestamp
    pub fn created_at_utc(&self) -> Option<DateTime<Utc>> {
        DateTime::from_timestamp(self.created_at, 0)
    }

    /// Whether the order has been fully paid
    pub fn is_paid(&self) -> bool {
        self.status == "paid"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_request_generates_unique_receipts() {
        let a = OrderRequest::new(100, Currency::INR);
        let b = OrderRequest::new(100, Currency::INR);
        assert!(a.receipt.starts_with("order_"));
        assert_ne!(a.receipt, b.receipt);
    }

    #[test]
    fn test_order_request_serialization() {
        let request = OrderRequest::new(100, Currency::INR)
            .with_receipt("order_abc123")
            .with_note("description", "E-commerce purchase");

        let json = serde_json::to_value(&request).unwrap();
        assert_eq!(json["amount"], 100);
        assert_eq!(json["currency"], "INR");
        assert_eq!(json["receipt"], "order_abc123");
        assert_eq!(json["notes"]["description"], "E-commerce purchase");
    }

    #[test]
    fn test_empty_notes_not_serialized() {
        let request = OrderRequest::new(100, Currency::INR);
        let json = serde_json::to_value(&request).unwrap();
        assert!(json.get("notes").is_none());
    }

    #[test]
    fn test_order_deserialization() {
        let body = serde_json::json!({
            "id": "order_IluGWxBm9U8zJ8",
            "entity": "order",
            "amount": 100,
            "amount_paid": 0,
            "amount_due": 100,
            "currency": "INR",
            "receipt": "order_abc123",
            "status": "created",
            "attempts": 0,
            "notes": { "description": "E-commerce purchase" },
            "created_at": 1_700_000_000
        });

        let order: Order = serde_json::from_value(body).unwrap();
        assert_eq!(order.id, "order_IluGWxBm9U8zJ8");
        assert_eq!(order.currency, Currency::INR);
        assert!(!order.is_paid());
        assert!(order.created_at_utc().is_some());
    }

    #[test]
    fn test_currency_display() {
        assert_eq!(Currency::INR.to_string(), "INR");
        assert_eq!(Currency::INR.from_smallest_unit(100), 1.0);
    }
}
