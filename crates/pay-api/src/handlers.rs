//! # Request Handlers
//!
//! Axum request handlers for the payment relay.
//!
//! Every endpoint has explicit typed request/response structs, validated
//! at the boundary before any core logic runs. Handler faults are
//! converted to JSON error bodies; nothing here crashes the process.

use crate::state::AppState;
use axum::{
    body::Bytes,
    extract::State,
    http::{HeaderMap, StatusCode},
    response::{IntoResponse, Response},
    Json,
};
use pay_core::{Currency, OrderRequest, PaymentError, WebhookEnvelope};
use pay_razorpay::{dispatch_webhook_event, signature};
use serde::{Deserialize, Serialize};
use tracing::{debug, error, info, instrument, warn};

// =============================================================================
// Request/Response Types
// =============================================================================

/// Generic error body: `{ "error": ... }`
#[derive(Debug, Serialize)]
pub struct ErrorBody {
    pub error: String,
}

impl ErrorBody {
    pub fn new(error: impl Into<String>) -> Self {
        Self { error: error.into() }
    }
}

/// Order-creation fault response, provider fields preserved verbatim
#[derive(Debug, Serialize)]
pub struct OrderFaultResponse {
    pub error: String,
    pub description: Option<String>,
    pub code: Option<String>,
}

/// Webhook acknowledgment
#[derive(Debug, Serialize)]
pub struct WebhookAck {
    pub status: &'static str,
    pub event: String,
}

/// Client payment-confirmation request
#[derive(Debug, Deserialize)]
pub struct VerifyPaymentRequest {
    #[serde(default)]
    pub razorpay_order_id: Option<String>,
    #[serde(default)]
    pub razorpay_payment_id: Option<String>,
    #[serde(default)]
    pub razorpay_signature: Option<String>,
}

/// Missing-field validation response
#[derive(Debug, Serialize)]
pub struct MissingFieldsResponse {
    pub error: String,
    pub required: Vec<&'static str>,
}

/// Client payment-confirmation response
#[derive(Debug, Serialize)]
pub struct VerifyPaymentResponse {
    pub success: bool,
    pub message: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub payment_id: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub order_id: Option<String>,
}

fn order_fault_response(err: PaymentError) -> (StatusCode, Json<OrderFaultResponse>) {
    let status =
        StatusCode::from_u16(err.status_code()).unwrap_or(StatusCode::INTERNAL_SERVER_ERROR);

    let response = match err {
        PaymentError::Provider { code, description } => OrderFaultResponse {
            error: format!("Provider error [{}]: {}", code, description),
            description: Some(description),
            code: Some(code),
        },
        other => OrderFaultResponse {
            error: other.to_string(),
            description: None,
            code: None,
        },
    };

    (status, Json(response))
}

// =============================================================================
// Handlers
// =============================================================================

/// Health/status endpoint.
///
/// Reports whether each credential is configured without ever exposing
/// the values themselves (key ID is masked to its first 8 chars).
pub async fn health(State(state): State<AppState>) -> impl IntoResponse {
    Json(serde_json::json!({
        "message": "Razorpay payment relay is running",
        "status": "success",
        "environment": {
            "key_id_set": state.key_id_prefix.is_some(),
            "key_secret_set": state.key_secret.is_some(),
            "webhook_secret_set": state.webhook_secret.is_some(),
            "key_id_prefix": state.key_id_prefix.as_deref().unwrap_or("Not set"),
        }
    }))
}

/// Create an order with the payment processor.
///
/// A single pass-through call: amount and currency are fixed server-side
/// in this version, and the processor's `Order` object is relayed to the
/// caller verbatim.
#[instrument(skip(state))]
pub async fn create_order(
    State(state): State<AppState>,
) -> Result<Json<pay_core::Order>, (StatusCode, Json<OrderFaultResponse>)> {
    let gateway = state.gateway.as_ref().ok_or_else(|| {
        order_fault_response(PaymentError::Configuration(
            "Razorpay credentials not configured".to_string(),
        ))
    })?;

    let request = OrderRequest::new(100, Currency::INR)
        .with_note("description", "E-commerce purchase");

    let order = gateway.create_order(&request).await.map_err(|e| {
        error!("Order creation failed: {}", e);
        order_fault_response(e)
    })?;

    info!("Order created: {}", order.id);

    Ok(Json(order))
}

/// Handle a Razorpay webhook notification.
///
/// The signature is verified over the exact raw body bytes as received.
/// No dispatch happens before verification succeeds; malformed or
/// unsigned requests still get an explicit rejection body. Once an
/// envelope is verified and structurally accepted the response is 200
/// regardless of which dispatch branch fired, so the processor's retry
/// policy does not redeliver it.
#[instrument(skip(state, headers, body))]
pub async fn payment_webhook(
    State(state): State<AppState>,
    headers: HeaderMap,
    body: Bytes,
) -> Response {
    // Direct key lookup on the header map
    let received_signature = headers
        .get("x-razorpay-signature")
        .and_then(|v| v.to_str().ok())
        .unwrap_or("");

    info!(
        signature_present = !received_signature.is_empty(),
        body_len = body.len(),
        "Webhook received"
    );

    if received_signature.is_empty() {
        warn!("Missing webhook signature");
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Missing webhook signature")),
        )
            .into_response();
    }

    let Some(secret) = state.webhook_secret.as_deref().filter(|s| !s.is_empty()) else {
        error!("Webhook secret not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Webhook secret not configured")),
        )
            .into_response();
    };

    if !signature::verify_signature(&body, secret, received_signature) {
        warn!("Invalid webhook signature");
        // The expected digest is a diagnostic leak; debug level only.
        debug!(
            expected = %signature::compute_signature(secret, &body),
            received = %received_signature,
            "Signature mismatch detail"
        );
        return (
            StatusCode::BAD_REQUEST,
            Json(ErrorBody::new("Invalid webhook signature")),
        )
            .into_response();
    }

    let envelope: WebhookEnvelope = match serde_json::from_slice(&body) {
        Ok(envelope) => envelope,
        Err(e) => {
            warn!("Invalid webhook payload: {}", e);
            return (
                StatusCode::BAD_REQUEST,
                Json(ErrorBody::new(format!("Invalid webhook payload: {}", e))),
            )
                .into_response();
        }
    };

    info!("Processing webhook event: {}", envelope.event);

    // Downstream handler failures are the collaborator's concern to retry;
    // the envelope was received and verified, so acknowledge regardless.
    if let Err(e) = dispatch_webhook_event(state.webhook_handler.as_ref(), &envelope) {
        error!("Webhook handler error: {}", e);
    }

    (
        StatusCode::OK,
        Json(WebhookAck {
            status: "ok",
            event: envelope.event,
        }),
    )
        .into_response()
}

/// Verify a client-supplied payment confirmation signature.
///
/// The canonical message is `order_id|payment_id` signed with the API
/// key secret.
#[instrument(skip(state, request))]
pub async fn verify_payment(
    State(state): State<AppState>,
    Json(request): Json<VerifyPaymentRequest>,
) -> Response {
    let mut missing = Vec::new();
    if request.razorpay_order_id.as_deref().unwrap_or("").is_empty() {
        missing.push("razorpay_order_id");
    }
    if request.razorpay_payment_id.as_deref().unwrap_or("").is_empty() {
        missing.push("razorpay_payment_id");
    }
    if request.razorpay_signature.as_deref().unwrap_or("").is_empty() {
        missing.push("razorpay_signature");
    }

    if !missing.is_empty() {
        return (
            StatusCode::BAD_REQUEST,
            Json(MissingFieldsResponse {
                error: "Missing required fields".to_string(),
                required: missing,
            }),
        )
            .into_response();
    }

    // Validated above
    let order_id = request.razorpay_order_id.unwrap_or_default();
    let payment_id = request.razorpay_payment_id.unwrap_or_default();
    let received_signature = request.razorpay_signature.unwrap_or_default();

    let Some(secret) = state.key_secret.as_deref().filter(|s| !s.is_empty()) else {
        error!("Key secret not configured");
        return (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorBody::new("Key secret not configured")),
        )
            .into_response();
    };

    let authentic =
        signature::verify_payment_signature(&order_id, &payment_id, secret, &received_signature);

    if authentic {
        info!("Payment verified: order={}, payment={}", order_id, payment_id);
        (
            StatusCode::OK,
            Json(VerifyPaymentResponse {
                success: true,
                message: "Payment verified successfully".to_string(),
                payment_id: Some(payment_id),
                order_id: Some(order_id),
            }),
        )
            .into_response()
    } else {
        warn!("Payment verification failed: order={}", order_id);
        (
            StatusCode::BAD_REQUEST,
            Json(VerifyPaymentResponse {
                success: false,
                message: "Payment verification failed".to_string(),
                payment_id: None,
                order_id: None,
            }),
        )
            .into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_order_fault_preserves_provider_fields() {
        let err = PaymentError::Provider {
            code: "BAD_REQUEST_ERROR".into(),
            description: "Authentication failed".into(),
        };
        let (status, Json(body)) = order_fault_response(err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert_eq!(body.code.as_deref(), Some("BAD_REQUEST_ERROR"));
        assert_eq!(body.description.as_deref(), Some("Authentication failed"));
        assert!(body.error.contains("BAD_REQUEST_ERROR"));
    }

    #[test]
    fn test_order_fault_configuration_is_500() {
        let err = PaymentError::Configuration("Razorpay credentials not configured".into());
        let (status, Json(body)) = order_fault_response(err);

        assert_eq!(status, StatusCode::INTERNAL_SERVER_ERROR);
        assert!(body.description.is_none());
        assert!(body.code.is_none());
    }

    #[test]
    fn test_verify_response_omits_ids_on_failure() {
        let response = VerifyPaymentResponse {
            success: false,
            message: "Payment verification failed".to_string(),
            payment_id: None,
            order_id: None,
        };
        let json = serde_json::to_value(&response).unwrap();
        assert_eq!(json["success"], false);
        assert!(json.get("payment_id").is_none());
        assert!(json.get("order_id").is_none());
    }
}
