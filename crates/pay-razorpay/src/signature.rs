//! # Signature Verification
//!
//! HMAC-SHA256 signature verification for Razorpay webhooks and
//! client-supplied payment confirmations.
//!
//! Razorpay signs the exact raw request body for webhooks, and the string
//! `"{order_id}|{payment_id}"` for client-side payment confirmation. Both
//! digests are hex-encoded lowercase. The canonical messages must be
//! reproduced bit-for-bit; no whitespace, no re-serialization.

use hmac::{Hmac, Mac};
use sha2::Sha256;

type HmacSha256 = Hmac<Sha256>;

/// Compute the HMAC-SHA256 digest of `message`, hex-encoded lowercase.
pub fn compute_signature(secret: &str, message: &[u8]) -> String {
    let mut mac = HmacSha256::new_from_slice(secret.as_bytes())
        .expect("HMAC can take key of any size");
    mac.update(message);
    hex::encode(mac.finalize().into_bytes())
}

/// Verify a received signature against the HMAC-SHA256 of `message`.
///
/// Pure function of its three inputs: no side effects, no errors. Returns
/// `false` when `received` or `secret` is empty; callers distinguish
/// missing-signature and missing-secret from a mismatch before calling
/// so each gets its own diagnostic.
///
/// The comparison is constant-time.
pub fn verify_signature(message: &[u8], secret: &str, received: &str) -> bool {
    if received.is_empty() || secret.is_empty() {
        return false;
    }
    let expected = compute_signature(secret, message);
    constant_time_compare(received, &expected)
}

/// Canonical message for client-side payment confirmation.
///
/// Literal pipe separator, no whitespace: dictated by the upstream
/// processor's contract.
pub fn payment_message(order_id: &str, payment_id: &str) -> String {
    format!("{}|{}", order_id, payment_id)
}

/// Verify a client-supplied payment confirmation signature.
pub fn verify_payment_signature(
    order_id: &str,
    payment_id: &str,
    secret: &str,
    received: &str,
) -> bool {
    let message = payment_message(order_id, payment_id);
    verify_signature(message.as_bytes(), secret, received)
}

fn constant_time_compare(a: &str, b: &str) -> bool {
    if a.len() != b.len() {
        return false;
    }
    a.bytes()
        .zip(b.bytes())
        .fold(0, |acc, (x, y)| acc | (x ^ y))
        == 0
}
