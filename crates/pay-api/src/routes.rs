//! # Routes
//!
//! Axum router configuration for the payment relay.
//!
//! CORS uses an explicit origin allow-list plus a wildcard `*.vercel.app`
//! pattern; non-matching origins get no CORS grant, so the browser stops
//! them before any handler runs.

use crate::handlers;
use crate::state::AppState;
use axum::{
    http::{header, HeaderValue, Method},
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{AllowOrigin, CorsLayer},
    trace::TraceLayer,
};

/// Origins always allowed to call the API
const ALLOWED_ORIGINS: &[&str] = &[
    "https://payment-frontend.vercel.app", // prod frontend
    "http://localhost:3000",               // dev
    "http://localhost:5173",               // vite dev server
];

fn origin_allowed(origin: &HeaderValue) -> bool {
    let Ok(origin) = origin.to_str() else {
        return false;
    };
    ALLOWED_ORIGINS.contains(&origin) || origin.ends_with(".vercel.app")
}

/// Create the main application router
///
/// Routes:
/// - GET  `/` and `/health` - status, credential indicators (masked)
/// - POST `/create-order` - order-creation pass-through
/// - POST `/payment/webhook` - webhook signature verification + dispatch
/// - POST `/payment/verify` - client payment-confirmation check
pub fn create_router(state: AppState) -> Router {
    let cors = CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(|origin, _| origin_allowed(origin)))
        .allow_methods([Method::GET, Method::POST, Method::OPTIONS])
        .allow_headers([header::CONTENT_TYPE, header::AUTHORIZATION]);

    let payment_routes = Router::new()
        .route("/webhook", post(handlers::payment_webhook))
        .route("/verify", post(handlers::verify_payment));

    Router::new()
        .route("/", get(handlers::health))
        .route("/health", get(handlers::health))
        .route("/create-order", post(handlers::create_order))
        .nest("/payment", payment_routes)
        // Middleware
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        // State
        .with_state(state)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_origin_allow_list() {
        for &origin in ALLOWED_ORIGINS {
            assert!(origin_allowed(&HeaderValue::from_static(origin)));
        }
    }

    #[test]
    fn test_vercel_wildcard_accepted() {
        assert!(origin_allowed(&HeaderValue::from_static(
            "https://anything.vercel.app"
        )));
    }

    #[test]
    fn test_unknown_origin_rejected() {
        assert!(!origin_allowed(&HeaderValue::from_static(
            "https://evil.example.com"
        )));
        assert!(!origin_allowed(&HeaderValue::from_static(
            "http://localhost:9999"
        )));
    }
}
