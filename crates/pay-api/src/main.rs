//! # Razor-Relay RS
//!
//! HTTP relay between a storefront client and Razorpay.
//!
//! ## Usage
//!
//! ```bash
//! # Set environment variables
//! export RAZORPAY_KEY_ID=rzp_test_...
//! export RAZORPAY_KEY_SECRET=...
//! export RAZORPAY_WEBHOOK_SECRET=...
//!
//! # Run the server
//! razor-relay
//! ```

use pay_api::{routes, state::AppState};
use tracing::{info, Level};
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize logging
    tracing_subscriber::registry()
        .with(fmt::layer())
        .with(
            EnvFilter::builder()
                .with_default_directive(Level::INFO.into())
                .from_env_lossy(),
        )
        .init();

    // Initialize application state; missing credentials degrade
    // endpoints rather than aborting startup
    let state = AppState::from_env();

    let addr = state.config.socket_addr();
    let is_prod = state.config.is_production();

    info!("Environment: {}", state.config.environment);
    info!(
        "Razorpay key: {}",
        state.key_id_prefix.as_deref().unwrap_or("Not set")
    );
    info!(
        "Webhook secret: {}",
        if state.webhook_secret.is_some() { "Set" } else { "Missing" }
    );

    // Create router
    let app = routes::create_router(state);

    // Start server
    info!("Razor-Relay starting on http://{}", addr);

    if !is_prod {
        info!("Status:   GET  http://{}/", addr);
        info!("Order:    POST http://{}/create-order", addr);
        info!("Webhook:  POST http://{}/payment/webhook", addr);
        info!("Verify:   POST http://{}/payment/verify", addr);
    }

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
