//! # pay-api
//!
//! HTTP API layer for razor-relay-rs.
//!
//! This crate provides:
//! - Axum-based HTTP server
//! - Typed request/response structs per endpoint
//! - Webhook signature verification and dispatch at the boundary
//!
//! ## Endpoints
//!
//! | Method | Path | Description |
//! |--------|------|-------------|
//! | GET | `/` | Health/status with credential indicators |
//! | POST | `/create-order` | Order-creation pass-through |
//! | POST | `/payment/webhook` | Razorpay webhook |
//! | POST | `/payment/verify` | Client payment confirmation |

pub mod handlers;
pub mod routes;
pub mod state;

pub use routes::create_router;
pub use state::{AppConfig, AppState};
