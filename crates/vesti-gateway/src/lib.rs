//! HTTP gateway to the Vesti backend.
//!
//! [`HttpGateway`] is the single network-access component: it owns the
//! reqwest client (with its persistent cookie jar carrying the session
//! cookie), binds every backend endpoint, and normalizes failures into the
//! shared error taxonomy. Nothing here retries; a user-triggered "Retry" is
//! just another call.

pub mod client;
pub mod config;
mod wire;

pub use client::HttpGateway;
pub use config::GatewayConfig;
