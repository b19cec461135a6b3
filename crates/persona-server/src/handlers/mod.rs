//! HTTP route handlers for the persona server.

pub mod evaluate;

/// Health check endpoint.
pub async fn health() -> &'static str {
    "OK"
}
