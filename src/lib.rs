/// Gemini Proxy — Shared Library
///
/// This crate contains the request forwarder, the upstream Gemini
/// client, the payload models, and the configuration used by the
/// serverless handlers.
///
/// Each serverless function in `api/` imports from this library
/// to keep handlers thin and logic reusable.

pub mod config;
pub mod error;
pub mod forwarder;
pub mod models;
pub mod telemetry;
pub mod upstream;

pub fn version() -> &'static str {
    env!("CARGO_PKG_VERSION")
}
