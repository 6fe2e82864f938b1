//! Structured logging for the serverless handlers.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

/// Filter used when `RUST_LOG` is not set.
pub const DEFAULT_FILTER: &str = "info";

/// Installs the global tracing subscriber.
///
/// Safe to call more than once: warm invocations reuse the process and
/// the second install is ignored. Returns true if this call installed it.
pub fn init() -> bool {
    tracing_subscriber::registry()
        .with(EnvFilter::try_from_default_env().unwrap_or_else(|_| DEFAULT_FILTER.into()))
        .with(tracing_subscriber::fmt::layer().with_ansi(false))
        .try_init()
        .is_ok()
}
