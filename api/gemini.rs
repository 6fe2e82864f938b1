use std::sync::LazyLock;

use gemini_proxy::config::ForwarderConfig;
use gemini_proxy::forwarder::Forwarder;
use gemini_proxy::telemetry;
use vercel_runtime::{run, Body, Error, Request, Response};

/// Shared across warm invocations so pooled connections are reused.
static HTTP: LazyLock<reqwest::Client> = LazyLock::new(reqwest::Client::new);

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

/// POST /api/gemini — Forward a prompt to Gemini.
///
/// Body: `{"prompt": string, "systemInstruction"?: string}`. Returns the
/// Gemini response verbatim, 405 for any other method, or 500 with
/// `{"error": message}` when forwarding fails.
pub async fn handler(req: Request) -> Result<Response<Body>, Error> {
    let forwarder = Forwarder::with_client(ForwarderConfig::from_env(), HTTP.clone());
    forwarder.handle(req).await
}
