use gemini_proxy::config::ForwarderConfig;
use gemini_proxy::{telemetry, version};
use serde_json::json;
use vercel_runtime::{run, Body, Error, Request, Response, StatusCode};

#[tokio::main]
async fn main() -> Result<(), Error> {
    telemetry::init();
    run(handler).await
}

pub async fn handler(_req: Request) -> Result<Response<Body>, Error> {
    let config = ForwarderConfig::from_env();
    let payload = json!({
        "status": "ok",
        "version": version(),
        "upstreamConfigured": config.has_api_key(),
    });

    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Content-Type", "application/json")
        .body(Body::Text(payload.to_string()))?)
}
