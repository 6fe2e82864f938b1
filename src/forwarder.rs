//! Forwarder — relays a caller's prompt to Gemini and maps the outcome
//! back to an HTTP response.
//!
//! One invocation, one outbound call. The upstream JSON is returned
//! verbatim on success; every failure other than a wrong method becomes
//! a 500 with an `{"error": message}` body.
use serde_json::Value;
use vercel_runtime::{Body, Error, Request, Response, StatusCode};

use crate::config::ForwarderConfig;
use crate::error::ForwardError;
use crate::models::payload::GenerateContentPayload;
use crate::models::prompt::PromptRequest;
use crate::upstream::{GeminiClient, Upstream};

/// Stateless request forwarder with its configuration injected up front.
pub struct Forwarder<U> {
    config: ForwarderConfig,
    upstream: U,
}

impl Forwarder<GeminiClient> {
    /// Builds a forwarder that talks to the real Gemini endpoint.
    pub fn from_config(config: ForwarderConfig) -> Self {
        Self::with_client(config, reqwest::Client::new())
    }

    /// Same as [`from_config`](Self::from_config), reusing `http` and its
    /// connection pool.
    pub fn with_client(config: ForwarderConfig, http: reqwest::Client) -> Self {
        let upstream = GeminiClient::with_client(http, config.endpoint.clone());
        Forwarder::new(config, upstream)
    }
}

impl<U: Upstream> Forwarder<U> {
    pub fn new(config: ForwarderConfig, upstream: U) -> Self {
        Forwarder { config, upstream }
    }

    /// Handles one inbound request.
    ///
    /// Only response-builder failures surface as `Err`; forwarding
    /// failures are already mapped to a response.
    pub async fn handle(&self, req: Request) -> Result<Response<Body>, Error> {
        match self.forward(&req).await {
            Ok(data) => Ok(Response::builder()
                .status(StatusCode::OK)
                .header("Content-Type", "application/json")
                .body(Body::Text(data.to_string()))?),
            Err(err) => {
                if err.status_code() == StatusCode::INTERNAL_SERVER_ERROR {
                    tracing::error!(error = %err, "forwarding to Gemini failed");
                } else {
                    tracing::info!(method = %req.method(), "rejected non-POST request");
                }
                Ok(Response::builder()
                    .status(err.status_code())
                    .header("Content-Type", err.content_type())
                    .body(Body::Text(err.response_body()))?)
            }
        }
    }

    /// Runs the forwarding steps and returns the upstream JSON on success.
    pub async fn forward(&self, req: &Request) -> Result<Value, ForwardError> {
        if *req.method() != http::Method::POST {
            return Err(ForwardError::MethodNotAllowed);
        }

        let api_key = self
            .config
            .api_key
            .as_deref()
            .ok_or(ForwardError::ConfigMissing)?;

        let request = PromptRequest::from_slice(body_bytes(req.body()))?;
        let payload = GenerateContentPayload::from(request);

        let reply = self.upstream.generate(api_key, &payload).await?;
        if !reply.status.is_success() {
            tracing::error!(
                status = reply.status.as_u16(),
                body = %reply.body,
                "Gemini API error"
            );
            return Err(ForwardError::Upstream(reply.status.as_u16()));
        }

        Ok(serde_json::from_str(&reply.body)?)
    }
}

fn body_bytes(body: &Body) -> &[u8] {
    match body {
        Body::Empty => &[][..],
        Body::Text(text) => text.as_bytes(),
        Body::Binary(bytes) => bytes.as_slice(),
    }
}
