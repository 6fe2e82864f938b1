//! Upstream Gemini client.
//!
//! The forwarder only needs one operation from the upstream side:
//! send a payload, get back a status and a body. [`Upstream`] is that
//! seam; [`GeminiClient`] is the real implementation over `reqwest`.

use std::future::Future;

use http::StatusCode;
use reqwest::header::{HeaderValue, CONTENT_TYPE};

use crate::error::ForwardError;
use crate::models::payload::GenerateContentPayload;

/// Raw reply from the upstream API, before any interpretation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UpstreamReply {
    pub status: StatusCode,
    pub body: String,
}

impl UpstreamReply {
    pub fn new(status: StatusCode, body: impl Into<String>) -> Self {
        UpstreamReply {
            status,
            body: body.into(),
        }
    }
}

/// Something that can execute a `generateContent` call.
pub trait Upstream {
    /// Sends `payload` authenticated with `api_key` and waits for the full reply.
    ///
    /// Only transport failures are errors; a non-2xx status is still `Ok`.
    fn generate(
        &self,
        api_key: &str,
        payload: &GenerateContentPayload,
    ) -> impl Future<Output = Result<UpstreamReply, ForwardError>> + Send;
}

/// Gemini `generateContent` client.
#[derive(Debug, Clone)]
pub struct GeminiClient {
    http: reqwest::Client,
    endpoint: String,
}

impl GeminiClient {
    /// Creates a client for the given endpoint URL.
    pub fn new(endpoint: impl Into<String>) -> Self {
        Self::with_client(reqwest::Client::new(), endpoint)
    }

    /// Creates a client that shares an existing connection pool.
    pub fn with_client(http: reqwest::Client, endpoint: impl Into<String>) -> Self {
        GeminiClient {
            http,
            endpoint: endpoint.into(),
        }
    }

    /// Builds the outbound request without sending it.
    pub fn build_request(
        &self,
        api_key: &str,
        payload: &GenerateContentPayload,
    ) -> Result<reqwest::Request, ForwardError> {
        let request = self
            .http
            .post(&self.endpoint)
            .query(&[("key", api_key)])
            .header(CONTENT_TYPE, HeaderValue::from_static("application/json"))
            .json(payload)
            .build()?;
        Ok(request)
    }
}

impl Upstream for GeminiClient {
    async fn generate(
        &self,
        api_key: &str,
        payload: &GenerateContentPayload,
    ) -> Result<UpstreamReply, ForwardError> {
        let request = self.build_request(api_key, payload)?;
        tracing::debug!(endpoint = %self.endpoint, "sending generateContent request");

        let response = self.http.execute(request).await?;
        let status = response.status();
        let body = response.text().await?;

        tracing::debug!(status = status.as_u16(), bytes = body.len(), "upstream replied");
        Ok(UpstreamReply { status, body })
    }
}
