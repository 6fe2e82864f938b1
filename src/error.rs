//! Forwarding failures and their mapping to HTTP responses.
//!
//! Everything except [`ForwardError::MethodNotAllowed`] collapses to a
//! 500 with an `{"error": message}` body. The upstream status code is
//! reported in the message only, never as the response status.

use http::StatusCode;
use serde_json::json;
use thiserror::Error;

/// Errors that can end a forwarding invocation.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ForwardError {
    /// Inbound request did not use POST.
    #[error("Method Not Allowed")]
    MethodNotAllowed,

    /// No API key available on the server.
    #[error("API key not configured on server")]
    ConfigMissing,

    /// Upstream answered with a non-2xx status.
    #[error("Gemini API responded with status: {0}")]
    Upstream(u16),

    /// Network failure or malformed JSON at any stage.
    #[error("{0}")]
    Transport(String),
}

impl ForwardError {
    /// HTTP status returned to the caller.
    pub fn status_code(&self) -> StatusCode {
        match self {
            ForwardError::MethodNotAllowed => StatusCode::METHOD_NOT_ALLOWED,
            _ => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Content type of [`response_body`](Self::response_body).
    pub fn content_type(&self) -> &'static str {
        match self {
            ForwardError::MethodNotAllowed => "text/plain; charset=utf-8",
            _ => "application/json",
        }
    }

    /// Body returned to the caller.
    pub fn response_body(&self) -> String {
        match self {
            ForwardError::MethodNotAllowed => self.to_string(),
            _ => json!({ "error": self.to_string() }).to_string(),
        }
    }
}

impl From<reqwest::Error> for ForwardError {
    /// The request URL carries the API key, so it is stripped from the message.
    fn from(err: reqwest::Error) -> Self {
        ForwardError::Transport(err.without_url().to_string())
    }
}

impl From<serde_json::Error> for ForwardError {
    fn from(err: serde_json::Error) -> Self {
        ForwardError::Transport(err.to_string())
    }
}
