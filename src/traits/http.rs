//! HTTP transport trait.
//!
//! The assessment client only ever speaks JSON over GET and POST, so that is
//! all the trait covers. Production uses reqwest, tests swap in
//! [`MockHttpClient`](crate::adapters::MockHttpClient).

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::HashMap;

/// Request headers.
pub type Headers = HashMap<String, String>;

/// Status and body of a finished request. Any status, 2xx or not.
#[derive(Debug, Clone)]
pub struct Response {
    pub status: u16,
    pub body: Bytes,
}

impl Response {
    pub fn new(status: u16, body: impl Into<Bytes>) -> Self {
        Self {
            status,
            body: body.into(),
        }
    }

    /// 2xx.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Decode the body as JSON.
    pub fn json<T: serde::de::DeserializeOwned>(&self) -> Result<T, serde_json::Error> {
        serde_json::from_slice(&self.body)
    }

    /// The body as lossy UTF-8, cut to `max_chars`. For error messages and
    /// logs, where a proxy's HTML error page should not be dumped whole.
    pub fn snippet(&self, max_chars: usize) -> String {
        let text = String::from_utf8_lossy(&self.body);
        let text = text.trim();
        match text.char_indices().nth(max_chars) {
            Some((cut, _)) => format!("{}...", &text[..cut]),
            None => text.to_string(),
        }
    }
}

/// A request that produced no response.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HttpError {
    /// Could not reach the host
    Connect(String),
    /// The adapter's own deadline elapsed
    Timeout(String),
    /// The URL could not be used
    InvalidUrl(String),
    /// Anything else, including a body that could not be read
    Other(String),
}

impl std::fmt::Display for HttpError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            HttpError::Connect(msg) => write!(f, "could not connect: {}", msg),
            HttpError::Timeout(msg) => write!(f, "timed out: {}", msg),
            HttpError::InvalidUrl(msg) => write!(f, "invalid url: {}", msg),
            HttpError::Other(msg) => write!(f, "{}", msg),
        }
    }
}

impl std::error::Error for HttpError {}

/// Transport adapter for the assessment backend.
///
/// Implementations return `Ok` for any HTTP response, including non-2xx
/// ones; classifying the status is the caller's job. `Err` is reserved for
/// requests that produced no response at all.
///
/// # Example
///
/// ```ignore
/// use stdassess::traits::{HttpClient, Headers};
///
/// async fn probe<C: HttpClient>(client: &C) -> bool {
///     client
///         .get("http://localhost:9999/admin/evaluation/test", &Headers::new())
///         .await
///         .map(|r| r.is_success())
///         .unwrap_or(false)
/// }
/// ```
#[async_trait]
pub trait HttpClient: Send + Sync {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError>;

    /// POST an already serialized body.
    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError>;
}

/// Headers for a JSON request body.
pub fn json_headers() -> Headers {
    Headers::from([
        ("Content-Type".to_string(), "application/json".to_string()),
        ("Accept".to_string(), "application/json".to_string()),
    ])
}
