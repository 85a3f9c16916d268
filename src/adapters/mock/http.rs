//! Mock HTTP client for testing.
//!
//! Responses can be fixed per URL, queued per URL (one per call, in order),
//! delayed, held behind a gate the test opens, or left pending forever. The
//! last three let tests control the order in which concurrent submissions
//! resolve.

use async_trait::async_trait;
use bytes::Bytes;
use std::collections::{HashMap, VecDeque};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::Notify;

use crate::traits::{Headers, HttpClient, HttpError, Response};

/// A recorded HTTP request for verification in tests.
#[derive(Debug, Clone)]
pub struct RecordedRequest {
    /// HTTP method (GET or POST)
    pub method: String,
    /// Request URL
    pub url: String,
    /// Request headers
    pub headers: Headers,
    /// Request body (for POST requests)
    pub body: Option<String>,
}

/// Configuration for a mock response.
#[derive(Debug, Clone)]
pub enum MockResponse {
    /// Return a response
    Success(Response),
    /// Return an error
    Error(HttpError),
    /// Sleep, then behave like the inner response
    Delayed(Duration, Box<MockResponse>),
    /// Wait until the gate is opened, then behave like the inner response
    Gated(Arc<Notify>, Box<MockResponse>),
    /// Never resolve
    Pending,
}

impl MockResponse {
    /// A 200 response with a JSON body.
    pub fn json(value: serde_json::Value) -> Self {
        MockResponse::Success(Response::new(200, Bytes::from(value.to_string())))
    }

    /// A response with the given status and raw body.
    pub fn status(status: u16, body: &str) -> Self {
        MockResponse::Success(Response::new(status, Bytes::from(body.to_string())))
    }

    /// Hold this response until `gate.notify_one()` is called.
    pub fn gated(self, gate: Arc<Notify>) -> Self {
        MockResponse::Gated(gate, Box::new(self))
    }

    /// Deliver this response after `delay`.
    pub fn delayed(self, delay: Duration) -> Self {
        MockResponse::Delayed(delay, Box::new(self))
    }
}

/// Mock HTTP client for testing.
///
/// # Example
///
/// ```ignore
/// use stdassess::adapters::mock::{MockHttpClient, MockResponse};
///
/// let client = MockHttpClient::new();
/// client.push_response(url, MockResponse::json(json!({"code": 0})));
/// client.push_response(url, MockResponse::Pending);
/// // first POST resolves, second one hangs
/// ```
#[derive(Debug, Clone)]
pub struct MockHttpClient {
    /// Fixed responses by URL (exact or prefix match)
    responses: Arc<Mutex<HashMap<String, MockResponse>>>,
    /// One-shot responses consumed in order before the fixed ones
    queued: Arc<Mutex<HashMap<String, VecDeque<MockResponse>>>>,
    /// Default response when nothing matches
    default_response: Arc<Mutex<Option<MockResponse>>>,
    /// Recorded requests for verification
    requests: Arc<Mutex<Vec<RecordedRequest>>>,
}

impl MockHttpClient {
    /// Create a new mock HTTP client.
    pub fn new() -> Self {
        Self {
            responses: Arc::new(Mutex::new(HashMap::new())),
            queued: Arc::new(Mutex::new(HashMap::new())),
            default_response: Arc::new(Mutex::new(None)),
            requests: Arc::new(Mutex::new(Vec::new())),
        }
    }

    /// Set a response for every request to `url`.
    pub fn set_response(&self, url: &str, response: MockResponse) {
        let mut responses = self.responses.lock().unwrap();
        responses.insert(url.to_string(), response);
    }

    /// Queue a response for the next unanswered request to `url`.
    pub fn push_response(&self, url: &str, response: MockResponse) {
        let mut queued = self.queued.lock().unwrap();
        queued
            .entry(url.to_string())
            .or_default()
            .push_back(response);
    }

    /// Set a default response for URLs without specific matches.
    pub fn set_default_response(&self, response: MockResponse) {
        let mut default = self.default_response.lock().unwrap();
        *default = Some(response);
    }

    /// Get all recorded requests.
    pub fn get_requests(&self) -> Vec<RecordedRequest> {
        self.requests.lock().unwrap().clone()
    }

    /// Number of requests made so far.
    pub fn request_count(&self) -> usize {
        self.requests.lock().unwrap().len()
    }

    /// Clear all recorded requests.
    pub fn clear_requests(&self) {
        self.requests.lock().unwrap().clear();
    }

    fn record_request(&self, method: &str, url: &str, headers: &Headers, body: Option<String>) {
        let mut requests = self.requests.lock().unwrap();
        requests.push(RecordedRequest {
            method: method.to_string(),
            url: url.to_string(),
            headers: headers.clone(),
            body,
        });
    }

    fn take_response(&self, url: &str) -> Option<MockResponse> {
        if let Some(queue) = self.queued.lock().unwrap().get_mut(url) {
            if let Some(response) = queue.pop_front() {
                return Some(response);
            }
        }

        let responses = self.responses.lock().unwrap();
        if let Some(response) = responses.get(url) {
            return Some(response.clone());
        }
        for (pattern, response) in responses.iter() {
            if url.starts_with(pattern) {
                return Some(response.clone());
            }
        }

        self.default_response.lock().unwrap().clone()
    }

    async fn resolve(response: Option<MockResponse>, url: &str) -> Result<Response, HttpError> {
        let mut current = response;
        loop {
            match current {
                Some(MockResponse::Success(response)) => return Ok(response),
                Some(MockResponse::Error(err)) => return Err(err),
                Some(MockResponse::Delayed(delay, inner)) => {
                    tokio::time::sleep(delay).await;
                    current = Some(*inner);
                }
                Some(MockResponse::Gated(gate, inner)) => {
                    gate.notified().await;
                    current = Some(*inner);
                }
                Some(MockResponse::Pending) => return futures::future::pending().await,
                None => {
                    return Err(HttpError::Other(format!(
                        "No mock response for URL: {}",
                        url
                    )))
                }
            }
        }
    }
}

impl Default for MockHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for MockHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("GET", url, headers, None);
        let response = self.take_response(url);
        Self::resolve(response, url).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.record_request("POST", url, headers, Some(body.to_string()));
        let response = self.take_response(url);
        Self::resolve(response, url).await
    }
}
