//! Reqwest-based HTTP client adapter.
//!
//! Production implementation of [`HttpClient`]. The underlying
//! `reqwest::Client` carries the fixed request deadline so a hung backend
//! surfaces as [`HttpError::Timeout`] even outside the submission driver.

use async_trait::async_trait;
use std::time::Duration;

use crate::config::REQUEST_TIMEOUT;
use crate::traits::{Headers, HttpClient, HttpError, Response};

/// Connecting should never take a meaningful share of the request deadline.
const CONNECT_TIMEOUT: Duration = Duration::from_secs(10);

/// Sent so backend access logs can tell the terminal client apart.
const USER_AGENT: &str = concat!("stdassess/", env!("CARGO_PKG_VERSION"));

/// HTTP client implementation using reqwest.
///
/// # Example
///
/// ```ignore
/// use stdassess::adapters::ReqwestHttpClient;
/// use stdassess::client::AssessClient;
///
/// let client = AssessClient::new("http://localhost:9999", ReqwestHttpClient::new());
/// let healthy = client.health_check().await?;
/// ```
#[derive(Debug, Clone)]
pub struct ReqwestHttpClient {
    client: reqwest::Client,
}

impl ReqwestHttpClient {
    /// Create a client with the assessment deadlines.
    pub fn new() -> Self {
        let client = reqwest::Client::builder()
            .timeout(REQUEST_TIMEOUT)
            .connect_timeout(CONNECT_TIMEOUT)
            .user_agent(USER_AGENT)
            .build()
            .unwrap_or_else(|e| {
                tracing::warn!("Falling back to default reqwest client: {}", e);
                reqwest::Client::new()
            });
        Self { client }
    }

    /// Wrap a preconfigured reqwest::Client.
    pub fn with_client(client: reqwest::Client) -> Self {
        Self { client }
    }

    fn classify(err: reqwest::Error) -> HttpError {
        if err.is_timeout() {
            HttpError::Timeout(err.to_string())
        } else if err.is_connect() {
            HttpError::Connect(err.to_string())
        } else if err.is_builder() {
            HttpError::InvalidUrl(err.to_string())
        } else {
            HttpError::Other(err.to_string())
        }
    }

    async fn send(
        &self,
        builder: reqwest::RequestBuilder,
        headers: &Headers,
    ) -> Result<Response, HttpError> {
        let builder = headers
            .iter()
            .fold(builder, |builder, (key, value)| builder.header(key, value));

        let response = builder.send().await.map_err(Self::classify)?;
        let status = response.status().as_u16();
        let body = response.bytes().await.map_err(Self::classify)?;
        tracing::trace!("HTTP {} ({} bytes)", status, body.len());

        Ok(Response::new(status, body))
    }
}

impl Default for ReqwestHttpClient {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl HttpClient for ReqwestHttpClient {
    async fn get(&self, url: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.get(url), headers).await
    }

    async fn post(&self, url: &str, body: &str, headers: &Headers) -> Result<Response, HttpError> {
        self.send(self.client.post(url).body(body.to_string()), headers)
            .await
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_user_agent_names_the_client() {
        assert!(USER_AGENT.starts_with("stdassess/"));
    }

    #[tokio::test]
    async fn test_invalid_url_is_not_a_response() {
        let client = ReqwestHttpClient::new();
        let result = client.get("not-a-valid-url", &Headers::new()).await;
        assert!(matches!(
            result,
            Err(HttpError::InvalidUrl(_)) | Err(HttpError::Other(_))
        ));
    }

    #[tokio::test]
    async fn test_connection_refused() {
        let client = ReqwestHttpClient::default();
        let result = client
            .post("http://127.0.0.1:1/admin/evaluation/assess", "{}", &Headers::new())
            .await;
        assert!(matches!(
            result,
            Err(HttpError::Connect(_)) | Err(HttpError::Other(_))
        ));
    }
}
