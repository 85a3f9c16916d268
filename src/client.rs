//! Typed client for the assessment backend.
//!
//! Wraps an [`HttpClient`] with the endpoint contracts: the enveloped
//! primary assessment, the unwrapped secondary assessment and the health
//! probe. Every call is bounded by a deadline and every failure comes back
//! already classified as an [`AssessError`].

use std::sync::Arc;
use std::time::Duration;

use tracing::{debug, warn};

use crate::config::{AssessConfig, REQUEST_TIMEOUT};
use crate::error::{ApplicationError, AssessError, AssessResult, TransportError};
use crate::models::{
    ApiEnvelope, AssessmentRequest, AssessmentResult, StandardAssessRequest,
    StandardAssessResponse,
};
use crate::traits::{json_headers, Headers, HttpClient, Response};

/// Primary assessment endpoint.
pub const ASSESS_PATH: &str = "/admin/evaluation/assess";

/// Secondary assessment endpoint (free-text content).
pub const STANDARD_ASSESS_PATH: &str = "/assess/standard";

/// Health probe endpoint.
pub const HEALTH_PATH: &str = "/admin/evaluation/test";

/// How much of a failed response body is kept for the log.
const ERROR_BODY_CHARS: usize = 200;

/// The health probe should answer quickly or not at all.
pub const HEALTH_TIMEOUT: Duration = Duration::from_secs(10);

/// Client for the assessment backend.
pub struct AssessClient<C: HttpClient> {
    /// Base URL without a trailing slash
    base_url: String,
    http: Arc<C>,
}

impl<C: HttpClient> Clone for AssessClient<C> {
    fn clone(&self) -> Self {
        Self {
            base_url: self.base_url.clone(),
            http: Arc::clone(&self.http),
        }
    }
}

impl<C: HttpClient> AssessClient<C> {
    /// Create a client talking to `base_url` through `http`.
    pub fn new(base_url: impl Into<String>, http: C) -> Self {
        Self::with_shared(base_url, Arc::new(http))
    }

    /// Create a client over an adapter the caller keeps a handle to.
    pub fn with_shared(base_url: impl Into<String>, http: Arc<C>) -> Self {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        Self { base_url, http }
    }

    /// Create a client from configuration.
    pub fn from_config(config: &AssessConfig, http: C) -> Self {
        Self::new(config.base_url.clone(), http)
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }

    /// Run the primary assessment for a validated title.
    ///
    /// Sends `POST /admin/evaluation/assess` with `{"title": ...}` and waits
    /// at most [`REQUEST_TIMEOUT`].
    ///
    /// # Errors
    /// - [`TransportError`] for connection failures, the deadline, non-2xx
    ///   statuses and bodies that are not an envelope
    /// - [`ApplicationError`] when the envelope reports failure, carries no
    ///   data, or the result status is not `SUCCESS`
    pub async fn assess(&self, request: &AssessmentRequest) -> AssessResult<AssessmentResult> {
        let url = self.url(ASSESS_PATH);
        let body = serde_json::to_string(request)?;
        debug!("POST {} title={:?}", url, request.title());

        let response = self
            .post_with_deadline(&url, &body, REQUEST_TIMEOUT, "assessment request")
            .await?;
        classify_assessment(&response)
    }

    /// Run the secondary assessment on free-text content.
    ///
    /// The response is not enveloped; any 2xx body that decodes is a success.
    pub async fn assess_content(
        &self,
        request: &StandardAssessRequest,
    ) -> AssessResult<StandardAssessResponse> {
        let url = self.url(STANDARD_ASSESS_PATH);
        let body = serde_json::to_string(request)?;
        debug!("POST {} language={}", url, request.language.as_str());

        let response = self
            .post_with_deadline(&url, &body, REQUEST_TIMEOUT, "content assessment")
            .await?;
        ensure_success(&response)?;
        Ok(response.json::<StandardAssessResponse>()?)
    }

    /// Probe the backend.
    ///
    /// # Returns
    /// `true` if the probe answered 2xx, `false` for any other status
    pub async fn health_check(&self) -> Result<bool, TransportError> {
        let url = self.url(HEALTH_PATH);
        let headers = Headers::new();
        let request = self.http.get(&url, &headers);
        match tokio::time::timeout(HEALTH_TIMEOUT, request).await {
            Ok(Ok(response)) => Ok(response.is_success()),
            Ok(Err(err)) => Err(TransportError::from_http(err, &url)),
            Err(_) => Err(TransportError::Timeout {
                operation: "health check".to_string(),
                duration_secs: HEALTH_TIMEOUT.as_secs(),
            }),
        }
    }

    async fn post_with_deadline(
        &self,
        url: &str,
        body: &str,
        deadline: Duration,
        operation: &str,
    ) -> Result<Response, TransportError> {
        let headers = json_headers();
        let request = self.http.post(url, body, &headers);
        match tokio::time::timeout(deadline, request).await {
            Ok(Ok(response)) => Ok(response),
            Ok(Err(err)) => {
                warn!("{} to {} failed: {}", operation, url, err);
                Err(TransportError::from_http(err, url))
            }
            Err(_) => {
                warn!("{} to {} timed out after {:?}", operation, url, deadline);
                Err(TransportError::Timeout {
                    operation: operation.to_string(),
                    duration_secs: deadline.as_secs(),
                })
            }
        }
    }
}

/// Classify a primary-endpoint response.
///
/// Non-2xx and undecodable bodies are transport failures; a decoded
/// envelope that says no is an application failure.
pub fn classify_assessment(response: &Response) -> AssessResult<AssessmentResult> {
    ensure_success(response)?;

    let envelope: ApiEnvelope<AssessmentResult> = response.json()?;
    if !envelope.is_ok() {
        return Err(ApplicationError::reported(Some(envelope.code), envelope.msg).into());
    }

    let Some(result) = envelope.data else {
        return Err(ApplicationError::reported(Some(envelope.code), envelope.msg).into());
    };

    if result.is_failed() {
        let message = result.error_message.clone().or(envelope.msg);
        return Err(ApplicationError::reported(None, message).into());
    }

    Ok(result)
}

fn ensure_success(response: &Response) -> Result<(), AssessError> {
    if response.is_success() {
        return Ok(());
    }
    Err(TransportError::NonSuccessHttpStatus {
        status: response.status,
        message: response.snippet(ERROR_BODY_CHARS),
    }
    .into())
}
