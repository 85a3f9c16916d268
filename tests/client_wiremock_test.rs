//! Assessment client tests against a real HTTP server using wiremock.
//!
//! These exercise the reqwest adapter end to end: request shape, envelope
//! decoding and the failure taxonomy.

mod common;

use common::{failed_status_envelope, failure_envelope, success_envelope, SAMPLE_TABLE};
use stdassess::adapters::ReqwestHttpClient;
use stdassess::client::AssessClient;
use stdassess::error::{AssessError, ErrorCategory, TransportError, NETWORK_FAILURE_MESSAGE};
use stdassess::models::{AssessmentRequest, Language, StandardAssessRequest};
use wiremock::matchers::{body_json, header, method, path};
use wiremock::{Mock, MockServer, ResponseTemplate};

fn client_for(server: &MockServer) -> AssessClient<ReqwestHttpClient> {
    AssessClient::new(server.uri(), ReqwestHttpClient::new())
}

#[tokio::test]
async fn test_assess_posts_trimmed_title_as_json() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/evaluation/assess"))
        .and(header("Content-Type", "application/json"))
        .and(body_json(serde_json::json!({"title": "Metaverse requirements"})))
        .respond_with(
            ResponseTemplate::new(200)
                .set_body_json(success_envelope(SAMPLE_TABLE, "Largely aligned.")),
        )
        .expect(1)
        .mount(&server)
        .await;

    let request = AssessmentRequest::new("  Metaverse requirements  ").unwrap();
    let result = client_for(&server).assess(&request).await;

    let result = result.expect("assessment should succeed");
    assert_eq!(result.result_table, SAMPLE_TABLE);
    assert_eq!(result.result, "Largely aligned.");
}

#[tokio::test]
async fn test_assess_nonzero_code_is_server_failure_with_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/evaluation/assess"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(failure_envelope(500, "model overloaded")),
        )
        .mount(&server)
        .await;

    let request = AssessmentRequest::new("ISO 9001").unwrap();
    let err = client_for(&server).assess(&request).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Server);
    assert_eq!(err.user_message(), "model overloaded");
}

#[tokio::test]
async fn test_assess_failed_status_prefers_error_message() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/evaluation/assess"))
        .respond_with(
            ResponseTemplate::new(200).set_body_json(failed_status_envelope("no source text")),
        )
        .mount(&server)
        .await;

    let request = AssessmentRequest::new("ISO 9001").unwrap();
    let err = client_for(&server).assess(&request).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Server);
    assert_eq!(err.user_message(), "no source text");
}

#[tokio::test]
async fn test_assess_http_500_is_network_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/evaluation/assess"))
        .respond_with(ResponseTemplate::new(500).set_body_string("Internal Server Error"))
        .mount(&server)
        .await;

    let request = AssessmentRequest::new("ISO 9001").unwrap();
    let err = client_for(&server).assess(&request).await.unwrap_err();

    assert!(
        matches!(
            err,
            AssessError::Transport(TransportError::NonSuccessHttpStatus { status: 500, .. })
        ),
        "unexpected error: {:?}",
        err
    );
    assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_assess_garbage_body_is_network_failure() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/admin/evaluation/assess"))
        .respond_with(ResponseTemplate::new(200).set_body_string("<html>gateway</html>"))
        .mount(&server)
        .await;

    let request = AssessmentRequest::new("ISO 9001").unwrap();
    let err = client_for(&server).assess(&request).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Network);
    assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_assess_connection_refused_is_network_failure() {
    // Nothing listens on port 1.
    let client = AssessClient::new("http://127.0.0.1:1", ReqwestHttpClient::new());
    let request = AssessmentRequest::new("ISO 9001").unwrap();
    let err = client.assess(&request).await.unwrap_err();

    assert_eq!(err.category(), ErrorCategory::Network);
    assert_eq!(err.user_message(), NETWORK_FAILURE_MESSAGE);
}

#[tokio::test]
async fn test_assess_content_is_not_enveloped() {
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/assess/standard"))
        .and(body_json(serde_json::json!({"content": "A standard text", "language": "en"})))
        .respond_with(ResponseTemplate::new(200).set_body_json(serde_json::json!({
            "topic": "Metaverse",
            "summary": "Short summary",
            "score": 82,
            "recommendations": ["Add terms", "Cite ISO 9241"]
        })))
        .mount(&server)
        .await;

    let request = StandardAssessRequest::new("A standard text")
        .unwrap()
        .with_language(Language::En);
    let response = client_for(&server).assess_content(&request).await.unwrap();

    assert_eq!(response.topic.as_deref(), Some("Metaverse"));
    assert_eq!(response.score, Some(82));
    assert_eq!(response.recommendations.len(), 2);
}

#[tokio::test]
async fn test_health_check_reports_status() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/evaluation/test"))
        .respond_with(ResponseTemplate::new(200).set_body_string("ok"))
        .mount(&server)
        .await;

    assert!(client_for(&server).health_check().await.unwrap());
}

#[tokio::test]
async fn test_health_check_error_status_is_unhealthy() {
    let server = MockServer::start().await;

    Mock::given(method("GET"))
        .and(path("/admin/evaluation/test"))
        .respond_with(ResponseTemplate::new(503))
        .mount(&server)
        .await;

    assert!(!client_for(&server).health_check().await.unwrap());
}
