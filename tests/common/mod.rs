//! Common test utilities for integration tests.
//!
//! Canned backend payloads and a mock-backed client.

#![allow(dead_code, unused_imports)]

pub use stdassess::adapters::mock::{MockHttpClient, MockResponse};
pub use stdassess::client::AssessClient;

use serde_json::{json, Value};

/// Base URL the mock client answers for.
pub const MOCK_BASE: &str = "http://backend.test";

/// A successful `/admin/evaluation/assess` envelope.
pub fn success_envelope(table: &str, narrative: &str) -> Value {
    json!({
        "code": 0,
        "msg": "success",
        "data": {
            "resultTable": table,
            "result": narrative,
            "status": "SUCCESS"
        }
    })
}

/// An envelope whose code reports failure.
pub fn failure_envelope(code: i64, msg: &str) -> Value {
    json!({ "code": code, "msg": msg, "data": null })
}

/// A successful envelope whose result is marked `FAILED`.
pub fn failed_status_envelope(error_message: &str) -> Value {
    json!({
        "code": 0,
        "data": {
            "resultTable": "",
            "result": "",
            "status": "FAILED",
            "errorMessage": error_message
        }
    })
}

/// A comparison table the way the backend writes it.
pub const SAMPLE_TABLE: &str = "\
| Item | Draft | Reference |
|------|-------|-----------|
| Scope | covers AR/VR | covers AR |
| Terms | 12 | 10 |";

/// Client over a fresh mock, plus the mock for scripting.
pub fn mock_client() -> (AssessClient<MockHttpClient>, MockHttpClient) {
    let mock = MockHttpClient::new();
    (AssessClient::new(MOCK_BASE, mock.clone()), mock)
}
