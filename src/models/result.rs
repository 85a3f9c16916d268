use serde::{Deserialize, Serialize};

/// Status value the backend uses for a completed assessment.
pub const STATUS_SUCCESS: &str = "SUCCESS";

/// Payload of a successful `/admin/evaluation/assess` envelope.
///
/// Missing strings decode as empty so a sparse payload still renders (with
/// placeholders) instead of failing the whole submission.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentResult {
    /// Comparison table as loose markdown
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result_table: String,
    /// Narrative conclusion
    #[serde(default, deserialize_with = "null_as_empty")]
    pub result: String,
    /// `SUCCESS` or `FAILED`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub status: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub error_message: Option<String>,
}

impl AssessmentResult {
    /// Whether the backend marked this result as failed.
    ///
    /// An absent status counts as success; the envelope code already said so.
    pub fn is_failed(&self) -> bool {
        let status = self.status.trim();
        !status.is_empty() && !status.eq_ignore_ascii_case(STATUS_SUCCESS)
    }
}

/// Response of `POST /assess/standard`. Not wrapped in an envelope.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct StandardAssessResponse {
    #[serde(default)]
    pub topic: Option<String>,
    #[serde(default)]
    pub summary: Option<String>,
    #[serde(default)]
    pub score: Option<i32>,
    /// The backend writes an unset list as `null`
    #[serde(default, deserialize_with = "null_as_empty")]
    pub recommendations: Vec<String>,
}

fn null_as_empty<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: serde::Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(Option::unwrap_or_default)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_result_deserializes_camel_case() {
        let json = r#"{
            "resultTable": "|A|B|\n|1|2|",
            "result": "Recommended for adoption",
            "status": "SUCCESS",
            "errorMessage": null
        }"#;
        let result: AssessmentResult = serde_json::from_str(json).unwrap();
        assert_eq!(result.result_table, "|A|B|\n|1|2|");
        assert_eq!(result.result, "Recommended for adoption");
        assert!(!result.is_failed());
        assert!(result.error_message.is_none());
    }

    #[test]
    fn test_result_tolerates_missing_and_null_fields() {
        let result: AssessmentResult =
            serde_json::from_str(r#"{"resultTable": null, "status": "SUCCESS"}"#).unwrap();
        assert_eq!(result.result_table, "");
        assert_eq!(result.result, "");
    }

    #[test]
    fn test_failed_status() {
        let result = AssessmentResult {
            status: "FAILED".to_string(),
            error_message: Some("model timeout".to_string()),
            ..Default::default()
        };
        assert!(result.is_failed());

        let result = AssessmentResult::default();
        assert!(!result.is_failed());
    }

    #[test]
    fn test_standard_response() {
        let json = r#"{"topic":"ISO 9001","summary":"ok","score":87,"recommendations":["a","b"]}"#;
        let response: StandardAssessResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.score, Some(87));
        assert_eq!(response.recommendations.len(), 2);
    }

    #[test]
    fn test_standard_response_null_recommendations() {
        let json = r#"{"topic":"ISO 9001","summary":"ok","score":87,"recommendations":null}"#;
        let response: StandardAssessResponse = serde_json::from_str(json).unwrap();
        assert_eq!(response.topic.as_deref(), Some("ISO 9001"));
        assert!(response.recommendations.is_empty());
    }
}
