//! JSON shapes at the edge of the crate
//!
//! [`HumanizeRequest`] and [`HumanizeResponse`] mirror the rewriting service's
//! wire format; only `humanizedText` is consumed. [`DiffResponse`] is what the
//! CLI prints in `--json` mode.

use crate::diff::DiffStats;
use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Body sent to the rewriting service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HumanizeRequest {
    pub text: String,
}

/// Body returned by the rewriting service
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HumanizeResponse {
    pub humanized_text: String,
    #[serde(default)]
    pub ai_score: Option<f64>,
    #[serde(default)]
    pub readability_score: Option<f64>,
    #[serde(default)]
    pub word_count: Option<usize>,
    #[serde(default)]
    pub explanation: Option<String>,
    #[serde(default, rename = "ai_assisted")]
    pub ai_assisted: Option<bool>,
    #[serde(default)]
    pub model_used: Option<String>,
}

#[derive(Debug, Error)]
pub enum ResponseError {
    #[error("Failed to read response '{path}': {source}")]
    Io {
        path: String,
        #[source]
        source: std::io::Error,
    },
    #[error("Malformed service response: {0}")]
    Parse(#[from] serde_json::Error),
}

impl HumanizeResponse {
    pub fn from_json(json: &str) -> Result<Self, ResponseError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ResponseError> {
        let path_ref = path.as_ref();
        let json = std::fs::read_to_string(path_ref).map_err(|source| ResponseError::Io {
            path: path_ref.display().to_string(),
            source,
        })?;
        Self::from_json(&json)
    }
}

/// Result of one CLI run
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DiffResponse {
    pub execution_id: String,
    pub success: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub markup: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stats: Option<DiffStats>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten_checksum: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub original_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rewritten_words: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub error: Option<String>,
}

/// Both sides of a completed diff, for [`DiffResponse::success`]
#[derive(Debug, Clone)]
pub struct DiffSummary {
    pub markup: String,
    pub stats: DiffStats,
    pub original_checksum: String,
    pub rewritten_checksum: String,
    pub original_words: usize,
    pub rewritten_words: usize,
}

impl DiffResponse {
    pub fn success(execution_id: String, summary: DiffSummary) -> Self {
        Self {
            execution_id,
            success: true,
            markup: Some(summary.markup),
            stats: Some(summary.stats),
            original_checksum: Some(summary.original_checksum),
            rewritten_checksum: Some(summary.rewritten_checksum),
            original_words: Some(summary.original_words),
            rewritten_words: Some(summary.rewritten_words),
            error: None,
        }
    }

    pub fn failure(execution_id: String, error: String) -> Self {
        Self {
            execution_id,
            success: false,
            markup: None,
            stats: None,
            original_checksum: None,
            rewritten_checksum: None,
            original_words: None,
            rewritten_words: None,
            error: Some(error),
        }
    }
}

/// Fresh execution id (UUID v4)
pub fn generate_execution_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_full_service_response() {
        let json = r#"{
            "humanizedText": "I actually went home",
            "aiScore": 3,
            "readabilityScore": 71.2,
            "wordCount": 4,
            "explanation": "Added casual markers",
            "ai_assisted": true,
            "modelUsed": "local-rules"
        }"#;

        let response = HumanizeResponse::from_json(json).unwrap();

        assert_eq!(response.humanized_text, "I actually went home");
        assert_eq!(response.ai_score, Some(3.0));
        assert_eq!(response.word_count, Some(4));
        assert_eq!(response.ai_assisted, Some(true));
        assert_eq!(response.model_used.as_deref(), Some("local-rules"));
    }

    #[test]
    fn test_parse_minimal_service_response() {
        let response = HumanizeResponse::from_json(r#"{"humanizedText": ""}"#).unwrap();

        assert_eq!(response.humanized_text, "");
        assert_eq!(response.ai_score, None);
        assert_eq!(response.explanation, None);
    }

    #[test]
    fn test_missing_humanized_text_is_an_error() {
        let err = HumanizeResponse::from_json(r#"{"aiScore": 2}"#).unwrap_err();
        assert!(matches!(err, ResponseError::Parse(_)));
    }

    #[test]
    fn test_request_shape() {
        let json = serde_json::to_string(&HumanizeRequest {
            text: "hello".to_string(),
        })
        .unwrap();
        assert_eq!(json, r#"{"text":"hello"}"#);
    }

    #[test]
    fn test_failure_omits_result_fields() {
        let response = DiffResponse::failure("id-1".to_string(), "boom".to_string());
        let value = serde_json::to_value(&response).unwrap();

        assert_eq!(value["success"], false);
        assert_eq!(value["error"], "boom");
        assert!(value.get("markup").is_none());
        assert!(value.get("stats").is_none());
    }

    #[test]
    fn test_success_shape() {
        let summary = DiffSummary {
            markup: "a b".to_string(),
            stats: DiffStats {
                unchanged: 2,
                ..DiffStats::default()
            },
            original_checksum: "c1".to_string(),
            rewritten_checksum: "c2".to_string(),
            original_words: 2,
            rewritten_words: 2,
        };
        let value = serde_json::to_value(DiffResponse::success("id-2".to_string(), summary)).unwrap();

        assert_eq!(value["success"], true);
        assert_eq!(value["markup"], "a b");
        assert_eq!(value["stats"]["unchanged"], 2);
        assert_eq!(value["stats"]["dropped"], 0);
        assert!(value.get("error").is_none());
    }

    #[test]
    fn test_execution_id_is_uuid() {
        let id = generate_execution_id();

        assert_eq!(id.len(), 36);
        assert!(uuid::Uuid::parse_str(&id).is_ok());
        assert_ne!(id, generate_execution_id());
    }
}
