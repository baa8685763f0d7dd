//! # Types Module
//!
//! This module defines the core data structures passed into and out of the evaluator:
//! the submissions being compared and the result handed back to the caller.

use serde::{Deserialize, Deserializer, Serialize};
use std::fmt;

/// Opaque submission identifier.
///
/// Only ever compared for equality, to keep a candidate from being scored against itself.
/// Accepts either a JSON integer or a JSON string.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(untagged)]
pub enum SubmissionId {
    Number(i64),
    Text(String),
}

impl fmt::Display for SubmissionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SubmissionId::Number(n) => write!(f, "{n}"),
            SubmissionId::Text(s) => f.write_str(s),
        }
    }
}

impl From<i64> for SubmissionId {
    fn from(value: i64) -> Self {
        SubmissionId::Number(value)
    }
}

impl From<i32> for SubmissionId {
    fn from(value: i32) -> Self {
        SubmissionId::Number(value.into())
    }
}

impl From<&str> for SubmissionId {
    fn from(value: &str) -> Self {
        SubmissionId::Text(value.to_string())
    }
}

impl From<String> for SubmissionId {
    fn from(value: String) -> Self {
        SubmissionId::Text(value)
    }
}

/// A single submission body, either the candidate under evaluation or one of its peers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SubmissionText {
    pub id: SubmissionId,
    /// Free-form body. A missing or `null` body is read as empty text.
    #[serde(default, alias = "submission_text", deserialize_with = "null_as_empty")]
    pub text: String,
}

impl SubmissionText {
    pub fn new(id: impl Into<SubmissionId>, text: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            text: text.into(),
        }
    }
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<String, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<String>::deserialize(deserializer)?.unwrap_or_default())
}

/// The outcome of evaluating one submission.
///
/// - `plagiarism_risk`: highest similarity to any peer, formatted with exactly two fraction digits.
/// - `feedback_summary`: risk clause followed by the content-quality clause; never empty.
/// - `score`: content-quality score in `0..=100`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationResult {
    pub plagiarism_risk: String,
    pub feedback_summary: String,
    pub score: u32,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn submission_id_accepts_numbers_and_strings() {
        let a: SubmissionText = serde_json::from_str(r#"{"id": 7, "text": "x"}"#).unwrap();
        let b: SubmissionText = serde_json::from_str(r#"{"id": "sub-7", "text": "x"}"#).unwrap();
        assert_eq!(a.id, SubmissionId::Number(7));
        assert_eq!(b.id, SubmissionId::Text("sub-7".to_string()));
        assert_ne!(a.id, SubmissionId::Text("7".to_string()));
    }

    #[test]
    fn missing_or_null_text_reads_as_empty() {
        let missing: SubmissionText = serde_json::from_str(r#"{"id": 1}"#).unwrap();
        let null: SubmissionText = serde_json::from_str(r#"{"id": 2, "text": null}"#).unwrap();
        assert_eq!(missing.text, "");
        assert_eq!(null.text, "");
    }

    #[test]
    fn submission_text_alias_is_accepted() {
        let s: SubmissionText =
            serde_json::from_str(r#"{"id": 3, "submission_text": "Essay body"}"#).unwrap();
        assert_eq!(s.text, "Essay body");
    }

    #[test]
    fn display_is_the_raw_identifier() {
        assert_eq!(SubmissionId::from(42).to_string(), "42");
        assert_eq!(SubmissionId::from("abc").to_string(), "abc");
    }
}
