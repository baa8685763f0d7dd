//! # Evaluation Report Module
//!
//! Wire types for handing a submission to the evaluator and returning the outcome to the
//! submission-handling service.
//!
//! ## Overview
//!
//! - [`EvaluationRequest`]: the candidate plus every submission for the same assignment.
//! - [`EvaluationReport`]: the [`EvaluationResult`] tagged with the submission id and a timestamp.
//! - [`EvaluationResponse`]: a response envelope with `success` and `message` fields.
//!
//! ## JSON Output Example
//!
//! ```json
//! {
//!   "success": true,
//!   "message": "Assignment submitted and evaluated successfully",
//!   "data": {
//!     "submission_id": 12,
//!     "plagiarism_risk": "26.77",
//!     "feedback_summary": "ℹ️ LOW RISK: ... ✓ Good submission length. ...",
//!     "score": 90,
//!     "evaluated_at": "2024-10-20T14:30:00+00:00"
//!   }
//! }
//! ```

use crate::error::EvaluatorError;
use crate::types::{EvaluationResult, SubmissionId, SubmissionText};
use chrono::Utc;
use serde::{Deserialize, Serialize};
use std::io::Read;
use std::path::Path;

/// A candidate submission and the corpus it should be compared with.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EvaluationRequest {
    pub candidate: SubmissionText,
    /// All submissions for the assignment. May include the candidate.
    #[serde(default)]
    pub corpus: Vec<SubmissionText>,
}

impl EvaluationRequest {
    pub fn from_json_str(raw: &str) -> Result<Self, EvaluatorError> {
        Ok(serde_json::from_str(raw)?)
    }

    pub fn from_reader<R: Read>(reader: R) -> Result<Self, EvaluatorError> {
        Ok(serde_json::from_reader(reader)?)
    }

    /// Reads and parses a request file.
    pub fn load(path: &Path) -> Result<Self, EvaluatorError> {
        let raw = std::fs::read_to_string(path)?;
        Self::from_json_str(&raw)
    }
}

/// An evaluation outcome ready to be persisted or displayed.
#[derive(Debug, Clone, Serialize)]
pub struct EvaluationReport {
    pub submission_id: SubmissionId,
    pub plagiarism_risk: String,
    pub feedback_summary: String,
    pub score: u32,
    /// RFC 3339 timestamp of when the evaluation finished.
    pub evaluated_at: String,
}

impl EvaluationReport {
    pub fn new(submission_id: SubmissionId, result: EvaluationResult) -> Self {
        Self {
            submission_id,
            plagiarism_risk: result.plagiarism_risk,
            feedback_summary: result.feedback_summary,
            score: result.score,
            evaluated_at: Utc::now().to_rfc3339(),
        }
    }

    pub fn result(&self) -> EvaluationResult {
        EvaluationResult {
            plagiarism_risk: self.plagiarism_risk.clone(),
            feedback_summary: self.feedback_summary.clone(),
            score: self.score,
        }
    }
}

/// The response envelope for evaluation results.
#[derive(Debug, Serialize)]
pub struct EvaluationResponse {
    pub success: bool,
    pub message: String,
    pub data: EvaluationReport,
}

impl From<EvaluationReport> for EvaluationResponse {
    fn from(report: EvaluationReport) -> Self {
        EvaluationResponse {
            success: true,
            message: "Assignment submitted and evaluated successfully".to_string(),
            data: report,
        }
    }
}
