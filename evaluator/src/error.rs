//! Evaluator Error Types
//!
//! This module defines the [`EvaluatorError`] enum, which covers every failure that can occur
//! while vectorizing, scoring, or extracting features from a submission, plus the failures of
//! loading an evaluation request from disk.
//!
//! None of these errors ever reach the caller of [`crate::evaluate_submission`]: the pairwise
//! scorer turns them into a similarity of `0`, and the orchestrator turns them into the fixed
//! fallback result. They are surfaced only by the lower-level building blocks and by
//! [`crate::report::EvaluationRequest`] loading.
//!
//! # Example
//!
//! ```rust
//! use evaluator::error::EvaluatorError;
//!
//! fn check(value: f64) -> Result<f64, EvaluatorError> {
//!     if !value.is_finite() {
//!         return Err(EvaluatorError::NonFinite("similarity".to_string()));
//!     }
//!     Ok(value)
//! }
//! assert!(check(f64::NAN).is_err());
//! ```

/// Represents all error types that can occur in the evaluator.
#[derive(Debug, thiserror::Error)]
pub enum EvaluatorError {
    /// A built-in pattern failed to compile.
    #[error("Invalid pattern `{name}`: {source}")]
    Pattern {
        name: &'static str,
        #[source]
        source: regex::Error,
    },

    /// A computed score was NaN or infinite.
    #[error("Non-finite value produced for {0}")]
    NonFinite(String),

    /// An evaluation request was not valid JSON or did not match the expected schema.
    #[error("Invalid evaluation request: {0}")]
    InvalidRequest(#[from] serde_json::Error),

    /// I/O error while reading a request.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),
}
