//! # Evaluator Library
//!
//! This crate evaluates a newly submitted text against the other submissions for the same
//! assignment. It produces two independent signals:
//!
//! - a **plagiarism risk**: the highest pairwise similarity between the candidate and any peer,
//!   mapped onto a risk tier, and
//! - a **content-quality score** with feedback, derived from the structure of the candidate alone.
//!
//! The engine is stateless. Every call receives the corpus it should compare against, reads it,
//! and returns an [`EvaluationResult`]; nothing is cached or retained, so evaluations may run in
//! parallel without coordination.
//!
//! ## Key Concepts
//! - [`evaluate_submission`]: the functional entry point with the default comparator.
//! - [`EvaluationJob`]: a builder for callers that want a custom [`SimilarityScorer`], a corpus
//!   cap, or an async evaluation off the runtime's worker threads.
//! - **Recovery**: no failure escapes. An empty candidate yields the empty-submission result,
//!   and any internal failure yields [`EvaluationResult::fallback`].

pub mod comparators;
pub mod error;
pub mod feedback;
pub mod report;
pub mod risk;
pub mod scorer;
pub mod traits;
pub mod types;
pub mod utilities;

pub use crate::traits::scorer::SimilarityScorer;
pub use crate::types::{EvaluationResult, SubmissionId, SubmissionText};

use crate::comparators::tfidf_comparator::TfIdfComparator;
use crate::error::EvaluatorError;
use crate::feedback::content_feedback::analyze_content;
use crate::risk::assess_corpus;
use crate::utilities::text_normalization::normalize;
use std::any::Any;
use std::panic::{self, AssertUnwindSafe};
use tracing::{debug, error};

/// Summary returned when the candidate has no text.
pub const EMPTY_SUBMISSION_MESSAGE: &str =
    "No text provided for evaluation. Please submit content.";
/// Summary returned when evaluation failed internally.
pub const FALLBACK_MESSAGE: &str =
    "Your submission has been received. Detailed feedback will be provided soon.";
/// Score returned when evaluation failed internally.
pub const FALLBACK_SCORE: u32 = 75;

impl EvaluationResult {
    /// Result for a candidate whose text is empty after normalization.
    pub fn empty_submission() -> Self {
        Self {
            plagiarism_risk: "0.00".to_string(),
            feedback_summary: EMPTY_SUBMISSION_MESSAGE.to_string(),
            score: 0,
        }
    }

    /// Result used whenever evaluation fails internally.
    pub fn fallback() -> Self {
        Self {
            plagiarism_risk: "0.00".to_string(),
            feedback_summary: FALLBACK_MESSAGE.to_string(),
            score: FALLBACK_SCORE,
        }
    }
}

/// Runs the full pipeline, propagating internal failures.
fn try_evaluate(
    scorer: &dyn SimilarityScorer,
    candidate: &SubmissionText,
    corpus: &[SubmissionText],
) -> Result<EvaluationResult, EvaluatorError> {
    let text = normalize(&candidate.text);
    if text.is_empty() {
        debug!(candidate = %candidate.id, "empty submission, skipping evaluation");
        return Ok(EvaluationResult::empty_submission());
    }

    let risk = assess_corpus(scorer, candidate, corpus)?;
    let content = analyze_content(&text)?;

    Ok(EvaluationResult {
        plagiarism_risk: risk.formatted(),
        feedback_summary: format!("{} {}", risk.tier.message(), content.summary),
        score: content.score,
    })
}

fn evaluate_with(
    scorer: &dyn SimilarityScorer,
    candidate: &SubmissionText,
    corpus: &[SubmissionText],
) -> EvaluationResult {
    match panic::catch_unwind(AssertUnwindSafe(|| try_evaluate(scorer, candidate, corpus))) {
        Ok(Ok(result)) => result,
        Ok(Err(e)) => {
            error!(candidate = %candidate.id, "Evaluation failed, returning fallback: {e}");
            EvaluationResult::fallback()
        }
        Err(payload) => {
            error!(
                candidate = %candidate.id,
                "Evaluation panicked, returning fallback: {}",
                panic_message(&*payload)
            );
            EvaluationResult::fallback()
        }
    }
}

fn panic_message(payload: &(dyn Any + Send)) -> &str {
    if let Some(msg) = payload.downcast_ref::<&str>() {
        msg
    } else if let Some(msg) = payload.downcast_ref::<String>() {
        msg
    } else {
        "unknown panic"
    }
}

/// Evaluates `candidate` against `corpus` with the default TF-IDF comparator.
///
/// `corpus` holds every submission for the assignment and may include the candidate itself;
/// entries sharing the candidate's id are never compared with it.
///
/// # Example
///
/// ```
/// use evaluator::{evaluate_submission, SubmissionText};
///
/// let candidate = SubmissionText::new(2, "Volcanoes form at plate boundaries.");
/// let corpus = vec![
///     SubmissionText::new(1, "volcanoes form at plate boundaries."),
///     candidate.clone(),
/// ];
/// let result = evaluate_submission(&candidate, &corpus);
/// assert_eq!(result.plagiarism_risk, "100.00");
/// assert!(result.feedback_summary.contains("HIGH RISK"));
/// ```
pub fn evaluate_submission(candidate: &SubmissionText, corpus: &[SubmissionText]) -> EvaluationResult {
    evaluate_with(&TfIdfComparator, candidate, corpus)
}

/// An evaluation of one candidate submission against its assignment's corpus.
///
/// Owns its inputs so it can be moved onto a blocking thread by [`EvaluationJob::evaluate`].
pub struct EvaluationJob {
    candidate: SubmissionText,
    corpus: Vec<SubmissionText>,
    scorer: Box<dyn SimilarityScorer>,
    corpus_limit: Option<usize>,
}

impl EvaluationJob {
    /// Create a job using the default [`TfIdfComparator`].
    pub fn new(candidate: SubmissionText, corpus: Vec<SubmissionText>) -> Self {
        Self {
            candidate,
            corpus,
            scorer: Box::new(TfIdfComparator),
            corpus_limit: None,
        }
    }

    /// Set a custom similarity strategy for this job.
    pub fn with_scorer<S: SimilarityScorer + 'static>(mut self, scorer: S) -> Self {
        self.scorer = Box::new(scorer);
        self
    }

    /// Only consider the first `limit` corpus entries. `0` means no limit.
    pub fn with_corpus_limit(mut self, limit: usize) -> Self {
        self.corpus_limit = (limit > 0).then_some(limit);
        self
    }

    fn corpus(&self) -> &[SubmissionText] {
        match self.corpus_limit {
            Some(limit) if limit < self.corpus.len() => &self.corpus[..limit],
            _ => &self.corpus,
        }
    }

    /// The submission under evaluation.
    pub fn candidate(&self) -> &SubmissionText {
        &self.candidate
    }

    /// Run the evaluation on the current thread.
    ///
    /// Errors and panics raised while evaluating both yield [`EvaluationResult::fallback`].
    pub fn run(&self) -> EvaluationResult {
        evaluate_with(self.scorer.as_ref(), &self.candidate, self.corpus())
    }

    /// Run the evaluation on tokio's blocking pool.
    ///
    /// A task that fails to complete is reported as [`EvaluationResult::fallback`].
    pub async fn evaluate(self) -> EvaluationResult {
        let id = self.candidate().id.clone();
        match tokio::task::spawn_blocking(move || self.run()).await {
            Ok(result) => result,
            Err(e) => {
                error!(candidate = %id, "Evaluation task failed, returning fallback: {e}");
                EvaluationResult::fallback()
            }
        }
    }
}
