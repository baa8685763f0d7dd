use crate::error::EvaluatorError;
use tracing::warn;

/// SimilarityScorer is a strategy trait for comparing a candidate text with one peer.
///
/// Implementations return a similarity in `[0, 100]`. Errors are reserved for genuine
/// computation failures; callers normally go through [`SimilarityScorer::score`], which
/// recovers from them.
pub trait SimilarityScorer: Send + Sync {
    /// Compare `candidate` against `peer`, both as raw (un-normalized) text.
    fn similarity(&self, candidate: &str, peer: &str) -> Result<f64, EvaluatorError>;

    /// Like [`SimilarityScorer::similarity`], but a failed comparison counts as `0`.
    fn score(&self, candidate: &str, peer: &str) -> f64 {
        match self.similarity(candidate, peer) {
            Ok(value) => value,
            Err(e) => {
                warn!("Similarity calculation failed, scoring pair as 0: {e}");
                0.0
            }
        }
    }
}
