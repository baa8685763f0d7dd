//! A comparator that scores how similar a candidate text is to a single peer text.
//!
//! The `TfIdfComparator` applies two shortcuts before doing any weighting:
//!
//! 1. identical after normalization → `100`
//! 2. one normalized text contains the other → `90`
//!
//! Otherwise both texts are vectorized over the two-document corpus (see
//! [`crate::comparators::vectorizer`]) and the candidate's terms are matched against the peer's.
//! The shared-term weight product and the fraction of candidate terms found in the peer are
//! averaged into a single score clamped to `[0, 100]`.

use crate::comparators::vectorizer::vectorize_pair;
use crate::error::EvaluatorError;
use crate::traits::scorer::SimilarityScorer;
use crate::utilities::text_normalization::normalize;

/// Score returned when both texts are identical after normalization.
pub const EXACT_MATCH_SCORE: f64 = 100.0;
/// Score returned when one text is contained in the other.
pub const SUBSTRING_MATCH_SCORE: f64 = 90.0;

/// Default [`SimilarityScorer`]: exact/substring shortcuts, then weighted term overlap.
#[derive(Debug, Default, Clone, Copy)]
pub struct TfIdfComparator;

impl SimilarityScorer for TfIdfComparator {
    /// Compares a candidate with one peer.
    ///
    /// # Returns
    ///
    /// A similarity in `[0, 100]`, or [`EvaluatorError::NonFinite`] if the weighted overlap
    /// could not be represented.
    fn similarity(&self, candidate: &str, peer: &str) -> Result<f64, EvaluatorError> {
        let candidate = normalize(candidate);
        let peer = normalize(peer);

        if candidate == peer {
            return Ok(EXACT_MATCH_SCORE);
        }
        if candidate.contains(&peer) || peer.contains(&candidate) {
            return Ok(SUBSTRING_MATCH_SCORE);
        }

        let vectors = vectorize_pair(&candidate, &peer);
        let term_count = vectors.candidate.len();

        let mut matches = 0usize;
        let mut overlap_weight = 0.0;
        for (term, weight) in &vectors.candidate {
            if let Some(peer_weight) = vectors.peer.get(term) {
                overlap_weight += weight * peer_weight;
                matches += 1;
            }
        }

        let match_ratio = if term_count > 0 {
            matches as f64 / term_count as f64 * 100.0
        } else {
            0.0
        };

        let combined = (overlap_weight * 10.0 + match_ratio) / 2.0;
        if !combined.is_finite() {
            return Err(EvaluatorError::NonFinite("pairwise similarity".to_string()));
        }
        Ok(combined.clamp(0.0, 100.0))
    }
}

/// Similarity between two raw texts using the default comparator. Failures score `0`.
pub fn score_pair(candidate: &str, peer: &str) -> f64 {
    TfIdfComparator.score(candidate, peer)
}
