//! # Corpus Risk Module
//!
//! Runs a [`SimilarityScorer`] between the candidate and every peer submission for the same
//! assignment, keeps the highest similarity, and maps it onto a [`RiskTier`].
//!
//! Peers are skipped when they share the candidate's id (the corpus may contain the candidate
//! itself) or when their text is empty after normalization. A corpus with fewer than two
//! members cannot contain a distinct peer, so its risk is always `0`.

use crate::error::EvaluatorError;
use crate::traits::scorer::SimilarityScorer;
use crate::types::SubmissionText;
use crate::utilities::text_normalization::normalize;
use tracing::debug;

/// Similarity above which a peer is tallied as a similar submission.
pub const SIMILAR_SUBMISSION_THRESHOLD: f64 = 50.0;

/// Round a float to two decimal places.
#[inline]
pub fn round2(x: f64) -> f64 {
    (x * 100.0).round() / 100.0
}

/// Plagiarism-risk band for a maximum similarity. Lower bounds are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RiskTier {
    /// similarity > 80
    High,
    /// similarity > 60
    MediumHigh,
    /// similarity > 40
    Medium,
    /// similarity > 20
    LowWithSimilarity,
    /// similarity ≤ 20
    Original,
}

impl RiskTier {
    pub fn from_similarity(similarity: f64) -> Self {
        if similarity > 80.0 {
            RiskTier::High
        } else if similarity > 60.0 {
            RiskTier::MediumHigh
        } else if similarity > 40.0 {
            RiskTier::Medium
        } else if similarity > 20.0 {
            RiskTier::LowWithSimilarity
        } else {
            RiskTier::Original
        }
    }

    /// The clause placed at the front of the feedback summary.
    pub fn message(self) -> &'static str {
        match self {
            RiskTier::High => "⚠️ HIGH RISK: Very high similarity detected with other submissions.",
            RiskTier::MediumHigh => {
                "⚠️ MEDIUM-HIGH RISK: Significant similarity detected with another submission."
            }
            RiskTier::Medium => "⚠️ MEDIUM RISK: Moderate similarity with another submission.",
            RiskTier::LowWithSimilarity => {
                "ℹ️ LOW RISK: Some similarity detected but mostly original content."
            }
            RiskTier::Original => "✓ LOW RISK: Submission appears to be original.",
        }
    }
}

/// Outcome of comparing a candidate with its corpus.
#[derive(Debug, Clone, PartialEq)]
pub struct RiskAssessment {
    /// Highest similarity to any peer, rounded to two decimals.
    pub max_similarity: f64,
    /// Peers whose similarity exceeded [`SIMILAR_SUBMISSION_THRESHOLD`].
    /// Kept for bookkeeping; not part of the evaluation result.
    pub similar_count: usize,
    pub tier: RiskTier,
}

impl RiskAssessment {
    /// `max_similarity` with exactly two fraction digits.
    pub fn formatted(&self) -> String {
        format!("{:.2}", self.max_similarity)
    }
}

/// Scores `candidate` against every distinct, non-empty peer in `corpus`.
///
/// # Errors
///
/// Returns [`EvaluatorError::NonFinite`] if the scorer produced a value that cannot be
/// reported. Individual comparison failures are absorbed by [`SimilarityScorer::score`].
pub fn assess_corpus(
    scorer: &dyn SimilarityScorer,
    candidate: &SubmissionText,
    corpus: &[SubmissionText],
) -> Result<RiskAssessment, EvaluatorError> {
    let candidate_text = normalize(&candidate.text);
    let mut max_similarity: f64 = 0.0;
    let mut similar_count = 0usize;
    let mut compared = 0usize;

    if corpus.len() > 1 {
        for peer in corpus.iter().filter(|p| p.id != candidate.id) {
            let peer_text = normalize(&peer.text);
            if peer_text.is_empty() {
                continue;
            }

            let similarity = scorer.score(&candidate_text, &peer_text);
            compared += 1;
            if similarity > max_similarity {
                max_similarity = similarity;
            }
            if similarity > SIMILAR_SUBMISSION_THRESHOLD {
                similar_count += 1;
            }
        }
    }

    if !max_similarity.is_finite() {
        return Err(EvaluatorError::NonFinite("maximum similarity".to_string()));
    }
    let max_similarity = round2(max_similarity.clamp(0.0, 100.0));

    debug!(
        candidate = %candidate.id,
        compared,
        similar_count,
        max_similarity,
        "corpus risk assessed"
    );

    Ok(RiskAssessment {
        max_similarity,
        similar_count,
        tier: RiskTier::from_similarity(max_similarity),
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::comparators::tfidf_comparator::TfIdfComparator;

    fn sub(id: i64, text: &str) -> SubmissionText {
        SubmissionText::new(id, text)
    }

    #[test]
    fn tier_boundaries_are_exclusive() {
        assert_eq!(RiskTier::from_similarity(100.0), RiskTier::High);
        assert_eq!(RiskTier::from_similarity(80.01), RiskTier::High);
        assert_eq!(RiskTier::from_similarity(80.0), RiskTier::MediumHigh);
        assert_eq!(RiskTier::from_similarity(60.0), RiskTier::Medium);
        assert_eq!(RiskTier::from_similarity(40.0), RiskTier::LowWithSimilarity);
        assert_eq!(RiskTier::from_similarity(20.0), RiskTier::Original);
        assert_eq!(RiskTier::from_similarity(0.0), RiskTier::Original);
    }

    #[test]
    fn round2_rounds_half_away_from_zero() {
        assert_eq!(round2(26.767_358), 26.77);
        assert_eq!(round2(12.344), 12.34);
        assert_eq!(round2(0.0), 0.0);
    }

    #[test]
    fn exact_duplicate_peer_is_high_risk() {
        let candidate = sub(1, "Rivers shape valleys over millennia.");
        let corpus = vec![
            candidate.clone(),
            sub(2, "rivers shape valleys over millennia."),
        ];
        let risk = assess_corpus(&TfIdfComparator, &candidate, &corpus).unwrap();
        assert_eq!(risk.max_similarity, 100.0);
        assert_eq!(risk.similar_count, 1);
        assert_eq!(risk.tier, RiskTier::High);
        assert_eq!(risk.formatted(), "100.00");
    }

    #[test]
    fn candidate_is_excluded_by_id() {
        let candidate = sub(1, "A unique essay about volcanoes.");
        let corpus = vec![candidate.clone(), candidate.clone()];
        let risk = assess_corpus(&TfIdfComparator, &candidate, &corpus).unwrap();
        assert_eq!(risk.max_similarity, 0.0);
        assert_eq!(risk.tier, RiskTier::Original);
    }

    #[test]
    fn single_member_and_empty_corpus_have_zero_risk() {
        let candidate = sub(1, "Text.");
        let alone = assess_corpus(&TfIdfComparator, &candidate, &[candidate.clone()]).unwrap();
        let empty = assess_corpus(&TfIdfComparator, &candidate, &[]).unwrap();
        assert_eq!(alone.formatted(), "0.00");
        assert_eq!(empty.formatted(), "0.00");
    }

    #[test]
    fn single_distinct_peer_without_candidate_is_not_compared() {
        // Fewer than two corpus members: nothing to compare against.
        let candidate = sub(1, "Same words here.");
        let corpus = vec![sub(2, "Same words here.")];
        let risk = assess_corpus(&TfIdfComparator, &candidate, &corpus).unwrap();
        assert_eq!(risk.max_similarity, 0.0);
    }

    #[test]
    fn empty_peers_are_skipped() {
        let candidate = sub(1, "Glaciers carve fjords.");
        let corpus = vec![candidate.clone(), sub(2, ""), sub(3, "   ")];
        let risk = assess_corpus(&TfIdfComparator, &candidate, &corpus).unwrap();
        assert_eq!(risk.max_similarity, 0.0);
    }

    #[test]
    fn maximum_over_peers_is_reported() {
        let candidate = sub(1, "apples oranges");
        let corpus = vec![
            candidate.clone(),
            sub(2, "pears plums"),
            sub(3, "apples bananas"),
        ];
        let risk = assess_corpus(&TfIdfComparator, &candidate, &corpus).unwrap();
        assert_eq!(risk.formatted(), "26.77");
        assert_eq!(risk.tier, RiskTier::LowWithSimilarity);
        assert_eq!(risk.similar_count, 0);
    }

    #[test]
    fn adding_a_peer_never_lowers_the_maximum() {
        let candidate = sub(1, "apples oranges");
        let mut corpus = vec![candidate.clone(), sub(2, "apples bananas")];
        let before = assess_corpus(&TfIdfComparator, &candidate, &corpus)
            .unwrap()
            .max_similarity;

        corpus.push(sub(3, "completely unrelated words"));
        let after_unrelated = assess_corpus(&TfIdfComparator, &candidate, &corpus)
            .unwrap()
            .max_similarity;
        assert!(after_unrelated >= before);

        corpus.push(sub(4, "Apples Oranges"));
        let after_duplicate = assess_corpus(&TfIdfComparator, &candidate, &corpus)
            .unwrap()
            .max_similarity;
        assert!(after_duplicate >= after_unrelated);
        assert_eq!(after_duplicate, 100.0);
    }

    #[test]
    fn similar_count_tallies_peers_above_fifty() {
        let candidate = sub(1, "the history of the roman empire");
        let corpus = vec![
            candidate.clone(),
            sub(2, "The history of the Roman Empire"),
            sub(3, "history of the roman empire"),
            sub(4, "unrelated chemistry notes"),
        ];
        let risk = assess_corpus(&TfIdfComparator, &candidate, &corpus).unwrap();
        assert_eq!(risk.similar_count, 2);
    }
}
