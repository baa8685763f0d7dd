//! # Scorer Module
//!
//! Turns the structural features of a submission into its content-quality score.
//! The score is independent of plagiarism risk: peers never influence it.

use crate::feedback::content_feedback::ContentFeatures;

/// Starting point before any feature adjustments.
pub const BASE_SCORE: i64 = 60;
/// Lowest score a very short submission can be penalized down to.
pub const SHORT_SUBMISSION_FLOOR: i64 = 20;
pub const MAX_SCORE: i64 = 100;

/// Computes the content-quality score for a set of extracted features.
///
/// Starting at [`BASE_SCORE`]:
///
/// - `+5` for 50–99 words, `+15` for 100–299 words, `+20` for 300 or more
/// - `+5` for an introduction, `+5` for a conclusion, `+10` for examples
/// - `+10` for more than five sentences
/// - under 50 words, `20` is subtracted with a floor of [`SHORT_SUBMISSION_FLOOR`]
///
/// The result is capped at [`MAX_SCORE`].
///
/// # Example
///
/// ```
/// use evaluator::feedback::content_feedback::ContentFeatures;
/// use evaluator::scorer::compute_quality_score;
///
/// let features = ContentFeatures {
///     word_count: 120,
///     has_introduction: false,
///     has_conclusion: true,
///     has_examples: true,
///     sentence_count: 2,
/// };
/// // 60 + 15 (length) + 5 (conclusion) + 10 (examples)
/// assert_eq!(compute_quality_score(&features), 90);
/// ```
pub fn compute_quality_score(features: &ContentFeatures) -> u32 {
    let words = features.word_count;
    let mut score = BASE_SCORE;

    if (50..100).contains(&words) {
        score += 5;
    }
    if (100..300).contains(&words) {
        score += 15;
    }
    if words >= 300 {
        score += 20;
    }

    if features.has_introduction {
        score += 5;
    }
    if features.has_conclusion {
        score += 5;
    }
    if features.has_examples {
        score += 10;
    }
    if features.sentence_count > 5 {
        score += 10;
    }

    if words < 50 {
        score = (score - 20).max(SHORT_SUBMISSION_FLOOR);
    }

    score.clamp(0, MAX_SCORE) as u32
}
