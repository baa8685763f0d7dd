//! # Content Feedback
//!
//! Derives human-readable feedback and a quality score from the structure of a submission,
//! without looking at any peer.
//!
//! ## Features
//!
//! - word count: whitespace-delimited tokens
//! - introduction, conclusion and example markers: case-insensitive pattern presence anywhere
//!   in the text (no word boundaries, so `end` also matches `depend`)
//! - sentence count: runs of text terminated by `.`, `!` or `?`
//!
//! ## Feedback order
//!
//! Length, introduction, conclusion, examples, structure. Suggestions for a missing
//! introduction, conclusion or examples are only made for submissions longer than 100 words.

use crate::error::EvaluatorError;
use crate::scorer::compute_quality_score;
use once_cell::sync::Lazy;
use regex::Regex;

type Pattern = Lazy<Result<Regex, regex::Error>>;

static INTRODUCTION: Pattern =
    Lazy::new(|| Regex::new(r"(?i)introduction|overview|begin|first|start|opening"));
static CONCLUSION: Pattern = Lazy::new(|| {
    Regex::new(r"(?i)conclusion|summary|in conclusion|to summarize|final|end|closing")
});
static EXAMPLES: Pattern = Lazy::new(|| {
    Regex::new(r"(?i)example|for instance|such as|like|specifically|case|illustration")
});
static SENTENCE: Pattern = Lazy::new(|| Regex::new(r"[^.!?]+[.!?]+"));

fn pattern(name: &'static str, compiled: &'static Pattern) -> Result<&'static Regex, EvaluatorError> {
    Lazy::force(compiled)
        .as_ref()
        .map_err(|e| EvaluatorError::Pattern {
            name,
            source: e.clone(),
        })
}

/// Shown when no other feedback line applies.
pub const GENERIC_PRAISE: &str = "Great job! Your submission is well-structured and comprehensive.";

pub const VERY_BRIEF: &str =
    "Your submission is very brief (less than 50 words). Add more content and details.";
pub const QUITE_BRIEF: &str =
    "Your submission is quite brief. Consider adding more details and examples.";
pub const COMPREHENSIVE_LENGTH: &str = "✓ Good length! Your submission is comprehensive.";
pub const GOOD_LENGTH: &str = "✓ Good submission length.";
pub const ADD_INTRODUCTION: &str = "Consider adding a clear introduction to set context.";
pub const GOOD_INTRODUCTION: &str = "✓ Good introduction found.";
pub const ADD_CONCLUSION: &str = "Add a conclusion to summarize your main points.";
pub const GOOD_CONCLUSION: &str = "✓ Good conclusion found.";
pub const ADD_EXAMPLES: &str = "Include specific examples to support your arguments.";
pub const GOOD_EXAMPLES: &str = "✓ Good use of examples.";
pub const NEEDS_STRUCTURE: &str = "Your submission needs better paragraph structure.";
pub const GOOD_STRUCTURE: &str = "✓ Good paragraph structure.";

/// Structural features extracted from a normalized submission.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ContentFeatures {
    pub word_count: usize,
    pub has_introduction: bool,
    pub has_conclusion: bool,
    pub has_examples: bool,
    pub sentence_count: usize,
}

impl ContentFeatures {
    /// Scans `text` for the structural features used by feedback and scoring.
    ///
    /// # Errors
    ///
    /// Returns [`EvaluatorError::Pattern`] if one of the built-in patterns failed to compile.
    pub fn extract(text: &str) -> Result<Self, EvaluatorError> {
        Ok(Self {
            word_count: text.split_whitespace().count(),
            has_introduction: pattern("introduction", &INTRODUCTION)?.is_match(text),
            has_conclusion: pattern("conclusion", &CONCLUSION)?.is_match(text),
            has_examples: pattern("examples", &EXAMPLES)?.is_match(text),
            sentence_count: pattern("sentence", &SENTENCE)?.find_iter(text).count(),
        })
    }
}

/// Feedback lines for `features`, in display order.
pub fn feedback_lines(features: &ContentFeatures) -> Vec<&'static str> {
    let words = features.word_count;
    let mut lines = Vec::new();

    lines.push(if words < 50 {
        VERY_BRIEF
    } else if words < 100 {
        QUITE_BRIEF
    } else if words > 500 {
        COMPREHENSIVE_LENGTH
    } else {
        GOOD_LENGTH
    });

    let sections = [
        (features.has_introduction, GOOD_INTRODUCTION, ADD_INTRODUCTION),
        (features.has_conclusion, GOOD_CONCLUSION, ADD_CONCLUSION),
        (features.has_examples, GOOD_EXAMPLES, ADD_EXAMPLES),
    ];
    for (present, praise, suggestion) in sections {
        if present {
            lines.push(praise);
        } else if words > 100 {
            lines.push(suggestion);
        }
    }

    if features.sentence_count < 3 && words > 50 {
        lines.push(NEEDS_STRUCTURE);
    } else if features.sentence_count > 3 {
        lines.push(GOOD_STRUCTURE);
    }

    lines
}

/// Joins feedback lines with single spaces, or returns [`GENERIC_PRAISE`] when there are none.
pub fn summarize(lines: &[&str]) -> String {
    if lines.is_empty() {
        GENERIC_PRAISE.to_string()
    } else {
        lines.join(" ")
    }
}

/// Feedback and quality score for one submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContentFeedback {
    pub features: ContentFeatures,
    pub lines: Vec<&'static str>,
    pub summary: String,
    pub score: u32,
}

/// Analyzes a normalized submission text.
pub fn analyze_content(text: &str) -> Result<ContentFeedback, EvaluatorError> {
    let features = ContentFeatures::extract(text)?;
    let lines = feedback_lines(&features);
    let summary = summarize(&lines);
    Ok(ContentFeedback {
        features,
        lines,
        summary,
        score: compute_quality_score(&features),
    })
}
