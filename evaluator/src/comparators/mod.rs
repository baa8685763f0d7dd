//! # Comparators
//!
//! This module provides the pairwise comparison used for plagiarism-risk estimation.
//!
//! - [`vectorizer`]: two-document TF-IDF term weighting.
//! - [`tfidf_comparator`]: the default [`crate::traits::scorer::SimilarityScorer`], combining
//!   exact/substring shortcuts with weighted term overlap.

pub mod tfidf_comparator;
pub mod vectorizer;
