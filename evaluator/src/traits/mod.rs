//!
//! Traits Module
//!
//! Core extension points of the evaluator.
//!
//! - [`scorer`]: the [`scorer::SimilarityScorer`] strategy used to compare a candidate with each peer.

pub mod scorer;
