//! # Utilities
//!
//! Small helpers shared across the evaluator.
//!
//! - [`text_normalization`]: canonical form used before every comparison and feature scan.

pub mod text_normalization;
