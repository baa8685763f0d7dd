//! # Feedback Module
//!
//! Content-quality feedback for a submission.
//!
//! - [`content_feedback`]: extracts structural features, builds the ordered feedback lines and
//!   synthesizes the quality score.

pub mod content_feedback;
