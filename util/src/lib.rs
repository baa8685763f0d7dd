//! Shared helpers for the evaluator workspace.
//!
//! - [`config`]: environment-driven runtime configuration.

pub mod config;
