//! # Engine Module
//!
//! This module implements the window scanner that drives the ASH procedure:
//! a dense, stride-1 sliding window over two pre-aligned, equal-length
//! sequences, producing one [`scanner::ScoreEntry`] per window position.
//!
//! ## Architecture
//!
//! - **Scanning** ([`scanner`]) - The sliding-window driver and the
//!   immutable per-window result record.
//! - **Error Handling** ([`error`]) - Engine-specific error types and
//!   propagation from the residue scoring model.
//!
//! The scanner is stateless and deterministic; identical inputs always yield
//! an identical ordered result set.

pub mod error;
pub mod scanner;
