//! # Workflows Module
//!
//! This module provides the high-level entry point that ties the scoring
//! model and the window scanner together into the complete ASH procedure.
//!
//! ## Architecture
//!
//! - **Profile Workflow** ([`profile`]) - Validates that both inputs are
//!   alignment output over the canonical alphabet, then scans them into an
//!   ordered dissimilarity profile.

pub mod profile;
