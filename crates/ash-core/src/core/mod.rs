//! # Core Module
//!
//! This module provides the residue scoring model underlying the ASH
//! dissimilarity profile: a fixed, table-driven hydrophilicity scale and the
//! pure functions that score residue pairs and whole peptides against it.
//!
//! ## Architecture
//!
//! - **Scale** ([`scale`]) - The process-wide constant weight table
//!   partitioning the 20 canonical amino acids into hydrophobic, neutral,
//!   and hydrophilic groups, plus the gap symbol and penalty constants.
//! - **Scoring** ([`scoring`]) - Pairwise residue scoring with gap handling,
//!   and the simple hydrophilic-fraction antigenicity estimate.
//!
//! Both submodules are stateless; every function is a pure function of its
//! arguments and the constant tables.

pub mod scale;
pub mod scoring;
