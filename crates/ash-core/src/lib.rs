//! # ASH Core Library
//!
//! A library for computing positional chemical-dissimilarity profiles between
//! two aligned protein sequences, based on the ASH (Antigen Selection
//! Heuristic) scale. The profile helps locate regions of a protein that are
//! chemically distinct from (or conserved relative to) a reference, as a
//! heuristic aid for epitope and antigen selection.
//!
//! ## Architectural Philosophy
//!
//! The library is designed with a strict three-layer architecture to keep the
//! scoring model trivially testable in isolation and the public surface small.
//!
//! - **[`core`]: The Foundation.** Contains the fixed hydrophilicity scale
//!   (`scale`) and the pure per-residue scoring functions (`scoring`). No
//!   state, no I/O.
//!
//! - **[`engine`]: The Logic Core.** Drives a dense, stride-1 sliding window
//!   across two pre-aligned, equal-length sequences and aggregates one
//!   [`engine::scanner::ScoreEntry`] per window position.
//!
//! - **[`workflows`]: The Public API.** The highest-level entry point. It
//!   validates that the inputs really are alignment output over the canonical
//!   alphabet and then runs the scan.
//!
//! Alignment itself, FASTA parsing, and report serialization are deliberately
//! not part of this crate; callers supply two gapped, equal-length sequences
//! and consume the ordered result set.

pub mod core;
pub mod engine;
pub mod workflows;
