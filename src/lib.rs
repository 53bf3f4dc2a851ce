//! # Undecidable
//!
//! A small research CLI that evaluates closed-form trigonometric and
//! algebraic models of the Halting Problem, plus a utility that digests
//! document files with SHA-256.
//!
//! ## Usage
//!
//! ```bash
//! undecidable eval h_arctan 1
//! undecidable machine --x-values -1,0,1 --depth 3
//! undecidable flip true true
//! undecidable digest paper.docx paper.pdf notes.txt
//! ```
//!
//! ## Modules
//!
//! - `cli` - Argument parsing and command routing
//! - `digest` - SHA-256 digests over extracted document text or raw bytes
//! - `logic` - Complex boolean logic and the coin-flip cycle
//! - `machine` - The halting machine: recursive H(Qn) evaluation
//! - `model` - The scalar function models and their lookup table
pub mod cli;
pub mod digest;
pub mod error;
pub mod logic;
pub mod machine;
pub mod model;

pub use error::{Error, Result};
