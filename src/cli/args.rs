//! CLI argument structures
//!
//! This module defines the main CLI structure and all subcommand
//! definitions. Numeric values accept `inf`, `+inf` and `-inf` alongside
//! ordinary decimals.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Evaluate closed-form models of the Halting Problem
#[derive(Parser)]
#[command(name = "undecidable")]
#[command(
    about = "undecidable - closed-form trigonometric models of the Halting Problem",
    long_about = None
)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Evaluate a named model function at the given values
    #[command(name = "eval")]
    Eval {
        /// Function name (halt, loop, q_inverse, h_arctan, h_sigmoid,
        /// qn_tan2, qn_cot2, qn_tan2_sin, qn_cot2_cos)
        function: String,

        /// Up to four values (x, y, a, b); missing values use the
        /// function's defaults
        #[arg(value_name = "VALUE", allow_hyphen_values = true)]
        values: Vec<String>,
    },

    /// Run the halting machine trajectories
    #[command(name = "machine")]
    Machine {
        /// Starting values fed into the recursion
        #[arg(
            long = "x-values",
            value_name = "X",
            value_delimiter = ',',
            allow_hyphen_values = true
        )]
        x_values: Vec<f64>,

        /// Number of recursive iterations per trajectory
        #[arg(long, default_value = "3")]
        depth: u32,

        /// Emit trajectories as JSON instead of the step report
        #[arg(long)]
        json: bool,
    },

    /// Walk the complex coin-flip cycle
    #[command(name = "flip")]
    Flip {
        /// First coin (true/false, t/f, 1/0, yes/no; default true)
        p: Option<String>,

        /// Second coin (default true)
        q: Option<String>,
    },

    /// Apply one complex-logic operation to an expression
    #[command(name = "logic")]
    Logic {
        /// First component
        p: String,

        /// Second component
        q: String,

        /// Connective joining the components (and, or)
        connective: String,

        /// Operation to apply (inegation, irotation, negation)
        operation: String,
    },

    /// Print SHA-256 digests of the named files
    #[command(name = "digest")]
    Digest {
        /// Files to digest (.docx and .pdf hash their extracted text)
        #[arg(required = true, value_name = "FILE")]
        files: Vec<PathBuf>,

        /// Emit digests as JSON
        #[arg(long)]
        json: bool,
    },
}
