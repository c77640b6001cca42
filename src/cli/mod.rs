//! Command-line interface for asm-stats.
//!
//! This module implements the CLI using clap. Available commands:
//!
//! - **report**: Print the aggregate summary for one FASTA file
//! - **append**: Append the summary as one row of a delimited results file
//!
//! Both commands share the same parsing and statistics core; they differ
//! only in how the computed report leaves the program.
//!
//! ## Usage
//!
//! ```text
//! # Print the summary report
//! asm-stats report assembly.fa
//!
//! # JSON output for scripting
//! asm-stats report assembly.fa --format json
//!
//! # Include the length histogram with 500 bp buckets
//! asm-stats report assembly.fa --histogram --interval 500
//!
//! # Collect results across runs in one delimited file
//! asm-stats append assembly.fa results.csv
//! ```

use clap::{Parser, Subcommand};

pub mod append;
pub mod report;

#[derive(Parser)]
#[command(name = "asm-stats")]
#[command(version)]
#[command(about = "Summary statistics for FASTA assemblies")]
#[command(
    long_about = "asm-stats computes summary statistics for the sequences in a FASTA file.\n\nIt reports totals, the length distribution (largest/shortest contig, N25/N50/N75) and nucleotide composition (GC content, ambiguous-base count), either as a console report or as a row appended to a delimited results file for tracking assemblies over time."
)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Print the summary statistics for a FASTA file
    Report(report::ReportArgs),

    /// Append the summary statistics to a delimited results file
    Append(append::AppendArgs),
}

#[derive(Clone, Copy, Debug, clap::ValueEnum)]
pub enum OutputFormat {
    Text,
    Json,
}
