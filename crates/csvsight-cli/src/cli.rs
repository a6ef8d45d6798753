//! CLI argument definitions using clap.

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Csvsight: CSV chart analysis pipeline
#[derive(Parser)]
#[command(name = "csvsight")]
#[command(version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Enable verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Analyze a CSV file and print the suggested chart and summary
    Analyze {
        /// Path to the CSV file
        #[arg(value_name = "FILE")]
        file: PathBuf,

        /// Output path for a JSON report (default: stdout only)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Use the mock provider instead of the Anthropic API
        #[arg(long)]
        mock_llm: bool,

        /// Model to use (e.g. "claude-haiku-4-5-20251001")
        #[arg(long)]
        model: Option<String>,
    },

    /// Run the HTTP analysis boundary
    Serve {
        /// Port for the server
        #[arg(short, long, default_value = "3141")]
        port: u16,

        /// Use the mock provider instead of the Anthropic API
        #[arg(long)]
        mock_llm: bool,
    },
}
