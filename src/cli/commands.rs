//! CLI command definitions using clap.
//!
//! Defines the main CLI structure and subcommands:
//! - show: print a template's exact text
//! - list: list available templates
//! - check: validate a completion or template file
//! - extract: pull the answer (or reasoning) span from a completion
//! - log: append a parsed completion to the completions log

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Promptr - reasoning prompt asset and tagged-output tooling
#[derive(Parser, Debug)]
#[command(name = "promptr")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Optional config file path
    #[arg(short, long, global = true)]
    pub config: Option<PathBuf>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,
}

impl Cli {
    /// Check if verbose mode is enabled
    pub fn is_verbose(&self) -> bool {
        self.verbose
    }
}

/// Main subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Print a template's exact text
    Show {
        /// Template name (defaults to the configured default template)
        name: Option<String>,
    },

    /// List available templates
    List,

    /// Validate a completion transcript (or template) file
    Check {
        /// File to validate
        file: PathBuf,

        /// Validate as a template asset instead of a completion
        #[arg(short, long)]
        template: bool,
    },

    /// Extract the answer span from a completion transcript
    Extract {
        /// Completion transcript file
        file: PathBuf,

        /// Print the reasoning span instead of the answer span
        #[arg(short, long)]
        reasoning: bool,
    },

    /// Parse a completion transcript and append it to the completions log
    Log {
        /// Completion transcript file
        file: PathBuf,

        /// Prompt text to record alongside the completion
        #[arg(short, long)]
        prompt: Option<String>,
    },
}
