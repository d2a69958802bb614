//! CLI module for intake
//!
//! Provides the command-line interface using clap.

pub mod commands;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Intake - guided request wizard for live sound, studio, post-production and audio advice
#[derive(Parser, Debug)]
#[command(name = "intake")]
#[command(version)]
#[command(about = "Guided request wizard for live sound, studio, post-production and audio advice")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Option<Commands>,

    /// Enable verbose logging (debug level)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Suppress info-level output
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// Override the working directory
    #[arg(long, global = true)]
    pub cwd: Option<PathBuf>,
}

impl Cli {
    /// Whether the command takes over the terminal
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Start))
    }
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Run the interactive wizard (default)
    Start,

    /// Print the step catalogue with possible successors
    Steps {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Drive a session from an answers file and report where it stops
    Replay {
        /// JSON object of answers keyed by field name
        file: PathBuf,

        /// Output as JSON
        #[arg(long)]
        json: bool,
    },

    /// Validate a set of contact details
    CheckContact {
        #[arg(long)]
        name: String,

        #[arg(long)]
        email: String,

        #[arg(long)]
        phone: String,
    },
}
