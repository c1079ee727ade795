//! CLI module for the structure validator.
//!
//! This module provides command-line argument parsing using Clap with
//! environment variable support.

pub mod config;
pub mod output;

use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Project structure validator - checks folder layout and naming conventions.
///
/// Verifies that components have their co-located files, that file and
/// folder names follow the configured conventions, and that required
/// folders exist. Supports both human-readable and JSON output formats.
#[derive(Parser, Debug)]
#[command(name = "validate-structure")]
#[command(version, about, long_about = None)]
pub struct Args {
    #[command(subcommand)]
    pub command: Command,

    /// Increase verbosity level (-v for info, -vv for debug, -vvv for trace).
    #[arg(long, short = 'v', action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,
}

/// Available subcommands.
#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Validate the project structure.
    Check(CheckArgs),

    /// Initialize a configuration file in the current directory.
    Init {
        /// Preset to base the configuration on.
        #[arg(long, short = 'p', default_value = "react")]
        preset: String,
    },

    /// List available presets.
    Presets,
}

/// Options for the `check` subcommand.
#[derive(clap::Args, Debug, Clone, PartialEq, Eq)]
pub struct CheckArgs {
    /// Path to the configuration file. Searched for from the root when
    /// omitted.
    #[arg(long, short = 'c', env = "VALIDATE_STRUCTURE_CONFIG")]
    pub config: Option<PathBuf>,

    /// Root directory to validate.
    #[arg(long, short = 'r', env = "VALIDATE_STRUCTURE_ROOT", default_value = ".")]
    pub root: PathBuf,

    /// Output validation results as JSON instead of human-readable format.
    #[arg(long, short = 'j')]
    pub json: bool,
}

impl Args {
    /// Returns true if results are written as JSON.
    pub fn json_output(&self) -> bool {
        matches!(&self.command, Command::Check(check) if check.json)
    }
}
