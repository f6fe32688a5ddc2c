//! CLI argument definitions using clap.
//!
//! The overlay engine normally runs inside a host application. This binary is
//! a standalone host: it loads a JSON snapshot of the host's locale tables and
//! dialogue elements, runs the overlay against a mod directory, and reports.
//!
//! ## Commands
//!
//! - `apply`: Run the overlay against a host snapshot
//! - `init`: Write a default configuration file

use std::path::PathBuf;

use clap::{Args, CommandFactory, Parser, Subcommand};

#[derive(Debug, Parser)]
#[command(author, version, about, long_about = None)]
pub struct Arguments {
    #[command(subcommand)]
    pub command: Option<Command>,
}

impl Arguments {
    /// Check if a command was provided, otherwise print help and return None.
    pub fn with_command_or_help(self) -> Option<Command> {
        if self.command.is_none() {
            Self::command().print_help().ok();
        }
        self.command
    }
}

/// Arguments that override the configuration file.
#[derive(Debug, Clone, Args)]
pub struct CommonArgs {
    /// Mod root directory holding the locale tree (default: current directory)
    #[arg(long)]
    pub mod_root: Option<PathBuf>,

    /// Locale directory relative to the mod root (overrides config file)
    #[arg(long)]
    pub locales_root: Option<String>,

    /// Reference locale used to gate keys (overrides config file)
    #[arg(long)]
    pub reference_locale: Option<String>,

    /// Target locale code; repeat for several (overrides config file)
    #[arg(long = "target-locale")]
    pub target_locales: Vec<String>,

    /// Enable verbose output
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Args)]
pub struct ApplyCommand {
    #[command(flatten)]
    pub common: CommonArgs,

    /// Host snapshot (JSON) with locale tables and dialogue elements
    #[arg(long, env = "LOCALE_OVERLAY_SNAPSHOT")]
    pub snapshot: PathBuf,

    /// Register merges as deferred transforms instead of writing immediately
    #[arg(long)]
    pub deferred: bool,

    /// Write the overlaid snapshot to this file
    #[arg(short, long)]
    pub output: Option<PathBuf>,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Overlay translation files onto a host snapshot and print coverage
    Apply(ApplyCommand),
    /// Initialize a new .overlayrc.json configuration file
    Init,
}
