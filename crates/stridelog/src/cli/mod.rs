//! Command-line interface for stridelog.
//!
//! This module provides the CLI structure and command definitions for the
//! `stride` binary.

mod commands;

use std::path::PathBuf;

use clap::{Parser, Subcommand};

pub use commands::{
    AddCommand, ConfigCommand, DeleteCommand, ListCommand, OutputFormat, ShowCommand,
    SummaryCommand,
};

/// stride - Log your walks, locally
///
/// An offline walk tracker: record the date, distance, duration, and mood of
/// each walk, and see aggregate statistics over everything you've logged.
#[derive(Debug, Parser)]
#[command(name = "stride")]
#[command(author, version, about, long_about = None)]
#[command(propagate_version = true)]
pub struct Cli {
    /// Path to custom configuration file
    #[arg(short, long, global = true, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Increase verbosity (-v for debug, -vv for trace)
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Suppress all output except errors
    #[arg(short, long, global = true)]
    pub quiet: bool,

    /// The command to execute (defaults to listing walks)
    #[command(subcommand)]
    pub command: Option<Command>,
}

/// Available commands.
#[derive(Debug, Subcommand)]
pub enum Command {
    /// List all recorded walks
    List(ListCommand),

    /// Record a new walk
    Add(AddCommand),

    /// Show a single walk in detail
    Show(ShowCommand),

    /// Show aggregate statistics over all walks
    Summary(SummaryCommand),

    /// Delete a recorded walk
    Delete(DeleteCommand),

    /// View configuration
    #[command(subcommand)]
    Config(ConfigCommand),
}

impl Cli {
    /// Get the verbosity level based on flags.
    #[must_use]
    pub fn verbosity(&self) -> crate::logging::Verbosity {
        if self.quiet {
            crate::logging::Verbosity::Quiet
        } else {
            match self.verbose {
                0 => crate::logging::Verbosity::Normal,
                1 => crate::logging::Verbosity::Verbose,
                _ => crate::logging::Verbosity::Trace,
            }
        }
    }
}
