//! CLI command definitions.
//!
//! This module defines the structure of all CLI subcommands. Each subcommand
//! corresponds to one view of the original tracker: the walk list, the
//! add-walk form, the single-walk detail view, and the summary page.

use clap::{Args, Subcommand, ValueEnum};

/// List command arguments.
#[derive(Debug, Default, Args)]
pub struct ListCommand {
    /// Output format
    #[arg(short, long, value_enum, default_value = "table")]
    pub format: OutputFormat,
}

/// Add command arguments.
///
/// All fields are optional at the CLI level; the add flow itself performs
/// the presence check so a missing field surfaces as the flow's validation
/// error rather than a clap usage error.
#[derive(Debug, Args)]
pub struct AddCommand {
    /// Date of the walk (YYYY-MM-DD, "today", or "yesterday")
    #[arg(short = 'd', long)]
    pub date: Option<String>,

    /// Distance walked in kilometers
    #[arg(short = 'k', long)]
    pub distance: Option<f64>,

    /// Time taken in minutes
    #[arg(short, long)]
    pub minutes: Option<f64>,

    /// Mood of the walk (good, ok, or bad; anything else records as unknown)
    #[arg(long)]
    pub mood: Option<String>,
}

/// Show command arguments.
#[derive(Debug, Args)]
pub struct ShowCommand {
    /// The id of the walk to show
    pub id: i64,

    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Summary command arguments.
#[derive(Debug, Args)]
pub struct SummaryCommand {
    /// Output as JSON
    #[arg(short, long)]
    pub json: bool,
}

/// Delete command arguments.
#[derive(Debug, Args)]
pub struct DeleteCommand {
    /// The id of the walk to delete
    pub id: i64,
}

/// Configuration commands.
#[derive(Debug, Subcommand)]
pub enum ConfigCommand {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(short, long)]
        json: bool,
    },

    /// Show the configuration file path
    Path,
}

/// Output format for commands.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum)]
pub enum OutputFormat {
    /// Plain text output
    Plain,
    /// Formatted table
    #[default]
    Table,
    /// JSON output
    Json,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_output_format_default() {
        assert_eq!(OutputFormat::default(), OutputFormat::Table);
    }

    #[test]
    fn test_list_command_default_format() {
        let cmd = ListCommand::default();
        assert_eq!(cmd.format, OutputFormat::Table);
    }

    #[test]
    fn test_add_command_debug() {
        let cmd = AddCommand {
            date: Some("today".to_string()),
            distance: Some(4.0),
            minutes: Some(40.0),
            mood: Some("good".to_string()),
        };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("today"));
        assert!(debug_str.contains("good"));
    }

    #[test]
    fn test_show_command_debug() {
        let cmd = ShowCommand { id: 7, json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains('7'));
    }

    #[test]
    fn test_config_command_debug() {
        let cmd = ConfigCommand::Show { json: false };
        let debug_str = format!("{cmd:?}");
        assert!(debug_str.contains("Show"));
    }

    #[test]
    fn test_output_format_clone() {
        let format = OutputFormat::Json;
        let cloned = format;
        assert_eq!(format, cloned);
    }
}
