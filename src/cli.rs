use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

use crate::types::{DisplayFilter, GroupKey, VALID_DISPLAY_FILTERS, VALID_GROUP_KEYS};

#[derive(Parser)]
#[command(name = "kanban")]
#[command(about = "Kanban board for support tickets")]
#[command(version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// Where to read tickets from
#[derive(Args, Debug, Clone, Default)]
pub struct SourceArgs {
    /// Ticket endpoint URL (overrides config and KANBAN_ENDPOINT)
    #[arg(long, conflicts_with = "file")]
    pub endpoint: Option<String>,

    /// Read the ticket payload from a local JSON file instead
    #[arg(long)]
    pub file: Option<PathBuf>,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Open the interactive kanban board
    #[command(visible_alias = "b")]
    Board {
        #[command(flatten)]
        source: SourceArgs,

        /// Write logs here instead of the default cache location
        #[arg(long)]
        log_file: Option<PathBuf>,
    },

    /// Print the grouped board once and exit
    #[command(visible_alias = "s")]
    Show {
        #[command(flatten)]
        source: SourceArgs,

        /// Group by: status, user, priority (default: status)
        #[arg(short, long, default_value = "status", value_parser = parse_group_key)]
        group_by: GroupKey,

        /// Display: all, high-priority, low-priority (default: all)
        #[arg(short, long, default_value = "all", value_parser = parse_display_filter)]
        display: DisplayFilter,

        /// Output as JSON
        #[arg(long)]
        json: bool,

        /// Disable colored output
        #[arg(long)]
        no_color: bool,
    },

    /// Manage configuration
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Subcommand)]
pub enum ConfigAction {
    /// Show current configuration
    Show {
        /// Output as JSON
        #[arg(long)]
        json: bool,
    },
    /// Set a configuration value
    Set {
        /// Configuration key (endpoint, request_timeout)
        key: String,
        /// Value to set
        value: String,
    },
    /// Get a configuration value
    Get {
        /// Configuration key (endpoint, request_timeout)
        key: String,
    },
    /// Print the config file location
    Path,
}

fn parse_with_validation<T, F>(
    s: &str,
    parser: F,
    field_name: &str,
    valid_values: &[&str],
) -> Result<T, String>
where
    F: FnOnce(&str) -> Result<T, String>,
{
    parser(s).map_err(|_| {
        format!(
            "Invalid {}. Must be one of: {}",
            field_name,
            valid_values.join(", ")
        )
    })
}

fn parse_group_key(s: &str) -> Result<GroupKey, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "group-by",
        VALID_GROUP_KEYS,
    )
}

fn parse_display_filter(s: &str) -> Result<DisplayFilter, String> {
    parse_with_validation(
        s,
        |v| v.parse().map_err(|_| String::new()),
        "display",
        VALID_DISPLAY_FILTERS,
    )
}
