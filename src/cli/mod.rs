//! CLI command definitions and handlers

use clap::{Parser, Subcommand};

use crate::config::Config;

pub mod org;
pub mod repo;
pub mod status;

/// Output format options
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    /// Table format - one row per entry (default)
    #[default]
    Table,
    /// JSON format - structured for scripts
    Json,
}

impl OutputFormat {
    /// Parse a config-file preference value; unknown values are ignored
    fn from_preference(value: &str) -> Option<Self> {
        match value {
            "table" => Some(OutputFormat::Table),
            "json" => Some(OutputFormat::Json),
            _ => None,
        }
    }
}

/// Resolve the output format: CLI flag, then config preference, then table.
pub fn resolve_format(flag: Option<OutputFormat>, config: &Config) -> OutputFormat {
    flag.or_else(|| {
        config
            .preferences
            .format
            .as_deref()
            .and_then(OutputFormat::from_preference)
    })
    .unwrap_or_default()
}

/// ghorg - CLI companion for exploring GitHub organizations
#[derive(Parser, Debug)]
#[command(name = "ghorg")]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Subcommand to execute
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (table, json)
    #[arg(long, global = true, env = "GHORG_FORMAT", hide_env = true)]
    pub format: Option<OutputFormat>,

    /// Override config file location
    #[arg(long, global = true, env = "GHORG_CONFIG", hide_env = true)]
    pub config: Option<String>,

    /// Enable debug logging
    #[arg(long, global = true, env = "GHORG_DEBUG", hide_env = true)]
    pub debug: bool,
}

/// Available CLI commands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Show organization metadata
    Org {
        /// Organization login; falls back to `default_org` from config
        login: Option<String>,

        /// Print one raw field addressed by a dotted path, e.g. plan.name
        #[arg(long)]
        field: Option<String>,
    },

    /// List repository names for one or more organizations
    Repos {
        /// Organization logins
        #[arg(required = true)]
        logins: Vec<String>,

        /// Only repositories whose license key matches exactly, e.g. apache-2.0
        #[arg(long)]
        license: Option<String>,
    },

    /// Show configuration status
    Status,

    /// Display version information
    Version,
}
