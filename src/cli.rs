//! Command-line definitions.

use std::path::PathBuf;

use clap::{ArgAction, Parser, Subcommand};

use altwise_config::DEFAULT_CONFIG_FILE;

/// altwise CLI.
#[derive(Parser)]
#[command(name = "altwise")]
#[command(about = "Find and fix svg/img elements without an accessible name")]
#[command(version)]
pub(crate) struct Cli {
    /// More log output on stderr (-v debug, -vv trace)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub(crate) enum Command {
    /// List elements that need an accessible name
    Scan {
        /// Documents to scan
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Print one JSON object per finding
        #[arg(long)]
        json: bool,
    },

    /// Suggest accessible names for flagged elements (JSON lines)
    Suggest {
        /// Documents to process
        #[arg(required = true)]
        files: Vec<PathBuf>,

        /// Configuration file path
        #[arg(short, long, default_value = DEFAULT_CONFIG_FILE)]
        config: PathBuf,

        /// Provider endpoint URL
        #[arg(long)]
        endpoint: Option<String>,

        /// Provider API key
        #[arg(long)]
        api_key: Option<String>,

        /// Model name
        #[arg(long)]
        model: Option<String>,

        /// Send images instead of markup when possible
        #[arg(long)]
        vision: bool,
    },
}
