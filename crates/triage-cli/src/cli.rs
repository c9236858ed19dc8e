//! Command-line interface definition using clap.

use clap::builder::BoolishValueParser;
use clap::{ArgAction, Parser, Subcommand};
use std::path::PathBuf;
use triage_feed::FeedSource;

use crate::config::{
    FEED_ENV, HTTP_TIMEOUT_ENV, READ_ONLY_ENV, REFRESH_ENV, STATE_DIR_ENV,
};

/// Build version string with git hash and build date.
fn version_string() -> &'static str {
    const VERSION: &str = env!("CARGO_PKG_VERSION");
    const GIT_HASH: &str = env!("GIT_HASH");
    const BUILD_DATE: &str = env!("BUILD_DATE");

    static VERSION_STRING: std::sync::OnceLock<String> = std::sync::OnceLock::new();
    VERSION_STRING.get_or_init(|| format!("{} ({}, {})", VERSION, GIT_HASH, BUILD_DATE))
}

/// Triage - field report triage board
#[derive(Parser, Debug)]
#[command(name = "triage")]
#[command(author, version = version_string(), about, long_about = None)]
pub struct Cli {
    /// Enable verbose output (-v, -vv, -vvv)
    #[arg(short, long, action = ArgAction::Count, global = true)]
    pub verbose: u8,

    /// Report feed: "mock", an http(s) URL, or a JSON file path
    #[arg(short, long, env = FEED_ENV, default_value = "mock", global = true)]
    pub source: FeedSource,

    /// Disable drag and drop
    #[arg(
        long,
        env = READ_ONLY_ENV,
        action = ArgAction::SetTrue,
        value_parser = BoolishValueParser::new(),
        global = true
    )]
    pub read_only: bool,

    /// Re-fetch the feed every N seconds
    #[arg(long, env = REFRESH_ENV, global = true)]
    pub refresh_secs: Option<u64>,

    /// HTTP feed timeout in seconds
    #[arg(long, env = HTTP_TIMEOUT_ENV, default_value_t = 10, global = true)]
    pub http_timeout_secs: u64,

    /// Path to state directory (logs)
    #[arg(long, env = STATE_DIR_ENV, global = true)]
    pub state_dir: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Open the interactive board (default)
    Board,

    /// Print the board seeded from the feed
    Show {
        /// Output format (table, json, brief)
        #[arg(short, long, default_value = "table")]
        format: OutputFormat,
    },
}

/// Output format for the show command
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, clap::ValueEnum)]
pub enum OutputFormat {
    #[default]
    Table,
    Json,
    Brief,
}

impl Cli {
    /// Returns the log level based on verbosity.
    pub fn log_level(&self) -> tracing::Level {
        match self.verbose {
            0 => tracing::Level::WARN,
            1 => tracing::Level::INFO,
            2 => tracing::Level::DEBUG,
            _ => tracing::Level::TRACE,
        }
    }

    /// Returns true if the interactive board should run.
    pub fn is_interactive(&self) -> bool {
        matches!(self.command, None | Some(Commands::Board))
    }
}
