//! Runtime configuration for the triage board.
//!
//! Values come from command-line flags, which clap falls back to reading
//! from the environment. `.env.local` files are loaded first so they can
//! supply those variables.
//!
//! # Environment Variables
//!
//! - `TRIAGE_FEED`: report feed (`mock`, URL, or file path)
//! - `TRIAGE_READ_ONLY`: disable drag and drop
//! - `TRIAGE_REFRESH_SECS`: auto-refresh interval
//! - `TRIAGE_HTTP_TIMEOUT_SECS`: HTTP feed timeout
//! - `TRIAGE_STATE_DIR`: override the state directory (`~/.triage`)

use std::path::PathBuf;
use std::time::Duration;

use triage_feed::FeedSource;

use crate::cli::Cli;

/// Environment variable for the report feed.
pub const FEED_ENV: &str = "TRIAGE_FEED";

/// Environment variable for read-only mode.
pub const READ_ONLY_ENV: &str = "TRIAGE_READ_ONLY";

/// Environment variable for the auto-refresh interval in seconds.
pub const REFRESH_ENV: &str = "TRIAGE_REFRESH_SECS";

/// Environment variable for the HTTP feed timeout in seconds.
pub const HTTP_TIMEOUT_ENV: &str = "TRIAGE_HTTP_TIMEOUT_SECS";

/// Environment variable for a custom state directory.
pub const STATE_DIR_ENV: &str = "TRIAGE_STATE_DIR";

/// Default state directory name under home.
const DEFAULT_STATE_DIR: &str = ".triage";

const LOGS_SUBDIR: &str = "logs";

/// Name of the log file written while the interactive board runs.
pub const LOG_FILE: &str = "triage.log";

/// Loads `.env.local` from the working directory, then from the default
/// state directory. Variables already set are never overwritten.
pub fn load_env() {
    let _ = dotenvy::from_filename(".env.local");
    let env_path = default_state_dir().join(".env.local");
    if env_path.exists() {
        let _ = dotenvy::from_path(&env_path);
    }
}

/// `~/.triage`, or `.triage` in the working directory without a home.
pub fn default_state_dir() -> PathBuf {
    dirs::home_dir()
        .map(|h| h.join(DEFAULT_STATE_DIR))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_STATE_DIR))
}

/// Resolved configuration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TriageConfig {
    /// Configured report feed.
    pub source: FeedSource,
    /// Disable drag and drop.
    pub read_only: bool,
    /// Re-fetch the feed on this interval.
    pub refresh_interval: Option<Duration>,
    /// Timeout for HTTP feeds.
    pub http_timeout: Duration,
    /// Base directory for logs.
    pub state_dir: PathBuf,
}

impl TriageConfig {
    /// Builds the configuration from parsed arguments.
    pub fn from_cli(cli: &Cli) -> Self {
        Self {
            source: cli.source.clone(),
            read_only: cli.read_only,
            refresh_interval: cli
                .refresh_secs
                .filter(|&secs| secs > 0)
                .map(Duration::from_secs),
            http_timeout: Duration::from_secs(cli.http_timeout_secs.max(1)),
            state_dir: cli.state_dir.clone().unwrap_or_else(default_state_dir),
        }
    }

    /// Directory holding log files.
    pub fn logs_dir(&self) -> PathBuf {
        self.state_dir.join(LOGS_SUBDIR)
    }

    /// Path of the interactive board's log file.
    pub fn log_file(&self) -> PathBuf {
        self.logs_dir().join(LOG_FILE)
    }
}

impl Default for TriageConfig {
    fn default() -> Self {
        Self {
            source: FeedSource::Mock,
            read_only: false,
            refresh_interval: None,
            http_timeout: Duration::from_secs(10),
            state_dir: default_state_dir(),
        }
    }
}
