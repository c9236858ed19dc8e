//! Triage CLI entry point.

use std::fs::{self, OpenOptions};
use std::sync::Mutex;

use clap::Parser;
use tracing_subscriber::{fmt, EnvFilter};

use triage_cli::cli::{Cli, Commands};
use triage_cli::commands;
use triage_cli::config::{self, TriageConfig};
use triage_cli::tui;

fn main() {
    // Load .env.local if it exists (for TRIAGE_FEED etc.)
    config::load_env();

    let cli = Cli::parse();
    let config = TriageConfig::from_cli(&cli);

    init_tracing(&cli, &config);

    let result = match cli.command {
        Some(Commands::Show { format }) => commands::cmd_show(&config, format),
        Some(Commands::Board) | None => tui::run(&config),
    };

    if let Err(e) = result {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

/// Initialize tracing.
///
/// The board owns the terminal, so its logs go to a file under the state
/// directory. Everything else logs to stderr.
fn init_tracing(cli: &Cli, config: &TriageConfig) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(cli.log_level().to_string()));

    if cli.is_interactive() {
        let file = fs::create_dir_all(config.logs_dir()).and_then(|_| {
            OpenOptions::new()
                .create(true)
                .append(true)
                .open(config.log_file())
        });

        match file {
            Ok(file) => {
                fmt()
                    .with_env_filter(filter)
                    .with_target(false)
                    .with_ansi(false)
                    .with_writer(Mutex::new(file))
                    .init();
                return;
            }
            Err(e) => {
                // Writing to stderr would draw over the board
                eprintln!(
                    "Warning: cannot open log file {}: {}",
                    config.log_file().display(),
                    e
                );
                fmt()
                    .with_env_filter(filter)
                    .with_writer(std::io::sink)
                    .init();
                return;
            }
        }
    }

    fmt()
        .with_env_filter(filter)
        .with_target(false)
        .with_writer(std::io::stderr)
        .init();
}
