//! Command handlers for CLI subcommands.

use std::fmt::Write as _;

use tracing::info;
use triage_board::Board;
use triage_models::Stage;

use crate::cli::OutputFormat;
use crate::config::TriageConfig;

/// Result type for command operations.
pub type Result<T> = std::result::Result<T, Box<dyn std::error::Error>>;

/// Loads the feed, seeds a board and prints it.
pub fn cmd_show(config: &TriageConfig, format: OutputFormat) -> Result<()> {
    let seed = triage_feed::load(&config.source, config.http_timeout)?;
    let board = Board::from_seed(seed);
    info!(source = %config.source, reports = board.len(), "showing board");

    print!("{}", render_board(&board, format)?);
    Ok(())
}

/// Renders a board in the requested format.
pub fn render_board(board: &Board, format: OutputFormat) -> Result<String> {
    let mut out = String::new();

    match format {
        OutputFormat::Json => {
            out.push_str(&serde_json::to_string_pretty(&board.to_partitioned())?);
            out.push('\n');
        }
        OutputFormat::Brief => {
            for (stage, report) in board.iter() {
                writeln!(out, "{}\t{}\t{}", stage, report.id, report.label)?;
            }
        }
        OutputFormat::Table => {
            for stage in Stage::ALL {
                let reports = board.stage(stage);
                writeln!(out, "{} ({})", stage.label().to_uppercase(), reports.len())?;

                if reports.is_empty() {
                    writeln!(out, "  (none)")?;
                }
                for report in reports {
                    let weight = match report.weight {
                        Some(w) if report.is_escalated() => format!("  ^{} escalated", w),
                        Some(w) => format!("  ^{}", w),
                        None => String::new(),
                    };
                    writeln!(
                        out,
                        "  {:<12} {:<28} {}{}",
                        report.id.as_str(),
                        report.label,
                        report.timestamp,
                        weight
                    )?;
                }
                out.push('\n');
            }
        }
    }

    Ok(out)
}
