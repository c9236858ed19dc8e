//! Outbound "open this report" capability.

use std::io;

use triage_models::Report;

/// Opens a report's resource locator on behalf of the board.
///
/// The board does no navigation itself; consumers supply an opener
/// (system browser, test recorder, ...).
pub trait ReportOpener {
    /// Opens the report's locator.
    fn open(&self, report: &Report) -> io::Result<()>;
}

impl<F> ReportOpener for F
where
    F: Fn(&Report) -> io::Result<()>,
{
    fn open(&self, report: &Report) -> io::Result<()> {
        self(report)
    }
}
