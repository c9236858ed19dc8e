//! Opens report locators with the system handler.

use std::io;

use triage_board::ReportOpener;
use triage_models::Report;

/// Opens locators in the default browser via the `open` crate.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemOpener;

impl ReportOpener for SystemOpener {
    fn open(&self, report: &Report) -> io::Result<()> {
        if !has_locator(report) {
            return Err(io::Error::new(
                io::ErrorKind::InvalidInput,
                format!("report {} has no locator", report.id),
            ));
        }
        open::that_detached(&report.url)
    }
}

/// Placeholder locators (`#`, empty) point nowhere.
pub fn has_locator(report: &Report) -> bool {
    let url = report.url.trim();
    !url.is_empty() && url != "#"
}
