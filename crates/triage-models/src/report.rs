//! Field report types.
//!
//! Reports are immutable from the board's point of view: the board only
//! ever changes which stage a report sits in, never its content.

use serde::{Deserialize, Serialize};

use crate::ids::ReportId;

/// Weight above which a report is shown as auto-escalated.
pub const ESCALATION_THRESHOLD: u32 = 10;

/// A single field report.
///
/// Field names on the wire follow the reporting backend
/// (`image_name`, `report_url`, `upvotes`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Report {
    /// Stable unique identifier.
    pub id: ReportId,

    /// Display label.
    #[serde(rename = "image_name")]
    pub label: String,

    /// Creation or observation time, displayed verbatim.
    pub timestamp: String,

    /// Locator of the full report resource.
    #[serde(rename = "report_url")]
    pub url: String,

    /// Optional weight (upvote count), used only for display emphasis.
    #[serde(rename = "upvotes", default, skip_serializing_if = "Option::is_none")]
    pub weight: Option<u32>,
}

impl Report {
    /// Creates a new report with no weight.
    pub fn new(
        id: impl Into<ReportId>,
        label: impl Into<String>,
        timestamp: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            id: id.into(),
            label: label.into(),
            timestamp: timestamp.into(),
            url: url.into(),
            weight: None,
        }
    }

    /// Sets the weight.
    pub fn with_weight(mut self, weight: u32) -> Self {
        self.weight = Some(weight);
        self
    }

    /// Returns true if the weight is above [`ESCALATION_THRESHOLD`].
    pub fn is_escalated(&self) -> bool {
        self.weight.is_some_and(|w| w > ESCALATION_THRESHOLD)
    }
}

/// A report as served by feeds that do not assign identifiers.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct LegacyReport {
    /// Locator of the full report resource.
    pub report_url: String,
    /// Display label.
    pub image_name: String,
    /// Creation or observation time.
    pub timestamp: String,
    /// Optional upvote count.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub upvotes: Option<u32>,
}

impl LegacyReport {
    /// Converts into a [`Report`], deriving the id from the position in the feed.
    pub fn into_report(self, index: usize) -> Report {
        Report {
            id: ReportId::from(format!("api-{}", index)),
            label: self.image_name,
            timestamp: self.timestamp,
            url: self.report_url,
            weight: self.upvotes,
        }
    }
}
