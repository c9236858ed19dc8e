//! Triage stages.

use serde::{Deserialize, Serialize};
use std::fmt;

/// One of the three fixed triage stages a report can occupy.
///
/// The derived ordering is the display order (pending, in progress,
/// completed). It says nothing about which transitions are allowed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum Stage {
    /// Report has arrived and nobody has picked it up yet.
    #[default]
    Pending,
    /// Report has been acknowledged by an operator.
    InProgress,
    /// Report has been handled.
    Completed,
}

impl Stage {
    /// All stages, in display order.
    pub const ALL: [Stage; 3] = [Stage::Pending, Stage::InProgress, Stage::Completed];

    /// Column heading shown to the operator.
    pub fn label(&self) -> &'static str {
        match self {
            Stage::Pending => "Pending",
            Stage::InProgress => "In Progress",
            Stage::Completed => "Completed",
        }
    }

    /// Wire name, as used in feed keys.
    pub fn as_str(&self) -> &'static str {
        match self {
            Stage::Pending => "pending",
            Stage::InProgress => "in_progress",
            Stage::Completed => "completed",
        }
    }

    /// Position of this stage in display order.
    pub fn column(&self) -> usize {
        match self {
            Stage::Pending => 0,
            Stage::InProgress => 1,
            Stage::Completed => 2,
        }
    }

    /// Stage displayed at the given column, if any.
    pub fn from_column(column: usize) -> Option<Stage> {
        Stage::ALL.get(column).copied()
    }

    /// Stage one column to the left, saturating at the first column.
    pub fn left(&self) -> Stage {
        Stage::from_column(self.column().saturating_sub(1)).unwrap_or(*self)
    }

    /// Stage one column to the right, saturating at the last column.
    pub fn right(&self) -> Stage {
        Stage::from_column(self.column() + 1).unwrap_or(*self)
    }
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
