//! Move requests and their outcomes.

use triage_models::{ReportId, Stage};

use crate::error::MoveRejection;

/// A request to relocate one report, produced when a drag is dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MoveRequest {
    /// Stage the drag started in.
    pub source: Stage,
    /// Position within `source` when the drag started.
    pub index: usize,
    /// Stage the report was dropped on.
    pub target: Stage,
}

impl MoveRequest {
    /// Creates a new move request.
    pub fn new(source: Stage, index: usize, target: Stage) -> Self {
        Self {
            source,
            index,
            target,
        }
    }
}

/// Result of applying a [`MoveRequest`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MoveOutcome {
    /// The report left `from` and was appended to `to`.
    Moved {
        /// The report that moved.
        id: ReportId,
        /// Stage it left.
        from: Stage,
        /// Stage it joined.
        to: Stage,
    },
    /// Nothing changed.
    Rejected(MoveRejection),
}

impl MoveOutcome {
    /// Returns true if the board changed.
    pub fn is_moved(&self) -> bool {
        matches!(self, MoveOutcome::Moved { .. })
    }

    /// Returns the rejection reason, if the move was refused.
    pub fn rejection(&self) -> Option<MoveRejection> {
        match self {
            MoveOutcome::Rejected(reason) => Some(*reason),
            MoveOutcome::Moved { .. } => None,
        }
    }
}

impl From<MoveRejection> for MoveOutcome {
    fn from(reason: MoveRejection) -> Self {
        MoveOutcome::Rejected(reason)
    }
}
