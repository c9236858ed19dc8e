//! Reasons a move request can be refused.

use thiserror::Error;
use triage_models::Stage;

/// Why a drop did not move anything.
///
/// These are policy outcomes, not faults. They are logged and otherwise
/// invisible to the operator: nothing moves on screen.
#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveRejection {
    /// Source and target are the same stage.
    #[error("report is already in {0}")]
    SameStage(Stage),

    /// The transition rule table forbids this stage change.
    #[error("transition from {from} to {to} is not allowed")]
    TransitionBlocked {
        /// Stage the report would leave.
        from: Stage,
        /// Stage the report would enter.
        to: Stage,
    },

    /// The recorded source position no longer holds a report.
    #[error("no report at {stage}[{index}] (stage holds {len})")]
    StaleSource {
        /// Recorded source stage.
        stage: Stage,
        /// Recorded source position.
        index: usize,
        /// Current length of the source stage.
        len: usize,
    },

    /// The board is read-only.
    #[error("board is read-only")]
    ReadOnly,

    /// A drop arrived with no drag in flight.
    #[error("no drag in progress")]
    NotDragging,
}
