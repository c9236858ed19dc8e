//! Stage transition rule table.
//!
//! Stages display in a line but are not freely interchangeable: a report
//! must be acknowledged (`in_progress`) before it can be marked done.

use triage_models::Stage;

/// Returns true if a report may move from `from` to `to`.
///
/// | from \ to    | pending | in_progress | completed |
/// |--------------|---------|-------------|-----------|
/// | pending      | yes     | yes         | no        |
/// | in_progress  | yes     | yes         | yes       |
/// | completed    | yes     | yes         | no        |
///
/// Same-stage pairs pass the table; the move operation treats them as a
/// no-op before consulting it.
pub fn can_transition(from: Stage, to: Stage) -> bool {
    match to {
        Stage::Completed => from == Stage::InProgress,
        Stage::Pending | Stage::InProgress => true,
    }
}

/// Stages a report in `from` can be dropped onto, excluding `from` itself.
pub fn allowed_targets(from: Stage) -> Vec<Stage> {
    Stage::ALL
        .into_iter()
        .filter(|&to| to != from && can_transition(from, to))
        .collect()
}
