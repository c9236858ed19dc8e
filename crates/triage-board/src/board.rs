//! Board - the durable partition of reports into stages.
//!
//! A `Board` is a fixed record with one ordered sequence per stage. Every
//! report it holds appears in exactly one stage, exactly once. The only
//! writers are seeding, [`Board::reconcile`] and [`Board::apply_move`].

use std::collections::HashSet;

use tracing::{debug, warn};
use triage_models::{PartitionedSeed, Report, ReportId, Seed, Stage};

use crate::error::MoveRejection;
use crate::moves::{MoveOutcome, MoveRequest};
use crate::transition::can_transition;

/// Partition of reports into the three stages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Board {
    pending: Vec<Report>,
    in_progress: Vec<Report>,
    completed: Vec<Report>,
}

impl Board {
    /// Creates an empty board.
    pub fn new() -> Self {
        Self::default()
    }

    /// Seeds a board from a flat collection; every report starts in `pending`.
    pub fn from_reports(reports: Vec<Report>) -> Self {
        let mut board = Self::new();
        board.reconcile(reports);
        board
    }

    /// Seeds a board from an explicit per-stage partition.
    ///
    /// If the same identifier is listed more than once, only the first
    /// occurrence in display order is kept.
    pub fn from_partitioned(seed: PartitionedSeed) -> Self {
        let PartitionedSeed {
            pending,
            in_progress,
            completed,
        } = seed;

        let mut seen = HashSet::new();
        let mut keep = |stage: Stage, reports: Vec<Report>| -> Vec<Report> {
            reports
                .into_iter()
                .filter(|r| {
                    let fresh = seen.insert(r.id.clone());
                    if !fresh {
                        warn!(id = %r.id, %stage, "dropping duplicate report from partitioned seed");
                    }
                    fresh
                })
                .collect()
        };

        let pending = keep(Stage::Pending, pending);
        let in_progress = keep(Stage::InProgress, in_progress);
        let completed = keep(Stage::Completed, completed);

        Self {
            pending,
            in_progress,
            completed,
        }
    }

    /// Seeds a board from either seed shape.
    pub fn from_seed(seed: Seed) -> Self {
        match seed {
            Seed::Flat(reports) => Self::from_reports(reports),
            Seed::Partitioned(seed) => Self::from_partitioned(seed),
        }
    }

    /// Returns the ordered reports in a stage.
    pub fn stage(&self, stage: Stage) -> &[Report] {
        match stage {
            Stage::Pending => &self.pending,
            Stage::InProgress => &self.in_progress,
            Stage::Completed => &self.completed,
        }
    }

    fn stage_mut(&mut self, stage: Stage) -> &mut Vec<Report> {
        match stage {
            Stage::Pending => &mut self.pending,
            Stage::InProgress => &mut self.in_progress,
            Stage::Completed => &mut self.completed,
        }
    }

    /// Iterates over all reports in display order, paired with their stage.
    pub fn iter(&self) -> impl Iterator<Item = (Stage, &Report)> {
        Stage::ALL
            .into_iter()
            .flat_map(move |stage| self.stage(stage).iter().map(move |r| (stage, r)))
    }

    /// Total number of reports on the board.
    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    /// Returns true if no stage holds a report.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns the identifiers of every report on the board.
    pub fn ids(&self) -> HashSet<ReportId> {
        self.iter().map(|(_, r)| r.id.clone()).collect()
    }

    /// Returns true if a report with this identifier is on the board.
    pub fn contains(&self, id: &ReportId) -> bool {
        self.position(id).is_some()
    }

    /// Locates a report by identifier.
    pub fn position(&self, id: &ReportId) -> Option<(Stage, usize)> {
        Stage::ALL.into_iter().find_map(|stage| {
            self.stage(stage)
                .iter()
                .position(|r| &r.id == id)
                .map(|index| (stage, index))
        })
    }

    /// Looks up a report by identifier.
    pub fn get(&self, id: &ReportId) -> Option<&Report> {
        self.position(id)
            .and_then(|(stage, index)| self.stage(stage).get(index))
    }

    /// Merges a freshly arrived collection into the board.
    ///
    /// Reports whose identifier is already on the board are ignored, wherever
    /// they sit and whatever their content. The rest are appended to `pending`
    /// in incoming order. Returns the number of reports added.
    pub fn reconcile(&mut self, incoming: impl IntoIterator<Item = Report>) -> usize {
        let mut known = self.ids();
        let before = self.pending.len();

        self.pending
            .extend(incoming.into_iter().filter(|r| known.insert(r.id.clone())));

        let added = self.pending.len() - before;
        debug!(added, total = self.len(), "reconciled report collection");
        added
    }

    /// Removes the report at `index` in `stage`, if there is one.
    fn take(&mut self, stage: Stage, index: usize) -> Option<Report> {
        let reports = self.stage_mut(stage);
        if index < reports.len() {
            Some(reports.remove(index))
        } else {
            None
        }
    }

    /// Applies a gated move.
    ///
    /// Same-stage requests, transitions refused by [`can_transition`], and
    /// stale source positions all leave the board untouched.
    pub fn apply_move(&mut self, request: MoveRequest) -> MoveOutcome {
        let MoveRequest {
            source,
            index,
            target,
        } = request;

        if source == target {
            return MoveRejection::SameStage(source).into();
        }

        if !can_transition(source, target) {
            return MoveRejection::TransitionBlocked {
                from: source,
                to: target,
            }
            .into();
        }

        let Some(report) = self.take(source, index) else {
            return MoveRejection::StaleSource {
                stage: source,
                index,
                len: self.stage(source).len(),
            }
            .into();
        };

        let id = report.id.clone();
        self.stage_mut(target).push(report);

        MoveOutcome::Moved {
            id,
            from: source,
            to: target,
        }
    }

    /// Snapshot of the board in the partitioned seed shape.
    pub fn to_partitioned(&self) -> PartitionedSeed {
        PartitionedSeed {
            pending: self.pending.clone(),
            in_progress: self.in_progress.clone(),
            completed: self.completed.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn report(id: &str) -> Report {
        Report::new(id, format!("{}.jpg", id), "2026-02-10 14:23:00", "#")
    }

    fn ids(board: &Board, stage: Stage) -> Vec<&str> {
        board.stage(stage).iter().map(|r| r.id.as_str()).collect()
    }

    fn board_with(pending: &[&str], in_progress: &[&str], completed: &[&str]) -> Board {
        Board::from_partitioned(PartitionedSeed {
            pending: pending.iter().map(|id| report(id)).collect(),
            in_progress: in_progress.iter().map(|id| report(id)).collect(),
            completed: completed.iter().map(|id| report(id)).collect(),
        })
    }

    #[test]
    fn test_flat_seed_starts_in_pending() {
        let board = Board::from_reports(vec![report("a"), report("b")]);

        assert_eq!(ids(&board, Stage::Pending), vec!["a", "b"]);
        assert!(board.stage(Stage::InProgress).is_empty());
        assert!(board.stage(Stage::Completed).is_empty());
    }

    #[test]
    fn test_flat_seed_drops_duplicates() {
        let board = Board::from_reports(vec![report("a"), report("b"), report("a")]);
        assert_eq!(ids(&board, Stage::Pending), vec!["a", "b"]);
    }

    #[test]
    fn test_partitioned_seed_keeps_stages() {
        let board = board_with(&["a"], &["b", "c"], &[]);

        assert_eq!(ids(&board, Stage::Pending), vec!["a"]);
        assert_eq!(ids(&board, Stage::InProgress), vec!["b", "c"]);
        assert!(board.stage(Stage::Completed).is_empty());
    }

    #[test]
    fn test_partitioned_seed_first_occurrence_wins() {
        let board = board_with(&["a"], &["a", "b"], &["b"]);

        assert_eq!(ids(&board, Stage::Pending), vec!["a"]);
        assert_eq!(ids(&board, Stage::InProgress), vec!["b"]);
        assert!(board.stage(Stage::Completed).is_empty());
    }

    #[test]
    fn test_reconcile_appends_only_new_to_pending() {
        let mut board = board_with(&["a"], &["b"], &[]);

        let added = board.reconcile(vec![report("a"), report("b"), report("c")]);

        assert_eq!(added, 1);
        assert_eq!(ids(&board, Stage::Pending), vec!["a", "c"]);
        assert_eq!(ids(&board, Stage::InProgress), vec!["b"]);
        assert!(board.stage(Stage::Completed).is_empty());
    }

    #[test]
    fn test_reconcile_is_idempotent() {
        let mut board = board_with(&["a", "d"], &["b"], &["c"]);
        let before = board.clone();

        let added = board.reconcile(vec![report("c"), report("b"), report("a")]);

        assert_eq!(added, 0);
        assert_eq!(board, before);
    }

    #[test]
    fn test_reconcile_ignores_changed_content() {
        let mut board = board_with(&["a"], &[], &[]);

        board.reconcile(vec![report("a").with_weight(50)]);

        assert_eq!(board.stage(Stage::Pending)[0].weight, None);
    }

    #[test]
    fn test_reconcile_preserves_incoming_order() {
        let mut board = board_with(&["x"], &[], &[]);
        board.reconcile(vec![report("c"), report("a"), report("b")]);
        assert_eq!(ids(&board, Stage::Pending), vec!["x", "c", "a", "b"]);
    }

    #[test]
    fn test_move_pending_to_completed_blocked() {
        let mut board = board_with(&["r"], &[], &[]);
        let before = board.clone();

        let outcome = board.apply_move(MoveRequest::new(Stage::Pending, 0, Stage::Completed));

        assert_eq!(
            outcome.rejection(),
            Some(MoveRejection::TransitionBlocked {
                from: Stage::Pending,
                to: Stage::Completed
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_in_progress_to_completed_appends() {
        let mut board = board_with(&[], &["r", "s"], &["done"]);

        let outcome = board.apply_move(MoveRequest::new(Stage::InProgress, 0, Stage::Completed));

        assert!(outcome.is_moved());
        assert_eq!(ids(&board, Stage::InProgress), vec!["s"]);
        assert_eq!(ids(&board, Stage::Completed), vec!["done", "r"]);
    }

    #[test]
    fn test_move_shifts_later_entries() {
        let mut board = board_with(&["a", "b", "c"], &[], &[]);

        board.apply_move(MoveRequest::new(Stage::Pending, 1, Stage::InProgress));

        assert_eq!(ids(&board, Stage::Pending), vec!["a", "c"]);
        assert_eq!(board.position(&ReportId::from("c")), Some((Stage::Pending, 1)));
    }

    #[test]
    fn test_move_same_stage_noop() {
        let mut board = board_with(&["a", "b"], &[], &[]);
        let before = board.clone();

        let outcome = board.apply_move(MoveRequest::new(Stage::Pending, 0, Stage::Pending));

        assert_eq!(outcome.rejection(), Some(MoveRejection::SameStage(Stage::Pending)));
        assert_eq!(board, before);
    }

    #[test]
    fn test_move_stale_index_noop() {
        let mut board = board_with(&[], &["a"], &[]);
        let before = board.clone();

        let outcome = board.apply_move(MoveRequest::new(Stage::InProgress, 3, Stage::Pending));

        assert_eq!(
            outcome.rejection(),
            Some(MoveRejection::StaleSource {
                stage: Stage::InProgress,
                index: 3,
                len: 1
            })
        );
        assert_eq!(board, before);
    }

    #[test]
    fn test_completed_can_be_reopened() {
        let mut board = board_with(&[], &[], &["a"]);

        let outcome = board.apply_move(MoveRequest::new(Stage::Completed, 0, Stage::Pending));

        assert!(outcome.is_moved());
        assert_eq!(ids(&board, Stage::Pending), vec!["a"]);
    }

    #[test]
    fn test_lookup_helpers() {
        let board = board_with(&["a"], &["b"], &["c"]);

        assert_eq!(board.len(), 3);
        assert!(board.contains(&ReportId::from("b")));
        assert!(!board.contains(&ReportId::from("z")));
        assert_eq!(board.position(&ReportId::from("c")), Some((Stage::Completed, 0)));
        assert_eq!(board.get(&ReportId::from("a")).map(|r| r.label.as_str()), Some("a.jpg"));
    }

    #[test]
    fn test_iter_display_order() {
        let board = board_with(&["a"], &["b"], &["c"]);
        let order: Vec<(Stage, &str)> = board.iter().map(|(s, r)| (s, r.id.as_str())).collect();

        assert_eq!(
            order,
            vec![
                (Stage::Pending, "a"),
                (Stage::InProgress, "b"),
                (Stage::Completed, "c")
            ]
        );
    }

    #[test]
    fn test_to_partitioned_roundtrip() {
        let board = board_with(&["a"], &["b"], &["c"]);
        assert_eq!(Board::from_partitioned(board.to_partitioned()), board);
    }
}
