//! StageBoard - the interactive surface over a board.
//!
//! Owns the durable [`Board`] partition and the transient [`Gesture`],
//! and routes drag events, feed arrivals and re-seeds to them. All
//! mutation happens synchronously inside one call, so a move and a
//! reconciliation never interleave.

use std::io;

use tracing::{debug, info};
use triage_models::{Report, ReportId, Seed, Stage};

use crate::board::Board;
use crate::error::MoveRejection;
use crate::gesture::Gesture;
use crate::moves::MoveOutcome;
use crate::opener::ReportOpener;

/// How the current board was seeded.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SeedMode {
    /// Built from a flat collection; later collections are reconciled in.
    Flat,
    /// Built from an authoritative partition; later partitions replace it.
    Partitioned,
}

impl SeedMode {
    fn of(seed: &Seed) -> Self {
        if seed.is_partitioned() {
            SeedMode::Partitioned
        } else {
            SeedMode::Flat
        }
    }
}

/// Interactive stage board.
#[derive(Debug, Clone)]
pub struct StageBoard {
    board: Board,
    gesture: Gesture,
    read_only: bool,
    mode: SeedMode,
    generation: u64,
}

impl StageBoard {
    /// Creates a board from a seed.
    pub fn new(seed: Seed, read_only: bool) -> Self {
        let mode = SeedMode::of(&seed);
        let board = Board::from_seed(seed);
        info!(reports = board.len(), ?mode, read_only, "stage board created");

        Self {
            board,
            gesture: Gesture::Idle,
            read_only,
            mode,
            generation: 0,
        }
    }

    /// The current partition.
    pub fn board(&self) -> &Board {
        &self.board
    }

    /// The gesture in flight.
    pub fn gesture(&self) -> Gesture {
        self.gesture
    }

    /// How the board was last seeded.
    pub fn mode(&self) -> SeedMode {
        self.mode
    }

    /// Number of times the board has been re-seeded.
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Returns true if drag and drop are disabled.
    pub fn is_read_only(&self) -> bool {
        self.read_only
    }

    /// Enables or disables read-only mode. Enabling abandons any drag.
    pub fn set_read_only(&mut self, read_only: bool) {
        self.read_only = read_only;
        if read_only {
            self.gesture.cancel();
        }
    }

    /// Applies a newly arrived collection.
    ///
    /// A flat collection is reconciled: known reports stay where they are and
    /// new ones are appended to `pending`, so a drag in flight keeps a valid
    /// source position. Once the board has been seeded from a partition, flat
    /// collections are ignored; only another partition or a re-seed changes
    /// it. A partitioned collection replaces the board outright and abandons
    /// any drag, since its recorded position no longer refers to the same
    /// report.
    ///
    /// Returns the number of reports added (flat) or the new board size
    /// (partitioned).
    pub fn ingest(&mut self, seed: Seed) -> usize {
        match seed {
            Seed::Flat(reports) if self.mode == SeedMode::Partitioned => {
                debug!(
                    incoming = reports.len(),
                    "ignoring flat collection on partitioned board"
                );
                0
            }
            Seed::Flat(reports) => self.board.reconcile(reports),
            Seed::Partitioned(partition) => {
                self.gesture.cancel();
                self.board = Board::from_partitioned(partition);
                self.mode = SeedMode::Partitioned;
                info!(reports = self.board.len(), "board replaced by partitioned feed");
                self.board.len()
            }
        }
    }

    /// Discards all local state and rebuilds from a fresh seed.
    pub fn reseed(&mut self, seed: Seed) {
        self.gesture.cancel();
        self.mode = SeedMode::of(&seed);
        self.board = Board::from_seed(seed);
        self.generation += 1;
        info!(
            reports = self.board.len(),
            generation = self.generation,
            "stage board re-seeded"
        );
    }

    /// Starts dragging the report shown at `index` in `stage`.
    ///
    /// Returns false (and does nothing) in read-only mode or when no report
    /// is shown there.
    pub fn drag_start(&mut self, stage: Stage, index: usize) -> bool {
        if self.read_only || index >= self.board.stage(stage).len() {
            return false;
        }
        self.gesture.start(stage, index);
        true
    }

    /// Pointer entered a stage's drop surface.
    pub fn drag_enter(&mut self, stage: Stage) {
        if !self.read_only {
            self.gesture.enter(stage);
        }
    }

    /// Pointer left the drop surfaces.
    pub fn drag_leave(&mut self) {
        if !self.read_only {
            self.gesture.leave();
        }
    }

    /// Drops the dragged report on `target` and returns to idle.
    pub fn drop_on(&mut self, target: Stage) -> MoveOutcome {
        if self.read_only {
            self.gesture.cancel();
            return MoveRejection::ReadOnly.into();
        }

        let Some(request) = self.gesture.drop_on(target) else {
            return MoveRejection::NotDragging.into();
        };

        let outcome = self.board.apply_move(request);
        match &outcome {
            MoveOutcome::Moved { id, from, to } => {
                info!(%id, %from, %to, "report moved");
            }
            MoveOutcome::Rejected(reason) => {
                debug!(?request, %reason, "move rejected");
            }
        }
        outcome
    }

    /// Abandons the drag in flight without touching the board.
    pub fn cancel(&mut self) {
        self.gesture.cancel();
    }

    /// The report being dragged, if its source position is still valid.
    pub fn dragged_report(&self) -> Option<&Report> {
        self.gesture
            .source()
            .and_then(|(stage, index)| self.board.stage(stage).get(index))
    }

    /// Hands a report's locator to `opener`. Works in read-only mode too.
    ///
    /// Returns `Ok(false)` if the report is not on the board.
    pub fn open(&self, id: &ReportId, opener: &dyn ReportOpener) -> io::Result<bool> {
        match self.board.get(id) {
            Some(report) => {
                debug!(%id, url = %report.url, "opening report");
                opener.open(report)?;
                Ok(true)
            }
            None => Ok(false),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;
    use triage_models::PartitionedSeed;

    fn report(id: &str) -> Report {
        Report::new(id, format!("{}.jpg", id), "t", format!("http://reports/{}", id))
    }

    fn flat(ids: &[&str]) -> Seed {
        Seed::Flat(ids.iter().map(|id| report(id)).collect())
    }

    fn ids(board: &StageBoard, stage: Stage) -> Vec<String> {
        board
            .board()
            .stage(stage)
            .iter()
            .map(|r| r.id.to_string())
            .collect()
    }

    #[test]
    fn test_full_drag_moves_report() {
        let mut board = StageBoard::new(flat(&["a", "b"]), false);

        assert!(board.drag_start(Stage::Pending, 1));
        board.drag_enter(Stage::InProgress);
        assert_eq!(board.gesture().hover_target(), Some(Stage::InProgress));
        assert_eq!(board.dragged_report().map(|r| r.id.as_str()), Some("b"));

        let outcome = board.drop_on(Stage::InProgress);

        assert!(outcome.is_moved());
        assert!(board.gesture().is_idle());
        assert_eq!(ids(&board, Stage::Pending), vec!["a"]);
        assert_eq!(ids(&board, Stage::InProgress), vec!["b"]);
    }

    #[test]
    fn test_blocked_drop_clears_gesture() {
        let mut board = StageBoard::new(flat(&["a"]), false);
        let before = board.board().clone();

        board.drag_start(Stage::Pending, 0);
        board.drag_enter(Stage::Completed);
        let outcome = board.drop_on(Stage::Completed);

        assert!(!outcome.is_moved());
        assert!(board.gesture().is_idle());
        assert_eq!(board.board(), &before);
    }

    #[test]
    fn test_cancel_leaves_board_untouched() {
        let mut board = StageBoard::new(flat(&["a", "b"]), false);
        let before = board.board().clone();

        board.drag_start(Stage::Pending, 0);
        board.drag_enter(Stage::InProgress);
        board.cancel();

        assert!(board.gesture().is_idle());
        assert_eq!(board.board(), &before);
        assert_eq!(
            board.drop_on(Stage::InProgress).rejection(),
            Some(MoveRejection::NotDragging)
        );
    }

    #[test]
    fn test_drag_start_on_empty_slot_ignored() {
        let mut board = StageBoard::new(flat(&["a"]), false);
        assert!(!board.drag_start(Stage::InProgress, 0));
        assert!(!board.drag_start(Stage::Pending, 1));
        assert!(board.gesture().is_idle());
    }

    #[test]
    fn test_read_only_is_inert() {
        let mut board = StageBoard::new(flat(&["a"]), true);
        let before = board.board().clone();

        assert!(!board.drag_start(Stage::Pending, 0));
        board.drag_enter(Stage::InProgress);
        assert_eq!(board.gesture().hover_target(), None);
        assert_eq!(
            board.drop_on(Stage::InProgress).rejection(),
            Some(MoveRejection::ReadOnly)
        );
        assert_eq!(board.board(), &before);
    }

    #[test]
    fn test_enabling_read_only_cancels_drag() {
        let mut board = StageBoard::new(flat(&["a"]), false);
        board.drag_start(Stage::Pending, 0);
        board.set_read_only(true);
        assert!(board.gesture().is_idle());
    }

    #[test]
    fn test_flat_ingest_keeps_local_moves_and_drag() {
        let mut board = StageBoard::new(flat(&["a", "b"]), false);
        board.drag_start(Stage::Pending, 0);
        board.drag_enter(Stage::InProgress);
        board.drop_on(Stage::InProgress);

        board.drag_start(Stage::Pending, 0);
        let added = board.ingest(flat(&["a", "b", "c"]));

        assert_eq!(added, 1);
        assert_eq!(ids(&board, Stage::Pending), vec!["b", "c"]);
        assert_eq!(ids(&board, Stage::InProgress), vec!["a"]);
        assert_eq!(board.dragged_report().map(|r| r.id.as_str()), Some("b"));
    }

    #[test]
    fn test_partitioned_ingest_replaces_and_cancels_drag() {
        let mut board = StageBoard::new(flat(&["a", "b"]), false);
        board.drag_start(Stage::Pending, 1);

        board.ingest(Seed::Partitioned(PartitionedSeed {
            completed: vec![report("z")],
            ..Default::default()
        }));

        assert_eq!(board.mode(), SeedMode::Partitioned);
        assert!(board.gesture().is_idle());
        assert!(ids(&board, Stage::Pending).is_empty());
        assert_eq!(ids(&board, Stage::Completed), vec!["z"]);
    }

    #[test]
    fn test_flat_ingest_ignored_after_partitioned_seed() {
        let mut board = StageBoard::new(
            Seed::Partitioned(PartitionedSeed {
                in_progress: vec![report("a")],
                ..Default::default()
            }),
            false,
        );
        let before = board.board().clone();

        let added = board.ingest(flat(&["b"]));

        assert_eq!(added, 0);
        assert_eq!(board.mode(), SeedMode::Partitioned);
        assert_eq!(board.board(), &before);
        assert!(ids(&board, Stage::Pending).is_empty());
    }

    #[test]
    fn test_flat_reseed_restores_reconciliation() {
        let mut board = StageBoard::new(
            Seed::Partitioned(PartitionedSeed {
                completed: vec![report("a")],
                ..Default::default()
            }),
            false,
        );

        board.reseed(flat(&["b"]));
        let added = board.ingest(flat(&["b", "c"]));

        assert_eq!(board.mode(), SeedMode::Flat);
        assert_eq!(added, 1);
        assert_eq!(ids(&board, Stage::Pending), vec!["b", "c"]);
    }

    #[test]
    fn test_reseed_discards_local_state() {
        let mut board = StageBoard::new(flat(&["a"]), false);
        board.drag_start(Stage::Pending, 0);
        board.drop_on(Stage::InProgress);

        board.reseed(flat(&["a", "b"]));

        assert_eq!(board.generation(), 1);
        assert_eq!(board.mode(), SeedMode::Flat);
        assert_eq!(ids(&board, Stage::Pending), vec!["a", "b"]);
        assert!(ids(&board, Stage::InProgress).is_empty());
    }

    #[test]
    fn test_open_delegates_locator() {
        let board = StageBoard::new(flat(&["a"]), true);
        let opened = RefCell::new(Vec::new());
        let opener = |r: &Report| -> io::Result<()> {
            opened.borrow_mut().push(r.url.clone());
            Ok(())
        };

        assert!(board.open(&ReportId::from("a"), &opener).unwrap());
        assert!(!board.open(&ReportId::from("missing"), &opener).unwrap());
        assert_eq!(opened.into_inner(), vec!["http://reports/a".to_string()]);
    }
}
