//! Stage board for field report triage.
//!
//! This crate provides the `StageBoard` for organizing reports into three
//! stages with:
//! - A fixed per-stage partition (`Board`) that never holds a report twice
//! - Reconciliation of fresh report collections without losing local moves
//! - A transition rule table gating which stage changes are allowed
//! - An explicit drag gesture state machine, kept apart from the partition
//!
//! # Example
//!
//! ```
//! use triage_board::{MoveOutcome, StageBoard};
//! use triage_models::{Report, Seed, Stage};
//!
//! let reports = vec![
//!     Report::new("r1", "flood_sector_7.jpg", "2026-02-10 14:23:00", "#"),
//!     Report::new("r2", "bridge_collapse_A1.jpg", "2026-02-10 13:10:00", "#"),
//! ];
//! let mut board = StageBoard::new(Seed::Flat(reports), false);
//!
//! // Acknowledge r1: drag it from pending onto the in-progress column.
//! board.drag_start(Stage::Pending, 0);
//! board.drag_enter(Stage::InProgress);
//! let outcome = board.drop_on(Stage::InProgress);
//!
//! assert!(matches!(outcome, MoveOutcome::Moved { .. }));
//! assert_eq!(board.board().stage(Stage::InProgress)[0].id.as_str(), "r1");
//! ```

pub mod board;
pub mod error;
pub mod gesture;
pub mod moves;
pub mod opener;
pub mod surface;
pub mod transition;

pub use board::Board;
pub use error::MoveRejection;
pub use gesture::Gesture;
pub use moves::{MoveOutcome, MoveRequest};
pub use opener::ReportOpener;
pub use surface::{SeedMode, StageBoard};
pub use transition::{allowed_targets, can_transition};
