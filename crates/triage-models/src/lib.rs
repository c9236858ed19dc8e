//! Core data models for the triage board.
//!
//! This crate provides the fundamental data types shared by the board,
//! the feed loader and the terminal interface: reports, stages and the
//! two seed shapes a board can be built from.

pub mod ids;
pub mod report;
pub mod seed;
pub mod stage;

// Re-export main types
pub use ids::ReportId;
pub use report::{LegacyReport, Report, ESCALATION_THRESHOLD};
pub use seed::{PartitionedSeed, Seed};
pub use stage::Stage;
