//! Seeds a board can be built from.

use serde::{Deserialize, Serialize};

use crate::report::Report;
use crate::stage::Stage;

/// Pre-partitioned reports, one ordered sequence per stage.
///
/// Any stage missing from the input defaults to an empty sequence.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PartitionedSeed {
    /// Reports waiting for acknowledgement.
    #[serde(default)]
    pub pending: Vec<Report>,
    /// Acknowledged reports.
    #[serde(default)]
    pub in_progress: Vec<Report>,
    /// Handled reports.
    #[serde(default)]
    pub completed: Vec<Report>,
}

impl PartitionedSeed {
    /// Returns the reports given for a stage.
    pub fn stage(&self, stage: Stage) -> &[Report] {
        match stage {
            Stage::Pending => &self.pending,
            Stage::InProgress => &self.in_progress,
            Stage::Completed => &self.completed,
        }
    }

    /// Total number of reports across all stages.
    pub fn len(&self) -> usize {
        self.pending.len() + self.in_progress.len() + self.completed.len()
    }

    /// Returns true if no stage has any report.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Inbound report collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Seed {
    /// Flat ordered sequence; every report starts in `pending`.
    Flat(Vec<Report>),
    /// Authoritative per-stage partition.
    Partitioned(PartitionedSeed),
}

impl Seed {
    /// Returns true for the partitioned variant.
    pub fn is_partitioned(&self) -> bool {
        matches!(self, Seed::Partitioned(_))
    }

    /// Number of reports carried by the seed.
    pub fn len(&self) -> usize {
        match self {
            Seed::Flat(reports) => reports.len(),
            Seed::Partitioned(seed) => seed.len(),
        }
    }

    /// Returns true if the seed carries no reports.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for Seed {
    fn default() -> Self {
        Seed::Flat(Vec::new())
    }
}

impl From<Vec<Report>> for Seed {
    fn from(reports: Vec<Report>) -> Self {
        Seed::Flat(reports)
    }
}

impl From<PartitionedSeed> for Seed {
    fn from(seed: PartitionedSeed) -> Self {
        Seed::Partitioned(seed)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_stages_default_to_empty() {
        let json = r##"{"in_progress":[{"id":"r1","image_name":"a","timestamp":"t","report_url":"#"}]}"##;
        let seed: PartitionedSeed = serde_json::from_str(json).unwrap();

        assert!(seed.pending.is_empty());
        assert_eq!(seed.in_progress.len(), 1);
        assert!(seed.completed.is_empty());
        assert_eq!(seed.len(), 1);
    }

    #[test]
    fn test_empty_object_is_empty_seed() {
        let seed: PartitionedSeed = serde_json::from_str("{}").unwrap();
        assert!(seed.is_empty());
    }

    #[test]
    fn test_stage_accessor() {
        let seed = PartitionedSeed {
            completed: vec![Report::new("r9", "a", "t", "#")],
            ..Default::default()
        };
        assert_eq!(seed.stage(Stage::Completed).len(), 1);
        assert!(seed.stage(Stage::Pending).is_empty());
    }

    #[test]
    fn test_seed_variants() {
        let flat = Seed::from(vec![Report::new("r1", "a", "t", "#")]);
        assert!(!flat.is_partitioned());
        assert_eq!(flat.len(), 1);

        let partitioned = Seed::from(PartitionedSeed::default());
        assert!(partitioned.is_partitioned());
        assert!(partitioned.is_empty());
        assert!(Seed::default().is_empty());
    }
}
