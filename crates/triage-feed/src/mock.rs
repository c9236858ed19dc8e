//! Built-in sample reports.

use triage_models::Report;

/// Five sample field reports, newest first.
pub fn mock_reports() -> Vec<Report> {
    vec![
        Report::new("r1", "flood_sector_7.jpg", "2026-02-10 14:23:00", "#"),
        Report::new("r2", "bridge_collapse_A1.jpg", "2026-02-10 13:10:00", "#"),
        Report::new("r3", "road_damage_NH65.jpg", "2026-02-10 11:45:00", "#"),
        Report::new("r4", "power_line_down_S3.jpg", "2026-02-10 10:30:00", "#"),
        Report::new("r5", "building_crack_B12.jpg", "2026-02-10 09:15:00", "#"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_mock_ids_are_unique() {
        let reports = mock_reports();
        let ids: HashSet<_> = reports.iter().map(|r| r.id.clone()).collect();
        assert_eq!(reports.len(), 5);
        assert_eq!(ids.len(), 5);
    }
}
