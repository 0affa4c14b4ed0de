use serde::{Deserialize, Serialize};
use crate::enums::scan_status::ScanStatus;
use crate::enums::severity::Severity;
use crate::structs::report::Report;

/// Summary cards above the report list.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportStats {
    pub total: usize,
    pub critical: usize,
    pub completed: usize,
    pub running: usize,
    pub failed: usize,
}

impl ReportStats {
    pub fn from_reports(reports: &[Report]) -> Self {
        reports.iter().fold(Self::default(), |mut stats, report| {
            stats.total += 1;
            if report.severity == Some(Severity::Critical) {
                stats.critical += 1;
            }
            match report.status.value {
                ScanStatus::Completed => stats.completed += 1,
                ScanStatus::Running => stats.running += 1,
                ScanStatus::Failed => stats.failed += 1,
                ScanStatus::Pending => {}
            }
            stats
        })
    }
}
