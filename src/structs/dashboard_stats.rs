use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::severity::Severity;
use crate::structs::project::Project;
use crate::structs::report::Report;
use crate::structs::scan::Scan;

/// Dashboard counters, computed only from cached backend data.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DashboardStats {
    pub total_projects: usize,
    pub total_scans: usize,
    /// Reports classified as critical.
    pub critical_issues: usize,
    /// `None` until a scan with a timestamp is known.
    pub last_scan_at: Option<DateTime<Utc>>,
}

impl DashboardStats {
    pub fn compute(projects: &[Project], scans: &[Scan], reports: &[Report]) -> Self {
        Self {
            total_projects: projects.len(),
            total_scans: scans.len(),
            critical_issues: reports
                .iter()
                .filter(|report| report.severity == Some(Severity::Critical))
                .count(),
            last_scan_at: scans.iter().filter_map(|scan| scan.created_at).max(),
        }
    }
}
