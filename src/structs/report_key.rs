use std::fmt;
use serde::{Deserialize, Serialize};
use crate::structs::entity_id::{ProjectId, ScanId};

/// Composite identity of a report.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct ReportKey {
    pub scan_id: ScanId,
    pub project_id: ProjectId,
}

impl ReportKey {
    pub fn new(scan_id: ScanId, project_id: ProjectId) -> Self {
        Self { scan_id, project_id }
    }
}

impl fmt::Display for ReportKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}-{}", self.scan_id, self.project_id)
    }
}
