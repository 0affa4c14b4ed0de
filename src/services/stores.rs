use crate::services::entity_store::EntityStore;
use crate::structs::entity_id::{ProjectId, ScanId};
use crate::structs::project::Project;
use crate::structs::report::Report;
use crate::structs::scan::Scan;

/// The three entity caches of the console.
#[derive(Default)]
pub struct Stores {
    pub projects: EntityStore<Project>,
    pub scans: EntityStore<Scan>,
    pub reports: EntityStore<Report>,
}

impl Stores {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drops the project and everything cached under it. List fetches
    /// already in flight for scans and reports are discarded when they land.
    pub fn evict_project(&self, project_id: &ProjectId) {
        self.projects.remove(project_id);
        self.scans.invalidate_pending();
        self.reports.invalidate_pending();
        let scans = self.scans.remove_where(|scan| &scan.project_id == project_id);
        let reports = self.reports.remove_where(|report| &report.key.project_id == project_id);
        log::debug!("Evicted project {} with {} scans and {} reports", project_id, scans, reports);
    }

    /// Drops the scan and every report derived from it.
    pub fn evict_scan(&self, scan_id: &ScanId) {
        self.scans.remove(scan_id);
        self.scans.invalidate_pending();
        self.reports.invalidate_pending();
        let reports = self.reports.remove_where(|report| &report.key.scan_id == scan_id);
        log::debug!("Evicted scan {} with {} reports", scan_id, reports);
    }

    pub fn project_name(&self, project_id: &ProjectId) -> Option<String> {
        self.projects.get_by_id(project_id).map(|project| project.name)
    }
}
