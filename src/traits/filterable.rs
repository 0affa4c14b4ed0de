use chrono::{DateTime, Utc};
use crate::enums::scan_status::ScanStatus;
use crate::enums::severity::Severity;
use crate::structs::entity_id::{ProjectId, ScanId};
use crate::structs::project::Project;
use crate::structs::report::Report;
use crate::structs::scan::Scan;

/// Attributes the view filter engine can match on. Attributes a record
/// does not have return `None` and never satisfy a specific filter.
pub trait Filterable {
    fn display_name(&self) -> &str;

    fn id_text(&self) -> &str;

    fn status(&self) -> Option<ScanStatus> {
        None
    }

    fn severity(&self) -> Option<Severity> {
        None
    }

    fn scan_id(&self) -> Option<&ScanId> {
        None
    }

    fn project_id(&self) -> Option<&ProjectId> {
        None
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        None
    }
}

impl Filterable for Project {
    fn display_name(&self) -> &str {
        &self.name
    }

    fn id_text(&self) -> &str {
        self.id.as_str()
    }

    fn project_id(&self) -> Option<&ProjectId> {
        Some(&self.id)
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Filterable for Scan {
    fn display_name(&self) -> &str {
        self.source_dir.as_deref().unwrap_or_default()
    }

    fn id_text(&self) -> &str {
        self.id.as_str()
    }

    fn status(&self) -> Option<ScanStatus> {
        Some(self.status)
    }

    fn scan_id(&self) -> Option<&ScanId> {
        Some(&self.id)
    }

    fn project_id(&self) -> Option<&ProjectId> {
        Some(&self.project_id)
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}

impl Filterable for Report {
    fn display_name(&self) -> &str {
        &self.project_name.value
    }

    fn id_text(&self) -> &str {
        self.key.scan_id.as_str()
    }

    fn status(&self) -> Option<ScanStatus> {
        Some(self.status.value)
    }

    fn severity(&self) -> Option<Severity> {
        self.severity
    }

    fn scan_id(&self) -> Option<&ScanId> {
        Some(&self.key.scan_id)
    }

    fn project_id(&self) -> Option<&ProjectId> {
        Some(&self.key.project_id)
    }

    fn created_at(&self) -> Option<DateTime<Utc>> {
        self.created_at
    }
}
