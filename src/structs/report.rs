use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::scan_status::ScanStatus;
use crate::enums::severity::Severity;
use crate::structs::report_key::ReportKey;
use crate::structs::sourced::Sourced;

/// Read-only scan result row. Built from a wire record by the report
/// normalizer, which tags every filled-in field as derived.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    pub key: ReportKey,
    pub project_name: Sourced<String>,
    /// `None` when the backend did not classify the scan.
    pub severity: Option<Severity>,
    pub status: Sourced<ScanStatus>,
    pub issues_found: Sourced<u32>,
    pub duration: Option<String>,
    pub created_at: Option<DateTime<Utc>>,
}

impl Report {
    pub fn title(&self) -> String {
        format!("{} - Scan #{}", self.project_name.value, self.key.scan_id)
    }
}
