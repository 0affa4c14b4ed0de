use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::scan_status::ScanStatus;
use crate::enums::severity::Severity;
use crate::structs::entity_id::{ProjectId, ScanId};

/// Report-shaped row as the backend sends it. Every field is optional.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ReportRecord {
    #[serde(default, alias = "id")]
    pub scan_id: Option<ScanId>,
    #[serde(default)]
    pub project_id: Option<ProjectId>,
    #[serde(default)]
    pub project_name: Option<String>,
    #[serde(default)]
    pub severity: Option<Severity>,
    #[serde(default)]
    pub status: Option<ScanStatus>,
    #[serde(default, alias = "issuesCount")]
    pub issues_found: Option<u32>,
    #[serde(default)]
    pub duration: Option<String>,
    #[serde(default, deserialize_with = "crate::helpers::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
}
