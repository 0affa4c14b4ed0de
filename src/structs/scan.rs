use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::scan_status::ScanStatus;
use crate::enums::scan_type::ScanType;
use crate::structs::entity_id::{ProjectId, ScanId};

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Scan {
    #[serde(rename = "scanId", alias = "id")]
    pub id: ScanId,
    pub project_id: ProjectId,
    #[serde(default)]
    pub source_dir: Option<String>,
    #[serde(default)]
    pub rules_dir: Option<String>,
    #[serde(default)]
    pub scan_type: ScanType,
    #[serde(default)]
    pub status: ScanStatus,
    #[serde(default, deserialize_with = "crate::helpers::timestamp::lenient")]
    pub created_at: Option<DateTime<Utc>>,
    /// Present once the backend has finished the scan.
    #[serde(default)]
    pub issues_count: Option<u32>,
}
