use serde::{Deserialize, Serialize};
use crate::enums::scan_type::ScanType;
use crate::structs::entity_id::ProjectId;

/// Body of `POST /api/scans`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanRequest {
    pub project_id: ProjectId,
    pub source_dir: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub rules_dir: Option<String>,
    pub scan_type: ScanType,
}

impl ScanRequest {
    pub fn new(project_id: ProjectId, source_dir: &str, rules_dir: Option<&str>, scan_type: ScanType) -> Self {
        Self {
            project_id,
            source_dir: source_dir.to_string(),
            rules_dir: rules_dir.map(ToString::to_string),
            scan_type,
        }
    }
}
