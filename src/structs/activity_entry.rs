use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use crate::enums::scan_status::ScanStatus;
use crate::structs::entity_id::ScanId;

/// One line of the dashboard activity feed.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ActivityEntry {
    pub scan_id: ScanId,
    pub action: String,
    pub project_name: String,
    pub at: Option<DateTime<Utc>>,
}

impl ActivityEntry {
    pub fn action_for(status: ScanStatus) -> &'static str {
        match status {
            ScanStatus::Pending => "Scan queued",
            ScanStatus::Running => "Scan running",
            ScanStatus::Completed => "Scan completed",
            ScanStatus::Failed => "Scan failed",
        }
    }
}
