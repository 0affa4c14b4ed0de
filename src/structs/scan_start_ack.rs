use serde::{Deserialize, Serialize};
use crate::structs::entity_id::ScanId;

/// Acknowledgment returned by `POST /api/scan/start`. The backend may
/// answer with an empty or plain-text body, so both fields are optional.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScanStartAck {
    #[serde(default, alias = "id")]
    pub scan_id: Option<ScanId>,
    #[serde(default)]
    pub message: Option<String>,
}
