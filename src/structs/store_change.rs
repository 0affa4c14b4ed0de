use serde::{Deserialize, Serialize};
use crate::enums::change_reason::ChangeReason;
use crate::enums::entity_kind::EntityKind;
use crate::enums::store_status::StoreStatus;

/// Broadcast to store subscribers after every change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct StoreChange {
    pub kind: EntityKind,
    pub version: u64,
    pub status: StoreStatus,
    pub reason: ChangeReason,
}
