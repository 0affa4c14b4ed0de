use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq)]
#[serde(rename_all = "snake_case")]
pub enum ChangeReason {
    FetchStarted,
    Replaced,
    FetchFailed,
    Upserted,
    Removed,
}
