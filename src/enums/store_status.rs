use serde::{Deserialize, Serialize};

#[derive(Debug, Deserialize, Serialize, Clone, Copy, Eq, PartialEq, Default)]
#[serde(rename_all = "lowercase")]
pub enum StoreStatus {
    /// Never fetched.
    #[default]
    Idle,
    Loading,
    Ready,
    /// Last fetch failed; the previous snapshot is still readable.
    Error,
}

impl StoreStatus {
    pub fn is_loaded(&self) -> bool {
        !matches!(self, Self::Idle)
    }
}
