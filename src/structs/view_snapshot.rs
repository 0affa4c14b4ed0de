use crate::enums::store_status::StoreStatus;

/// A derived view together with the state of the collection it came from,
/// so "no matches" can be told apart from "not loaded yet".
#[derive(Debug, Clone, PartialEq)]
pub struct ViewSnapshot<T> {
    pub items: Vec<T>,
    pub status: StoreStatus,
    pub version: u64,
    /// The collection is showing a previous snapshot after a failed fetch.
    pub stale: bool,
}

impl<T> ViewSnapshot<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self.status, StoreStatus::Idle | StoreStatus::Loading)
    }

    pub fn is_empty_result(&self) -> bool {
        self.items.is_empty() && !matches!(self.status, StoreStatus::Idle)
    }
}
