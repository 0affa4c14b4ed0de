use std::sync::Arc;
use crate::enums::store_status::StoreStatus;
use crate::errors::ApiError;

/// Consistent read of one collection: records and status from the same
/// version.
#[derive(Debug, Clone)]
pub struct StoreSnapshot<T> {
    pub records: Arc<Vec<T>>,
    pub status: StoreStatus,
    pub version: u64,
    pub last_error: Option<ApiError>,
}
