use std::sync::Arc;
use std::time::Instant;
use dashmap::mapref::entry::Entry;
use dashmap::DashMap;
use crate::errors::{ConsoleError, ConsoleResult};

/// Keys of mutations currently waiting on the backend.
#[derive(Clone, Default)]
pub struct InFlightRegistry {
    pending: Arc<DashMap<String, Instant>>,
}

impl InFlightRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Claims `key` for the lifetime of the returned guard. Fails with
    /// `InFlight` when the key is already held.
    pub fn claim(&self, key: String) -> ConsoleResult<InFlightGuard> {
        match self.pending.entry(key) {
            Entry::Occupied(entry) => {
                log::warn!(
                    "Suppressing duplicate request '{}' (pending for {:?})",
                    entry.key(),
                    entry.get().elapsed()
                );
                Err(ConsoleError::in_flight(entry.key()))
            }
            Entry::Vacant(entry) => {
                let key = entry.key().clone();
                entry.insert(Instant::now());
                Ok(InFlightGuard {
                    pending: Arc::clone(&self.pending),
                    key,
                })
            }
        }
    }

    pub fn is_pending(&self, key: &str) -> bool {
        self.pending.contains_key(key)
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }
}

/// Releases its key when dropped, whatever the outcome of the request.
pub struct InFlightGuard {
    pending: Arc<DashMap<String, Instant>>,
    key: String,
}

impl InFlightGuard {
    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Drop for InFlightGuard {
    fn drop(&mut self) {
        self.pending.remove(&self.key);
    }
}

pub fn create_project_key(name: &str) -> String {
    format!("project:create:{}", name.trim().to_lowercase())
}

pub fn delete_project_key(project_id: &str) -> String {
    format!("project:delete:{}", project_id)
}

pub fn trigger_scan_key(project_id: &str) -> String {
    format!("scan:trigger:{}", project_id)
}

pub fn delete_scan_key(scan_id: &str) -> String {
    format!("scan:delete:{}", scan_id)
}

pub fn upload_scan_key(project_id: &str) -> String {
    format!("scan:upload:{}", project_id)
}
