use std::collections::{HashMap, HashSet};
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{Arc, PoisonError, RwLock, RwLockWriteGuard};
use tokio::sync::broadcast;
use crate::config::constants::STORE_EVENT_CAPACITY;
use crate::enums::change_reason::ChangeReason;
use crate::enums::fetch_outcome::FetchOutcome;
use crate::enums::store_status::StoreStatus;
use crate::errors::{ApiError, ApiResult};
use crate::structs::fetch_ticket::FetchTicket;
use crate::structs::store_change::StoreChange;
use crate::structs::store_snapshot::StoreSnapshot;
use crate::traits::entity::Entity;

struct StoreState<T> {
    records: Arc<Vec<T>>,
    status: StoreStatus,
    last_error: Option<ApiError>,
    last_applied_seq: u64,
    last_success_seq: u64,
    version: u64,
}

/// In-memory cache for one entity kind.
///
/// The collection lives in a single `Arc<Vec<T>>` that writers swap under
/// the store's write lock, so readers always see either the old or the new
/// collection. Keys are unique within the collection.
pub struct EntityStore<T: Entity> {
    state: RwLock<StoreState<T>>,
    next_seq: AtomicU64,
    events: broadcast::Sender<StoreChange>,
}

impl<T: Entity> Default for EntityStore<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T: Entity> EntityStore<T> {
    pub fn new() -> Self {
        let (events, _) = broadcast::channel(STORE_EVENT_CAPACITY);
        Self {
            state: RwLock::new(StoreState {
                records: Arc::new(Vec::new()),
                status: StoreStatus::Idle,
                last_error: None,
                last_applied_seq: 0,
                last_success_seq: 0,
                version: 0,
            }),
            next_seq: AtomicU64::new(0),
            events,
        }
    }

    pub fn get_all(&self) -> Arc<Vec<T>> {
        Arc::clone(&self.read().records)
    }

    pub fn get_by_id(&self, key: &T::Key) -> Option<T> {
        self.read().records.iter().find(|record| &record.key() == key).cloned()
    }

    pub fn contains(&self, key: &T::Key) -> bool {
        self.read().records.iter().any(|record| &record.key() == key)
    }

    pub fn len(&self) -> usize {
        self.read().records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.read().records.is_empty()
    }

    pub fn status(&self) -> StoreStatus {
        self.read().status
    }

    pub fn last_error(&self) -> Option<ApiError> {
        self.read().last_error.clone()
    }

    pub fn version(&self) -> u64 {
        self.read().version
    }

    pub fn snapshot(&self) -> StoreSnapshot<T> {
        let state = self.read();
        StoreSnapshot {
            records: Arc::clone(&state.records),
            status: state.status,
            version: state.version,
            last_error: state.last_error.clone(),
        }
    }

    pub fn subscribe(&self) -> broadcast::Receiver<StoreChange> {
        self.events.subscribe()
    }

    /// Replaces the whole collection and marks it ready.
    pub fn replace_all(&self, records: Vec<T>) {
        let mut state = self.write();
        state.records = Arc::new(Self::dedupe(records));
        state.status = StoreStatus::Ready;
        state.last_error = None;
        self.commit(state, ChangeReason::Replaced);
    }

    /// Inserts the record, or replaces the one with the same key in place.
    pub fn upsert(&self, record: T) {
        let mut state = self.write();
        let key = record.key();
        let mut records = state.records.as_ref().clone();
        match records.iter().position(|existing| existing.key() == key) {
            Some(index) => records[index] = record,
            None => records.push(record),
        }
        state.records = Arc::new(records);
        self.commit(state, ChangeReason::Upserted);
    }

    pub fn remove(&self, key: &T::Key) -> Option<T> {
        let mut state = self.write();
        let index = state.records.iter().position(|record| &record.key() == key)?;
        let mut records = state.records.as_ref().clone();
        let removed = records.remove(index);
        state.records = Arc::new(records);
        self.commit(state, ChangeReason::Removed);
        Some(removed)
    }

    /// Removes every record matching `predicate`, returning how many went.
    pub fn remove_where<F>(&self, predicate: F) -> usize
    where
        F: Fn(&T) -> bool,
    {
        let mut state = self.write();
        let before = state.records.len();
        let kept: Vec<T> = state.records.iter().filter(|record| !predicate(record)).cloned().collect();
        let removed = before - kept.len();
        if removed > 0 {
            state.records = Arc::new(kept);
            self.commit(state, ChangeReason::Removed);
        }
        removed
    }

    /// Starts a list fetch. Results must come back through `apply_fetch`
    /// or `apply_scoped_fetch` with the returned ticket.
    pub fn begin_fetch(&self) -> FetchTicket {
        let seq = self.next_seq.fetch_add(1, Ordering::SeqCst) + 1;
        let mut state = self.write();
        state.status = StoreStatus::Loading;
        self.commit(state, ChangeReason::FetchStarted);
        log::debug!("Fetching {} (#{})", T::KIND, seq);
        FetchTicket { kind: T::KIND, seq }
    }

    /// Applies a full-collection fetch result. Results older than the last
    /// applied one are discarded; failures keep the previous records.
    pub fn apply_fetch(&self, ticket: FetchTicket, result: ApiResult<Vec<T>>) -> FetchOutcome {
        self.apply_with(ticket, result, |_, fetched| fetched)
    }

    /// Like `apply_fetch`, but only the records matching `in_scope` are
    /// replaced; everything else stays as it is.
    pub fn apply_scoped_fetch<F>(&self, ticket: FetchTicket, in_scope: F, result: ApiResult<Vec<T>>) -> FetchOutcome
    where
        F: Fn(&T) -> bool,
    {
        self.apply_with(ticket, result, |current, fetched| {
            let fetched_keys: HashSet<T::Key> = fetched.iter().map(|record| record.key()).collect();
            current
                .iter()
                .filter(|record| !in_scope(record) && !fetched_keys.contains(&record.key()))
                .cloned()
                .chain(fetched)
                .collect()
        })
    }

    /// Makes every fetch issued so far stale. Used after a local eviction
    /// so a list answered before the backend confirmed the deletion cannot
    /// bring the evicted records back.
    pub fn invalidate_pending(&self) {
        let issued = self.next_seq.load(Ordering::SeqCst);
        let mut state = self.write();
        if issued > state.last_applied_seq {
            log::debug!("Invalidating {} fetches up to #{}", T::KIND, issued);
            state.last_applied_seq = issued;
            state.last_success_seq = issued;
        }
    }

    /// Newest ticket wins. An older success is still applied when every
    /// newer fetch failed; the store then stays in `Error`.
    fn apply_with<F>(&self, ticket: FetchTicket, result: ApiResult<Vec<T>>, merge: F) -> FetchOutcome
    where
        F: FnOnce(&[T], Vec<T>) -> Vec<T>,
    {
        let mut state = self.write();
        let newest = ticket.seq > state.last_applied_seq;
        let recovers = !newest && result.is_ok() && ticket.seq > state.last_success_seq;
        if !newest && !recovers {
            log::warn!(
                "Discarding stale {} fetch #{} (already applied #{})",
                T::KIND, ticket.seq, state.last_applied_seq
            );
            return FetchOutcome::Discarded;
        }
        if newest {
            state.last_applied_seq = ticket.seq;
        }

        match result {
            Ok(fetched) => {
                let merged = merge(state.records.as_slice(), fetched);
                state.records = Arc::new(Self::dedupe(merged));
                state.last_success_seq = ticket.seq;
                if newest {
                    state.status = StoreStatus::Ready;
                    state.last_error = None;
                } else {
                    log::warn!("Applied older {} fetch #{} after a newer one failed", T::KIND, ticket.seq);
                }
                log::debug!("Applied {} fetch #{} ({} records)", T::KIND, ticket.seq, state.records.len());
                self.commit(state, ChangeReason::Replaced);
                FetchOutcome::Applied
            }
            Err(error) => {
                log::warn!("Fetching {} failed, keeping {} cached records: {}", T::KIND, state.records.len(), error);
                state.status = StoreStatus::Error;
                state.last_error = Some(error);
                self.commit(state, ChangeReason::FetchFailed);
                FetchOutcome::Failed
            }
        }
    }

    /// Keeps the first position of a duplicated key and the last value.
    fn dedupe(records: Vec<T>) -> Vec<T> {
        let mut positions: HashMap<T::Key, usize> = HashMap::with_capacity(records.len());
        let mut unique: Vec<T> = Vec::with_capacity(records.len());
        for record in records {
            let key = record.key();
            match positions.get(&key) {
                Some(&index) => {
                    log::warn!("Duplicate {} key '{}' in fetch result, keeping the last value", T::KIND, key);
                    unique[index] = record;
                }
                None => {
                    positions.insert(key, unique.len());
                    unique.push(record);
                }
            }
        }
        unique
    }

    fn commit(&self, mut state: RwLockWriteGuard<'_, StoreState<T>>, reason: ChangeReason) {
        state.version += 1;
        let change = StoreChange {
            kind: T::KIND,
            version: state.version,
            status: state.status,
            reason,
        };
        drop(state);
        // No subscribers is fine.
        let _ = self.events.send(change);
    }

    fn read(&self) -> std::sync::RwLockReadGuard<'_, StoreState<T>> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState<T>> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
