//! In-memory data store for equipment listings and inquiries

pub mod equipment;
pub mod inquiries;
pub mod seed;

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use indexmap::IndexMap;

use crate::models::{Equipment, Inquiry};

/// Records held by the store, keyed by identifier in insertion order
#[derive(Debug, Default)]
pub(crate) struct StoreState {
    pub(crate) equipment: IndexMap<String, Equipment>,
    pub(crate) inquiries: IndexMap<String, Inquiry>,
}

/// Handle on the process-wide store. Clones share the same records.
///
/// Every operation holds the lock for its whole duration, so callers never
/// observe a partially applied write.
#[derive(Clone, Default)]
pub struct Repository {
    state: Arc<RwLock<StoreState>>,
}

impl Repository {
    /// Create an empty store
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store pre-filled with the sample catalog
    pub fn with_sample_data() -> Self {
        let repository = Self::new();
        repository.seed_sample_data();
        repository
    }

    // No operation can leave the maps half-written, so a poisoned lock
    // still guards consistent data.
    fn read(&self) -> RwLockReadGuard<'_, StoreState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, StoreState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

fn new_id() -> String {
    uuid::Uuid::new_v4().to_string()
}

/// Most recent first; records created in the same instant keep reverse
/// insertion order.
fn newest_first<'a, T, I>(records: I, created_at: impl Fn(&T) -> chrono::DateTime<chrono::Utc>) -> Vec<T>
where
    T: Clone + 'a,
    I: DoubleEndedIterator<Item = &'a T>,
{
    let mut rows: Vec<T> = records.rev().cloned().collect();
    rows.sort_by(|a, b| created_at(b).cmp(&created_at(a)));
    rows
}
