use std::sync::{Arc, PoisonError, RwLock};

use super::process::{ProcessRecord, sort_by_cpu};

/// A fully built, CPU-sorted process list. Immutable once constructed.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Snapshot {
    records: Vec<ProcessRecord>,
}

impl Snapshot {
    pub fn from_records(mut records: Vec<ProcessRecord>) -> Self {
        sort_by_cpu(&mut records);
        Self { records }
    }

    pub fn records(&self) -> &[ProcessRecord] {
        &self.records
    }

    /// The first `limit` records, or all of them if there are fewer.
    pub fn visible(&self, limit: usize) -> &[ProcessRecord] {
        &self.records[..self.records.len().min(limit)]
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

/// Whole-system CPU and memory usage, in percent.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct SystemLoad {
    pub cpu_percent: f32,
    pub mem_percent: f32,
}

/// Single-writer, multi-reader cell holding the live [`Snapshot`].
///
/// The lock only guards an `Arc` swap or clone, so hold time does not depend on
/// the process count. Readers keep their `Arc` after the lock is released and
/// never see a half-built list.
#[derive(Clone, Debug, Default)]
pub struct SharedSnapshot {
    inner: Arc<RwLock<Arc<Snapshot>>>,
}

impl SharedSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replaces the live snapshot wholesale.
    pub fn publish(&self, snapshot: Snapshot) {
        let next = Arc::new(snapshot);
        // The cell only ever holds a complete Arc, so a poisoned lock is still usable.
        let mut slot = self.inner.write().unwrap_or_else(PoisonError::into_inner);
        *slot = next;
    }

    pub fn load(&self) -> Arc<Snapshot> {
        let slot = self.inner.read().unwrap_or_else(PoisonError::into_inner);
        Arc::clone(&slot)
    }
}
