//! Per-domain record cache with a freshness window.

use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

use crate::error::RecordError;

struct CacheEntry<R> {
    records: Arc<Vec<R>>,
    fetched_at: Option<Instant>,
}

/// Last successful external fetch for one domain.
///
/// Writes replace the whole collection; there is no merge. Concurrent
/// writers race and the last one wins.
pub struct DomainCache<R> {
    ttl: Duration,
    entry: Mutex<CacheEntry<R>>,
}

impl<R> DomainCache<R> {
    pub fn new(ttl: Duration) -> Self {
        Self {
            ttl,
            entry: Mutex::new(CacheEntry {
                records: Arc::new(Vec::new()),
                fetched_at: None,
            }),
        }
    }

    /// Replace the cached collection, stamped now.
    pub fn replace(&self, records: Vec<R>) -> Result<(), RecordError> {
        self.replace_at(records, Instant::now())
    }

    /// Replace the cached collection with an explicit fetch time.
    pub fn replace_at(&self, records: Vec<R>, fetched_at: Instant) -> Result<(), RecordError> {
        self.install(Arc::new(records), fetched_at)
    }

    pub(crate) fn install(&self, records: Arc<Vec<R>>, fetched_at: Instant) -> Result<(), RecordError> {
        let mut entry = self.lock()?;
        entry.records = records;
        entry.fetched_at = Some(fetched_at);
        Ok(())
    }

    /// The cached collection if it is non-empty and younger than the TTL.
    pub fn fresh(&self) -> Result<Option<Arc<Vec<R>>>, RecordError> {
        let entry = self.lock()?;
        let fresh = match entry.fetched_at {
            Some(at) => !entry.records.is_empty() && at.elapsed() < self.ttl,
            None => false,
        };
        Ok(fresh.then(|| Arc::clone(&entry.records)))
    }

    /// Number of cached records, fresh or not.
    pub fn len(&self) -> usize {
        self.lock().map(|e| e.records.len()).unwrap_or(0)
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Poison the lock, as a panicking writer would.
    #[cfg(test)]
    pub(crate) fn poison(&self) {
        let _ = std::panic::catch_unwind(std::panic::AssertUnwindSafe(|| {
            let _entry = self.entry.lock();
            panic!("writer panicked while holding the cache lock");
        }));
    }

    fn lock(&self) -> Result<std::sync::MutexGuard<'_, CacheEntry<R>>, RecordError> {
        self.entry
            .lock()
            .map_err(|e| RecordError::Cache(format!("cache lock poisoned: {}", e)))
    }
}
