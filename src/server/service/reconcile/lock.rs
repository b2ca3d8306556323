//! Per-record locks serializing fulfilment attempts within this process.

use std::{
    collections::HashMap,
    sync::{Arc, Mutex, PoisonError},
};
use tokio::sync::{Mutex as AsyncMutex, OwnedMutexGuard};

type LockTable = HashMap<String, Arc<AsyncMutex<()>>>;

/// Table of async locks keyed by record, e.g. `member:MBH-007` or `order:1A2B3C4D`.
///
/// Cloning shares the same table. Entries are removed once the last holder or waiter
/// for a key releases it, so the table only holds keys currently in use.
#[derive(Clone, Default)]
pub struct ReconciliationLocks {
    table: Arc<Mutex<LockTable>>,
}

impl ReconciliationLocks {
    pub fn new() -> Self {
        Self::default()
    }

    /// Waits until no other task holds `key`, then holds it until the guard is dropped.
    ///
    /// # Arguments
    /// - `key` - Record key to serialize on
    ///
    /// # Returns
    /// - `ReconciliationGuard` - Releases the key when dropped
    pub async fn acquire(&self, key: &str) -> ReconciliationGuard {
        let lock = {
            let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
            table
                .entry(key.to_string())
                .or_insert_with(|| Arc::new(AsyncMutex::new(())))
                .clone()
        };

        let guard = lock.clone().lock_owned().await;

        ReconciliationGuard {
            key: key.to_string(),
            table: self.table.clone(),
            lock,
            guard: Some(guard),
        }
    }

    /// Number of keys currently held or awaited.
    pub fn len(&self) -> usize {
        self.table
            .lock()
            .unwrap_or_else(PoisonError::into_inner)
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

/// Holds a key of `ReconciliationLocks` until dropped.
pub struct ReconciliationGuard {
    key: String,
    table: Arc<Mutex<LockTable>>,
    lock: Arc<AsyncMutex<()>>,
    guard: Option<OwnedMutexGuard<()>>,
}

impl Drop for ReconciliationGuard {
    fn drop(&mut self) {
        // The owned guard holds its own reference to the lock.
        self.guard.take();

        let mut table = self.table.lock().unwrap_or_else(PoisonError::into_inner);
        // Only the table and this guard still reference the lock: nobody is waiting.
        if Arc::strong_count(&self.lock) == 2 {
            table.remove(&self.key);
        }
    }
}
