//! In-process fake backend
//!
//! Counts writes and can be told to refuse them, so tests can assert how
//! often the manager persists and what happens when a persist fails.

use parking_lot::Mutex;
use std::collections::HashMap;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};

use super::{KvStore, StorageError, StorageResult};

#[derive(Debug, Default)]
struct Inner {
    entries: Mutex<HashMap<String, String>>,
    writes: AtomicUsize,
    fail_writes: AtomicBool,
}

/// Shared in-memory store; clones see the same entries
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    inner: Arc<Inner>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-populate an entry without counting it as a write
    pub fn with_entry(self, key: &str, value: impl Into<String>) -> Self {
        self.inner.entries.lock().insert(key.to_string(), value.into());
        self
    }

    /// Number of successful `set` calls so far
    pub fn writes(&self) -> usize {
        self.inner.writes.load(Ordering::SeqCst)
    }

    pub fn set_fail_writes(&self, fail: bool) {
        self.inner.fail_writes.store(fail, Ordering::SeqCst);
    }
}

impl KvStore for MemoryStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        Ok(self.inner.entries.lock().get(key).cloned())
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        if self.inner.fail_writes.load(Ordering::SeqCst) {
            return Err(StorageError::Unavailable(format!("write to {} refused", key)));
        }
        self.inner
            .entries
            .lock()
            .insert(key.to_string(), value.to_string());
        self.inner.writes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
