//! redb-backed key-value store
//!
//! # Tables
//!
//! | Table | Key | Value | Purpose |
//! |-------|-----|-------|---------|
//! | `kv` | storage key | JSON text | Activity collection, global bundle |
//!
//! # Durability
//!
//! redb commits with `Durability::Immediate`: once `set` returns, the value
//! is on disk and the file is in a consistent state even after power loss.

use redb::{Database, ReadableDatabase, ReadableTable, TableDefinition};
use std::path::Path;
use std::sync::Arc;

use super::{KvStore, StorageResult};

/// Text entries: key = storage key, value = serialized payload
const KV_TABLE: TableDefinition<&str, &str> = TableDefinition::new("kv");

/// Key-value storage backed by redb
#[derive(Clone)]
pub struct RedbStore {
    db: Arc<Database>,
}

impl std::fmt::Debug for RedbStore {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RedbStore").field("db", &"<redb::Database>").finish()
    }
}

impl RedbStore {
    /// Open or create the database at the given path
    pub fn open(path: impl AsRef<Path>) -> StorageResult<Self> {
        let db = Database::create(path)?;
        Self::init(db)
    }

    /// Open an in-memory database (tests, previews)
    pub fn open_in_memory() -> StorageResult<Self> {
        let db = Database::builder().create_with_backend(redb::backends::InMemoryBackend::new())?;
        Self::init(db)
    }

    fn init(db: Database) -> StorageResult<Self> {
        let write_txn = db.begin_write()?;
        {
            let _ = write_txn.open_table(KV_TABLE)?;
        }
        write_txn.commit()?;

        Ok(Self { db: Arc::new(db) })
    }
}

impl KvStore for RedbStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>> {
        let read_txn = self.db.begin_read()?;
        let table = read_txn.open_table(KV_TABLE)?;
        Ok(table.get(key)?.map(|guard| guard.value().to_string()))
    }

    fn set(&self, key: &str, value: &str) -> StorageResult<()> {
        let txn = self.db.begin_write()?;
        {
            let mut table = txn.open_table(KV_TABLE)?;
            table.insert(key, value)?;
        }
        txn.commit()?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_missing_key_reads_none() {
        let store = RedbStore::open_in_memory().unwrap();
        assert!(store.get("trae_activities").unwrap().is_none());
    }

    #[test]
    fn test_set_overwrites_whole_value() {
        let store = RedbStore::open_in_memory().unwrap();
        store.set("k", r#"{"a":1}"#).unwrap();
        store.set("k", "[]").unwrap();
        assert_eq!(store.get("k").unwrap().as_deref(), Some("[]"));
    }

    #[test]
    fn test_clones_share_database() {
        let store = RedbStore::open_in_memory().unwrap();
        let other = store.clone();
        store.set("k", "v").unwrap();
        assert_eq!(other.get("k").unwrap().as_deref(), Some("v"));
    }

    #[test]
    fn test_file_survives_reopen() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("campaign.redb");
        {
            let store = RedbStore::open(&path).unwrap();
            store.set("trae_global_data", r#"{"userBeans":100}"#).unwrap();
        }
        let store = RedbStore::open(&path).unwrap();
        assert_eq!(
            store.get("trae_global_data").unwrap().as_deref(),
            Some(r#"{"userBeans":100}"#)
        );
    }
}
