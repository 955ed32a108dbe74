//! Storage adapter
//!
//! Two durable text entries hold everything:
//!
//! | Key | Value |
//! |-----|-------|
//! | [`ACTIVITIES_KEY`] | activity collection |
//! | [`GLOBAL_DATA_KEY`] | shop inventory, bean balance, ledger, orders |
//!
//! Values are always rewritten whole; there are no partial updates.

mod error;
mod memory;
mod redb_store;

pub use error::{StorageError, StorageResult};
pub use memory::MemoryStore;
pub use redb_store::RedbStore;

/// Activity collection entry
pub const ACTIVITIES_KEY: &str = "trae_activities";

/// Global bundle entry
pub const GLOBAL_DATA_KEY: &str = "trae_global_data";

/// Text key-value backend the data manager persists through.
///
/// `set` must be durable before it returns.
pub trait KvStore {
    fn get(&self, key: &str) -> StorageResult<Option<String>>;

    fn set(&self, key: &str, value: &str) -> StorageResult<()>;
}
