use super::*;
use crate::storage::MemoryStore;
use shared::models::{Interaction, Question, TransactionType};

mod test_ledger;
mod test_load;

fn fresh_manager() -> (DataManager<MemoryStore>, MemoryStore) {
    let storage = MemoryStore::new();
    let manager = DataManager::load(storage.clone()).unwrap();
    (manager, storage)
}

/// Manager whose balance is exactly `beans`, without extra ledger entries
fn manager_with_beans(beans: u64) -> DataManager<MemoryStore> {
    let mut global = seed::global_data();
    global.user_beans = beans;
    let storage = MemoryStore::new().with_entry(GLOBAL_DATA_KEY, schema::encode(&global).unwrap());
    DataManager::load(storage).unwrap()
}

fn address() -> Address {
    Address {
        name: "张三".to_string(),
        phone: "13800000000".to_string(),
        address: "苏州市姑苏区".to_string(),
    }
}

/// Reload from the same storage and return the persisted view
fn reload(storage: &MemoryStore) -> DataManager<MemoryStore> {
    DataManager::load(storage.clone()).unwrap()
}
