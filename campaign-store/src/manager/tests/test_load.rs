use super::*;
use crate::storage::{KvStore, RedbStore};

/// Activity list as the first release wrote it: bare JSON, old title, no subtitles
fn legacy_activities_json() -> String {
    let mut value = serde_json::to_value(vec![seed::activity()]).unwrap();
    let first = &mut value[0];
    first["name"] = "春分·竖蛋".into();
    first.as_object_mut().unwrap().remove("subtitle");
    for list in ["recommendedFoods", "recommendedProducts"] {
        for item in first[list].as_array_mut().unwrap() {
            item.as_object_mut().unwrap().remove("subtitle");
        }
    }
    value.to_string()
}

#[test]
fn test_fresh_storage_bootstraps_seed() {
    let (manager, storage) = fresh_manager();

    assert_eq!(manager.user_beans(), 100);
    assert_eq!(manager.transactions().len(), 1);
    let tx = &manager.transactions()[0];
    assert_eq!(tx.kind, TransactionType::Income);
    assert_eq!(tx.amount, 100);
    assert_eq!(tx.source, "首次登录");

    assert_eq!(manager.activities().len(), 1);
    assert_eq!(manager.shop_products().len(), 4);
    assert!(manager.orders().is_empty());

    assert_eq!(storage.writes(), 2);
    assert!(storage.get(ACTIVITIES_KEY).unwrap().is_some());
    assert!(storage.get(GLOBAL_DATA_KEY).unwrap().is_some());
}

#[test]
fn test_second_load_writes_nothing() {
    let (first, storage) = fresh_manager();
    let second = reload(&storage);
    assert_eq!(storage.writes(), 2);
    assert_eq!(second.activities(), first.activities());
    assert_eq!(second.transactions(), first.transactions());
}

#[test]
fn test_legacy_seed_is_migrated_once() {
    let storage = MemoryStore::new().with_entry(ACTIVITIES_KEY, legacy_activities_json());

    let manager = DataManager::load(storage.clone()).unwrap();
    let a = manager.activity(seed::SEED_ACTIVITY_ID).unwrap();
    assert_eq!(a.name, "春分到，蛋儿俏");
    assert_eq!(a.subtitle.as_deref(), Some("春色正中分，美好正当时"));
    assert_eq!(a.recommended_foods[0].subtitle.as_deref(), Some("山野之鲜"));
    assert_eq!(a.recommended_products[2].subtitle.as_deref(), Some("可爱造型"));

    // migrated activities + seeded global data
    assert_eq!(storage.writes(), 2);

    let again = reload(&storage);
    assert_eq!(storage.writes(), 2);
    assert_eq!(again.activities(), manager.activities());
}

#[test]
fn test_legacy_global_bundle_is_accepted() {
    let raw = r#"{
        "shopProducts": [],
        "userBeans": 260,
        "transactions": [
            {"id": "2", "type": "expense", "amount": 40, "source": "兑换-书签", "time": "2024/3/21 09:00:00"},
            {"id": "1", "type": "income", "amount": 300, "source": "首次登录", "time": "2024/3/20 09:00:00"}
        ],
        "orders": []
    }"#;
    let storage = MemoryStore::new().with_entry(GLOBAL_DATA_KEY, raw);

    let manager = DataManager::load(storage.clone()).unwrap();
    assert_eq!(manager.user_beans(), 260);
    assert_eq!(manager.transactions()[0].kind, TransactionType::Expense);
    assert!(manager.shop_products().is_empty(), "present but empty is not reseeded");

    let stored: serde_json::Value =
        serde_json::from_str(&storage.get(GLOBAL_DATA_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored["version"], SCHEMA_VERSION);
}

#[test]
fn test_legacy_fractional_beans_are_rounded() {
    // An admin-set price of 59.9 left fractions everywhere it was booked
    let raw = r#"{
        "shopProducts": [],
        "userBeans": 40.1,
        "transactions": [
            {"id": "2", "type": "expense", "amount": 59.9, "source": "兑换-书签", "time": "2024/3/21 09:00:00"},
            {"id": "1", "type": "income", "amount": 100, "source": "首次登录", "time": "2024/3/20 09:00:00"}
        ],
        "orders": [
            {"id": "3", "userId": "user_1", "type": "redeem", "productName": "书签", "amount": 59.9, "status": "pending", "time": "2024/3/21 09:00:00"}
        ]
    }"#;
    let storage = MemoryStore::new().with_entry(GLOBAL_DATA_KEY, raw);

    let manager = DataManager::load(storage.clone()).unwrap();
    assert_eq!(manager.user_beans(), 40);
    assert_eq!(manager.transactions()[0].amount, 60);
    assert_eq!(manager.transactions()[1].amount, 100);
    assert_eq!(manager.orders()[0].amount, 60);

    // Rewritten once as whole beans, then loads without further writes
    let stored: serde_json::Value =
        serde_json::from_str(&storage.get(GLOBAL_DATA_KEY).unwrap().unwrap()).unwrap();
    assert_eq!(stored["data"]["userBeans"], 40);
    let writes = storage.writes();
    assert_eq!(reload(&storage).user_beans(), 40);
    assert_eq!(storage.writes(), writes);
}

#[test]
fn test_corrupted_payload_is_fatal() {
    let storage = MemoryStore::new().with_entry(GLOBAL_DATA_KEY, "{\"userBeans\": \"lots\"}");
    let err = DataManager::load(storage.clone()).unwrap_err();
    assert!(matches!(
        err,
        StoreError::Corrupted {
            key: GLOBAL_DATA_KEY,
            ..
        }
    ));
    // no silent fallback to seed
    assert_eq!(
        storage.get(GLOBAL_DATA_KEY).unwrap().as_deref(),
        Some("{\"userBeans\": \"lots\"}")
    );
}

#[test]
fn test_redb_backend_round_trip() {
    let storage = RedbStore::open_in_memory().unwrap();
    let mut manager = DataManager::load(storage.clone()).unwrap();
    manager.add_beans(30, "推荐美食").unwrap();
    manager.cast_vote(seed::SEED_ACTIVITY_ID, "3").unwrap();

    let reloaded = DataManager::load(storage).unwrap();
    assert_eq!(reloaded.user_beans(), 130);
    assert_eq!(reloaded.activities(), manager.activities());
}
