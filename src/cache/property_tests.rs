//! Property-Based Tests for Cache Module
//!
//! Uses proptest to check table and registry behavior against a plain map model.

use proptest::prelude::*;
use serde_json::{json, Value};
use std::collections::HashMap;
use std::thread::sleep;
use std::time::Duration;

use crate::cache::{CacheTable, Registry, Ttl};

// == Strategies ==
/// Generates keys, including characters that need escaping in URLs
fn key_strategy() -> impl Strategy<Value = String> {
    "[a-zA-Z0-9_/ %.-]{0,32}"
}

/// Generates JSON values of a few different shapes
fn value_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,64}".prop_map(Value::from),
        prop::collection::vec(any::<i32>(), 0..8).prop_map(|v| json!(v)),
        ("[a-z]{1,8}", any::<u16>()).prop_map(|(k, v)| {
            let mut object = serde_json::Map::new();
            object.insert(k, json!(v));
            Value::Object(object)
        }),
    ]
}

/// TTLs that never expire within a test run
fn immortal_ttl_strategy() -> impl Strategy<Value = Ttl> {
    prop_oneof![
        Just(Ttl::Unset),
        Just(Ttl::Forever),
        (i64::MIN..0i64).prop_map(Ttl::from_millis),
        Just(Ttl::After(Duration::from_secs(3600))),
    ]
}

#[derive(Debug, Clone)]
enum TableOp {
    Set { key: String, value: Value, ttl: Ttl },
    Get { key: String },
    Exists { key: String },
    Delete { key: String },
}

fn table_op_strategy() -> impl Strategy<Value = TableOp> {
    prop_oneof![
        (key_strategy(), value_strategy(), immortal_ttl_strategy())
            .prop_map(|(key, value, ttl)| TableOp::Set { key, value, ttl }),
        key_strategy().prop_map(|key| TableOp::Get { key }),
        key_strategy().prop_map(|key| TableOp::Exists { key }),
        key_strategy().prop_map(|key| TableOp::Delete { key }),
    ]
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    // Any sequence of operations without expiry behaves like a HashMap.
    #[test]
    fn prop_table_matches_model(ops in prop::collection::vec(table_op_strategy(), 1..64)) {
        let table = CacheTable::new("model");
        let mut model: HashMap<String, Value> = HashMap::new();

        for op in ops {
            match op {
                TableOp::Set { key, value, ttl } => {
                    table.set(key.clone(), value.clone(), ttl);
                    model.insert(key, value);
                }
                TableOp::Get { key } => {
                    prop_assert_eq!(table.get(&key), model.get(&key).cloned());
                }
                TableOp::Exists { key } => {
                    prop_assert_eq!(table.exists(&key), model.contains_key(&key));
                }
                TableOp::Delete { key } => {
                    table.delete(&key);
                    model.remove(&key);
                }
            }
            prop_assert_eq!(table.count(), model.len());
        }
    }

    // Storing then reading returns exactly the stored value.
    #[test]
    fn prop_roundtrip_storage(key in key_strategy(), value in value_strategy()) {
        let table = CacheTable::new("t");

        table.set(key.clone(), value.clone(), Ttl::Unset);

        prop_assert_eq!(table.get(&key), Some(value));
    }

    // A second set fully replaces the first.
    #[test]
    fn prop_overwrite_semantics(
        key in key_strategy(),
        value1 in value_strategy(),
        value2 in value_strategy(),
        ttl in immortal_ttl_strategy()
    ) {
        let table = CacheTable::new("t");

        table.set(key.clone(), value1, ttl);
        table.set(key.clone(), value2.clone(), ttl);

        prop_assert_eq!(table.get(&key), Some(value2));
        prop_assert_eq!(table.count(), 1);
    }

    // Keys set in one namespace are invisible from every other namespace.
    #[test]
    fn prop_namespace_isolation(
        ns_a in "[a-z]{1,8}",
        ns_b in "[a-z]{1,8}",
        key in key_strategy(),
        value in value_strategy()
    ) {
        prop_assume!(ns_a != ns_b);
        let registry = Registry::new();

        registry.store(&ns_a).set(key.clone(), value.clone(), Ttl::Unset);

        prop_assert_eq!(registry.store(&ns_b).get(&key), None);
        prop_assert!(!registry.store(&ns_b).exists(&key));
        prop_assert_eq!(registry.store(&ns_a).get(&key), Some(value));
    }
}

// Separate proptest block with fewer cases for time-sensitive TTL tests
proptest! {
    #![proptest_config(ProptestConfig::with_cases(5))]

    // After its TTL has elapsed an item is gone from get/exists, while count
    // keeps it until it is accessed or swept.
    #[test]
    fn prop_ttl_expiration_behavior(key in key_strategy(), value in value_strategy()) {
        let table = CacheTable::new("t");

        table.set(key.clone(), value.clone(), Ttl::from_millis(30));
        prop_assert_eq!(table.get(&key), Some(value));

        sleep(Duration::from_millis(60));

        prop_assert_eq!(table.count(), 1);
        prop_assert!(!table.exists(&key));
        prop_assert_eq!(table.get(&key), None);
        prop_assert_eq!(table.count(), 0);
    }
}
