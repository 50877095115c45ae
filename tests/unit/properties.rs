//! Property-Based Tests for Unknown-Field Retention
//!
//! Whatever extra keys the input carries, reconstruction keeps each one on
//! the record that received it and leaves declared fields alone.

use crate::common::as_map;
use crate::common::fixtures::{BIG_ITEM, SUB_ITEM};
use proptest::prelude::*;
use serde_json::{Map, Value, json};

/// Keys that never collide with a declared field of the test schemas
fn unknown_key_strategy() -> impl Strategy<Value = String> {
    "[a-z]{1,8}_x"
}

fn scalar_strategy() -> impl Strategy<Value = Value> {
    prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::from),
        any::<i64>().prop_map(Value::from),
        "[a-zA-Z0-9 ]{0,16}".prop_map(Value::from),
    ]
}

fn extras_strategy() -> impl Strategy<Value = Map<String, Value>> {
    prop::collection::btree_map(unknown_key_strategy(), scalar_strategy(), 0..6)
        .prop_map(|extras| extras.into_iter().collect())
}

proptest! {
    #[test]
    fn unknown_keys_are_retained_at_each_level(
        top in extras_strategy(),
        nested in extras_strategy(),
        name in "[a-z]{1,10}",
    ) {
        let mut sub = as_map(json!({"name": name}));
        sub.extend(nested.clone());
        let mut raw = as_map(json!({"sub_item": Value::Object(sub)}));
        raw.extend(top.clone());

        let item = BIG_ITEM.from_dict(&raw).unwrap();
        prop_assert_eq!(item.unknown_fields(), &top);

        let sub_item = item.get("sub_item").unwrap().as_item().unwrap();
        prop_assert_eq!(sub_item.unknown_fields(), &nested);
        prop_assert_eq!(sub_item.get("name").unwrap().as_str(), Some(name.as_str()));
    }

    #[test]
    fn serialization_preserves_input(
        extras in extras_strategy(),
        name in "[a-z]{1,10}",
    ) {
        let mut raw = as_map(json!({"name": name}));
        raw.extend(extras);
        let record = SUB_ITEM.from_dict(&raw).unwrap();

        // Null values are dropped for declared fields only, and "name" is never null.
        prop_assert_eq!(record.to_json().unwrap(), Value::Object(raw));
    }
}
