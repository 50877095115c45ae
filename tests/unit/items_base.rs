//! Data Container Base Tests
//!
//! Classification of containers, strict field enforcement, and
//! annotation-aware reconstruction of nested records.

use crate::common::fixtures::{
    BIG_ITEM, BIG_ITEM_INCORRECT, NOT_AN_ITEM_SCHEMA, NotConsideredAnItem, SUB_ITEM,
    product_with_unknown_fields,
};
use crate::common::{as_map, init_logging};
use common_items::{
    ErrorKind, FieldValue, ITEM, ItemError, PRODUCT, Record, is_data_container,
};
use serde_json::json;

/// Containers are Item itself, its descendants, and records of either
#[test]
fn test_is_data_container() {
    let item = Record::new(&ITEM, Vec::<(&str, FieldValue)>::new()).unwrap();
    let sub_item = Record::new(&SUB_ITEM, [("name", FieldValue::from("test"))]).unwrap();

    assert!(is_data_container(&ITEM));
    assert!(is_data_container(&SUB_ITEM));
    assert!(is_data_container(&item));
    assert!(is_data_container(&sub_item));

    assert!(!is_data_container(&NOT_AN_ITEM_SCHEMA));
    assert!(!is_data_container(&NotConsideredAnItem));
}

/// Explicit null on an optional container field reads back as null
#[test]
fn test_optional_field_set_to_null() {
    let big_item = Record::new(&BIG_ITEM, [("sub_item", FieldValue::Null)]).unwrap();
    assert!(big_item.get("sub_item").unwrap().is_null());
}

/// Nested mappings become records of the annotated schema
#[test]
fn test_item_from_dict() {
    init_logging();

    let item = BIG_ITEM
        .from_dict(&as_map(json!({"sub_item": {"name": "hello"}})))
        .unwrap();
    let sub_item = item.get("sub_item").unwrap().as_item().unwrap();

    assert!(std::ptr::eq(sub_item.schema(), &*SUB_ITEM));
    assert_eq!(sub_item.get("name").unwrap().as_str(), Some("hello"));
}

/// A union of several types cannot be resolved for a nested mapping
#[test]
fn test_item_from_dict_value_error() {
    let result = BIG_ITEM_INCORRECT.from_dict(&as_map(json!({"sub_item": {"name": "hello"}})));

    let error = result.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Value);
    assert!(error.to_string().contains("sub_item"));
    assert!(error.to_string().contains("Union[SubItem, integer, string]"));
}

/// Unknown keys are kept on the record whose mapping contained them
#[test]
fn test_item_unknown_input() {
    init_logging();

    let product = PRODUCT
        .from_dict(&as_map(product_with_unknown_fields()))
        .unwrap();

    assert_eq!(product.unknown_fields()["a"], json!("b"));
    assert_eq!(
        product.get("url").unwrap().as_str(),
        Some("https://example.com/?product=product22")
    );

    let rating = product.get("aggregateRating").unwrap().as_item().unwrap();
    assert_eq!(rating.unknown_fields()["worstRating"], json!(0));

    let properties = product
        .get("additionalProperties")
        .unwrap()
        .as_items()
        .unwrap();
    assert_eq!(properties[0].unknown_fields()["max"], json!(10));
    assert_eq!(properties[0].get("name").unwrap().as_str(), Some("a"));
    assert_eq!(properties[0].get("value").unwrap().as_str(), Some("b"));
}

/// Setting an undeclared attribute fails with an attribute error
#[test]
fn test_item_attribute_error() {
    let mut foo = Record::new(&SUB_ITEM, [("name", FieldValue::from("foo"))]).unwrap();

    let error = foo.set("value", "bar").unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Attribute);
    assert!(matches!(error, ItemError::NoSuchAttribute { .. }));
}

/// Constructing with an undeclared keyword fails with a type error
#[test]
fn test_item_unknown_field_init() {
    let result = Record::new(
        &SUB_ITEM,
        [
            ("name", FieldValue::from("foo")),
            ("value", FieldValue::from("bar")),
        ],
    );

    let error = result.unwrap_err();
    assert_eq!(error.kind(), ErrorKind::Type);
    assert!(matches!(error, ItemError::UnexpectedField { .. }));
}

/// Direct construction never populates unknown fields
#[test]
fn test_direct_construction_has_no_unknown_fields() {
    let sub_item = Record::new(&SUB_ITEM, [("name", FieldValue::from("foo"))]).unwrap();
    assert!(sub_item.unknown_fields().is_empty());
}

/// A failed reconstruction leaves the input untouched
#[test]
fn test_from_dict_does_not_mutate_input() {
    let raw = as_map(json!({"sub_item": {"name": "hello", "extra": 1}, "top": 2}));
    let snapshot = raw.clone();

    BIG_ITEM.from_dict(&raw).unwrap();
    let _ = BIG_ITEM_INCORRECT.from_dict(&raw);

    assert_eq!(raw, snapshot);
}

/// Records are plain data and can be shared across threads
#[test]
fn test_from_dict_on_independent_threads() {
    let handles: Vec<_> = (0..4)
        .map(|index| {
            std::thread::spawn(move || {
                let raw = as_map(json!({"sub_item": {"name": format!("item-{}", index)}}));
                BIG_ITEM.from_dict(&raw).unwrap()
            })
        })
        .collect();

    for (index, handle) in handles.into_iter().enumerate() {
        let item = handle.join().unwrap();
        let sub_item = item.get("sub_item").unwrap().as_item().unwrap();
        assert_eq!(
            sub_item.get("name").unwrap().as_str(),
            Some(format!("item-{}", index).as_str())
        );
    }
}
