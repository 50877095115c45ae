//! Annotation-driven reconstruction of records from JSON mappings.
//!
//! Each declared key is resolved against its field's [`TypeAnnotation`]:
//! a mapping under a single-container annotation becomes a nested [`Record`],
//! a sequence under a list-of-container annotation has each of its mappings
//! rebuilt, and anything else is stored raw. Keys the schema does not
//! declare are kept in the record's unknown-fields mapping, at every level.

use crate::error::{ItemError, ItemResult};
use crate::item::container::is_data_container;
use crate::item::record::{FieldValue, Record};
use crate::schema::{FieldDefinition, Schema, TypeAnnotation};
use log::{debug, trace};
use serde_json::{Map, Value};

/// What a mapping value under a given annotation turns into.
enum Resolution {
    Container(&'static Schema),
    Opaque,
    Ambiguous,
}

fn resolve_mapping(annotation: &TypeAnnotation) -> Resolution {
    match annotation.non_null() {
        None => Resolution::Ambiguous,
        Some(TypeAnnotation::Container(schema)) if is_data_container(*schema) => {
            Resolution::Container(*schema)
        }
        Some(_) => Resolution::Opaque,
    }
}

fn resolve_field(definition: &FieldDefinition, value: &Value) -> ItemResult<FieldValue> {
    match value {
        Value::Null => Ok(FieldValue::Null),
        Value::Object(map) => match resolve_mapping(&definition.annotation) {
            Resolution::Container(schema) => {
                trace!("Field '{}' -> nested {}", definition.name, schema.name());
                Ok(FieldValue::from(schema.from_dict(map)?))
            }
            Resolution::Opaque => {
                trace!("Field '{}' -> opaque mapping", definition.name);
                Ok(FieldValue::Raw(value.clone()))
            }
            Resolution::Ambiguous => Err(ItemError::ambiguous(
                &definition.name,
                &definition.annotation,
            )),
        },
        Value::Array(elements) => resolve_sequence(definition, elements),
        other => Ok(FieldValue::Raw(other.clone())),
    }
}

/// Resolve a sequence against a field annotation.
///
/// Under a list-of-container annotation every mapping element is rebuilt.
/// When all elements are mappings the result is [`FieldValue::Items`];
/// otherwise [`FieldValue::List`] keeps nulls as null and other elements raw.
/// An ambiguous annotation only fails when some element is a mapping.
fn resolve_sequence(definition: &FieldDefinition, elements: &[Value]) -> ItemResult<FieldValue> {
    let raw = || FieldValue::Raw(Value::Array(elements.to_vec()));
    let has_mapping = elements.iter().any(Value::is_object);
    let ambiguous = || ItemError::ambiguous(&definition.name, &definition.annotation);

    let element = match definition.annotation.non_null() {
        Some(TypeAnnotation::List(inner)) => inner,
        Some(_) => return Ok(raw()),
        None if has_mapping => return Err(ambiguous()),
        None => return Ok(raw()),
    };

    let schema = match resolve_mapping(element) {
        Resolution::Container(schema) => schema,
        Resolution::Ambiguous if has_mapping => return Err(ambiguous()),
        _ => return Ok(raw()),
    };

    trace!(
        "Field '{}' -> {} element(s) of {}",
        definition.name,
        elements.len(),
        schema.name()
    );

    if elements.iter().all(Value::is_object) {
        return elements
            .iter()
            .filter_map(Value::as_object)
            .map(|map| schema.from_dict(map))
            .collect::<ItemResult<Vec<_>>>()
            .map(FieldValue::Items);
    }

    elements
        .iter()
        .map(|element| match element {
            Value::Object(map) => Ok(FieldValue::from(schema.from_dict(map)?)),
            other => Ok(FieldValue::from(other.clone())),
        })
        .collect::<ItemResult<Vec<_>>>()
        .map(FieldValue::List)
}

impl Schema {
    /// Reconstruct a record of this schema from a JSON mapping.
    ///
    /// Nested mappings, and the mappings inside sequences, are rebuilt as
    /// records of the schema their field annotation names. Null elements of
    /// such a sequence stay null. Keys that match no declared
    /// field are kept in [`Record::unknown_fields`] of the record whose
    /// mapping contained them. The input is not modified.
    ///
    /// # Errors
    ///
    /// * [`ItemError::AmbiguousAnnotation`] when a mapping must be resolved
    ///   against a union with more than one non-null member
    /// * any error of [`Record::new`], e.g. a missing required field
    pub fn from_dict(&'static self, raw: &Map<String, Value>) -> ItemResult<Record> {
        let mut declared = Vec::with_capacity(raw.len());
        let mut unknown = Map::new();

        for (key, value) in raw {
            match self.field(key) {
                Some(definition) => declared.push((key.as_str(), resolve_field(definition, value)?)),
                None => {
                    unknown.insert(key.clone(), value.clone());
                }
            }
        }

        if !unknown.is_empty() {
            debug!(
                "{}: keeping {} unknown field(s): {:?}",
                self.name(),
                unknown.len(),
                unknown.keys().collect::<Vec<_>>()
            );
        }

        Ok(Record::new(self, declared)?.with_unknown_fields(unknown))
    }

    /// Reconstruct one record per element of `raw`.
    pub fn from_list(&'static self, raw: &[Value]) -> ItemResult<Vec<Record>> {
        raw.iter().map(|value| self.from_json(value)).collect()
    }

    /// Reconstruct a record from a JSON value, which must be an object.
    pub fn from_json(&'static self, value: &Value) -> ItemResult<Record> {
        let map = value.as_object().ok_or_else(|| {
            ItemError::invalid_input(format!(
                "{} must be built from a JSON object, got {}",
                self.name(),
                json_type_name(value)
            ))
        })?;
        self.from_dict(map)
    }

    /// Parse JSON text and reconstruct a record from it.
    pub fn from_json_str(&'static self, text: &str) -> ItemResult<Record> {
        let value: Value = serde_json::from_str(text)?;
        self.from_json(&value)
    }
}

fn json_type_name(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
