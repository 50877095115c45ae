//! Record instances of item schemas.
//!
//! A [`Record`] holds one value per declared field of its schema, in
//! declaration order, plus the side mapping of unknown input keys. The field
//! set is closed: construction, reads and writes all go through the schema.

use crate::error::{ItemError, ItemResult};
use crate::item::container::is_data_container;
use crate::schema::Schema;
use serde::ser::{Serialize, SerializeMap, Serializer};
use serde_json::{Map, Value};

/// Value stored in a declared field.
#[derive(Debug, Clone, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum FieldValue {
    /// Absent or explicit null
    Null,
    /// Plain JSON value stored as-is
    Raw(Value),
    /// Nested record
    Item(Box<Record>),
    /// Sequence of nested records
    Items(Vec<Record>),
    /// Sequence of nested records interleaved with nulls or raw elements
    List(Vec<FieldValue>),
}

impl FieldValue {
    pub fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub fn as_raw(&self) -> Option<&Value> {
        match self {
            Self::Raw(value) => Some(value),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        self.as_raw().and_then(Value::as_str)
    }

    pub fn as_item(&self) -> Option<&Record> {
        match self {
            Self::Item(record) => Some(record),
            _ => None,
        }
    }

    pub fn as_items(&self) -> Option<&[Record]> {
        match self {
            Self::Items(records) => Some(records),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[FieldValue]> {
        match self {
            Self::List(elements) => Some(elements),
            _ => None,
        }
    }
}

impl From<Value> for FieldValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            other => Self::Raw(other),
        }
    }
}

impl From<&str> for FieldValue {
    fn from(value: &str) -> Self {
        Self::Raw(Value::String(value.to_string()))
    }
}

impl From<String> for FieldValue {
    fn from(value: String) -> Self {
        Self::Raw(Value::String(value))
    }
}

impl From<Record> for FieldValue {
    fn from(record: Record) -> Self {
        Self::Item(Box::new(record))
    }
}

impl From<Vec<Record>> for FieldValue {
    fn from(records: Vec<Record>) -> Self {
        Self::Items(records)
    }
}

/// An instance of a data container schema.
#[derive(Debug, Clone)]
pub struct Record {
    schema: &'static Schema,
    values: Vec<FieldValue>,
    unknown_fields: Map<String, Value>,
}

impl Record {
    /// Construct a record from keyword-style field values.
    ///
    /// Every name must be declared by `schema`, and every required field must
    /// be supplied. Optional fields that are not supplied are null. The
    /// unknown-fields mapping of the result is empty.
    ///
    /// # Errors
    ///
    /// * [`ItemError::NotAContainer`] if `schema` does not descend from the
    ///   base item schema
    /// * [`ItemError::UnexpectedField`] for an undeclared name
    /// * [`ItemError::DuplicateField`] for a name given more than once
    /// * [`ItemError::MissingField`] for an absent required field
    pub fn new<I, K>(schema: &'static Schema, fields: I) -> ItemResult<Self>
    where
        I: IntoIterator<Item = (K, FieldValue)>,
        K: AsRef<str>,
    {
        if !is_data_container(schema) {
            return Err(ItemError::NotAContainer {
                name: schema.name().to_string(),
            });
        }

        let mut slots: Vec<Option<FieldValue>> = vec![None; schema.fields().len()];
        for (name, value) in fields {
            let name = name.as_ref();
            let index = schema
                .field_index(name)
                .ok_or_else(|| ItemError::unexpected_field(schema.name(), name))?;
            if slots[index].replace(value).is_some() {
                return Err(ItemError::duplicate_field(schema.name(), name));
            }
        }

        let values = slots
            .into_iter()
            .zip(schema.fields())
            .map(|(slot, definition)| match slot {
                Some(value) => Ok(value),
                None if definition.required => {
                    Err(ItemError::missing_field(schema.name(), &definition.name))
                }
                None => Ok(FieldValue::Null),
            })
            .collect::<ItemResult<Vec<_>>>()?;

        Ok(Self {
            schema,
            values,
            unknown_fields: Map::new(),
        })
    }

    /// The schema this record is an instance of.
    pub fn schema(&self) -> &'static Schema {
        self.schema
    }

    /// Read a declared field.
    pub fn get(&self, name: &str) -> ItemResult<&FieldValue> {
        let index = self.index_of(name)?;
        Ok(&self.values[index])
    }

    /// Overwrite a declared field.
    pub fn set(&mut self, name: &str, value: impl Into<FieldValue>) -> ItemResult<()> {
        let index = self.index_of(name)?;
        self.values[index] = value.into();
        Ok(())
    }

    /// Declared fields and their values, in declaration order.
    pub fn fields(&self) -> impl Iterator<Item = (&str, &FieldValue)> {
        self.schema
            .fields()
            .iter()
            .map(|definition| definition.name.as_str())
            .zip(self.values.iter())
    }

    /// Input keys that matched no declared field, with their raw values.
    pub fn unknown_fields(&self) -> &Map<String, Value> {
        &self.unknown_fields
    }

    pub(crate) fn with_unknown_fields(mut self, unknown_fields: Map<String, Value>) -> Self {
        self.unknown_fields = unknown_fields;
        self
    }

    /// Serialize to JSON: declared non-null fields, then unknown fields.
    pub fn to_json(&self) -> ItemResult<Value> {
        Ok(serde_json::to_value(self)?)
    }

    fn index_of(&self, name: &str) -> ItemResult<usize> {
        self.schema
            .field_index(name)
            .ok_or_else(|| ItemError::no_such_attribute(self.schema.name(), name))
    }
}

impl PartialEq for Record {
    fn eq(&self, other: &Self) -> bool {
        std::ptr::eq(self.schema, other.schema)
            && self.values == other.values
            && self.unknown_fields == other.unknown_fields
    }
}

impl Serialize for Record {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        let present: Vec<(&str, &FieldValue)> =
            self.fields().filter(|(_, value)| !value.is_null()).collect();

        let mut map = serializer.serialize_map(Some(present.len() + self.unknown_fields.len()))?;
        for (name, value) in present {
            map.serialize_entry(name, value)?;
        }
        for (name, value) in &self.unknown_fields {
            map.serialize_entry(name, value)?;
        }
        map.end()
    }
}
