//! Schema registry for looking up item schemas by name.
//!
//! The registry lets callers that only know a type name at runtime (for
//! example from a `"type"` tag in upstream data) reach the matching schema
//! and reconstruct records with it.

use super::embedded;
use super::types::Schema;
use crate::error::{ItemError, ItemResult};
use crate::item::Record;
use log::debug;
use serde_json::{Map, Value};
use std::collections::HashMap;

/// Registry of item schemas keyed by type name.
#[derive(Debug, Clone)]
pub struct ItemRegistry {
    schemas: HashMap<String, &'static Schema>,
}

impl ItemRegistry {
    /// Create a registry holding the built-in schemas.
    pub fn new() -> Self {
        let mut registry = Self::empty();
        for schema in embedded::builtin_schemas() {
            registry.register(schema);
        }
        registry
    }

    /// Create a registry with no schemas.
    pub fn empty() -> Self {
        Self {
            schemas: HashMap::new(),
        }
    }

    /// Register a schema under its own name, returning any schema it replaced.
    pub fn register(&mut self, schema: &'static Schema) -> Option<&'static Schema> {
        let replaced = self.schemas.insert(schema.name().to_string(), schema);
        if replaced.is_some() {
            debug!("Replaced registered schema '{}'", schema.name());
        }
        replaced
    }

    /// Get a schema by name.
    pub fn get(&self, name: &str) -> Option<&'static Schema> {
        self.schemas.get(name).copied()
    }

    /// Get all registered schemas.
    pub fn schemas(&self) -> Vec<&'static Schema> {
        self.schemas.values().copied().collect()
    }

    /// Reconstruct a record using the schema registered under `name`.
    pub fn from_dict(&self, name: &str, raw: &Map<String, Value>) -> ItemResult<Record> {
        let schema = self.get(name).ok_or_else(|| ItemError::UnknownSchema {
            name: name.to_string(),
        })?;
        schema.from_dict(raw)
    }
}

impl Default for ItemRegistry {
    fn default() -> Self {
        Self::new()
    }
}
