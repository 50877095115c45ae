//! Classification of data containers.
//!
//! A data container is the base [`ITEM`] schema or any schema that extends it,
//! directly or through other schemas. Records classify by their schema.

use crate::item::record::Record;
use crate::schema::{ITEM, Schema};
use serde_json::Value;
use std::sync::LazyLock;

/// Something that may or may not be a data container type or instance.
///
/// Types with no container semantics implement this with the default method.
pub trait ContainerCandidate {
    /// The schema this candidate is, or is an instance of.
    fn container_type(&self) -> Option<&Schema> {
        None
    }
}

impl ContainerCandidate for Schema {
    fn container_type(&self) -> Option<&Schema> {
        Some(self)
    }
}

impl ContainerCandidate for Record {
    fn container_type(&self) -> Option<&Schema> {
        Some(self.schema())
    }
}

impl<T, F> ContainerCandidate for LazyLock<T, F>
where
    T: ContainerCandidate,
    F: FnOnce() -> T,
{
    fn container_type(&self) -> Option<&Schema> {
        (**self).container_type()
    }
}

impl<T: ContainerCandidate + ?Sized> ContainerCandidate for &T {
    fn container_type(&self) -> Option<&Schema> {
        (**self).container_type()
    }
}

impl ContainerCandidate for Value {}

/// Whether `candidate` is the base item schema, a descendant of it, or a
/// record of one.
pub fn is_data_container<C: ContainerCandidate + ?Sized>(candidate: &C) -> bool {
    candidate
        .container_type()
        .is_some_and(|schema| schema.descends_from(&ITEM))
}
