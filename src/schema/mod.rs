//! Schema declarations for item records.
//!
//! # Key Types
//!
//! - [`Schema`] - Declared record type with its closed field set
//! - [`TypeAnnotation`] - Declared type of a field
//! - [`ItemRegistry`] - Lookup of schemas by type name
//!
//! # Examples
//!
//! ```rust
//! use common_items::schema::{Schema, TypeAnnotation, ITEM};
//! use std::sync::LazyLock;
//!
//! static SUB_ITEM: LazyLock<Schema> = LazyLock::new(|| {
//!     Schema::builder("SubItem")
//!         .extends(&ITEM)
//!         .required("name", TypeAnnotation::String)
//!         .build()
//! });
//!
//! assert!(SUB_ITEM.declares("name"));
//! ```

pub mod embedded;
pub mod registry;
pub mod types;


pub use embedded::{
    ADDITIONAL_PROPERTY, AGGREGATE_RATING, BRAND, BREADCRUMB, GTIN, IMAGE, ITEM, PRODUCT,
    PRODUCT_METADATA,
};
pub use registry::ItemRegistry;
pub use types::{FieldDefinition, Schema, SchemaBuilder, TypeAnnotation};
