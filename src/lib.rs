//! Schema-described item records for Rust.
//!
//! Provides data containers with a closed, typed field set, annotation-driven
//! reconstruction from JSON mappings, and retention of input keys no schema
//! declares.
//!
//! # Core Components
//!
//! - [`Schema`] - Declared record type; [`ITEM`] is the root of all data containers
//! - [`Record`] - Instance of a schema, holding declared fields and unknown fields
//! - [`is_data_container`] - Classification of schemas, records and other values
//! - [`ItemRegistry`] - Schema lookup by type name
//!
//! # Quick Start
//!
//! ```rust
//! use common_items::{PRODUCT, is_data_container};
//! use serde_json::json;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let raw = json!({
//!     "url": "https://example.com/?product=product22",
//!     "aggregateRating": {"ratingValue": 4.5, "worstRating": 0},
//!     "sponsored": true
//! });
//! let product = PRODUCT.from_json(&raw)?;
//!
//! assert!(is_data_container(&product));
//! assert_eq!(product.unknown_fields()["sponsored"], json!(true));
//! # Ok(())
//! # }
//! ```

pub mod error;
pub mod item;
pub mod schema;

// Re-export commonly used types for convenience
pub use error::{ErrorKind, ItemError, ItemResult};
pub use item::{ContainerCandidate, FieldValue, Record, is_data_container};
pub use schema::{
    ADDITIONAL_PROPERTY, AGGREGATE_RATING, BRAND, BREADCRUMB, FieldDefinition, GTIN, IMAGE, ITEM,
    ItemRegistry, PRODUCT, PRODUCT_METADATA, Schema, SchemaBuilder, TypeAnnotation,
};
