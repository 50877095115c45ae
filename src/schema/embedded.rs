//! Built-in item schemas.
//!
//! [`ITEM`] is the root every data container descends from. The remaining
//! statics describe a product page and the component records it nests.

use super::types::{Schema, TypeAnnotation};
use std::sync::LazyLock;

/// Base data container. Declares no fields.
pub static ITEM: LazyLock<Schema> = LazyLock::new(|| Schema::builder("Item").build());

/// Rating summary of a product.
pub static AGGREGATE_RATING: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("AggregateRating")
        .extends(&ITEM)
        .optional("bestRating", TypeAnnotation::Float)
        .optional("ratingValue", TypeAnnotation::Float)
        .optional("reviewCount", TypeAnnotation::Integer)
        .build()
});

/// Name/value pair describing a product property.
pub static ADDITIONAL_PROPERTY: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("AdditionalProperty")
        .extends(&ITEM)
        .required("name", TypeAnnotation::String)
        .required("value", TypeAnnotation::String)
        .build()
});

pub static BRAND: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("Brand")
        .extends(&ITEM)
        .required("name", TypeAnnotation::String)
        .build()
});

/// One link in a breadcrumb trail.
pub static BREADCRUMB: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("Breadcrumb")
        .extends(&ITEM)
        .optional("name", TypeAnnotation::String)
        .optional("url", TypeAnnotation::String)
        .build()
});

pub static IMAGE: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("Image")
        .extends(&ITEM)
        .required("url", TypeAnnotation::String)
        .build()
});

/// Global trade item number, e.g. `{"type": "gtin13", "value": "..."}`.
pub static GTIN: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("Gtin")
        .extends(&ITEM)
        .required("type", TypeAnnotation::String)
        .required("value", TypeAnnotation::String)
        .build()
});

/// Extraction metadata attached to a product.
pub static PRODUCT_METADATA: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("ProductMetadata")
        .extends(&ITEM)
        .optional("dateDownloaded", TypeAnnotation::String)
        .optional("probability", TypeAnnotation::Float)
        .build()
});

/// Product details page. Only `url` is required.
pub static PRODUCT: LazyLock<Schema> = LazyLock::new(|| {
    Schema::builder("Product")
        .extends(&ITEM)
        .required("url", TypeAnnotation::String)
        .optional("canonicalUrl", TypeAnnotation::String)
        .optional("name", TypeAnnotation::String)
        .optional("price", TypeAnnotation::String)
        .optional("currency", TypeAnnotation::String)
        .optional("currencyRaw", TypeAnnotation::String)
        .optional("regularPrice", TypeAnnotation::String)
        .optional("availability", TypeAnnotation::String)
        .optional("sku", TypeAnnotation::String)
        .optional("mpn", TypeAnnotation::String)
        .optional("productId", TypeAnnotation::String)
        .optional("color", TypeAnnotation::String)
        .optional("size", TypeAnnotation::String)
        .optional("style", TypeAnnotation::String)
        .optional("description", TypeAnnotation::String)
        .optional("descriptionHtml", TypeAnnotation::String)
        .optional("features", TypeAnnotation::list(TypeAnnotation::String))
        .optional("brand", TypeAnnotation::container(&BRAND))
        .optional(
            "breadcrumbs",
            TypeAnnotation::list(TypeAnnotation::container(&BREADCRUMB)),
        )
        .optional("mainImage", TypeAnnotation::container(&IMAGE))
        .optional("images", TypeAnnotation::list(TypeAnnotation::container(&IMAGE)))
        .optional("gtin", TypeAnnotation::list(TypeAnnotation::container(&GTIN)))
        .optional(
            "additionalProperties",
            TypeAnnotation::list(TypeAnnotation::container(&ADDITIONAL_PROPERTY)),
        )
        .optional("aggregateRating", TypeAnnotation::container(&AGGREGATE_RATING))
        .optional("metadata", TypeAnnotation::container(&PRODUCT_METADATA))
        .build()
});

/// Every built-in schema, base first.
pub fn builtin_schemas() -> [&'static Schema; 9] {
    [
        &*ITEM,
        &*AGGREGATE_RATING,
        &*ADDITIONAL_PROPERTY,
        &*BRAND,
        &*BREADCRUMB,
        &*IMAGE,
        &*GTIN,
        &*PRODUCT_METADATA,
        &*PRODUCT,
    ]
}
