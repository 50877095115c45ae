//! Item records and their reconstruction from JSON.
//!
//! - [`Record`] - Instance of a data container schema with a closed field set
//! - [`FieldValue`] - Value held by a declared field
//! - [`is_data_container`] - Whether a schema, record or value is a data container
//!
//! Records are built either strictly with [`Record::new`], where every field
//! name must be declared, or leniently with [`Schema::from_dict`](crate::schema::Schema::from_dict),
//! where undeclared keys are kept in [`Record::unknown_fields`].

pub mod container;
mod from_dict;
pub mod record;

pub use container::{ContainerCandidate, is_data_container};
pub use record::{FieldValue, Record};
