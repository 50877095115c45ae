//! Core schema type definitions for item records.
//!
//! A [`Schema`] declares the closed set of fields a record may carry. Each
//! field has a [`TypeAnnotation`], which is what reconstruction consults when
//! deciding whether an incoming JSON mapping becomes a nested record.

use std::fmt;

/// A declared record type.
///
/// Schemas are built once and live for the whole program, usually inside a
/// `LazyLock` static. Identity matters: ancestry is checked by address, so two
/// schemas with the same name and fields are still different types.
#[derive(Debug)]
pub struct Schema {
    name: String,
    base: Option<&'static Schema>,
    fields: Vec<FieldDefinition>,
}

impl Schema {
    /// Start declaring a schema with the given type name.
    pub fn builder(name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            base: None,
            fields: Vec::new(),
        }
    }

    /// Type name used in error messages and registry lookups.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The schema this one extends, if any.
    pub fn base(&self) -> Option<&'static Schema> {
        self.base
    }

    /// All declared fields, inherited ones first.
    pub fn fields(&self) -> &[FieldDefinition] {
        &self.fields
    }

    /// Look up a declared field by name.
    pub fn field(&self, name: &str) -> Option<&FieldDefinition> {
        self.fields.iter().find(|field| field.name == name)
    }

    /// Position of a declared field in [`Schema::fields`].
    pub fn field_index(&self, name: &str) -> Option<usize> {
        self.fields.iter().position(|field| field.name == name)
    }

    /// Whether `name` is a declared field.
    pub fn declares(&self, name: &str) -> bool {
        self.field_index(name).is_some()
    }

    /// This schema followed by each of its bases, nearest first.
    pub fn lineage(&self) -> impl Iterator<Item = &Schema> {
        std::iter::successors(Some(self), |schema| schema.base)
    }

    /// Whether `ancestor` is this schema or appears in its base chain.
    pub fn descends_from(&self, ancestor: &Schema) -> bool {
        self.lineage().any(|schema| std::ptr::eq(schema, ancestor))
    }
}

impl fmt::Display for Schema {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.name)
    }
}

/// Fluent declaration of a [`Schema`].
///
/// Fields from the base schema are copied first. Declaring a field with an
/// inherited name replaces the inherited definition in place.
#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    base: Option<&'static Schema>,
    fields: Vec<FieldDefinition>,
}

impl SchemaBuilder {
    /// Inherit from `base`.
    pub fn extends(mut self, base: &'static Schema) -> Self {
        self.base = Some(base);
        self
    }

    /// Declare a field.
    pub fn field(mut self, definition: FieldDefinition) -> Self {
        self.fields.push(definition);
        self
    }

    /// Declare a required field.
    pub fn required(self, name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        self.field(FieldDefinition::required(name, annotation))
    }

    /// Declare an optional field that defaults to null.
    pub fn optional(self, name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        self.field(FieldDefinition::optional(name, annotation))
    }

    pub fn build(self) -> Schema {
        let mut fields: Vec<FieldDefinition> = self
            .base
            .map(|base| base.fields.clone())
            .unwrap_or_default();

        for definition in self.fields {
            match fields.iter_mut().find(|field| field.name == definition.name) {
                Some(existing) => *existing = definition,
                None => fields.push(definition),
            }
        }

        Schema {
            name: self.name,
            base: self.base,
            fields,
        }
    }
}

/// Definition of a single declared field.
#[derive(Debug, Clone)]
pub struct FieldDefinition {
    /// Field name, matched exactly against input keys
    pub name: String,
    /// Declared type of the field
    pub annotation: TypeAnnotation,
    /// Whether construction fails when the field is absent
    pub required: bool,
}

impl FieldDefinition {
    pub fn required(name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            annotation,
            required: true,
        }
    }

    pub fn optional(name: impl Into<String>, annotation: TypeAnnotation) -> Self {
        Self {
            name: name.into(),
            annotation,
            required: false,
        }
    }
}

/// Declared type of a field.
///
/// Mirrors what a type annotation can say about a field: a plain value, a
/// nested record of a specific schema, a list, an optional value, or a union
/// of alternatives.
#[derive(Debug, Clone)]
pub enum TypeAnnotation {
    /// String value
    String,
    /// Integer number
    Integer,
    /// Decimal number
    Float,
    /// Boolean value
    Boolean,
    /// Any JSON value, kept opaque
    Any,
    /// The null marker, only meaningful inside a union
    Null,
    /// Nested record of the given schema
    Container(&'static Schema),
    /// Sequence of the inner type
    List(Box<TypeAnnotation>),
    /// Inner type or null
    Optional(Box<TypeAnnotation>),
    /// One of several types
    Union(Vec<TypeAnnotation>),
}

impl TypeAnnotation {
    pub fn container(schema: &'static Schema) -> Self {
        Self::Container(schema)
    }

    pub fn list(inner: TypeAnnotation) -> Self {
        Self::List(Box::new(inner))
    }

    pub fn optional(inner: TypeAnnotation) -> Self {
        Self::Optional(Box::new(inner))
    }

    pub fn union(members: impl IntoIterator<Item = TypeAnnotation>) -> Self {
        Self::Union(members.into_iter().collect())
    }

    /// Strip `Optional` wrappers and null union members.
    ///
    /// Returns the single remaining type, or `None` when a union keeps more
    /// than one non-null member.
    pub fn non_null(&self) -> Option<&TypeAnnotation> {
        match self {
            Self::Optional(inner) => inner.non_null(),
            Self::Union(members) => {
                let mut remaining = members.iter().filter(|member| !matches!(member, Self::Null));
                match (remaining.next(), remaining.next()) {
                    (Some(only), None) => only.non_null(),
                    _ => None,
                }
            }
            other => Some(other),
        }
    }
}

impl fmt::Display for TypeAnnotation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::String => f.write_str("string"),
            Self::Integer => f.write_str("integer"),
            Self::Float => f.write_str("float"),
            Self::Boolean => f.write_str("boolean"),
            Self::Any => f.write_str("any"),
            Self::Null => f.write_str("null"),
            Self::Container(schema) => f.write_str(schema.name()),
            Self::List(inner) => write!(f, "List[{inner}]"),
            Self::Optional(inner) => write!(f, "Optional[{inner}]"),
            Self::Union(members) => {
                f.write_str("Union[")?;
                for (index, member) in members.iter().enumerate() {
                    if index > 0 {
                        f.write_str(", ")?;
                    }
                    write!(f, "{member}")?;
                }
                f.write_str("]")
            }
        }
    }
}
