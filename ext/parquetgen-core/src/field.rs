//! The Field model shared by both resolution paths.

use std::fmt;

use parquet::basic::Type as PhysicalType;
use serde::{Serialize, Serializer};

use crate::schema::{CategoryKind, PrimitiveType, Repetition};
use crate::{Result, SchemaError};

/// Physical kind plus the leaf's own nullability, e.g. `numericOptional`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Category {
    pub kind: CategoryKind,
    pub repetition: Repetition,
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}{}", self.kind.as_str(), self.repetition.suffix())
    }
}

impl Serialize for Category {
    fn serialize<S: Serializer>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}

/// One stored leaf column, identified by its full root-to-leaf path.
///
/// `field_names`, `field_types` and `repetition_types` are parallel and
/// never empty. The variant tag, type name and category are derived from
/// the last repetition only; ancestors contribute to the chain but never
/// to the leaf's own category.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Field {
    /// Owning record type
    pub type_name_owner: String,
    /// Accessor variant tag, e.g. `Int32OptionalField`
    pub field_type: String,
    pub primitive_type: PrimitiveType,
    /// Rust type carrying the nullability marker, e.g. `Option<i32>`
    pub type_name: String,
    pub field_names: Vec<String>,
    pub field_types: Vec<String>,
    pub column_name: String,
    pub category: Category,
    pub repetition_types: Vec<Repetition>,
}

/// One level of a root-to-leaf path
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct Level {
    pub name: String,
    pub column: String,
    pub type_name: String,
    pub repetition: Repetition,
}

impl Field {
    /// Build the Field for a leaf below `ancestors`
    pub(crate) fn from_path(
        owner: &str,
        ancestors: &[Level],
        leaf: &Level,
        primitive_type: PrimitiveType,
    ) -> Self {
        let levels = || ancestors.iter().chain(std::iter::once(leaf));
        let repetition = leaf.repetition;

        Field {
            type_name_owner: owner.to_string(),
            field_type: format!(
                "{}{}Field",
                primitive_type.field_prefix(),
                repetition.suffix()
            ),
            primitive_type,
            type_name: repetition.wrap_type(primitive_type.rust_type()),
            field_names: levels().map(|l| l.name.clone()).collect(),
            field_types: levels().map(|l| l.type_name.clone()).collect(),
            column_name: levels()
                .map(|l| l.column.as_str())
                .collect::<Vec<_>>()
                .join("."),
            category: Category {
                kind: primitive_type.category_kind(),
                repetition,
            },
            repetition_types: levels().map(|l| l.repetition).collect(),
        }
    }

    pub fn physical_type(&self) -> PhysicalType {
        self.primitive_type.physical_type()
    }

    /// Whether the leaf itself may be absent
    pub fn is_optional(&self) -> bool {
        self.category.repetition != Repetition::Required
    }

    /// Number of levels that may be absent, the highest definition level
    pub fn max_definition_level(&self) -> usize {
        self.repetition_types
            .iter()
            .filter(|r| **r != Repetition::Required)
            .count()
    }

    /// Number of repeated levels, the highest repetition level
    pub fn max_repetition_level(&self) -> usize {
        self.repetition_types
            .iter()
            .filter(|r| **r == Repetition::Repeated)
            .count()
    }
}

/// The ordered Fields of one schema or type plus every error met on the way
#[derive(Debug, Default)]
pub struct Resolution {
    pub fields: Vec<Field>,
    pub errors: Vec<SchemaError>,
}

impl Resolution {
    /// A resolution aborted by a structural error: no Fields survive
    pub(crate) fn failed(error: SchemaError) -> Self {
        Self {
            fields: Vec::new(),
            errors: vec![error],
        }
    }

    pub fn is_complete(&self) -> bool {
        self.errors.is_empty()
    }

    /// Convert into a plain result, failing on the first recorded error
    pub fn into_result(self) -> Result<Vec<Field>> {
        match self.errors.into_iter().next() {
            Some(err) => Err(err),
            None => Ok(self.fields),
        }
    }
}
