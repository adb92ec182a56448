use parquet::basic::{ConvertedType, Repetition as ParquetRepetition, Type as PhysicalType};
use parquet::schema::types::Type;
use serde::Serialize;

/// Represents how values are repeated in Parquet
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Repetition {
    /// Field must have exactly one value
    Required,
    /// Field can have 0 or 1 value
    Optional,
    /// Field can have 0 or more values
    Repeated,
}

impl Repetition {
    /// Suffix used in accessor tags and categories
    pub fn suffix(&self) -> &'static str {
        match self {
            Repetition::Required => "",
            Repetition::Optional => "Optional",
            Repetition::Repeated => "Repeated",
        }
    }

    /// Wraps a Rust type name in the marker carrying this repetition
    pub fn wrap_type(&self, type_name: &str) -> String {
        match self {
            Repetition::Required => type_name.to_string(),
            Repetition::Optional => format!("Option<{}>", type_name),
            Repetition::Repeated => format!("Vec<{}>", type_name),
        }
    }
}

impl From<ParquetRepetition> for Repetition {
    fn from(value: ParquetRepetition) -> Self {
        match value {
            ParquetRepetition::REQUIRED => Repetition::Required,
            ParquetRepetition::OPTIONAL => Repetition::Optional,
            ParquetRepetition::REPEATED => Repetition::Repeated,
        }
    }
}

/// Leaf types a Field can carry
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum PrimitiveType {
    Int32,
    Int64,
    UInt32,
    UInt64,
    Float32,
    Float64,
    Boolean,
    String,
}

/// Broad grouping used to build a Field's category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum CategoryKind {
    Numeric,
    Bool,
    String,
}

impl CategoryKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            CategoryKind::Numeric => "numeric",
            CategoryKind::Bool => "bool",
            CategoryKind::String => "string",
        }
    }
}

impl PrimitiveType {
    /// Prefix of the accessor tag, e.g. `Uint64` in `Uint64OptionalField`
    pub fn field_prefix(&self) -> &'static str {
        match self {
            PrimitiveType::Int32 => "Int32",
            PrimitiveType::Int64 => "Int64",
            PrimitiveType::UInt32 => "Uint32",
            PrimitiveType::UInt64 => "Uint64",
            PrimitiveType::Float32 => "Float32",
            PrimitiveType::Float64 => "Float64",
            PrimitiveType::Boolean => "Bool",
            PrimitiveType::String => "String",
        }
    }

    /// The Rust type that holds one value of this type
    pub fn rust_type(&self) -> &'static str {
        match self {
            PrimitiveType::Int32 => "i32",
            PrimitiveType::Int64 => "i64",
            PrimitiveType::UInt32 => "u32",
            PrimitiveType::UInt64 => "u64",
            PrimitiveType::Float32 => "f32",
            PrimitiveType::Float64 => "f64",
            PrimitiveType::Boolean => "bool",
            PrimitiveType::String => "String",
        }
    }

    /// Look up the type for a declared Rust type name
    pub fn from_rust_type(name: &str) -> Option<Self> {
        Some(match name {
            "i32" => PrimitiveType::Int32,
            "i64" => PrimitiveType::Int64,
            "u32" => PrimitiveType::UInt32,
            "u64" => PrimitiveType::UInt64,
            "f32" => PrimitiveType::Float32,
            "f64" => PrimitiveType::Float64,
            "bool" => PrimitiveType::Boolean,
            "String" => PrimitiveType::String,
            _ => return None,
        })
    }

    /// Map a stored physical type (plus its converted type annotation)
    pub fn from_physical(physical: PhysicalType, converted: ConvertedType) -> Option<Self> {
        Some(match (physical, converted) {
            (PhysicalType::BOOLEAN, _) => PrimitiveType::Boolean,
            (
                PhysicalType::INT32,
                ConvertedType::UINT_8 | ConvertedType::UINT_16 | ConvertedType::UINT_32,
            ) => PrimitiveType::UInt32,
            (PhysicalType::INT32, _) => PrimitiveType::Int32,
            (PhysicalType::INT64, ConvertedType::UINT_64) => PrimitiveType::UInt64,
            (PhysicalType::INT64, _) => PrimitiveType::Int64,
            (PhysicalType::FLOAT, _) => PrimitiveType::Float32,
            (PhysicalType::DOUBLE, _) => PrimitiveType::Float64,
            (PhysicalType::BYTE_ARRAY, _) => PrimitiveType::String,
            _ => return None,
        })
    }

    /// Physical storage type on disk
    pub fn physical_type(&self) -> PhysicalType {
        match self {
            PrimitiveType::Int32 | PrimitiveType::UInt32 => PhysicalType::INT32,
            PrimitiveType::Int64 | PrimitiveType::UInt64 => PhysicalType::INT64,
            PrimitiveType::Float32 => PhysicalType::FLOAT,
            PrimitiveType::Float64 => PhysicalType::DOUBLE,
            PrimitiveType::Boolean => PhysicalType::BOOLEAN,
            PrimitiveType::String => PhysicalType::BYTE_ARRAY,
        }
    }

    /// Converted type annotation written next to the physical type
    pub fn converted_type(&self) -> ConvertedType {
        match self {
            PrimitiveType::UInt32 => ConvertedType::UINT_32,
            PrimitiveType::UInt64 => ConvertedType::UINT_64,
            PrimitiveType::String => ConvertedType::UTF8,
            _ => ConvertedType::NONE,
        }
    }

    pub fn category_kind(&self) -> CategoryKind {
        match self {
            PrimitiveType::Boolean => CategoryKind::Bool,
            PrimitiveType::String => CategoryKind::String,
            _ => CategoryKind::Numeric,
        }
    }
}

/// One element of a flattened, pre-order Parquet schema.
///
/// Element 0 is the implicit root and carries only a name and a child
/// count. Every other element is either a leaf (it has a physical type)
/// or a group (it has a child count and no physical type).
#[derive(Debug, Clone, PartialEq)]
pub struct SchemaNode {
    pub name: String,
    pub physical_type: Option<PhysicalType>,
    pub converted_type: ConvertedType,
    pub repetition: Option<Repetition>,
    pub num_children: Option<usize>,
}

impl SchemaNode {
    pub fn root<S: Into<String>>(name: S, num_children: usize) -> Self {
        Self {
            name: name.into(),
            physical_type: None,
            converted_type: ConvertedType::NONE,
            repetition: None,
            num_children: Some(num_children),
        }
    }

    pub fn group<S: Into<String>>(name: S, repetition: Repetition, num_children: usize) -> Self {
        Self {
            name: name.into(),
            physical_type: None,
            converted_type: ConvertedType::NONE,
            repetition: Some(repetition),
            num_children: Some(num_children),
        }
    }

    pub fn leaf<S: Into<String>>(
        name: S,
        physical_type: PhysicalType,
        repetition: Repetition,
    ) -> Self {
        Self {
            name: name.into(),
            physical_type: Some(physical_type),
            converted_type: ConvertedType::NONE,
            repetition: Some(repetition),
            num_children: None,
        }
    }

    /// Attach a converted type annotation (e.g. `UINT_64`, `UTF8`)
    pub fn with_converted_type(mut self, converted_type: ConvertedType) -> Self {
        self.converted_type = converted_type;
        self
    }

    pub fn is_leaf(&self) -> bool {
        self.physical_type.is_some()
    }

    /// Flatten a parquet-rs schema tree into its pre-order footer layout
    pub fn flatten(schema: &Type) -> Vec<SchemaNode> {
        let mut nodes = Vec::new();
        flatten_into(schema, true, &mut nodes);
        nodes
    }
}

fn flatten_into(ty: &Type, is_root: bool, nodes: &mut Vec<SchemaNode>) {
    let info = ty.get_basic_info();
    let repetition = if !is_root && info.has_repetition() {
        Some(Repetition::from(info.repetition()))
    } else {
        None
    };

    if ty.is_primitive() {
        nodes.push(SchemaNode {
            name: info.name().to_string(),
            physical_type: Some(ty.get_physical_type()),
            converted_type: info.converted_type(),
            repetition,
            num_children: None,
        });
    } else {
        let fields = ty.get_fields();
        nodes.push(SchemaNode {
            name: info.name().to_string(),
            physical_type: None,
            converted_type: info.converted_type(),
            repetition,
            num_children: Some(fields.len()),
        });
        for field in fields {
            flatten_into(field, false, nodes);
        }
    }
}

/// Identifier casing for generated accessors: upper-case the first letter
pub fn identifier_case(name: &str) -> String {
    let mut chars = name.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}
