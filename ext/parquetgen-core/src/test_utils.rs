//! Test utilities for parquetgen-core

#[cfg(test)]
pub mod test {
    use crate::{DeclaredField, Declarations, RecordDecl, Repetition, SchemaNode};
    use parquet::basic::{ConvertedType, Type as PhysicalType};

    /// A required `hobby` group of two optional leaves, then a required `id`
    pub fn hobby_schema() -> Vec<SchemaNode> {
        vec![
            SchemaNode::root("schema", 2),
            SchemaNode::group("hobby", Repetition::Required, 2),
            SchemaNode::leaf("name", PhysicalType::BYTE_ARRAY, Repetition::Optional)
                .with_converted_type(ConvertedType::UTF8),
            SchemaNode::leaf("difficulty", PhysicalType::INT32, Repetition::Optional),
            SchemaNode::leaf("id", PhysicalType::INT32, Repetition::Required),
        ]
    }

    /// `Being` plus a `Nested` record holding it under a named field
    pub fn nested_declarations() -> Declarations {
        Declarations::new()
            .with_record(
                RecordDecl::new("Being")
                    .with_field(DeclaredField::new("id", "i32"))
                    .with_field(DeclaredField::new("age", "i32").optional()),
            )
            .with_record(
                RecordDecl::new("Nested")
                    .with_field(DeclaredField::new("being", "Being"))
                    .with_field(DeclaredField::new("anniversary", "u64").optional()),
            )
    }
}
