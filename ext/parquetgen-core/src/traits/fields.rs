use crate::{Field, Resolution};

/// Trait for field introspection
///
/// This trait provides methods for examining and querying resolved
/// Fields without modifying them.
pub trait FieldLookup {
    /// Get the total number of leaf columns
    fn field_count(&self) -> usize;

    /// Get field by column name (e.g., "hobby.name")
    fn field_by_column(&self, column: &str) -> Option<&Field>;

    /// Check if a leaf column exists
    fn has_column(&self, column: &str) -> bool {
        self.field_by_column(column).is_some()
    }

    /// Get all column names in document order
    fn column_names(&self) -> Vec<&str>;
}

impl FieldLookup for [Field] {
    fn field_count(&self) -> usize {
        self.len()
    }

    fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.iter().find(|f| f.column_name == column)
    }

    fn column_names(&self) -> Vec<&str> {
        self.iter().map(|f| f.column_name.as_str()).collect()
    }
}

impl FieldLookup for Resolution {
    fn field_count(&self) -> usize {
        self.fields.field_count()
    }

    fn field_by_column(&self, column: &str) -> Option<&Field> {
        self.fields.field_by_column(column)
    }

    fn column_names(&self) -> Vec<&str> {
        self.fields.column_names()
    }
}
