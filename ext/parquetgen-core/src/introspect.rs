//! Derives Fields from a record type's declared fields.

use crate::declaration::{DeclarationSource, DeclaredField, RecordDecl};
use crate::field::{Level, Resolution};
use crate::schema::{PrimitiveType, Repetition};
use crate::walk::{walk, WalkEvent};
use crate::{Result, SchemaError};

/// Expands a record type into one Field per stored leaf.
///
/// Nested records are expanded depth-first in declaration order. Fields
/// with unsupported types are skipped with one error each; everything
/// else is still returned.
pub struct TypeIntrospector<'a, S: DeclarationSource + ?Sized> {
    source: &'a S,
}

impl<'a, S: DeclarationSource + ?Sized> TypeIntrospector<'a, S> {
    pub fn new(source: &'a S) -> Self {
        Self { source }
    }

    /// Resolve `type_name`; only a missing root type fails the whole call
    pub fn fields(&self, type_name: &str) -> Result<Resolution> {
        let source: &'a S = self.source;
        let record = source
            .record(type_name)
            .ok_or_else(|| SchemaError::TypeNotFound(type_name.to_string()))?;
        Ok(walk(type_name, DeclaredFields::new(source, record)))
    }
}

struct Frame<'a> {
    record: &'a str,
    fields: std::slice::Iter<'a, DeclaredField>,
    /// Whether this record added a path segment (and so needs an exit)
    nested: bool,
}

impl<'a> Frame<'a> {
    fn new(record: &'a RecordDecl, nested: bool) -> Self {
        Self {
            record: &record.name,
            fields: record.fields.iter(),
            nested,
        }
    }
}

/// Event stream over declared-field lists, one frame per open record
struct DeclaredFields<'a, S: ?Sized> {
    source: &'a S,
    stack: Vec<Frame<'a>>,
}

impl<'a, S: DeclarationSource + ?Sized> DeclaredFields<'a, S> {
    fn new(source: &'a S, root: &'a RecordDecl) -> Self {
        Self {
            source,
            stack: vec![Frame::new(root, false)],
        }
    }

    /// Classify one field; `None` means it produced no event of its own
    fn visit(&mut self, field: &'a DeclaredField) -> Option<WalkEvent> {
        if field.is_ignored() {
            return None;
        }

        if let Some(primitive_type) = PrimitiveType::from_rust_type(&field.type_name) {
            let level = Level {
                name: field.name.clone(),
                column: field.column_name().to_string(),
                type_name: primitive_type.rust_type().to_string(),
                repetition: field.repetition,
            };
            return Some(WalkEvent::Leaf(level, primitive_type));
        }

        let source: &'a S = self.source;
        let Some(record) = source.record(&field.type_name) else {
            return Some(WalkEvent::Skip(SchemaError::unsupported(
                field.type_name.clone(),
            )));
        };
        if self.stack.iter().any(|frame| frame.record == record.name) {
            return Some(WalkEvent::Skip(SchemaError::RecursiveType(
                record.name.clone(),
            )));
        }

        if field.embedded {
            // spliced children have no level of their own to carry nullability
            if field.repetition != Repetition::Required {
                return Some(WalkEvent::Skip(SchemaError::unsupported(
                    field.repetition.wrap_type(&field.type_name),
                )));
            }
            self.stack.push(Frame::new(record, false));
            return None;
        }

        self.stack.push(Frame::new(record, true));
        Some(WalkEvent::Enter(Level {
            name: field.name.clone(),
            column: field.column_name().to_string(),
            type_name: record.name.clone(),
            repetition: field.repetition,
        }))
    }
}

impl<'a, S: DeclarationSource + ?Sized> Iterator for DeclaredFields<'a, S> {
    type Item = Result<WalkEvent>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            let next_field = self.stack.last_mut()?.fields.next();
            match next_field {
                Some(field) => {
                    if let Some(event) = self.visit(field) {
                        return Some(Ok(event));
                    }
                }
                None => {
                    let finished = self.stack.pop()?;
                    if finished.nested {
                        return Some(Ok(WalkEvent::Exit));
                    }
                }
            }
        }
    }
}
