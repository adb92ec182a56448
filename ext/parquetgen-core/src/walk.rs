//! Tree walking shared by the schema resolver and the type introspector.
//!
//! Both sides describe their tree as a pre-order stream of [`WalkEvent`]s;
//! they differ only in where the next sibling comes from (a flattened
//! footer array or a declared-field list). [`walk`] turns any such stream
//! into Fields.

use tracing::{debug, warn};

use crate::field::{Field, Level, Resolution};
use crate::schema::PrimitiveType;
use crate::{Result, SchemaError};

#[derive(Debug)]
pub(crate) enum WalkEvent {
    /// Descend into a group; its level becomes part of every path below it
    Enter(Level),
    /// Emit one Field for a leaf under the current path
    Leaf(Level, PrimitiveType),
    /// Leave the innermost group
    Exit,
    /// A recoverable, per-field error; the field contributes nothing
    Skip(SchemaError),
}

/// Drive a stream of events to completion.
///
/// An `Err` item is structural: the walk stops and no Fields are returned.
pub(crate) fn walk<I>(owner: &str, events: I) -> Resolution
where
    I: IntoIterator<Item = Result<WalkEvent>>,
{
    let mut path: Vec<Level> = Vec::new();
    let mut resolution = Resolution::default();

    for event in events {
        match event {
            Ok(WalkEvent::Enter(level)) => path.push(level),
            Ok(WalkEvent::Leaf(level, primitive_type)) => {
                resolution
                    .fields
                    .push(Field::from_path(owner, &path, &level, primitive_type));
            }
            Ok(WalkEvent::Exit) => {
                path.pop();
            }
            Ok(WalkEvent::Skip(err)) => {
                debug!(owner, error = %err, "skipping field");
                resolution.errors.push(err);
            }
            Err(err) => {
                warn!(owner, error = %err, "schema resolution aborted");
                return Resolution::failed(err);
            }
        }
    }

    debug!(
        owner,
        fields = resolution.fields.len(),
        errors = resolution.errors.len(),
        "resolved fields"
    );
    resolution
}
