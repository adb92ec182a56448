//! Schema and field resolution for Parquet code generation
//!
//! `parquetgen-core` turns a schema into an ordered list of [`Field`]s, one
//! per stored leaf column, each annotated with its full root-to-leaf path
//! and the repetition of every level on that path. An encoder uses that
//! chain to compute definition and repetition levels.
//!
//! # Key Components
//!
//! - **Field**: the shared output model
//!   - Identifier path, declared type path and dot-joined column name
//!   - Category (`numeric`, `stringOptional`, ...) from the leaf's own repetition
//!
//! - **SchemaTreeResolver**: read direction
//!   - Rebuilds paths from the flattened, pre-order array stored in a footer
//!   - [`SchemaNode::flatten`] produces that array from a parquet-rs schema
//!   - Malformed arrays are fatal: no Fields are returned
//!
//! - **TypeIntrospector**: write direction
//!   - Walks a record type's declared fields, depth-first
//!   - Declarations come from any [`DeclarationSource`], such as Rust source
//!     parsed into [`Declarations`]
//!   - Unsupported fields are skipped with one error each
//!
//! Both resolvers share one tree walk and return a [`Resolution`]: the
//! Fields plus every error met, in order.

pub mod declaration;
pub mod error;
pub mod field;
pub mod introspect;
pub mod resolver;
pub mod schema;
pub mod traits;
mod walk;

#[cfg(test)]
pub mod test_utils;

pub use declaration::{Annotation, DeclarationSource, DeclaredField, Declarations, RecordDecl};
pub use error::{ErrorContext, Result, SchemaError};
pub use field::{Category, Field, Resolution};
pub use introspect::TypeIntrospector;
pub use resolver::SchemaTreeResolver;
pub use schema::{CategoryKind, PrimitiveType, Repetition, SchemaNode};
pub use traits::FieldLookup;
