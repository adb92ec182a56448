use thiserror::Error;

/// Core error type for schema and field resolution
#[derive(Error, Debug)]
pub enum SchemaError {
    /// The flattened schema array has no elements at all
    #[error("schema is empty")]
    EmptySchema,

    /// The first element of the flattened array does not carry a child count
    #[error("schema root '{0}' has no child count")]
    MissingRootChildren(String),

    /// A leaf uses a physical type with no mapping to a supported type
    #[error("unmapped physical type {physical_type} for column '{column}'")]
    UnmappedPhysicalType {
        column: String,
        physical_type: String,
    },

    /// A node carries neither a physical type nor a child count
    #[error("schema node '{0}' is neither a leaf nor a group")]
    MalformedNode(String),

    /// The array ended while groups were still waiting for children
    #[error("schema ended with {missing} declared children missing")]
    TruncatedSchema { missing: usize },

    /// Nodes remain after the root's children were exhausted
    #[error("schema has {0} trailing nodes after the root's children")]
    TrailingNodes(usize),

    /// A declared field type has no mapping to a supported type
    #[error("unsupported type: {0}")]
    UnsupportedType(String),

    /// A record type refers back to itself through its fields
    #[error("recursive type: {0}")]
    RecursiveType(String),

    /// The requested record type is not declared in the source
    #[error("type not found: {0}")]
    TypeNotFound(String),

    /// Rust source could not be parsed
    #[error("syntax error: {0}")]
    Syntax(#[from] syn::Error),

    /// IO errors from reading declaration sources
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// An error annotated with the operation that produced it
    #[error("{context}: {source}")]
    Context {
        context: String,
        #[source]
        source: Box<SchemaError>,
    },
}

/// Result type alias for schema operations
pub type Result<T> = std::result::Result<T, SchemaError>;

impl SchemaError {
    /// Create a new unsupported type error
    pub fn unsupported<S: Into<String>>(type_name: S) -> Self {
        SchemaError::UnsupportedType(type_name.into())
    }

    /// Whether this error aborts a whole resolve rather than a single field
    pub fn is_fatal(&self) -> bool {
        !matches!(
            self,
            SchemaError::UnsupportedType(_) | SchemaError::RecursiveType(_)
        )
    }
}

/// Extension trait to add context to errors
pub trait ErrorContext<T> {
    /// Add context to an error
    fn context<S: Into<String>>(self, ctx: S) -> Result<T>;

    /// Add context with a closure that's only called on error
    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, f: F) -> Result<T>;
}

impl<T, E> ErrorContext<T> for std::result::Result<T, E>
where
    E: Into<SchemaError>,
{
    fn context<S: Into<String>>(self, ctx: S) -> Result<T> {
        self.map_err(|e| SchemaError::Context {
            context: ctx.into(),
            source: Box::new(e.into()),
        })
    }

    fn with_context<S: Into<String>, F: FnOnce() -> S>(self, f: F) -> Result<T> {
        self.map_err(|e| SchemaError::Context {
            context: f().into(),
            source: Box::new(e.into()),
        })
    }
}
