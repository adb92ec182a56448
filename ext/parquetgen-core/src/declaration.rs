//! Record declarations the type introspector walks.
//!
//! Declarations are either built in memory or read from Rust source,
//! where every `struct` with named fields becomes a [`RecordDecl`].
//! Field annotations use the `parquet` attribute:
//!
//! ```text
//! struct Person {
//!     #[parquet(rename = "id")]
//!     person_id: i32,
//!     #[parquet(ignore)]
//!     scratch: String,
//!     #[parquet(flatten)]
//!     being: Being,
//!     #[parquet = "nick"]
//!     nickname: Option<String>,
//! }
//! ```

use std::path::Path;

use indexmap::IndexMap;
use quote::ToTokens;
use syn::{Expr, ExprLit, GenericArgument, Item, Lit, LitStr, Meta, PathArguments, Type};

use crate::error::ErrorContext;
use crate::schema::Repetition;
use crate::Result;

/// Per-field annotation controlling the stored column
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Annotation {
    /// Replace the column-name segment
    Rename(String),
    /// Drop the field entirely
    Ignore,
}

impl Annotation {
    /// Parse the string form: `"-"` ignores, any other token renames
    pub fn parse(tag: &str) -> Option<Self> {
        match tag.trim() {
            "" => None,
            "-" => Some(Annotation::Ignore),
            name => Some(Annotation::Rename(name.to_string())),
        }
    }
}

/// One declared field of a record type
#[derive(Debug, Clone, PartialEq)]
pub struct DeclaredField {
    pub name: String,
    /// Declared base type, without its `Option`/`Vec` marker
    pub type_name: String,
    /// `Required` for a value, `Optional` for `Option<T>`, `Repeated` for `Vec<T>`
    pub repetition: Repetition,
    /// Children are spliced into the parent instead of nested under it
    pub embedded: bool,
    pub annotation: Option<Annotation>,
}

impl DeclaredField {
    pub fn new<N: Into<String>, T: Into<String>>(name: N, type_name: T) -> Self {
        Self {
            name: name.into(),
            type_name: type_name.into(),
            repetition: Repetition::Required,
            embedded: false,
            annotation: None,
        }
    }

    pub fn optional(mut self) -> Self {
        self.repetition = Repetition::Optional;
        self
    }

    pub fn repeated(mut self) -> Self {
        self.repetition = Repetition::Repeated;
        self
    }

    pub fn embedded(mut self) -> Self {
        self.embedded = true;
        self
    }

    pub fn renamed<S: Into<String>>(mut self, column: S) -> Self {
        self.annotation = Some(Annotation::Rename(column.into()));
        self
    }

    pub fn ignored(mut self) -> Self {
        self.annotation = Some(Annotation::Ignore);
        self
    }

    pub fn is_ignored(&self) -> bool {
        matches!(self.annotation, Some(Annotation::Ignore))
    }

    /// Column-name segment, honoring a rename
    pub fn column_name(&self) -> &str {
        match &self.annotation {
            Some(Annotation::Rename(column)) => column,
            _ => &self.name,
        }
    }
}

/// A record type and its fields in declaration order
#[derive(Debug, Clone, PartialEq)]
pub struct RecordDecl {
    pub name: String,
    pub fields: Vec<DeclaredField>,
}

impl RecordDecl {
    pub fn new<S: Into<String>>(name: S) -> Self {
        Self {
            name: name.into(),
            fields: Vec::new(),
        }
    }

    pub fn with_field(mut self, field: DeclaredField) -> Self {
        self.fields.push(field);
        self
    }
}

/// Where the introspector reads record declarations from
pub trait DeclarationSource {
    fn record(&self, name: &str) -> Option<&RecordDecl>;
}

/// Record declarations keyed by type name, in declaration order
#[derive(Debug, Clone, Default)]
pub struct Declarations {
    records: IndexMap<String, RecordDecl>,
}

impl Declarations {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(mut self, record: RecordDecl) -> Self {
        self.insert(record);
        self
    }

    /// Add a record, replacing any earlier declaration with the same name
    pub fn insert(&mut self, record: RecordDecl) -> Option<RecordDecl> {
        self.records.insert(record.name.clone(), record)
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Collect every named-field struct in a Rust source file.
    ///
    /// Inline modules are searched too. Records are keyed by bare type
    /// name, so a later struct replaces an earlier one of the same name
    /// while keeping the earlier one's position.
    pub fn parse(source: &str) -> Result<Self> {
        let file = syn::parse_file(source)?;
        let mut declarations = Declarations::new();
        collect_items(&file.items, &mut declarations)?;
        Ok(declarations)
    }

    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let path = path.as_ref();
        let source = std::fs::read_to_string(path)
            .with_context(|| format!("Reading {}", path.display()))?;
        Self::parse(&source).with_context(|| format!("Parsing {}", path.display()))
    }
}

impl DeclarationSource for Declarations {
    fn record(&self, name: &str) -> Option<&RecordDecl> {
        self.records.get(name)
    }
}

fn collect_items(items: &[Item], declarations: &mut Declarations) -> Result<()> {
    for item in items {
        match item {
            Item::Struct(item) => {
                let syn::Fields::Named(named) = &item.fields else {
                    continue;
                };
                let mut record = RecordDecl::new(item.ident.to_string());
                for field in &named.named {
                    if let Some(declared) = declared_field(field)? {
                        record.fields.push(declared);
                    }
                }
                declarations.insert(record);
            }
            Item::Mod(item) => {
                if let Some((_, items)) = &item.content {
                    collect_items(items, declarations)?;
                }
            }
            _ => {}
        }
    }
    Ok(())
}

fn declared_field(field: &syn::Field) -> Result<Option<DeclaredField>> {
    let Some(ident) = &field.ident else {
        return Ok(None);
    };
    let (type_name, repetition) = declared_type(&field.ty);
    let mut declared = DeclaredField::new(ident.to_string(), type_name);
    declared.repetition = repetition;

    for attr in field.attrs.iter().filter(|a| a.path().is_ident("parquet")) {
        apply_attribute(attr, &mut declared)?;
    }
    Ok(Some(declared))
}

fn apply_attribute(attr: &syn::Attribute, declared: &mut DeclaredField) -> Result<()> {
    match &attr.meta {
        Meta::NameValue(name_value) => {
            let Expr::Lit(ExprLit {
                lit: Lit::Str(tag), ..
            }) = &name_value.value
            else {
                return Err(
                    syn::Error::new_spanned(&name_value.value, "expected a string annotation")
                        .into(),
                );
            };
            declared.annotation = Annotation::parse(&tag.value());
        }
        Meta::List(_) => attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename") {
                let column: LitStr = meta.value()?.parse()?;
                declared.annotation = Some(Annotation::Rename(column.value()));
            } else if meta.path.is_ident("ignore") || meta.path.is_ident("skip") {
                declared.annotation = Some(Annotation::Ignore);
            } else if meta.path.is_ident("flatten") {
                declared.embedded = true;
            } else {
                return Err(meta.error("unsupported parquet attribute"));
            }
            Ok(())
        })?,
        Meta::Path(path) => {
            return Err(syn::Error::new_spanned(path, "expected #[parquet(...)]").into());
        }
    }
    Ok(())
}

/// Split a declared type into its base name and nullability marker
fn declared_type(ty: &Type) -> (String, Repetition) {
    if let Some(inner) = wrapped(ty, "Option") {
        (base_name(inner), Repetition::Optional)
    } else if let Some(inner) = wrapped(ty, "Vec") {
        (base_name(inner), Repetition::Repeated)
    } else {
        (base_name(ty), Repetition::Required)
    }
}

fn wrapped<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(type_path) = ty else {
        return None;
    };
    if type_path.qself.is_some() {
        return None;
    }
    let segment = type_path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match (args.args.len(), args.args.first()) {
        (1, Some(GenericArgument::Type(inner))) => Some(inner),
        _ => None,
    }
}

/// Last path segment for plain paths, the rendered type otherwise
fn base_name(ty: &Type) -> String {
    match ty {
        Type::Path(type_path) if type_path.qself.is_none() => {
            match type_path.path.segments.last() {
                Some(segment) if matches!(segment.arguments, PathArguments::None) => {
                    segment.ident.to_string()
                }
                _ => render(ty),
            }
        }
        Type::Group(group) => base_name(&group.elem),
        Type::Paren(paren) => base_name(&paren.elem),
        _ => render(ty),
    }
}

fn render(ty: &Type) -> String {
    ty.to_token_stream().to_string().replace(' ', "")
}
