//! Traits for inspecting resolved Fields

pub mod fields;

pub use fields::FieldLookup;
