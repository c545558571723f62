//! Class configuration-shape documentation.
//!
//! This crate inspects a typed program's exported classes and emits a
//! JSON-ready description of each class's constructor parameters: every
//! type is classified into a small closed set of shape categories
//! (boolean, array, function, enum, literal, shape) and expanded
//! recursively, with documentation comments and optionality attached.
//!
//! The type system itself is behind [`TypeProvider`]. [`TypeGraph`] is an
//! in-memory provider, populated either through its builder methods or by
//! lowering a JSON [`manifest::Manifest`].
//!
//! Recursion is bounded structurally: an ancestor path threaded through
//! every call stops cycles, and [`DocGenOptions`] caps depth and shape width.

// Provider-facing flag sets
pub mod flags;
pub use flags::{ModifierFlags, SymbolFlags, TypeFlags};

// Centralized defaults and ceilings
pub mod limits;

// Type-system provider capability
pub mod provider;
pub use provider::{DeclarationKind, LiteralValue, TypeProvider};

// In-memory provider and its JSON manifest form
pub mod graph;
pub mod manifest;
pub use graph::{ClassHandle, DeclParent, TypeGraph};

// Output document model
pub mod doc;
pub use doc::{ArrayValue, Category, ClassDoc, DocEntry, DocEntryType, DocValue};

// Serialization engine
pub mod classify;
pub mod context;
pub mod error;
pub mod options;
pub mod serialize;
pub use classify::{TypeClass, classify};
pub use context::TraversalContext;
pub use error::DocGenError;
pub use options::DocGenOptions;
pub use serialize::{serialize_class, serialize_signature, serialize_symbol, serialize_type};

// Declaration walking and entry points
pub mod walker;
pub use walker::{
    ClassFailure, Documentation, generate_documentation, generate_documentation_from_node,
    generate_documentation_from_units,
};

#[cfg(test)]
mod test_fixtures;
