//! Type-system provider abstraction.
//!
//! This trait isolates the serializer from any concrete compiler front end.
//! The serializer only issues read queries through it; it never parses
//! source text and never mutates provider state. Providers are expected to
//! have finished whatever analysis they need before serialization starts.

use std::fmt::Debug;
use std::hash::Hash;

use crate::flags::{ModifierFlags, SymbolFlags, TypeFlags};

/// Value carried by a literal type.
#[derive(Debug, Clone, PartialEq)]
pub enum LiteralValue {
    String(String),
    Number(f64),
    Boolean(bool),
}

/// Coarse declaration kinds the walker distinguishes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum DeclarationKind {
    Class,
    /// A namespace or module block whose children are declarations.
    Namespace,
    Other,
}

/// Query interface over a provider's symbol/type graph.
///
/// Handles are opaque and identity-comparable. Two handles compare equal
/// exactly when they refer to the same node of the provider's graph, even
/// when reached through different paths; cycle detection relies on that.
pub trait TypeProvider {
    type Type: Copy + Eq + Hash + Debug;
    type Symbol: Copy + Eq + Debug;
    type Signature: Copy + Debug;
    type Declaration: Copy + Debug;
    type SourceUnit: Copy + Debug;

    // ---------------------------------------------------------------------
    // Types
    // ---------------------------------------------------------------------

    fn type_flags(&self, ty: Self::Type) -> TypeFlags;

    /// Full textual rendering of a type, as the compiler would print it.
    fn type_to_string(&self, ty: Self::Type) -> String;

    fn type_symbol(&self, ty: Self::Type) -> Option<Self::Symbol>;

    fn call_signatures(&self, ty: Self::Type) -> Vec<Self::Signature>;

    fn construct_signatures(&self, ty: Self::Type) -> Vec<Self::Signature>;

    /// Constituents of a union or intersection type.
    fn union_members(&self, ty: Self::Type) -> Vec<Self::Type>;

    /// Type arguments of a parameterized type, `None` when the type carries
    /// no type-argument information at all.
    fn type_arguments(&self, ty: Self::Type) -> Option<Vec<Self::Type>>;

    /// Declared properties of a structured type.
    ///
    /// `None` signals a provider that cannot enumerate properties for this
    /// type, which the serializer treats as a contract violation.
    fn properties(&self, ty: Self::Type) -> Option<Vec<Self::Symbol>>;

    fn literal_value(&self, ty: Self::Type) -> Option<LiteralValue>;

    /// Name of an intrinsic type (`any`, `string`, `undefined`, ...).
    fn intrinsic_name(&self, ty: Self::Type) -> Option<String>;

    /// Name of the global array type's symbol.
    fn array_type_name(&self) -> &str {
        crate::limits::ARRAY_TYPE_NAME
    }

    // ---------------------------------------------------------------------
    // Symbols
    // ---------------------------------------------------------------------

    fn symbol_name(&self, symbol: Self::Symbol) -> String;

    fn symbol_flags(&self, symbol: Self::Symbol) -> SymbolFlags;

    /// Documentation comment text, `""` if the symbol has none.
    fn symbol_documentation(&self, symbol: Self::Symbol) -> String;

    /// Type of a symbol at its value declaration. `None` when the symbol has
    /// no value declaration.
    fn type_of_symbol(&self, symbol: Self::Symbol) -> Option<Self::Type>;

    /// Type carried directly by a synthesized symbol (mapped-type members).
    fn attached_type(&self, symbol: Self::Symbol) -> Option<Self::Type>;

    // ---------------------------------------------------------------------
    // Signatures
    // ---------------------------------------------------------------------

    fn signature_parameters(&self, signature: Self::Signature) -> Vec<Self::Symbol>;

    fn signature_return_type(&self, signature: Self::Signature) -> Self::Type;

    fn signature_documentation(&self, signature: Self::Signature) -> String;

    // ---------------------------------------------------------------------
    // Declarations
    // ---------------------------------------------------------------------

    fn source_units(&self) -> Vec<Self::SourceUnit>;

    fn source_unit_name(&self, unit: Self::SourceUnit) -> String;

    fn is_declaration_file(&self, unit: Self::SourceUnit) -> bool;

    /// Top-level declarations of a source unit, in source order.
    fn unit_declarations(&self, unit: Self::SourceUnit) -> Vec<Self::Declaration>;

    fn declaration_kind(&self, decl: Self::Declaration) -> DeclarationKind;

    fn modifier_flags(&self, decl: Self::Declaration) -> ModifierFlags;

    /// Whether the declaration's parent is the source unit itself.
    fn is_top_level(&self, decl: Self::Declaration) -> bool;

    /// Child declarations of a namespace/module declaration.
    fn declaration_children(&self, decl: Self::Declaration) -> Vec<Self::Declaration>;

    /// Symbol bound to the declaration's name, if it has one.
    fn declaration_symbol(&self, decl: Self::Declaration) -> Option<Self::Symbol>;
}
