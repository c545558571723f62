//! Type classification.
//!
//! Maps a provider type onto the small closed set of shape categories the
//! serializer knows how to emit. The checks run in a fixed precedence order
//! and the first match wins:
//!
//! 1. boolean: the provider models `boolean` as the union `true | false`,
//!    so it has to be caught before the generic union check
//! 2. array: rendered as `[]`, or its symbol is the global array type
//! 3. function: at least one call signature
//! 4. union or intersection
//! 5. any other type carrying type arguments (tuples, `as const` values)
//! 6. literal: no symbol, a literal type, or `any`
//! 7. shape: everything else
//!
//! Classification is a pure function of the handle and provider queries.

use crate::flags::TypeFlags;
use crate::limits::EMPTY_ARRAY_TOKEN;
use crate::provider::TypeProvider;

/// Classification result driving the serializer's dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeClass {
    Boolean,
    Array,
    Function,
    /// Union or intersection; serialized as `enum`.
    UnionOrIntersection,
    /// Parameterized type with type arguments; also serialized as `enum`.
    TypeArguments,
    Literal,
    Shape,
}

/// Classify `ty`.
pub fn classify<P: TypeProvider>(provider: &P, ty: P::Type) -> TypeClass {
    let flags = provider.type_flags(ty);

    if flags.contains(TypeFlags::BOOLEAN) {
        return TypeClass::Boolean;
    }
    if is_array(provider, ty) {
        return TypeClass::Array;
    }
    if !provider.call_signatures(ty).is_empty() {
        return TypeClass::Function;
    }
    if flags.intersects(TypeFlags::UNION_OR_INTERSECTION) {
        return TypeClass::UnionOrIntersection;
    }
    if provider.type_arguments(ty).is_some() {
        return TypeClass::TypeArguments;
    }
    if provider.type_symbol(ty).is_none()
        || flags.intersects(TypeFlags::LITERAL)
        || flags.contains(TypeFlags::ANY)
    {
        return TypeClass::Literal;
    }
    TypeClass::Shape
}

/// Whether `ty` is the empty tuple or an instance of the global array type.
pub fn is_array<P: TypeProvider>(provider: &P, ty: P::Type) -> bool {
    if provider.type_to_string(ty) == EMPTY_ARRAY_TOKEN {
        return true;
    }
    provider
        .type_symbol(ty)
        .is_some_and(|symbol| provider.symbol_name(symbol) == provider.array_type_name())
}

#[cfg(test)]
#[path = "../tests/classify_tests.rs"]
mod tests;
