//! Flag sets reported by a type-system provider.
//!
//! These mirror the subset of the compiler's type, symbol and modifier flags
//! that the serializer actually inspects. Providers are free to track more
//! internally; only these bits cross the [`TypeProvider`](crate::TypeProvider)
//! boundary.

use bitflags::bitflags;

bitflags! {
    /// Type flags used by the classifier.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct TypeFlags: u32 {
        const ANY = 1 << 0;
        const UNKNOWN = 1 << 1;
        const STRING = 1 << 2;
        const NUMBER = 1 << 3;
        const BOOLEAN = 1 << 4;
        const STRING_LITERAL = 1 << 5;
        const NUMBER_LITERAL = 1 << 6;
        const BOOLEAN_LITERAL = 1 << 7;
        const VOID = 1 << 8;
        const UNDEFINED = 1 << 9;
        const NULL = 1 << 10;
        const NEVER = 1 << 11;
        const OBJECT = 1 << 12;
        const UNION = 1 << 13;
        const INTERSECTION = 1 << 14;

        const LITERAL = Self::STRING_LITERAL.bits()
            | Self::NUMBER_LITERAL.bits()
            | Self::BOOLEAN_LITERAL.bits();
        const UNION_OR_INTERSECTION = Self::UNION.bits() | Self::INTERSECTION.bits();
        const INTRINSIC = Self::ANY.bits()
            | Self::UNKNOWN.bits()
            | Self::STRING.bits()
            | Self::NUMBER.bits()
            | Self::BOOLEAN.bits()
            | Self::VOID.bits()
            | Self::UNDEFINED.bits()
            | Self::NULL.bits()
            | Self::NEVER.bits();
    }
}

bitflags! {
    /// Symbol flags. Only optionality matters to the serializer.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct SymbolFlags: u32 {
        const PROPERTY = 1 << 0;
        const METHOD = 1 << 1;
        const PARAMETER = 1 << 2;
        const CLASS = 1 << 3;
        const TYPE_ALIAS = 1 << 4;
        const OPTIONAL = 1 << 5;
        /// Synthesized member of a mapped type; carries its type directly.
        const TRANSIENT = 1 << 6;
    }
}

bitflags! {
    /// Declaration modifier flags, combined across the declaration chain.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
    pub struct ModifierFlags: u32 {
        const EXPORT = 1 << 0;
        const DEFAULT = 1 << 1;
        const AMBIENT = 1 << 2;
        const ABSTRACT = 1 << 3;
    }
}
