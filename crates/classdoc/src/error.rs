//! Errors raised while serializing a type graph.
//!
//! Depth and width overflow are not errors: the serializer truncates to an
//! empty child list instead. Unresolvable symbols are skipped. The only
//! failure is a provider contract violation on a structured type.

/// Error returned by the serializers.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DocGenError {
    /// A shape-category type could not enumerate its properties.
    MalformedType { type_name: String },
}

impl std::fmt::Display for DocGenError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            DocGenError::MalformedType { type_name } => {
                write!(f, "Expected type to have some properties: {type_name}")
            }
        }
    }
}

impl std::error::Error for DocGenError {}
