//! Output document model.
//!
//! The serialized JSON shape of these types is the public contract consumed
//! by documentation renderers: field names and category strings must not
//! change without a breaking release.

use serde::{Serialize, Serializer};

/// Shape category of a serialized type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum Category {
    Boolean,
    Array,
    Function,
    Enum,
    LiteralString,
    LiteralNumber,
    LiteralBoolean,
    Any,
    Unknown,
    Shape,
}

impl Category {
    pub fn as_str(self) -> &'static str {
        match self {
            Category::Boolean => "boolean",
            Category::Array => "array",
            Category::Function => "function",
            Category::Enum => "enum",
            Category::LiteralString => "literal-string",
            Category::LiteralNumber => "literal-number",
            Category::LiteralBoolean => "literal-boolean",
            Category::Any => "any",
            Category::Unknown => "unknown",
            Category::Shape => "shape",
        }
    }
}

impl std::fmt::Display for Category {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A serialized type, or a property/parameter wrapping one.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct DocEntryType {
    pub name: String,
    pub raw: String,
    #[serde(flatten)]
    pub value: DocValue,
    pub description: String,
    /// Only set on property and parameter nodes.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub required: Option<bool>,
}

impl DocEntryType {
    pub fn category(&self) -> Category {
        self.value.category()
    }

    /// Child nodes of array, enum and shape nodes. Empty for every other
    /// category, and for arrays without type-argument information.
    pub fn children(&self) -> &[DocEntryType] {
        match &self.value {
            DocValue::Array {
                value: ArrayValue::Elements(items),
            }
            | DocValue::Enum { value: items }
            | DocValue::Shape { value: items } => items,
            _ => &[],
        }
    }

    pub fn call_signatures(&self) -> &[DocEntry] {
        match &self.value {
            DocValue::Function { call_signature, .. } => call_signature,
            _ => &[],
        }
    }

    /// Maximum nesting depth of this node, counting a leaf as zero.
    ///
    /// Function nodes count one level for the hop into their parameters.
    pub fn depth(&self) -> usize {
        let children = self.children().iter().map(DocEntryType::depth);
        let params = self
            .call_signatures()
            .iter()
            .flat_map(|sig| sig.parameters.iter())
            .map(DocEntryType::depth);
        children
            .chain(params)
            .max()
            .map_or(0, |deepest| deepest + 1)
    }
}

/// Category-specific payload. Serialized inline as `category` plus `value`
/// (and `callSignature` for functions).
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "category", rename_all = "kebab-case")]
pub enum DocValue {
    Boolean {
        value: String,
    },
    Array {
        value: ArrayValue,
    },
    Function {
        value: String,
        #[serde(rename = "callSignature")]
        call_signature: Vec<DocEntry>,
    },
    Enum {
        value: Vec<DocEntryType>,
    },
    LiteralString {
        value: String,
    },
    LiteralNumber {
        #[serde(serialize_with = "serialize_number")]
        value: f64,
    },
    LiteralBoolean {
        value: String,
    },
    Any {
        value: String,
    },
    Unknown {
        value: String,
    },
    Shape {
        value: Vec<DocEntryType>,
    },
}

impl DocValue {
    pub fn category(&self) -> Category {
        match self {
            DocValue::Boolean { .. } => Category::Boolean,
            DocValue::Array { .. } => Category::Array,
            DocValue::Function { .. } => Category::Function,
            DocValue::Enum { .. } => Category::Enum,
            DocValue::LiteralString { .. } => Category::LiteralString,
            DocValue::LiteralNumber { .. } => Category::LiteralNumber,
            DocValue::LiteralBoolean { .. } => Category::LiteralBoolean,
            DocValue::Any { .. } => Category::Any,
            DocValue::Unknown { .. } => Category::Unknown,
            DocValue::Shape { .. } => Category::Shape,
        }
    }
}

/// Element payload of an array node.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayValue {
    Elements(Vec<DocEntryType>),
    /// The provider reported no type-argument information; prints as `"none"`.
    Unspecified,
}

impl Serialize for ArrayValue {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            ArrayValue::Elements(items) => items.serialize(serializer),
            ArrayValue::Unspecified => serializer.serialize_str("none"),
        }
    }
}

/// Integral literals print as JSON integers (`123`, not `123.0`).
fn serialize_number<S: Serializer>(value: &f64, serializer: S) -> Result<S::Ok, S::Error> {
    const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;
    if value.is_finite() && value.fract() == 0.0 && value.abs() <= MAX_SAFE_INTEGER {
        serializer.serialize_i64(*value as i64)
    } else {
        serializer.serialize_f64(*value)
    }
}

/// A serialized call or construct signature.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DocEntry {
    pub parameters: Vec<DocEntryType>,
    pub return_type: String,
    pub description: String,
}

/// Documentation for one exported class.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ClassDoc {
    pub name: String,
    pub file_name: String,
    pub description: String,
    #[serde(rename = "type")]
    pub ty: DocEntryType,
    pub constructors: Vec<DocEntry>,
}
