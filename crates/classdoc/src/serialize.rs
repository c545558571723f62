//! Recursive type-graph serialization.
//!
//! `serialize_type` and `serialize_symbol` are mutually recursive: a shape
//! serializes each property through its symbol, a signature serializes each
//! parameter through its symbol, and a symbol serializes its resolved type.
//! Every descent into the children of a type goes through
//! [`TraversalContext::descend`], which is what bounds the recursion.

use tracing::{debug, trace};

use crate::classify::{TypeClass, classify};
use crate::context::TraversalContext;
use crate::doc::{ArrayValue, ClassDoc, DocEntry, DocEntryType, DocValue};
use crate::error::DocGenError;
use crate::flags::SymbolFlags;
use crate::provider::{LiteralValue, TypeProvider};

type Ctx<P> = TraversalContext<<P as TypeProvider>::Type>;

const BOOLEAN_VALUE: &str = "true | false";
const UNKNOWN_VALUE: &str = "unknown";
const ANY: &str = "any";

/// Serialize `ty` into a document node.
///
/// Children are suppressed (an empty list, never a missing value) when `ty`
/// is already on the ancestor path or the path is at the depth limit.
pub fn serialize_type<P: TypeProvider>(
    provider: &P,
    ctx: &Ctx<P>,
    ty: P::Type,
) -> Result<DocEntryType, DocGenError> {
    let raw = provider.type_to_string(ty);
    let symbol = provider.type_symbol(ty);
    let description = symbol
        .map(|symbol| provider.symbol_documentation(symbol))
        .unwrap_or_default();
    let stop = ctx.should_stop(ty);
    let class = classify(provider, ty);

    trace!(raw = %raw, ?class, depth = ctx.depth(), stop, "serialize type");

    let value = match class {
        TypeClass::Boolean => DocValue::Boolean {
            value: BOOLEAN_VALUE.to_string(),
        },
        TypeClass::Array => {
            let value = if stop {
                ArrayValue::Elements(Vec::new())
            } else {
                match provider.type_arguments(ty) {
                    Some(arguments) => {
                        ArrayValue::Elements(serialize_types(provider, &ctx.descend(ty), arguments)?)
                    }
                    None => ArrayValue::Unspecified,
                }
            };
            DocValue::Array { value }
        }
        TypeClass::Function => {
            let call_signature = if stop {
                Vec::new()
            } else {
                let child = ctx.descend(ty);
                provider
                    .call_signatures(ty)
                    .into_iter()
                    .map(|signature| serialize_signature(provider, &child, signature))
                    .collect::<Result<Vec<_>, _>>()?
            };
            DocValue::Function {
                value: raw.clone(),
                call_signature,
            }
        }
        TypeClass::UnionOrIntersection | TypeClass::TypeArguments => {
            let value = if stop {
                Vec::new()
            } else {
                let members = match class {
                    TypeClass::UnionOrIntersection => provider.union_members(ty),
                    _ => provider.type_arguments(ty).unwrap_or_default(),
                };
                serialize_types(provider, &ctx.descend(ty), members)?
            };
            DocValue::Enum { value }
        }
        TypeClass::Literal => {
            return Ok(serialize_literal(provider, ty, raw, symbol, description));
        }
        TypeClass::Shape => DocValue::Shape {
            value: serialize_properties(provider, ctx, ty, &raw, stop)?,
        },
    };

    Ok(DocEntryType {
        name: raw.clone(),
        raw,
        value,
        description,
        required: None,
    })
}

fn serialize_types<P: TypeProvider>(
    provider: &P,
    ctx: &Ctx<P>,
    types: Vec<P::Type>,
) -> Result<Vec<DocEntryType>, DocGenError> {
    types
        .into_iter()
        .map(|ty| serialize_type(provider, ctx, ty))
        .collect()
}

/// Terminal node for literal and intrinsic types.
fn serialize_literal<P: TypeProvider>(
    provider: &P,
    ty: P::Type,
    raw: String,
    symbol: Option<P::Symbol>,
    description: String,
) -> DocEntryType {
    let name = symbol
        .map(|symbol| provider.symbol_name(symbol))
        .unwrap_or_else(|| raw.clone());

    let value = match provider.literal_value(ty) {
        Some(LiteralValue::String(value)) => DocValue::LiteralString { value },
        Some(LiteralValue::Number(value)) => DocValue::LiteralNumber { value },
        Some(LiteralValue::Boolean(_)) => DocValue::LiteralBoolean { value: raw.clone() },
        None => match provider.intrinsic_name(ty) {
            Some(intrinsic) if intrinsic == ANY && name == ANY => DocValue::Any { value: intrinsic },
            Some(intrinsic) => DocValue::LiteralString { value: intrinsic },
            None => DocValue::Unknown {
                value: UNKNOWN_VALUE.to_string(),
            },
        },
    };

    DocEntryType {
        name,
        raw,
        value,
        description,
        required: None,
    }
}

/// Property nodes of a shape, or an empty list when the shape is on the
/// ancestor path, at the depth limit, or wider than the property limit.
fn serialize_properties<P: TypeProvider>(
    provider: &P,
    ctx: &Ctx<P>,
    ty: P::Type,
    raw: &str,
    stop: bool,
) -> Result<Vec<DocEntryType>, DocGenError> {
    if stop {
        return Ok(Vec::new());
    }

    let properties = provider
        .properties(ty)
        .ok_or_else(|| DocGenError::MalformedType {
            type_name: raw.to_string(),
        })?;

    if ctx.exceeds_props(properties.len()) {
        trace!(
            raw,
            count = properties.len(),
            max_props = ctx.max_props(),
            "shape too wide, truncating"
        );
        return Ok(Vec::new());
    }

    let child = ctx.descend(ty);
    let mut nodes = Vec::with_capacity(properties.len());
    for property in properties {
        if let Some(node) = serialize_symbol(provider, &child, property)? {
            nodes.push(node);
        }
    }
    Ok(nodes)
}

/// Resolve the type of a property or parameter symbol.
///
/// A type attached directly to the symbol wins over the type at its value
/// declaration; synthesized mapped-type members only have the former.
pub fn resolve_symbol_type<P: TypeProvider>(
    provider: &P,
    symbol: P::Symbol,
) -> Option<P::Type> {
    provider
        .attached_type(symbol)
        .or_else(|| provider.type_of_symbol(symbol))
}

/// Serialize a property or parameter symbol.
///
/// Returns `Ok(None)` for symbols whose type cannot be resolved; callers
/// drop those from their output.
pub fn serialize_symbol<P: TypeProvider>(
    provider: &P,
    ctx: &Ctx<P>,
    symbol: P::Symbol,
) -> Result<Option<DocEntryType>, DocGenError> {
    let Some(ty) = resolve_symbol_type(provider, symbol) else {
        trace!(?symbol, "symbol has no resolvable type, skipping");
        return Ok(None);
    };

    let mut node = serialize_type(provider, ctx, ty)?;
    node.name = provider.symbol_name(symbol);
    node.description = provider.symbol_documentation(symbol);
    node.required = Some(
        !provider
            .symbol_flags(symbol)
            .contains(SymbolFlags::OPTIONAL),
    );
    Ok(Some(node))
}

/// Serialize a call or construct signature.
///
/// Return types are reported as display text only.
pub fn serialize_signature<P: TypeProvider>(
    provider: &P,
    ctx: &Ctx<P>,
    signature: P::Signature,
) -> Result<DocEntry, DocGenError> {
    let mut parameters = Vec::new();
    for parameter in provider.signature_parameters(signature) {
        if let Some(node) = serialize_symbol(provider, ctx, parameter)? {
            parameters.push(node);
        }
    }

    Ok(DocEntry {
        parameters,
        return_type: provider.type_to_string(provider.signature_return_type(signature)),
        description: provider.signature_documentation(signature),
    })
}

/// Serialize a class symbol: its own type plus all construct signatures.
///
/// Returns `Ok(None)` when the class symbol has no resolvable type.
pub fn serialize_class<P: TypeProvider>(
    provider: &P,
    ctx: &Ctx<P>,
    symbol: P::Symbol,
    file_name: &str,
) -> Result<Option<ClassDoc>, DocGenError> {
    let name = provider.symbol_name(symbol);
    let Some(class_type) = resolve_symbol_type(provider, symbol) else {
        debug!(class = %name, "class symbol has no type, skipping");
        return Ok(None);
    };

    debug!(class = %name, file = file_name, "serializing class");

    let ty = serialize_type(provider, ctx, class_type)?;
    let constructors = provider
        .construct_signatures(class_type)
        .into_iter()
        .map(|signature| serialize_signature(provider, ctx, signature))
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Some(ClassDoc {
        description: provider.symbol_documentation(symbol),
        name,
        file_name: file_name.to_string(),
        ty,
        constructors,
    }))
}

#[cfg(test)]
#[path = "../tests/serialize_tests.rs"]
mod tests;
