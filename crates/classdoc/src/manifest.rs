//! Type-graph manifests.
//!
//! A manifest is a JSON description of a program's source units, their
//! declarations, and the named types those declarations refer to. It is the
//! provider configuration accepted by the command line: a front end (or a
//! hand-written fixture) exports the type graph once, and the serializer
//! runs over the lowered [`TypeGraph`].
//!
//! ```json
//! {
//!   "types": {
//!     "Page": { "kind": "object", "properties": [
//!       { "name": "index", "type": "number" },
//!       { "name": "next", "type": "Page", "optional": true }
//!     ] }
//!   },
//!   "units": [{
//!     "fileName": "viewer.ts",
//!     "declarations": [{
//!       "kind": "class", "name": "Viewer",
//!       "constructors": [{ "parameters": [{ "name": "page", "type": "Page" }] }]
//!     }]
//!   }]
//! }
//! ```
//!
//! Type references are either a name (a key of `types`, a class declared in
//! the manifest, or an intrinsic such as `string`) or an inline definition.
//!
//! Lowering runs in phases so that named object types and classes can refer
//! to each other and to themselves:
//!
//! 1. every named object type gets an empty shape
//! 2. the declaration tree is created; class instance types become nameable
//! 3. every other named type is lowered on demand
//! 4. object properties, class members and constructors are filled in
//!
//! A named type being lowered in phase 3 is reachable through a placeholder
//! handle, so it may refer to itself through an object, array, tuple or
//! function. A cycle made only of union and intersection members has no
//! such type in between and is rejected.

use indexmap::IndexMap;
use rustc_hash::{FxHashMap, FxHashSet};
use serde::Deserialize;
use tracing::debug;

use crate::graph::{ANONYMOUS_TYPE_NAME, ClassHandle, DeclParent, SignatureId, SymbolId, TypeGraph, TypeId};
use crate::provider::LiteralValue;

/// Intrinsic type names that resolve without a `types` entry.
const INTRINSIC_NAMES: &[&str] = &[
    "any",
    "unknown",
    "string",
    "number",
    "bigint",
    "symbol",
    "object",
    "void",
    "undefined",
    "null",
    "never",
];

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Manifest {
    #[serde(default)]
    pub types: IndexMap<String, TypeDef>,
    #[serde(default)]
    pub units: Vec<UnitDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct UnitDef {
    pub file_name: String,
    #[serde(default)]
    pub declaration_file: bool,
    #[serde(default)]
    pub declarations: Vec<DeclDef>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum DeclDef {
    Class(ClassDef),
    #[serde(alias = "module")]
    Namespace {
        name: String,
        #[serde(default)]
        exported: bool,
        #[serde(default)]
        declarations: Vec<DeclDef>,
    },
    /// Type aliases, interfaces, functions and variables: present in the
    /// source, never documented.
    #[serde(alias = "typeAlias", alias = "interface", alias = "function", alias = "variable")]
    Other {
        name: String,
        #[serde(default)]
        exported: bool,
    },
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ClassDef {
    pub name: Option<String>,
    pub exported: bool,
    pub documentation: String,
    /// Instance members.
    pub properties: Vec<PropertyDef>,
    /// Static members, which belong to the constructor type.
    pub statics: Vec<PropertyDef>,
    /// Construct signatures. An empty list means the implicit no-argument
    /// constructor.
    pub constructors: Vec<SignatureDef>,
}

/// A property, parameter, or mapped-type member.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PropertyDef {
    pub name: String,
    #[serde(rename = "type")]
    pub ty: TypeRef,
    #[serde(default)]
    pub optional: bool,
    #[serde(default)]
    pub documentation: String,
    /// Synthesized by a mapped type: the type is attached to the symbol and
    /// there is no value declaration.
    #[serde(default)]
    pub mapped: bool,
}

#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SignatureDef {
    pub parameters: Vec<PropertyDef>,
    pub return_type: Option<TypeRef>,
    pub documentation: String,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(untagged)]
pub enum TypeRef {
    Named(String),
    Inline(Box<TypeDef>),
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EnumMemberDef {
    pub name: String,
    pub value: serde_json::Value,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "kind", rename_all = "camelCase")]
pub enum TypeDef {
    Object {
        #[serde(default)]
        properties: Vec<PropertyDef>,
        #[serde(default)]
        documentation: String,
    },
    Union {
        members: Vec<TypeRef>,
        #[serde(default)]
        documentation: String,
    },
    Intersection {
        members: Vec<TypeRef>,
    },
    Enum {
        members: Vec<EnumMemberDef>,
        #[serde(default)]
        documentation: String,
    },
    Array {
        element: TypeRef,
    },
    Tuple {
        #[serde(default)]
        elements: Vec<TypeRef>,
        #[serde(default)]
        readonly: bool,
    },
    Function {
        signatures: Vec<SignatureDef>,
    },
    Literal {
        value: serde_json::Value,
    },
}

/// Error raised while lowering a manifest into a type graph.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ManifestError {
    /// A type reference names nothing known.
    UnknownType { name: String },
    /// A named type refers back to itself only through union or
    /// intersection members.
    CyclicAlias { name: String },
    /// A literal value that is not a string, number or boolean.
    InvalidLiteral { value: String },
}

impl std::fmt::Display for ManifestError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ManifestError::UnknownType { name } => write!(f, "Cannot find type '{name}'"),
            ManifestError::CyclicAlias { name } => {
                write!(f, "Type alias '{name}' circularly references itself")
            }
            ManifestError::InvalidLiteral { value } => {
                write!(f, "Literal types must be strings, numbers or booleans, got {value}")
            }
        }
    }
}

impl std::error::Error for ManifestError {}

impl Manifest {
    pub fn from_json(source: &str) -> Result<Manifest, serde_json::Error> {
        serde_json::from_str(source)
    }

    /// Lower this manifest into a fresh type graph.
    pub fn lower(&self) -> Result<TypeGraph, ManifestError> {
        Lowering::new(self).run()
    }
}

struct PendingClass<'m> {
    handle: ClassHandle,
    def: &'m ClassDef,
}

struct Lowering<'m> {
    manifest: &'m Manifest,
    graph: TypeGraph,
    named: FxHashMap<&'m str, TypeId>,
    /// Placeholders of named types currently being lowered.
    pending: FxHashMap<&'m str, TypeId>,
    /// Pending names reached from the current position through unions and
    /// intersections only.
    unguarded: FxHashSet<&'m str>,
}

impl<'m> Lowering<'m> {
    fn new(manifest: &'m Manifest) -> Self {
        Lowering {
            manifest,
            graph: TypeGraph::new(),
            named: FxHashMap::default(),
            pending: FxHashMap::default(),
            unguarded: FxHashSet::default(),
        }
    }

    fn run(mut self) -> Result<TypeGraph, ManifestError> {
        let manifest = self.manifest;

        for (name, def) in &manifest.types {
            if let TypeDef::Object { documentation, .. } = def {
                let ty = self.graph.object(name);
                self.graph.document_type(ty, documentation);
                self.named.insert(name.as_str(), ty);
            }
        }

        let mut classes = Vec::new();
        for unit in &manifest.units {
            let id = self.graph.add_source_unit(&unit.file_name, unit.declaration_file);
            for decl in &unit.declarations {
                self.declare(DeclParent::Unit(id), decl, &mut classes);
            }
        }

        for name in manifest.types.keys() {
            self.resolve_named(name)?;
        }

        for (name, def) in &manifest.types {
            if let TypeDef::Object { properties, .. } = def {
                let owner = self.named[name.as_str()];
                for property in properties {
                    let symbol = self.lower_property(property)?;
                    self.graph.add_property(owner, symbol);
                }
            }
        }

        for PendingClass { handle, def } in classes {
            self.fill_class(&handle, def)?;
        }

        debug!(types = self.graph.type_count(), "lowered manifest");
        Ok(self.graph)
    }

    fn declare(&mut self, parent: DeclParent, decl: &'m DeclDef, classes: &mut Vec<PendingClass<'m>>) {
        match decl {
            DeclDef::Class(def) => match &def.name {
                Some(name) => {
                    let handle = self.graph.declare_class(parent, name, def.exported);
                    self.named
                        .entry(name.as_str())
                        .or_insert(handle.instance_type);
                    classes.push(PendingClass { handle, def });
                }
                None => {
                    self.graph.declare_anonymous_class(parent, def.exported);
                }
            },
            DeclDef::Namespace {
                name,
                exported,
                declarations,
            } => {
                let namespace = self.graph.declare_namespace(parent, name, *exported);
                for child in declarations {
                    self.declare(DeclParent::Namespace(namespace), child, classes);
                }
            }
            DeclDef::Other { name, exported } => {
                self.graph.declare_other(parent, name, *exported);
            }
        }
    }

    fn fill_class(&mut self, handle: &ClassHandle, def: &'m ClassDef) -> Result<(), ManifestError> {
        self.graph.document(handle.symbol, &def.documentation);
        for property in &def.properties {
            let symbol = self.lower_property(property)?;
            self.graph.add_property(handle.instance_type, symbol);
        }
        for property in &def.statics {
            let symbol = self.lower_property(property)?;
            self.graph.add_property(handle.constructor_type, symbol);
        }
        if def.constructors.is_empty() {
            self.graph.add_constructor(handle, Vec::new());
        }
        for constructor in &def.constructors {
            let parameters = self.lower_parameters(&constructor.parameters)?;
            let signature = self.graph.add_constructor(handle, parameters);
            self.graph
                .document_signature(signature, &constructor.documentation);
        }
        Ok(())
    }

    fn resolve_named(&mut self, name: &'m str) -> Result<TypeId, ManifestError> {
        if let Some(&ty) = self.named.get(name) {
            return Ok(ty);
        }
        if let Some(&placeholder) = self.pending.get(name) {
            if self.unguarded.contains(name) {
                return Err(ManifestError::CyclicAlias {
                    name: name.to_string(),
                });
            }
            return Ok(placeholder);
        }
        let manifest = self.manifest;
        if let Some(def) = manifest.types.get(name) {
            let placeholder = self.graph.placeholder(name);
            self.pending.insert(name, placeholder);
            self.unguarded.insert(name);
            let body = self.lower_def(def, Some(name))?;
            self.pending.remove(name);
            self.unguarded.remove(name);
            self.graph.define(placeholder, body);
            self.named.insert(name, placeholder);
            return Ok(placeholder);
        }
        if name == "boolean" {
            return Ok(self.graph.boolean());
        }
        if INTRINSIC_NAMES.contains(&name) {
            return Ok(self.graph.intrinsic(name));
        }
        Err(ManifestError::UnknownType {
            name: name.to_string(),
        })
    }

    fn resolve(&mut self, reference: &'m TypeRef) -> Result<TypeId, ManifestError> {
        match reference {
            TypeRef::Named(name) => self.resolve_named(name),
            TypeRef::Inline(def) => self.lower_def(def, None),
        }
    }

    fn resolve_all(&mut self, references: &'m [TypeRef]) -> Result<Vec<TypeId>, ManifestError> {
        references
            .iter()
            .map(|reference| self.resolve(reference))
            .collect()
    }

    /// Run `lower` below a type constructor that breaks alias cycles.
    fn guarded<T>(
        &mut self,
        lower: impl FnOnce(&mut Self) -> Result<T, ManifestError>,
    ) -> Result<T, ManifestError> {
        let outer = std::mem::take(&mut self.unguarded);
        let result = lower(self);
        self.unguarded = outer;
        result
    }

    /// Lower a type definition. `name` is set for entries of the `types`
    /// table; named objects never reach here because phase 1 created them.
    fn lower_def(&mut self, def: &'m TypeDef, name: Option<&str>) -> Result<TypeId, ManifestError> {
        match def {
            TypeDef::Object {
                properties,
                documentation,
            } => {
                let ty = self.graph.object(name.unwrap_or(ANONYMOUS_TYPE_NAME));
                self.graph.document_type(ty, documentation);
                let parts = self.guarded(|this| {
                    let mut parts = Vec::with_capacity(properties.len());
                    for property in properties {
                        let symbol = this.lower_property(property)?;
                        this.graph.add_property(ty, symbol);
                        parts.push(this.member_display(symbol, property.optional));
                    }
                    Ok(parts)
                })?;
                if name.is_none() {
                    self.graph.type_data_mut(ty).display = if parts.is_empty() {
                        "{}".to_string()
                    } else {
                        format!("{{ {} }}", parts.join(" "))
                    };
                }
                Ok(ty)
            }
            TypeDef::Union {
                members,
                documentation,
            } => {
                let members = self.resolve_all(members)?;
                let ty = match name {
                    Some(name) => self.graph.named_union(name, members),
                    None => self.graph.union(members),
                };
                self.graph.document_type(ty, documentation);
                Ok(ty)
            }
            TypeDef::Intersection { members } => {
                let members = self.resolve_all(members)?;
                Ok(self.graph.intersection(members))
            }
            TypeDef::Enum {
                members,
                documentation,
            } => {
                let mut literals = Vec::with_capacity(members.len());
                for member in members {
                    let value = literal_value(&member.value)?;
                    literals.push(self.graph.enum_member(&member.name, value));
                }
                let enum_name = name.unwrap_or(ANONYMOUS_TYPE_NAME);
                let ty = self.graph.named_union(enum_name, literals);
                self.graph.document_type(ty, documentation);
                Ok(ty)
            }
            TypeDef::Array { element } => {
                let element = self.guarded(|this| this.resolve(element))?;
                Ok(self.graph.array(element))
            }
            TypeDef::Tuple { elements, readonly } => {
                let elements = self.guarded(|this| this.resolve_all(elements))?;
                Ok(if *readonly {
                    self.graph.readonly_tuple(elements)
                } else {
                    self.graph.tuple(elements)
                })
            }
            TypeDef::Function { signatures } => {
                let ids = self.guarded(|this| {
                    signatures
                        .iter()
                        .map(|signature| this.lower_signature(signature))
                        .collect::<Result<Vec<_>, _>>()
                })?;
                Ok(self.graph.function(ids))
            }
            TypeDef::Literal { value } => match literal_value(value)? {
                LiteralValue::String(text) => Ok(self.graph.string_literal(&text)),
                LiteralValue::Number(number) => Ok(self.graph.number_literal(number)),
                LiteralValue::Boolean(flag) => Ok(self.graph.boolean_literal(flag)),
            },
        }
    }

    fn member_display(&self, symbol: SymbolId, optional: bool) -> String {
        let data = self.graph.symbol_data(symbol);
        let ty = data
            .attached_type
            .or(data.declared_type)
            .map_or("any", |ty| self.graph.type_data(ty).display.as_str());
        let marker = if optional { "?" } else { "" };
        format!("{}{marker}: {ty};", data.name)
    }

    fn lower_property(&mut self, property: &'m PropertyDef) -> Result<SymbolId, ManifestError> {
        let ty = self.resolve(&property.ty)?;
        let symbol = if property.mapped {
            self.graph
                .mapped_property(&property.name, ty, property.optional)
        } else if property.optional {
            self.graph.optional_property(&property.name, ty)
        } else {
            self.graph.property(&property.name, ty)
        };
        Ok(self.graph.document(symbol, &property.documentation))
    }

    fn lower_parameters(&mut self, parameters: &'m [PropertyDef]) -> Result<Vec<SymbolId>, ManifestError> {
        let mut symbols = Vec::with_capacity(parameters.len());
        for parameter in parameters {
            let ty = self.resolve(&parameter.ty)?;
            let symbol = if parameter.optional {
                self.graph.optional_parameter(&parameter.name, ty)
            } else {
                self.graph.parameter(&parameter.name, ty)
            };
            symbols.push(self.graph.document(symbol, &parameter.documentation));
        }
        Ok(symbols)
    }

    fn lower_signature(&mut self, signature: &'m SignatureDef) -> Result<SignatureId, ManifestError> {
        let parameters = self.lower_parameters(&signature.parameters)?;
        let return_type = match &signature.return_type {
            Some(reference) => self.resolve(reference)?,
            None => self.graph.void(),
        };
        let id = self.graph.signature(parameters, return_type);
        self.graph.document_signature(id, &signature.documentation);
        Ok(id)
    }
}

fn literal_value(value: &serde_json::Value) -> Result<LiteralValue, ManifestError> {
    match value {
        serde_json::Value::String(text) => Ok(LiteralValue::String(text.clone())),
        serde_json::Value::Bool(flag) => Ok(LiteralValue::Boolean(*flag)),
        serde_json::Value::Number(number) => number
            .as_f64()
            .map(LiteralValue::Number)
            .ok_or_else(|| ManifestError::InvalidLiteral {
                value: number.to_string(),
            }),
        other => Err(ManifestError::InvalidLiteral {
            value: other.to_string(),
        }),
    }
}

#[cfg(test)]
#[path = "../tests/manifest_tests.rs"]
mod tests;
