//! In-memory type graph.
//!
//! `TypeGraph` is an arena-backed [`TypeProvider`]: every type, symbol,
//! signature, declaration and source unit lives in a `Vec` and is addressed
//! by a `u32` newtype handle. Handle equality is arena-slot identity, so a
//! type that refers back to itself is just an index that appears on its own
//! property list.
//!
//! The builder methods mirror what a compiler front end produces for the
//! constructs the serializer cares about: intrinsics, literals, unions,
//! arrays and tuples, object shapes, call signatures, and class
//! declarations with their constructor types.

use rustc_hash::FxHashMap;
use serde::Serialize;

use crate::flags::{ModifierFlags, SymbolFlags, TypeFlags};
use crate::limits::ARRAY_TYPE_NAME;
use crate::provider::{DeclarationKind, LiteralValue, TypeProvider};

/// Name the compiler gives anonymous type-literal symbols.
pub const ANONYMOUS_TYPE_NAME: &str = "__type";

macro_rules! arena_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
        pub struct $name(pub u32);

        impl $name {
            #[inline]
            pub fn index(self) -> usize {
                self.0 as usize
            }
        }
    };
}

arena_id!(
    /// Handle to a type in a [`TypeGraph`].
    TypeId
);
arena_id!(
    /// Handle to a symbol in a [`TypeGraph`].
    SymbolId
);
arena_id!(SignatureId);
arena_id!(DeclId);
arena_id!(UnitId);

#[derive(Debug, Clone, Default)]
pub struct TypeData {
    pub flags: TypeFlags,
    pub display: String,
    pub symbol: Option<SymbolId>,
    /// Constituents of a union or intersection.
    pub members: Vec<TypeId>,
    pub type_arguments: Option<Vec<TypeId>>,
    /// `None` marks a type whose properties cannot be enumerated.
    pub properties: Option<Vec<SymbolId>>,
    pub call_signatures: Vec<SignatureId>,
    pub construct_signatures: Vec<SignatureId>,
    pub literal: Option<LiteralValue>,
    pub intrinsic: Option<String>,
}

#[derive(Debug, Clone, Default)]
pub struct SymbolData {
    pub name: String,
    pub flags: SymbolFlags,
    pub documentation: String,
    /// Type at the value declaration.
    pub declared_type: Option<TypeId>,
    /// Type carried directly by a synthesized symbol.
    pub attached_type: Option<TypeId>,
}

#[derive(Debug, Clone)]
pub struct SignatureData {
    pub parameters: Vec<SymbolId>,
    pub return_type: TypeId,
    pub documentation: String,
}

/// Where a declaration lives.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclParent {
    Unit(UnitId),
    Namespace(DeclId),
}

#[derive(Debug, Clone)]
pub struct DeclarationData {
    pub kind: DeclarationKind,
    pub name: Option<String>,
    pub modifiers: ModifierFlags,
    pub parent: DeclParent,
    pub children: Vec<DeclId>,
    pub symbol: Option<SymbolId>,
}

#[derive(Debug, Clone)]
pub struct SourceUnitData {
    pub file_name: String,
    pub is_declaration_file: bool,
    pub declarations: Vec<DeclId>,
}

/// Handles created for one class declaration.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ClassHandle {
    pub declaration: DeclId,
    pub symbol: SymbolId,
    /// The instance type, returned by construct signatures.
    pub instance_type: TypeId,
    /// `typeof Class`, the type of the class symbol.
    pub constructor_type: TypeId,
}

/// Arena-backed type graph.
#[derive(Debug, Clone)]
pub struct TypeGraph {
    types: Vec<TypeData>,
    symbols: Vec<SymbolData>,
    signatures: Vec<SignatureData>,
    declarations: Vec<DeclarationData>,
    units: Vec<SourceUnitData>,
    intrinsics: FxHashMap<String, TypeId>,
    array_symbol: SymbolId,
    false_type: TypeId,
    true_type: TypeId,
    boolean_type: TypeId,
}

impl Default for TypeGraph {
    fn default() -> Self {
        Self::new()
    }
}

impl TypeGraph {
    pub fn new() -> Self {
        let mut graph = TypeGraph {
            types: Vec::new(),
            symbols: Vec::new(),
            signatures: Vec::new(),
            declarations: Vec::new(),
            units: Vec::new(),
            intrinsics: FxHashMap::default(),
            array_symbol: SymbolId(0),
            false_type: TypeId(0),
            true_type: TypeId(0),
            boolean_type: TypeId(0),
        };

        graph.array_symbol = graph.alloc_symbol(SymbolData {
            name: ARRAY_TYPE_NAME.to_string(),
            ..SymbolData::default()
        });
        graph.false_type = graph.literal_type(LiteralValue::Boolean(false));
        graph.true_type = graph.literal_type(LiteralValue::Boolean(true));
        graph.boolean_type = graph.alloc_type(TypeData {
            flags: TypeFlags::BOOLEAN | TypeFlags::UNION,
            display: "boolean".to_string(),
            members: vec![graph.false_type, graph.true_type],
            intrinsic: Some("boolean".to_string()),
            ..TypeData::default()
        });
        graph
            .intrinsics
            .insert("boolean".to_string(), graph.boolean_type);
        graph
    }

    // =========================================================================
    // Arena access
    // =========================================================================

    fn alloc_type(&mut self, data: TypeData) -> TypeId {
        let id = TypeId(self.types.len() as u32);
        self.types.push(data);
        id
    }

    fn alloc_symbol(&mut self, data: SymbolData) -> SymbolId {
        let id = SymbolId(self.symbols.len() as u32);
        self.symbols.push(data);
        id
    }

    pub fn type_data(&self, id: TypeId) -> &TypeData {
        &self.types[id.index()]
    }

    pub fn type_data_mut(&mut self, id: TypeId) -> &mut TypeData {
        &mut self.types[id.index()]
    }

    pub fn symbol_data(&self, id: SymbolId) -> &SymbolData {
        &self.symbols[id.index()]
    }

    pub fn symbol_data_mut(&mut self, id: SymbolId) -> &mut SymbolData {
        &mut self.symbols[id.index()]
    }

    pub fn signature_data(&self, id: SignatureId) -> &SignatureData {
        &self.signatures[id.index()]
    }

    pub fn declaration_data(&self, id: DeclId) -> &DeclarationData {
        &self.declarations[id.index()]
    }

    pub fn unit_data(&self, id: UnitId) -> &SourceUnitData {
        &self.units[id.index()]
    }

    pub fn type_count(&self) -> usize {
        self.types.len()
    }

    // =========================================================================
    // Primitive and literal types
    // =========================================================================

    /// Intrinsic type by name (`any`, `string`, `number`, `undefined`, ...).
    /// Interned: the same name always yields the same handle.
    pub fn intrinsic(&mut self, name: &str) -> TypeId {
        if let Some(&id) = self.intrinsics.get(name) {
            return id;
        }
        let flags = match name {
            "any" => TypeFlags::ANY,
            "unknown" => TypeFlags::UNKNOWN,
            "string" => TypeFlags::STRING,
            "number" => TypeFlags::NUMBER,
            "void" => TypeFlags::VOID,
            "undefined" => TypeFlags::UNDEFINED,
            "null" => TypeFlags::NULL,
            "never" => TypeFlags::NEVER,
            _ => TypeFlags::empty(),
        };
        let id = self.alloc_type(TypeData {
            flags,
            display: name.to_string(),
            intrinsic: Some(name.to_string()),
            ..TypeData::default()
        });
        self.intrinsics.insert(name.to_string(), id);
        id
    }

    pub fn any(&mut self) -> TypeId {
        self.intrinsic("any")
    }

    pub fn string(&mut self) -> TypeId {
        self.intrinsic("string")
    }

    pub fn number(&mut self) -> TypeId {
        self.intrinsic("number")
    }

    pub fn void(&mut self) -> TypeId {
        self.intrinsic("void")
    }

    pub fn undefined(&mut self) -> TypeId {
        self.intrinsic("undefined")
    }

    /// The `boolean` type, modelled as the union `false | true`.
    pub fn boolean(&self) -> TypeId {
        self.boolean_type
    }

    fn literal_type(&mut self, value: LiteralValue) -> TypeId {
        let (flags, display) = match &value {
            LiteralValue::String(text) => (TypeFlags::STRING_LITERAL, format!("\"{text}\"")),
            LiteralValue::Number(number) => (TypeFlags::NUMBER_LITERAL, format_number(*number)),
            LiteralValue::Boolean(flag) => (TypeFlags::BOOLEAN_LITERAL, flag.to_string()),
        };
        self.alloc_type(TypeData {
            flags,
            display,
            literal: Some(value),
            ..TypeData::default()
        })
    }

    pub fn string_literal(&mut self, value: &str) -> TypeId {
        self.literal_type(LiteralValue::String(value.to_string()))
    }

    pub fn number_literal(&mut self, value: f64) -> TypeId {
        self.literal_type(LiteralValue::Number(value))
    }

    pub fn boolean_literal(&self, value: bool) -> TypeId {
        if value { self.true_type } else { self.false_type }
    }

    /// Literal type that belongs to an enum member, named by the member.
    pub fn enum_member(&mut self, name: &str, value: LiteralValue) -> TypeId {
        let symbol = self.alloc_symbol(SymbolData {
            name: name.to_string(),
            ..SymbolData::default()
        });
        let ty = self.literal_type(value);
        self.types[ty.index()].symbol = Some(symbol);
        ty
    }

    // =========================================================================
    // Composite types
    // =========================================================================

    /// Union type. A `boolean` member is flattened into `false | true`, as
    /// the compiler does.
    pub fn union(&mut self, members: Vec<TypeId>) -> TypeId {
        self.composite(members, TypeFlags::UNION, " | ", None)
    }

    /// Named union, such as an enum or a type alias of a union.
    pub fn named_union(&mut self, name: &str, members: Vec<TypeId>) -> TypeId {
        let symbol = self.alloc_symbol(SymbolData {
            name: name.to_string(),
            flags: SymbolFlags::TYPE_ALIAS,
            ..SymbolData::default()
        });
        self.composite(members, TypeFlags::UNION, " | ", Some((name, symbol)))
    }

    pub fn intersection(&mut self, members: Vec<TypeId>) -> TypeId {
        self.composite(members, TypeFlags::INTERSECTION, " & ", None)
    }

    fn composite(
        &mut self,
        members: Vec<TypeId>,
        flags: TypeFlags,
        separator: &str,
        named: Option<(&str, SymbolId)>,
    ) -> TypeId {
        let display = match named {
            Some((name, _)) => name.to_string(),
            None => members
                .iter()
                .map(|&member| self.type_data(member).display.as_str())
                .collect::<Vec<_>>()
                .join(separator),
        };
        let mut flattened = Vec::with_capacity(members.len());
        for member in members {
            if member == self.boolean_type && flags.contains(TypeFlags::UNION) {
                flattened.extend([self.false_type, self.true_type]);
            } else {
                flattened.push(member);
            }
        }
        self.alloc_type(TypeData {
            flags,
            display,
            symbol: named.map(|(_, symbol)| symbol),
            members: flattened,
            ..TypeData::default()
        })
    }

    /// `element[]`, an instance of the global array type.
    pub fn array(&mut self, element: TypeId) -> TypeId {
        let element_data = self.type_data(element);
        let anonymous_union = element_data.symbol.is_none()
            && element_data.flags.intersects(TypeFlags::UNION_OR_INTERSECTION)
            && !element_data.flags.contains(TypeFlags::BOOLEAN);
        let needs_parens = anonymous_union || !element_data.call_signatures.is_empty();
        let display = if needs_parens {
            format!("({})[]", element_data.display)
        } else {
            format!("{}[]", element_data.display)
        };
        self.alloc_type(TypeData {
            flags: TypeFlags::OBJECT,
            display,
            symbol: Some(self.array_symbol),
            type_arguments: Some(vec![element]),
            properties: Some(Vec::new()),
            ..TypeData::default()
        })
    }

    /// Tuple type. The empty tuple renders as `[]`.
    pub fn tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.tuple_type(elements, false)
    }

    /// `readonly [...]`, the type of an `as const` array literal.
    pub fn readonly_tuple(&mut self, elements: Vec<TypeId>) -> TypeId {
        self.tuple_type(elements, true)
    }

    fn tuple_type(&mut self, elements: Vec<TypeId>, readonly: bool) -> TypeId {
        let inner = elements
            .iter()
            .map(|&element| self.type_data(element).display.as_str())
            .collect::<Vec<_>>()
            .join(", ");
        let display = if readonly {
            format!("readonly [{inner}]")
        } else {
            format!("[{inner}]")
        };
        let symbol = self.alloc_symbol(SymbolData {
            name: ANONYMOUS_TYPE_NAME.to_string(),
            ..SymbolData::default()
        });
        self.alloc_type(TypeData {
            flags: TypeFlags::OBJECT,
            display,
            symbol: Some(symbol),
            type_arguments: Some(elements),
            properties: Some(Vec::new()),
            ..TypeData::default()
        })
    }

    /// Object shape with no properties yet. The shape is displayed as `name`
    /// and owns a symbol of the same name, so cyclic shapes can be built by
    /// adding properties that refer back to the returned handle.
    pub fn object(&mut self, name: &str) -> TypeId {
        let symbol = self.alloc_symbol(SymbolData {
            name: name.to_string(),
            flags: SymbolFlags::TYPE_ALIAS,
            ..SymbolData::default()
        });
        self.alloc_type(TypeData {
            flags: TypeFlags::OBJECT,
            display: name.to_string(),
            symbol: Some(symbol),
            properties: Some(Vec::new()),
            ..TypeData::default()
        })
    }

    /// Reserve a handle for a named type whose definition refers back to
    /// itself. Displays as `name` until [`TypeGraph::define`] fills it in.
    pub fn placeholder(&mut self, name: &str) -> TypeId {
        self.alloc_type(TypeData {
            display: name.to_string(),
            ..TypeData::default()
        })
    }

    /// Give `placeholder` the data of the finished `body`. References taken
    /// while the body was being built now reach the complete type.
    pub fn define(&mut self, placeholder: TypeId, body: TypeId) {
        self.types[placeholder.index()] = self.types[body.index()].clone();
    }

    pub fn add_property(&mut self, owner: TypeId, property: SymbolId) {
        self.types[owner.index()]
            .properties
            .get_or_insert_with(Vec::new)
            .push(property);
    }

    /// Callable object type. Displayed in arrow form for one signature and
    /// in type-literal form for overloads.
    pub fn function(&mut self, signatures: Vec<SignatureId>) -> TypeId {
        let display = match signatures.as_slice() {
            [single] => {
                let (params, ret) = self.signature_parts(*single);
                format!("({params}) => {ret}")
            }
            many => {
                let members = many
                    .iter()
                    .map(|&signature| {
                        let (params, ret) = self.signature_parts(signature);
                        format!("({params}): {ret}; ")
                    })
                    .collect::<String>();
                format!("{{ {members}}}")
            }
        };
        let symbol = self.alloc_symbol(SymbolData {
            name: ANONYMOUS_TYPE_NAME.to_string(),
            ..SymbolData::default()
        });
        self.alloc_type(TypeData {
            flags: TypeFlags::OBJECT,
            display,
            symbol: Some(symbol),
            properties: Some(Vec::new()),
            call_signatures: signatures,
            ..TypeData::default()
        })
    }

    fn signature_parts(&self, signature: SignatureId) -> (String, String) {
        let data = self.signature_data(signature);
        let params = data
            .parameters
            .iter()
            .map(|&parameter| {
                let symbol = self.symbol_data(parameter);
                let optional = if symbol.flags.contains(SymbolFlags::OPTIONAL) {
                    "?"
                } else {
                    ""
                };
                let ty = symbol
                    .declared_type
                    .or(symbol.attached_type)
                    .map_or("any", |ty| self.type_data(ty).display.as_str());
                format!("{}{optional}: {ty}", symbol.name)
            })
            .collect::<Vec<_>>()
            .join(", ");
        (params, self.type_data(data.return_type).display.clone())
    }

    // =========================================================================
    // Symbols and signatures
    // =========================================================================

    fn value_symbol(&mut self, name: &str, ty: TypeId, flags: SymbolFlags) -> SymbolId {
        self.alloc_symbol(SymbolData {
            name: name.to_string(),
            flags,
            declared_type: Some(ty),
            ..SymbolData::default()
        })
    }

    pub fn property(&mut self, name: &str, ty: TypeId) -> SymbolId {
        self.value_symbol(name, ty, SymbolFlags::PROPERTY)
    }

    pub fn optional_property(&mut self, name: &str, ty: TypeId) -> SymbolId {
        self.value_symbol(name, ty, SymbolFlags::PROPERTY | SymbolFlags::OPTIONAL)
    }

    /// Synthesized mapped-type member: no declaration, type attached directly.
    pub fn mapped_property(&mut self, name: &str, ty: TypeId, optional: bool) -> SymbolId {
        let mut flags = SymbolFlags::PROPERTY | SymbolFlags::TRANSIENT;
        if optional {
            flags |= SymbolFlags::OPTIONAL;
        }
        self.alloc_symbol(SymbolData {
            name: name.to_string(),
            flags,
            attached_type: Some(ty),
            ..SymbolData::default()
        })
    }

    pub fn parameter(&mut self, name: &str, ty: TypeId) -> SymbolId {
        self.value_symbol(name, ty, SymbolFlags::PARAMETER)
    }

    pub fn optional_parameter(&mut self, name: &str, ty: TypeId) -> SymbolId {
        self.value_symbol(name, ty, SymbolFlags::PARAMETER | SymbolFlags::OPTIONAL)
    }

    /// Attach a documentation comment to a symbol.
    pub fn document(&mut self, symbol: SymbolId, text: &str) -> SymbolId {
        self.symbols[symbol.index()].documentation = text.to_string();
        symbol
    }

    /// Attach a documentation comment to the symbol of a named type.
    pub fn document_type(&mut self, ty: TypeId, text: &str) {
        if let Some(symbol) = self.type_data(ty).symbol {
            self.document(symbol, text);
        }
    }

    pub fn signature(&mut self, parameters: Vec<SymbolId>, return_type: TypeId) -> SignatureId {
        let id = SignatureId(self.signatures.len() as u32);
        self.signatures.push(SignatureData {
            parameters,
            return_type,
            documentation: String::new(),
        });
        id
    }

    pub fn document_signature(&mut self, signature: SignatureId, text: &str) {
        self.signatures[signature.index()].documentation = text.to_string();
    }

    // =========================================================================
    // Source units and declarations
    // =========================================================================

    pub fn add_source_unit(&mut self, file_name: &str, is_declaration_file: bool) -> UnitId {
        let id = UnitId(self.units.len() as u32);
        self.units.push(SourceUnitData {
            file_name: file_name.to_string(),
            is_declaration_file,
            declarations: Vec::new(),
        });
        id
    }

    fn add_declaration(
        &mut self,
        parent: DeclParent,
        kind: DeclarationKind,
        name: Option<&str>,
        exported: bool,
        symbol: Option<SymbolId>,
    ) -> DeclId {
        let id = DeclId(self.declarations.len() as u32);
        let modifiers = if exported {
            ModifierFlags::EXPORT
        } else {
            ModifierFlags::empty()
        };
        self.declarations.push(DeclarationData {
            kind,
            name: name.map(str::to_string),
            modifiers,
            parent,
            children: Vec::new(),
            symbol,
        });
        match parent {
            DeclParent::Unit(unit) => self.units[unit.index()].declarations.push(id),
            DeclParent::Namespace(namespace) => {
                self.declarations[namespace.index()].children.push(id);
            }
        }
        id
    }

    /// Declare a class: its symbol, an empty instance shape and the
    /// `typeof Class` constructor type. Construct signatures are added with
    /// [`TypeGraph::add_constructor`].
    pub fn declare_class(&mut self, parent: DeclParent, name: &str, exported: bool) -> ClassHandle {
        let symbol = self.alloc_symbol(SymbolData {
            name: name.to_string(),
            flags: SymbolFlags::CLASS,
            ..SymbolData::default()
        });
        let instance_type = self.alloc_type(TypeData {
            flags: TypeFlags::OBJECT,
            display: name.to_string(),
            symbol: Some(symbol),
            properties: Some(Vec::new()),
            ..TypeData::default()
        });
        let constructor_type = self.alloc_type(TypeData {
            flags: TypeFlags::OBJECT,
            display: format!("typeof {name}"),
            symbol: Some(symbol),
            properties: Some(Vec::new()),
            ..TypeData::default()
        });
        self.symbols[symbol.index()].declared_type = Some(constructor_type);
        let declaration = self.add_declaration(
            parent,
            DeclarationKind::Class,
            Some(name),
            exported,
            Some(symbol),
        );
        ClassHandle {
            declaration,
            symbol,
            instance_type,
            constructor_type,
        }
    }

    /// Add a construct signature returning the class instance type.
    pub fn add_constructor(&mut self, class: &ClassHandle, parameters: Vec<SymbolId>) -> SignatureId {
        let signature = self.signature(parameters, class.instance_type);
        self.types[class.constructor_type.index()]
            .construct_signatures
            .push(signature);
        signature
    }

    /// Class expression without a name: declared, but with no symbol.
    pub fn declare_anonymous_class(&mut self, parent: DeclParent, exported: bool) -> DeclId {
        self.add_declaration(parent, DeclarationKind::Class, None, exported, None)
    }

    pub fn declare_namespace(&mut self, parent: DeclParent, name: &str, exported: bool) -> DeclId {
        self.add_declaration(parent, DeclarationKind::Namespace, Some(name), exported, None)
    }

    /// Any declaration the walker does not document (type aliases,
    /// functions, variables).
    pub fn declare_other(&mut self, parent: DeclParent, name: &str, exported: bool) -> DeclId {
        self.add_declaration(parent, DeclarationKind::Other, Some(name), exported, None)
    }
}

/// Render a number the way the compiler prints numeric literal types.
pub fn format_number(value: f64) -> String {
    if value.is_finite() && value.fract() == 0.0 && value.abs() < 1e21 {
        format!("{}", value as i64)
    } else {
        value.to_string()
    }
}

impl TypeProvider for TypeGraph {
    type Type = TypeId;
    type Symbol = SymbolId;
    type Signature = SignatureId;
    type Declaration = DeclId;
    type SourceUnit = UnitId;

    fn type_flags(&self, ty: TypeId) -> TypeFlags {
        self.type_data(ty).flags
    }

    fn type_to_string(&self, ty: TypeId) -> String {
        self.type_data(ty).display.clone()
    }

    fn type_symbol(&self, ty: TypeId) -> Option<SymbolId> {
        self.type_data(ty).symbol
    }

    fn call_signatures(&self, ty: TypeId) -> Vec<SignatureId> {
        self.type_data(ty).call_signatures.clone()
    }

    fn construct_signatures(&self, ty: TypeId) -> Vec<SignatureId> {
        self.type_data(ty).construct_signatures.clone()
    }

    fn union_members(&self, ty: TypeId) -> Vec<TypeId> {
        self.type_data(ty).members.clone()
    }

    fn type_arguments(&self, ty: TypeId) -> Option<Vec<TypeId>> {
        self.type_data(ty).type_arguments.clone()
    }

    fn properties(&self, ty: TypeId) -> Option<Vec<SymbolId>> {
        self.type_data(ty).properties.clone()
    }

    fn literal_value(&self, ty: TypeId) -> Option<LiteralValue> {
        self.type_data(ty).literal.clone()
    }

    fn intrinsic_name(&self, ty: TypeId) -> Option<String> {
        self.type_data(ty).intrinsic.clone()
    }

    fn symbol_name(&self, symbol: SymbolId) -> String {
        self.symbol_data(symbol).name.clone()
    }

    fn symbol_flags(&self, symbol: SymbolId) -> SymbolFlags {
        self.symbol_data(symbol).flags
    }

    fn symbol_documentation(&self, symbol: SymbolId) -> String {
        self.symbol_data(symbol).documentation.clone()
    }

    fn type_of_symbol(&self, symbol: SymbolId) -> Option<TypeId> {
        self.symbol_data(symbol).declared_type
    }

    fn attached_type(&self, symbol: SymbolId) -> Option<TypeId> {
        self.symbol_data(symbol).attached_type
    }

    fn signature_parameters(&self, signature: SignatureId) -> Vec<SymbolId> {
        self.signature_data(signature).parameters.clone()
    }

    fn signature_return_type(&self, signature: SignatureId) -> TypeId {
        self.signature_data(signature).return_type
    }

    fn signature_documentation(&self, signature: SignatureId) -> String {
        self.signature_data(signature).documentation.clone()
    }

    fn source_units(&self) -> Vec<UnitId> {
        (0..self.units.len() as u32).map(UnitId).collect()
    }

    fn source_unit_name(&self, unit: UnitId) -> String {
        self.unit_data(unit).file_name.clone()
    }

    fn is_declaration_file(&self, unit: UnitId) -> bool {
        self.unit_data(unit).is_declaration_file
    }

    fn unit_declarations(&self, unit: UnitId) -> Vec<DeclId> {
        self.unit_data(unit).declarations.clone()
    }

    fn declaration_kind(&self, decl: DeclId) -> DeclarationKind {
        self.declaration_data(decl).kind
    }

    fn modifier_flags(&self, decl: DeclId) -> ModifierFlags {
        self.declaration_data(decl).modifiers
    }

    fn is_top_level(&self, decl: DeclId) -> bool {
        matches!(self.declaration_data(decl).parent, DeclParent::Unit(_))
    }

    fn declaration_children(&self, decl: DeclId) -> Vec<DeclId> {
        self.declaration_data(decl).children.clone()
    }

    fn declaration_symbol(&self, decl: DeclId) -> Option<SymbolId> {
        self.declaration_data(decl).symbol
    }
}

#[cfg(test)]
#[path = "../tests/graph_tests.rs"]
mod tests;
