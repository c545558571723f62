//! Declaration walker and documentation entry points.
//!
//! Walks the top-level declarations of each source unit, descends into
//! namespaces, and documents every exported class. Each class gets its own
//! fresh [`TraversalContext`]; nothing is shared between classes, so one
//! class's failure is recorded and the walk carries on.

use serde::Serialize;
use tracing::{debug_span, trace, warn};

use crate::context::TraversalContext;
use crate::doc::ClassDoc;
use crate::error::DocGenError;
use crate::flags::ModifierFlags;
use crate::options::DocGenOptions;
use crate::provider::{DeclarationKind, TypeProvider};
use crate::serialize::serialize_class;

/// A class whose serialization was aborted.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassFailure {
    pub class_name: String,
    pub file_name: String,
    pub error: DocGenError,
}

impl std::fmt::Display for ClassFailure {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: class {}: {}", self.file_name, self.class_name, self.error)
    }
}

/// Result of documenting one or more source units.
///
/// Serializes as the plain class list; failures are reported separately.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Documentation {
    pub classes: Vec<ClassDoc>,
    #[serde(skip)]
    pub failures: Vec<ClassFailure>,
}

impl Documentation {
    pub fn is_complete(&self) -> bool {
        self.failures.is_empty()
    }

    /// Append another result, keeping order.
    pub fn extend(&mut self, other: Documentation) {
        self.classes.extend(other.classes);
        self.failures.extend(other.failures);
    }
}

/// True if the declaration is visible outside its source unit: it carries an
/// `export` modifier or sits directly in the source unit.
pub fn is_node_exported<P: TypeProvider>(provider: &P, decl: P::Declaration) -> bool {
    provider.modifier_flags(decl).contains(ModifierFlags::EXPORT) || provider.is_top_level(decl)
}

/// Document every exported class reachable from `decl`.
pub fn visit<P: TypeProvider>(
    provider: &P,
    decl: P::Declaration,
    file_name: &str,
    options: DocGenOptions,
    output: &mut Documentation,
) {
    if !is_node_exported(provider, decl) {
        trace!(?decl, "declaration not exported, skipping");
        return;
    }

    match provider.declaration_kind(decl) {
        DeclarationKind::Class => {
            let Some(symbol) = provider.declaration_symbol(decl) else {
                trace!(?decl, "anonymous class, skipping");
                return;
            };
            let ctx = TraversalContext::new(options);
            match serialize_class(provider, &ctx, symbol, file_name) {
                Ok(Some(doc)) => output.classes.push(doc),
                Ok(None) => {}
                Err(error) => {
                    let class_name = provider.symbol_name(symbol);
                    warn!(class = %class_name, file = file_name, %error, "failed to document class");
                    output.failures.push(ClassFailure {
                        class_name,
                        file_name: file_name.to_string(),
                        error,
                    });
                }
            }
        }
        DeclarationKind::Namespace => {
            for child in provider.declaration_children(decl) {
                visit(provider, child, file_name, options, output);
            }
        }
        DeclarationKind::Other => {}
    }
}

/// Document the exported classes reachable from a single declaration of
/// `unit`.
pub fn generate_documentation_from_node<P: TypeProvider>(
    provider: &P,
    unit: P::SourceUnit,
    decl: P::Declaration,
    options: DocGenOptions,
) -> Documentation {
    let file_name = provider.source_unit_name(unit);
    let mut output = Documentation::default();
    visit(provider, decl, &file_name, options.clamped(), &mut output);
    output
}

/// Document the given source units, in order. Declaration files are skipped.
pub fn generate_documentation_from_units<P: TypeProvider>(
    provider: &P,
    units: &[P::SourceUnit],
    options: DocGenOptions,
) -> Documentation {
    let options = options.clamped();
    let mut output = Documentation::default();

    for &unit in units {
        if provider.is_declaration_file(unit) {
            continue;
        }
        let file_name = provider.source_unit_name(unit);
        let _span = debug_span!("unit", file = %file_name).entered();
        for decl in provider.unit_declarations(unit) {
            visit(provider, decl, &file_name, options, &mut output);
        }
    }

    output
}

/// Document every non-declaration source unit the provider knows about.
pub fn generate_documentation<P: TypeProvider>(
    provider: &P,
    options: DocGenOptions,
) -> Documentation {
    generate_documentation_from_units(provider, &provider.source_units(), options)
}

#[cfg(test)]
#[path = "../tests/walker_tests.rs"]
mod tests;
