//! Clause model builder
//!
//! Converts raw `import_statement` / `export_statement` tree-sitter nodes
//! into [`DeclarationModel`] values. The builder only accepts declarations
//! the engine has already filtered: at least one named specifier, and for
//! re-exports an explicit source module. Anything else reaching it is a
//! contract violation and fails fast.
//!
//! Node kinds follow the tree-sitter-typescript grammar: an
//! `import_statement` holds an `import_clause` (default `identifier`,
//! `named_imports` with `import_specifier` children, or
//! `namespace_import`) and a `source` field; an `export_statement` holds
//! an `export_clause` with `export_specifier` children and, for
//! re-exports, a `source` field.

use tree_sitter::Node;

use crate::error::{RuleError, RuleResult};
use crate::model::{Clause, DeclarationKind, DeclarationModel};

/// True when the import carries at least one `{ .. }` named specifier.
/// Default-only, namespace and side-effect imports report false.
pub fn has_named_import_specifiers(node: Node) -> bool {
    find_child(node, "import_clause")
        .and_then(|clause| find_child(clause, "named_imports"))
        .is_some_and(|named| find_child(named, "import_specifier").is_some())
}

/// True when the export carries at least one `{ .. }` specifier.
/// `export *`, `export * as ns` and declaration-body exports report false.
pub fn has_named_export_specifiers(node: Node) -> bool {
    find_child(node, "export_clause")
        .is_some_and(|clause| find_child(clause, "export_specifier").is_some())
}

/// Build the model for an import declaration with named specifiers.
pub fn build_import_model(node: Node, code: &str) -> RuleResult<DeclarationModel> {
    let line = line_of(node);
    let source_module = read_source_module(node, code, line)?;

    let import_clause =
        find_child(node, "import_clause").ok_or(RuleError::EmptyDeclaration { line })?;

    let mut default_binding = None;
    let mut clauses = Vec::new();

    let mut cursor = import_clause.walk();
    for child in import_clause.children(&mut cursor) {
        match child.kind() {
            // A default specifier is a bare identifier, always first.
            "identifier" => default_binding = Some(code[child.byte_range()].to_string()),
            "named_imports" => {
                let mut named_cursor = child.walk();
                for specifier in child.children(&mut named_cursor) {
                    if !specifier.is_named() || specifier.kind() == "comment" {
                        continue;
                    }
                    if specifier.kind() != "import_specifier" {
                        return Err(RuleError::UnexpectedSpecifier {
                            kind: specifier.kind().to_string(),
                            line,
                        });
                    }
                    clauses.push(read_clause(specifier, code, line)?);
                }
            }
            "namespace_import" => {
                // Filtered out upstream; this system never reformats them.
                return Err(RuleError::UnexpectedSpecifier {
                    kind: "namespace_import".to_string(),
                    line,
                });
            }
            _ => {}
        }
    }

    if clauses.is_empty() {
        return Err(RuleError::EmptyDeclaration { line });
    }

    Ok(DeclarationModel {
        kind: DeclarationKind::Import,
        source_module,
        default_binding,
        clauses,
        type_only: is_type_only(node),
    })
}

/// Build the model for a re-export declaration. The node must carry a
/// source module; sourceless re-exports are filtered out upstream.
pub fn build_reexport_model(node: Node, code: &str) -> RuleResult<DeclarationModel> {
    let line = line_of(node);

    let source = node
        .child_by_field_name("source")
        .ok_or(RuleError::ReexportWithoutSource { line })?;
    let source_module = unquote(&code[source.byte_range()]);
    if source_module.is_empty() {
        return Err(RuleError::EmptySourceModule { line });
    }

    let export_clause =
        find_child(node, "export_clause").ok_or(RuleError::EmptyDeclaration { line })?;

    let mut clauses = Vec::new();
    let mut cursor = export_clause.walk();
    for specifier in export_clause.children(&mut cursor) {
        if !specifier.is_named() || specifier.kind() == "comment" {
            continue;
        }
        if specifier.kind() != "export_specifier" {
            return Err(RuleError::UnexpectedSpecifier {
                kind: specifier.kind().to_string(),
                line,
            });
        }
        clauses.push(read_clause(specifier, code, line)?);
    }

    if clauses.is_empty() {
        return Err(RuleError::EmptyDeclaration { line });
    }

    Ok(DeclarationModel {
        kind: DeclarationKind::Reexport,
        source_module,
        default_binding: None,
        clauses,
        type_only: is_type_only(node),
    })
}

/// Read one `import_specifier` / `export_specifier` into a clause.
///
/// The `name` field is the external side, the optional `alias` field the
/// local-facing side; an absent alias means both sides share the name.
fn read_clause(specifier: Node, code: &str, line: u32) -> RuleResult<Clause> {
    let name = specifier
        .child_by_field_name("name")
        .ok_or(RuleError::SpecifierWithoutName { line })?;
    let external = resolve_name(name, code);
    let local = specifier
        .child_by_field_name("alias")
        .map(|alias| resolve_name(alias, code))
        .unwrap_or_else(|| external.clone());
    Ok(Clause { external, local })
}

/// Resolve a specifier name written either as a plain identifier or a
/// quoted string literal to its plain text. Generated text always
/// re-renders the name as a plain identifier token.
fn resolve_name(node: Node, code: &str) -> String {
    let text = &code[node.byte_range()];
    if node.kind() == "string" {
        unquote(text)
    } else {
        text.to_string()
    }
}

fn read_source_module(node: Node, code: &str, line: u32) -> RuleResult<String> {
    let source = node
        .child_by_field_name("source")
        .ok_or(RuleError::MissingSourceModule { line })?;
    let text = unquote(&code[source.byte_range()]);
    if text.is_empty() {
        return Err(RuleError::EmptySourceModule { line });
    }
    Ok(text)
}

fn unquote(text: &str) -> String {
    text.trim_matches(|c| c == '"' || c == '\'' || c == '`')
        .to_string()
}

/// `import type { .. }` / `export type { .. }` carry a `type` keyword as
/// a direct child of the statement node.
fn is_type_only(node: Node) -> bool {
    find_child(node, "type").is_some()
}

fn find_child<'tree>(node: Node<'tree>, kind: &str) -> Option<Node<'tree>> {
    let mut cursor = node.walk();
    node.children(&mut cursor).find(|child| child.kind() == kind)
}

fn line_of(node: Node) -> u32 {
    node.start_position().row as u32 + 1
}
