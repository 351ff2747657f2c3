//! Canonical renderers
//!
//! Two pure functions per declaration kind: one-line and multi-line.
//! Identical model in, identical text out; quotes in generated text use
//! the single-quote style regardless of what the source used.

use crate::model::{Clause, DeclarationModel};

/// Fixed indentation for multi-line clause lines.
pub const INDENT: &str = "    ";

/// `import <type ><default, >{ <ext> as <local>, ... } from '<module>';`
pub fn one_line_import(model: &DeclarationModel) -> String {
    format!(
        "import {}{}{{ {} }} from '{}';",
        type_prefix(model),
        default_prefix(model),
        inline_clauses(&model.clauses),
        model.source_module,
    )
}

/// `export <type >{ <local> as <exported>, ... } from '<module>';`
pub fn one_line_reexport(model: &DeclarationModel) -> String {
    format!(
        "export {}{{ {} }} from '{}';",
        type_prefix(model),
        inline_clauses(&model.clauses),
        model.source_module,
    )
}

/// Opening line carries the default binding inline when present; one
/// clause per line at fixed indent, trailing commas throughout.
pub fn multi_line_import(model: &DeclarationModel) -> String {
    let mut lines = Vec::with_capacity(model.clauses.len() + 2);
    lines.push(format!(
        "import {}{}{{",
        type_prefix(model),
        default_prefix(model)
    ));
    push_clause_lines(&mut lines, &model.clauses);
    lines.push(format!("}} from '{}';", model.source_module));
    lines.join("\n")
}

pub fn multi_line_reexport(model: &DeclarationModel) -> String {
    let mut lines = Vec::with_capacity(model.clauses.len() + 2);
    lines.push(format!("export {}{{", type_prefix(model)));
    push_clause_lines(&mut lines, &model.clauses);
    lines.push(format!("}} from '{}';", model.source_module));
    lines.join("\n")
}

/// `<external> as <local>`, collapsed to the bare name when equal.
///
/// Both kinds share this shape: for imports it reads
/// `imported as localBinding`, for re-exports `localName as exportedName`.
fn clause_text(clause: &Clause) -> String {
    if clause.is_shorthand() {
        clause.external.clone()
    } else {
        format!("{} as {}", clause.external, clause.local)
    }
}

fn inline_clauses(clauses: &[Clause]) -> String {
    clauses
        .iter()
        .map(clause_text)
        .collect::<Vec<_>>()
        .join(", ")
}

fn push_clause_lines(lines: &mut Vec<String>, clauses: &[Clause]) {
    for clause in clauses {
        lines.push(format!("{INDENT}{},", clause_text(clause)));
    }
}

fn type_prefix(model: &DeclarationModel) -> &'static str {
    if model.type_only { "type " } else { "" }
}

fn default_prefix(model: &DeclarationModel) -> String {
    match &model.default_binding {
        Some(name) => format!("{name}, "),
        None => String::new(),
    }
}
