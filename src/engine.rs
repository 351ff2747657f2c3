//! Engine entry point
//!
//! One handler per declaration kind, dispatched by node kind the way the
//! host's traversal feeds nodes in. Each handler filters out declarations
//! this system never reformats, builds the model, evaluates the decision
//! policy against the node's current shape, and on a non-bail outcome
//! produces the replacement the host applies over the original span.

use serde::Serialize;
use tracing::debug;
use tree_sitter::Node;

use crate::error::RuleResult;
use crate::model::{DeclarationKind, DeclarationModel};
use crate::parsing;
use crate::policy::{self, Decision};
use crate::render;
use crate::types::Range;

/// Stable diagnostic identifier surfaced to the host.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum DiagnosticKind {
    /// Single-line declaration longer than the limit.
    LongOneLiner,
    /// Multi-line declaration that fits on one line.
    ShortMultiline,
}

impl DiagnosticKind {
    /// User-facing message for this diagnostic.
    pub fn message(&self) -> &'static str {
        match self {
            Self::LongOneLiner => "Import/Export exceeds specified length.",
            Self::ShortMultiline => "Import/Export is shorter than specified length.",
        }
    }
}

/// A replacement the host applies as a full-span text substitution over
/// the original declaration.
#[derive(Debug, Clone, Serialize)]
pub struct Fix {
    pub kind: DiagnosticKind,
    pub replacement: String,
    pub range: Range,
    pub start_byte: usize,
    pub end_byte: usize,
}

/// Dispatch keyed by node kind. Nodes of any other kind are not inspected.
pub fn check_node(node: Node, code: &str) -> RuleResult<Option<Fix>> {
    match node.kind() {
        "import_statement" => check_import(node, code),
        "export_statement" => check_reexport(node, code),
        _ => Ok(None),
    }
}

/// Inspect one import declaration.
///
/// Default-only, namespace and side-effect imports pass through untouched.
pub fn check_import(node: Node, code: &str) -> RuleResult<Option<Fix>> {
    if !parsing::has_named_import_specifiers(node) {
        return Ok(None);
    }
    let model = parsing::build_import_model(node, code)?;
    let one_liner = render::one_line_import(&model);
    Ok(evaluate(node, &model, one_liner))
}

/// Inspect one re-export declaration.
///
/// Only pure re-exports are considered: no inline declaration body, an
/// explicit source module, and at least one named specifier.
pub fn check_reexport(node: Node, code: &str) -> RuleResult<Option<Fix>> {
    if node.child_by_field_name("declaration").is_some() {
        return Ok(None);
    }
    if node.child_by_field_name("source").is_none() {
        return Ok(None);
    }
    if !parsing::has_named_export_specifiers(node) {
        return Ok(None);
    }
    let model = parsing::build_reexport_model(node, code)?;
    let one_liner = render::one_line_reexport(&model);
    Ok(evaluate(node, &model, one_liner))
}

fn evaluate(node: Node, model: &DeclarationModel, one_liner: String) -> Option<Fix> {
    let is_multiline = node.start_position().row != node.end_position().row;
    let one_line_len = one_liner.chars().count();
    let is_exceeding = policy::exceeds_limit(one_line_len);

    let decision = policy::decide(is_multiline, is_exceeding);
    debug!(
        ?decision,
        is_multiline,
        one_line_len,
        line = node.start_position().row + 1,
        "inspected declaration"
    );

    let (kind, replacement) = match decision {
        Decision::Bail => return None,
        Decision::ToOneLine => (DiagnosticKind::ShortMultiline, one_liner),
        Decision::ToMultiLine => {
            let text = match model.kind {
                DeclarationKind::Import => render::multi_line_import(model),
                DeclarationKind::Reexport => render::multi_line_reexport(model),
            };
            (DiagnosticKind::LongOneLiner, text)
        }
    };

    Some(Fix {
        kind,
        replacement,
        range: Range::from_node(&node),
        start_byte: node.start_byte(),
        end_byte: node.end_byte(),
    })
}
