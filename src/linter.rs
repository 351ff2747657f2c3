//! Host collaborator
//!
//! Owns the tree-sitter parser, walks a source string, feeds import and
//! export nodes to the engine, and collects the resulting fixes. Also
//! knows how to apply the fixes back onto the source and how to render
//! them as JSON for diagnostic output.

use tracing::debug;
use tree_sitter::{Language, Node, Parser};

use crate::engine::{self, Fix};
use crate::error::{RuleError, RuleResult};

/// Walks JavaScript/TypeScript sources and collects formatting fixes for
/// import/export declarations.
pub struct ImportExportLinter {
    parser: Parser,
}

impl ImportExportLinter {
    /// Create a linter backed by the TSX grammar. It also handles plain
    /// TypeScript and JavaScript files, avoiding ERROR roots in TSX files.
    pub fn new() -> RuleResult<Self> {
        let mut parser = Parser::new();
        let language: Language = tree_sitter_typescript::LANGUAGE_TSX.into();
        parser
            .set_language(&language)
            .map_err(|e| RuleError::ParserInit {
                reason: e.to_string(),
            })?;
        Ok(Self { parser })
    }

    /// Inspect every import/re-export declaration in `code` and collect
    /// the fixes, in source order. Each declaration yields at most one
    /// fix per pass.
    pub fn check(&mut self, code: &str) -> RuleResult<Vec<Fix>> {
        let tree = self.parser.parse(code, None).ok_or(RuleError::ParseFailure)?;
        let mut fixes = Vec::new();
        collect_fixes(tree.root_node(), code, &mut fixes)?;
        debug!(fix_count = fixes.len(), "checked source");
        Ok(fixes)
    }

    /// Apply every fix as a full-span substitution and return the new
    /// source text.
    pub fn apply(&mut self, code: &str) -> RuleResult<String> {
        let mut fixes = self.check(code)?;
        fixes.sort_by_key(|fix| fix.start_byte);

        // Substitute back to front so earlier byte offsets stay valid.
        let mut result = code.to_string();
        for fix in fixes.iter().rev() {
            result.replace_range(fix.start_byte..fix.end_byte, &fix.replacement);
        }
        Ok(result)
    }
}

/// JSON rendering of fixes for the host's diagnostic output.
pub fn fixes_to_json(fixes: &[Fix]) -> RuleResult<String> {
    Ok(serde_json::to_string_pretty(fixes)?)
}

fn collect_fixes(node: Node, code: &str, fixes: &mut Vec<Fix>) -> RuleResult<()> {
    match node.kind() {
        "import_statement" | "export_statement" => {
            if let Some(fix) = engine::check_node(node, code)? {
                fixes.push(fix);
            }
        }
        _ => {
            let mut cursor = node.walk();
            for child in node.children(&mut cursor) {
                collect_fixes(child, code, fixes)?;
            }
        }
    }
    Ok(())
}
