//! Small core types shared across the crate.

use serde::{Deserialize, Serialize};

/// Source span of a declaration, in zero-based lines and columns.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Range {
    pub start_line: u32,
    pub start_column: u16,
    pub end_line: u32,
    pub end_column: u16,
}

impl Range {
    pub fn new(start_line: u32, start_column: u16, end_line: u32, end_column: u16) -> Self {
        Self {
            start_line,
            start_column,
            end_line,
            end_column,
        }
    }

    /// Span of a syntax node as reported by tree-sitter.
    pub fn from_node(node: &tree_sitter::Node) -> Self {
        let start = node.start_position();
        let end = node.end_position();
        Self {
            start_line: start.row as u32,
            start_column: start.column as u16,
            end_line: end.row as u32,
            end_column: end.column as u16,
        }
    }

    /// Number of source lines the span covers.
    pub fn line_count(&self) -> u32 {
        self.end_line - self.start_line + 1
    }

    /// Whether the span covers more than one source line.
    pub fn is_multiline(&self) -> bool {
        self.end_line > self.start_line
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_range_line_count() {
        let range = Range::new(10, 0, 12, 1);
        assert_eq!(range.line_count(), 3);
        assert!(range.is_multiline());

        let one_liner = Range::new(4, 0, 4, 38);
        assert_eq!(one_liner.line_count(), 1);
        assert!(!one_liner.is_multiline());
    }
}
