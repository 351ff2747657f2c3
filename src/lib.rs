//! Formatting decision engine for JavaScript/TypeScript import and
//! re-export declarations.
//!
//! Given a declaration's current textual rendering, the engine decides
//! whether it should sit on a single line or be expanded across multiple
//! lines, based on an 80-character limit, and produces the canonical
//! replacement text for either form. Declarations the engine does not
//! reformat (default-only imports, namespace imports, `export *`,
//! exports with an inline declaration body) pass through untouched.

pub mod engine;
pub mod error;
pub mod linter;
pub mod model;
pub mod parsing;
pub mod policy;
pub mod render;
pub mod types;

// Explicit exports for better API clarity
pub use engine::{DiagnosticKind, Fix, check_import, check_node, check_reexport};
pub use error::{RuleError, RuleResult};
pub use linter::{ImportExportLinter, fixes_to_json};
pub use model::{Clause, DeclarationKind, DeclarationModel};
pub use policy::{Decision, MAX_ONE_LINE_LEN, decide, exceeds_limit};
pub use types::Range;
