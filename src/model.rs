//! Declaration model
//!
//! The normalized, order-preserving representation of one import or
//! re-export statement, as produced by the model builder and consumed by
//! the renderers. A model is a transient per-invocation value: built fresh
//! for each inspected declaration, never mutated, never shared.

/// Discriminates rendering rules between imports and re-exports.
///
/// Re-exports never carry a default binding slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DeclarationKind {
    Import,
    Reexport,
}

/// One named binding pair, in source order.
///
/// For imports, `external` is the imported name and `local` the local
/// binding. For re-exports, `external` is the name in the re-exported
/// module's context and `local` holds the externally visible exported
/// name. Both sides are kept as plain text whether the source wrote them
/// as identifiers or string literals.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Clause {
    pub external: String,
    pub local: String,
}

impl Clause {
    pub fn new(external: impl Into<String>, local: impl Into<String>) -> Self {
        Self {
            external: external.into(),
            local: local.into(),
        }
    }

    /// Equal-name clauses render as the bare name with no `as`.
    pub fn is_shorthand(&self) -> bool {
        self.external == self.local
    }
}

/// Normalized representation of one import or re-export declaration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DeclarationModel {
    pub kind: DeclarationKind,
    /// Unquoted module specifier text. Never empty.
    pub source_module: String,
    /// Local name bound to the default export; imports only.
    pub default_binding: Option<String>,
    /// Named bindings exactly as encountered in source. No reordering,
    /// no deduplication.
    pub clauses: Vec<Clause>,
    /// `import type { .. }` / `export type { .. } from` declarations keep
    /// their `type` keyword on re-render.
    pub type_only: bool,
}
