//! Error types for the declaration formatting engine
//!
//! This module provides structured error types using thiserror. Contract
//! violations mark states the upstream filtering is supposed to make
//! unreachable; they are propagated, never swallowed.

use thiserror::Error;

/// Main error type for the formatting engine and its host boundary.
#[derive(Error, Debug)]
pub enum RuleError {
    /// Parser setup errors (host boundary)
    #[error("Failed to initialize TypeScript parser: {reason}")]
    ParserInit { reason: String },

    #[error("Parser returned no syntax tree for the given source")]
    ParseFailure,

    /// Contract violations: upstream filtering was broken
    #[error(
        "Re-export declaration at line {line} reached the model builder without a source module; sourceless re-exports must be filtered out upstream"
    )]
    ReexportWithoutSource { line: u32 },

    #[error("Import declaration at line {line} has no source module")]
    MissingSourceModule { line: u32 },

    #[error("Unexpected specifier node '{kind}' at line {line} reached the model builder")]
    UnexpectedSpecifier { kind: String, line: u32 },

    #[error("Specifier at line {line} carries no name")]
    SpecifierWithoutName { line: u32 },

    #[error("Declaration at line {line} has an empty module specifier")]
    EmptySourceModule { line: u32 },

    #[error(
        "Declaration at line {line} reached the model builder with no named clauses; declarations without named specifiers must be filtered out upstream"
    )]
    EmptyDeclaration { line: u32 },

    /// Diagnostic output errors (host boundary)
    #[error("Failed to serialize diagnostics: {0}")]
    Serialization(#[from] serde_json::Error),
}

impl RuleError {
    /// Get a stable status code for this error type.
    ///
    /// Returns a string identifier that can be used in JSON responses
    /// for programmatic error handling.
    pub fn status_code(&self) -> &'static str {
        match self {
            Self::ParserInit { .. } => "PARSER_INIT",
            Self::ParseFailure => "PARSE_FAILURE",
            Self::ReexportWithoutSource { .. } => "REEXPORT_WITHOUT_SOURCE",
            Self::MissingSourceModule { .. } => "MISSING_SOURCE_MODULE",
            Self::UnexpectedSpecifier { .. } => "UNEXPECTED_SPECIFIER",
            Self::SpecifierWithoutName { .. } => "SPECIFIER_WITHOUT_NAME",
            Self::EmptySourceModule { .. } => "EMPTY_SOURCE_MODULE",
            Self::EmptyDeclaration { .. } => "EMPTY_DECLARATION",
            Self::Serialization(_) => "SERIALIZATION",
        }
    }
}

/// Result type alias for rule operations
pub type RuleResult<T> = Result<T, RuleError>;
