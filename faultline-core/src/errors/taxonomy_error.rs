//! Taxonomy registration and extension-loading errors.

/// Errors raised while building a taxonomy or loading extension
/// definitions.
///
/// Pattern validity is deliberately not checked at registration: a
/// malformed pattern string registers fine and is skipped (with a warning)
/// when the classification engine compiles its table.
#[derive(Debug, thiserror::Error)]
pub enum TaxonomyError {
    #[error("Duplicate definition id '{id}'")]
    DuplicateDefinition { id: String },

    #[error("Unknown category '{name}' in definition '{id}'")]
    UnknownCategory { id: String, name: String },

    #[error("Unknown severity '{name}' in definition '{id}'")]
    UnknownSeverity { id: String, name: String },

    #[error("Invalid definition '{id}': {reason}")]
    InvalidDefinition { id: String, reason: String },

    #[error("Definition file not found: {path}")]
    FileNotFound { path: String },

    #[error("Failed to parse {path}: {message}")]
    ParseError { path: String, message: String },
}
