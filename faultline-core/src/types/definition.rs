//! Error type definitions.

use serde::{Deserialize, Serialize};

use super::{ErrorCategory, ErrorSeverity};

/// An immutable error-type record in the taxonomy.
///
/// `keywords` feed registry search only; `patterns` feed detection only.
/// Definitions are created at registration and never mutated afterwards.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorTypeDefinition {
    /// Registry key slug, e.g. `factual_incorrect`.
    pub id: String,
    /// Human-readable name, e.g. `Factual Incorrectness`.
    pub name: String,
    /// Owning category.
    pub category: ErrorCategory,
    /// Human description of the flaw.
    pub description: String,
    /// Search keywords. Never consulted during detection.
    pub keywords: Vec<String>,
    /// Ordered detection patterns (regex source strings).
    pub patterns: Vec<String>,
    /// Severity assigned when a detection carries no override.
    pub default_severity: ErrorSeverity,
}

impl ErrorTypeDefinition {
    pub fn new(
        id: &str,
        name: &str,
        category: ErrorCategory,
        description: &str,
        keywords: &[&str],
        patterns: &[&str],
        default_severity: ErrorSeverity,
    ) -> Self {
        Self {
            id: id.to_string(),
            name: name.to_string(),
            category,
            description: description.to_string(),
            keywords: keywords.iter().map(|k| k.to_string()).collect(),
            patterns: patterns.iter().map(|p| p.to_string()).collect(),
            default_severity,
        }
    }
}
