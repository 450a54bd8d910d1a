//! Declarative TOML definition files.
//!
//! Lets deployments extend the taxonomy without recompiling:
//!
//! ```toml
//! [[definitions]]
//! id = "marketing_fluff"
//! name = "Marketing Fluff"
//! category = "relevance"
//! description = "Promotional filler instead of an answer"
//! keywords = ["buzzword", "revolutionary"]
//! patterns = ['(?i)revolutionary.*solution']
//! severity = "low"
//!
//! [weights]
//! relevance = 0.7
//! ```
//!
//! Category and severity names are validated here; pattern strings are
//! not compiled until an engine is built over the taxonomy, where a
//! malformed pattern is skipped with a warning instead of failing the
//! load.

use std::collections::HashMap;
use std::path::Path;

use serde::{Deserialize, Serialize};

use faultline_core::errors::TaxonomyError;
use faultline_core::types::{ErrorCategory, ErrorSeverity, ErrorTypeDefinition};

/// A single error-type definition as declared in TOML.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TomlDefinition {
    pub id: String,
    pub name: String,
    pub category: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub keywords: Vec<String>,
    #[serde(default)]
    pub patterns: Vec<String>,
    #[serde(default = "default_severity")]
    pub severity: String,
    /// Set to `false` to keep a definition in the file but out of the
    /// taxonomy.
    #[serde(default)]
    pub enabled: Option<bool>,
}

fn default_severity() -> String {
    "medium".to_string()
}

/// Top-level layout of a definition file.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TomlDefinitionFile {
    #[serde(default)]
    pub definitions: Vec<TomlDefinition>,
    #[serde(default)]
    pub weights: HashMap<String, f64>,
}

/// The validated content of one definition file.
#[derive(Debug, Clone, Default)]
pub struct TaxonomyExtension {
    pub definitions: Vec<ErrorTypeDefinition>,
    pub weights: Vec<(ErrorCategory, f64)>,
}

/// Loader for TOML definition files.
pub struct TomlDefinitionLoader;

impl TomlDefinitionLoader {
    /// Parse definitions from a TOML string. `source` names the origin in
    /// error messages.
    pub fn load_from_str(toml_str: &str, source: &str) -> Result<TaxonomyExtension, TaxonomyError> {
        let file: TomlDefinitionFile =
            toml::from_str(toml_str).map_err(|e| TaxonomyError::ParseError {
                path: source.to_string(),
                message: e.to_string(),
            })?;

        let mut extension = TaxonomyExtension::default();
        for def in file.definitions {
            if def.enabled == Some(false) {
                continue;
            }
            extension.definitions.push(Self::convert(def)?);
        }
        for (name, weight) in file.weights {
            let category =
                ErrorCategory::parse_str(&name).ok_or_else(|| TaxonomyError::UnknownCategory {
                    id: "[weights]".to_string(),
                    name: name.clone(),
                })?;
            extension.weights.push((category, weight));
        }
        Ok(extension)
    }

    /// Load definitions from a file on disk.
    pub fn load_from_file(path: &Path) -> Result<TaxonomyExtension, TaxonomyError> {
        let content = std::fs::read_to_string(path).map_err(|_| TaxonomyError::FileNotFound {
            path: path.display().to_string(),
        })?;
        Self::load_from_str(&content, &path.display().to_string())
    }

    fn convert(def: TomlDefinition) -> Result<ErrorTypeDefinition, TaxonomyError> {
        let category =
            ErrorCategory::parse_str(&def.category).ok_or_else(|| TaxonomyError::UnknownCategory {
                id: def.id.clone(),
                name: def.category.clone(),
            })?;
        let severity =
            ErrorSeverity::parse_str(&def.severity).ok_or_else(|| TaxonomyError::UnknownSeverity {
                id: def.id.clone(),
                name: def.severity.clone(),
            })?;
        Ok(ErrorTypeDefinition {
            id: def.id,
            name: def.name,
            category,
            description: def.description,
            keywords: def.keywords,
            patterns: def.patterns,
            default_severity: severity,
        })
    }
}
