//! Taxonomy extension configuration.

use std::collections::HashMap;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

/// Configuration for taxonomy extensions.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct TaxonomyConfig {
    /// TOML definition files registered after the builtin catalog.
    #[serde(default)]
    pub definition_files: Vec<PathBuf>,
    /// Per-category weight overrides (category name → weight in [0, 1]).
    #[serde(default)]
    pub category_weights: HashMap<String, f64>,
}
