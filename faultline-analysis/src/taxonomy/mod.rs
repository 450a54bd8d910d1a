//! Error taxonomy registry.
//!
//! An append-only catalog of error-type definitions plus per-category
//! importance weights. A taxonomy is assembled once through
//! [`TaxonomyBuilder`] and read-only afterwards, so it can sit behind an
//! `Arc` and feed any number of classifier instances. Extending the
//! catalog means building a new taxonomy and a new classifier over it.

pub mod builtin;
pub mod toml_defs;

use std::path::Path;
use std::sync::Arc;

use regex::RegexBuilder;
use rustc_hash::FxHashMap;

use faultline_core::config::TaxonomyConfig;
use faultline_core::constants::DEFAULT_CATEGORY_WEIGHT;
use faultline_core::errors::TaxonomyError;
use faultline_core::types::{ErrorCategory, ErrorTypeDefinition};

use toml_defs::{TaxonomyExtension, TomlDefinitionLoader};

/// The error-type catalog and category weight table.
#[derive(Debug, Clone)]
pub struct ErrorTaxonomy {
    definitions: Vec<Arc<ErrorTypeDefinition>>,
    by_id: FxHashMap<String, usize>,
    category_weights: FxHashMap<ErrorCategory, f64>,
}

impl ErrorTaxonomy {
    /// A taxonomy holding the builtin catalog and default weights.
    pub fn builtin() -> Self {
        Self::builder().build()
    }

    /// Start building a taxonomy seeded with the builtin catalog.
    pub fn builder() -> TaxonomyBuilder {
        TaxonomyBuilder::new()
    }

    /// All registered definitions, in registration order.
    pub fn definitions(&self) -> impl Iterator<Item = &Arc<ErrorTypeDefinition>> {
        self.definitions.iter()
    }

    /// Number of registered definitions.
    pub fn len(&self) -> usize {
        self.definitions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.definitions.is_empty()
    }

    /// Look up a definition by its id slug.
    pub fn get(&self, id: &str) -> Option<&Arc<ErrorTypeDefinition>> {
        self.by_id.get(id).map(|&i| &self.definitions[i])
    }

    /// All definitions in a category, in registration order.
    pub fn types_by_category(&self, category: ErrorCategory) -> Vec<Arc<ErrorTypeDefinition>> {
        self.definitions
            .iter()
            .filter(|def| def.category == category)
            .cloned()
            .collect()
    }

    /// The full category set.
    ///
    /// Fixed by the [`ErrorCategory`] enum rather than derived from the
    /// registered definitions, so a category with no types (or with all of
    /// its types removed from a custom build) still shows up everywhere
    /// categories are enumerated.
    pub fn all_categories(&self) -> &'static [ErrorCategory] {
        ErrorCategory::all()
    }

    /// The importance weight for a category.
    ///
    /// Falls back to [`DEFAULT_CATEGORY_WEIGHT`] for categories without an
    /// explicit entry.
    pub fn category_weight(&self, category: ErrorCategory) -> f64 {
        self.category_weights
            .get(&category)
            .copied()
            .unwrap_or(DEFAULT_CATEGORY_WEIGHT)
    }

    /// Find definitions matching a free-form query.
    ///
    /// A definition matches when any of the following holds:
    /// - one of its keywords occurs, case-insensitively, as a substring of
    ///   the query. The direction is deliberate: the keyword has to fit
    ///   inside the query, so `search("incorrect")` finds types keyed on
    ///   `"incorrect"` while `search("inc")` does not;
    /// - the lowercased query occurs in the definition's description;
    /// - one of its detection patterns matches the query as a
    ///   case-insensitive regex. Patterns that fail to compile are treated
    ///   as non-matching here.
    ///
    /// Results keep registration order and list each definition at most
    /// once.
    pub fn search(&self, query: &str) -> Vec<Arc<ErrorTypeDefinition>> {
        let query_lower = query.to_lowercase();
        let mut matching = Vec::new();

        for def in &self.definitions {
            if def
                .keywords
                .iter()
                .any(|kw| query_lower.contains(&kw.to_lowercase()))
            {
                matching.push(Arc::clone(def));
                continue;
            }

            if def.description.to_lowercase().contains(&query_lower) {
                matching.push(Arc::clone(def));
                continue;
            }

            for pattern in &def.patterns {
                let compiled = RegexBuilder::new(pattern).case_insensitive(true).build();
                if let Ok(re) = compiled {
                    if re.is_match(query) {
                        matching.push(Arc::clone(def));
                        break;
                    }
                }
            }
        }

        matching
    }
}

impl Default for ErrorTaxonomy {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for [`ErrorTaxonomy`].
#[derive(Debug, Clone, Default)]
pub struct TaxonomyBuilder {
    definitions: Vec<ErrorTypeDefinition>,
    by_id: FxHashMap<String, usize>,
    category_weights: FxHashMap<ErrorCategory, f64>,
}

impl TaxonomyBuilder {
    /// A builder seeded with the builtin catalog and default weights.
    pub fn new() -> Self {
        let mut builder = Self::empty();
        for def in builtin::builtin_definitions() {
            // Builtin ids are unique by construction.
            builder.insert(def);
        }
        for (category, weight) in builtin::DEFAULT_CATEGORY_WEIGHTS {
            builder.category_weights.insert(*category, *weight);
        }
        builder
    }

    /// A builder with no definitions and no weights.
    pub fn empty() -> Self {
        Self {
            definitions: Vec::new(),
            by_id: FxHashMap::default(),
            category_weights: FxHashMap::default(),
        }
    }

    /// Register a definition.
    ///
    /// Ids must be unique across the taxonomy; a blank id or name is
    /// rejected. Pattern strings are deliberately not compiled here;
    /// validity surfaces at classifier build time as warn-and-skip, so one
    /// bad pattern cannot block registration of an otherwise sound type.
    pub fn register(&mut self, def: ErrorTypeDefinition) -> Result<&mut Self, TaxonomyError> {
        if def.id.trim().is_empty() {
            return Err(TaxonomyError::InvalidDefinition {
                id: def.id,
                reason: "id must not be empty".to_string(),
            });
        }
        if def.name.trim().is_empty() {
            return Err(TaxonomyError::InvalidDefinition {
                id: def.id,
                reason: "name must not be empty".to_string(),
            });
        }
        if self.by_id.contains_key(&def.id) {
            return Err(TaxonomyError::DuplicateDefinition { id: def.id });
        }
        self.insert(def);
        Ok(self)
    }

    /// Override the importance weight for a category.
    ///
    /// Values are clamped into `[0.0, 1.0]`; NaN is ignored.
    pub fn set_category_weight(&mut self, category: ErrorCategory, weight: f64) -> &mut Self {
        if weight.is_nan() {
            return self;
        }
        self.category_weights.insert(category, weight.clamp(0.0, 1.0));
        self
    }

    /// Register definitions and weight overrides from a TOML string.
    pub fn load_toml_str(&mut self, toml_str: &str) -> Result<&mut Self, TaxonomyError> {
        let extension = TomlDefinitionLoader::load_from_str(toml_str, "<string>")?;
        self.apply_extension(extension)
    }

    /// Register definitions and weight overrides from a TOML file.
    pub fn load_toml_file(&mut self, path: &Path) -> Result<&mut Self, TaxonomyError> {
        let extension = TomlDefinitionLoader::load_from_file(path)?;
        self.apply_extension(extension)
    }

    /// Apply a [`TaxonomyConfig`]: load each definition file, then apply
    /// its weight overrides. Weight keys are assumed to have passed config
    /// validation; unrecognized ones are skipped here.
    pub fn apply_config(&mut self, config: &TaxonomyConfig) -> Result<&mut Self, TaxonomyError> {
        for path in &config.definition_files {
            self.load_toml_file(path)?;
        }
        for (name, weight) in &config.category_weights {
            if let Some(category) = ErrorCategory::parse_str(name) {
                self.set_category_weight(category, *weight);
            }
        }
        Ok(self)
    }

    /// Freeze the builder into an immutable taxonomy.
    pub fn build(self) -> ErrorTaxonomy {
        ErrorTaxonomy {
            definitions: self.definitions.into_iter().map(Arc::new).collect(),
            by_id: self.by_id,
            category_weights: self.category_weights,
        }
    }

    fn insert(&mut self, def: ErrorTypeDefinition) {
        self.by_id.insert(def.id.clone(), self.definitions.len());
        self.definitions.push(def);
    }

    fn apply_extension(&mut self, extension: TaxonomyExtension) -> Result<&mut Self, TaxonomyError> {
        for def in extension.definitions {
            self.register(def)?;
        }
        for (category, weight) in extension.weights {
            self.set_category_weight(category, weight);
        }
        Ok(self)
    }
}
