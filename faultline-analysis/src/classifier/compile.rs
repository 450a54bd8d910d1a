//! Build-once compilation of taxonomy patterns.

use std::sync::Arc;

use regex::{Regex, RegexBuilder};
use tracing::{debug, warn};

use faultline_core::types::{ErrorCategory, ErrorTypeDefinition};

use crate::taxonomy::ErrorTaxonomy;

/// One compiled detection pattern, tied to the definition declaring it.
#[derive(Debug, Clone)]
pub(crate) struct CompiledPattern {
    pub regex: Regex,
    pub definition: Arc<ErrorTypeDefinition>,
}

/// The compiled patterns of a single category.
#[derive(Debug, Clone)]
pub(crate) struct CategoryPatterns {
    pub category: ErrorCategory,
    pub patterns: Vec<CompiledPattern>,
}

/// A pattern string that failed to compile and was dropped from the table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedPattern {
    /// Id of the definition that declared the pattern.
    pub type_id: String,
    /// The pattern source text.
    pub pattern: String,
    /// The compile error message.
    pub reason: String,
}

/// The immutable matcher table owned by a classifier.
///
/// Groups are ordered by first encounter of each category over the
/// registration sequence; within a group, patterns keep registration
/// order. Detection output order follows directly from this layout.
#[derive(Debug, Clone, Default)]
pub(crate) struct CompiledPatternTable {
    pub groups: Vec<CategoryPatterns>,
    pub skipped: Vec<SkippedPattern>,
}

impl CompiledPatternTable {
    /// Compile every pattern of every registered definition, with
    /// case-insensitive and multi-line matching. A pattern that fails to
    /// compile is logged and skipped; the rest of the table is unaffected.
    pub fn build(taxonomy: &ErrorTaxonomy) -> Self {
        let mut table = CompiledPatternTable::default();

        for def in taxonomy.definitions() {
            for pattern in &def.patterns {
                match RegexBuilder::new(pattern)
                    .case_insensitive(true)
                    .multi_line(true)
                    .build()
                {
                    Ok(regex) => table.push(
                        def.category,
                        CompiledPattern {
                            regex,
                            definition: Arc::clone(def),
                        },
                    ),
                    Err(e) => {
                        warn!(
                            type_id = %def.id,
                            pattern = %pattern,
                            error = %e,
                            "Skipping detection pattern that failed to compile"
                        );
                        table.skipped.push(SkippedPattern {
                            type_id: def.id.clone(),
                            pattern: pattern.clone(),
                            reason: e.to_string(),
                        });
                    }
                }
            }
        }

        debug!(
            patterns = table.pattern_count(),
            groups = table.groups.len(),
            skipped = table.skipped.len(),
            "Compiled detection pattern table"
        );
        table
    }

    /// Total number of compiled patterns across all groups.
    pub fn pattern_count(&self) -> usize {
        self.groups.iter().map(|g| g.patterns.len()).sum()
    }

    fn push(&mut self, category: ErrorCategory, pattern: CompiledPattern) {
        match self.groups.iter_mut().find(|g| g.category == category) {
            Some(group) => group.patterns.push(pattern),
            None => self.groups.push(CategoryPatterns {
                category,
                patterns: vec![pattern],
            }),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::TaxonomyBuilder;
    use faultline_core::types::ErrorSeverity;

    #[test]
    fn test_builtin_table_compiles_fully() {
        let taxonomy = ErrorTaxonomy::builtin();
        let table = CompiledPatternTable::build(&taxonomy);
        assert_eq!(table.pattern_count(), 17);
        assert_eq!(table.groups.len(), 9, "formatting has no patterns to group");
        assert!(table.skipped.is_empty());
    }

    #[test]
    fn test_groups_follow_category_first_encounter_order() {
        let taxonomy = ErrorTaxonomy::builtin();
        let table = CompiledPatternTable::build(&taxonomy);
        assert_eq!(table.groups[0].category, ErrorCategory::Factual);
        assert_eq!(table.groups[0].patterns.len(), 2);
        assert_eq!(table.groups[8].category, ErrorCategory::Hallucination);
    }

    #[test]
    fn test_malformed_pattern_is_skipped_not_fatal() {
        let mut builder = TaxonomyBuilder::empty();
        builder
            .register(ErrorTypeDefinition::new(
                "bad_regex",
                "Bad Regex",
                ErrorCategory::Formatting,
                "Carries one broken and one working pattern",
                &[],
                &[r"((unclosed", r"fine.*pattern"],
                ErrorSeverity::Low,
            ))
            .unwrap();
        let table = CompiledPatternTable::build(&builder.build());

        assert_eq!(table.pattern_count(), 1);
        assert_eq!(table.skipped.len(), 1);
        assert_eq!(table.skipped[0].type_id, "bad_regex");
        assert_eq!(table.skipped[0].pattern, r"((unclosed");
        assert!(!table.skipped[0].reason.is_empty());
    }
}
