//! The builtin error-type catalog and default category weights.

use faultline_core::types::{ErrorCategory, ErrorSeverity, ErrorTypeDefinition};

/// One row of the builtin catalog.
struct BuiltinDef {
    id: &'static str,
    name: &'static str,
    category: ErrorCategory,
    description: &'static str,
    keywords: &'static [&'static str],
    patterns: &'static [&'static str],
    default_severity: ErrorSeverity,
}

/// The builtin catalog: 17 definitions across 9 of the 10 categories.
/// Formatting ships without builtin definitions, which is why the category
/// set is never derived from the registered types.
static BUILTIN_DEFINITIONS: &[BuiltinDef] = &[
    // Factual
    BuiltinDef {
        id: "factual_incorrect",
        name: "Factual Incorrectness",
        category: ErrorCategory::Factual,
        description: "Information that is objectively wrong or inaccurate",
        keywords: &["incorrect", "wrong", "false", "inaccurate", "mistaken", "error"],
        patterns: &[r"(?i)(incorrect|wrong|false|inaccurate|mistaken).*(fact|information)"],
        default_severity: ErrorSeverity::High,
    },
    BuiltinDef {
        id: "factual_outdated",
        name: "Outdated Information",
        category: ErrorCategory::Factual,
        description: "Information that was correct but is now outdated",
        keywords: &["outdated", "old", "obsolete", "deprecated", "superseded"],
        patterns: &[r"(?i)(outdated|obsolete|deprecated).*information"],
        default_severity: ErrorSeverity::Medium,
    },
    // Reasoning
    BuiltinDef {
        id: "logical_fallacy",
        name: "Logical Fallacy",
        category: ErrorCategory::Reasoning,
        description: "Flawed logical reasoning or argumentation",
        keywords: &["fallacy", "illogical", "contradictory", "inconsistent logic"],
        patterns: &[r"(?i)(logical.*fallacy|flawed.*reasoning|contradictory)"],
        default_severity: ErrorSeverity::High,
    },
    BuiltinDef {
        id: "causal_confusion",
        name: "Causal Confusion",
        category: ErrorCategory::Reasoning,
        description: "Incorrect cause-effect relationships",
        keywords: &["cause", "effect", "because", "therefore", "leads to"],
        patterns: &[r"(?i)(incorrect.*causation|wrong.*cause|flawed.*reasoning)"],
        default_severity: ErrorSeverity::Medium,
    },
    // Coherence
    BuiltinDef {
        id: "internal_contradiction",
        name: "Internal Contradiction",
        category: ErrorCategory::Coherence,
        description: "Statements that contradict each other within the response",
        keywords: &["contradicts", "inconsistent", "conflicts", "opposite"],
        patterns: &[r"(?i)(contradicts|conflicts.*with|inconsistent)"],
        default_severity: ErrorSeverity::High,
    },
    BuiltinDef {
        id: "unclear_structure",
        name: "Unclear Structure",
        category: ErrorCategory::Coherence,
        description: "Poor organization or flow of ideas",
        keywords: &["unclear", "confusing", "disorganized", "jumbled"],
        patterns: &[r"(?i)(unclear.*structure|disorganized|confusing.*flow)"],
        default_severity: ErrorSeverity::Medium,
    },
    // Relevance
    BuiltinDef {
        id: "off_topic",
        name: "Off-topic Response",
        category: ErrorCategory::Relevance,
        description: "Response doesn't address the question or prompt",
        keywords: &["off-topic", "irrelevant", "unrelated", "doesn't answer"],
        patterns: &[r"(?i)(off.topic|irrelevant|unrelated.*to.*question)"],
        default_severity: ErrorSeverity::High,
    },
    BuiltinDef {
        id: "partial_relevance",
        name: "Partial Relevance",
        category: ErrorCategory::Relevance,
        description: "Response only partially addresses the prompt",
        keywords: &["partially", "incomplete", "misses", "doesn't fully"],
        patterns: &[r"(?i)(partially.*addresses|incomplete.*answer|misses.*point)"],
        default_severity: ErrorSeverity::Medium,
    },
    // Bias
    BuiltinDef {
        id: "demographic_bias",
        name: "Demographic Bias",
        category: ErrorCategory::Bias,
        description: "Unfair treatment based on demographic characteristics",
        keywords: &["biased", "stereotyping", "discrimination", "unfair"],
        patterns: &[r"(?i)(biased.*against|stereotyping|discriminatory)"],
        default_severity: ErrorSeverity::Critical,
    },
    BuiltinDef {
        id: "cultural_bias",
        name: "Cultural Bias",
        category: ErrorCategory::Bias,
        description: "Assumptions based on specific cultural perspectives",
        keywords: &["cultural", "western", "assumption", "perspective"],
        patterns: &[r"(?i)(cultural.*bias|western.*centric|narrow.*perspective)"],
        default_severity: ErrorSeverity::High,
    },
    // Safety
    BuiltinDef {
        id: "harmful_content",
        name: "Harmful Content",
        category: ErrorCategory::Safety,
        description: "Content that could cause harm or promote dangerous activities",
        keywords: &["harmful", "dangerous", "unsafe", "risky", "toxic"],
        patterns: &[r"(?i)(harmful|dangerous|unsafe|toxic.*content)"],
        default_severity: ErrorSeverity::Critical,
    },
    BuiltinDef {
        id: "misinformation",
        name: "Misinformation",
        category: ErrorCategory::Safety,
        description: "False information that could mislead users",
        keywords: &["misinformation", "misleading", "false claim", "conspiracy"],
        patterns: &[r"(?i)(misinformation|misleading.*claim|false.*information)"],
        default_severity: ErrorSeverity::Critical,
    },
    // Completeness
    BuiltinDef {
        id: "incomplete_answer",
        name: "Incomplete Answer",
        category: ErrorCategory::Completeness,
        description: "Response doesn't fully address all aspects of the question",
        keywords: &["incomplete", "missing", "partial", "doesn't cover"],
        patterns: &[r"(?i)(incomplete.*answer|missing.*information|doesn't.*cover)"],
        default_severity: ErrorSeverity::Medium,
    },
    BuiltinDef {
        id: "lacks_detail",
        name: "Lacks Detail",
        category: ErrorCategory::Completeness,
        description: "Response is too superficial or lacks necessary detail",
        keywords: &["superficial", "lacks detail", "too brief", "vague"],
        patterns: &[r"(?i)(lacks.*detail|too.*superficial|insufficient.*depth)"],
        default_severity: ErrorSeverity::Low,
    },
    // Consistency
    BuiltinDef {
        id: "format_inconsistency",
        name: "Format Inconsistency",
        category: ErrorCategory::Consistency,
        description: "Inconsistent formatting or style within the response",
        keywords: &["inconsistent", "formatting", "style", "mixed"],
        patterns: &[r"(?i)(inconsistent.*format|mixed.*style|formatting.*error)"],
        default_severity: ErrorSeverity::Low,
    },
    // Hallucination
    BuiltinDef {
        id: "fabricated_facts",
        name: "Fabricated Facts",
        category: ErrorCategory::Hallucination,
        description: "Made-up information presented as factual",
        keywords: &["fabricated", "made up", "invented", "fictional"],
        patterns: &[r"(?i)(fabricated|made.*up|invented.*fact|fictional.*claim)"],
        default_severity: ErrorSeverity::Critical,
    },
    BuiltinDef {
        id: "false_citations",
        name: "False Citations",
        category: ErrorCategory::Hallucination,
        description: "Non-existent or incorrect citations and references",
        keywords: &["false citation", "fake reference", "non-existent", "made up source"],
        patterns: &[r"(?i)(false.*citation|fake.*reference|non.existent.*source)"],
        default_severity: ErrorSeverity::High,
    },
];

/// Default importance weights per category, highest priority first.
pub(crate) static DEFAULT_CATEGORY_WEIGHTS: &[(ErrorCategory, f64)] = &[
    (ErrorCategory::Safety, 1.0),
    (ErrorCategory::Factual, 0.9),
    (ErrorCategory::Hallucination, 0.9),
    (ErrorCategory::Bias, 0.8),
    (ErrorCategory::Reasoning, 0.7),
    (ErrorCategory::Relevance, 0.6),
    (ErrorCategory::Coherence, 0.5),
    (ErrorCategory::Completeness, 0.4),
    (ErrorCategory::Consistency, 0.3),
    (ErrorCategory::Formatting, 0.2),
];

/// Materialize the builtin catalog in registration order.
pub(crate) fn builtin_definitions() -> Vec<ErrorTypeDefinition> {
    BUILTIN_DEFINITIONS
        .iter()
        .map(|def| {
            ErrorTypeDefinition::new(
                def.id,
                def.name,
                def.category,
                def.description,
                def.keywords,
                def.patterns,
                def.default_severity,
            )
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_catalog_has_seventeen_definitions() {
        assert_eq!(builtin_definitions().len(), 17);
    }

    #[test]
    fn test_catalog_ids_are_unique() {
        let ids: HashSet<&str> = BUILTIN_DEFINITIONS.iter().map(|d| d.id).collect();
        assert_eq!(ids.len(), BUILTIN_DEFINITIONS.len());
    }

    #[test]
    fn test_every_builtin_pattern_compiles() {
        for def in BUILTIN_DEFINITIONS {
            for pattern in def.patterns {
                assert!(
                    regex::RegexBuilder::new(pattern)
                        .case_insensitive(true)
                        .multi_line(true)
                        .build()
                        .is_ok(),
                    "builtin pattern for '{}' failed to compile: {}",
                    def.id,
                    pattern
                );
            }
        }
    }

    #[test]
    fn test_weight_table_covers_every_category() {
        let weighted: HashSet<ErrorCategory> =
            DEFAULT_CATEGORY_WEIGHTS.iter().map(|(c, _)| *c).collect();
        assert_eq!(weighted.len(), ErrorCategory::all().len());
    }

    #[test]
    fn test_formatting_has_no_builtin_definitions() {
        assert!(!BUILTIN_DEFINITIONS
            .iter()
            .any(|d| d.category == ErrorCategory::Formatting));
    }
}
