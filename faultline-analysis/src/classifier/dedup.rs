//! Detection deduplication.

use rustc_hash::FxHashMap;

use faultline_core::constants::DEDUP_EVIDENCE_CHARS;
use faultline_core::types::DetectedError;

/// Collapse repeated detections of the same error type on effectively the
/// same phrase.
///
/// Detections are grouped by (type name, first 50 characters of evidence)
/// and each group keeps its highest-confidence instance; on a tie the
/// earliest one wins. Output preserves first-occurrence order, so running
/// this over its own output changes nothing.
pub fn deduplicate_errors(errors: Vec<DetectedError>) -> Vec<DetectedError> {
    if errors.is_empty() {
        return errors;
    }

    let mut kept: Vec<DetectedError> = Vec::with_capacity(errors.len());
    let mut index_by_key: FxHashMap<(String, String), usize> = FxHashMap::default();

    for error in errors {
        let key = (
            error.error_type.name.clone(),
            evidence_prefix(&error.evidence),
        );
        match index_by_key.get(&key) {
            Some(&i) => {
                if error.confidence > kept[i].confidence {
                    kept[i] = error;
                }
            }
            None => {
                index_by_key.insert(key, kept.len());
                kept.push(error);
            }
        }
    }

    kept
}

/// First `DEDUP_EVIDENCE_CHARS` characters of the evidence text.
fn evidence_prefix(evidence: &str) -> String {
    evidence.chars().take(DEDUP_EVIDENCE_CHARS).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::ErrorTaxonomy;
    use faultline_core::types::TextSpan;
    use std::sync::Arc;

    fn detection(taxonomy: &ErrorTaxonomy, id: &str, evidence: &str, confidence: f64) -> DetectedError {
        DetectedError {
            error_type: Arc::clone(taxonomy.get(id).unwrap()),
            confidence,
            evidence: evidence.to_string(),
            location: Some(TextSpan::new(0, evidence.len())),
            severity_override: None,
        }
    }

    #[test]
    fn test_keeps_highest_confidence_per_group() {
        let taxonomy = ErrorTaxonomy::builtin();
        let errors = vec![
            detection(&taxonomy, "misinformation", "misleading claim", 0.6),
            detection(&taxonomy, "misinformation", "misleading claim", 0.9),
            detection(&taxonomy, "misinformation", "misleading claim", 0.7),
        ];
        let deduped = deduplicate_errors(errors);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].confidence, 0.9);
    }

    #[test]
    fn test_tie_keeps_the_first_instance() {
        let taxonomy = ErrorTaxonomy::builtin();
        let mut first = detection(&taxonomy, "misinformation", "misleading claim", 0.8);
        first.location = Some(TextSpan::new(10, 26));
        let mut second = detection(&taxonomy, "misinformation", "misleading claim", 0.8);
        second.location = Some(TextSpan::new(90, 106));

        let deduped = deduplicate_errors(vec![first, second]);
        assert_eq!(deduped.len(), 1);
        assert_eq!(deduped[0].location, Some(TextSpan::new(10, 26)));
    }

    #[test]
    fn test_distinct_evidence_is_not_collapsed() {
        let taxonomy = ErrorTaxonomy::builtin();
        let errors = vec![
            detection(&taxonomy, "misinformation", "misleading claim", 0.7),
            detection(&taxonomy, "misinformation", "false information", 0.7),
        ];
        assert_eq!(deduplicate_errors(errors).len(), 2);
    }

    #[test]
    fn test_same_evidence_different_types_is_not_collapsed() {
        let taxonomy = ErrorTaxonomy::builtin();
        let errors = vec![
            detection(&taxonomy, "misinformation", "false information", 0.7),
            detection(&taxonomy, "factual_incorrect", "false information", 0.7),
        ];
        assert_eq!(deduplicate_errors(errors).len(), 2);
    }

    #[test]
    fn test_long_evidence_compares_on_first_fifty_chars() {
        let taxonomy = ErrorTaxonomy::builtin();
        let stem = "x".repeat(50);
        let errors = vec![
            detection(&taxonomy, "misinformation", &format!("{stem} tail one"), 0.6),
            detection(&taxonomy, "misinformation", &format!("{stem} tail two"), 0.8),
        ];
        let deduped = deduplicate_errors(errors);
        assert_eq!(deduped.len(), 1, "prefixes match, tails must not matter");
        assert_eq!(deduped[0].confidence, 0.8);
    }

    #[test]
    fn test_first_occurrence_order_is_preserved() {
        let taxonomy = ErrorTaxonomy::builtin();
        let errors = vec![
            detection(&taxonomy, "factual_incorrect", "wrong fact", 0.6),
            detection(&taxonomy, "misinformation", "misleading claim", 0.9),
            detection(&taxonomy, "factual_incorrect", "wrong fact", 0.95),
        ];
        let deduped = deduplicate_errors(errors);
        assert_eq!(deduped.len(), 2);
        assert_eq!(deduped[0].error_type.id, "factual_incorrect");
        assert_eq!(deduped[0].confidence, 0.95);
        assert_eq!(deduped[1].error_type.id, "misinformation");
    }

    #[test]
    fn test_idempotent_on_deduplicated_input() {
        let taxonomy = ErrorTaxonomy::builtin();
        let errors = vec![
            detection(&taxonomy, "factual_incorrect", "wrong fact", 0.6),
            detection(&taxonomy, "misinformation", "misleading claim", 0.9),
        ];
        let once = deduplicate_errors(errors);
        let twice = deduplicate_errors(once.clone());
        assert_eq!(once, twice);
    }

    #[test]
    fn test_empty_input_stays_empty() {
        assert!(deduplicate_errors(Vec::new()).is_empty());
    }
}
