//! Score aggregation over deduplicated detections.

use std::collections::BTreeMap;

use faultline_core::types::{DetectedError, ErrorCategory};

use crate::taxonomy::ErrorTaxonomy;

/// Overall error score for a response.
///
/// Each detection contributes `confidence × category weight × severity
/// multiplier`, normalized by the total `weight × multiplier` mass so the
/// result stays comparable across responses with different error counts.
/// Clamped to 1.0; an empty slice (or one whose weight mass is zero)
/// scores 0.0.
pub fn overall_error_score(taxonomy: &ErrorTaxonomy, errors: &[DetectedError]) -> f64 {
    if errors.is_empty() {
        return 0.0;
    }

    let mut total_weighted_score = 0.0;
    let mut total_weight = 0.0;

    for error in errors {
        let category_weight = taxonomy.category_weight(error.error_type.category);
        let severity_multiplier = error.severity().multiplier();
        total_weighted_score += error.confidence * category_weight * severity_multiplier;
        total_weight += category_weight * severity_multiplier;
    }

    if total_weight == 0.0 {
        return 0.0;
    }
    (total_weighted_score / total_weight).min(1.0)
}

/// Severity-weighted mean confidence per category.
///
/// Every category of the fixed set gets an entry; categories with no
/// detections score 0.0. Category importance weights are deliberately not
/// applied here: the per-category view answers "how bad is this
/// category", not "how much does this category matter".
pub fn category_scores(errors: &[DetectedError]) -> BTreeMap<ErrorCategory, f64> {
    let mut by_category: BTreeMap<ErrorCategory, Vec<&DetectedError>> = BTreeMap::new();
    for error in errors {
        by_category
            .entry(error.error_type.category)
            .or_default()
            .push(error);
    }

    let mut scores = BTreeMap::new();
    for category in ErrorCategory::all() {
        let in_category = by_category.get(category).map(Vec::as_slice).unwrap_or(&[]);
        if in_category.is_empty() {
            scores.insert(*category, 0.0);
            continue;
        }

        let mut total_score = 0.0;
        let mut total_multiplier = 0.0;
        for error in in_category {
            let multiplier = error.severity().multiplier();
            total_score += error.confidence * multiplier;
            total_multiplier += multiplier;
        }
        let score = if total_multiplier > 0.0 {
            total_score / total_multiplier
        } else {
            0.0
        };
        scores.insert(*category, score);
    }

    scores
}

/// Mean detection confidence; 1.0 when nothing was detected, read as
/// "confidently clean".
pub fn overall_confidence(errors: &[DetectedError]) -> f64 {
    if errors.is_empty() {
        return 1.0;
    }
    errors.iter().map(|e| e.confidence).sum::<f64>() / errors.len() as f64
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::taxonomy::{ErrorTaxonomy, TaxonomyBuilder};
    use faultline_core::types::ErrorSeverity;
    use std::sync::Arc;

    fn detection(taxonomy: &ErrorTaxonomy, id: &str, confidence: f64) -> DetectedError {
        DetectedError {
            error_type: Arc::clone(taxonomy.get(id).unwrap()),
            confidence,
            evidence: "evidence".to_string(),
            location: None,
            severity_override: None,
        }
    }

    #[test]
    fn test_overall_score_empty_is_zero() {
        let taxonomy = ErrorTaxonomy::builtin();
        assert_eq!(overall_error_score(&taxonomy, &[]), 0.0);
    }

    #[test]
    fn test_overall_score_single_error_is_its_confidence() {
        let taxonomy = ErrorTaxonomy::builtin();
        let errors = vec![detection(&taxonomy, "misinformation", 0.7)];
        let score = overall_error_score(&taxonomy, &errors);
        assert!((score - 0.7).abs() < 1e-9);
    }

    #[test]
    fn test_overall_score_weighs_category_and_severity() {
        let taxonomy = ErrorTaxonomy::builtin();
        // misinformation: safety (1.0) x critical (1.0); lacks_detail:
        // completeness (0.4) x low (0.4).
        let errors = vec![
            detection(&taxonomy, "misinformation", 0.9),
            detection(&taxonomy, "lacks_detail", 0.6),
        ];
        let score = overall_error_score(&taxonomy, &errors);
        let expected = (0.9 * 1.0 + 0.6 * 0.16) / (1.0 + 0.16);
        assert!((score - expected).abs() < 1e-9);
        assert!(score > 0.8, "the heavyweight error must dominate");
    }

    #[test]
    fn test_overall_score_zero_weight_mass_is_zero() {
        let mut builder = TaxonomyBuilder::new();
        builder.set_category_weight(ErrorCategory::Safety, 0.0);
        let taxonomy = builder.build();
        let errors = vec![detection(&taxonomy, "misinformation", 0.9)];
        assert_eq!(overall_error_score(&taxonomy, &errors), 0.0);
    }

    #[test]
    fn test_overall_score_clamps_at_one() {
        let taxonomy = ErrorTaxonomy::builtin();
        let errors = vec![detection(&taxonomy, "misinformation", 1.5)];
        assert_eq!(overall_error_score(&taxonomy, &errors), 1.0);
    }

    #[test]
    fn test_category_scores_cover_every_category() {
        let scores = category_scores(&[]);
        assert_eq!(scores.len(), ErrorCategory::all().len());
        assert!(scores.values().all(|&s| s == 0.0));
    }

    #[test]
    fn test_category_scores_weigh_severity_only() {
        let taxonomy = ErrorTaxonomy::builtin();
        // Both safety: misinformation is critical (1.0), and we downgrade
        // the second to low (0.4) via an override.
        let mut downgraded = detection(&taxonomy, "harmful_content", 0.6);
        downgraded.severity_override = Some(ErrorSeverity::Low);
        let errors = vec![detection(&taxonomy, "misinformation", 0.8), downgraded];

        let scores = category_scores(&errors);
        let expected = (0.8 * 1.0 + 0.6 * 0.4) / (1.0 + 0.4);
        assert!((scores[&ErrorCategory::Safety] - expected).abs() < 1e-9);
        assert_eq!(scores[&ErrorCategory::Factual], 0.0);
    }

    #[test]
    fn test_overall_confidence_mean_and_empty() {
        let taxonomy = ErrorTaxonomy::builtin();
        assert_eq!(overall_confidence(&[]), 1.0);
        let errors = vec![
            detection(&taxonomy, "misinformation", 0.6),
            detection(&taxonomy, "misinformation", 0.8),
        ];
        assert!((overall_confidence(&errors) - 0.7).abs() < 1e-9);
    }
}
