//! Classification results.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use super::{DetectedError, ErrorCategory, ErrorSeverity};

/// One response to classify, as handed over by the evaluation pipeline.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResponseRecord {
    /// Caller-supplied identifier for the response.
    pub response_id: String,
    /// The prompt the response answers. Reserved for the model-assisted
    /// path; the pattern detector does not consult it.
    pub prompt: String,
    /// The response text under evaluation.
    pub response: String,
}

impl ResponseRecord {
    pub fn new(response_id: &str, prompt: &str, response: &str) -> Self {
        Self {
            response_id: response_id.to_string(),
            prompt: prompt.to_string(),
            response: response.to_string(),
        }
    }
}

/// Complete error analysis for a single response.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorAnalysisResult {
    /// Identifier the caller supplied for this response.
    pub response_id: String,
    /// Deduplicated detections, in first-occurrence order.
    pub detected_errors: Vec<DetectedError>,
    /// Weighted overall error score in `[0, 1]`.
    pub overall_error_score: f64,
    /// Per-category scores. Always one entry for every category in
    /// [`ErrorCategory::all`], including categories without detections.
    pub category_scores: BTreeMap<ErrorCategory, f64>,
    /// Overall confidence in the analysis, in `[0, 1]`.
    pub confidence_score: f64,
}

impl ErrorAnalysisResult {
    /// Number of detected errors per category. Categories without
    /// detections are omitted here, unlike in `category_scores`.
    pub fn error_count_by_category(&self) -> BTreeMap<ErrorCategory, usize> {
        let mut counts: BTreeMap<ErrorCategory, usize> = BTreeMap::new();
        for error in &self.detected_errors {
            *counts.entry(error.error_type.category).or_insert(0) += 1;
        }
        counts
    }

    /// True when any detection's effective severity is critical.
    pub fn has_critical_errors(&self) -> bool {
        self.detected_errors
            .iter()
            .any(|error| error.severity() == ErrorSeverity::Critical)
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Arc;

    use super::*;
    use crate::types::{ErrorTypeDefinition, TextSpan};

    fn detected(category: ErrorCategory, severity: ErrorSeverity) -> DetectedError {
        DetectedError {
            error_type: Arc::new(ErrorTypeDefinition::new(
                "sample",
                "Sample",
                category,
                "sample definition",
                &[],
                &["sample"],
                severity,
            )),
            confidence: 0.7,
            evidence: "sample".to_string(),
            location: Some(TextSpan::new(0, 6)),
            severity_override: None,
        }
    }

    fn result_with(errors: Vec<DetectedError>) -> ErrorAnalysisResult {
        ErrorAnalysisResult {
            response_id: "r1".to_string(),
            detected_errors: errors,
            overall_error_score: 0.0,
            category_scores: BTreeMap::new(),
            confidence_score: 1.0,
        }
    }

    #[test]
    fn test_error_count_by_category() {
        let result = result_with(vec![
            detected(ErrorCategory::Factual, ErrorSeverity::High),
            detected(ErrorCategory::Factual, ErrorSeverity::Medium),
            detected(ErrorCategory::Safety, ErrorSeverity::Critical),
        ]);
        let counts = result.error_count_by_category();
        assert_eq!(counts.get(&ErrorCategory::Factual), Some(&2));
        assert_eq!(counts.get(&ErrorCategory::Safety), Some(&1));
        assert_eq!(counts.get(&ErrorCategory::Bias), None);
    }

    #[test]
    fn test_has_critical_errors() {
        let clean = result_with(vec![detected(ErrorCategory::Factual, ErrorSeverity::High)]);
        assert!(!clean.has_critical_errors());

        let critical = result_with(vec![detected(ErrorCategory::Safety, ErrorSeverity::Critical)]);
        assert!(critical.has_critical_errors());
    }

    #[test]
    fn test_override_counts_as_critical() {
        let mut error = detected(ErrorCategory::Coherence, ErrorSeverity::Low);
        error.severity_override = Some(ErrorSeverity::Critical);
        assert!(result_with(vec![error]).has_critical_errors());
    }
}
