//! Pattern-based error classification.
//!
//! A classifier compiles its taxonomy's detection patterns once at
//! construction and is read-only afterwards, so one instance can serve
//! concurrent classification from many threads. The pipeline per response:
//! pattern detection, per-match confidence, deduplication, then weighted
//! aggregation into scores.

pub mod compile;
pub mod confidence;
pub mod dedup;
pub mod scoring;

pub use compile::SkippedPattern;

use std::sync::Arc;

use rayon::prelude::*;
use tracing::debug;

use faultline_core::traits::JudgmentModel;
use faultline_core::types::{DetectedError, ErrorAnalysisResult, ResponseRecord, TextSpan};

use crate::taxonomy::ErrorTaxonomy;
use compile::CompiledPatternTable;

/// Pattern-based error classifier over a taxonomy snapshot.
pub struct ErrorClassifier {
    taxonomy: Arc<ErrorTaxonomy>,
    table: CompiledPatternTable,
    judgment_model: Option<Arc<dyn JudgmentModel>>,
}

impl ErrorClassifier {
    /// Build a classifier, compiling every registered pattern. Patterns
    /// that fail to compile are skipped (see [`Self::skipped_patterns`]);
    /// construction itself cannot fail.
    pub fn new(taxonomy: Arc<ErrorTaxonomy>) -> Self {
        let table = CompiledPatternTable::build(&taxonomy);
        Self {
            taxonomy,
            table,
            judgment_model: None,
        }
    }

    /// Build a classifier with a judgment model attached.
    ///
    /// The model is carried but not yet consulted; classification remains
    /// pattern-only until the model-assisted path is wired up.
    pub fn with_judgment_model(
        taxonomy: Arc<ErrorTaxonomy>,
        judgment_model: Arc<dyn JudgmentModel>,
    ) -> Self {
        let mut classifier = Self::new(taxonomy);
        classifier.judgment_model = Some(judgment_model);
        classifier
    }

    /// The taxonomy this classifier was built over.
    pub fn taxonomy(&self) -> &Arc<ErrorTaxonomy> {
        &self.taxonomy
    }

    /// Number of successfully compiled detection patterns.
    pub fn pattern_count(&self) -> usize {
        self.table.pattern_count()
    }

    /// Patterns that failed to compile at construction.
    pub fn skipped_patterns(&self) -> &[SkippedPattern] {
        &self.table.skipped
    }

    /// Whether a judgment model is attached.
    pub fn has_judgment_model(&self) -> bool {
        self.judgment_model.is_some()
    }

    /// Classify errors in one response.
    ///
    /// `prompt` is accepted for parity with the future model-assisted path
    /// and is not consulted by pattern detection. `use_judgment_model` is
    /// likewise accepted but has no effect today; passing `true` changes
    /// nothing about the result.
    pub fn classify(
        &self,
        response_id: &str,
        prompt: &str,
        response: &str,
        use_judgment_model: bool,
    ) -> ErrorAnalysisResult {
        let _ = prompt;
        if use_judgment_model {
            debug!(
                response_id,
                attached = self.judgment_model.is_some(),
                "Model-assisted analysis requested; path not wired up, running pattern-only"
            );
        }

        let detected = dedup::deduplicate_errors(self.detect_pattern_errors(response));

        let overall_error_score = scoring::overall_error_score(&self.taxonomy, &detected);
        let category_scores = scoring::category_scores(&detected);
        let confidence_score = scoring::overall_confidence(&detected);

        debug!(
            response_id,
            detected = detected.len(),
            overall = overall_error_score,
            "Classified response"
        );

        ErrorAnalysisResult {
            response_id: response_id.to_string(),
            detected_errors: detected,
            overall_error_score,
            category_scores,
            confidence_score,
        }
    }

    /// Classify a batch of responses in parallel. Output order matches
    /// input order.
    pub fn classify_batch(&self, records: &[ResponseRecord]) -> Vec<ErrorAnalysisResult> {
        records
            .par_iter()
            .map(|record| self.classify(&record.response_id, &record.prompt, &record.response, false))
            .collect()
    }

    /// Run raw pattern detection without deduplication or scoring.
    ///
    /// Every non-overlapping match of every compiled pattern yields one
    /// detection, so one type can fire several times in a response and
    /// different types can fire on overlapping text. Output follows the
    /// compiled table's order: category groups in first-encounter order,
    /// matches left to right within each pattern.
    pub fn detect_pattern_errors(&self, text: &str) -> Vec<DetectedError> {
        let mut detected = Vec::new();

        for group in &self.table.groups {
            for compiled in &group.patterns {
                for m in compiled.regex.find_iter(text) {
                    let confidence = confidence::pattern_confidence(text, m.start(), m.end());
                    detected.push(DetectedError {
                        error_type: Arc::clone(&compiled.definition),
                        confidence,
                        evidence: m.as_str().to_string(),
                        location: Some(TextSpan::new(m.start(), m.end())),
                        severity_override: None,
                    });
                }
            }
        }

        detected
    }
}
