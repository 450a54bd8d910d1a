//! Error categories.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Primary error categories for generated-response evaluation.
///
/// A closed set: aggregation logic matches exhaustively on these variants,
/// and every per-category score map carries one entry per variant.
/// Declaration order is the canonical reporting order.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ErrorCategory {
    Factual,
    Reasoning,
    Coherence,
    Relevance,
    Bias,
    Safety,
    Completeness,
    Consistency,
    Formatting,
    Hallucination,
}

impl ErrorCategory {
    /// Stable lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Factual => "factual",
            Self::Reasoning => "reasoning",
            Self::Coherence => "coherence",
            Self::Relevance => "relevance",
            Self::Bias => "bias",
            Self::Safety => "safety",
            Self::Completeness => "completeness",
            Self::Consistency => "consistency",
            Self::Formatting => "formatting",
            Self::Hallucination => "hallucination",
        }
    }

    /// Parse an identifier produced by [`as_str`](Self::as_str).
    pub fn parse_str(s: &str) -> Option<ErrorCategory> {
        match s {
            "factual" => Some(Self::Factual),
            "reasoning" => Some(Self::Reasoning),
            "coherence" => Some(Self::Coherence),
            "relevance" => Some(Self::Relevance),
            "bias" => Some(Self::Bias),
            "safety" => Some(Self::Safety),
            "completeness" => Some(Self::Completeness),
            "consistency" => Some(Self::Consistency),
            "formatting" => Some(Self::Formatting),
            "hallucination" => Some(Self::Hallucination),
            _ => None,
        }
    }

    /// The complete category set in canonical order.
    ///
    /// Not derived from any registry contents: a category with zero
    /// registered definitions still appears here.
    pub fn all() -> &'static [ErrorCategory] {
        &[
            Self::Factual,
            Self::Reasoning,
            Self::Coherence,
            Self::Relevance,
            Self::Bias,
            Self::Safety,
            Self::Completeness,
            Self::Consistency,
            Self::Formatting,
            Self::Hallucination,
        ]
    }
}

impl fmt::Display for ErrorCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
