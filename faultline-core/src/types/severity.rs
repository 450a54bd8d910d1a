//! Error severity levels and the shared aggregation multiplier table.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Error severity levels, ordered from most to least severe.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize,
)]
#[serde(rename_all = "lowercase")]
pub enum ErrorSeverity {
    /// Completely wrong or harmful.
    Critical,
    /// Significantly impacts quality.
    High,
    /// Noticeable but manageable.
    Medium,
    /// Minor issues.
    Low,
    /// Barely noticeable.
    Negligible,
}

impl ErrorSeverity {
    /// Stable lowercase identifier, matching the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Critical => "critical",
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
            Self::Negligible => "negligible",
        }
    }

    /// Parse an identifier produced by [`as_str`](Self::as_str).
    pub fn parse_str(s: &str) -> Option<ErrorSeverity> {
        match s {
            "critical" => Some(Self::Critical),
            "high" => Some(Self::High),
            "medium" => Some(Self::Medium),
            "low" => Some(Self::Low),
            "negligible" => Some(Self::Negligible),
            _ => None,
        }
    }

    /// All severity levels, most severe first.
    pub fn all() -> &'static [ErrorSeverity] {
        &[
            Self::Critical,
            Self::High,
            Self::Medium,
            Self::Low,
            Self::Negligible,
        ]
    }

    /// Numeric multiplier used by every severity-weighted aggregate.
    ///
    /// This is the single shared table; both the overall score and the
    /// per-category scores read it. A severity outside the closed set
    /// would fall back to
    /// [`DEFAULT_SEVERITY_MULTIPLIER`](crate::constants::DEFAULT_SEVERITY_MULTIPLIER).
    pub fn multiplier(&self) -> f64 {
        match self {
            Self::Critical => 1.0,
            Self::High => 0.8,
            Self::Medium => 0.6,
            Self::Low => 0.4,
            Self::Negligible => 0.2,
        }
    }
}

impl fmt::Display for ErrorSeverity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_multiplier_table() {
        assert_eq!(ErrorSeverity::Critical.multiplier(), 1.0);
        assert_eq!(ErrorSeverity::High.multiplier(), 0.8);
        assert_eq!(ErrorSeverity::Medium.multiplier(), 0.6);
        assert_eq!(ErrorSeverity::Low.multiplier(), 0.4);
        assert_eq!(ErrorSeverity::Negligible.multiplier(), 0.2);
    }

    #[test]
    fn test_ordering_most_severe_first() {
        assert!(ErrorSeverity::Critical < ErrorSeverity::High);
        assert!(ErrorSeverity::High < ErrorSeverity::Negligible);
        assert_eq!(ErrorSeverity::all().len(), 5);
    }

    #[test]
    fn test_parse_round_trip() {
        for severity in ErrorSeverity::all() {
            assert_eq!(ErrorSeverity::parse_str(severity.as_str()), Some(*severity));
        }
        assert_eq!(ErrorSeverity::parse_str("fatal"), None);
    }
}
