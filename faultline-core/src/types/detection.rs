//! Detection output types.

use std::sync::Arc;

use serde::{Deserialize, Serialize};

use super::{ErrorSeverity, ErrorTypeDefinition};

/// Half-open byte range `[start, end)` into the analyzed response.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct TextSpan {
    pub start: usize,
    pub end: usize,
}

impl TextSpan {
    pub fn new(start: usize, end: usize) -> Self {
        Self { start, end }
    }

    pub fn len(&self) -> usize {
        self.end.saturating_sub(self.start)
    }

    pub fn is_empty(&self) -> bool {
        self.end <= self.start
    }
}

/// One detected error instance in a response.
///
/// Holds a shared reference into the taxonomy that produced it. Instances
/// live only as long as the result they are returned in; this crate never
/// persists them.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DetectedError {
    /// The taxonomy definition that matched.
    pub error_type: Arc<ErrorTypeDefinition>,
    /// Detection confidence in `[0, 1]`.
    pub confidence: f64,
    /// The literal substring that triggered the detection.
    pub evidence: String,
    /// Where in the response the evidence was found.
    pub location: Option<TextSpan>,
    /// Optional override of the definition's default severity.
    pub severity_override: Option<ErrorSeverity>,
}

impl DetectedError {
    /// Effective severity: the override if present, else the type default.
    pub fn severity(&self) -> ErrorSeverity {
        self.severity_override
            .unwrap_or(self.error_type.default_severity)
    }
}
