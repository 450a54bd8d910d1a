//! Judgment-model collaborator trait.
//!
//! Pattern detection runs standalone. An eventual model-assisted path
//! implements this trait to contribute additional candidate detections;
//! the engine accepts the hook but never invokes it today.

use crate::errors::JudgmentError;
use crate::types::DetectedError;

/// External model that proposes additional error detections for a
/// response.
///
/// Implementations must be shareable across threads and are expected to
/// bound their own latency (`JudgmentConfig::effective_timeout_ms` is the
/// agreed ceiling); on timeout or failure the caller falls back to
/// pattern-only results.
pub trait JudgmentModel: Send + Sync {
    /// Assess a response against its prompt, returning candidate
    /// detections.
    fn assess(
        &self,
        prompt: &str,
        response: &str,
    ) -> Result<Vec<DetectedError>, JudgmentError>;
}

/// No-op judgment model for standalone mode; proposes nothing.
pub struct DisabledJudgment;

impl JudgmentModel for DisabledJudgment {
    fn assess(
        &self,
        _prompt: &str,
        _response: &str,
    ) -> Result<Vec<DetectedError>, JudgmentError> {
        Ok(Vec::new())
    }
}
