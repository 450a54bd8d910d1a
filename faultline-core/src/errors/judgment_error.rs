//! Judgment-model collaborator errors.

/// Errors surfaced by a judgment-model collaborator.
///
/// No code path in this workspace produces these today; the trait's error
/// surface is fixed here so an eventual implementation slots in without
/// touching the engine contract.
#[derive(Debug, thiserror::Error)]
pub enum JudgmentError {
    #[error("Judgment model unavailable")]
    Unavailable,

    #[error("Judgment call timed out after {timeout_ms}ms")]
    Timeout { timeout_ms: u64 },

    #[error("Judgment call failed: {message}")]
    Failed { message: String },
}
