//! Judgment-model configuration.

use serde::{Deserialize, Serialize};

use crate::constants::DEFAULT_JUDGMENT_TIMEOUT_MS;

/// Configuration for the model-assisted detection path.
///
/// The path is not implemented; classification always runs pattern-only.
/// The knobs are carried and validated so an eventual implementation keeps
/// the same config surface.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct JudgmentConfig {
    /// Enable the model-assisted path. Default: false.
    pub enabled: Option<bool>,
    /// Timeout for a single judgment call in milliseconds. Default: 10000.
    pub timeout_ms: Option<u64>,
}

impl JudgmentConfig {
    /// Returns the effective enabled flag, defaulting to false.
    pub fn effective_enabled(&self) -> bool {
        self.enabled.unwrap_or(false)
    }

    /// Returns the effective timeout, defaulting to 10 seconds.
    pub fn effective_timeout_ms(&self) -> u64 {
        self.timeout_ms.unwrap_or(DEFAULT_JUDGMENT_TIMEOUT_MS)
    }
}
