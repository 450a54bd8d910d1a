//! Top-level Faultline configuration.

use std::path::Path;

use serde::{Deserialize, Serialize};

use super::{JudgmentConfig, TaxonomyConfig};
use crate::errors::ConfigError;
use crate::types::ErrorCategory;

/// Top-level configuration aggregating all sub-configs.
///
/// Resolution order (highest priority first):
/// 1. Environment variables (`FAULTLINE_*`)
/// 2. Project config (`faultline.toml` in the evaluation root)
/// 3. Compiled defaults
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct FaultlineConfig {
    pub taxonomy: TaxonomyConfig,
    pub judgment: JudgmentConfig,
}

impl FaultlineConfig {
    /// Load configuration with layered resolution.
    pub fn load(root: &Path) -> Result<Self, ConfigError> {
        let mut config = Self::default();

        let project_path = root.join("faultline.toml");
        if project_path.exists() {
            let content = std::fs::read_to_string(&project_path).map_err(|_| {
                ConfigError::FileNotFound {
                    path: project_path.display().to_string(),
                }
            })?;
            config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: project_path.display().to_string(),
                message: e.to_string(),
            })?;
            tracing::debug!(path = %project_path.display(), "Loaded project config");
        }

        Self::apply_env_overrides(&mut config);
        Self::validate(&config)?;

        Ok(config)
    }

    /// Load configuration from a TOML string (for testing).
    pub fn from_toml(toml_str: &str) -> Result<Self, ConfigError> {
        toml::from_str(toml_str).map_err(|e| ConfigError::ParseError {
            path: "<string>".to_string(),
            message: e.to_string(),
        })
    }

    /// Validate the configuration values.
    pub fn validate(config: &FaultlineConfig) -> Result<(), ConfigError> {
        for (name, weight) in &config.taxonomy.category_weights {
            if ErrorCategory::parse_str(name).is_none() {
                return Err(ConfigError::ValidationFailed {
                    field: format!("taxonomy.category_weights.{name}"),
                    message: "unknown category name".to_string(),
                });
            }
            if !(0.0..=1.0).contains(weight) {
                return Err(ConfigError::ValidationFailed {
                    field: format!("taxonomy.category_weights.{name}"),
                    message: "must be between 0.0 and 1.0".to_string(),
                });
            }
        }
        if let Some(timeout_ms) = config.judgment.timeout_ms {
            if timeout_ms == 0 {
                return Err(ConfigError::ValidationFailed {
                    field: "judgment.timeout_ms".to_string(),
                    message: "must be greater than 0".to_string(),
                });
            }
        }
        Ok(())
    }

    /// Apply environment variable overrides.
    /// Pattern: `FAULTLINE_JUDGMENT_ENABLED`, `FAULTLINE_JUDGMENT_TIMEOUT_MS`.
    fn apply_env_overrides(config: &mut FaultlineConfig) {
        if let Ok(val) = std::env::var("FAULTLINE_JUDGMENT_ENABLED") {
            match val.parse::<bool>() {
                Ok(v) => config.judgment.enabled = Some(v),
                Err(_) => {
                    tracing::warn!(value = %val, "Ignoring unparseable FAULTLINE_JUDGMENT_ENABLED")
                }
            }
        }
        if let Ok(val) = std::env::var("FAULTLINE_JUDGMENT_TIMEOUT_MS") {
            match val.parse::<u64>() {
                Ok(v) => config.judgment.timeout_ms = Some(v),
                Err(_) => {
                    tracing::warn!(value = %val, "Ignoring unparseable FAULTLINE_JUDGMENT_TIMEOUT_MS")
                }
            }
        }
    }

    /// Serialize the config back to TOML.
    pub fn to_toml(&self) -> Result<String, ConfigError> {
        toml::to_string_pretty(self).map_err(|e| ConfigError::ParseError {
            path: "<serialization>".to_string(),
            message: e.to_string(),
        })
    }
}
