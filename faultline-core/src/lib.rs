//! # faultline-core
//!
//! Foundation crate for the Faultline response-error analysis engine.
//! Defines the taxonomy data model, shared scoring constants, subsystem
//! errors, configuration, and collaborator traits. The analysis crate
//! builds on this.

pub mod config;
pub mod constants;
pub mod errors;
pub mod logging;
pub mod traits;
pub mod types;

// Re-export the most commonly used types at the crate root.
pub use config::FaultlineConfig;
pub use errors::{ConfigError, JudgmentError, TaxonomyError};
pub use types::{
    DetectedError, ErrorAnalysisResult, ErrorCategory, ErrorSeverity, ErrorTypeDefinition,
    ResponseRecord, TextSpan,
};
