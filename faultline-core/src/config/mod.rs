//! Configuration for the Faultline engine.

pub mod faultline_config;
pub mod judgment_config;
pub mod taxonomy_config;

pub use faultline_config::FaultlineConfig;
pub use judgment_config::JudgmentConfig;
pub use taxonomy_config::TaxonomyConfig;
