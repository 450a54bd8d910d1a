//! Error handling for Faultline.
//! One error enum per subsystem, `thiserror` only, zero `anyhow`.

pub mod config_error;
pub mod judgment_error;
pub mod taxonomy_error;

pub use config_error::ConfigError;
pub use judgment_error::JudgmentError;
pub use taxonomy_error::TaxonomyError;
