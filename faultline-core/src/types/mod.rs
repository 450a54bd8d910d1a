//! Data model for response-error analysis.

pub mod category;
pub mod definition;
pub mod detection;
pub mod result;
pub mod severity;

pub use category::ErrorCategory;
pub use definition::ErrorTypeDefinition;
pub use detection::{DetectedError, TextSpan};
pub use result::{ErrorAnalysisResult, ResponseRecord};
pub use severity::ErrorSeverity;
