//! # faultline-analysis
//!
//! Turns free-form generated responses into structured, comparable error
//! signals: a fixed taxonomy of error types with category weights, pattern
//! detection with per-match confidence, deduplication, and weighted
//! aggregation into per-category and overall scores.
//!
//! Pipeline: `classify` → pattern detection against the compiled taxonomy
//! table → confidence per match → deduplication → overall score +
//! per-category scores + overall confidence.

pub mod classifier;
pub mod taxonomy;

pub use classifier::{ErrorClassifier, SkippedPattern};
pub use taxonomy::{ErrorTaxonomy, TaxonomyBuilder};
