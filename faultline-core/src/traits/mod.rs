//! Collaborator traits.

pub mod judgment;

pub use judgment::{DisabledJudgment, JudgmentModel};
