//! Goal classification
//!
//! Turns free text into a structured `Task` using keyword heuristics. The
//! `TaskClassifier` trait is the seam for swapping in a different classifier
//! without touching the rest of the loop.

pub mod keywords;
pub mod category;
pub mod rules;

pub use category::{CategoryTable, TaskCategory};
pub use keywords::KeywordTable;
pub use rules::{KeywordClassifier, RuleOutcome};

use crate::types::Task;

/// Converts a goal into a `Task`. Must not fail.
pub trait TaskClassifier: Send + Sync {
    fn classify(&self, goal: &str) -> Task;
}
