//! Step routing
//!
//! Maps a step description to a capability name. Groups are checked in fixed
//! priority order and the first hit wins; anything else goes to `generic`.

use crate::capabilities::types::{ANALYSIS, CODE, DOCUMENTATION, GENERIC, SEARCH};
use crate::classify::KeywordTable;

/// Keyword router for plan steps
#[derive(Debug, Clone)]
pub struct StepRouter {
    table: KeywordTable<String>,
    fallback: String,
}

impl StepRouter {
    /// Router with the built-in capability groups
    pub fn new() -> Self {
        let table = KeywordTable::new()
            .with_entry(&["search", "find"], SEARCH.to_string())
            .with_entry(&["analyze", "process"], ANALYSIS.to_string())
            .with_entry(&["code", "implement"], CODE.to_string())
            .with_entry(&["document", "present"], DOCUMENTATION.to_string());

        Self {
            table,
            fallback: GENERIC.to_string(),
        }
    }

    /// Router with a caller-supplied table and fallback
    pub fn with_table(table: KeywordTable<String>, fallback: impl Into<String>) -> Self {
        Self {
            table,
            fallback: fallback.into(),
        }
    }

    /// Capability name for a step description
    pub fn route(&self, step_description: &str) -> &str {
        self.table
            .first_match(step_description)
            .map(String::as_str)
            .unwrap_or(self.fallback.as_str())
    }
}

impl Default for StepRouter {
    fn default() -> Self {
        Self::new()
    }
}
