//! Long-term pattern store
//!
//! Pattern key → outcome map. Writes are upserts, so the most recent outcome
//! for a key wins. Nothing in the loop reads these back yet; they are kept as
//! a durable record of what worked and what to avoid.

use std::collections::HashMap;

/// Outcome recorded for a successful task category
pub const OUTCOME_SUCCESSFUL: &str = "successful";

/// Outcome recorded for an error string
pub const OUTCOME_AVOID: &str = "avoid";

/// Outcome recorded for a capability learning
pub const OUTCOME_APPLY: &str = "apply";

/// Long-term memory
#[derive(Debug, Clone, Default)]
pub struct PatternStore {
    patterns: HashMap<String, String>,
}

impl PatternStore {
    pub fn new() -> Self {
        Self {
            patterns: HashMap::new(),
        }
    }

    /// Insert or overwrite a pattern
    pub fn store(&mut self, pattern: impl Into<String>, outcome: impl Into<String>) {
        self.patterns.insert(pattern.into(), outcome.into());
    }

    /// Outcome recorded for a pattern
    pub fn get(&self, pattern: &str) -> Option<&str> {
        self.patterns.get(pattern).map(String::as_str)
    }

    /// Patterns whose outcome equals `outcome`
    pub fn with_outcome<'a>(&'a self, outcome: &'a str) -> impl Iterator<Item = &'a str> + 'a {
        self.patterns
            .iter()
            .filter(move |(_, o)| o.as_str() == outcome)
            .map(|(p, _)| p.as_str())
    }

    pub fn len(&self) -> usize {
        self.patterns.len()
    }

    pub fn is_empty(&self) -> bool {
        self.patterns.is_empty()
    }
}
