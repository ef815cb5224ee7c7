//! Task categories
//!
//! Two category tables exist. The template table picks a plan template and
//! the pattern table labels long-term memory entries; the latter also counts
//! "find" as research.

use crate::classify::keywords::KeywordTable;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Broad kind of task
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TaskCategory {
    Research,
    Programming,
    Analysis,
    General,
}

impl TaskCategory {
    /// Label used in long-term pattern keys
    pub fn as_str(&self) -> &'static str {
        match self {
            TaskCategory::Research => "research",
            TaskCategory::Programming => "programming",
            TaskCategory::Analysis => "analysis",
            TaskCategory::General => "general",
        }
    }
}

impl fmt::Display for TaskCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// First-match category lookup with `General` as fallback
#[derive(Debug, Clone)]
pub struct CategoryTable {
    table: KeywordTable<TaskCategory>,
}

impl CategoryTable {
    /// Table used to choose a plan template
    pub fn templates() -> Self {
        Self {
            table: KeywordTable::new()
                .with_entry(&["research"], TaskCategory::Research)
                .with_entry(&["code", "program"], TaskCategory::Programming)
                .with_entry(&["analyze", "data"], TaskCategory::Analysis),
        }
    }

    /// Table used to label learned task patterns
    pub fn patterns() -> Self {
        Self {
            table: KeywordTable::new()
                .with_entry(&["research", "find"], TaskCategory::Research)
                .with_entry(&["code", "program"], TaskCategory::Programming)
                .with_entry(&["analyze", "data"], TaskCategory::Analysis),
        }
    }

    /// Categorize a goal
    pub fn categorize(&self, goal: &str) -> TaskCategory {
        self.table
            .first_match(goal)
            .copied()
            .unwrap_or(TaskCategory::General)
    }
}
