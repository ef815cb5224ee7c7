//! Structured task produced by goal classification

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Low,
    #[default]
    Medium,
    High,
}

/// A classified goal with its constraints and success criteria
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Task {
    /// Natural language goal as given by the caller
    pub goal: String,

    /// Constraints appended by matching classification rules
    #[serde(default)]
    pub constraints: Vec<String>,

    /// Success criteria appended by matching classification rules
    #[serde(default)]
    pub success_criteria: Vec<String>,

    /// Task priority
    #[serde(default)]
    pub priority: Priority,

    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a task with no constraints or criteria
    pub fn new(goal: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            constraints: Vec::new(),
            success_criteria: Vec::new(),
            priority: Priority::Medium,
            created_at: Utc::now(),
        }
    }

    /// Set priority
    pub fn with_priority(mut self, priority: Priority) -> Self {
        self.priority = priority;
        self
    }
}
