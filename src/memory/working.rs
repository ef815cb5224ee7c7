//! Working Memory: per-run scratch space
//!
//! Overwritten as each run progresses and cleared only by an explicit reset.

use crate::memory::types::ScratchValue;
use crate::types::{Plan, Task};
use std::collections::HashMap;

/// Key under which the active task is stored
pub const CURRENT_TASK_KEY: &str = "current_task";

/// Key under which the active plan is stored
pub const CURRENT_PLAN_KEY: &str = "current_plan";

/// Short-term scratch store
#[derive(Debug, Clone, Default)]
pub struct WorkingMemory {
    entries: HashMap<String, ScratchValue>,
}

impl WorkingMemory {
    /// Create empty working memory
    pub fn new() -> Self {
        Self {
            entries: HashMap::new(),
        }
    }

    /// Store a value, replacing any previous value under `key`
    pub fn store(&mut self, key: impl Into<String>, value: ScratchValue) {
        self.entries.insert(key.into(), value);
    }

    /// Retrieve a value
    pub fn get(&self, key: &str) -> Option<&ScratchValue> {
        self.entries.get(key)
    }

    /// Set the active task
    pub fn set_task(&mut self, task: Task) {
        self.store(CURRENT_TASK_KEY, ScratchValue::Task(task));
    }

    /// Set the active plan
    pub fn set_plan(&mut self, plan: Plan) {
        self.store(CURRENT_PLAN_KEY, ScratchValue::Plan(plan));
    }

    /// Active task, if any
    pub fn task(&self) -> Option<&Task> {
        match self.entries.get(CURRENT_TASK_KEY) {
            Some(ScratchValue::Task(task)) => Some(task),
            _ => None,
        }
    }

    /// Active plan, if any
    pub fn plan(&self) -> Option<&Plan> {
        match self.entries.get(CURRENT_PLAN_KEY) {
            Some(ScratchValue::Plan(plan)) => Some(plan),
            _ => None,
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Clear all entries
    pub fn clear(&mut self) {
        self.entries.clear();
    }
}
