//! Core data types for the memory system

use crate::types::{Plan, Task, TaskResult};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Unique identifier for episodes
pub type EpisodeId = uuid::Uuid;

/// Episode: record of one completed task run
///
/// Fields are private so an episode cannot change after it is stored.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Episode {
    id: EpisodeId,
    task: Task,
    result: TaskResult,
    timestamp: DateTime<Utc>,
}

impl Episode {
    /// Create a new episode stamped with the current time
    pub fn new(task: Task, result: TaskResult) -> Self {
        Self {
            id: uuid::Uuid::new_v4(),
            task,
            result,
            timestamp: Utc::now(),
        }
    }

    pub fn id(&self) -> EpisodeId {
        self.id
    }

    pub fn task(&self) -> &Task {
        &self.task
    }

    pub fn result(&self) -> &TaskResult {
        &self.result
    }

    pub fn timestamp(&self) -> DateTime<Utc> {
        self.timestamp
    }

    /// Lowercased whitespace tokens of the stored goal
    pub fn goal_tokens(&self) -> impl Iterator<Item = String> + '_ {
        self.task.goal.split_whitespace().map(str::to_lowercase)
    }
}

/// Value held in short-term memory
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum ScratchValue {
    Task(Task),
    Plan(Plan),
    Note(String),
}

/// Sizes of the three memory areas
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub struct MemorySize {
    pub short_term: usize,
    pub long_term: usize,
    pub episodic: usize,
}
