//! Memory and Learning Store
//!
//! Three areas owned by one agent instance:
//! - Working Memory: short-term scratch for the current run
//! - Pattern Store: long-term pattern → outcome facts
//! - Episodic Memory: append-only task/result history with similarity lookup
//!
//! Only the learning updater writes long-term and episodic memory.

pub mod episodic;
pub mod patterns;
pub mod working;
pub mod types;

pub use episodic::EpisodicMemory;
pub use patterns::PatternStore;
pub use working::WorkingMemory;
pub use types::{Episode, EpisodeId, MemorySize, ScratchValue};

use crate::types::{Task, TaskResult};

/// Aggregate memory of one agent
#[derive(Debug, Clone, Default)]
pub struct MemoryStore {
    short_term: WorkingMemory,
    long_term: PatternStore,
    episodic: EpisodicMemory,
}

impl MemoryStore {
    /// Memory with unbounded episodic history
    pub fn new() -> Self {
        Self::default()
    }

    /// Memory whose episodic history keeps at most `max_episodes`
    pub fn with_episode_capacity(max_episodes: Option<usize>) -> Self {
        let episodic = match max_episodes {
            Some(cap) => EpisodicMemory::with_capacity(cap),
            None => EpisodicMemory::new(),
        };
        Self {
            episodic,
            ..Self::default()
        }
    }

    pub fn short_term(&self) -> &WorkingMemory {
        &self.short_term
    }

    pub fn short_term_mut(&mut self) -> &mut WorkingMemory {
        &mut self.short_term
    }

    pub fn long_term(&self) -> &PatternStore {
        &self.long_term
    }

    pub fn episodic(&self) -> &EpisodicMemory {
        &self.episodic
    }

    /// Upsert a long-term pattern
    pub(crate) fn store_pattern(&mut self, pattern: impl Into<String>, outcome: impl Into<String>) {
        self.long_term.store(pattern, outcome);
    }

    /// Append a completed episode
    pub(crate) fn store_episode(&mut self, task: Task, result: TaskResult) {
        self.episodic.add_episode(Episode::new(task, result));
    }

    /// Episodes similar to `goal`
    pub fn similar_episodes(&self, goal: &str) -> Vec<&Episode> {
        self.episodic.find_similar(goal)
    }

    /// Sizes of each area
    pub fn size(&self) -> MemorySize {
        MemorySize {
            short_term: self.short_term.len(),
            long_term: self.long_term.len(),
            episodic: self.episodic.len(),
        }
    }

    /// Clear short-term memory only
    pub fn clear_short_term(&mut self) {
        self.short_term.clear();
    }
}
