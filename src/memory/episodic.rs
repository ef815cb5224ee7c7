//! Episodic Memory: append-only task history
//!
//! Unbounded by default. With a capacity set, the oldest episode is evicted
//! first (FIFO) once the buffer is full.

use crate::memory::types::Episode;
use std::collections::{HashSet, VecDeque};

/// Episodic memory storage
#[derive(Debug, Clone, Default)]
pub struct EpisodicMemory {
    /// Episodes in insertion order
    episodes: VecDeque<Episode>,
    /// Optional FIFO capacity
    capacity: Option<usize>,
}

impl EpisodicMemory {
    /// Create an unbounded episodic memory
    pub fn new() -> Self {
        Self {
            episodes: VecDeque::new(),
            capacity: None,
        }
    }

    /// Create an episodic memory that keeps at most `capacity` episodes
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            episodes: VecDeque::with_capacity(capacity),
            capacity: Some(capacity),
        }
    }

    /// Add an episode to memory
    /// Complexity: O(1)
    pub fn add_episode(&mut self, episode: Episode) {
        if let Some(cap) = self.capacity {
            if cap == 0 {
                return;
            }
            if self.episodes.len() >= cap {
                self.episodes.pop_front();
            }
        }
        self.episodes.push_back(episode);
    }

    /// Episodes whose goal shares at least one whitespace token with `goal`
    /// (case-insensitive), in storage order.
    /// Complexity: O(n × t) over stored episodes and their tokens
    pub fn find_similar(&self, goal: &str) -> Vec<&Episode> {
        let wanted: HashSet<String> = goal.split_whitespace().map(str::to_lowercase).collect();
        if wanted.is_empty() {
            return Vec::new();
        }

        self.episodes
            .iter()
            .filter(|episode| episode.goal_tokens().any(|token| wanted.contains(&token)))
            .collect()
    }

    /// Get all episodes
    pub fn get_all(&self) -> &VecDeque<Episode> {
        &self.episodes
    }

    /// Most recently stored episode
    pub fn last(&self) -> Option<&Episode> {
        self.episodes.back()
    }

    /// Get memory size
    pub fn len(&self) -> usize {
        self.episodes.len()
    }

    /// Check if memory is empty
    pub fn is_empty(&self) -> bool {
        self.episodes.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::{Task, TaskResult};
    use std::collections::BTreeMap;
    use std::time::Duration;

    fn episode(goal: &str) -> Episode {
        let result = TaskResult::from_run(BTreeMap::new(), Duration::ZERO, vec![], vec![]);
        Episode::new(Task::new(goal), result)
    }

    #[test]
    fn test_unbounded_by_default() {
        let mut memory = EpisodicMemory::new();
        for i in 0..250 {
            memory.add_episode(episode(&format!("goal {}", i)));
        }
        assert_eq!(memory.len(), 250);
    }

    #[test]
    fn test_fifo_eviction_with_capacity() {
        let mut memory = EpisodicMemory::with_capacity(2);
        memory.add_episode(episode("first"));
        memory.add_episode(episode("second"));
        memory.add_episode(episode("third"));

        assert_eq!(memory.len(), 2);
        assert_eq!(memory.get_all()[0].task().goal, "second");
        assert_eq!(memory.last().unwrap().task().goal, "third");
    }

    #[test]
    fn test_find_similar_token_overlap() {
        let mut memory = EpisodicMemory::new();
        memory.add_episode(episode("Research Rust ownership"));
        memory.add_episode(episode("Bake bread"));
        memory.add_episode(episode("Write rust tests"));

        let similar = memory.find_similar("learn RUST");
        let goals: Vec<&str> = similar.iter().map(|e| e.task().goal.as_str()).collect();
        assert_eq!(goals, vec!["Research Rust ownership", "Write rust tests"]);
    }

    #[test]
    fn test_find_similar_requires_whole_token() {
        let mut memory = EpisodicMemory::new();
        memory.add_episode(episode("programming basics"));

        assert!(memory.find_similar("program").is_empty());
    }

    #[test]
    fn test_common_word_matches_unrelated_goal() {
        let mut memory = EpisodicMemory::new();
        memory.add_episode(episode("Bake the bread"));

        assert_eq!(memory.find_similar("Fix the bug").len(), 1);
    }

    #[test]
    fn test_find_similar_empty_goal() {
        let mut memory = EpisodicMemory::new();
        memory.add_episode(episode("anything"));
        assert!(memory.find_similar("   ").is_empty());
    }
}
