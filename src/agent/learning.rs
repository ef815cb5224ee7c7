//! Learning updater
//!
//! Folds a finished run back into the agent: episode history, long-term
//! patterns, confidence and the running success rate. This is the only
//! writer of long-term and episodic memory.

use crate::agent::state::AgentStats;
use crate::classify::CategoryTable;
use crate::memory::patterns::{OUTCOME_APPLY, OUTCOME_AVOID, OUTCOME_SUCCESSFUL};
use crate::memory::MemoryStore;
use crate::types::{Task, TaskResult};
use serde::{Deserialize, Serialize};
use tracing::info;

/// Confidence step sizes
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct LearningRates {
    /// Added to confidence after a successful run
    pub confidence_increment: f64,
    /// Subtracted from confidence after a failed run
    pub confidence_decrement: f64,
}

impl Default for LearningRates {
    fn default() -> Self {
        Self {
            confidence_increment: 0.1,
            confidence_decrement: 0.05,
        }
    }
}

/// Learning updater
#[derive(Debug, Clone)]
pub struct LearningUpdater {
    rates: LearningRates,
    categories: CategoryTable,
}

impl LearningUpdater {
    pub fn new() -> Self {
        Self::with_rates(LearningRates::default())
    }

    pub fn with_rates(rates: LearningRates) -> Self {
        Self {
            rates,
            categories: CategoryTable::patterns(),
        }
    }

    /// Apply one finished run
    ///
    /// `tasks_completed` grows by exactly one per call whatever the outcome.
    pub fn update(
        &self,
        stats: &mut AgentStats,
        memory: &mut MemoryStore,
        task: &Task,
        result: &TaskResult,
    ) {
        info!("Learning from results (success: {})", result.success());

        memory.store_episode(task.clone(), result.clone());

        if result.success() {
            let category = self.categories.categorize(&task.goal);
            memory.store_pattern(format!("Task type: {}", category), OUTCOME_SUCCESSFUL);
            stats.raise_confidence(self.rates.confidence_increment);
        } else {
            for error in result.errors() {
                memory.store_pattern(format!("Error: {}", error), OUTCOME_AVOID);
            }
            stats.lower_confidence(self.rates.confidence_decrement);
        }

        for learning in result.learnings() {
            memory.store_pattern(format!("Learning: {}", learning), OUTCOME_APPLY);
        }

        stats.record_outcome(result.success());

        info!(
            "Learning complete. Confidence: {:.2}, success rate: {:.2}",
            stats.confidence_level, stats.success_rate
        );
    }
}

impl Default for LearningUpdater {
    fn default() -> Self {
        Self::new()
    }
}
