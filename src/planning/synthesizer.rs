//! Plan synthesis
//!
//! Chooses between two sources of steps:
//! - Experience: any stored episode shares a goal token with the task
//! - Template: the task's category template (research, programming,
//!   analysis, general)
//!
//! Synthesis only reads episodic memory and never fails.

use crate::classify::CategoryTable;
use crate::memory::EpisodicMemory;
use crate::planning::templates::{category_template, numbered, EXPERIENCE_TEMPLATE};
use crate::types::{Plan, PlanSource, RiskLevel, Step, Task};
use crate::agent::state::ExecutionPhase;
use serde::{Deserialize, Serialize};
use tracing::debug;

/// Fixed plan attributes applied to every synthesized plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlanDefaults {
    pub estimated_time: String,
    pub resources_needed: Vec<String>,
    pub risk_level: RiskLevel,
}

impl Default for PlanDefaults {
    fn default() -> Self {
        Self {
            estimated_time: "5-15 minutes".to_string(),
            resources_needed: vec!["basic access".to_string(), "basic tools".to_string()],
            risk_level: RiskLevel::Low,
        }
    }
}

/// Plan synthesizer
#[derive(Debug, Clone)]
pub struct PlanSynthesizer {
    categories: CategoryTable,
    defaults: PlanDefaults,
}

impl PlanSynthesizer {
    /// Create synthesizer with default plan attributes
    pub fn new() -> Self {
        Self::with_defaults(PlanDefaults::default())
    }

    /// Create synthesizer with custom plan attributes
    pub fn with_defaults(defaults: PlanDefaults) -> Self {
        Self {
            categories: CategoryTable::templates(),
            defaults,
        }
    }

    /// Build a plan for `task`
    pub fn synthesize(&self, task: &Task, episodic: &EpisodicMemory) -> Plan {
        let similar = episodic.find_similar(&task.goal);

        let (descriptions, source) = if similar.is_empty() {
            let category = self.categories.categorize(&task.goal);
            debug!("No similar episodes, using {} template", category);
            (
                numbered(category_template(category)),
                PlanSource::Template(category),
            )
        } else {
            debug!("Adapting plan from {} similar episodes", similar.len());
            (
                numbered(&EXPERIENCE_TEMPLATE),
                PlanSource::Experience {
                    similar_episodes: similar.len(),
                },
            )
        };

        Plan {
            steps: descriptions.into_iter().map(Step::new).collect(),
            estimated_time: self.defaults.estimated_time.clone(),
            resources_needed: self.defaults.resources_needed.clone(),
            risk_level: self.defaults.risk_level,
            source,
            phase: ExecutionPhase::NotStarted,
        }
    }
}

impl Default for PlanSynthesizer {
    fn default() -> Self {
        Self::new()
    }
}
