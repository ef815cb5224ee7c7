//! Plans and their steps

use crate::agent::state::ExecutionPhase;
use crate::classify::TaskCategory;
use serde::{Deserialize, Serialize};

/// Step execution status
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum StepStatus {
    #[default]
    Pending,
    Completed,
    Failed,
}

/// Plan risk level
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum RiskLevel {
    #[default]
    Low,
    Medium,
    High,
}

/// A single step of a plan
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Step {
    /// Step text, numbered ("1. ...")
    pub description: String,

    /// Capability to invoke. `None` means the executor routes the
    /// description through its keyword table.
    pub capability_required: Option<String>,

    /// Execution status
    pub status: StepStatus,
}

impl Step {
    /// Create a pending step routed at execution time
    pub fn new(description: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            capability_required: None,
            status: StepStatus::Pending,
        }
    }

    /// Create a pending step pinned to a capability
    pub fn with_capability(description: impl Into<String>, capability: impl Into<String>) -> Self {
        Self {
            description: description.into(),
            capability_required: Some(capability.into()),
            status: StepStatus::Pending,
        }
    }
}

/// Where a plan's steps came from
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PlanSource {
    /// Adapted from similar past episodes
    Experience { similar_episodes: usize },
    /// Generated from the category template table
    Template(TaskCategory),
    /// Built by the caller
    Manual,
}

/// Ordered steps toward a task's goal
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Plan {
    pub steps: Vec<Step>,
    pub estimated_time: String,
    pub resources_needed: Vec<String>,
    pub risk_level: RiskLevel,
    pub source: PlanSource,
    /// Plan-level execution state
    #[serde(default)]
    pub phase: ExecutionPhase,
}

impl Plan {
    /// Build a manual plan from step descriptions
    pub fn from_steps<I, S>(steps: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self::manual(steps.into_iter().map(Step::new).collect())
    }

    /// Build a manual plan from prepared steps
    pub fn manual(steps: Vec<Step>) -> Self {
        Self {
            steps,
            estimated_time: String::new(),
            resources_needed: Vec::new(),
            risk_level: RiskLevel::Low,
            source: PlanSource::Manual,
            phase: ExecutionPhase::NotStarted,
        }
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }

    /// Count steps in a given status
    pub fn count_status(&self, status: StepStatus) -> usize {
        self.steps.iter().filter(|s| s.status == status).count()
    }
}
