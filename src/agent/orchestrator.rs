//! Agent orchestrator - main coordinator
//!
//! Drives one pass of the task loop:
//! - Analyze: goal text → `Task` (classifier)
//! - Plan: `Task` + episodic memory → `Plan` (synthesizer)
//! - Execute: `Plan` → `TaskResult` (executor over the capability registry)
//! - Learn: `TaskResult` → statistics and memory (learning updater)
//!
//! Each `Agent` owns its memory, registry and statistics; nothing is shared
//! between instances.

use crate::agent::executor::PlanExecutor;
use crate::agent::learning::LearningUpdater;
use crate::agent::state::{AgentStats, BusyFlag};
use crate::capabilities::{Capability, CapabilityRegistry, StepRouter};
use crate::classify::{KeywordClassifier, TaskClassifier};
use crate::config::Config;
use crate::errors::{AgentError, Result};
use crate::memory::{Episode, MemorySize, MemoryStore, WorkingMemory};
use crate::planning::PlanSynthesizer;
use crate::telemetry::{LoopEvent, TelemetryCollector};
use crate::types::{Plan, PlanSource, Task, TaskResult};
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use tracing::{debug, info};

/// Snapshot of an agent for introspection
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgentStatus {
    pub name: String,
    pub personality: String,
    pub is_busy: bool,
    pub confidence_level: f64,
    pub success_rate: f64,
    pub tasks_completed: u64,
    pub current_task_goal: Option<String>,
    pub memory_size: MemorySize,
}

/// Task-solving agent
pub struct Agent {
    name: String,
    personality: String,

    /// Short-term, long-term and episodic memory
    memory: MemoryStore,

    capabilities: CapabilityRegistry,
    router: StepRouter,
    classifier: Box<dyn TaskClassifier>,
    synthesizer: PlanSynthesizer,
    learner: LearningUpdater,

    stats: AgentStats,
    busy: BusyFlag,

    current_task: Option<Task>,
    current_plan: Option<Plan>,

    telemetry: TelemetryCollector,
}

impl Agent {
    /// Create agent with default settings and the built-in capabilities
    pub fn new(name: impl Into<String>, personality: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            personality: personality.into(),
            memory: MemoryStore::new(),
            capabilities: CapabilityRegistry::with_builtins(),
            router: StepRouter::new(),
            classifier: Box::new(KeywordClassifier::new()),
            synthesizer: PlanSynthesizer::new(),
            learner: LearningUpdater::new(),
            stats: AgentStats::default(),
            busy: BusyFlag::new(),
            current_task: None,
            current_plan: None,
            telemetry: TelemetryCollector::new(),
        }
    }

    /// Create agent from a validated configuration
    pub fn from_config(config: &Config) -> Result<Self> {
        config.validate()?;

        let mut agent = Self::new(&config.agent.name, &config.agent.personality);
        agent.memory = MemoryStore::with_episode_capacity(config.memory.max_episodes);
        agent.synthesizer = PlanSynthesizer::with_defaults(config.planning.clone());
        agent.learner = LearningUpdater::with_rates(config.learning);
        agent.stats = AgentStats::new(config.agent.initial_confidence);

        debug!("Agent '{}' built from config", agent.name);
        Ok(agent)
    }

    /// Replace the capability registry
    pub fn with_capabilities(mut self, capabilities: CapabilityRegistry) -> Self {
        self.capabilities = capabilities;
        self
    }

    /// Replace the task classifier
    pub fn with_classifier(mut self, classifier: impl TaskClassifier + 'static) -> Self {
        self.classifier = Box::new(classifier);
        self
    }

    /// Replace the step router
    pub fn with_router(mut self, router: StepRouter) -> Self {
        self.router = router;
        self
    }

    /// Register one more capability, replacing any with the same name
    pub fn register_capability<C: Capability + 'static>(&mut self, capability: C) {
        self.capabilities.register(capability);
    }

    /// Turn a goal into a `Task` and make it current
    pub fn analyze_task(&mut self, goal: &str) -> Task {
        info!("Analyzing task: {}", goal);
        let task = self.classifier.classify(goal);

        self.memory.short_term_mut().set_task(task.clone());
        self.current_task = Some(task.clone());

        self.telemetry.record(LoopEvent::TaskAnalyzed {
            goal: goal.to_string(),
            constraints: task.constraints.len(),
            success_criteria: task.success_criteria.len(),
        });

        task
    }

    /// Synthesize a plan for the current task and make it current
    pub fn create_plan(&mut self) -> Result<Plan> {
        let task = self.current_task.as_ref().ok_or(AgentError::NoCurrentTask)?;

        let plan = self.synthesizer.synthesize(task, self.memory.episodic());
        let from_experience = matches!(plan.source, PlanSource::Experience { .. });
        info!(
            "Created plan with {} steps ({:?})",
            plan.steps.len(),
            plan.source
        );

        self.memory.short_term_mut().set_plan(plan.clone());
        self.current_plan = Some(plan.clone());

        self.telemetry.record(LoopEvent::PlanCreated {
            steps: plan.steps.len(),
            from_experience,
        });

        Ok(plan)
    }

    /// Execute the current plan in place
    pub async fn execute_plan(&mut self) -> Result<TaskResult> {
        let plan = self.current_plan.as_mut().ok_or(AgentError::NoCurrentPlan)?;

        let result = PlanExecutor::new(&self.capabilities, &self.router)
            .with_telemetry(&self.telemetry)
            .execute(plan, &self.busy)
            .await?;

        self.memory.short_term_mut().set_plan(plan.clone());
        Ok(result)
    }

    /// Execute a caller-supplied plan with this agent's capabilities
    pub async fn execute(&mut self, plan: &mut Plan) -> Result<TaskResult> {
        PlanExecutor::new(&self.capabilities, &self.router)
            .with_telemetry(&self.telemetry)
            .execute(plan, &self.busy)
            .await
    }

    /// Fold a result for the current task into statistics and memory
    pub fn learn_from_results(&mut self, result: &TaskResult) -> Result<()> {
        let task = self.current_task.as_ref().ok_or(AgentError::NoCurrentTask)?;

        self.learner
            .update(&mut self.stats, &mut self.memory, task, result);

        self.telemetry.record(LoopEvent::LearningApplied {
            confidence_level: self.stats.confidence_level,
            success_rate: self.stats.success_rate,
        });

        Ok(())
    }

    /// Analyze, plan, execute and learn in one call
    pub async fn run(&mut self, goal: &str) -> Result<TaskResult> {
        self.analyze_task(goal);
        self.create_plan()?;
        let result = self.execute_plan().await?;
        self.learn_from_results(&result)?;
        Ok(result)
    }

    /// Current status snapshot
    pub fn status(&self) -> AgentStatus {
        AgentStatus {
            name: self.name.clone(),
            personality: self.personality.clone(),
            is_busy: self.busy.is_busy(),
            confidence_level: self.stats.confidence_level,
            success_rate: self.stats.success_rate,
            tasks_completed: self.stats.tasks_completed,
            current_task_goal: self.current_task.as_ref().map(|t| t.goal.clone()),
            memory_size: self.memory.size(),
        }
    }

    /// Drop the current task, plan and scratch memory
    ///
    /// Long-term and episodic memory and statistics are kept.
    pub fn reset(&mut self) {
        self.memory.clear_short_term();
        self.current_task = None;
        self.current_plan = None;
        self.busy.clear();
        info!("Agent '{}' reset", self.name);
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn personality(&self) -> &str {
        &self.personality
    }

    pub fn stats(&self) -> &AgentStats {
        &self.stats
    }

    pub fn memory(&self) -> &MemoryStore {
        &self.memory
    }

    pub fn short_term(&self) -> &WorkingMemory {
        self.memory.short_term()
    }

    /// Outcome recorded for a long-term pattern
    pub fn long_term(&self, pattern: &str) -> Option<&str> {
        self.memory.long_term().get(pattern)
    }

    /// Episodes in storage order
    pub fn episodes(&self) -> &VecDeque<Episode> {
        self.memory.episodic().get_all()
    }

    pub fn capabilities(&self) -> &CapabilityRegistry {
        &self.capabilities
    }

    pub fn current_task(&self) -> Option<&Task> {
        self.current_task.as_ref()
    }

    pub fn current_plan(&self) -> Option<&Plan> {
        self.current_plan.as_ref()
    }

    /// Shared handle to the busy flag, observable while a plan runs
    pub fn busy_flag(&self) -> BusyFlag {
        self.busy.clone()
    }

    pub fn telemetry(&self) -> &TelemetryCollector {
        &self.telemetry
    }
}

impl Default for Agent {
    fn default() -> Self {
        let config = Config::default();
        Self::new(config.agent.name, config.agent.personality)
    }
}

impl std::fmt::Debug for Agent {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Agent")
            .field("name", &self.name)
            .field("stats", &self.stats)
            .field("capabilities", &self.capabilities)
            .field("current_task", &self.current_task)
            .finish()
    }
}
