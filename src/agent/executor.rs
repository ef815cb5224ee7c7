//! Plan executor
//!
//! Runs a plan's steps strictly in order against a capability registry.
//!
//! # Failure model
//!
//! - Step fault (unknown capability, `Err` from the capability, or a failed
//!   outcome): recorded as `"Step {index} failed: {reason}"`, step marked
//!   `Failed`, execution continues with the next step.
//! - Execution fault (a panic escaping a capability): recorded as
//!   `"Execution failed: {message}"`, remaining steps are skipped.
//!
//! Neither kind propagates. The busy flag is raised for the whole run and
//! lowered by a guard on every exit path.

use crate::agent::state::{BusyFlag, PhaseEvent};
use crate::capabilities::{CapabilityRegistry, StepRouter};
use crate::errors::Result;
use crate::telemetry::{LoopEvent, TelemetryCollector};
use crate::types::{Plan, Step, StepStatus, TaskResult};
use futures_util::FutureExt;
use std::any::Any;
use std::collections::BTreeMap;
use std::panic::AssertUnwindSafe;
use std::time::Instant;
use tracing::{debug, info, warn};

/// Data collected while steps run
#[derive(Debug, Default)]
struct RunLog {
    output: BTreeMap<usize, String>,
    errors: Vec<String>,
    learnings: Vec<String>,
    /// 0-based position of the step whose capability is executing
    in_flight: Option<usize>,
}

/// Sequential plan executor
pub struct PlanExecutor<'a> {
    registry: &'a CapabilityRegistry,
    router: &'a StepRouter,
    telemetry: Option<&'a TelemetryCollector>,
}

impl<'a> PlanExecutor<'a> {
    /// Create executor over a registry and router
    pub fn new(registry: &'a CapabilityRegistry, router: &'a StepRouter) -> Self {
        Self {
            registry,
            router,
            telemetry: None,
        }
    }

    /// Record step and run events
    pub fn with_telemetry(mut self, telemetry: &'a TelemetryCollector) -> Self {
        self.telemetry = Some(telemetry);
        self
    }

    /// Execute every step of `plan`
    ///
    /// Steps are updated in place. Fails only when the plan is not in the
    /// `NotStarted` phase; plans are single-use.
    pub async fn execute(&self, plan: &mut Plan, busy: &BusyFlag) -> Result<TaskResult> {
        plan.phase = plan.phase.transition(PhaseEvent::Start)?;
        let _guard = busy.acquire();

        info!("Executing plan with {} steps", plan.steps.len());
        let start = Instant::now();
        let mut run = RunLog::default();

        let outcome = AssertUnwindSafe(self.run_steps(&mut plan.steps, &mut run))
            .catch_unwind()
            .await;

        if let Err(payload) = outcome {
            let message = panic_message(payload.as_ref());
            warn!("Execution aborted: {}", message);
            if let Some(pos) = run.in_flight.take() {
                let step = &mut plan.steps[pos];
                step.status = StepStatus::Failed;
                if let Some(telemetry) = self.telemetry {
                    telemetry.record(LoopEvent::StepFinished {
                        index: pos + 1,
                        capability: step.capability_required.clone().unwrap_or_default(),
                        success: false,
                    });
                }
            }
            run.errors.push(format!("Execution failed: {}", message));
        }

        plan.phase = plan.phase.transition(PhaseEvent::Finish)?;
        let execution_time = start.elapsed();

        let result = TaskResult::from_run(run.output, execution_time, run.errors, run.learnings);
        info!(
            "Plan execution completed. Success: {}, Time: {:.2}s",
            result.success(),
            execution_time.as_secs_f64()
        );

        if let Some(telemetry) = self.telemetry {
            telemetry.record(LoopEvent::ExecutionFinished {
                success: result.success(),
                errors: result.errors().len(),
                duration_ms: execution_time.as_millis() as u64,
            });
        }

        Ok(result)
    }

    async fn run_steps(&self, steps: &mut [Step], run: &mut RunLog) {
        for (pos, step) in steps.iter_mut().enumerate() {
            let index = pos + 1;
            let capability = self.resolve_capability(step);
            info!("Step {}: {} [{}]", index, step.description, capability);

            run.in_flight = Some(pos);
            let invocation = self.registry.invoke(&capability, &step.description).await;
            run.in_flight = None;

            let success = match invocation {
                Ok(outcome) if outcome.success => {
                    step.status = StepStatus::Completed;
                    run.output.insert(index, outcome.output);
                    if let Some(learning) = outcome.learning {
                        run.learnings.push(learning);
                    }
                    true
                }
                Ok(outcome) => {
                    let reason = outcome
                        .error
                        .unwrap_or_else(|| "Unknown error".to_string());
                    Self::fail_step(step, index, &reason, run);
                    false
                }
                Err(err) => {
                    Self::fail_step(step, index, &err.to_string(), run);
                    false
                }
            };

            if let Some(telemetry) = self.telemetry {
                telemetry.record(LoopEvent::StepFinished {
                    index,
                    capability,
                    success,
                });
            }
        }
    }

    /// Pinned capability, or the routed one written back onto the step
    fn resolve_capability(&self, step: &mut Step) -> String {
        if let Some(name) = &step.capability_required {
            return name.clone();
        }
        let name = self.router.route(&step.description).to_string();
        debug!("Routed '{}' to {}", step.description, name);
        step.capability_required = Some(name.clone());
        name
    }

    fn fail_step(step: &mut Step, index: usize, reason: &str, run: &mut RunLog) {
        warn!("Step {} failed: {}", index, reason);
        step.status = StepStatus::Failed;
        run.errors.push(format!("Step {} failed: {}", index, reason));
    }
}

/// Text of a panic payload
fn panic_message(payload: &(dyn Any + Send)) -> String {
    if let Some(s) = payload.downcast_ref::<&str>() {
        s.to_string()
    } else if let Some(s) = payload.downcast_ref::<String>() {
        s.clone()
    } else {
        "unknown panic".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::agent::state::ExecutionPhase;
    use crate::capabilities::{Capability, CapabilityOutcome};
    use crate::errors::AgentError;
    use async_trait::async_trait;

    struct Flaky;

    #[async_trait]
    impl Capability for Flaky {
        fn name(&self) -> &str {
            "flaky"
        }

        async fn invoke(&self, step_description: &str) -> Result<CapabilityOutcome> {
            if step_description.contains("bad") {
                Err(AgentError::CapabilityFailed {
                    capability: "flaky".to_string(),
                    reason: "timeout".to_string(),
                })
            } else if step_description.contains("soft") {
                Ok(CapabilityOutcome::failure("quota exceeded"))
            } else {
                Ok(CapabilityOutcome::success("ok"))
            }
        }
    }

    struct Exploding;

    #[async_trait]
    impl Capability for Exploding {
        fn name(&self) -> &str {
            "exploding"
        }

        async fn invoke(&self, _step_description: &str) -> Result<CapabilityOutcome> {
            panic!("capability blew up");
        }
    }

    fn registry() -> CapabilityRegistry {
        let mut registry = CapabilityRegistry::with_builtins();
        registry.register(Flaky);
        registry.register(Exploding);
        registry
    }

    #[tokio::test]
    async fn test_all_steps_succeed() {
        let registry = registry();
        let router = StepRouter::new();
        let busy = BusyFlag::new();
        let mut plan = Plan::from_steps(["1. Find sources", "2. Summarize", "3. Present"]);

        let result = PlanExecutor::new(&registry, &router)
            .execute(&mut plan, &busy)
            .await
            .unwrap();

        assert!(result.success());
        assert_eq!(result.output().len(), 3);
        assert_eq!(result.learnings().len(), 3);
        assert_eq!(plan.count_status(StepStatus::Completed), 3);
        assert_eq!(plan.phase, ExecutionPhase::Finished);
        assert_eq!(plan.steps[0].capability_required.as_deref(), Some("search"));
        assert_eq!(plan.steps[1].capability_required.as_deref(), Some("generic"));
        assert_eq!(plan.steps[2].capability_required.as_deref(), Some("documentation"));
        assert!(!busy.is_busy());
    }

    #[tokio::test]
    async fn test_failures_do_not_short_circuit() {
        let registry = registry();
        let router = StepRouter::new();
        let busy = BusyFlag::new();
        let mut plan = Plan::manual(vec![
            Step::with_capability("good", "flaky"),
            Step::with_capability("bad", "flaky"),
            Step::with_capability("soft", "flaky"),
            Step::with_capability("anything", "missing"),
            Step::with_capability("good again", "flaky"),
        ]);

        let result = PlanExecutor::new(&registry, &router)
            .execute(&mut plan, &busy)
            .await
            .unwrap();

        assert!(!result.success());
        assert_eq!(
            result.errors(),
            &[
                "Step 2 failed: Capability flaky failed: timeout".to_string(),
                "Step 3 failed: quota exceeded".to_string(),
                "Step 4 failed: Unknown capability: missing".to_string(),
            ]
        );
        let keys: Vec<usize> = result.output().keys().copied().collect();
        assert_eq!(keys, vec![1, 5]);
        assert_eq!(plan.steps[1].status, StepStatus::Failed);
        assert_eq!(plan.steps[4].status, StepStatus::Completed);
    }

    #[tokio::test]
    async fn test_panic_aborts_and_releases_busy() {
        let registry = registry();
        let router = StepRouter::new();
        let busy = BusyFlag::new();
        let mut plan = Plan::manual(vec![
            Step::with_capability("first", "flaky"),
            Step::with_capability("second", "exploding"),
            Step::with_capability("third", "flaky"),
        ]);

        let result = PlanExecutor::new(&registry, &router)
            .execute(&mut plan, &busy)
            .await
            .unwrap();

        assert!(!result.success());
        assert_eq!(result.errors(), &["Execution failed: capability blew up".to_string()]);
        assert_eq!(plan.steps[0].status, StepStatus::Completed);
        assert_eq!(plan.steps[1].status, StepStatus::Failed);
        assert_eq!(plan.steps[2].status, StepStatus::Pending);
        assert_eq!(plan.phase, ExecutionPhase::Finished);
        assert!(!busy.is_busy());
    }

    #[tokio::test]
    async fn test_plan_is_single_use() {
        let registry = registry();
        let router = StepRouter::new();
        let busy = BusyFlag::new();
        let mut plan = Plan::from_steps(["1. Do it"]);
        let executor = PlanExecutor::new(&registry, &router);

        executor.execute(&mut plan, &busy).await.unwrap();
        let err = executor.execute(&mut plan, &busy).await.unwrap_err();
        assert!(matches!(err, AgentError::InvalidTransition { .. }));
        assert!(!busy.is_busy());
    }

    #[tokio::test]
    async fn test_empty_plan_succeeds() {
        let registry = registry();
        let router = StepRouter::new();
        let mut plan = Plan::manual(vec![]);

        let result = PlanExecutor::new(&registry, &router)
            .execute(&mut plan, &BusyFlag::new())
            .await
            .unwrap();
        assert!(result.success());
        assert!(result.output().is_empty());
    }

    #[tokio::test]
    async fn test_telemetry_records_steps() {
        let registry = registry();
        let router = StepRouter::new();
        let telemetry = TelemetryCollector::new();
        let mut plan = Plan::manual(vec![
            Step::with_capability("good", "flaky"),
            Step::with_capability("bad", "flaky"),
        ]);

        PlanExecutor::new(&registry, &router)
            .with_telemetry(&telemetry)
            .execute(&mut plan, &BusyFlag::new())
            .await
            .unwrap();

        let stats = telemetry.get_stats();
        assert_eq!(stats.steps_succeeded, 1);
        assert_eq!(stats.steps_failed, 1);
        assert_eq!(stats.runs_failed, 1);
    }

    #[tokio::test]
    async fn test_panic_counts_as_failed_step() {
        let registry = registry();
        let router = StepRouter::new();
        let telemetry = TelemetryCollector::new();
        let mut plan = Plan::manual(vec![
            Step::with_capability("first", "flaky"),
            Step::with_capability("second", "exploding"),
            Step::with_capability("third", "flaky"),
        ]);

        PlanExecutor::new(&registry, &router)
            .with_telemetry(&telemetry)
            .execute(&mut plan, &BusyFlag::new())
            .await
            .unwrap();

        let stats = telemetry.get_stats();
        assert_eq!(stats.steps_succeeded, 1);
        assert_eq!(stats.steps_failed, 1);
        assert_eq!(stats.runs_failed, 1);
        assert!(telemetry.recent_events(2).contains(&LoopEvent::StepFinished {
            index: 2,
            capability: "exploding".to_string(),
            success: false,
        }));
    }
}
