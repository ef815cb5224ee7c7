//! Agent and plan execution state
//!
//! - `ExecutionPhase`: plan-level state machine (NotStarted → Running → Finished)
//! - `AgentStats`: confidence, success rate and completed-task count
//! - `BusyFlag`: advisory flag raised while a plan executes

use crate::errors::{AgentError, Result};
use serde::{Deserialize, Serialize};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Plan execution phases
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum ExecutionPhase {
    /// Plan created, no step has run
    #[default]
    NotStarted,

    /// Steps are executing
    Running,

    /// All steps ran, or execution was cut short by a fault (terminal)
    Finished,
}

/// Events that trigger phase transitions
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PhaseEvent {
    /// Executor picked up the plan
    Start,

    /// Last step done or execution aborted
    Finish,
}

impl ExecutionPhase {
    /// Check if this is a terminal phase
    pub fn is_terminal(&self) -> bool {
        matches!(self, ExecutionPhase::Finished)
    }

    /// Attempt phase transition with validation
    ///
    /// Valid transitions:
    /// 1. NotStarted → Running  (on: Start)
    /// 2. Running    → Finished (on: Finish)
    /// 3. Finished   → Finished (on: Finish)
    ///
    /// A finished plan cannot be started again.
    pub fn transition(&self, event: PhaseEvent) -> Result<ExecutionPhase> {
        use ExecutionPhase::*;
        use PhaseEvent::*;

        match (self, event) {
            (NotStarted, Start) => Ok(Running),
            (Running, Finish) => Ok(Finished),
            (Finished, Finish) => Ok(Finished),
            (from, event) => Err(AgentError::InvalidTransition {
                from: format!("{:?}", from),
                to: format!("(via {:?})", event),
                reason: format!("No valid transition from {:?} on {:?}", from, event),
            }),
        }
    }
}

/// Learning statistics of one agent
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AgentStats {
    /// Confidence in [0.0, 1.0]
    pub confidence_level: f64,

    /// Running mean of success indicators in [0.0, 1.0]
    pub success_rate: f64,

    /// Number of learning updates applied
    pub tasks_completed: u64,
}

impl AgentStats {
    /// Fresh stats with the given starting confidence (clamped)
    pub fn new(initial_confidence: f64) -> Self {
        Self {
            confidence_level: initial_confidence.clamp(0.0, 1.0),
            success_rate: 0.0,
            tasks_completed: 0,
        }
    }

    /// Count one more task and fold its outcome into the running mean
    ///
    /// `rate_n = (rate_{n-1} × (n − 1) + x) / n`, O(1), no history scan.
    pub fn record_outcome(&mut self, success: bool) {
        self.tasks_completed += 1;
        let n = self.tasks_completed as f64;
        let indicator = if success { 1.0 } else { 0.0 };
        self.success_rate = (self.success_rate * (n - 1.0) + indicator) / n;
    }

    /// Raise confidence, saturating at 1.0
    pub fn raise_confidence(&mut self, amount: f64) {
        self.confidence_level = (self.confidence_level + amount).min(1.0);
    }

    /// Lower confidence, saturating at 0.0
    pub fn lower_confidence(&mut self, amount: f64) {
        self.confidence_level = (self.confidence_level - amount).max(0.0);
    }
}

impl Default for AgentStats {
    fn default() -> Self {
        Self::new(0.5)
    }
}

/// Shared advisory busy flag
///
/// Cloning shares the underlying flag, so a clone can observe execution from
/// outside the agent.
#[derive(Debug, Clone, Default)]
pub struct BusyFlag {
    inner: Arc<AtomicBool>,
}

impl BusyFlag {
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a plan is executing
    pub fn is_busy(&self) -> bool {
        self.inner.load(Ordering::SeqCst)
    }

    /// Raise the flag until the returned guard drops
    pub fn acquire(&self) -> BusyGuard<'_> {
        self.inner.store(true, Ordering::SeqCst);
        BusyGuard { flag: self }
    }

    /// Force the flag down
    pub(crate) fn clear(&self) {
        self.inner.store(false, Ordering::SeqCst);
    }
}

/// Lowers the busy flag on drop, including during unwinding
#[derive(Debug)]
pub struct BusyGuard<'a> {
    flag: &'a BusyFlag,
}

impl Drop for BusyGuard<'_> {
    fn drop(&mut self) {
        self.flag.clear();
    }
}
