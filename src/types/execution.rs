//! Execution result of a plan run
//!
//! `TaskResult` is the terminal object of one loop iteration. It is consumed by
//! the learning updater and then handed back to the caller.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::time::Duration;

/// Result of executing a plan
///
/// `success` is derived from `errors` at construction and the fields are
/// read-only from outside, so `success == errors.is_empty()` always holds.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TaskResult {
    success: bool,
    output: BTreeMap<usize, String>,
    execution_time: Duration,
    errors: Vec<String>,
    learnings: Vec<String>,
}

impl TaskResult {
    /// Assemble a result from the data collected during a run
    pub fn from_run(
        output: BTreeMap<usize, String>,
        execution_time: Duration,
        errors: Vec<String>,
        learnings: Vec<String>,
    ) -> Self {
        Self {
            success: errors.is_empty(),
            output,
            execution_time,
            errors,
            learnings,
        }
    }

    /// Whether every step completed
    pub fn success(&self) -> bool {
        self.success
    }

    /// Step outputs keyed by 1-based step index
    pub fn output(&self) -> &BTreeMap<usize, String> {
        &self.output
    }

    /// Wall-clock duration of the whole step sequence
    pub fn execution_time(&self) -> Duration {
        self.execution_time
    }

    pub fn errors(&self) -> &[String] {
        &self.errors
    }

    pub fn learnings(&self) -> &[String] {
        &self.learnings
    }

    /// Get a human-readable summary of the execution
    pub fn summary(&self) -> String {
        let status = if self.success { "Success" } else { "Failed" };
        format!(
            "{} in {:.2}s ({} outputs, {} errors, {} learnings)",
            status,
            self.execution_time.as_secs_f64(),
            self.output.len(),
            self.errors.len(),
            self.learnings.len()
        )
    }
}
