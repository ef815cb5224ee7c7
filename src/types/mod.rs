//! Type definitions module
//!
//! Core data model shared by the classifier, planner, executor and memory.

pub mod task;
pub use task::{Priority, Task};

pub mod plan;
pub use plan::{Plan, PlanSource, RiskLevel, Step, StepStatus};

// Task execution result types
pub mod execution;
pub use execution::TaskResult;
