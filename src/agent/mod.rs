//! Agent orchestration module
//!
//! Core agent components: plan state machine, executor, learning updater
//! and the orchestrator that ties the loop together.

pub mod state;
pub mod executor;
pub mod learning;
pub mod orchestrator;

// Re-export commonly used types
pub use state::{AgentStats, BusyFlag, BusyGuard, ExecutionPhase, PhaseEvent};
pub use executor::PlanExecutor;
pub use learning::{LearningRates, LearningUpdater};
pub use orchestrator::{Agent, AgentStatus};
