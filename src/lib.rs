//! taskpilot - self-improving task agent
//!
//! Turns a free-text goal into a structured task, synthesizes a plan,
//! executes it step by step against pluggable capabilities and learns from
//! the outcome.
//!
//! # Architecture
//!
//! - **classify**: goal text → `Task`
//! - **planning**: `Task` + past episodes → `Plan`
//! - **capabilities**: registry, step router, built-in handlers
//! - **agent**: executor, learning updater, orchestrator
//! - **memory**: short-term scratch, long-term patterns, episodic history

pub mod errors;
pub mod types;
pub mod classify;
pub mod memory;
pub mod capabilities;
pub mod planning;
pub mod agent;
pub mod config;
pub mod telemetry;

// Re-export commonly used types
pub use errors::{AgentError, Result};
pub use agent::{Agent, AgentStatus};
pub use config::Config;
