//! Error types for the task loop
//!
//! Precondition faults (no task, no plan, bad phase) are the only errors that
//! reach callers of the loop. Capability faults are folded into
//! `TaskResult::errors` by the executor.

use thiserror::Error;

/// Main error type for the agent system
#[derive(Error, Debug)]
pub enum AgentError {
    /// Plan-level state machine transition errors
    #[error("Invalid state transition from {from:?} to {to:?}: {reason}")]
    InvalidTransition {
        from: String,
        to: String,
        reason: String,
    },

    /// Planning requested before any goal was analyzed
    #[error("No current task to plan for")]
    NoCurrentTask,

    /// Execution requested before any plan was created
    #[error("No plan to execute")]
    NoCurrentPlan,

    /// Capability name not present in the agent's registry
    #[error("Unknown capability: {0}")]
    UnknownCapability(String),

    /// Capability ran but reported an error
    #[error("Capability {capability} failed: {reason}")]
    CapabilityFailed { capability: String, reason: String },

    /// Serialization errors
    #[error("Serialization error: {0}")]
    SerializationError(#[from] serde_json::Error),

    /// TOML parse errors
    #[error("Config parse error: {0}")]
    TomlError(#[from] toml::de::Error),

    /// I/O errors
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),

    /// Configuration errors
    #[error("Configuration error: {0}")]
    ConfigError(String),

    /// Generic errors with context
    #[error("Agent error: {0}")]
    Generic(String),
}

/// Result type alias for agent operations
pub type Result<T> = std::result::Result<T, AgentError>;

/// Convert anyhow errors to AgentError
impl From<anyhow::Error> for AgentError {
    fn from(err: anyhow::Error) -> Self {
        AgentError::Generic(err.to_string())
    }
}
