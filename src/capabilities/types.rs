//! Capability execution types
//!
//! Core types for the uniform capability contract.

use crate::errors::Result;
use async_trait::async_trait;
use serde::{Deserialize, Serialize};

/// Search capability name
pub const SEARCH: &str = "search";
/// Analysis capability name
pub const ANALYSIS: &str = "analysis";
/// Code capability name
pub const CODE: &str = "code";
/// Documentation capability name
pub const DOCUMENTATION: &str = "documentation";
/// Generic capability name
pub const GENERIC: &str = "generic";

/// Outcome of one capability invocation
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct CapabilityOutcome {
    /// Whether the capability did its job
    pub success: bool,

    /// Output text recorded for the step
    pub output: String,

    /// Optional lesson to feed back into long-term memory
    pub learning: Option<String>,

    /// Error message if the capability reports failure
    pub error: Option<String>,
}

impl CapabilityOutcome {
    /// Create successful outcome
    pub fn success(output: impl Into<String>) -> Self {
        Self {
            success: true,
            output: output.into(),
            learning: None,
            error: None,
        }
    }

    /// Create failed outcome
    pub fn failure(error: impl Into<String>) -> Self {
        Self {
            success: false,
            output: String::new(),
            learning: None,
            error: Some(error.into()),
        }
    }

    /// Attach a learning
    pub fn with_learning(mut self, learning: impl Into<String>) -> Self {
        self.learning = Some(learning.into());
        self
    }
}

/// A named action the executor can invoke for a step
///
/// Cancellation, timeouts and retries belong to the implementation. An `Err`
/// return and a failed outcome are both recorded as a failed step.
#[async_trait]
pub trait Capability: Send + Sync {
    /// Registry name
    fn name(&self) -> &str;

    /// Perform the action described by `step_description`
    async fn invoke(&self, step_description: &str) -> Result<CapabilityOutcome>;
}
