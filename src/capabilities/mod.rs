//! Capability system
//!
//! Provides the uniform capability interface used by the plan executor:
//! - `Capability` trait with a single async `invoke`
//! - Instance-owned registry (no process-wide table)
//! - Keyword step router (first matching group wins)
//! - Simulated built-in capabilities

pub mod types;
pub mod registry;
pub mod router;
pub mod builtin;

// Re-export commonly used types
pub use types::{Capability, CapabilityOutcome};
pub use registry::CapabilityRegistry;
pub use router::StepRouter;
