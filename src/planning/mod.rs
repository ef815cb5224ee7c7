//! Plan synthesis for the task loop
//!
//! Produces an ordered step list per task, either adapted from similar past
//! episodes or taken from the category template table.

pub mod templates;
pub mod synthesizer;

// Re-export commonly used types
pub use synthesizer::{PlanDefaults, PlanSynthesizer};
pub use templates::{category_template, EXPERIENCE_TEMPLATE};
