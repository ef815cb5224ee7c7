//! Fixed step templates
//!
//! Every template is an ordered list of step texts. Numbering ("1. ", "2. ")
//! is applied when the plan is built, not stored here.

use crate::classify::TaskCategory;

/// Steps used when similar past episodes exist
pub const EXPERIENCE_TEMPLATE: [&str; 4] = [
    "Review past successful approaches",
    "Adapt proven strategies to current task",
    "Execute with learned optimizations",
    "Document new learnings",
];

const RESEARCH_TEMPLATE: [&str; 5] = [
    "Define research scope and objectives",
    "Search for relevant information sources",
    "Gather and evaluate information",
    "Synthesize findings into coherent summary",
    "Present results with recommendations",
];

const PROGRAMMING_TEMPLATE: [&str; 5] = [
    "Understand requirements and constraints",
    "Design solution architecture",
    "Implement core functionality",
    "Test and debug code",
    "Document and optimize",
];

const ANALYSIS_TEMPLATE: [&str; 5] = [
    "Understand data structure and format",
    "Clean and prepare data",
    "Apply appropriate analysis methods",
    "Generate insights and visualizations",
    "Present findings and recommendations",
];

const GENERAL_TEMPLATE: [&str; 5] = [
    "Understand the problem",
    "Break down into manageable steps",
    "Execute each step systematically",
    "Verify results meet requirements",
    "Document process and outcomes",
];

/// Template for a task category
pub fn category_template(category: TaskCategory) -> &'static [&'static str] {
    match category {
        TaskCategory::Research => &RESEARCH_TEMPLATE,
        TaskCategory::Programming => &PROGRAMMING_TEMPLATE,
        TaskCategory::Analysis => &ANALYSIS_TEMPLATE,
        TaskCategory::General => &GENERAL_TEMPLATE,
    }
}

/// Prefix each step with its 1-based position
pub fn numbered(template: &[&str]) -> Vec<String> {
    template
        .iter()
        .enumerate()
        .map(|(i, text)| format!("{}. {}", i + 1, text))
        .collect()
}
