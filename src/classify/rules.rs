//! Keyword-rule goal classifier

use crate::classify::keywords::KeywordTable;
use crate::classify::TaskClassifier;
use crate::types::Task;

/// Constraints and success criteria contributed by one rule
#[derive(Debug, Clone, PartialEq)]
pub struct RuleOutcome {
    pub constraints: Vec<String>,
    pub success_criteria: Vec<String>,
}

impl RuleOutcome {
    fn new(constraints: &[&str], success_criteria: &[&str]) -> Self {
        Self {
            constraints: constraints.iter().map(|s| s.to_string()).collect(),
            success_criteria: success_criteria.iter().map(|s| s.to_string()).collect(),
        }
    }
}

/// Classifier that appends the outcome of every matching rule
///
/// Rules are non-exclusive: a goal mentioning both research and data gets
/// both rule outcomes, in table order.
#[derive(Debug, Clone)]
pub struct KeywordClassifier {
    rules: KeywordTable<RuleOutcome>,
}

impl KeywordClassifier {
    /// Classifier with the built-in research / code / analysis rules
    pub fn new() -> Self {
        let rules = KeywordTable::new()
            .with_entry(
                &["research"],
                RuleOutcome::new(
                    &["Must use reliable sources"],
                    &["Provide comprehensive summary", "Include multiple perspectives"],
                ),
            )
            .with_entry(
                &["code", "program"],
                RuleOutcome::new(
                    &["Code must be functional"],
                    &["Include comments and documentation"],
                ),
            )
            .with_entry(
                &["analyze", "data"],
                RuleOutcome::new(
                    &["Use appropriate analysis methods"],
                    &["Provide clear insights"],
                ),
            );

        Self { rules }
    }

    /// Classifier with a caller-supplied rule table
    pub fn with_rules(rules: KeywordTable<RuleOutcome>) -> Self {
        Self { rules }
    }
}

impl Default for KeywordClassifier {
    fn default() -> Self {
        Self::new()
    }
}

impl TaskClassifier for KeywordClassifier {
    fn classify(&self, goal: &str) -> Task {
        let mut task = Task::new(goal);

        for outcome in self.rules.matches(goal) {
            task.constraints.extend(outcome.constraints.iter().cloned());
            task.success_criteria
                .extend(outcome.success_criteria.iter().cloned());
        }

        task
    }
}
