//! Built-in simulated capabilities
//!
//! Stand-ins that let an agent run end to end without any external service.
//! None of them touch the network or the filesystem. Replace them through
//! `CapabilityRegistry::register` to wire in real tools.

use crate::capabilities::types::{
    Capability, CapabilityOutcome, ANALYSIS, CODE, DOCUMENTATION, GENERIC, SEARCH,
};
use crate::classify::KeywordTable;
use crate::errors::Result;
use async_trait::async_trait;

/// Maximum results a simulated search reports
const MAX_SEARCH_RESULTS: usize = 5;

/// Query text used when a step names no subject
const DEFAULT_QUERY: &str = "relevant information";

/// Topics the simulated search index knows about
fn search_topics() -> KeywordTable<&'static str> {
    KeywordTable::new()
        .with_entry(&["python"], "python")
        .with_entry(&["machine learning"], "machine learning")
        .with_entry(&["data science"], "data science")
        .with_entry(&["programming"], "programming")
        .with_entry(&["algorithm"], "algorithm")
}

/// Words following the first standalone "for", or a default query
pub fn extract_search_query(step: &str) -> String {
    let words: Vec<&str> = step.split_whitespace().collect();
    match words.iter().position(|w| *w == "for") {
        Some(idx) if idx + 1 < words.len() => words[idx + 1..].join(" "),
        _ => DEFAULT_QUERY.to_string(),
    }
}

/// Simulated web search
#[derive(Debug, Clone, Copy, Default)]
pub struct SearchCapability;

#[async_trait]
impl Capability for SearchCapability {
    fn name(&self) -> &str {
        SEARCH
    }

    async fn invoke(&self, step_description: &str) -> Result<CapabilityOutcome> {
        let query = extract_search_query(step_description);
        let hits = search_topics().matches(&query).count().clamp(1, MAX_SEARCH_RESULTS);

        Ok(CapabilityOutcome::success(format!(
            "Found {} relevant results for '{}'",
            hits, query
        ))
        .with_learning("Web search is effective for gathering information"))
    }
}

/// Simulated data analysis
#[derive(Debug, Clone, Copy, Default)]
pub struct AnalysisCapability;

#[async_trait]
impl Capability for AnalysisCapability {
    fn name(&self) -> &str {
        ANALYSIS
    }

    async fn invoke(&self, _step_description: &str) -> Result<CapabilityOutcome> {
        Ok(CapabilityOutcome::success(
            "Analysis completed: comprehensive analysis with insights and recommendations",
        )
        .with_learning("Systematic analysis reveals important patterns"))
    }
}

/// Simulated code runner
#[derive(Debug, Clone, Copy, Default)]
pub struct CodeCapability;

#[async_trait]
impl Capability for CodeCapability {
    fn name(&self) -> &str {
        CODE
    }

    async fn invoke(&self, _step_description: &str) -> Result<CapabilityOutcome> {
        Ok(CapabilityOutcome::success("Code executed successfully: snippet ran without errors")
            .with_learning("Incremental development helps catch errors early"))
    }
}

/// Simulated documentation writer
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentationCapability;

#[async_trait]
impl Capability for DocumentationCapability {
    fn name(&self) -> &str {
        DOCUMENTATION
    }

    async fn invoke(&self, _step_description: &str) -> Result<CapabilityOutcome> {
        Ok(CapabilityOutcome::success("Documentation created: output.txt")
            .with_learning("Good documentation helps future tasks"))
    }
}

/// Fallback for steps no keyword group claims. Always succeeds.
#[derive(Debug, Clone, Copy, Default)]
pub struct GenericCapability;

#[async_trait]
impl Capability for GenericCapability {
    fn name(&self) -> &str {
        GENERIC
    }

    async fn invoke(&self, step_description: &str) -> Result<CapabilityOutcome> {
        Ok(CapabilityOutcome::success(format!("Completed: {}", step_description))
            .with_learning("Systematic approach leads to better results"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extract_search_query() {
        assert_eq!(
            extract_search_query("2. Search for relevant information sources"),
            "relevant information sources"
        );
        assert_eq!(extract_search_query("Find the docs"), DEFAULT_QUERY);
        assert_eq!(extract_search_query("Look for"), DEFAULT_QUERY);
    }

    #[tokio::test]
    async fn test_search_counts_known_topics() {
        let outcome = SearchCapability
            .invoke("Search for python and machine learning")
            .await
            .unwrap();
        assert!(outcome.success);
        assert_eq!(
            outcome.output,
            "Found 2 relevant results for 'python and machine learning'"
        );
        assert!(outcome.learning.is_some());
    }

    #[tokio::test]
    async fn test_search_reports_at_least_one_result() {
        let outcome = SearchCapability.invoke("Search for tides").await.unwrap();
        assert!(outcome.output.starts_with("Found 1 relevant results"));
    }

    #[tokio::test]
    async fn test_generic_always_succeeds() {
        for step in ["", "1. Understand the problem", "anything at all"] {
            let outcome = GenericCapability.invoke(step).await.unwrap();
            assert!(outcome.success);
            assert_eq!(outcome.output, format!("Completed: {}", step));
        }
    }

    #[tokio::test]
    async fn test_every_builtin_offers_a_learning() {
        let caps: Vec<Box<dyn Capability>> = vec![
            Box::new(SearchCapability),
            Box::new(AnalysisCapability),
            Box::new(CodeCapability),
            Box::new(DocumentationCapability),
            Box::new(GenericCapability),
        ];
        for cap in caps {
            let outcome = cap.invoke("step").await.unwrap();
            assert!(outcome.learning.is_some(), "{} has no learning", cap.name());
        }
    }
}
