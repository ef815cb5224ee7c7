//! Capability registry
//!
//! Instance-owned map of capability name to handler. Each agent holds its own
//! registry, so two agents can run with different capability sets.

use crate::capabilities::builtin;
use crate::capabilities::types::{Capability, CapabilityOutcome};
use crate::errors::{AgentError, Result};
use std::collections::HashMap;
use std::sync::Arc;

/// Capability registry
#[derive(Clone, Default)]
pub struct CapabilityRegistry {
    /// Map of capability name to handler
    capabilities: HashMap<String, Arc<dyn Capability>>,
}

impl CapabilityRegistry {
    /// Create an empty registry
    pub fn new() -> Self {
        Self {
            capabilities: HashMap::new(),
        }
    }

    /// Create a registry with the built-in simulated capabilities
    pub fn with_builtins() -> Self {
        let mut registry = Self::new();
        registry.register(builtin::SearchCapability);
        registry.register(builtin::AnalysisCapability);
        registry.register(builtin::CodeCapability);
        registry.register(builtin::DocumentationCapability);
        registry.register(builtin::GenericCapability);
        registry
    }

    /// Register a handler under its own name, replacing any previous one
    pub fn register<C: Capability + 'static>(&mut self, capability: C) {
        self.register_arc(Arc::new(capability));
    }

    /// Register a shared handler
    pub fn register_arc(&mut self, capability: Arc<dyn Capability>) {
        self.capabilities
            .insert(capability.name().to_string(), capability);
    }

    /// Remove a handler
    pub fn unregister(&mut self, name: &str) -> Option<Arc<dyn Capability>> {
        self.capabilities.remove(name)
    }

    /// Get handler by name
    pub fn get(&self, name: &str) -> Option<&Arc<dyn Capability>> {
        self.capabilities.get(name)
    }

    /// Check if a capability exists
    pub fn contains(&self, name: &str) -> bool {
        self.capabilities.contains_key(name)
    }

    /// Resolve and invoke a capability
    pub async fn invoke(&self, name: &str, step_description: &str) -> Result<CapabilityOutcome> {
        let capability = self
            .get(name)
            .ok_or_else(|| AgentError::UnknownCapability(name.to_string()))?;
        capability.invoke(step_description).await
    }

    /// Get all capability names, sorted
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.capabilities.keys().cloned().collect();
        names.sort();
        names
    }

    pub fn len(&self) -> usize {
        self.capabilities.len()
    }

    pub fn is_empty(&self) -> bool {
        self.capabilities.is_empty()
    }
}

impl std::fmt::Debug for CapabilityRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CapabilityRegistry")
            .field("capabilities", &self.names())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::capabilities::types::{ANALYSIS, CODE, DOCUMENTATION, GENERIC, SEARCH};
    use async_trait::async_trait;

    struct Echo;

    #[async_trait]
    impl Capability for Echo {
        fn name(&self) -> &str {
            "echo"
        }

        async fn invoke(&self, step_description: &str) -> Result<CapabilityOutcome> {
            Ok(CapabilityOutcome::success(step_description))
        }
    }

    #[test]
    fn test_builtins_registered() {
        let registry = CapabilityRegistry::with_builtins();
        assert_eq!(registry.len(), 5);
        for name in [SEARCH, ANALYSIS, CODE, DOCUMENTATION, GENERIC] {
            assert!(registry.contains(name), "missing {}", name);
        }
    }

    #[test]
    fn test_names_sorted() {
        let registry = CapabilityRegistry::with_builtins();
        assert_eq!(
            registry.names(),
            vec!["analysis", "code", "documentation", "generic", "search"]
        );
    }

    #[tokio::test]
    async fn test_invoke_registered() {
        let mut registry = CapabilityRegistry::new();
        registry.register(Echo);

        let outcome = registry.invoke("echo", "hello").await.unwrap();
        assert_eq!(outcome.output, "hello");
    }

    #[tokio::test]
    async fn test_invoke_unknown() {
        let registry = CapabilityRegistry::new();
        let err = registry.invoke("weather", "x").await.unwrap_err();
        assert!(matches!(err, AgentError::UnknownCapability(ref n) if n == "weather"));
    }

    #[test]
    fn test_unregister() {
        let mut registry = CapabilityRegistry::with_builtins();
        assert!(registry.unregister(SEARCH).is_some());
        assert!(!registry.contains(SEARCH));
        assert_eq!(registry.len(), 4);
    }

    #[test]
    fn test_registries_are_independent() {
        let mut a = CapabilityRegistry::new();
        let b = CapabilityRegistry::new();
        a.register(Echo);
        assert!(a.contains("echo"));
        assert!(!b.contains("echo"));
    }
}
