//! Strategy Registry
use once_cell::sync::Lazy;
use status_core::{DiagnosticSink, NotificationContext, NotificationRequest, Result};
use status_strategy::{DefaultNotificationStrategy, NotificationStrategy};
use std::sync::Arc;

static DEFAULT_STRATEGY: Lazy<Arc<dyn NotificationStrategy>> =
    Lazy::new(|| Arc::new(DefaultNotificationStrategy::new()));

/// Ordered set of strategies, deduplicated by policy identity.
///
/// An empty registry derives with the default strategy.
#[derive(Clone, Default)]
pub struct StrategyRegistry {
    strategies: Vec<Arc<dyn NotificationStrategy>>,
}

impl StrategyRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a strategy. Returns `false` if an equal policy is already present.
    pub fn register(&mut self, strategy: Arc<dyn NotificationStrategy>) -> bool {
        if self
            .strategies
            .iter()
            .any(|existing| existing.same_policy(strategy.as_ref()))
        {
            tracing::debug!(strategy = strategy.id(), "strategy already registered");
            return false;
        }
        self.strategies.push(strategy);
        true
    }

    pub fn with(mut self, strategy: impl NotificationStrategy) -> Self {
        self.register(Arc::new(strategy));
        self
    }

    pub fn len(&self) -> usize {
        self.strategies.len()
    }

    pub fn is_empty(&self) -> bool {
        self.strategies.is_empty()
    }

    /// Strategies used for derivation, in registration order
    pub fn active(&self) -> Vec<Arc<dyn NotificationStrategy>> {
        if self.strategies.is_empty() {
            vec![Arc::clone(&DEFAULT_STRATEGY)]
        } else {
            self.strategies.clone()
        }
    }

    pub fn ids(&self) -> Vec<&'static str> {
        self.active().iter().map(|s| s.id()).collect()
    }

    /// Concatenate every strategy's requests, skipping exact repeats
    pub fn notifications(
        &self,
        ctx: &dyn NotificationContext,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<NotificationRequest>> {
        let mut requests: Vec<NotificationRequest> = Vec::new();

        for strategy in self.active() {
            for request in strategy.notifications(ctx, sink)? {
                if !requests.contains(&request) {
                    requests.push(request);
                }
            }
        }

        Ok(requests)
    }
}

impl std::fmt::Debug for StrategyRegistry {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("StrategyRegistry")
            .field("strategies", &self.ids())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use status_core::{BuildState, NullSink, ResolvedContext};
    use status_strategy::{DiagnosticsConfig, IgnoreErrorsOverride, PerCheckStrategy, SuppressStates};

    fn ctx() -> ResolvedContext {
        ResolvedContext::new("ci/my-job", "https://ci/1").with_state(BuildState::Success)
    }

    #[test]
    fn test_empty_registry_uses_default() {
        let registry = StrategyRegistry::new();
        assert!(registry.is_empty());
        assert_eq!(registry.ids(), vec!["default"]);

        let requests = registry.notifications(&ctx(), &NullSink).unwrap();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].context(), "ci/my-job");
    }

    #[test]
    fn test_same_policy_registered_once() {
        let mut registry = StrategyRegistry::new();
        assert!(registry.register(Arc::new(DefaultNotificationStrategy::new())));
        assert!(!registry.register(Arc::new(DefaultNotificationStrategy::with_config(
            DiagnosticsConfig::disabled()
        ))));
        assert!(registry.register(Arc::new(PerCheckStrategy::new(["lint"]))));
        assert!(!registry.register(Arc::new(PerCheckStrategy::new(["lint"]))));
        assert!(registry.register(Arc::new(PerCheckStrategy::new(["test"]))));

        assert_eq!(registry.len(), 3);
    }

    #[test]
    fn test_duplicate_requests_dropped_in_order() {
        let registry = StrategyRegistry::new()
            .with(PerCheckStrategy::new(["build", "lint"]))
            .with(PerCheckStrategy::new(["lint", "test"]));

        let requests = registry.notifications(&ctx(), &NullSink).unwrap();
        let labels: Vec<&str> = requests.iter().map(|r| r.context()).collect();

        assert_eq!(
            labels,
            vec!["ci/my-job/build", "ci/my-job/lint", "ci/my-job/test"]
        );
    }

    #[test]
    fn test_all_suppressed_yields_empty() {
        let registry = StrategyRegistry::new().with(SuppressStates::new(
            PerCheckStrategy::default(),
            [BuildState::Success],
        ));

        assert!(registry.notifications(&ctx(), &NullSink).unwrap().is_empty());
    }

    #[test]
    fn test_ignore_errors_override_identity() {
        let mut registry = StrategyRegistry::new();
        assert!(registry.register(Arc::new(IgnoreErrorsOverride::new(
            DefaultNotificationStrategy::new(),
            true
        ))));
        assert!(!registry.register(Arc::new(IgnoreErrorsOverride::new(
            DefaultNotificationStrategy::new(),
            true
        ))));
        assert!(registry.register(Arc::new(IgnoreErrorsOverride::new(
            DefaultNotificationStrategy::new(),
            false
        ))));

        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_suppress_states_identity() {
        let mut registry = StrategyRegistry::new();
        assert!(registry.register(Arc::new(SuppressStates::new(
            PerCheckStrategy::default(),
            [BuildState::Pending]
        ))));
        assert!(!registry.register(Arc::new(SuppressStates::new(
            PerCheckStrategy::default(),
            [BuildState::Pending]
        ))));
        assert!(registry.register(Arc::new(SuppressStates::new(
            PerCheckStrategy::default(),
            [BuildState::Pending, BuildState::Error]
        ))));
        assert!(registry.register(Arc::new(SuppressStates::new(
            PerCheckStrategy::new(["lint"]),
            [BuildState::Pending]
        ))));

        assert_eq!(registry.len(), 3);
    }
}
