//! NotificationStrategy trait and the default policy
use crate::config::DiagnosticsConfig;
use crate::diagnostics::HostDiagnostics;
use status_core::{
    DiagnosticSink, NotificationContext, NotificationRequest, ProcessEnvironment, Result,
    TracingSink,
};
use std::any::Any;
use std::hash::{Hash, Hasher};
use std::sync::Arc;

/// Maps a resolved build to the ordered requests to deliver.
///
/// Implementations must be deterministic for a given context, return a finite
/// sequence, keep no mutable state between calls, and perform no network I/O.
pub trait NotificationStrategy: Send + Sync + 'static {
    /// Stable identifier (ex: "default")
    fn id(&self) -> &'static str;

    /// Derive the requests for `ctx`. Context accessor errors propagate.
    fn notifications(
        &self,
        ctx: &dyn NotificationContext,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<NotificationRequest>>;

    fn as_any(&self) -> &dyn Any;

    /// Type-tag equality: same concrete strategy type
    fn same_policy(&self, other: &dyn NotificationStrategy) -> bool {
        self.as_any().type_id() == other.as_any().type_id()
    }
}

/// Equality against a possibly absent strategy
pub fn policy_eq(a: &dyn NotificationStrategy, b: Option<&dyn NotificationStrategy>) -> bool {
    b.map_or(false, |b| a.same_policy(b))
}

/// One request built from the context's five defaults, in accessor order
pub fn default_request(
    ctx: &dyn NotificationContext,
    sink: &dyn DiagnosticSink,
) -> Result<NotificationRequest> {
    let context = ctx.default_context(sink)?;
    let url = ctx.default_url(sink)?;
    let message = ctx.default_message(sink)?;
    let state = ctx.default_state(sink)?;
    let ignore_errors = ctx.default_ignore_error(sink)?;

    Ok(NotificationRequest::build(context, url, message, state, ignore_errors))
}

/// Single standard status update, preceded by host/cause diagnostics
#[derive(Debug, Clone, Default)]
pub struct DefaultNotificationStrategy {
    diagnostics: HostDiagnostics,
}

impl DefaultNotificationStrategy {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_diagnostics(diagnostics: HostDiagnostics) -> Self {
        Self { diagnostics }
    }

    /// Process environment and `tracing` output, configured by `config`
    pub fn with_config(config: DiagnosticsConfig) -> Self {
        Self::with_diagnostics(HostDiagnostics::new(
            config,
            Arc::new(ProcessEnvironment),
            Arc::new(TracingSink),
        ))
    }

    pub fn diagnostics(&self) -> &HostDiagnostics {
        &self.diagnostics
    }
}

impl NotificationStrategy for DefaultNotificationStrategy {
    fn id(&self) -> &'static str {
        "default"
    }

    fn notifications(
        &self,
        ctx: &dyn NotificationContext,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<NotificationRequest>> {
        if let Err(e) = self.diagnostics.log_diagnostics(ctx) {
            tracing::warn!(strategy = self.id(), error = %e, "host diagnostics failed");
        }

        Ok(vec![default_request(ctx, sink)?])
    }

    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// All instances are equal: the type carries no distinguishing state
impl PartialEq for DefaultNotificationStrategy {
    fn eq(&self, _other: &Self) -> bool {
        true
    }
}

impl Eq for DefaultNotificationStrategy {}

impl Hash for DefaultNotificationStrategy {
    fn hash<H: Hasher>(&self, state: &mut H) {
        42u32.hash(state);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use status_core::{
        BuildState, MapEnvironment, NullSink, RecordingSink, ResolvedContext, StatusError,
    };
    use std::collections::hash_map::DefaultHasher;

    fn quiet() -> DefaultNotificationStrategy {
        DefaultNotificationStrategy::with_diagnostics(HostDiagnostics::new(
            DiagnosticsConfig::default(),
            Arc::new(MapEnvironment::new()),
            Arc::new(NullSink),
        ))
    }

    fn hash_of(strategy: &DefaultNotificationStrategy) -> u64 {
        let mut hasher = DefaultHasher::new();
        strategy.hash(&mut hasher);
        hasher.finish()
    }

    #[test]
    fn test_single_request_from_defaults() {
        let ctx = ResolvedContext::new("continuous-integration/my-job", "https://ci/job/my-job/4/")
            .with_message("This commit has test failures")
            .with_state(BuildState::Failure)
            .ignore_error(true);

        let requests = quiet().notifications(&ctx, &NullSink).unwrap();

        assert_eq!(
            requests,
            vec![NotificationRequest::build(
                "continuous-integration/my-job",
                "https://ci/job/my-job/4/",
                "This commit has test failures",
                BuildState::Failure,
                true,
            )]
        );
    }

    #[test]
    fn test_accessor_error_propagates() {
        let ctx = ResolvedContext::new("ci", "u").broken("state");

        let err = quiet().notifications(&ctx, &NullSink).unwrap_err();

        assert_eq!(err, StatusError::Context("default state could not be resolved".to_string()));
    }

    #[test]
    fn test_equality_is_by_type() {
        let logged = DefaultNotificationStrategy::with_diagnostics(HostDiagnostics::new(
            DiagnosticsConfig::disabled(),
            Arc::new(MapEnvironment::new()),
            Arc::new(RecordingSink::new()),
        ));

        assert_eq!(quiet(), logged);
        assert!(quiet().same_policy(&logged));
        assert_eq!(hash_of(&quiet()), hash_of(&logged));
        assert!(!policy_eq(&quiet(), None));
        assert!(policy_eq(&quiet(), Some(&logged as &dyn NotificationStrategy)));
    }
}
