//! Alternative policies built on the same contract as the default
use crate::strategy::{default_request, NotificationStrategy};
use status_core::{BuildState, DiagnosticSink, NotificationContext, NotificationRequest, Result};
use std::any::Any;

/// One request per named check, labelled `<default context>/<check>`
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PerCheckStrategy {
    checks: Vec<String>,
}

impl PerCheckStrategy {
    pub fn new<I, S>(checks: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            checks: checks.into_iter().map(Into::into).collect(),
        }
    }

    pub fn checks(&self) -> &[String] {
        &self.checks
    }
}

impl NotificationStrategy for PerCheckStrategy {
    fn id(&self) -> &'static str {
        "per-check"
    }

    fn notifications(
        &self,
        ctx: &dyn NotificationContext,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<NotificationRequest>> {
        let base = default_request(ctx, sink)?;
        if self.checks.is_empty() {
            return Ok(vec![base]);
        }

        Ok(self
            .checks
            .iter()
            .map(|check| base.with_context(format!("{}/{}", base.context(), check)))
            .collect())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn same_policy(&self, other: &dyn NotificationStrategy) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| other == self)
    }
}

/// Drops requests whose state is in the suppressed set
#[derive(Debug, Clone)]
pub struct SuppressStates<S> {
    inner: S,
    states: Vec<BuildState>,
}

impl<S: NotificationStrategy> SuppressStates<S> {
    pub fn new(inner: S, states: impl IntoIterator<Item = BuildState>) -> Self {
        Self {
            inner,
            states: states.into_iter().collect(),
        }
    }

    pub fn suppresses(&self, state: BuildState) -> bool {
        self.states.contains(&state)
    }
}

impl<S: NotificationStrategy> NotificationStrategy for SuppressStates<S> {
    fn id(&self) -> &'static str {
        "suppress-states"
    }

    fn notifications(
        &self,
        ctx: &dyn NotificationContext,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<NotificationRequest>> {
        let mut requests = self.inner.notifications(ctx, sink)?;
        requests.retain(|request| !self.suppresses(request.state()));
        Ok(requests)
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn same_policy(&self, other: &dyn NotificationStrategy) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| {
                other.states == self.states && self.inner.same_policy(&other.inner)
            })
    }
}

/// Forces `ignore_errors` on every request of the wrapped strategy
#[derive(Debug, Clone)]
pub struct IgnoreErrorsOverride<S> {
    inner: S,
    ignore_errors: bool,
}

impl<S: NotificationStrategy> IgnoreErrorsOverride<S> {
    pub fn new(inner: S, ignore_errors: bool) -> Self {
        Self {
            inner,
            ignore_errors,
        }
    }
}

impl<S: NotificationStrategy> NotificationStrategy for IgnoreErrorsOverride<S> {
    fn id(&self) -> &'static str {
        "ignore-errors-override"
    }

    fn notifications(
        &self,
        ctx: &dyn NotificationContext,
        sink: &dyn DiagnosticSink,
    ) -> Result<Vec<NotificationRequest>> {
        Ok(self
            .inner
            .notifications(ctx, sink)?
            .iter()
            .map(|request| request.with_ignore_errors(self.ignore_errors))
            .collect())
    }

    fn as_any(&self) -> &dyn Any {
        self
    }

    fn same_policy(&self, other: &dyn NotificationStrategy) -> bool {
        other
            .as_any()
            .downcast_ref::<Self>()
            .map_or(false, |other| {
                other.ignore_errors == self.ignore_errors && self.inner.same_policy(&other.inner)
            })
    }
}
