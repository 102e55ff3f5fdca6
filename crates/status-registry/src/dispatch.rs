//! Sequential delivery of derived requests
use crate::registry::StrategyRegistry;
use status_core::{DiagnosticSink, NotificationContext, NotificationRequest, Result, StatusError};

/// Posts a single request to the hosting service
pub trait NotificationDelivery: Send + Sync {
    fn deliver(&self, request: &NotificationRequest) -> Result<()>;
}

/// Outcome of one `Notifier::notify` call
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct DispatchReport {
    pub delivered: Vec<NotificationRequest>,
    /// Failed requests whose `ignore_errors` was set
    pub ignored: Vec<(NotificationRequest, StatusError)>,
}

impl DispatchReport {
    pub fn is_clean(&self) -> bool {
        self.ignored.is_empty()
    }
}

/// Derives requests from a registry and hands them to a delivery backend
pub struct Notifier<D> {
    registry: StrategyRegistry,
    delivery: D,
}

impl<D: NotificationDelivery> Notifier<D> {
    pub fn new(registry: StrategyRegistry, delivery: D) -> Self {
        Self { registry, delivery }
    }

    pub fn registry(&self) -> &StrategyRegistry {
        &self.registry
    }

    pub fn delivery(&self) -> &D {
        &self.delivery
    }

    /// Derive, then deliver in order.
    ///
    /// Derivation errors fail the whole call before anything is posted. A
    /// delivery error stops dispatch unless the request tolerates it.
    pub fn notify(
        &self,
        ctx: &dyn NotificationContext,
        sink: &dyn DiagnosticSink,
    ) -> Result<DispatchReport> {
        let requests = self.registry.notifications(ctx, sink)?;
        let mut report = DispatchReport::default();

        for request in requests {
            match self.delivery.deliver(&request) {
                Ok(()) => {
                    tracing::debug!(context = request.context(), state = %request.state(), "status delivered");
                    report.delivered.push(request);
                }
                Err(e) if request.ignore_errors() => {
                    tracing::warn!(context = request.context(), error = %e, "ignoring status delivery failure");
                    report.ignored.push((request, e));
                }
                Err(e) => return Err(e),
            }
        }

        Ok(report)
    }
}
