//! Host and build-cause diagnostics
//!
//! Identifies which node derived a notification and why the build ran, so
//! duplicate or misrouted statuses in multi-node setups can be traced back.

use crate::config::DiagnosticsConfig;
use status_core::{
    DiagnosticSink, HostEnvironment, NotificationContext, ProcessEnvironment, Result, TracingSink,
};
use std::sync::Arc;

const PREFIX: &str = "[LOG HOSTS]";

/// Emits host identity, job name, and build causes to a log sink
#[derive(Clone)]
pub struct HostDiagnostics {
    config: DiagnosticsConfig,
    env: Arc<dyn HostEnvironment>,
    log: Arc<dyn DiagnosticSink>,
}

impl HostDiagnostics {
    pub fn new(
        config: DiagnosticsConfig,
        env: Arc<dyn HostEnvironment>,
        log: Arc<dyn DiagnosticSink>,
    ) -> Self {
        Self { config, env, log }
    }

    pub fn config(&self) -> &DiagnosticsConfig {
        &self.config
    }

    /// Log the host/cause lines for `ctx`.
    ///
    /// Every line is attempted even if the sink rejects an earlier one; the
    /// first failure is returned once all lines were tried. Never touches `ctx`.
    pub fn log_diagnostics(&self, ctx: &dyn NotificationContext) -> Result<()> {
        if !self.config.enabled {
            return Ok(());
        }

        let mut first_error = None;
        for line in self.lines(ctx) {
            if let Err(e) = self.emit(&line) {
                first_error.get_or_insert(e);
            }
        }

        match first_error {
            Some(e) => Err(e),
            None => Ok(()),
        }
    }

    /// Diagnostic lines for `ctx`, without the prefix
    fn lines(&self, ctx: &dyn NotificationContext) -> Vec<String> {
        let mut lines = Vec::new();

        lines.push(match self.env.var(&self.config.primary_host_var) {
            Some(host) => format!("Primary host is {}", host),
            None => "Primary host not set".to_string(),
        });

        lines.push(match self.env.var(&self.config.host_var) {
            Some(host) => format!("This host is {}", host),
            None => "This host is not set".to_string(),
        });

        lines.push(match ctx.job() {
            Some(job) => format!("The job is {}", job.name),
            None => "job is not set".to_string(),
        });

        match ctx.build() {
            Some(build) => {
                if let Some(causes) = &build.causes {
                    lines.extend(
                        causes
                            .iter()
                            .map(|cause| format!("Build cause: {}", cause.short_description)),
                    );
                }
            }
            None => lines.push("No build".to_string()),
        }

        lines
    }

    fn emit(&self, line: &str) -> Result<()> {
        self.log.info(&format!("{} {}", PREFIX, line))
    }
}

impl Default for HostDiagnostics {
    fn default() -> Self {
        Self::new(
            DiagnosticsConfig::default(),
            Arc::new(ProcessEnvironment),
            Arc::new(TracingSink),
        )
    }
}

impl std::fmt::Debug for HostDiagnostics {
    fn fmt(&self, f: &mut std::fmt::Formatter) -> std::fmt::Result {
        f.debug_struct("HostDiagnostics")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
