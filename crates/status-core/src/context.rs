//! Notification Context: resolved facts about one build
use crate::data_model::{BuildRef, BuildState, JobRef};
use crate::error::{Result, StatusError};
use crate::sink::DiagnosticSink;

/// Capability interface over a resolved build.
///
/// The `default_*` accessors must be idempotent; any caching belongs to the
/// implementor. An `Err` means the context is malformed and is propagated
/// unchanged by strategies.
pub trait NotificationContext: Send + Sync {
    fn job(&self) -> Option<&JobRef>;

    fn build(&self) -> Option<&BuildRef>;

    fn default_context(&self, sink: &dyn DiagnosticSink) -> Result<String>;

    fn default_url(&self, sink: &dyn DiagnosticSink) -> Result<String>;

    fn default_message(&self, sink: &dyn DiagnosticSink) -> Result<String>;

    fn default_state(&self, sink: &dyn DiagnosticSink) -> Result<BuildState>;

    fn default_ignore_error(&self, sink: &dyn DiagnosticSink) -> Result<bool>;
}

/// Accessor names, in the order strategies call them
pub const ACCESSORS: [&str; 5] = ["context", "url", "message", "state", "ignore_error"];

/// A context whose defaults were computed upstream
#[derive(Debug, Clone)]
pub struct ResolvedContext {
    job: Option<JobRef>,
    build: Option<BuildRef>,
    context: String,
    url: String,
    message: String,
    state: BuildState,
    ignore_error: bool,
    broken_accessor: Option<&'static str>,
}

impl ResolvedContext {
    pub fn new(context: impl Into<String>, url: impl Into<String>) -> Self {
        Self {
            job: None,
            build: None,
            context: context.into(),
            url: url.into(),
            message: String::new(),
            state: BuildState::Pending,
            ignore_error: false,
            broken_accessor: None,
        }
    }

    pub fn with_job(mut self, job: JobRef) -> Self {
        self.job = Some(job);
        self
    }

    pub fn with_build(mut self, build: BuildRef) -> Self {
        self.build = Some(build);
        self
    }

    pub fn with_message(mut self, message: impl Into<String>) -> Self {
        self.message = message.into();
        self
    }

    pub fn with_state(mut self, state: BuildState) -> Self {
        self.state = state;
        self
    }

    pub fn ignore_error(mut self, ignore: bool) -> Self {
        self.ignore_error = ignore;
        self
    }

    /// Make one accessor (see [`ACCESSORS`]) fail with `StatusError::Context`
    pub fn broken(mut self, accessor: &'static str) -> Self {
        self.broken_accessor = Some(accessor);
        self
    }

    fn check(&self, accessor: &str) -> Result<()> {
        match self.broken_accessor {
            Some(broken) if broken == accessor => Err(StatusError::Context(format!(
                "default {} could not be resolved",
                accessor
            ))),
            _ => Ok(()),
        }
    }
}

impl NotificationContext for ResolvedContext {
    fn job(&self) -> Option<&JobRef> {
        self.job.as_ref()
    }

    fn build(&self) -> Option<&BuildRef> {
        self.build.as_ref()
    }

    fn default_context(&self, _sink: &dyn DiagnosticSink) -> Result<String> {
        self.check("context")?;
        Ok(self.context.clone())
    }

    fn default_url(&self, _sink: &dyn DiagnosticSink) -> Result<String> {
        self.check("url")?;
        Ok(self.url.clone())
    }

    fn default_message(&self, _sink: &dyn DiagnosticSink) -> Result<String> {
        self.check("message")?;
        Ok(self.message.clone())
    }

    fn default_state(&self, _sink: &dyn DiagnosticSink) -> Result<BuildState> {
        self.check("state")?;
        Ok(self.state)
    }

    fn default_ignore_error(&self, _sink: &dyn DiagnosticSink) -> Result<bool> {
        self.check("ignore_error")?;
        Ok(self.ignore_error)
    }
}
