//! Data Model: BuildState, build references, NotificationRequest
use crate::error::Result;
use serde::{Deserialize, Serialize};
use serde_json::{json, Value};
use std::fmt;

/// Commit status state reported to the hosting service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BuildState {
    Pending,
    Success,
    Error,
    Failure,
}

impl BuildState {
    pub fn as_str(&self) -> &'static str {
        match self {
            BuildState::Pending => "pending",
            BuildState::Success => "success",
            BuildState::Error => "error",
            BuildState::Failure => "failure",
        }
    }

    /// Whether the build has reached a final state
    pub fn is_terminal(&self) -> bool {
        !matches!(self, BuildState::Pending)
    }
}

impl fmt::Display for BuildState {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A recorded reason a build was triggered
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Cause {
    pub short_description: String,
}

impl Cause {
    pub fn new(short_description: impl Into<String>) -> Self {
        Self {
            short_description: short_description.into(),
        }
    }
}

/// Job definition the build belongs to
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct JobRef {
    pub name: String,
}

impl JobRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

/// A specific run of a job
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BuildRef {
    /// `None` when the run never recorded its causes
    pub causes: Option<Vec<Cause>>,
}

impl Default for BuildRef {
    fn default() -> Self {
        Self::new()
    }
}

impl BuildRef {
    pub fn new() -> Self {
        Self {
            causes: Some(Vec::new()),
        }
    }

    pub fn with_cause(mut self, cause: Cause) -> Self {
        self.causes.get_or_insert_with(Vec::new).push(cause);
        self
    }

    pub fn without_causes(mut self) -> Self {
        self.causes = None;
        self
    }
}

/// A single "post this status" intent.
///
/// Built once per derivation and never mutated afterwards; the fields are
/// only reachable through getters.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct NotificationRequest {
    context: String,
    url: String,
    message: String,
    state: BuildState,
    ignore_errors: bool,
}

impl NotificationRequest {
    pub fn build(
        context: impl Into<String>,
        url: impl Into<String>,
        message: impl Into<String>,
        state: BuildState,
        ignore_errors: bool,
    ) -> Self {
        Self {
            context: context.into(),
            url: url.into(),
            message: message.into(),
            state,
            ignore_errors,
        }
    }

    /// Status label, e.g. `continuous-integration/my-job`
    pub fn context(&self) -> &str {
        &self.context
    }

    /// Target of the "details" link
    pub fn url(&self) -> &str {
        &self.url
    }

    pub fn message(&self) -> &str {
        &self.message
    }

    pub fn state(&self) -> BuildState {
        self.state
    }

    /// Whether a delivery failure for this request should be swallowed
    pub fn ignore_errors(&self) -> bool {
        self.ignore_errors
    }

    /// Copy of this request under a different status label
    pub fn with_context(&self, context: impl Into<String>) -> Self {
        Self {
            context: context.into(),
            ..self.clone()
        }
    }

    /// Copy of this request with a different error tolerance
    pub fn with_ignore_errors(&self, ignore_errors: bool) -> Self {
        Self {
            ignore_errors,
            ..self.clone()
        }
    }

    /// Commit status body as posted to the hosting service.
    ///
    /// `ignore_errors` is a delivery concern and is not part of the body.
    pub fn to_json(&self) -> Value {
        json!({
            "state": self.state,
            "target_url": self.url,
            "description": self.message,
            "context": self.context,
        })
    }

    /// Status body serialized for the request payload
    pub fn to_body_string(&self) -> Result<String> {
        Ok(serde_json::to_string(&self.to_json())?)
    }
}
