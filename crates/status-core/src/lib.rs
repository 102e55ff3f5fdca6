//! Status Core: build context, notification requests, and diagnostic seams
//!
//! Shared vocabulary for deriving commit-status notifications from a resolved
//! build. Strategies live in `status-strategy`; dispatch lives in
//! `status-registry`.

pub mod context;
pub mod data_model;
pub mod environment;
pub mod error;
pub mod sink;
pub mod telemetry;

pub use context::{NotificationContext, ResolvedContext};
pub use data_model::{BuildRef, BuildState, Cause, JobRef, NotificationRequest};
pub use environment::{HostEnvironment, MapEnvironment, ProcessEnvironment};
pub use error::{Result, StatusError};
pub use sink::{DiagnosticSink, NullSink, RecordingSink, TracingSink};
