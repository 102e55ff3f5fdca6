//! Status Strategy: notification-request derivation policies
//!
//! A strategy turns a resolved build into the ordered list of commit-status
//! requests to post. The default policy emits exactly one request built from
//! the context's defaults and logs host/cause diagnostics first.
//!
//! ```text
//! NotificationContext → [diagnostics] → default accessors → Vec<NotificationRequest>
//!                            ↓
//!                      log sink (best-effort)
//! ```
//!
//! # Example
//!
//! ```
//! use status_core::{BuildState, NullSink, ResolvedContext};
//! use status_strategy::{DefaultNotificationStrategy, NotificationStrategy};
//!
//! let ctx = ResolvedContext::new("continuous-integration/my-job", "https://ci/job/my-job/1/")
//!     .with_message("This commit looks good")
//!     .with_state(BuildState::Success);
//!
//! let requests = DefaultNotificationStrategy::new()
//!     .notifications(&ctx, &NullSink)
//!     .unwrap();
//!
//! assert_eq!(requests.len(), 1);
//! assert_eq!(requests[0].state(), BuildState::Success);
//! ```

pub mod config;
pub mod diagnostics;
pub mod policies;
pub mod strategy;

pub use config::{DiagnosticsConfig, HOST_VAR, PRIMARY_HOST_VAR};
pub use diagnostics::HostDiagnostics;
pub use policies::{IgnoreErrorsOverride, PerCheckStrategy, SuppressStates};
pub use strategy::{default_request, policy_eq, DefaultNotificationStrategy, NotificationStrategy};
