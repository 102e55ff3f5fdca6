//! Status Registry: strategy registry and dispatch
//!
//! Collects the configured strategies, merges their requests in registration
//! order, and hands them to a [`NotificationDelivery`] backend.

pub mod dispatch;
pub mod registry;

pub use dispatch::{DispatchReport, NotificationDelivery, Notifier};
pub use registry::StrategyRegistry;
