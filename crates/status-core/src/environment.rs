//! Runtime identity lookup
use std::collections::HashMap;

/// Read-only view of process-wide variables
pub trait HostEnvironment: Send + Sync {
    /// `None` when unset or not valid unicode
    fn var(&self, key: &str) -> Option<String>;
}

/// Reads the real process environment
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

impl HostEnvironment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var(key).ok()
    }
}

/// Fixed set of variables
#[derive(Debug, Default, Clone)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.vars.insert(key.into(), value.into());
        self
    }
}

impl HostEnvironment for MapEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        self.vars.get(key).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_map_environment() {
        let env = MapEnvironment::new().with_var("HOSTNAME", "agent-3");
        assert_eq!(env.var("HOSTNAME").as_deref(), Some("agent-3"));
        assert_eq!(env.var("PRIMARY_HOSTNAME"), None);
    }
}
