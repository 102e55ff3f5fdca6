//! Diagnostics configuration
use serde::{Deserialize, Serialize};
use status_core::{Result, StatusError};

/// Variable holding the identity of the primary (controller) host
pub const PRIMARY_HOST_VAR: &str = "PRIMARY_HOSTNAME";

/// Variable holding the identity of the host running this process
pub const HOST_VAR: &str = "HOSTNAME";

/// Controls the host/cause diagnostics emitted before derivation
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DiagnosticsConfig {
    /// Emit diagnostics at all
    pub enabled: bool,

    /// Variable read for the primary host identity
    pub primary_host_var: String,

    /// Variable read for this host's identity
    pub host_var: String,
}

impl DiagnosticsConfig {
    /// Configuration with diagnostics switched off
    pub fn disabled() -> Self {
        Self {
            enabled: false,
            ..Self::default()
        }
    }

    /// Load configuration from YAML; missing keys take their defaults
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        serde_yaml::from_str(yaml).map_err(|e| StatusError::Config(e.to_string()))
    }
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            enabled: true,
            primary_host_var: PRIMARY_HOST_VAR.to_string(),
            host_var: HOST_VAR.to_string(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = DiagnosticsConfig::default();
        assert!(config.enabled);
        assert_eq!(config.primary_host_var, "PRIMARY_HOSTNAME");
        assert_eq!(config.host_var, "HOSTNAME");
    }

    #[test]
    fn test_partial_yaml_keeps_defaults() {
        let config = DiagnosticsConfig::from_yaml("host_var: NODE_NAME\n").unwrap();
        assert!(config.enabled);
        assert_eq!(config.primary_host_var, "PRIMARY_HOSTNAME");
        assert_eq!(config.host_var, "NODE_NAME");
    }

    #[test]
    fn test_invalid_yaml() {
        let err = DiagnosticsConfig::from_yaml("enabled: [not, a, bool]").unwrap_err();
        assert!(matches!(err, StatusError::Config(_)));
        assert!(err.to_string().starts_with("CONFIG/"));
    }
}
