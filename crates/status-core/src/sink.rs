//! Diagnostic sinks: best-effort destinations for operational log lines
use crate::error::{Result, StatusError};
use std::sync::Mutex;

/// Target used for diagnostic lines forwarded to `tracing`
pub const DIAGNOSTICS_TARGET: &str = "commit_status::diagnostics";

/// Accepts informational messages.
///
/// Implementations must not block. A failure is reported through `Err` so the
/// caller can drop it; it is never allowed to abort notification derivation.
pub trait DiagnosticSink: Send + Sync {
    fn info(&self, message: &str) -> Result<()>;
}

/// Forwards every line to `tracing::info!`
#[derive(Debug, Default, Clone, Copy)]
pub struct TracingSink;

impl DiagnosticSink for TracingSink {
    fn info(&self, message: &str) -> Result<()> {
        tracing::info!(target: DIAGNOSTICS_TARGET, "{}", message);
        Ok(())
    }
}

/// Discards everything
#[derive(Debug, Default, Clone, Copy)]
pub struct NullSink;

impl DiagnosticSink for NullSink {
    fn info(&self, _message: &str) -> Result<()> {
        Ok(())
    }
}

/// Keeps lines in memory, in emission order
#[derive(Debug, Default)]
pub struct RecordingSink {
    lines: Mutex<Vec<String>>,
}

impl RecordingSink {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> Vec<String> {
        match self.lines.lock() {
            Ok(lines) => lines.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    pub fn contains(&self, line: &str) -> bool {
        self.lines().iter().any(|l| l == line)
    }
}

impl DiagnosticSink for RecordingSink {
    fn info(&self, message: &str) -> Result<()> {
        self.lines
            .lock()
            .map_err(|e| StatusError::Sink(e.to_string()))?
            .push(message.to_string());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recording_sink_keeps_order() {
        let sink = RecordingSink::new();
        sink.info("first").unwrap();
        sink.info("second").unwrap();

        assert_eq!(sink.lines(), vec!["first", "second"]);
        assert!(sink.contains("second"));
        assert!(!sink.contains("third"));
    }

    #[test]
    fn test_null_and_tracing_sinks_accept_anything() {
        assert!(NullSink.info("").is_ok());
        assert!(TracingSink.info("[LOG HOSTS] No build").is_ok());
    }
}
