//! Trace (log message) telemetry item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::telemetry::Telemetry;
use crate::value_objects::{OperationContext, PropertyBag, SeverityLevel};

/// A log message captured as telemetry
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TraceTelemetry {
    /// Message text
    pub message: String,
    /// Severity of the message
    #[serde(default)]
    pub severity: SeverityLevel,
    /// When the message was produced
    pub timestamp: DateTime<Utc>,
    /// Correlation identity
    #[serde(default)]
    pub operation: OperationContext,
    /// Custom dimensions
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
}

impl TraceTelemetry {
    /// Create a new trace message with the current timestamp
    pub fn new(message: impl Into<String>, severity: SeverityLevel) -> Self {
        Self {
            message: message.into(),
            severity,
            timestamp: Utc::now(),
            operation: OperationContext::default(),
            properties: PropertyBag::default(),
        }
    }

    /// Create an informational trace message
    pub fn info(message: impl Into<String>) -> Self {
        Self::new(message, SeverityLevel::Information)
    }

    /// Create an error trace message
    pub fn error(message: impl Into<String>) -> Self {
        Self::new(message, SeverityLevel::Error)
    }
}

impl Telemetry for TraceTelemetry {
    fn operation(&self) -> &OperationContext {
        &self.operation
    }

    fn operation_mut(&mut self) -> &mut OperationContext {
        &mut self.operation
    }

    fn properties(&self) -> &PropertyBag {
        &self.properties
    }

    fn properties_mut(&mut self) -> &mut PropertyBag {
        &mut self.properties
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn new_trace_keeps_message_and_severity() {
        let trace = TraceTelemetry::new("disk full", SeverityLevel::Critical);
        assert_eq!(trace.message, "disk full");
        assert_eq!(trace.severity, SeverityLevel::Critical);
    }

    #[test]
    fn info_constructor() {
        let trace = TraceTelemetry::info("started");
        assert_eq!(trace.severity, SeverityLevel::Information);
    }

    #[test]
    fn error_constructor() {
        let trace = TraceTelemetry::error("failed");
        assert_eq!(trace.severity, SeverityLevel::Error);
        assert!(trace.severity.is_failure());
    }

    #[test]
    fn trace_is_not_operation_telemetry() {
        let mut trace = TraceTelemetry::info("started");
        assert!(trace.as_operation_telemetry_mut().is_none());
    }
}
