//! Request telemetry item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::telemetry::{OperationTelemetry, Telemetry};
use crate::value_objects::{OperationContext, PropertyBag};

/// An incoming request handled by the instrumented service
///
/// A request is itself an operation, so it carries its own span-level [`id`]
/// in addition to the shared correlation identity in `operation`. Enrichment
/// overwrites `id` with the current activity's span id whenever an active
/// trace is in progress.
///
/// [`id`]: RequestTelemetry::id
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequestTelemetry {
    /// Span-level id of this request
    pub id: String,
    /// Request name (e.g. "GET /orders")
    pub name: String,
    /// When handling started
    pub timestamp: DateTime<Utc>,
    /// Handling duration in milliseconds, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub duration_ms: Option<u64>,
    /// Whether handling succeeded, once known
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub success: Option<bool>,
    /// Correlation identity
    #[serde(default)]
    pub operation: OperationContext,
    /// Custom dimensions
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
}

impl RequestTelemetry {
    /// Create a new request with a generated span id and the current timestamp
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            timestamp: Utc::now(),
            duration_ms: None,
            success: None,
            operation: OperationContext::default(),
            properties: PropertyBag::default(),
        }
    }

    /// Record the outcome of the request
    #[must_use]
    pub fn with_outcome(mut self, duration_ms: u64, success: bool) -> Self {
        self.duration_ms = Some(duration_ms);
        self.success = Some(success);
        self
    }
}

impl Telemetry for RequestTelemetry {
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

    fn as_operation_telemetry_mut(&mut self) -> Option<&mut dyn OperationTelemetry> {
        Some(self)
    }
}

impl OperationTelemetry for RequestTelemetry {
    fn id(&self) -> &str {
        &self.id
    }

    fn set_id(&mut self, id: String) {
        self.id = id;
    }
}
