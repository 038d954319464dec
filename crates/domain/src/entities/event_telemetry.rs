//! Custom event telemetry item

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::telemetry::Telemetry;
use crate::value_objects::{OperationContext, PropertyBag};

/// A named custom event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EventTelemetry {
    /// Event name
    pub name: String,
    /// When the event occurred
    pub timestamp: DateTime<Utc>,
    /// Correlation identity
    #[serde(default)]
    pub operation: OperationContext,
    /// Custom dimensions
    #[serde(default, skip_serializing_if = "PropertyBag::is_empty")]
    pub properties: PropertyBag,
}

impl EventTelemetry {
    /// Create a new event with the current timestamp
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            timestamp: Utc::now(),
            operation: OperationContext::default(),
            properties: PropertyBag::default(),
        }
    }

    /// Attach a property, replacing any existing value
    #[must_use]
    pub fn with_property(mut self, key: impl Into<String>, value: impl Into<String>) -> Self {
        self.properties.insert(key, value);
        self
    }
}

impl Telemetry for EventTelemetry {
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
