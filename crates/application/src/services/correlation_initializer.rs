//! Telemetry initializer that stamps correlation identity onto items
//!
//! Resolves the operation id, parent id, and operation name of a telemetry
//! item from one of two mutually exclusive ambient sources: the current
//! distributed-trace activity, or the legacy stack-scoped operation context
//! when no activity is in progress. Propagated key/value context is merged
//! into the item's properties without replacing producer-set keys.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use domain::Telemetry;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::ports::{ActiveTraceSource, AmbientContextSource};
use crate::services::telemetry_initializer::TelemetryInitializer;

/// Configuration for correlation enrichment
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CorrelationConfig {
    /// Whether the active-trace probe is attempted at all (default: true)
    ///
    /// When disabled, every item is resolved from the legacy operation
    /// context, as on targets without activity support.
    #[serde(default = "default_activity_tracking")]
    pub activity_tracking: bool,
}

const fn default_activity_tracking() -> bool {
    true
}

impl Default for CorrelationConfig {
    fn default() -> Self {
        Self {
            activity_tracking: default_activity_tracking(),
        }
    }
}

/// Stamps correlation identity onto telemetry items
///
/// Stateless and safe to call concurrently from any number of producers;
/// both sources read context scoped to the calling operation.
///
/// Per invocation exactly one source contributes. When an activity is in
/// progress it drives enrichment exclusively, even if it leaves some fields
/// empty; the legacy context is consulted only when there is no activity at
/// all. Field assignment is asymmetric: `operation.id`, `operation.parent_id`
/// and `operation.name` are only filled when empty, while the span-level id
/// of operation items is always overwritten from the activity.
pub struct CorrelationInitializer {
    config: CorrelationConfig,
    activity_source: Arc<dyn ActiveTraceSource>,
    ambient_source: Arc<dyn AmbientContextSource>,
}

impl fmt::Debug for CorrelationInitializer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("CorrelationInitializer")
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}

impl CorrelationInitializer {
    /// Create an initializer with the default configuration
    pub fn new(
        activity_source: Arc<dyn ActiveTraceSource>,
        ambient_source: Arc<dyn AmbientContextSource>,
    ) -> Self {
        Self::with_config(CorrelationConfig::default(), activity_source, ambient_source)
    }

    /// Create an initializer with an explicit configuration
    pub fn with_config(
        config: CorrelationConfig,
        activity_source: Arc<dyn ActiveTraceSource>,
        ambient_source: Arc<dyn AmbientContextSource>,
    ) -> Self {
        Self {
            config,
            activity_source,
            ambient_source,
        }
    }

    /// Get the configuration
    #[must_use]
    pub const fn config(&self) -> &CorrelationConfig {
        &self.config
    }

    /// Enrich the item in place
    ///
    /// Never fails and never panics: a fault anywhere in the activity probe
    /// is downgraded to "no current activity" and the legacy context takes
    /// over. Absence of both sources leaves the item untouched.
    pub fn initialize(&self, item: &mut dyn Telemetry) {
        let activity_applied = self.config.activity_tracking
            && panic::catch_unwind(AssertUnwindSafe(|| self.apply_activity(item))).unwrap_or_else(
                |_| {
                    debug!("active trace probe failed; treating as no current activity");
                    false
                },
            );

        if !activity_applied {
            self.apply_ambient(item);
        }
    }

    /// Enrich from the current activity; `true` iff an activity was present
    ///
    /// Success means an activity existed, not that any field changed.
    fn apply_activity(&self, item: &mut dyn Telemetry) -> bool {
        let Some(activity) = self.activity_source.current() else {
            return false;
        };

        let operation = item.operation_mut();
        if operation.id.is_empty() {
            operation.id = activity.root_id.clone();

            // The parent id rides along with the root-id assignment; it is
            // not considered on its own when the id is already set.
            if operation.parent_id.is_empty() {
                operation.parent_id = activity.parent_id.clone();
            }
        }

        if let Some(operation_item) = item.as_operation_telemetry_mut() {
            operation_item.set_id(activity.id.clone());
        }

        let properties = item.properties_mut();
        for (key, value) in &activity.baggage {
            properties.insert_if_absent(key.as_str(), value.as_str());
        }

        if let Some(name) = activity.operation_name() {
            if !name.is_empty() && item.operation().name.is_empty() {
                item.operation_mut().name = name.to_owned();
            }
        }

        true
    }

    /// Enrich from the legacy operation context
    ///
    /// Skipped entirely when all three correlation fields are already set.
    fn apply_ambient(&self, item: &mut dyn Telemetry) {
        if item.operation().is_complete() {
            return;
        }

        let Some(context) = self.ambient_source.current() else {
            return;
        };

        let operation = item.operation_mut();
        if operation.parent_id.is_empty() && !context.parent_operation_id.is_empty() {
            operation.parent_id = context.parent_operation_id.clone();
        }
        if operation.id.is_empty() && !context.root_operation_id.is_empty() {
            operation.id = context.root_operation_id.clone();
        }
        if operation.name.is_empty() && !context.root_operation_name.is_empty() {
            operation.name = context.root_operation_name.clone();
        }

        if let Some(pairs) = &context.correlation_context {
            let properties = item.properties_mut();
            for (key, value) in pairs {
                properties.insert_if_absent(key.as_str(), value.as_str());
            }
        }
    }
}

impl TelemetryInitializer for CorrelationInitializer {
    fn initialize(&self, item: &mut dyn Telemetry) {
        Self::initialize(self, item);
    }
}
