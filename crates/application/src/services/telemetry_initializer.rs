//! Telemetry initializer extension point
//!
//! The emission pipeline applies every registered initializer to each item
//! before batching. One faulty initializer must not break the pipeline or
//! the initializers after it.

use std::fmt;
use std::panic::{self, AssertUnwindSafe};
use std::sync::Arc;

use domain::Telemetry;
use tracing::warn;

/// An enrichment step applied to every telemetry item before emission
///
/// Initializers mutate the item in place and must never fail: there is no
/// error channel back to the producer of the item.
pub trait TelemetryInitializer: Send + Sync {
    /// Enrich the item in place
    fn initialize(&self, item: &mut dyn Telemetry);
}

/// Ordered list of initializers applied to each telemetry item
///
/// Panics are isolated per initializer: a panicking initializer is logged
/// and skipped, and the remaining initializers still run.
#[derive(Default, Clone)]
pub struct InitializerChain {
    initializers: Vec<Arc<dyn TelemetryInitializer>>,
}

impl fmt::Debug for InitializerChain {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("InitializerChain")
            .field("len", &self.initializers.len())
            .finish_non_exhaustive()
    }
}

impl InitializerChain {
    /// Create an empty chain
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append an initializer, builder style
    #[must_use]
    pub fn with(mut self, initializer: Arc<dyn TelemetryInitializer>) -> Self {
        self.initializers.push(initializer);
        self
    }

    /// Append an initializer
    pub fn push(&mut self, initializer: Arc<dyn TelemetryInitializer>) {
        self.initializers.push(initializer);
    }

    /// Number of registered initializers
    #[must_use]
    pub fn len(&self) -> usize {
        self.initializers.len()
    }

    /// Whether no initializer is registered
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.initializers.is_empty()
    }

    /// Apply every initializer to the item, in registration order
    pub fn apply(&self, item: &mut dyn Telemetry) {
        for initializer in &self.initializers {
            let outcome = panic::catch_unwind(AssertUnwindSafe(|| initializer.initialize(item)));
            if outcome.is_err() {
                warn!("telemetry initializer panicked; item may be partially enriched");
            }
        }
    }
}
