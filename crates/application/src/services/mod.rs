//! Application services

mod correlation_initializer;
mod telemetry_initializer;

pub use correlation_initializer::{CorrelationConfig, CorrelationInitializer};
pub use telemetry_initializer::{InitializerChain, TelemetryInitializer};
