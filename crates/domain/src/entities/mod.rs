//! Telemetry item entities

mod event_telemetry;
mod request_telemetry;
mod trace_telemetry;

pub use event_telemetry::EventTelemetry;
pub use request_telemetry::RequestTelemetry;
pub use trace_telemetry::TraceTelemetry;
