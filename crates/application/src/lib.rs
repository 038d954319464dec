//! Application layer - Telemetry enrichment orchestration
//!
//! Contains the port definitions for ambient correlation context and the
//! initializer services that stamp correlation identity onto telemetry items
//! before they are handed to the emission pipeline.

pub mod ports;
pub mod services;

pub use ports::*;
pub use services::*;
