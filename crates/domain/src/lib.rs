//! Domain layer for spanlink
//!
//! Contains the telemetry data model: item entities, correlation value
//! objects, and the traits that telemetry processors operate on. This layer
//! has no I/O and no async.

pub mod entities;
pub mod errors;
pub mod telemetry;
pub mod value_objects;

pub use entities::*;
pub use errors::DomainError;
pub use telemetry::{OperationTelemetry, Telemetry};
pub use value_objects::*;
