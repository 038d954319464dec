//! Port definitions for application layer
//!
//! Ports are interfaces that define how the enrichment services read ambient
//! context. Adapters in the infrastructure layer implement these ports.

mod active_trace_source;
mod ambient_context_source;

#[cfg(test)]
pub use active_trace_source::MockActiveTraceSource;
pub use active_trace_source::{ActiveTraceSource, ActivitySnapshot, OPERATION_NAME_TAG};
#[cfg(test)]
pub use ambient_context_source::MockAmbientContextSource;
pub use ambient_context_source::{AmbientContextSource, OperationContextSnapshot};
