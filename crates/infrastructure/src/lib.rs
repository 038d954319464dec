//! Infrastructure layer - Adapters for ambient context propagation
//!
//! Implements the ports defined in the application layer: thread-scoped
//! propagation of trace activities and legacy operation context, plus
//! configuration loading and logging setup.

pub mod config;
pub mod context;
pub mod telemetry;

pub use config::AppConfig;
pub use context::{
    ActivityScope, OperationContextScope, ScopedActivitySource, ScopedOperationContextSource,
};
pub use telemetry::{LoggingConfig, LoggingError, init_logging};
