//! Thread-scoped context propagation
//!
//! RAII scope guards hold the ambient context for the calling thread, and
//! adapter types expose the innermost scope through the application-layer
//! source ports. Scopes nest like a call stack and are invisible to other
//! threads; code that hops threads must re-enter the scope on the new thread.

mod activity_scope;
mod operation_scope;

pub use activity_scope::{ActivityScope, ScopedActivitySource};
pub use operation_scope::{OperationContextScope, ScopedOperationContextSource};
