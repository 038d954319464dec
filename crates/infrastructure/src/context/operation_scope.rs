//! Thread-scoped legacy operation context propagation

use std::cell::RefCell;
use std::marker::PhantomData;

use application::{AmbientContextSource, OperationContextSnapshot};

thread_local! {
    static OPERATION_STACK: RefCell<Vec<OperationContextSnapshot>> =
        const { RefCell::new(Vec::new()) };
}

/// RAII guard that makes a legacy operation context current for the thread
///
/// Counterpart of [`super::ActivityScope`] for code paths that predate trace
/// activities. Same nesting and thread-affinity rules.
#[derive(Debug)]
pub struct OperationContextScope {
    _not_send: PhantomData<*const ()>,
}

impl OperationContextScope {
    /// Make `context` the current one until the returned guard is dropped
    #[must_use = "the context is current only while the guard is alive"]
    pub fn enter(context: OperationContextSnapshot) -> Self {
        OPERATION_STACK.with(|stack| stack.borrow_mut().push(context));
        Self {
            _not_send: PhantomData,
        }
    }

    /// Snapshot of the innermost context on this thread, if any
    #[must_use]
    pub fn current() -> Option<OperationContextSnapshot> {
        OPERATION_STACK.with(|stack| stack.borrow().last().cloned())
    }
}

impl Drop for OperationContextScope {
    fn drop(&mut self) {
        OPERATION_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Ambient context source backed by the calling thread's operation scope
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopedOperationContextSource;

impl ScopedOperationContextSource {
    /// Create the adapter
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl AmbientContextSource for ScopedOperationContextSource {
    fn current(&self) -> Option<OperationContextSnapshot> {
        OperationContextScope::current()
    }
}
