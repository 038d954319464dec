//! Thread-scoped trace activity propagation

use std::cell::RefCell;
use std::marker::PhantomData;

use application::{ActiveTraceSource, ActivitySnapshot};

thread_local! {
    static ACTIVITY_STACK: RefCell<Vec<ActivitySnapshot>> = const { RefCell::new(Vec::new()) };
}

/// RAII guard that makes a trace activity current for the calling thread
///
/// Scopes nest: entering a scope while another is active shadows the outer
/// activity until the inner guard is dropped. The guard is thread-affine and
/// deliberately `!Send`.
#[derive(Debug)]
pub struct ActivityScope {
    _not_send: PhantomData<*const ()>,
}

impl ActivityScope {
    /// Make `activity` the current one until the returned guard is dropped
    #[must_use = "the activity is current only while the guard is alive"]
    pub fn enter(activity: ActivitySnapshot) -> Self {
        ACTIVITY_STACK.with(|stack| stack.borrow_mut().push(activity));
        Self {
            _not_send: PhantomData,
        }
    }

    /// Snapshot of the innermost activity on this thread, if any
    #[must_use]
    pub fn current() -> Option<ActivitySnapshot> {
        ACTIVITY_STACK.with(|stack| stack.borrow().last().cloned())
    }
}

impl Drop for ActivityScope {
    fn drop(&mut self) {
        ACTIVITY_STACK.with(|stack| {
            stack.borrow_mut().pop();
        });
    }
}

/// Trace source backed by the calling thread's activity scope
#[derive(Debug, Clone, Copy, Default)]
pub struct ScopedActivitySource;

impl ScopedActivitySource {
    /// Create the adapter
    #[must_use]
    pub fn new() -> Self {
        Self
    }
}

impl ActiveTraceSource for ScopedActivitySource {
    fn current(&self) -> Option<ActivitySnapshot> {
        ActivityScope::current()
    }
}
