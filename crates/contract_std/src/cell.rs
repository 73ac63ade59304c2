//! Instance-lifetime state for contracts.

use core::cell::RefCell;

/// Holder for module-level contract state (balance books, message logs).
/// One module instance serves one invocation at a time on a single thread
/// and entry points never re-enter each other, so interior mutability
/// without synchronization is sound; a reentrant borrow aborts instead of
/// corrupting state.
pub struct InstanceCell<T> {
    inner: RefCell<Option<T>>,
}

unsafe impl<T> Sync for InstanceCell<T> {}

impl<T> InstanceCell<T> {
    pub const fn new() -> Self {
        Self { inner: RefCell::new(None) }
    }

    /// Runs `f` over the state, initializing it through `init` on first
    /// access.
    pub fn with<R>(&self, init: fn() -> T, f: impl FnOnce(&mut T) -> R) -> R {
        let mut slot = self.inner.borrow_mut();
        if slot.is_none() {
            *slot = Some(init());
        }
        f(slot.as_mut().unwrap())
    }
}
