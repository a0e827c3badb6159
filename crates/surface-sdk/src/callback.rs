//! Script callbacks handed to the host
//!
//! Observer-style host members (`addValueObserver`, `scheduleTask`, ...) take
//! a callback argument and return nothing useful. The proxy layer passes the
//! callback through untouched; the host fires it later.

use std::fmt;
use std::rc::Rc;

use crate::error::HostResult;
use crate::value::HostValue;

/// Callback signature
pub type CallbackFn = dyn Fn(&[HostValue]) -> HostResult<HostValue>;

/// A callable handed to the host. Cloning shares the same callable, so
/// clones compare equal.
#[derive(Clone)]
pub struct HostCallback {
    func: Rc<CallbackFn>,
}

impl HostCallback {
    /// Wrap a closure as a callback
    pub fn new(func: impl Fn(&[HostValue]) -> HostResult<HostValue> + 'static) -> Self {
        Self { func: Rc::new(func) }
    }

    /// Wrap a closure that produces no result
    pub fn observer(func: impl Fn(&[HostValue]) + 'static) -> Self {
        Self::new(move |args| {
            func(args);
            Ok(HostValue::Undefined)
        })
    }

    /// Invoke the callback
    pub fn call(&self, args: &[HostValue]) -> HostResult<HostValue> {
        (self.func)(args)
    }

    /// Check if both handles share the same callable
    pub fn same_as(&self, other: &HostCallback) -> bool {
        self.addr() == other.addr()
    }

    pub(crate) fn addr(&self) -> usize {
        Rc::as_ptr(&self.func) as *const () as usize
    }
}

impl fmt::Debug for HostCallback {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "HostCallback({:#x})", self.addr())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;

    #[test]
    fn test_observer_callback() {
        let seen = Rc::new(Cell::new(0));
        let sink = seen.clone();
        let cb = HostCallback::observer(move |args| {
            sink.set(args.first().and_then(HostValue::as_int).unwrap_or(-1));
        });

        let out = cb.call(&[HostValue::Int(5)]).unwrap();
        assert!(out.is_undefined());
        assert_eq!(seen.get(), 5);
    }

    #[test]
    fn test_clone_identity() {
        let a = HostCallback::new(|_| Ok(HostValue::Null));
        let b = HostCallback::new(|_| Ok(HostValue::Null));
        assert!(a.same_as(&a.clone()));
        assert!(!a.same_as(&b));
    }
}
