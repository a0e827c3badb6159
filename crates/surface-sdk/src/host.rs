//! HostObject trait - the host boundary
//!
//! Defines the only capability the proxy layer needs from the host runtime:
//! "invoke method `name` with positional arguments". Concrete runtimes (an
//! embedded script engine, the in-memory simulator) implement this trait;
//! wrappers program against it without knowing anything else about the
//! object's shape.

use std::rc::Rc;

use crate::error::HostResult;
use crate::value::HostValue;

/// An opaque object owned by the host runtime.
///
/// Implementations must report failures as `HostError::Invocation` (or
/// `HostError::ArgumentError` for rejected arguments). The proxy layer
/// forwards those errors to the caller without translating them.
pub trait HostObject {
    /// Invoke a named member with positional arguments.
    ///
    /// Returns `HostValue::Undefined` for void members.
    fn invoke(&self, method: &str, args: &[HostValue]) -> HostResult<HostValue>;

    /// Host-side type name, used only for diagnostics.
    fn type_name(&self) -> &str {
        "object"
    }
}

/// Shared handle to a host object.
///
/// The host owns the state behind the handle; holding a `HostRef` keeps the
/// handle alive, not the host-side object graph.
pub type HostRef = Rc<dyn HostObject>;

/// Address of the object behind a handle, for identity comparison.
#[inline]
pub fn object_addr(obj: &HostRef) -> usize {
    Rc::as_ptr(obj) as *const () as usize
}

/// Check if two handles refer to the same host object
#[inline]
pub fn same_object(a: &HostRef, b: &HostRef) -> bool {
    object_addr(a) == object_addr(b)
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Echo;

    impl HostObject for Echo {
        fn invoke(&self, method: &str, args: &[HostValue]) -> HostResult<HostValue> {
            match method {
                "echo" => Ok(args.first().cloned().unwrap_or_default()),
                _ => Err(crate::HostError::invocation(method, "no such member")),
            }
        }

        fn type_name(&self) -> &str {
            "Echo"
        }
    }

    #[test]
    fn test_invoke_through_handle() {
        let obj: HostRef = Rc::new(Echo);
        let out = obj.invoke("echo", &[HostValue::Int(7)]).unwrap();
        assert_eq!(out, HostValue::Int(7));
        assert!(obj.invoke("missing", &[]).is_err());
        assert_eq!(obj.type_name(), "Echo");
    }

    #[test]
    fn test_same_object() {
        let a: HostRef = Rc::new(Echo);
        let b: HostRef = Rc::new(Echo);
        assert!(same_object(&a, &a.clone()));
        assert!(!same_object(&a, &b));
    }
}
