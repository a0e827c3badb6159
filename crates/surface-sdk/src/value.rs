//! HostValue - untyped values crossing the host boundary
//!
//! Every argument passed to, and every result returned from, a host call is a
//! `HostValue`. Equality and hashing are argument-wise so that argument tuples
//! can key the per-proxy result cache:
//!
//! ```text
//! Undefined, Null       unit variants
//! Bool, Int, String     by value
//! Float                 by IEEE 754 bit pattern (NaN == NaN, 0.0 != -0.0)
//! Array                 element-wise
//! Object, Callback      by reference identity
//! ```

use std::fmt;
use std::hash::{Hash, Hasher};
use std::rc::Rc;

use crate::callback::HostCallback;
use crate::host::{object_addr, HostRef};

/// A value produced or consumed by the host runtime.
#[derive(Clone, Default)]
pub enum HostValue {
    /// No value (void return, missing argument)
    #[default]
    Undefined,
    /// Explicit null
    Null,
    /// Boolean
    Bool(bool),
    /// Integer number
    Int(i64),
    /// Floating point number
    Float(f64),
    /// String
    String(Rc<str>),
    /// Array of values
    Array(Rc<[HostValue]>),
    /// Opaque host object
    Object(HostRef),
    /// Script callback handed to the host
    Callback(HostCallback),
}

impl HostValue {
    /// Create a string value
    pub fn string(s: impl AsRef<str>) -> Self {
        HostValue::String(Rc::from(s.as_ref()))
    }

    /// Create an array value
    pub fn array(items: impl IntoIterator<Item = HostValue>) -> Self {
        HostValue::Array(items.into_iter().collect())
    }

    /// Check if this is `Undefined`
    pub fn is_undefined(&self) -> bool {
        matches!(self, HostValue::Undefined)
    }

    /// Check if this is `Null`
    pub fn is_null(&self) -> bool {
        matches!(self, HostValue::Null)
    }

    /// Check if this value carries nothing (`Undefined` or `Null`)
    pub fn is_void(&self) -> bool {
        matches!(self, HostValue::Undefined | HostValue::Null)
    }

    /// Extract boolean value
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            HostValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Extract integer value
    pub fn as_int(&self) -> Option<i64> {
        match self {
            HostValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Extract a number, widening integers
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            HostValue::Float(f) => Some(*f),
            HostValue::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    /// Extract string slice
    pub fn as_str(&self) -> Option<&str> {
        match self {
            HostValue::String(s) => Some(s),
            _ => None,
        }
    }

    /// Extract array elements
    pub fn as_array(&self) -> Option<&[HostValue]> {
        match self {
            HostValue::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Extract host object reference
    pub fn as_object(&self) -> Option<&HostRef> {
        match self {
            HostValue::Object(obj) => Some(obj),
            _ => None,
        }
    }

    /// Extract callback
    pub fn as_callback(&self) -> Option<&HostCallback> {
        match self {
            HostValue::Callback(cb) => Some(cb),
            _ => None,
        }
    }

    /// Get type name for diagnostics
    pub fn type_name(&self) -> &'static str {
        match self {
            HostValue::Undefined => "undefined",
            HostValue::Null => "null",
            HostValue::Bool(_) => "bool",
            HostValue::Int(_) => "int",
            HostValue::Float(_) => "float",
            HostValue::String(_) => "string",
            HostValue::Array(_) => "array",
            HostValue::Object(_) => "object",
            HostValue::Callback(_) => "callback",
        }
    }
}

impl PartialEq for HostValue {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (HostValue::Undefined, HostValue::Undefined) => true,
            (HostValue::Null, HostValue::Null) => true,
            (HostValue::Bool(a), HostValue::Bool(b)) => a == b,
            (HostValue::Int(a), HostValue::Int(b)) => a == b,
            (HostValue::Float(a), HostValue::Float(b)) => a.to_bits() == b.to_bits(),
            (HostValue::String(a), HostValue::String(b)) => a == b,
            (HostValue::Array(a), HostValue::Array(b)) => a == b,
            (HostValue::Object(a), HostValue::Object(b)) => object_addr(a) == object_addr(b),
            (HostValue::Callback(a), HostValue::Callback(b)) => a.same_as(b),
            _ => false,
        }
    }
}

impl Eq for HostValue {}

impl Hash for HostValue {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            HostValue::Undefined | HostValue::Null => {}
            HostValue::Bool(b) => b.hash(state),
            HostValue::Int(i) => i.hash(state),
            HostValue::Float(f) => f.to_bits().hash(state),
            HostValue::String(s) => s.hash(state),
            HostValue::Array(items) => items.hash(state),
            HostValue::Object(obj) => object_addr(obj).hash(state),
            HostValue::Callback(cb) => cb.addr().hash(state),
        }
    }
}

impl fmt::Debug for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::Undefined => write!(f, "undefined"),
            HostValue::Null => write!(f, "null"),
            HostValue::Bool(b) => write!(f, "{}", b),
            HostValue::Int(i) => write!(f, "{}", i),
            HostValue::Float(x) => write!(f, "{:?}", x),
            HostValue::String(s) => write!(f, "{:?}", s),
            HostValue::Array(items) => f.debug_list().entries(items.iter()).finish(),
            HostValue::Object(obj) => write!(f, "<{} @{:#x}>", obj.type_name(), object_addr(obj)),
            HostValue::Callback(cb) => write!(f, "<callback @{:#x}>", cb.addr()),
        }
    }
}

impl fmt::Display for HostValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            HostValue::String(s) => write!(f, "{}", s),
            other => write!(f, "{:?}", other),
        }
    }
}

// ============================================================================
// Argument conversions
// ============================================================================

impl From<bool> for HostValue {
    fn from(b: bool) -> Self {
        HostValue::Bool(b)
    }
}

impl From<i32> for HostValue {
    fn from(i: i32) -> Self {
        HostValue::Int(i as i64)
    }
}

impl From<i64> for HostValue {
    fn from(i: i64) -> Self {
        HostValue::Int(i)
    }
}

impl From<usize> for HostValue {
    fn from(i: usize) -> Self {
        HostValue::Int(i as i64)
    }
}

impl From<f64> for HostValue {
    fn from(f: f64) -> Self {
        HostValue::Float(f)
    }
}

impl From<&str> for HostValue {
    fn from(s: &str) -> Self {
        HostValue::string(s)
    }
}

impl From<String> for HostValue {
    fn from(s: String) -> Self {
        HostValue::String(Rc::from(s))
    }
}

impl From<HostRef> for HostValue {
    fn from(obj: HostRef) -> Self {
        HostValue::Object(obj)
    }
}

impl From<HostCallback> for HostValue {
    fn from(cb: HostCallback) -> Self {
        HostValue::Callback(cb)
    }
}

impl<T: Into<HostValue>> From<Vec<T>> for HostValue {
    fn from(items: Vec<T>) -> Self {
        HostValue::array(items.into_iter().map(Into::into))
    }
}

impl<T: Into<HostValue>> From<Option<T>> for HostValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(HostValue::Undefined)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::HostResult;
    use crate::host::HostObject;
    use std::collections::hash_map::DefaultHasher;

    struct Dummy;

    impl HostObject for Dummy {
        fn invoke(&self, _method: &str, _args: &[HostValue]) -> HostResult<HostValue> {
            Ok(HostValue::Undefined)
        }
    }

    fn hash_of(v: &HostValue) -> u64 {
        let mut h = DefaultHasher::new();
        v.hash(&mut h);
        h.finish()
    }

    #[test]
    fn test_scalar_equality() {
        assert_eq!(HostValue::from(3), HostValue::Int(3));
        assert_ne!(HostValue::Int(3), HostValue::Float(3.0));
        assert_eq!(HostValue::from("a"), HostValue::string("a"));
        assert_ne!(HostValue::Undefined, HostValue::Null);
    }

    #[test]
    fn test_float_bitwise_equality() {
        assert_eq!(HostValue::Float(f64::NAN), HostValue::Float(f64::NAN));
        assert_ne!(HostValue::Float(0.0), HostValue::Float(-0.0));
        assert_eq!(hash_of(&HostValue::Float(1.5)), hash_of(&HostValue::Float(1.5)));
    }

    #[test]
    fn test_object_identity() {
        let a: HostRef = Rc::new(Dummy);
        let b: HostRef = Rc::new(Dummy);
        assert_eq!(HostValue::Object(a.clone()), HostValue::Object(a.clone()));
        assert_ne!(HostValue::Object(a.clone()), HostValue::Object(b));
        assert_eq!(
            hash_of(&HostValue::Object(a.clone())),
            hash_of(&HostValue::Object(a))
        );
    }

    #[test]
    fn test_array_structural_equality() {
        let a = HostValue::from(vec!["x", "y"]);
        let b = HostValue::array([HostValue::string("x"), HostValue::string("y")]);
        assert_eq!(a, b);
        assert_eq!(hash_of(&a), hash_of(&b));
    }

    #[test]
    fn test_void_and_extractors() {
        assert!(HostValue::Undefined.is_void());
        assert!(HostValue::Null.is_void());
        assert!(!HostValue::Bool(false).is_void());
        assert_eq!(HostValue::Int(2).as_f64(), Some(2.0));
        assert_eq!(HostValue::string("hi").as_str(), Some("hi"));
        assert_eq!(HostValue::from(None::<i32>), HostValue::Undefined);
        assert_eq!(HostValue::Float(1.0).type_name(), "float");
    }

    #[test]
    fn test_display_format() {
        assert_eq!(HostValue::string("Bitwig").to_string(), "Bitwig");
        assert_eq!(HostValue::Int(42).to_string(), "42");
        assert_eq!(format!("{:?}", HostValue::string("a")), "\"a\"");
    }
}
