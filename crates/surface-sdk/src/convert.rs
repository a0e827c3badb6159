//! Conversions between host values and Rust types.
//!
//! Typed wrapper methods use `FromHost` to turn a raw host result into the
//! declared Rust return type. Arguments go the other way through
//! `Into<HostValue>` (see `value.rs`).

use crate::error::{HostError, HostResult};
use crate::value::HostValue;

/// Convert from HostValue to Rust type.
///
/// Implement this trait to allow your type to be returned from a typed
/// wrapper method.
pub trait FromHost: Sized {
    /// Convert from HostValue, returning an error if the type doesn't match.
    fn from_host(value: HostValue) -> HostResult<Self>;
}

fn mismatch(expected: &str, value: &HostValue) -> HostError {
    HostError::type_mismatch(expected, value.type_name())
}

impl FromHost for HostValue {
    fn from_host(value: HostValue) -> HostResult<Self> {
        Ok(value)
    }
}

impl FromHost for () {
    fn from_host(_value: HostValue) -> HostResult<Self> {
        Ok(())
    }
}

impl FromHost for bool {
    fn from_host(value: HostValue) -> HostResult<Self> {
        value.as_bool().ok_or_else(|| mismatch("bool", &value))
    }
}

impl FromHost for i64 {
    fn from_host(value: HostValue) -> HostResult<Self> {
        value.as_int().ok_or_else(|| mismatch("int", &value))
    }
}

impl FromHost for i32 {
    fn from_host(value: HostValue) -> HostResult<Self> {
        let wide = i64::from_host(value)?;
        i32::try_from(wide).map_err(|_| HostError::type_mismatch("i32", format!("int {}", wide)))
    }
}

impl FromHost for f64 {
    fn from_host(value: HostValue) -> HostResult<Self> {
        value.as_f64().ok_or_else(|| mismatch("number", &value))
    }
}

impl FromHost for String {
    fn from_host(value: HostValue) -> HostResult<Self> {
        value
            .as_str()
            .map(str::to_string)
            .ok_or_else(|| mismatch("string", &value))
    }
}

impl<T: FromHost> FromHost for Vec<T> {
    fn from_host(value: HostValue) -> HostResult<Self> {
        let items = value.as_array().ok_or_else(|| mismatch("array", &value))?;
        items.iter().cloned().map(T::from_host).collect()
    }
}

impl<T: FromHost> FromHost for Option<T> {
    fn from_host(value: HostValue) -> HostResult<Self> {
        if value.is_void() {
            Ok(None)
        } else {
            T::from_host(value).map(Some)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_from_host_primitives() {
        assert!(bool::from_host(HostValue::Bool(true)).unwrap());
        assert_eq!(i32::from_host(HostValue::Int(42)).unwrap(), 42);
        assert_eq!(f64::from_host(HostValue::Int(2)).unwrap(), 2.0);
        assert_eq!(String::from_host(HostValue::string("x")).unwrap(), "x");
    }

    #[test]
    fn test_from_host_mismatch() {
        let err = bool::from_host(HostValue::Int(1)).unwrap_err();
        assert_eq!(
            err,
            HostError::TypeMismatch {
                expected: "bool".to_string(),
                got: "int".to_string(),
            }
        );
        assert!(i32::from_host(HostValue::Int(i64::MAX)).is_err());
    }

    #[test]
    fn test_from_host_containers() {
        let v = Vec::<String>::from_host(HostValue::from(vec!["a", "b"])).unwrap();
        assert_eq!(v, vec!["a".to_string(), "b".to_string()]);
        assert_eq!(Option::<i64>::from_host(HostValue::Undefined).unwrap(), None);
        assert_eq!(Option::<i64>::from_host(HostValue::Int(3)).unwrap(), Some(3));
    }
}
