//! ApiProxy - call forwarding with result wrapping
//!
//! An `ApiProxy` pairs one host object with one wrapper class. Every call is
//! forwarded to the host; when the class (or one of its ancestors) binds the
//! method, the host result is wrapped in a new proxy of the bound class.
//! Results of accessor bindings are cached per argument tuple so that repeated
//! lookups of the same sub-object return the same proxy instance.

use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use rustc_hash::FxHashMap;

use crate::class::ProxyClass;
use crate::convert::FromHost;
use crate::error::{HostError, HostResult};
use crate::host::{object_addr, HostRef};
use crate::value::HostValue;
use crate::wrapper::Wrapper;

/// Cache key: bound method name plus the argument tuple
#[derive(PartialEq, Eq, Hash)]
struct CallKey {
    method: &'static str,
    args: Box<[HostValue]>,
}

/// Outcome of a forwarded call
#[derive(Debug, Clone)]
pub enum Returned {
    /// The host result, unchanged (void, scalar, or unmapped method)
    Value(HostValue),
    /// The host result wrapped in the bound class
    Wrapped(Rc<ApiProxy>),
}

impl Returned {
    /// Check if the result was wrapped
    pub fn is_wrapped(&self) -> bool {
        matches!(self, Returned::Wrapped(_))
    }

    /// Get the wrapping proxy, if any
    pub fn as_proxy(&self) -> Option<&Rc<ApiProxy>> {
        match self {
            Returned::Wrapped(proxy) => Some(proxy),
            Returned::Value(_) => None,
        }
    }

    /// Lower back to a host value (wrappers yield their target object)
    pub fn into_value(self) -> HostValue {
        match self {
            Returned::Value(value) => value,
            Returned::Wrapped(proxy) => proxy.to_value(),
        }
    }
}

/// Proxy over a single host object.
///
/// Construction is free of host calls. The result cache belongs to this
/// instance and is dropped with it.
pub struct ApiProxy {
    target: HostRef,
    class: &'static ProxyClass,
    cache: RefCell<FxHashMap<CallKey, Rc<ApiProxy>>>,
}

impl ApiProxy {
    /// Wrap a host object in the given class
    pub fn new(target: HostRef, class: &'static ProxyClass) -> Rc<Self> {
        Rc::new(Self {
            target,
            class,
            cache: RefCell::new(FxHashMap::default()),
        })
    }

    /// The wrapped host object
    pub fn target(&self) -> &HostRef {
        &self.target
    }

    /// The wrapper class of this proxy
    pub fn class(&self) -> &'static ProxyClass {
        self.class
    }

    /// The wrapped host object as a call argument
    pub fn to_value(&self) -> HostValue {
        HostValue::Object(self.target.clone())
    }

    /// Forward a call to the host and wrap the result if the method is bound.
    ///
    /// Host errors are returned exactly as the host produced them. The host is
    /// invoked on every call, including cache hits.
    pub fn call(&self, method: &str, args: &[HostValue]) -> HostResult<Returned> {
        let raw = self.target.invoke(method, args)?;
        tracing::trace!(
            class = self.class.name,
            method,
            result = raw.type_name(),
            "host call"
        );

        if raw.is_void() {
            return Ok(Returned::Value(raw));
        }

        let Some(binding) = self.class.resolve(method) else {
            return Ok(Returned::Value(raw));
        };

        let target = match raw {
            HostValue::Object(obj) => obj,
            other => {
                return Err(HostError::type_mismatch(
                    binding.class.name,
                    other.type_name(),
                ))
            }
        };

        if !binding.policy.is_cached() {
            tracing::debug!(
                class = self.class.name,
                method,
                wraps = binding.class.name,
                "wrapping factory result"
            );
            return Ok(Returned::Wrapped(ApiProxy::new(target, binding.class)));
        }

        let key = CallKey {
            method: binding.method,
            args: args.into(),
        };
        if let Some(hit) = self.cache.borrow().get(&key) {
            tracing::trace!(class = self.class.name, method, "accessor cache hit");
            return Ok(Returned::Wrapped(hit.clone()));
        }

        tracing::debug!(
            class = self.class.name,
            method,
            wraps = binding.class.name,
            "caching accessor result"
        );
        let proxy = ApiProxy::new(target, binding.class);
        self.cache.borrow_mut().insert(key, proxy.clone());
        Ok(Returned::Wrapped(proxy))
    }

    /// Call and lower the result to a host value.
    ///
    /// Bound methods still go through wrapping and caching; the returned value
    /// is the wrapped proxy's target.
    pub fn call_value(&self, method: &str, args: &[HostValue]) -> HostResult<HostValue> {
        Ok(self.call(method, args)?.into_value())
    }

    /// Call and convert the result into a Rust type
    pub fn call_as<R: FromHost>(&self, method: &str, args: &[HostValue]) -> HostResult<R> {
        R::from_host(self.call_value(method, args)?)
    }

    /// Call a method whose result carries nothing
    pub fn call_void(&self, method: &str, args: &[HostValue]) -> HostResult<()> {
        self.call(method, args).map(|_| ())
    }

    /// Call a bound method and return its result as the typed wrapper `W`.
    ///
    /// Fails with `TypeMismatch` when the result was not wrapped or was
    /// wrapped in a class that does not descend from `W`'s class.
    pub fn call_wrapped<W: Wrapper>(&self, method: &str, args: &[HostValue]) -> HostResult<W> {
        match self.call(method, args)? {
            Returned::Wrapped(proxy) => W::downcast(proxy),
            Returned::Value(value) => Err(HostError::type_mismatch(
                W::class().name,
                value.type_name(),
            )),
        }
    }

    /// Look up a cached accessor result without calling the host
    pub fn cached(&self, method: &str, args: &[HostValue]) -> Option<Rc<ApiProxy>> {
        let binding = self.class.resolve(method)?;
        let key = CallKey {
            method: binding.method,
            args: args.into(),
        };
        self.cache.borrow().get(&key).cloned()
    }

    /// Number of cached accessor results
    pub fn cache_len(&self) -> usize {
        self.cache.borrow().len()
    }
}

impl fmt::Debug for ApiProxy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ApiProxy")
            .field("class", &self.class.name)
            .field("target", &format_args!("{:#x}", object_addr(&self.target)))
            .field("cached", &self.cache_len())
            .finish()
    }
}
