//! Typed wrappers over `ApiProxy`
//!
//! Every declared interface is a newtype over `Rc<ApiProxy>` implementing
//! `Wrapper`. The `wrapper_class!` macro declares the struct, its static class
//! descriptor and method map, and the trait plumbing in one place:
//!
//! ```ignore
//! wrapper_class! {
//!     /// A MIDI input port.
//!     pub struct MidiIn: MIDI_IN extends API_PROXY {
//!         "createNoteInput" => NOTE_INPUT: Factory,
//!     }
//! }
//! ```

use std::rc::Rc;

use crate::class::ProxyClass;
use crate::error::{HostError, HostResult};
use crate::host::HostRef;
use crate::proxy::{ApiProxy, Returned};
use crate::value::HostValue;

/// A typed façade over a proxy of a known wrapper class.
pub trait Wrapper: Sized {
    /// Class descriptor of this wrapper type
    fn class() -> &'static ProxyClass;

    /// Build the façade from a proxy without checking its class
    fn from_proxy(proxy: Rc<ApiProxy>) -> Self;

    /// The underlying proxy
    fn proxy(&self) -> &Rc<ApiProxy>;

    /// Wrap a host object directly (used for root objects)
    fn wrap(target: HostRef) -> Self {
        Self::from_proxy(ApiProxy::new(target, Self::class()))
    }

    /// Build the façade from a proxy whose class is `Self::class()` or a subclass
    fn downcast(proxy: Rc<ApiProxy>) -> HostResult<Self> {
        if proxy.class().is_subclass_of(Self::class()) {
            Ok(Self::from_proxy(proxy))
        } else {
            Err(HostError::type_mismatch(
                Self::class().name,
                proxy.class().name,
            ))
        }
    }

    /// The wrapped host object
    fn target(&self) -> &HostRef {
        self.proxy().target()
    }

    /// Check if both façades share one proxy instance
    fn same_as(&self, other: &impl Wrapper) -> bool {
        Rc::ptr_eq(self.proxy(), other.proxy())
    }

    /// Forward an arbitrary call through the proxy
    fn call(&self, method: &str, args: &[HostValue]) -> HostResult<Returned> {
        self.proxy().call(method, args)
    }
}

/// Declare a wrapper type, its class descriptor and its method map.
///
/// `$class` names the generated `static` descriptor; `$parent` is the parent
/// class's descriptor. Each binding names the target class descriptor and a
/// `CachePolicy` variant.
#[macro_export]
macro_rules! wrapper_class {
    (
        $(#[$meta:meta])*
        $vis:vis struct $name:ident : $class:ident extends $parent:path {
            $( $method:literal => $target:path : $policy:ident ),* $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone)]
        $vis struct $name(::std::rc::Rc<$crate::ApiProxy>);

        #[doc = concat!("Class descriptor and method map of [`", stringify!($name), "`].")]
        $vis static $class: $crate::ProxyClass = $crate::ProxyClass {
            name: stringify!($name),
            parent: Some(&$parent),
            bindings: &[
                $(
                    $crate::MethodBinding {
                        method: $method,
                        class: &$target,
                        policy: $crate::CachePolicy::$policy,
                    },
                )*
            ],
        };

        impl $crate::Wrapper for $name {
            fn class() -> &'static $crate::ProxyClass {
                &$class
            }

            fn from_proxy(proxy: ::std::rc::Rc<$crate::ApiProxy>) -> Self {
                Self(proxy)
            }

            fn proxy(&self) -> &::std::rc::Rc<$crate::ApiProxy> {
                &self.0
            }
        }

        impl PartialEq for $name {
            fn eq(&self, other: &Self) -> bool {
                ::std::rc::Rc::ptr_eq(&self.0, &other.0)
            }
        }

        impl Eq for $name {}

        impl ::std::fmt::Debug for $name {
            fn fmt(&self, f: &mut ::std::fmt::Formatter<'_>) -> ::std::fmt::Result {
                write!(f, "{}({:?})", stringify!($name), self.0)
            }
        }

        impl From<&$name> for $crate::HostValue {
            fn from(wrapper: &$name) -> Self {
                wrapper.0.to_value()
            }
        }
    };
}
