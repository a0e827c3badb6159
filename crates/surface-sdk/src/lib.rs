//! Surface SDK - typed proxy wrappers over host scripting objects
//!
//! The host runtime hands scripts opaque objects that are callable by method
//! name. This crate layers typed wrappers on top of them:
//!
//! - [`HostObject`] is the host boundary: `invoke(method, args)`.
//! - [`ProxyClass`] describes a wrapper class: parent plus a static method map
//!   saying which methods return objects that must be wrapped, in which class,
//!   and whether results are cached ([`CachePolicy`]).
//! - [`ApiProxy`] forwards calls to the host and wraps results according to
//!   the map, most-derived binding first.
//! - [`Wrapper`] and [`wrapper_class!`] turn a class into a typed Rust façade.
//!
//! # Example
//!
//! ```ignore
//! use surface_sdk::{wrapper_class, Wrapper, HostResult, API_PROXY};
//!
//! wrapper_class! {
//!     pub struct MidiIn: MIDI_IN extends API_PROXY {}
//! }
//!
//! wrapper_class! {
//!     pub struct Host: HOST extends API_PROXY {
//!         "getMidiInPort" => MIDI_IN: Accessor,
//!     }
//! }
//!
//! impl Host {
//!     pub fn midi_in_port(&self, index: i32) -> HostResult<MidiIn> {
//!         self.proxy().call_wrapped("getMidiInPort", &[index.into()])
//!     }
//! }
//! ```

#![warn(missing_docs)]

pub mod callback;
pub mod class;
pub mod convert;
pub mod error;
pub mod host;
pub mod proxy;
pub mod registry;
pub mod value;
pub mod wrapper;

pub use callback::HostCallback;
pub use class::{CachePolicy, MethodBinding, ProxyClass, API_PROXY};
pub use convert::FromHost;
pub use error::{HostError, HostResult};
pub use host::{same_object, HostObject, HostRef};
pub use proxy::{ApiProxy, Returned};
pub use registry::ClassRegistry;
pub use value::HostValue;
pub use wrapper::Wrapper;
