//! Surface Sim - an in-memory host for surface wrappers
//!
//! Builds a graph of [`SimObject`]s from a [`HostFixture`] so wrappers can be
//! driven without a real host. Every call is recorded, accessor members keep
//! returning the same child per argument tuple, factory members return fresh
//! children, and observer members keep their callbacks for [`SimObject::fire`].

#![warn(missing_docs)]

pub mod fixture;
pub mod object;
pub mod runtime;

pub use fixture::{Behaviour, FixtureError, HostFixture, Literal, MethodSpec, ObjectSpec};
pub use object::{CallRecord, SimObject};
pub use runtime::SimRuntime;
