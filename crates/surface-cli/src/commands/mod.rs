//! CLI command implementations.

pub mod audit;
pub mod classes;
pub mod walk;
