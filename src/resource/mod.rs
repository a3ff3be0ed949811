//! # Resource Module
//!
//! Introspection of resource types: which recognized handler and hook
//! methods a resource provides, whether their signatures are valid, and the
//! resulting [`ResourceReport`].
//!
//! Absent methods are silently ignored. Present but invalid methods produce
//! a warning in the report instead of being dropped.

mod descriptor;
mod introspect;
mod report;

#[cfg(test)]
mod tests;

pub use descriptor::*;
pub use introspect::*;
pub use report::*;
