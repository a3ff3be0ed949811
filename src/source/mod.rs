//! # Source Module
//!
//! The parsing collaborator: turns input files into
//! [`RegisteredResource`](crate::resource::RegisteredResource) descriptors.
//!
//! Two inputs are supported:
//!
//! - **Rust source** (`.rs`) - parsed with `syn`. Every top-level struct is a
//!   candidate resource; its methods come from the file's `impl` blocks.
//! - **Manifests** (`.json`, `.yaml`, `.yml`) - descriptor lists produced by
//!   some other tool.
//!
//! Parameter types are tagged by [`TypeNames`]:
//!
//! | Rust type                                    | Tag              |
//! |----------------------------------------------|------------------|
//! | `RoutingContext`                             | `Context`        |
//! | `&mut ResponseWriter`, `&mut dyn ResponseWriter` | `ResponseWriter` |
//! | `&Request`, `&mut Request`, `Box<Request>`   | `RequestPointer` |
//! | anything else                                | `Other(..)`      |

mod classify;
mod discover;
mod manifest;

#[cfg(test)]
mod tests;

pub use classify::{display_type, TypeNames};
pub use discover::*;
pub use manifest::*;
