//! # Signature Module
//!
//! Validates callable signatures against the handler and before-hook
//! conventions.
//!
//! A callable is described by [`Signature`]: one [`ParamKind`] per declared
//! parameter (receiver first, for methods) and one [`ReturnKind`] per declared
//! return value. Two parameter shapes are accepted:
//!
//! ```text
//! (RoutingContext, &mut ResponseWriter, &Request)
//! (&mut ResponseWriter, &Request)
//! ```
//!
//! Handlers must return nothing; before-hooks must return a single `bool`.
//!
//! ## Usage
//!
//! ```rust
//! use restgen::signature::{validate_handler, Callable, ParamKind, Signature};
//!
//! let get_one = Callable::Function(Signature::handler(vec![
//!     ParamKind::other("&self"),
//!     ParamKind::ResponseWriter,
//!     ParamKind::RequestPointer,
//! ]));
//! assert!(validate_handler(&get_one, true).is_ok());
//! ```

mod error;
mod types;
mod validate;


pub use error::*;
pub use types::*;
pub use validate::*;
