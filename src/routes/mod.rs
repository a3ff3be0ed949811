//! # Routes Module
//!
//! Static resolution rules mapping handler kinds to HTTP verbs, URL
//! templates and applicable before-hooks.
//!
//! | Handler      | Verb   | URL           | Specific hook |
//! |--------------|--------|---------------|---------------|
//! | `DeleteOne`  | DELETE | `{base}/:id`  | `BeforeOne`   |
//! | `DeleteMany` | DELETE | `{base}`      | `BeforeMany`  |
//! | `GetMany`    | GET    | `{base}`      | `BeforeMany`  |
//! | `GetOne`     | GET    | `{base}/:id`  | `BeforeOne`   |
//! | `Patch`      | PATCH  | `{base}/:id`  | `BeforeOne`   |
//! | `Post`       | POST   | `{base}`      | `BeforeMany`  |
//! | `Put`        | PUT    | `{base}/:id`  | `BeforeOne`   |
//!
//! `BeforeAll` wraps every handler and runs before the specific hook.
//!
//! ```rust
//! use restgen::routes::{has_before_type, url_for};
//!
//! assert_eq!(url_for("TodosResource", "GetOne").unwrap(), "todos/:id");
//! assert!(has_before_type("GetOne", "BeforeAll").unwrap());
//! assert!(!has_before_type("GetOne", "BeforeMany").unwrap());
//! ```

mod chain;
mod error;
mod kinds;
mod plan;
mod resolve;


pub use chain::*;
pub use error::*;
pub use kinds::*;
pub use plan::*;
pub use resolve::*;
