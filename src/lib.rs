//! # restgen
//!
//! **restgen** is the introspection core of a REST route generator. Given a
//! set of resource types, it finds which handler and before-hook methods
//! each one provides, checks their signatures, and produces a serializable
//! report plus a resolved route plan for a code emitter.
//!
//! ## Overview
//!
//! A resource is a type such as `TodosResource` whose methods follow a
//! naming convention. Seven handler names are recognized:
//!
//! | Handler      | Verb   | URL           |
//! |--------------|--------|---------------|
//! | `GetMany`    | GET    | `todos`       |
//! | `GetOne`     | GET    | `todos/:id`   |
//! | `Post`       | POST   | `todos`       |
//! | `Put`        | PUT    | `todos/:id`   |
//! | `Patch`      | PATCH  | `todos/:id`   |
//! | `DeleteOne`  | DELETE | `todos/:id`   |
//! | `DeleteMany` | DELETE | `todos`       |
//!
//! Handlers take `(RoutingContext, &mut ResponseWriter, &Request)` or just
//! `(&mut ResponseWriter, &Request)`. Hooks (`BeforeOne`, `BeforeMany`,
//! `BeforeAll`) take the same parameters and return `bool`; returning
//! `false` stops the request.
//!
//! ## Architecture
//!
//! - **[`signature`]** - Parameter/return tags and the signature validator
//! - **[`resource`]** - Per-resource introspection into a [`ResourceReport`]
//! - **[`registry`]** - Ordered registration and report aggregation
//! - **[`routes`]** - Verb, URL and hook-chain resolution; route planning
//! - **[`source`]** - Resource discovery from Rust sources (`syn`) or manifests
//! - **[`config`]** - YAML config file with `RESTGEN_*` overrides
//! - **[`logging`]** - `tracing` subscriber setup
//! - **[`cli`]** - The `restgen` command-line front end
//!
//! ### Flow
//!
//! ```text
//! source file ──discover──▶ [RegisteredResource] ──registry──▶ GatherReport
//!                                                                 │
//!                                                   plan_routes ◀─┘
//!                                                        │
//!                                                        ▼
//!                                                 [ResourcePlan]
//! ```
//!
//! ## Quick Start
//!
//! ```rust
//! use restgen::{ParamKind, ResourceDescriptor, ResourceRegistry, Signature};
//!
//! let mut registry = ResourceRegistry::new();
//! registry.register(
//!     "TodosResource",
//!     ResourceDescriptor::new().with_method(
//!         "GetOne",
//!         Signature::handler(vec![
//!             ParamKind::other("&self"),
//!             ParamKind::ResponseWriter,
//!             ParamKind::RequestPointer,
//!         ]),
//!     ),
//! );
//!
//! let report = registry.run();
//! let todos = &report.reports()[0];
//! assert_eq!(todos.handler_summary(), "GetOne/2");
//! assert!(todos.warnings.is_empty());
//!
//! let plan = restgen::plan_routes(report.reports(), "/api").unwrap();
//! assert_eq!(plan[0].routes[0].path, "/api/todos/:id");
//! ```

pub mod cli;
pub mod config;
pub mod logging;
pub mod registry;
pub mod resource;
pub mod routes;
pub mod signature;
pub mod source;

pub use config::GeneratorConfig;
pub use registry::{GatherReport, ResourceRegistry};
pub use resource::{
    introspect, HandlerRecord, RegisteredResource, ResourceDescriptor, ResourceReport,
};
pub use routes::{
    has_before_type, plan_routes, register_func_for, url_for, HandlerKind, HookKind, PlannedRoute,
    ResourcePlan, RouteError,
};
pub use signature::{Callable, ParamKind, ReturnKind, Signature, SignatureError};
pub use source::{discover_resources, load_input, load_manifest, DiscoveredFile, TypeNames};
