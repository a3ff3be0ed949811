//! # CLI Module
//!
//! Command-line front end for the `restgen` binary.
//!
//! ## Commands
//!
//! ### `gather`
//!
//! Introspect every resource in a Rust source file (or a JSON/YAML
//! descriptor manifest) and write the gather report:
//!
//! ```bash
//! restgen gather src/todos.rs            # writes src/todos_resources.json
//! restgen gather src/todos.rs --stdout --format yaml
//! ```
//!
//! ### `routes`
//!
//! Print the resolved routes, verbs and hook chains:
//!
//! ```bash
//! restgen routes src/todos.rs --prefix /v1
//! ```
//!
//! ### `check`
//!
//! List signature warnings; with `--deny-warnings` the command fails when
//! any are found, which suits CI.
//!
//! ```bash
//! restgen check src/todos.rs --deny-warnings
//! ```
//!
//! All commands accept `--config <FILE>`; see [`crate::config`].

mod commands;


pub use commands::{default_output_path, run, run_cli, verbose_summary, Cli, Commands, OutputFormat};
