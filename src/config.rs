//! # Configuration Module
//!
//! Generator settings loaded from an optional YAML file, then overridden by
//! environment variables, then by command-line flags.
//!
//! ## Config File
//!
//! ```yaml
//! url_prefix: /api
//! jobs: 4
//! types:
//!   context: RoutingContext
//!   response_writer: ResponseWriter
//!   request: Request
//! ```
//!
//! Every field is optional.
//!
//! ## Environment Variables
//!
//! ### `RESTGEN_URL_PREFIX`
//!
//! Prefix prepended to every planned route. Default: `/api`.
//!
//! ### `RESTGEN_JOBS`
//!
//! Number of threads used for introspection. Accepts a positive integer;
//! anything else is ignored. Default: `1`.
//!
//! ## Usage
//!
//! ```rust
//! use restgen::config::GeneratorConfig;
//!
//! let config = GeneratorConfig::default().with_env();
//! assert!(config.jobs >= 1);
//! ```

use anyhow::Context;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

use crate::routes::DEFAULT_URL_PREFIX;
use crate::source::TypeNames;

pub const ENV_URL_PREFIX: &str = "RESTGEN_URL_PREFIX";
pub const ENV_JOBS: &str = "RESTGEN_JOBS";

/// Settings shared by every subcommand
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GeneratorConfig {
    /// Prefix for planned route paths
    pub url_prefix: String,
    /// Framework type names used when parsing Rust sources
    pub types: TypeNames,
    /// Introspection threads (at least 1)
    pub jobs: usize,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        GeneratorConfig {
            url_prefix: DEFAULT_URL_PREFIX.to_string(),
            types: TypeNames::default(),
            jobs: 1,
        }
    }
}

impl GeneratorConfig {
    /// Load a YAML config file
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_yaml(content: &str) -> anyhow::Result<Self> {
        let config: GeneratorConfig = serde_yaml::from_str(content)?;
        Ok(config.sanitized())
    }

    /// Defaults (or `path`, when given) with environment overrides applied
    pub fn load(path: Option<&Path>) -> anyhow::Result<Self> {
        let base = match path {
            Some(p) => Self::from_file(p)?,
            None => Self::default(),
        };
        Ok(base.with_env())
    }

    /// Apply `RESTGEN_*` environment overrides
    pub fn with_env(self) -> Self {
        self.with_overrides(env::var(ENV_URL_PREFIX).ok(), env::var(ENV_JOBS).ok())
    }

    fn with_overrides(mut self, url_prefix: Option<String>, jobs: Option<String>) -> Self {
        if let Some(prefix) = url_prefix {
            self.url_prefix = prefix;
        }
        if let Some(jobs) = jobs.and_then(|j| j.trim().parse::<usize>().ok()) {
            self.jobs = jobs;
        }
        self.sanitized()
    }

    fn sanitized(mut self) -> Self {
        self.jobs = self.jobs.max(1);
        self
    }
}
