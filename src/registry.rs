//! # Registry Module
//!
//! Collects resources in registration order and aggregates their
//! introspection reports into a [`GatherReport`], the structure handed to
//! the code emission stage.
//!
//! Registration order is the only order that matters. Introspection may fan
//! out across a thread pool, but reports always leave this module in
//! registration order.

use anyhow::Context;
use rayon::prelude::*;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use crate::resource::{introspect, RegisteredResource, ResourceDescriptor, ResourceReport};

/// Ordered set of resources awaiting introspection
#[derive(Debug, Default)]
pub struct ResourceRegistry {
    registered: Vec<RegisteredResource>,
}

impl ResourceRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a resource under its display name.
    ///
    /// Duplicate names are kept; each registration yields its own report.
    pub fn register(&mut self, name: impl Into<String>, descriptor: ResourceDescriptor) {
        let name = name.into();
        if self.registered.iter().any(|r| r.name == name) {
            warn!(resource = %name, "resource registered more than once");
        }
        debug!(resource = %name, methods = descriptor.methods.len(), "registered resource");
        self.registered.push(RegisteredResource::new(name, descriptor));
    }

    pub fn extend(&mut self, resources: impl IntoIterator<Item = RegisteredResource>) {
        for r in resources {
            self.register(r.name, r.descriptor);
        }
    }

    pub fn len(&self) -> usize {
        self.registered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.registered.is_empty()
    }

    pub fn resources(&self) -> &[RegisteredResource] {
        &self.registered
    }

    /// Introspect every resource sequentially
    pub fn run(&self) -> GatherReport {
        self.run_with_jobs(1)
    }

    /// Introspect using up to `jobs` threads; output order is unaffected
    pub fn run_with_jobs(&self, jobs: usize) -> GatherReport {
        let reports = introspect_all(&self.registered, jobs);
        info!(
            resources = reports.len(),
            warnings = reports.iter().map(|r| r.warnings.len()).sum::<usize>(),
            "introspection complete"
        );
        aggregate(reports)
    }
}

/// Introspect `resources`, returning reports in the same order.
///
/// With `jobs > 1` the work runs on a dedicated rayon pool of that size.
/// The indexed collect keeps each report at its registration index.
pub fn introspect_all(resources: &[RegisteredResource], jobs: usize) -> Vec<ResourceReport> {
    let sequential = || -> Vec<ResourceReport> {
        resources
            .iter()
            .map(|r| introspect(&r.name, &r.descriptor))
            .collect()
    };
    if jobs <= 1 || resources.len() < 2 {
        return sequential();
    }

    match rayon::ThreadPoolBuilder::new().num_threads(jobs).build() {
        Ok(pool) => pool.install(|| {
            resources
                .par_iter()
                .map(|r| introspect(&r.name, &r.descriptor))
                .collect()
        }),
        Err(err) => {
            warn!(jobs, error = %err, "failed to build introspection pool, running sequentially");
            sequential()
        }
    }
}

/// Wrap reports for serialization. Purely structural: no validation.
pub fn aggregate(reports: Vec<ResourceReport>) -> GatherReport {
    GatherReport(reports)
}

/// Ordered list of resource reports, serialized as a bare list
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct GatherReport(pub Vec<ResourceReport>);

impl GatherReport {
    pub fn reports(&self) -> &[ResourceReport] {
        &self.0
    }

    pub fn warning_count(&self) -> usize {
        self.0.iter().map(|r| r.warnings.len()).sum()
    }

    pub fn to_json(&self) -> anyhow::Result<String> {
        serde_json::to_string_pretty(self).context("Failed to serialize report as JSON")
    }

    pub fn to_yaml(&self) -> anyhow::Result<String> {
        serde_yaml::to_string(self).context("Failed to serialize report as YAML")
    }

    pub fn from_json(s: &str) -> anyhow::Result<Self> {
        serde_json::from_str(s).context("Failed to parse JSON report")
    }

    pub fn from_yaml(s: &str) -> anyhow::Result<Self> {
        serde_yaml::from_str(s).context("Failed to parse YAML report")
    }
}
