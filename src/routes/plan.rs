use http::Method;
use serde::{Deserialize, Serialize};
use tracing::debug;

use super::error::RouteError;
use super::kinds::{HandlerKind, HookKind};
use super::resolve::{base_path, hook_chain};
use crate::resource::ResourceReport;

/// Default URL prefix for generated routes
pub const DEFAULT_URL_PREFIX: &str = "/api";

/// One resolved route: everything the code emitter needs for a handler
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlannedRoute {
    pub handler: HandlerKind,
    #[serde(with = "method_serde")]
    pub method: Method,
    /// Full path including the URL prefix, e.g. `/api/todos/:id`
    pub path: String,
    /// Handler parameter count, receiver excluded (2 or 3)
    pub params: usize,
    /// Hooks wrapping the handler, outermost first
    pub hooks: Vec<HookKind>,
}

/// Routes for a single resource, in recognition order
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ResourcePlan {
    pub resource: String,
    pub base: String,
    pub routes: Vec<PlannedRoute>,
}

/// Resolve every reported handler into a route.
///
/// Resource order and handler order are taken from the reports unchanged.
///
/// # Errors
///
/// Returns [`RouteError::UnknownHandlerKind`] if a report names a handler
/// outside the recognized set. That only happens when reports were produced
/// by something other than this crate's introspector.
pub fn plan_routes(
    reports: &[ResourceReport],
    prefix: &str,
) -> Result<Vec<ResourcePlan>, RouteError> {
    let prefix = normalize_prefix(prefix);
    reports
        .iter()
        .map(|report| plan_resource(report, &prefix))
        .collect()
}

fn plan_resource(report: &ResourceReport, prefix: &str) -> Result<ResourcePlan, RouteError> {
    let mut routes = Vec::with_capacity(report.handlers.len());
    for handler in &report.handlers {
        let kind: HandlerKind = handler.name.parse()?;
        let path = format!("{}/{}", prefix, kind.url(&report.struct_name));
        debug!(
            resource = %report.struct_name,
            handler = %kind,
            method = %kind.http_method(),
            path = %path,
            "planned route"
        );
        routes.push(PlannedRoute {
            handler: kind,
            method: kind.http_method(),
            path,
            params: handler.params,
            hooks: hook_chain(kind, report),
        });
    }
    Ok(ResourcePlan {
        resource: report.struct_name.clone(),
        base: base_path(&report.struct_name),
        routes,
    })
}

/// Trim trailing slashes; an empty or `/` prefix becomes empty so paths
/// still start with exactly one `/`.
fn normalize_prefix(prefix: &str) -> String {
    let trimmed = prefix.trim_end_matches('/');
    if trimmed.is_empty() || trimmed.starts_with('/') {
        trimmed.to_string()
    } else {
        format!("/{}", trimmed)
    }
}

mod method_serde {
    use http::Method;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(method: &Method, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(method.as_str())
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Method, D::Error> {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}
