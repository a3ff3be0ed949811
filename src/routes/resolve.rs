use http::Method;

use super::error::RouteError;
use super::kinds::{HandlerKind, HookKind};
use crate::resource::ResourceReport;

/// Suffix stripped from resource type names when deriving the base path
pub const RESOURCE_SUFFIX: &str = "Resource";

impl HandlerKind {
    /// HTTP verb the handler is registered under
    pub fn http_method(&self) -> Method {
        match self {
            HandlerKind::DeleteOne | HandlerKind::DeleteMany => Method::DELETE,
            HandlerKind::GetMany | HandlerKind::GetOne => Method::GET,
            HandlerKind::Patch => Method::PATCH,
            HandlerKind::Post => Method::POST,
            HandlerKind::Put => Method::PUT,
        }
    }

    /// Name of the multiplexer registration function (`Get`, `Delete`, ...)
    pub fn register_func(&self) -> &'static str {
        match self {
            HandlerKind::DeleteOne | HandlerKind::DeleteMany => "Delete",
            HandlerKind::GetMany | HandlerKind::GetOne => "Get",
            HandlerKind::Patch => "Patch",
            HandlerKind::Post => "Post",
            HandlerKind::Put => "Put",
        }
    }

    /// URL template relative to the resource base path
    pub fn url_template(&self) -> &'static str {
        match self {
            HandlerKind::DeleteMany | HandlerKind::GetMany | HandlerKind::Post => "{base}",
            HandlerKind::DeleteOne
            | HandlerKind::GetOne
            | HandlerKind::Patch
            | HandlerKind::Put => "{base}/:id",
        }
    }

    /// Whether the handler addresses a single item (`/:id` routes)
    pub fn is_single(&self) -> bool {
        self.specific_hook() == HookKind::BeforeOne
    }

    /// The kind-specific hook for this handler
    pub fn specific_hook(&self) -> HookKind {
        match self {
            HandlerKind::DeleteOne
            | HandlerKind::GetOne
            | HandlerKind::Patch
            | HandlerKind::Put => HookKind::BeforeOne,
            HandlerKind::DeleteMany | HandlerKind::GetMany | HandlerKind::Post => {
                HookKind::BeforeMany
            }
        }
    }

    /// Whether `hook` wraps this handler. `BeforeAll` wraps everything.
    pub fn applies(&self, hook: HookKind) -> bool {
        hook == HookKind::BeforeAll || self.specific_hook() == hook
    }

    /// URL for this handler on a resource type, e.g. `todos/:id`
    pub fn url(&self, struct_name: &str) -> String {
        self.url_template().replace("{base}", &base_path(struct_name))
    }
}

/// Derive the resource base path from its type name
///
/// Strips one trailing `Resource` (case-sensitive) and lower-cases the rest:
/// `TodosResource` becomes `todos`.
pub fn base_path(struct_name: &str) -> String {
    struct_name
        .strip_suffix(RESOURCE_SUFFIX)
        .unwrap_or(struct_name)
        .to_lowercase()
}

/// Registration function name for a handler method name
pub fn register_func_for(func_name: &str) -> Result<&'static str, RouteError> {
    let kind: HandlerKind = func_name.parse()?;
    Ok(kind.register_func())
}

/// URL for the given resource / handler pair
pub fn url_for(struct_name: &str, func_name: &str) -> Result<String, RouteError> {
    let kind: HandlerKind = func_name.parse()?;
    Ok(kind.url(struct_name))
}

/// Whether the handler named `func_name` runs the hook named `before_type`
///
/// An unrecognized hook name never applies. An unrecognized handler name is
/// an error, even for `BeforeAll`.
pub fn has_before_type(func_name: &str, before_type: &str) -> Result<bool, RouteError> {
    let kind: HandlerKind = func_name.parse()?;
    Ok(before_type
        .parse::<HookKind>()
        .is_ok_and(|hook| kind.applies(hook)))
}

/// Hooks wrapping `kind` on the reported resource, outermost first
///
/// Only hooks the resource actually provides (and that passed validation)
/// are included. `BeforeAll` always comes before the kind-specific hook, so
/// a rejecting `BeforeAll` short-circuits the rest of the chain.
pub fn hook_chain(kind: HandlerKind, report: &ResourceReport) -> Vec<HookKind> {
    [HookKind::BeforeAll, kind.specific_hook()]
        .into_iter()
        .filter(|hook| report.has_hook(*hook))
        .collect()
}
