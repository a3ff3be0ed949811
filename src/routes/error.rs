use std::fmt;

/// Lookup failure in the route/hook resolution tables
///
/// `UnknownHandlerKind` means a handler name outside the recognized set
/// reached the resolution layer. With a correctly maintained recognition
/// list this is unreachable, so callers treat it as fatal.
/// `UnknownHookKind` only comes from parsing a [`super::HookKind`], e.g.
/// when deserializing a route plan.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouteError {
    /// Handler name not present in the resolution table
    UnknownHandlerKind(String),
    /// Hook name not present in the resolution table
    UnknownHookKind(String),
}

impl fmt::Display for RouteError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RouteError::UnknownHandlerKind(name) => {
                write!(f, "unknown function name: {}", name)
            }
            RouteError::UnknownHookKind(name) => {
                write!(f, "unknown before function: {}", name)
            }
        }
    }
}

impl std::error::Error for RouteError {}
