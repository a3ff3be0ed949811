use serde::{Deserialize, Serialize};
use std::fmt;

/// Display name of the routing context type in diagnostics.
pub const CONTEXT_TYPE: &str = "RoutingContext";
/// Display name of the response writer capability in diagnostics.
pub const RESPONSE_WRITER_TYPE: &str = "&mut ResponseWriter";
/// Display name of the request pointer type in diagnostics.
pub const REQUEST_POINTER_TYPE: &str = "&Request";
/// Display name of the boolean return type in diagnostics.
pub const BOOL_TYPE: &str = "bool";

/// Tag describing one declared parameter of a callable
///
/// Produced by the parsing collaborator (see [`crate::source`]) so the
/// validator works on plain data instead of compiler type metadata.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ParamKind {
    /// The per-request routing context, passed by value
    Context,
    /// Mutable access to the response writer capability
    ResponseWriter,
    /// The request, passed behind a pointer (never by value)
    RequestPointer,
    /// Any other type, carrying its display name
    Other(String),
}

impl ParamKind {
    /// Convenience constructor for [`ParamKind::Other`]
    pub fn other(name: impl Into<String>) -> Self {
        ParamKind::Other(name.into())
    }

    /// Human-readable type name used in error messages
    pub fn display_name(&self) -> &str {
        match self {
            ParamKind::Context => CONTEXT_TYPE,
            ParamKind::ResponseWriter => RESPONSE_WRITER_TYPE,
            ParamKind::RequestPointer => REQUEST_POINTER_TYPE,
            ParamKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ParamKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Tag describing one declared return value of a callable
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ReturnKind {
    Bool,
    Other(String),
}

impl ReturnKind {
    pub fn other(name: impl Into<String>) -> Self {
        ReturnKind::Other(name.into())
    }

    pub fn display_name(&self) -> &str {
        match self {
            ReturnKind::Bool => BOOL_TYPE,
            ReturnKind::Other(name) => name,
        }
    }
}

impl fmt::Display for ReturnKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.display_name())
    }
}

/// Declared parameter and return types of a callable
///
/// For methods the implicit receiver is the first entry of `params`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    #[serde(default)]
    pub params: Vec<ParamKind>,
    #[serde(default)]
    pub returns: Vec<ReturnKind>,
}

impl Signature {
    pub fn new(params: Vec<ParamKind>, returns: Vec<ReturnKind>) -> Self {
        Signature { params, returns }
    }

    /// Signature with the given parameters and no return values
    pub fn handler(params: Vec<ParamKind>) -> Self {
        Signature::new(params, Vec::new())
    }

    /// Signature with the given parameters returning a single `bool`
    pub fn hook(params: Vec<ParamKind>) -> Self {
        Signature::new(params, vec![ReturnKind::Bool])
    }

    /// Total declared arity, receiver included
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

/// A member looked up by name on a resource type
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub enum Callable {
    /// A method or function with a known signature
    Function(Signature),
    /// A non-callable member (field, constant, ...) of the named type
    Value { type_name: String },
}

impl Callable {
    pub fn signature(&self) -> Option<&Signature> {
        match self {
            Callable::Function(sig) => Some(sig),
            Callable::Value { .. } => None,
        }
    }
}

impl From<Signature> for Callable {
    fn from(sig: Signature) -> Self {
        Callable::Function(sig)
    }
}
