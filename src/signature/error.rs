use std::fmt;

use super::types::{CONTEXT_TYPE, REQUEST_POINTER_TYPE, RESPONSE_WRITER_TYPE};

/// Parameter slot a [`SignatureError::WrongParamType`] refers to
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExpectedParam {
    /// First parameter of the 3-argument form
    RoutingContext,
    ResponseWriter,
    RequestPointer,
}

impl ExpectedParam {
    pub fn type_name(&self) -> &'static str {
        match self {
            ExpectedParam::RoutingContext => CONTEXT_TYPE,
            ExpectedParam::ResponseWriter => RESPONSE_WRITER_TYPE,
            ExpectedParam::RequestPointer => REQUEST_POINTER_TYPE,
        }
    }
}

/// Reason a callable does not match the handler or before-hook convention
///
/// Positions are 1-based and count only the effective parameters, so a
/// skipped receiver is never position 1.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SignatureError {
    /// The member is not callable at all
    NotAFunction {
        /// Display name of the member's type
        actual: String,
    },
    /// Wrong number of declared return values
    WrongReturnArity { expected: usize, actual: usize },
    /// A before-hook returns a single value that is not `bool`
    WrongReturnType { expected: String, actual: String },
    /// Effective parameter count is neither 2 nor 3
    WrongParamCount { actual: usize },
    /// A parameter slot holds the wrong type
    WrongParamType {
        position: usize,
        expected: ExpectedParam,
        actual: String,
    },
}

impl SignatureError {
    /// Stable machine-readable name of the error kind
    pub fn kind(&self) -> &'static str {
        match self {
            SignatureError::NotAFunction { .. } => "NotAFunction",
            SignatureError::WrongReturnArity { .. } => "WrongReturnArity",
            SignatureError::WrongReturnType { .. } => "WrongReturnType",
            SignatureError::WrongParamCount { .. } => "WrongParamCount",
            SignatureError::WrongParamType { .. } => "WrongParamType",
        }
    }
}

impl fmt::Display for SignatureError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            SignatureError::NotAFunction { actual } => {
                write!(f, "not a function: {}", actual)
            }
            SignatureError::WrongReturnArity { expected, actual } => {
                write!(
                    f,
                    "function should have {} return value(s), not {}",
                    expected, actual
                )
            }
            SignatureError::WrongReturnType { expected, actual } => {
                write!(f, "return value should be {}, not {}", expected, actual)
            }
            SignatureError::WrongParamCount { actual } => {
                write!(f, "wrong number of parameters: {}", actual)
            }
            SignatureError::WrongParamType {
                position,
                expected: ExpectedParam::RoutingContext,
                actual,
            } => write!(
                f,
                "param {} (for 3-argument function) should be {}, not {}",
                position, CONTEXT_TYPE, actual
            ),
            SignatureError::WrongParamType {
                position,
                expected,
                actual,
            } => write!(
                f,
                "param {} should be {}, not {}",
                position,
                expected.type_name(),
                actual
            ),
        }
    }
}

impl std::error::Error for SignatureError {}
