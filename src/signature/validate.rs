use super::error::{ExpectedParam, SignatureError};
use super::types::{Callable, ParamKind, ReturnKind, Signature, BOOL_TYPE};

/// What a callable must return to pass validation
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ReturnRule {
    /// Handlers return nothing
    Nothing,
    /// Before-hooks return exactly one `bool`
    SingleBool,
}

/// Check that `callable` is a valid route handler.
///
/// Accepted shapes (after dropping the receiver when `skip_receiver` is set):
///
/// ```text
/// (RoutingContext, &mut ResponseWriter, &Request)
/// (&mut ResponseWriter, &Request)
/// ```
///
/// with zero return values.
pub fn validate_handler(callable: &Callable, skip_receiver: bool) -> Result<(), SignatureError> {
    match callable {
        Callable::Function(sig) => sig.validate_handler(skip_receiver),
        Callable::Value { type_name } => Err(SignatureError::NotAFunction {
            actual: type_name.clone(),
        }),
    }
}

/// Check that `callable` is a valid before-hook: same parameter shapes as a
/// handler, returning exactly one `bool`.
pub fn validate_before_hook(
    callable: &Callable,
    skip_receiver: bool,
) -> Result<(), SignatureError> {
    match callable {
        Callable::Function(sig) => sig.validate_before_hook(skip_receiver),
        Callable::Value { type_name } => Err(SignatureError::NotAFunction {
            actual: type_name.clone(),
        }),
    }
}

impl Signature {
    /// See [`validate_handler`]
    pub fn validate_handler(&self, skip_receiver: bool) -> Result<(), SignatureError> {
        check(self, skip_receiver, ReturnRule::Nothing)
    }

    /// See [`validate_before_hook`]
    pub fn validate_before_hook(&self, skip_receiver: bool) -> Result<(), SignatureError> {
        check(self, skip_receiver, ReturnRule::SingleBool)
    }

    /// Parameters left once the receiver is dropped
    pub fn effective_params(&self, skip_receiver: bool) -> &[ParamKind] {
        if skip_receiver {
            self.params.get(1..).unwrap_or(&[])
        } else {
            &self.params
        }
    }
}

fn check(sig: &Signature, skip_receiver: bool, rule: ReturnRule) -> Result<(), SignatureError> {
    check_returns(&sig.returns, rule)?;

    let params = sig.effective_params(skip_receiver);
    let rest = match params {
        [first, rest @ ..] if params.len() == 3 => {
            if *first != ParamKind::Context {
                return Err(SignatureError::WrongParamType {
                    position: 1,
                    expected: ExpectedParam::RoutingContext,
                    actual: first.display_name().to_string(),
                });
            }
            rest
        }
        _ if params.len() == 2 => params,
        _ => {
            return Err(SignatureError::WrongParamCount {
                actual: params.len(),
            })
        }
    };

    // `rest` is the trailing (writer, request) pair in both shapes.
    let offset = params.len() - rest.len();
    let [writer, request] = rest else {
        return Err(SignatureError::WrongParamCount {
            actual: params.len(),
        });
    };

    if *writer != ParamKind::ResponseWriter {
        return Err(SignatureError::WrongParamType {
            position: offset + 1,
            expected: ExpectedParam::ResponseWriter,
            actual: writer.display_name().to_string(),
        });
    }
    if *request != ParamKind::RequestPointer {
        return Err(SignatureError::WrongParamType {
            position: offset + 2,
            expected: ExpectedParam::RequestPointer,
            actual: request.display_name().to_string(),
        });
    }

    Ok(())
}

fn check_returns(returns: &[ReturnKind], rule: ReturnRule) -> Result<(), SignatureError> {
    match rule {
        ReturnRule::Nothing => {
            if !returns.is_empty() {
                return Err(SignatureError::WrongReturnArity {
                    expected: 0,
                    actual: returns.len(),
                });
            }
        }
        ReturnRule::SingleBool => match returns {
            [ReturnKind::Bool] => {}
            [other] => {
                return Err(SignatureError::WrongReturnType {
                    expected: BOOL_TYPE.to_string(),
                    actual: other.display_name().to_string(),
                })
            }
            _ => {
                return Err(SignatureError::WrongReturnArity {
                    expected: 1,
                    actual: returns.len(),
                })
            }
        },
    }
    Ok(())
}
