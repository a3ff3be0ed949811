use tracing::{debug, warn};

use super::descriptor::ResourceDescriptor;
use super::report::{HandlerRecord, ResourceReport};
use crate::routes::{HandlerKind, HookKind};
use crate::signature::{validate_before_hook, validate_handler, SignatureError};

/// Build the report for one resource.
///
/// Every recognized name ends up in exactly one state:
///
/// - absent: ignored, no warning
/// - present and valid: recorded as a handler (or hook flag set)
/// - present and invalid: a warning, never a record
///
/// Handlers are recorded in [`HandlerKind::ALL`] order regardless of the
/// order the descriptor lists them in. Methods always carry their receiver,
/// so validation skips the first parameter.
pub fn introspect(name: &str, descriptor: &ResourceDescriptor) -> ResourceReport {
    let mut report = ResourceReport::new(name);

    for kind in HandlerKind::ALL {
        let Some(callable) = descriptor.get(kind.name()) else {
            continue;
        };
        match validate_handler(callable, true) {
            Ok(()) => {
                // Validation guarantees a function with the receiver present.
                let params = callable
                    .signature()
                    .map(|sig| sig.arity().saturating_sub(1))
                    .unwrap_or_default();
                debug!(resource = name, handler = %kind, params, "found handler");
                report.handlers.push(HandlerRecord::new(kind.name(), params));
            }
            Err(err) => push_warning(&mut report, kind.name(), &err),
        }
    }

    for hook in HookKind::ALL {
        let present = match descriptor.get(hook.name()) {
            None => false,
            Some(callable) => match validate_before_hook(callable, true) {
                Ok(()) => {
                    debug!(resource = name, hook = %hook, "found before hook");
                    true
                }
                Err(err) => {
                    push_warning(&mut report, hook.name(), &err);
                    false
                }
            },
        };
        report.set_hook(hook, present);
    }

    report
}

fn push_warning(report: &mut ResourceReport, method: &str, err: &SignatureError) {
    warn!(
        resource = %report.struct_name,
        method,
        kind = err.kind(),
        "method is present but invalid: {}",
        err
    );
    report.warnings.push(format!(
        "method '{}' is present but invalid: {}",
        method, err
    ));
}
