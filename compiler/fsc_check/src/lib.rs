//! Static format string checker.
//!
//! Given a printf-style format string and the declared types of the
//! arguments that will be passed with it, [`check`] predicts whether the
//! format call succeeds and, if not, which failure it would hit first.
//!
//! The check runs in two stages, in the order the runtime formatter fails:
//!
//! 1. [`fsc_parse::parse_format`] parses the whole string. A malformed
//!    specifier anywhere wins over every argument problem.
//! 2. Walking the specifiers left to right, [`ScanState`] resolves each
//!    index to a position, which is checked against the argument count,
//!    then the argument's descriptor against the conversion's family.
//!
//! The first failure in stage 2 ends the walk. If none occurs, arguments
//! past the highest referenced position are reported as extra.
//!
//! Every call owns its own [`ScanState`]; the only shared data is the
//! read-only group table in `fsc_types`, so checks may run on any number of
//! threads at once.

mod error;
mod resolve;

use fsc_ir::{Segment, Span, TypeDescriptor};
use fsc_parse::parse_format;
use fsc_types::{check_descriptor, family_of};

pub use error::{FormatCheckError, MissingReason};
pub use resolve::{ResolvedReference, ScanState};

/// Check `format` against the declared types of its arguments.
#[tracing::instrument(level = "debug", skip_all, fields(format = format, arguments = arguments.len()))]
pub fn check(format: &str, arguments: &[TypeDescriptor]) -> Result<(), FormatCheckError> {
    let result = scan(format, arguments);
    match &result {
        Ok(()) => tracing::debug!("format string accepted"),
        Err(err) => tracing::debug!(code = %err.code(), error = %err, "format string rejected"),
    }
    result
}

/// Like [`check`], with arguments given as raw descriptor signatures.
pub fn check_signatures(format: &str, signatures: &[&str]) -> Result<(), FormatCheckError> {
    let arguments: Vec<TypeDescriptor> = signatures
        .iter()
        .map(|signature| TypeDescriptor::new(*signature))
        .collect();
    check(format, &arguments)
}

fn scan(format: &str, arguments: &[TypeDescriptor]) -> Result<(), FormatCheckError> {
    let segments = parse_format(format)?;
    let mut state = ScanState::new();
    for spec in segments.iter().filter_map(Segment::as_specifier) {
        let Some(resolved) = state.resolve(spec)? else {
            continue;
        };
        let Some(expected) = family_of(spec.conversion) else {
            continue;
        };

        let position = resolved.position;
        let actual = usize::try_from(position - 1)
            .ok()
            .and_then(|index| arguments.get(index))
            .ok_or_else(|| FormatCheckError::MissingArgument {
                span: spec.span,
                reason: MissingReason::OutOfRange {
                    position,
                    supplied: arguments.len(),
                },
            })?;

        if let Err(reason) = check_descriptor(actual, expected) {
            return Err(FormatCheckError::TypeMismatch {
                specifier: spec.clone(),
                position,
                expected,
                actual: actual.clone(),
                reason,
            });
        }
    }

    let referenced = state.max_referenced();
    if usize::try_from(referenced).is_ok_and(|referenced| arguments.len() > referenced) {
        return Err(FormatCheckError::ExtraArguments {
            span: Span::new(0, u32::try_from(format.len()).unwrap_or(u32::MAX)),
            supplied: arguments.len(),
            referenced,
        });
    }

    Ok(())
}
