//! Check failures.

use std::fmt;

use fsc_diagnostic::{Diagnostic, ErrorCode};
use fsc_ir::{Flags, FormatSpecifier, Span, TypeDescriptor};
use fsc_parse::ParseError;
use fsc_types::{suggest_conversion, Family, MismatchReason};

/// Why a specifier has no argument to read.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum MissingReason {
    /// The resolved position is past the end of the argument list.
    OutOfRange { position: u32, supplied: usize },
    /// A `<` reference with no earlier argument-reading specifier.
    NoPrevious,
}

impl fmt::Display for MissingReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            MissingReason::OutOfRange { position, supplied } => write!(
                f,
                "argument {position} is referenced but only {supplied} {} supplied",
                if *supplied == 1 { "is" } else { "are" }
            ),
            MissingReason::NoPrevious => f.write_str("`<` has no previous argument to refer to"),
        }
    }
}

/// The first failure found in a format string.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum FormatCheckError {
    /// A malformed specifier.
    #[error(transparent)]
    UnrecognizedConversion(#[from] ParseError),

    #[error("missing format argument: {reason}")]
    MissingArgument { span: Span, reason: MissingReason },

    #[error(
        "`{specifier}` cannot format argument {position} of type {actual}: {reason}"
    )]
    TypeMismatch {
        specifier: FormatSpecifier,
        /// 1-based position of the rejected argument.
        position: u32,
        expected: Family,
        actual: TypeDescriptor,
        reason: MismatchReason,
    },

    #[error("{supplied} arguments supplied but only {referenced} used")]
    ExtraArguments {
        /// The whole format string.
        span: Span,
        supplied: usize,
        referenced: u32,
    },
}

impl FormatCheckError {
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::UnrecognizedConversion(err) => err.code(),
            Self::MissingArgument {
                reason: MissingReason::OutOfRange { .. },
                ..
            } => ErrorCode::E1001,
            Self::MissingArgument {
                reason: MissingReason::NoPrevious,
                ..
            } => ErrorCode::E1002,
            Self::ExtraArguments { .. } => ErrorCode::E1003,
            Self::TypeMismatch { reason, .. } => match reason {
                MismatchReason::IncompatibleType => ErrorCode::E2001,
                MismatchReason::ArrayArgument => ErrorCode::E2002,
                MismatchReason::InvalidDescriptor => ErrorCode::E2003,
            },
        }
    }

    /// Location in the format string the failure is attributed to.
    pub fn span(&self) -> Span {
        match self {
            Self::UnrecognizedConversion(err) => err.span(),
            Self::MissingArgument { span, .. } | Self::ExtraArguments { span, .. } => *span,
            Self::TypeMismatch { specifier, .. } => specifier.span,
        }
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        match self {
            Self::UnrecognizedConversion(err) => err.to_diagnostic(),

            Self::MissingArgument { span, reason } => {
                let diag = Diagnostic::error(self.code()).with_message(self.to_string());
                match reason {
                    MissingReason::OutOfRange { position, .. } => diag
                        .with_label(*span, format!("reads argument {position}"))
                        .with_suggestion("pass the missing argument or fix the index"),
                    MissingReason::NoPrevious => diag
                        .with_label(*span, "nothing to refer back to")
                        .with_suggestion("use an explicit index such as `%1$` instead of `%<`"),
                }
            }

            Self::TypeMismatch {
                specifier,
                position,
                expected,
                actual,
                reason,
            } => type_mismatch_diagnostic(self, specifier, *position, *expected, actual, *reason),

            Self::ExtraArguments {
                span,
                supplied,
                referenced,
            } => Diagnostic::error(self.code())
                .with_message(self.to_string())
                .with_label(*span, format!("uses {referenced} of {supplied} arguments"))
                .with_note(format!(
                    "arguments after position {referenced} are never formatted"
                ))
                .with_suggestion("remove the unused arguments or add specifiers for them"),
        }
    }
}

fn type_mismatch_diagnostic(
    err: &FormatCheckError,
    specifier: &FormatSpecifier,
    position: u32,
    expected: Family,
    actual: &TypeDescriptor,
    reason: MismatchReason,
) -> Diagnostic {
    let mut diag = Diagnostic::error(err.code())
        .with_message(err.to_string())
        .with_label(specifier.span, format!("expects a {expected} argument"))
        .with_note(format!("argument {position} is declared as {actual}"))
        .with_note(format!(
            "`%{}` accepts {}",
            specifier.conversion,
            expected.accepted_types()
        ));

    if reason == MismatchReason::ArrayArgument {
        return diag.with_suggestion("format the array with `java.util.Arrays.toString(...)`");
    }

    if let Some(conversion) = suggest_conversion(actual) {
        // Keep the index and width; drop what the new conversion may reject.
        let replacement = FormatSpecifier {
            flags: if specifier.width.is_some() {
                specifier.flags & Flags::LEFT_JUSTIFY
            } else {
                Flags::empty()
            },
            precision: None,
            conversion,
            uppercase: false,
            ..specifier.clone()
        };
        diag = diag.with_maybe_fix(
            format!("use `{replacement}` to format {actual}"),
            specifier.span,
            replacement.to_string(),
        );
    }

    diag
}
