//! Parse errors for malformed specifiers.

use fsc_diagnostic::{Diagnostic, ErrorCode};
use fsc_ir::{Conversion, DateTimeConversion, Span};

/// Describe a character found where a conversion was expected.
fn describe_found(found: &Option<char>) -> String {
    match *found {
        Some(c) => format!("`{}`", c.escape_default()),
        None => "end of string".to_string(),
    }
}

/// What is wrong with a specifier.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseErrorKind {
    /// `%` followed by something that is not a conversion, or by nothing.
    #[error("unknown format conversion: found {}", describe_found(.found))]
    UnknownConversion { found: Option<char> },

    /// `%t`/`%T` followed by an unknown suffix, or by nothing.
    #[error("unknown date/time conversion: found {} after `t`", describe_found(.found))]
    UnknownDateTimeSuffix { found: Option<char> },

    /// `0$`, or an explicit index that does not fit in 32 bits.
    #[error("invalid argument index `{text}$`")]
    InvalidIndex { text: String },

    /// A width or precision that does not fit in 32 bits.
    #[error("number `{text}` is too large")]
    NumberOutOfRange { text: String },

    #[error("flag `{flag}` is repeated")]
    DuplicateFlag { flag: char },

    #[error("flag `{flag}` cannot be used with `%{conversion}`")]
    FlagNotApplicable { flag: char, conversion: Conversion },

    #[error("flags `{first}` and `{second}` cannot be combined")]
    ExclusiveFlags { first: char, second: char },

    #[error("precision is not allowed for `%{conversion}`")]
    PrecisionNotAllowed { conversion: Conversion },

    #[error("flag `{flag}` requires a width")]
    MissingWidth { flag: char },

    #[error("width is not allowed for `%{conversion}`")]
    WidthNotAllowed { conversion: Conversion },
}

impl ParseErrorKind {
    /// Get the error code for this kind.
    pub fn error_code(&self) -> ErrorCode {
        match self {
            Self::UnknownConversion { .. } => ErrorCode::E0001,
            Self::UnknownDateTimeSuffix { .. } => ErrorCode::E0002,
            Self::InvalidIndex { .. } | Self::NumberOutOfRange { .. } => ErrorCode::E0003,
            Self::DuplicateFlag { .. } => ErrorCode::E0004,
            Self::FlagNotApplicable { .. } => ErrorCode::E0005,
            Self::ExclusiveFlags { .. } => ErrorCode::E0006,
            Self::PrecisionNotAllowed { .. } => ErrorCode::E0007,
            Self::MissingWidth { .. } => ErrorCode::E0008,
            Self::WidthNotAllowed { .. } => ErrorCode::E0009,
        }
    }

    /// Short text shown under the offending specifier.
    pub fn label(&self) -> &'static str {
        match self {
            Self::UnknownConversion { .. } => "unknown conversion",
            Self::UnknownDateTimeSuffix { .. } => "unknown date/time suffix",
            Self::InvalidIndex { .. } => "invalid index",
            Self::NumberOutOfRange { .. } => "number too large",
            Self::DuplicateFlag { .. } => "duplicate flag",
            Self::FlagNotApplicable { .. } => "flag not applicable",
            Self::ExclusiveFlags { .. } => "conflicting flags",
            Self::PrecisionNotAllowed { .. } => "precision not allowed",
            Self::MissingWidth { .. } => "width required",
            Self::WidthNotAllowed { .. } => "width not allowed",
        }
    }

    /// Get a hint for fixing this error, if there is a common one.
    pub fn hint(&self) -> Option<&'static str> {
        match self {
            Self::UnknownConversion { found: None } => {
                Some("a literal percent sign is written `%%`")
            }
            Self::UnknownConversion { found: Some(c) }
                if DateTimeConversion::from_char(*c).is_some() =>
            {
                Some("date/time fields are written with the `t` prefix, as in `%tY`")
            }
            Self::InvalidIndex { .. } => Some("argument indices start at `1$`"),
            Self::MissingWidth { .. } => Some("add a width, as in `%-10s`"),
            Self::ExclusiveFlags { .. } => Some("remove one of the flags"),
            _ => None,
        }
    }
}

/// A malformed specifier and where it is.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
#[error("{kind}")]
pub struct ParseError {
    pub kind: ParseErrorKind,
    /// The specifier as far as it was read, `%` included.
    pub span: Span,
}

impl ParseError {
    pub fn new(kind: ParseErrorKind, span: Span) -> Self {
        ParseError { kind, span }
    }

    pub fn code(&self) -> ErrorCode {
        self.kind.error_code()
    }

    pub fn span(&self) -> Span {
        self.span
    }

    /// Convert to a diagnostic for reporting.
    pub fn to_diagnostic(&self) -> Diagnostic {
        let mut diag = Diagnostic::error(self.code())
            .with_message(self.kind.to_string())
            .with_label(self.span, self.kind.label());

        if let Some(hint) = self.kind.hint() {
            diag = diag.with_suggestion(hint);
        }

        match self.kind {
            // `100%` at the end of a string.
            ParseErrorKind::UnknownConversion { found: None } => {
                diag = diag.with_fix("escape the percent sign", self.span, "%%");
            }
            // `%Y` where `%tY` was meant.
            ParseErrorKind::UnknownConversion { found: Some(c) }
                if DateTimeConversion::from_char(c).is_some() =>
            {
                let len = u32::try_from(c.len_utf8()).unwrap_or(1);
                let at = self.span.end.saturating_sub(len);
                diag = diag.with_maybe_fix("add the `t` prefix", Span::point(at), "t");
            }
            _ => {}
        }

        diag
    }
}
