//! Parsed conversion specifiers.
//!
//! A format string is a sequence of [`Segment`]s: literal runs, which carry
//! no argument semantics, and [`FormatSpecifier`]s. Specifiers are produced
//! by the parser and never mutated afterwards.

use std::fmt;

use crate::{Conversion, Flags, Span};

/// How a specifier names its argument.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum IndexRef {
    /// `n$`: the 1-based position `n`. Always at least 1.
    Explicit(u32),
    /// `<`: the position used by the previous specifier.
    Relative,
    /// No index token: the next sequential position.
    Implicit,
}

/// One `%...` unit of a format string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub struct FormatSpecifier {
    pub index: IndexRef,
    pub flags: Flags,
    pub width: Option<u32>,
    pub precision: Option<u32>,
    pub conversion: Conversion,
    /// Whether the conversion character was written in uppercase.
    pub uppercase: bool,
    /// Location of the whole specifier, `%` included.
    pub span: Span,
}

impl FormatSpecifier {
    /// Check if this specifier reads an argument position.
    pub fn consumes_argument(&self) -> bool {
        self.conversion.consumes_argument()
    }
}

/// Renders the specifier in canonical form (`%2$-8.3f`, `%<tY`).
impl fmt::Display for FormatSpecifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("%")?;
        match self.index {
            IndexRef::Explicit(n) => write!(f, "{n}$")?,
            IndexRef::Relative => f.write_str("<")?,
            IndexRef::Implicit => {}
        }
        write!(f, "{}", self.flags)?;
        if let Some(width) = self.width {
            write!(f, "{width}")?;
        }
        if let Some(precision) = self.precision {
            write!(f, ".{precision}")?;
        }
        let text = self.conversion.to_string();
        let mut chars = text.chars();
        if let Some(first) = chars.next() {
            if self.uppercase {
                write!(f, "{}", first.to_ascii_uppercase())?;
            } else {
                write!(f, "{first}")?;
            }
        }
        f.write_str(chars.as_str())
    }
}

/// One element of a parsed format string.
#[derive(Clone, Debug, PartialEq, Eq, Hash)]
pub enum Segment {
    /// A run of literal text.
    Literal(Span),
    /// A conversion specifier, including `%%` and `%n`.
    Specifier(FormatSpecifier),
}

impl Segment {
    /// Location of this segment in the format string.
    pub fn span(&self) -> Span {
        match self {
            Segment::Literal(span) => *span,
            Segment::Specifier(spec) => spec.span,
        }
    }

    /// The specifier, if this segment is one.
    pub fn as_specifier(&self) -> Option<&FormatSpecifier> {
        match self {
            Segment::Literal(_) => None,
            Segment::Specifier(spec) => Some(spec),
        }
    }
}
