//! Format string parser.
//!
//! Scans a printf-style format string left to right and yields its
//! [`Segment`]s: literal runs and `%` specifiers. Each specifier is
//! decomposed into argument index, flags, width, precision and conversion,
//! then checked against the rules of its conversion.
//!
//! Parsing is lazy. [`FormatParser`] is an iterator that stops for good at
//! the first malformed specifier, so a caller checking arguments as it goes
//! never sees anything past the first failure.
//!
//! Grammar of one specifier:
//!
//! ```text
//! '%' [digits '$'] [flags | '<']* [digits] ['.' digits] conversion
//! conversion := 'b' | 'B' | 'h' | 'H' | 's' | 'S' | 'c' | 'C' | 'd' | 'o'
//!             | 'x' | 'X' | 'e' | 'E' | 'f' | 'g' | 'G' | 'a' | 'A'
//!             | ('t' | 'T') suffix | '%' | 'n'
//! ```

mod cursor;
mod error;
mod validate;

use std::iter::FusedIterator;

use fsc_ir::{Conversion, DateTimeConversion, Flags, FormatSpecifier, IndexRef, Segment};

use crate::cursor::Cursor;
use crate::validate::validate_specifier;

pub use error::{ParseError, ParseErrorKind};

/// Lazy parser over a format string.
///
/// Yields `Ok(segment)` for each literal run and specifier. After the first
/// `Err`, the iterator is exhausted.
#[derive(Clone, Debug)]
pub struct FormatParser<'a> {
    cursor: Cursor<'a>,
    failed: bool,
}

impl<'a> FormatParser<'a> {
    pub fn new(source: &'a str) -> Self {
        FormatParser {
            cursor: Cursor::new(source),
            failed: false,
        }
    }

    fn parse_specifier(&mut self) -> Result<FormatSpecifier, ParseError> {
        let start = self.cursor.pos();
        self.cursor.bump(); // '%'

        let mut index = self.parse_explicit_index(start)?;
        let flags = self.parse_flags(start, &mut index)?;
        let width = self.parse_number(start)?;
        let precision = if self.cursor.peek() == Some('.')
            && self.cursor.peek_second().is_some_and(|c| c.is_ascii_digit())
        {
            self.cursor.bump();
            self.parse_number(start)?
        } else {
            None
        };
        let (conversion, uppercase) = self.parse_conversion(start)?;

        let spec = FormatSpecifier {
            index,
            flags,
            width,
            precision,
            conversion,
            uppercase,
            span: self.cursor.span_from(start),
        };
        validate_specifier(&spec).map_err(|kind| ParseError::new(kind, spec.span))?;

        tracing::trace!(specifier = %spec, span = ?spec.span, "parsed specifier");
        Ok(spec)
    }

    /// `digits '$'`, or nothing. Digits without `$` are left for the width.
    fn parse_explicit_index(&mut self, start: usize) -> Result<IndexRef, ParseError> {
        let checkpoint = self.cursor.pos();
        let digits = self.cursor.eat_digits();
        if digits.is_empty() || !self.cursor.eat('$') {
            self.cursor.reset(checkpoint);
            return Ok(IndexRef::Implicit);
        }
        match digits.parse::<u32>() {
            Ok(n) if n > 0 => Ok(IndexRef::Explicit(n)),
            _ => Err(ParseError::new(
                ParseErrorKind::InvalidIndex {
                    text: digits.to_string(),
                },
                self.cursor.span_from(start),
            )),
        }
    }

    /// Flag characters, including `<` which turns the index relative.
    fn parse_flags(&mut self, start: usize, index: &mut IndexRef) -> Result<Flags, ParseError> {
        let mut flags = Flags::empty();
        let mut relative = false;
        while let Some(c) = self.cursor.peek() {
            let duplicate = if c == '<' {
                std::mem::replace(&mut relative, true)
            } else if let Some(flag) = Flags::from_char(c) {
                let seen = flags.contains(flag);
                flags.insert(flag);
                seen
            } else {
                break;
            };
            self.cursor.bump();
            if duplicate {
                return Err(ParseError::new(
                    ParseErrorKind::DuplicateFlag { flag: c },
                    self.cursor.span_from(start),
                ));
            }
        }
        if relative {
            *index = IndexRef::Relative;
        }
        Ok(flags)
    }

    fn parse_number(&mut self, start: usize) -> Result<Option<u32>, ParseError> {
        let digits = self.cursor.eat_digits();
        if digits.is_empty() {
            return Ok(None);
        }
        digits.parse::<u32>().map(Some).map_err(|_| {
            ParseError::new(
                ParseErrorKind::NumberOutOfRange {
                    text: digits.to_string(),
                },
                self.cursor.span_from(start),
            )
        })
    }

    /// The conversion character, plus the suffix for `t`/`T`.
    fn parse_conversion(&mut self, start: usize) -> Result<(Conversion, bool), ParseError> {
        let kind = match self.cursor.bump() {
            None => ParseErrorKind::UnknownConversion { found: None },
            Some(prefix @ ('t' | 'T')) => {
                let suffix = self.cursor.bump();
                match suffix.and_then(DateTimeConversion::from_char) {
                    Some(dt) => return Ok((Conversion::DateTime(dt), prefix == 'T')),
                    None => ParseErrorKind::UnknownDateTimeSuffix { found: suffix },
                }
            }
            Some(c) => match Conversion::from_char(c) {
                Some(conversion) => return Ok((conversion, c.is_ascii_uppercase())),
                None => ParseErrorKind::UnknownConversion { found: Some(c) },
            },
        };
        Err(ParseError::new(kind, self.cursor.span_from(start)))
    }
}

impl Iterator for FormatParser<'_> {
    type Item = Result<Segment, ParseError>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.cursor.is_eof() {
            return None;
        }

        let start = self.cursor.pos();
        if self.cursor.peek() != Some('%') {
            self.cursor.eat_until('%');
            return Some(Ok(Segment::Literal(self.cursor.span_from(start))));
        }

        let result = self.parse_specifier();
        if let Err(err) = &result {
            tracing::debug!(error = %err, span = ?err.span, "malformed specifier");
            self.failed = true;
        }
        Some(result.map(Segment::Specifier))
    }
}

impl FusedIterator for FormatParser<'_> {}

/// Parse a whole format string, stopping at the first malformed specifier.
pub fn parse_format(source: &str) -> Result<Vec<Segment>, ParseError> {
    FormatParser::new(source).collect()
}

#[cfg(test)]
mod tests;
