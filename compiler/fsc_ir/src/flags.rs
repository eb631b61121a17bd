//! Conversion specifier flags.

use std::fmt;

use bitflags::bitflags;

bitflags! {
    /// Flags written between the argument index and the width.
    ///
    /// Bits are ordered the way they are conventionally printed, so
    /// [`Flags`]'s `Display` reproduces a canonical flag string.
    #[derive(Copy, Clone, Eq, PartialEq, Hash, Debug, Default)]
    pub struct Flags: u8 {
        /// `-`: left-justify within the width.
        const LEFT_JUSTIFY = 1 << 0;
        /// `#`: conversion-dependent alternate form.
        const ALTERNATE = 1 << 1;
        /// `+`: always include a sign.
        const PLUS = 1 << 2;
        /// ` `: leading space for non-negative values.
        const LEADING_SPACE = 1 << 3;
        /// `0`: zero-pad to the width.
        const ZERO_PAD = 1 << 4;
        /// `,`: locale grouping separators.
        const GROUP = 1 << 5;
        /// `(`: enclose negative values in parentheses.
        const PARENTHESES = 1 << 6;
    }
}

/// Flag characters paired with their bits, in canonical print order.
const FLAG_CHARS: [(Flags, char); 7] = [
    (Flags::LEFT_JUSTIFY, '-'),
    (Flags::ALTERNATE, '#'),
    (Flags::PLUS, '+'),
    (Flags::LEADING_SPACE, ' '),
    (Flags::ZERO_PAD, '0'),
    (Flags::GROUP, ','),
    (Flags::PARENTHESES, '('),
];

impl Flags {
    /// Decode a single flag character.
    pub fn from_char(c: char) -> Option<Flags> {
        FLAG_CHARS
            .iter()
            .find(|(_, ch)| *ch == c)
            .map(|(flag, _)| *flag)
    }

    /// The character of a single-bit flag.
    ///
    /// Returns `None` for empty or multi-bit values.
    pub fn as_char(self) -> Option<char> {
        FLAG_CHARS
            .iter()
            .find(|(flag, _)| *flag == self)
            .map(|(_, ch)| *ch)
    }
}

impl fmt::Display for Flags {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for flag in self.iter() {
            if let Some(c) = flag.as_char() {
                write!(f, "{c}")?;
            }
        }
        Ok(())
    }
}
