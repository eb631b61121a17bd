//! Conversion families.

use std::fmt;

use fsc_ir::Conversion;

use crate::Groups;

/// The set of argument types a conversion accepts.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Family {
    /// `d o x X`: boxed integers and `BigInteger`.
    Integral,
    /// `e E f g G`: boxed floats and `BigDecimal`.
    Floating,
    /// `a A`: boxed floats only.
    HexFloating,
    /// `c C`: characters, and integers taken as code points.
    Character,
    /// `b B`: booleans.
    Boolean,
    /// `t T`: calendars, dates and epoch milliseconds.
    DateTime,
    /// `s S h H`: any non-array type.
    General,
}

impl Family {
    /// Short name used in messages.
    pub fn name(self) -> &'static str {
        match self {
            Family::Integral => "integral",
            Family::Floating => "floating-point",
            Family::HexFloating => "hexadecimal floating-point",
            Family::Character => "character",
            Family::Boolean => "boolean",
            Family::DateTime => "date/time",
            Family::General => "general",
        }
    }

    /// The descriptor groups this family accepts.
    ///
    /// Returns `None` for [`Family::General`], which accepts every valid
    /// non-array descriptor whether or not it is in the group table.
    pub fn accepted_groups(self) -> Option<Groups> {
        match self {
            Family::Integral => Some(Groups::BOXED_INTEGER | Groups::BIG_INTEGER),
            Family::Floating => Some(Groups::BOXED_FLOAT | Groups::BIG_DECIMAL),
            Family::HexFloating => Some(Groups::BOXED_FLOAT),
            Family::Character => Some(Groups::CHARACTER | Groups::CHAR_CODE),
            Family::Boolean => Some(Groups::BOOLEAN),
            Family::DateTime => Some(Groups::CALENDAR | Groups::DATE | Groups::EPOCH_MILLIS),
            Family::General => None,
        }
    }

    /// Source-level description of what the family accepts.
    pub fn accepted_types(self) -> &'static str {
        match self {
            Family::Integral => "byte, short, int, long, their wrappers or BigInteger",
            Family::Floating => "float, double, their wrappers or BigDecimal",
            Family::HexFloating => "float, double or their wrappers",
            Family::Character => "char, byte, short, int or their wrappers",
            Family::Boolean => "boolean or java.lang.Boolean",
            Family::DateTime => "long, Long, java.util.Calendar or java.util.Date",
            Family::General => "any non-array type",
        }
    }
}

impl fmt::Display for Family {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// The family a conversion accepts.
///
/// Returns `None` for `%%` and `%n`, which take no argument.
pub fn family_of(conversion: Conversion) -> Option<Family> {
    let family = match conversion {
        Conversion::Decimal | Conversion::Octal | Conversion::Hex => Family::Integral,
        Conversion::Scientific | Conversion::Fixed | Conversion::General => Family::Floating,
        Conversion::HexFloat => Family::HexFloating,
        Conversion::Character => Family::Character,
        Conversion::Boolean => Family::Boolean,
        Conversion::DateTime(_) => Family::DateTime,
        Conversion::String | Conversion::HashCode => Family::General,
        Conversion::Percent | Conversion::LineSeparator => return None,
    };
    Some(family)
}
