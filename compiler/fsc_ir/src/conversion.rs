//! Conversion characters.
//!
//! A conversion is the final character of a specifier (`d` in `%5d`). The
//! date/time conversion `t`/`T` additionally carries a suffix character
//! (`Y` in `%tY`) modelled by [`DateTimeConversion`].

use std::fmt;

/// The primary conversion of a specifier.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Conversion {
    /// `b`, `B`
    Boolean,
    /// `h`, `H`
    HashCode,
    /// `s`, `S`
    String,
    /// `c`, `C`
    Character,
    /// `d`
    Decimal,
    /// `o`
    Octal,
    /// `x`, `X`
    Hex,
    /// `e`, `E`
    Scientific,
    /// `f`
    Fixed,
    /// `g`, `G`
    General,
    /// `a`, `A`
    HexFloat,
    /// `t`, `T` followed by a suffix
    DateTime(DateTimeConversion),
    /// `%%`
    Percent,
    /// `%n`
    LineSeparator,
}

impl Conversion {
    /// Decode a non-date/time conversion character in either case.
    ///
    /// Returns `None` for `t`/`T` (which need a suffix), for uppercase forms
    /// that do not exist (`D`, `O`, `F`, `N`) and for anything else.
    pub fn from_char(c: char) -> Option<Conversion> {
        match c {
            'b' | 'B' => Some(Conversion::Boolean),
            'h' | 'H' => Some(Conversion::HashCode),
            's' | 'S' => Some(Conversion::String),
            'c' | 'C' => Some(Conversion::Character),
            'd' => Some(Conversion::Decimal),
            'o' => Some(Conversion::Octal),
            'x' | 'X' => Some(Conversion::Hex),
            'e' | 'E' => Some(Conversion::Scientific),
            'f' => Some(Conversion::Fixed),
            'g' | 'G' => Some(Conversion::General),
            'a' | 'A' => Some(Conversion::HexFloat),
            '%' => Some(Conversion::Percent),
            'n' => Some(Conversion::LineSeparator),
            _ => None,
        }
    }

    /// The lowercase conversion character (`t` for date/time).
    pub fn as_char(self) -> char {
        match self {
            Conversion::Boolean => 'b',
            Conversion::HashCode => 'h',
            Conversion::String => 's',
            Conversion::Character => 'c',
            Conversion::Decimal => 'd',
            Conversion::Octal => 'o',
            Conversion::Hex => 'x',
            Conversion::Scientific => 'e',
            Conversion::Fixed => 'f',
            Conversion::General => 'g',
            Conversion::HexFloat => 'a',
            Conversion::DateTime(_) => 't',
            Conversion::Percent => '%',
            Conversion::LineSeparator => 'n',
        }
    }

    /// Check if the conversion reads an argument.
    ///
    /// `%%` and `%n` are literal escapes and never consume a position.
    pub fn consumes_argument(self) -> bool {
        !matches!(self, Conversion::Percent | Conversion::LineSeparator)
    }
}

/// Suffix of a `t`/`T` conversion.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum DateTimeConversion {
    /// `H`: hour of day, 00-23.
    HourOfDay0,
    /// `I`: hour, 01-12.
    Hour0,
    /// `k`: hour of day, 0-23.
    HourOfDay,
    /// `l`: hour, 1-12.
    Hour,
    /// `M`: minute, 00-59.
    Minute,
    /// `S`: second, 00-60.
    Second,
    /// `L`: millisecond, 000-999.
    Millisecond,
    /// `N`: nanosecond.
    Nanosecond,
    /// `p`: am/pm marker.
    AmPm,
    /// `z`: numeric zone offset.
    ZoneNumeric,
    /// `Z`: zone abbreviation.
    Zone,
    /// `s`: seconds since the epoch.
    SecondsSinceEpoch,
    /// `Q`: milliseconds since the epoch.
    MillisecondsSinceEpoch,
    /// `B`: full month name.
    MonthName,
    /// `b`: abbreviated month name.
    MonthNameAbbrev,
    /// `h`: same as `b`.
    MonthNameAbbrevAlias,
    /// `A`: full day-of-week name.
    DayName,
    /// `a`: abbreviated day-of-week name.
    DayNameAbbrev,
    /// `C`: year divided by 100.
    Century,
    /// `Y`: four digit year.
    Year4,
    /// `y`: last two digits of the year.
    Year2,
    /// `j`: day of year, 001-366.
    DayOfYear,
    /// `m`: month, 01-12.
    Month,
    /// `d`: day of month, 01-31.
    DayOfMonth0,
    /// `e`: day of month, 1-31.
    DayOfMonth,
    /// `R`: `%tH:%tM`.
    Time24,
    /// `T`: `%tH:%tM:%tS`.
    Time,
    /// `r`: `%tI:%tM:%tS %Tp`.
    Time12,
    /// `D`: `%tm/%td/%ty`.
    Date,
    /// `F`: `%tY-%tm-%td`.
    IsoDate,
    /// `c`: `%ta %tb %td %tT %tZ %tY`.
    DateTime,
}

const DATE_TIME_CHARS: [(DateTimeConversion, char); 31] = [
    (DateTimeConversion::HourOfDay0, 'H'),
    (DateTimeConversion::Hour0, 'I'),
    (DateTimeConversion::HourOfDay, 'k'),
    (DateTimeConversion::Hour, 'l'),
    (DateTimeConversion::Minute, 'M'),
    (DateTimeConversion::Second, 'S'),
    (DateTimeConversion::Millisecond, 'L'),
    (DateTimeConversion::Nanosecond, 'N'),
    (DateTimeConversion::AmPm, 'p'),
    (DateTimeConversion::ZoneNumeric, 'z'),
    (DateTimeConversion::Zone, 'Z'),
    (DateTimeConversion::SecondsSinceEpoch, 's'),
    (DateTimeConversion::MillisecondsSinceEpoch, 'Q'),
    (DateTimeConversion::MonthName, 'B'),
    (DateTimeConversion::MonthNameAbbrev, 'b'),
    (DateTimeConversion::MonthNameAbbrevAlias, 'h'),
    (DateTimeConversion::DayName, 'A'),
    (DateTimeConversion::DayNameAbbrev, 'a'),
    (DateTimeConversion::Century, 'C'),
    (DateTimeConversion::Year4, 'Y'),
    (DateTimeConversion::Year2, 'y'),
    (DateTimeConversion::DayOfYear, 'j'),
    (DateTimeConversion::Month, 'm'),
    (DateTimeConversion::DayOfMonth0, 'd'),
    (DateTimeConversion::DayOfMonth, 'e'),
    (DateTimeConversion::Time24, 'R'),
    (DateTimeConversion::Time, 'T'),
    (DateTimeConversion::Time12, 'r'),
    (DateTimeConversion::Date, 'D'),
    (DateTimeConversion::IsoDate, 'F'),
    (DateTimeConversion::DateTime, 'c'),
];

impl DateTimeConversion {
    /// Decode a date/time suffix character. Suffixes are case-sensitive.
    pub fn from_char(c: char) -> Option<DateTimeConversion> {
        DATE_TIME_CHARS
            .iter()
            .find(|(_, ch)| *ch == c)
            .map(|(conversion, _)| *conversion)
    }

    /// The suffix character.
    pub fn as_char(self) -> char {
        DATE_TIME_CHARS
            .iter()
            .find(|(conversion, _)| *conversion == self)
            .map_or('?', |(_, ch)| *ch)
    }
}

impl fmt::Display for Conversion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Conversion::DateTime(suffix) => write!(f, "t{}", suffix.as_char()),
            other => write!(f, "{}", other.as_char()),
        }
    }
}
