//! Per-conversion rules for flags, width and precision.
//!
//! These mirror the checks a formatter performs before it ever looks at an
//! argument, so a specifier that fails here fails for every argument type.

use fsc_ir::{Conversion, Flags, FormatSpecifier, IndexRef};

use crate::ParseErrorKind;

/// Flags that make the conversion fail regardless of the argument.
fn rejected_flags(conversion: Conversion) -> Flags {
    let non_numeric = Flags::PLUS
        | Flags::LEADING_SPACE
        | Flags::ZERO_PAD
        | Flags::GROUP
        | Flags::PARENTHESES;

    match conversion {
        Conversion::Boolean
        | Conversion::HashCode
        | Conversion::Character
        | Conversion::DateTime(_) => non_numeric | Flags::ALTERNATE,
        Conversion::String => non_numeric,
        Conversion::Decimal | Conversion::General => Flags::ALTERNATE,
        Conversion::Octal | Conversion::Hex | Conversion::Scientific => Flags::GROUP,
        Conversion::HexFloat => Flags::GROUP | Flags::PARENTHESES,
        Conversion::Fixed => Flags::empty(),
        Conversion::Percent => Flags::all().difference(Flags::LEFT_JUSTIFY),
        Conversion::LineSeparator => Flags::all(),
    }
}

fn allows_precision(conversion: Conversion) -> bool {
    !matches!(
        conversion,
        Conversion::Character
            | Conversion::Decimal
            | Conversion::Octal
            | Conversion::Hex
            | Conversion::DateTime(_)
            | Conversion::Percent
            | Conversion::LineSeparator
    )
}

/// The first flag in `flags`, in canonical order.
fn first_flag(flags: Flags) -> Option<char> {
    flags.iter().find_map(Flags::as_char)
}

/// Check a fully parsed specifier against its conversion's rules.
pub(crate) fn validate_specifier(spec: &FormatSpecifier) -> Result<(), ParseErrorKind> {
    let conversion = spec.conversion;

    if spec.precision.is_some() && !allows_precision(conversion) {
        return Err(ParseErrorKind::PrecisionNotAllowed { conversion });
    }

    if conversion == Conversion::LineSeparator && spec.width.is_some() {
        return Err(ParseErrorKind::WidthNotAllowed { conversion });
    }

    if let Some(flag) = first_flag(spec.flags & rejected_flags(conversion)) {
        return Err(ParseErrorKind::FlagNotApplicable { flag, conversion });
    }

    // `<` has nothing to reuse on a specifier that takes no argument.
    if !conversion.consumes_argument() && spec.index == IndexRef::Relative {
        return Err(ParseErrorKind::FlagNotApplicable {
            flag: '<',
            conversion,
        });
    }

    if spec.width.is_none() {
        for (flag, c) in [(Flags::LEFT_JUSTIFY, '-'), (Flags::ZERO_PAD, '0')] {
            if spec.flags.contains(flag) {
                return Err(ParseErrorKind::MissingWidth { flag: c });
            }
        }
    }

    if spec.flags.contains(Flags::PLUS | Flags::LEADING_SPACE) {
        return Err(ParseErrorKind::ExclusiveFlags {
            first: '+',
            second: ' ',
        });
    }
    if spec.flags.contains(Flags::LEFT_JUSTIFY | Flags::ZERO_PAD) {
        return Err(ParseErrorKind::ExclusiveFlags {
            first: '-',
            second: '0',
        });
    }

    Ok(())
}

#[cfg(test)]
mod tests;
