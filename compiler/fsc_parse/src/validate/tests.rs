use fsc_ir::{DateTimeConversion, Span};
use pretty_assertions::assert_eq;

use super::*;

fn spec(conversion: Conversion) -> FormatSpecifier {
    FormatSpecifier {
        index: IndexRef::Implicit,
        flags: Flags::empty(),
        width: None,
        precision: None,
        conversion,
        uppercase: false,
        span: Span::new(0, 0),
    }
}

fn with_flags(conversion: Conversion, flags: Flags, width: Option<u32>) -> FormatSpecifier {
    FormatSpecifier {
        flags,
        width,
        ..spec(conversion)
    }
}

#[test]
fn plain_specifiers_are_valid() {
    for conversion in [
        Conversion::Boolean,
        Conversion::HashCode,
        Conversion::String,
        Conversion::Character,
        Conversion::Decimal,
        Conversion::Octal,
        Conversion::Hex,
        Conversion::Scientific,
        Conversion::Fixed,
        Conversion::General,
        Conversion::HexFloat,
        Conversion::DateTime(DateTimeConversion::Year4),
        Conversion::Percent,
        Conversion::LineSeparator,
    ] {
        assert_eq!(validate_specifier(&spec(conversion)), Ok(()), "{conversion}");
    }
}

#[test]
fn numeric_flags_are_accepted() {
    let s = with_flags(
        Conversion::Fixed,
        Flags::PLUS | Flags::GROUP | Flags::PARENTHESES | Flags::ZERO_PAD,
        Some(12),
    );
    assert_eq!(validate_specifier(&s), Ok(()));

    let s = with_flags(Conversion::Hex, Flags::ALTERNATE | Flags::ZERO_PAD, Some(8));
    assert_eq!(validate_specifier(&s), Ok(()));
}

#[test]
fn precision_rejected_for_integral_and_character() {
    for conversion in [
        Conversion::Decimal,
        Conversion::Octal,
        Conversion::Hex,
        Conversion::Character,
        Conversion::DateTime(DateTimeConversion::Month),
        Conversion::Percent,
        Conversion::LineSeparator,
    ] {
        let s = FormatSpecifier {
            precision: Some(2),
            ..spec(conversion)
        };
        assert_eq!(
            validate_specifier(&s),
            Err(ParseErrorKind::PrecisionNotAllowed { conversion })
        );
    }
}

#[test]
fn precision_allowed_for_general_and_floating() {
    for conversion in [Conversion::String, Conversion::Scientific, Conversion::HexFloat] {
        let s = FormatSpecifier {
            precision: Some(3),
            ..spec(conversion)
        };
        assert_eq!(validate_specifier(&s), Ok(()));
    }
}

#[test]
fn line_separator_takes_nothing() {
    let s = FormatSpecifier {
        width: Some(4),
        ..spec(Conversion::LineSeparator)
    };
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::WidthNotAllowed {
            conversion: Conversion::LineSeparator
        })
    );

    let s = with_flags(Conversion::LineSeparator, Flags::LEFT_JUSTIFY, None);
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::FlagNotApplicable {
            flag: '-',
            conversion: Conversion::LineSeparator
        })
    );
}

#[test]
fn alternate_rejected_for_decimal() {
    let s = with_flags(Conversion::Decimal, Flags::ALTERNATE, None);
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::FlagNotApplicable {
            flag: '#',
            conversion: Conversion::Decimal
        })
    );
}

#[test]
fn numeric_flags_rejected_for_string() {
    let s = with_flags(Conversion::String, Flags::PLUS, None);
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::FlagNotApplicable {
            flag: '+',
            conversion: Conversion::String
        })
    );
}

#[test]
fn percent_only_accepts_left_justify() {
    let s = with_flags(Conversion::Percent, Flags::LEFT_JUSTIFY, Some(3));
    assert_eq!(validate_specifier(&s), Ok(()));

    let s = with_flags(Conversion::Percent, Flags::ZERO_PAD, Some(3));
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::FlagNotApplicable {
            flag: '0',
            conversion: Conversion::Percent
        })
    );
}

#[test]
fn relative_index_needs_an_argument_conversion() {
    let s = FormatSpecifier {
        index: IndexRef::Relative,
        ..spec(Conversion::LineSeparator)
    };
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::FlagNotApplicable {
            flag: '<',
            conversion: Conversion::LineSeparator
        })
    );
}

#[test]
fn justify_and_zero_pad_need_width() {
    let s = with_flags(Conversion::String, Flags::LEFT_JUSTIFY, None);
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::MissingWidth { flag: '-' })
    );
    let s = with_flags(Conversion::Decimal, Flags::ZERO_PAD, None);
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::MissingWidth { flag: '0' })
    );
}

#[test]
fn exclusive_flag_pairs() {
    let s = with_flags(Conversion::Decimal, Flags::PLUS | Flags::LEADING_SPACE, None);
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::ExclusiveFlags {
            first: '+',
            second: ' '
        })
    );
    let s = with_flags(
        Conversion::Decimal,
        Flags::LEFT_JUSTIFY | Flags::ZERO_PAD,
        Some(5),
    );
    assert_eq!(
        validate_specifier(&s),
        Err(ParseErrorKind::ExclusiveFlags {
            first: '-',
            second: '0'
        })
    );
}
