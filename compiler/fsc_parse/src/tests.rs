#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use fsc_ir::{Conversion, DateTimeConversion, Flags, FormatSpecifier, IndexRef, Segment, Span};
use pretty_assertions::assert_eq;
use proptest::prelude::*;

use super::*;

fn specifiers(source: &str) -> Vec<FormatSpecifier> {
    parse_format(source)
        .unwrap()
        .into_iter()
        .filter_map(|segment| match segment {
            Segment::Specifier(spec) => Some(spec),
            Segment::Literal(_) => None,
        })
        .collect()
}

fn single(source: &str) -> FormatSpecifier {
    let mut specs = specifiers(source);
    assert_eq!(specs.len(), 1, "expected one specifier in {source:?}");
    specs.remove(0)
}

fn error(source: &str) -> ParseError {
    parse_format(source).unwrap_err()
}

// --- Segments ---

#[test]
fn empty_string_has_no_segments() {
    assert_eq!(parse_format("").unwrap(), vec![]);
}

#[test]
fn literals_and_specifiers_alternate() {
    let segments = parse_format("id=%d, name=%s!").unwrap();
    let spans: Vec<Span> = segments.iter().map(Segment::span).collect();
    assert_eq!(
        spans,
        vec![
            Span::new(0, 3),
            Span::new(3, 5),
            Span::new(5, 12),
            Span::new(12, 14),
            Span::new(14, 15),
        ]
    );
    assert!(segments[0].as_specifier().is_none());
    assert_eq!(
        segments[1].as_specifier().map(|s| s.conversion),
        Some(Conversion::Decimal)
    );
}

#[test]
fn escapes_are_specifiers_without_arguments() {
    let specs = specifiers("100%% done%n");
    assert_eq!(specs.len(), 2);
    assert_eq!(specs[0].conversion, Conversion::Percent);
    assert_eq!(specs[1].conversion, Conversion::LineSeparator);
    assert!(specs.iter().all(|s| !s.consumes_argument()));
}

// --- Specifier structure ---

#[test]
fn full_specifier() {
    let spec = single("%2$-,10.3f");
    assert_eq!(
        spec,
        FormatSpecifier {
            index: IndexRef::Explicit(2),
            flags: Flags::LEFT_JUSTIFY | Flags::GROUP,
            width: Some(10),
            precision: Some(3),
            conversion: Conversion::Fixed,
            uppercase: false,
            span: Span::new(0, 10),
        }
    );
}

#[test]
fn digits_without_dollar_are_width() {
    let spec = single("%10d");
    assert_eq!(spec.index, IndexRef::Implicit);
    assert_eq!(spec.width, Some(10));
}

#[test]
fn leading_zero_is_a_flag() {
    let spec = single("%05d");
    assert_eq!(spec.flags, Flags::ZERO_PAD);
    assert_eq!(spec.width, Some(5));
}

#[test]
fn relative_index() {
    let spec = single("%<te");
    assert_eq!(spec.index, IndexRef::Relative);
    assert_eq!(
        spec.conversion,
        Conversion::DateTime(DateTimeConversion::DayOfMonth)
    );
}

#[test]
fn relative_flag_overrides_explicit_index() {
    assert_eq!(single("%1$<s").index, IndexRef::Relative);
}

#[test]
fn uppercase_variants() {
    let spec = single("%X");
    assert_eq!(spec.conversion, Conversion::Hex);
    assert!(spec.uppercase);

    let spec = single("%TY");
    assert_eq!(spec.conversion, Conversion::DateTime(DateTimeConversion::Year4));
    assert!(spec.uppercase);

    assert!(!single("%x").uppercase);
}

#[test]
fn duke_birthday_strings_parse() {
    let specs = specifiers("s4 Duke's Birthday: %2$tm %<te, %te %<tY %te");
    let indices: Vec<IndexRef> = specs.iter().map(|s| s.index).collect();
    assert_eq!(
        indices,
        vec![
            IndexRef::Explicit(2),
            IndexRef::Relative,
            IndexRef::Implicit,
            IndexRef::Relative,
            IndexRef::Implicit,
        ]
    );
}

#[test]
fn canonical_display_matches_source() {
    for source in ["%2$-8.3f", "%<TY", "%,d", "%#x", "%-5%", "%n", "%S"] {
        assert_eq!(single(source).to_string(), source);
    }
}

#[test]
fn multibyte_literals_keep_byte_spans() {
    let specs = specifiers("größe: %d");
    assert_eq!(specs[0].span, Span::new(9, 11));
}

// --- Errors ---

#[test]
fn unknown_conversion() {
    let err = error("Year: %Y");
    assert_eq!(err.kind, ParseErrorKind::UnknownConversion { found: Some('Y') });
    assert_eq!(err.span, Span::new(6, 8));
}

#[test]
fn uppercase_only_where_defined() {
    for source in ["%D", "%O", "%F", "%N"] {
        assert!(
            matches!(error(source).kind, ParseErrorKind::UnknownConversion { .. }),
            "{source}"
        );
    }
}

#[test]
fn dangling_percent() {
    let err = error("100%");
    assert_eq!(err.kind, ParseErrorKind::UnknownConversion { found: None });
    assert_eq!(err.span, Span::new(3, 4));

    let err = error("%-");
    assert_eq!(err.kind, ParseErrorKind::UnknownConversion { found: None });
}

#[test]
fn dot_without_digits_is_the_conversion() {
    assert_eq!(
        error("%.f").kind,
        ParseErrorKind::UnknownConversion { found: Some('.') }
    );
}

#[test]
fn unknown_date_time_suffix() {
    assert_eq!(
        error("%tq").kind,
        ParseErrorKind::UnknownDateTimeSuffix { found: Some('q') }
    );
    assert_eq!(
        error("%t").kind,
        ParseErrorKind::UnknownDateTimeSuffix { found: None }
    );
}

#[test]
fn zero_index_is_invalid() {
    let err = error("%0$s");
    assert_eq!(
        err.kind,
        ParseErrorKind::InvalidIndex {
            text: "0".to_string()
        }
    );
    assert_eq!(err.span, Span::new(0, 3));
}

#[test]
fn oversized_numbers() {
    assert!(matches!(
        error("%99999999999$s").kind,
        ParseErrorKind::InvalidIndex { .. }
    ));
    assert!(matches!(
        error("%99999999999s").kind,
        ParseErrorKind::NumberOutOfRange { .. }
    ));
}

#[test]
fn duplicate_flags() {
    assert_eq!(error("%--5d").kind, ParseErrorKind::DuplicateFlag { flag: '-' });
    assert_eq!(error("%<<s").kind, ParseErrorKind::DuplicateFlag { flag: '<' });
}

#[test]
fn conversion_rules_are_applied() {
    assert_eq!(
        error("%.2d").kind,
        ParseErrorKind::PrecisionNotAllowed {
            conversion: Conversion::Decimal
        }
    );
    assert_eq!(error("%-d").kind, ParseErrorKind::MissingWidth { flag: '-' });
}

#[test]
fn parser_stops_after_first_error() {
    let mut parser = FormatParser::new("a%Yb%d");
    assert!(matches!(parser.next(), Some(Ok(Segment::Literal(_)))));
    assert!(matches!(parser.next(), Some(Err(_))));
    assert!(parser.next().is_none());
    assert!(parser.next().is_none());
}

// --- Properties ---

fn conversion_strategy() -> impl Strategy<Value = &'static str> {
    prop::sample::select(vec![
        "b", "B", "h", "s", "S", "c", "d", "o", "x", "X", "e", "E", "f", "g", "a", "tY",
        "Tm", "te", "tH",
    ])
}

proptest! {
    #[test]
    fn text_without_percent_is_one_literal(text in "[^%]{1,40}") {
        let segments = parse_format(&text).unwrap();
        prop_assert_eq!(segments.len(), 1);
        prop_assert_eq!(segments[0].span().to_range(), 0..text.len());
    }

    #[test]
    fn well_formed_specifiers_parse(
        index in prop::option::of(1u32..100),
        width in prop::option::of(1u32..50),
        conversion in conversion_strategy(),
    ) {
        let mut source = "%".to_string();
        if let Some(n) = index {
            source.push_str(&format!("{n}$"));
        }
        if let Some(w) = width {
            source.push_str(&format!("-{w}"));
        }
        source.push_str(conversion);

        let spec = single(&source);
        prop_assert_eq!(spec.index, index.map_or(IndexRef::Implicit, IndexRef::Explicit));
        prop_assert_eq!(spec.width, width);
        prop_assert_eq!(spec.span.to_range(), 0..source.len());
    }

    #[test]
    fn parsing_never_panics(source in ".{0,40}") {
        let _ = parse_format(&source);
    }
}
