//! Whole-call-site checks modelled on real formatting calls.
//!
//! Each test names the failure a real `String.format` call with arguments
//! of the given types would raise, or none.

#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use fsc_check::{check_signatures, FormatCheckError, MissingReason};
use fsc_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

const CALENDAR: &str = "Ljava/util/GregorianCalendar;";
const STRING: &str = "Ljava/lang/String;";

fn code(format: &str, signatures: &[&str]) -> ErrorCode {
    check_signatures(format, signatures).unwrap_err().code()
}

#[test]
fn should_work() {
    assert_eq!(
        check_signatures("%d%n%d", &["Ljava/lang/Integer;", "Ljava/lang/Short;"]),
        Ok(())
    );
    assert_eq!(check_signatures("%d\n", &["Ljava/math/BigInteger;"]), Ok(()));
    assert_eq!(check_signatures("%f\n", &["Ljava/math/BigDecimal;"]), Ok(()));
}

#[test]
fn string_where_integer_expected() {
    assert_eq!(code("%d", &[STRING]), ErrorCode::E2001);
}

#[test]
fn not_enough_parameters() {
    assert_eq!(code("%s%s", &[STRING]), ErrorCode::E1001);
}

#[test]
fn passing_an_array() {
    assert_eq!(code("%s", &["[I"]), ErrorCode::E2002);
}

#[test]
fn passing_an_int_to_a_boolean() {
    assert_eq!(code("%b", &["Ljava/lang/Integer;"]), ErrorCode::E2001);
}

#[test]
fn too_many_parameters() {
    assert_eq!(code("%s%s", &[STRING, STRING, STRING]), ErrorCode::E1003);
}

#[test]
fn format_date_with_y() {
    assert_eq!(code("%Y", &["Ljava/util/Date;"]), ErrorCode::E0001);
}

#[test]
fn bad_conversion_after_bad_argument() {
    assert_eq!(code("%d %Y %d", &[STRING]), ErrorCode::E0001);
    assert_eq!(code("%s %Y", &[]), ErrorCode::E0001);
}

#[test]
fn date_mismatch() {
    assert_eq!(code("%tY\n", &[STRING]), ErrorCode::E2001);
}

#[test]
fn relative_indices_chain_off_the_last_position() {
    let cases: [(&str, &[&str]); 5] = [
        ("s1 Duke's Birthday: %1$tm %1$te, %1$tY", &[CALENDAR]),
        ("s2 Duke's Birthday: %1$tm %<te, %<tY", &[CALENDAR]),
        ("s3 Duke's Birthday: %2$tm %<te, %<tY", &[CALENDAR, CALENDAR]),
        (
            "s4 Duke's Birthday: %2$tm %<te, %te %<tY %te",
            &[CALENDAR, CALENDAR],
        ),
        (
            "s6 Duke's Birthday: %1.1f %2$te, %1$f",
            &["Ljava/lang/Float;", CALENDAR],
        ),
    ];
    for (format, signatures) in cases {
        assert_eq!(check_signatures(format, signatures), Ok(()), "{format}");
    }
}

#[test]
fn relative_index_at_start_has_no_argument() {
    let calendars = [CALENDAR; 12];
    let err = check_signatures(
        "s5 Duke's Birthday: %<te, %te %<tY %te %12$tm ",
        &calendars,
    )
    .unwrap_err();
    assert!(matches!(
        err,
        FormatCheckError::MissingArgument {
            reason: MissingReason::NoPrevious,
            ..
        }
    ));
}

#[test]
fn sql_dates_are_dates() {
    for signature in ["Ljava/sql/Date;", "Ljava/sql/Time;", "Ljava/sql/Timestamp;"] {
        assert_eq!(check_signatures("%tT", &[signature]), Ok(()), "{signature}");
    }
}

#[test]
fn sql_date_passed_twice_but_used_once() {
    for signature in ["Ljava/sql/Date;", "Ljava/sql/Time;", "Ljava/sql/Timestamp;"] {
        assert_eq!(
            code("%1$tD %1$tT", &[signature, signature]),
            ErrorCode::E1003,
            "{signature}"
        );
    }
}

#[test]
fn epoch_millis_format_as_dates() {
    assert_eq!(check_signatures("%tF %<tT", &["J"]), Ok(()));
    assert_eq!(code("%tF", &["I"]), ErrorCode::E2001);
}

#[test]
fn hex_float_rejects_big_decimal() {
    assert_eq!(check_signatures("%a", &["D"]), Ok(()));
    assert_eq!(code("%a", &["Ljava/math/BigDecimal;"]), ErrorCode::E2001);
}

#[test]
fn code_points_format_as_characters() {
    assert_eq!(check_signatures("%c%c%c", &["C", "I", "Ljava/lang/Byte;"]), Ok(()));
    assert_eq!(code("%c", &["Ljava/lang/Long;"]), ErrorCode::E2001);
}

#[test]
fn malformed_specifiers() {
    let cases = [
        ("%0$s", ErrorCode::E0003),
        ("%tq", ErrorCode::E0002),
        ("%--5s", ErrorCode::E0004),
        ("%#d", ErrorCode::E0005),
        ("%+ d", ErrorCode::E0006),
        ("%.2d", ErrorCode::E0007),
        ("%-s", ErrorCode::E0008),
        ("%5n", ErrorCode::E0009),
    ];
    for (format, expected) in cases {
        assert_eq!(code(format, &[STRING]), expected, "{format}");
    }
}
