#![allow(clippy::unwrap_used, reason = "Tests can panic")]

use fsc_diagnostic::ErrorCode;
use pretty_assertions::assert_eq;

use super::*;

const INPUT: &str = "\
# call sites from Billing.java
Total: %d items%n\tI

%s owes %.2f\tLjava/lang/String; D
   # indented comment
%d\\n\tLjava/lang/String;
100%%
";

#[test]
fn parses_entries_with_line_numbers() {
    let entries = parse_batch(INPUT).unwrap();
    assert_eq!(entries.len(), 4);

    assert_eq!(entries[0].line, 2);
    assert_eq!(entries[0].format, "Total: %d items%n");
    assert_eq!(entries[0].arguments, vec![TypeDescriptor::new("I")]);

    assert_eq!(entries[1].line, 4);
    assert_eq!(
        entries[1].arguments,
        vec![
            TypeDescriptor::new("Ljava/lang/String;"),
            TypeDescriptor::new("D")
        ]
    );

    assert_eq!(entries[2].format, "%d\n");
    assert_eq!(entries[3].format, "100%%");
    assert!(entries[3].arguments.is_empty());
}

#[test]
fn source_names_match_the_check_command() {
    let entries = parse_batch("%d %s %s\tint java.lang.String long[]\n").unwrap();
    assert_eq!(
        entries[0].arguments,
        vec![
            TypeDescriptor::new("I"),
            TypeDescriptor::new("Ljava/lang/String;"),
            TypeDescriptor::new("[J"),
        ]
    );

    let codes: Vec<_> = run_batch(&entries, false)
        .iter()
        .map(|result| result.as_ref().err().map(FormatCheckError::code))
        .collect();
    assert_eq!(codes, vec![Some(ErrorCode::E2002)]);
}

#[test]
fn escapes_in_format() {
    let entries = parse_batch("a\\tb\\\\c\\r\n").unwrap();
    assert_eq!(entries[0].format, "a\tb\\c\r");
}

#[test]
fn bad_escapes_are_reported_with_line() {
    let err = parse_batch("%d\n%q\\x\tI\n").unwrap_err();
    assert_eq!(err, BatchParseError::InvalidEscape { line: 2, found: 'x' });
    assert_eq!(
        err.to_string(),
        "line 2: unknown escape `\\x` in format string"
    );

    let err = parse_batch("100%\\").unwrap_err();
    assert_eq!(err, BatchParseError::TrailingBackslash { line: 1 });
}

#[test]
fn results_keep_input_order() {
    let entries = parse_batch(INPUT).unwrap();
    for parallel in [false, true] {
        let codes: Vec<Option<ErrorCode>> = run_batch(&entries, parallel)
            .iter()
            .map(|result| result.as_ref().err().map(FormatCheckError::code))
            .collect();
        assert_eq!(codes, vec![None, None, Some(ErrorCode::E2001), None]);
    }
}

#[test]
fn empty_batch() {
    assert!(parse_batch("").unwrap().is_empty());
    assert!(run_batch(&[], true).is_empty());
}
