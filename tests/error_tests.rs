use pdfmt::{format, FormatError, FormatOptions, Instant, Kind, UtcOffset};

fn sample() -> Instant {
    Instant::from_persian(1403, 1, 1, 2, 0, 0).unwrap()
}

#[test]
fn test_unterminated_quote() {
    let err = format(&sample(), "'abc", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::UnterminatedQuote { position: 0 });
}

#[test]
fn test_double_percent() {
    let err = format(&sample(), "%%", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::DanglingPercent { position: 0 });
}

#[test]
fn test_trailing_percent() {
    let err = format(&sample(), "HH:mm %", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::DanglingPercent { position: 6 });
}

#[test]
fn test_trailing_backslash() {
    let err = format(&sample(), r"abc\", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::TrailingEscape { position: 3 });
}

#[test]
fn test_fraction_specifier_too_long() {
    let err = format(&sample(), "ffffffff", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::TooManyFractionDigits { position: 0 });

    let err = format(&sample(), "ss.FFFFFFFF", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::TooManyFractionDigits { position: 3 });
}

#[test]
fn test_unknown_standard_format() {
    let err = format(&sample(), "x", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::UnknownStandardFormat { letter: 'x' });
}

#[test]
fn test_universal_full_rejects_explicit_offset() {
    let i = sample().with_offset(UtcOffset::ZERO);
    let err = format(&i, "U", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::OffsetNotSupported);
}

#[test]
fn test_universal_sortable_rejects_local_kind() {
    let i = sample().with_kind(Kind::Local);
    let err = format(&i, "u", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::LocalKindNotSupported);
}

#[test]
fn test_pre_epoch_persian_year_fails() {
    // Gregorian year 100 is before the Persian epoch; the year field is
    // negative and cannot be rendered as digits.
    let i = Instant::from_gregorian(100, 1, 1, 0, 0, 0).unwrap();
    let err = format(&i, "yyyy", &FormatOptions::default()).unwrap_err();
    assert!(matches!(err, FormatError::NegativeValue { .. }));
}

#[test]
fn test_no_partial_output_on_failure() {
    // The error surfaces even though valid tokens precede it.
    let err = format(&sample(), "yyyy-MM-dd '", &FormatOptions::default()).unwrap_err();
    assert_eq!(err, FormatError::UnterminatedQuote { position: 11 });
}
