//! Fast paths for the two highest-traffic standard formats.
//!
//! Both emit a fixed layout directly from field values, bypassing the
//! generic pattern scan.

use crate::calendar;
use crate::digits::append_padded;
use crate::error::FormatError;
use crate::formatter::custom::append_roundtrip_marker;
use crate::instant::Instant;
use crate::options::{FormatOptions, Numerals};

/// "yyyy-MM-ddTHH:mm:ss.fffffffK" plus marker length.
const ROUNDTRIP_CAPACITY: usize = 28;

/// English month abbreviations for the calendar-agnostic RFC-1123 layout.
const RFC1123_MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

const RFC1123_DAYS: [&str; 7] = ["Sun", "Mon", "Tue", "Wed", "Thu", "Fri", "Sat"];

/// The round-trip format `o`/`O`: "yyyy-MM-ddTHH:mm:ss.fffffff" followed by
/// the round-trip timezone marker. Field rendering matches the generic
/// executor on the equivalent custom pattern byte for byte.
pub(crate) fn format_roundtrip(
    instant: &Instant,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let mut result = String::with_capacity(ROUNDTRIP_CAPACITY);

    let (year, month, day) = calendar::persian_date(instant);
    append_padded(&mut result, year, 4, opts.numerals)?;
    result.push('-');
    append_padded(&mut result, month as i64, 2, opts.numerals)?;
    result.push('-');
    append_padded(&mut result, day as i64, 2, opts.numerals)?;
    result.push('T');
    append_hhmmss(&mut result, instant, opts.numerals)?;
    result.push('.');
    append_padded(&mut result, instant.fraction_ticks(), 7, opts.numerals)?;
    append_roundtrip_marker(&mut result, instant, opts)?;

    Ok(result)
}

/// The RFC-1123 format `r`/`R`: a fixed non-localized layout, always in the
/// proleptic Gregorian calendar with English names and ASCII digits, since
/// RFC 1123 is calendar-agnostic. The instant is rendered as-is; no UTC
/// conversion is performed.
pub(crate) fn format_rfc1123(instant: &Instant) -> Result<String, FormatError> {
    let mut result = String::with_capacity(29);

    let (year, month, day) = calendar::gregorian_date(instant);
    result.push_str(RFC1123_DAYS[calendar::day_of_week(instant) as usize]);
    result.push_str(", ");
    append_padded(&mut result, day as i64, 2, Numerals::Ascii)?;
    result.push(' ');
    result.push_str(RFC1123_MONTHS[(month - 1) as usize]);
    result.push(' ');
    append_padded(&mut result, year, 4, Numerals::Ascii)?;
    result.push(' ');
    append_hhmmss(&mut result, instant, Numerals::Ascii)?;
    result.push_str(" GMT");

    Ok(result)
}

fn append_hhmmss(
    result: &mut String,
    instant: &Instant,
    numerals: Numerals,
) -> Result<(), FormatError> {
    append_padded(result, instant.hour() as i64, 2, numerals)?;
    result.push(':');
    append_padded(result, instant.minute() as i64, 2, numerals)?;
    result.push(':');
    append_padded(result, instant.second() as i64, 2, numerals)?;
    Ok(())
}
