//! The custom format pattern executor.
//!
//! A single left-to-right scan over the pattern: each character is either a
//! repeated-field token dispatched to a field formatter, a quoted or escaped
//! literal, a separator, or a verbatim character. The only state besides the
//! cursor and output buffer is a time-only flag, cleared the first time a
//! date field (`d`, `M`, `y`) is emitted and consulted by the `z` formatter.

use crate::calendar;
use crate::digits::append_padded;
use crate::error::FormatError;
use crate::instant::{Instant, Kind, TICKS_PER_DAY, UtcOffset};
use crate::options::{FormatOptions, Numerals};
use crate::pattern::{consume_quoted, count_repeat, peek_next};

const MAX_FRACTION_DIGITS: usize = 7;

pub(crate) fn format_custom(
    instant: &Instant,
    pattern: &str,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let chars: Vec<char> = pattern.chars().collect();
    run(instant, &chars, opts)
}

fn run(instant: &Instant, pattern: &[char], opts: &FormatOptions) -> Result<String, FormatError> {
    let mut result = String::new();
    let mut time_only = true;
    let mut i = 0;

    while i < pattern.len() {
        let ch = pattern[i];
        let token_len = match ch {
            'g' => {
                // The Persian calendar has a single era.
                result.push_str(opts.locale.era_name);
                count_repeat(pattern, i, ch)
            }
            'h' => {
                let len = count_repeat(pattern, i, ch);
                let mut hour12 = instant.hour() % 12;
                if hour12 == 0 {
                    hour12 = 12;
                }
                append_padded(&mut result, hour12 as i64, len, opts.numerals)?;
                len
            }
            'H' => {
                let len = count_repeat(pattern, i, ch);
                append_padded(&mut result, instant.hour() as i64, len, opts.numerals)?;
                len
            }
            'm' => {
                let len = count_repeat(pattern, i, ch);
                append_padded(&mut result, instant.minute() as i64, len, opts.numerals)?;
                len
            }
            's' => {
                let len = count_repeat(pattern, i, ch);
                append_padded(&mut result, instant.second() as i64, len, opts.numerals)?;
                len
            }
            'f' | 'F' => {
                let len = count_repeat(pattern, i, ch);
                if len > MAX_FRACTION_DIGITS {
                    return Err(FormatError::TooManyFractionDigits { position: i });
                }
                append_fraction(&mut result, instant, ch == 'F', len, opts.numerals)?;
                len
            }
            't' => {
                let len = count_repeat(pattern, i, ch);
                let designator = if instant.hour() < 12 {
                    opts.locale.am_string
                } else {
                    opts.locale.pm_string
                };
                if len == 1 {
                    if let Some(first) = designator.chars().next() {
                        result.push(first);
                    }
                } else {
                    result.push_str(designator);
                }
                len
            }
            'd' => {
                // len 1-2: day of month digits; len 3: weekday abbreviation;
                // len >= 4: full weekday name.
                let len = count_repeat(pattern, i, ch);
                if len <= 2 {
                    let (_, _, day) = calendar::persian_date(instant);
                    append_padded(&mut result, day as i64, len, opts.numerals)?;
                } else {
                    let weekday = calendar::day_of_week(instant) as usize;
                    let name = if len == 3 {
                        opts.locale.day_names_short[weekday]
                    } else {
                        opts.locale.day_names_full[weekday]
                    };
                    result.push_str(name);
                }
                time_only = false;
                len
            }
            'M' => {
                // len 1-2: month digits; len 3: abbreviation; len >= 4: full name.
                let len = count_repeat(pattern, i, ch);
                let (_, month, _) = calendar::persian_date(instant);
                if len <= 2 {
                    append_padded(&mut result, month as i64, len, opts.numerals)?;
                } else {
                    let name = if len == 3 {
                        opts.locale.month_names_short[(month - 1) as usize]
                    } else {
                        opts.locale.month_names_full[(month - 1) as usize]
                    };
                    result.push_str(name);
                }
                time_only = false;
                len
            }
            'y' => {
                // y/yy: year % 100; yyy and longer: full year padded to the
                // token length. With two_digit_years the full year renders
                // at width min(len, 2).
                let len = count_repeat(pattern, i, ch);
                let (year, _, _) = calendar::persian_date(instant);
                if opts.two_digit_years {
                    append_padded(&mut result, year, len.min(2), opts.numerals)?;
                } else if len <= 2 {
                    append_padded(&mut result, year.rem_euclid(100), len, opts.numerals)?;
                } else {
                    append_padded(&mut result, year, len, opts.numerals)?;
                }
                time_only = false;
                len
            }
            'z' => {
                let len = count_repeat(pattern, i, ch);
                append_utc_offset(&mut result, instant, len, time_only, opts)?;
                len
            }
            'K' => {
                // Token length is 1 regardless of repetition.
                append_roundtrip_marker(&mut result, instant, opts)?;
                1
            }
            ':' => {
                result.push_str(opts.locale.time_separator);
                1
            }
            '/' => {
                result.push_str(opts.locale.date_separator);
                1
            }
            '\'' | '"' => {
                let (consumed, literal) = consume_quoted(pattern, i)?;
                result.push_str(&literal);
                consumed
            }
            '%' => {
                // Single-occurrence specifier: "%d" prints the day of month
                // without a leading zero. "%%" and a trailing "%" are
                // malformed. Recursion depth cannot exceed 1.
                match peek_next(pattern, i) {
                    Some(next) if next != '%' => {
                        let sub = [next];
                        let rendered = run(instant, &sub, opts)?;
                        result.push_str(&rendered);
                        2
                    }
                    _ => return Err(FormatError::DanglingPercent { position: i }),
                }
            }
            '\\' => match peek_next(pattern, i) {
                Some(next) => {
                    result.push(next);
                    2
                }
                None => return Err(FormatError::TrailingEscape { position: i }),
            },
            _ => {
                result.push(ch);
                1
            }
        };
        i += token_len;
    }

    Ok(result)
}

/// Fractional second, in units of 10^-len seconds.
///
/// `f` renders a fixed width; `F` strips trailing zeros and, when nothing
/// remains, also removes an immediately preceding literal dot so that
/// "ss.FFF" on a whole second prints "ss" rather than "ss.".
fn append_fraction(
    result: &mut String,
    instant: &Instant,
    strip_zeros: bool,
    len: usize,
    numerals: Numerals,
) -> Result<(), FormatError> {
    let mut fraction =
        instant.fraction_ticks() / 10_i64.pow((MAX_FRACTION_DIGITS - len) as u32);

    if !strip_zeros {
        return append_padded(result, fraction, len, numerals);
    }

    let mut effective = len;
    while effective > 0 && fraction % 10 == 0 {
        fraction /= 10;
        effective -= 1;
    }
    if effective > 0 {
        append_padded(result, fraction, effective, numerals)?;
    } else if result.ends_with('.') {
        result.pop();
    }
    Ok(())
}

/// The `z` family: UTC offset as `+h`, `+hh`, or `+hh:mm`.
///
/// Without an explicit offset the effective offset is derived from the
/// instant: the current host offset for a bare time of day (a deliberate
/// approximation kept for round-trip compatibility; the offset on day zero
/// would be less accurate than today's because of daylight saving), zero
/// for UTC-kind instants, and otherwise the host offset at the instant.
fn append_utc_offset(
    result: &mut String,
    instant: &Instant,
    token_len: usize,
    time_only: bool,
    opts: &FormatOptions,
) -> Result<(), FormatError> {
    let offset = match instant.offset() {
        Some(offset) => offset,
        None => {
            if time_only && instant.ticks() < TICKS_PER_DAY {
                opts.local_zone.current_offset()
            } else if instant.kind() == Kind::Utc {
                UtcOffset::ZERO
            } else {
                opts.local_zone.offset_at(instant)
            }
        }
    };

    // Offsets always render with ASCII digits, whatever the numeral alphabet.
    result.push(if offset.is_negative() { '-' } else { '+' });
    if token_len <= 1 {
        append_padded(result, offset.hours_abs(), 1, Numerals::Ascii)?;
    } else {
        append_padded(result, offset.hours_abs(), 2, Numerals::Ascii)?;
        if token_len >= 3 {
            result.push(':');
            append_padded(result, offset.minutes_abs(), 2, Numerals::Ascii)?;
        }
    }
    Ok(())
}

/// The `K` specifier, for round-tripping kind and offset: an explicit
/// offset renders as `±hh:mm`, Local resolves the host offset, Utc appends
/// the literal `Z`, Unspecified appends nothing.
pub(crate) fn append_roundtrip_marker(
    result: &mut String,
    instant: &Instant,
    opts: &FormatOptions,
) -> Result<(), FormatError> {
    let offset = match instant.offset() {
        Some(offset) => offset,
        None => match instant.kind() {
            Kind::Local => opts.local_zone.offset_at(instant),
            Kind::Utc => {
                result.push('Z');
                return Ok(());
            }
            Kind::Unspecified => return Ok(()),
        },
    };

    result.push(if offset.is_negative() { '-' } else { '+' });
    append_padded(result, offset.hours_abs(), 2, Numerals::Ascii)?;
    result.push(':');
    append_padded(result, offset.minutes_abs(), 2, Numerals::Ascii)?;
    Ok(())
}
