//! Format dispatch: empty-pattern defaults, standard single-letter formats,
//! and the custom pattern executor.

pub(crate) mod custom;
mod fast;

use crate::error::FormatError;
use crate::instant::{Instant, Kind, TICKS_PER_DAY};
use crate::options::FormatOptions;

use custom::format_custom;

/// Every standard format letter, in the order `all_renderings` emits them.
///
/// Also the upper bound on the number of strings `all_renderings` returns.
pub const ALL_STANDARD_FORMATS: [char; 19] = [
    'd', 'D', 'f', 'F', 'g', 'G', 'm', 'M', 'o', 'O', 'r', 'R', 's', 't', 'T', 'u', 'U', 'y', 'Y',
];

/// Default pattern for a sub-day instant carrying an explicit offset.
const ROUNDTRIP_UNFIXED_PATTERN: &str = "yyyy'-'MM'-'ddTHH':'mm':'ss zzz";

/// Format an instant with a standard or custom pattern.
///
/// An empty pattern picks a default: the sortable format for bare
/// times of day, the general format otherwise, and offset-aware variants
/// when the instant carries an explicit offset. A one-character pattern is
/// a standard format letter; anything longer is a custom pattern.
pub fn format(
    instant: &Instant,
    pattern: &str,
    opts: &FormatOptions,
) -> Result<String, FormatError> {
    let pattern = if pattern.is_empty() {
        default_pattern(instant, opts)
    } else {
        pattern
    };

    let mut chars = pattern.chars();
    if let (Some(letter), None) = (chars.next(), chars.next()) {
        return match letter {
            'o' | 'O' => fast::format_roundtrip(instant, opts),
            'r' | 'R' => fast::format_rfc1123(instant),
            _ => {
                let (instant, expanded) = expand_predefined(letter, *instant, opts)?;
                format_custom(&instant, &expanded, opts)
            }
        };
    }

    format_custom(instant, pattern, opts)
}

/// Format an instant under every standard format letter.
///
/// Returns one rendering per letter of [`ALL_STANDARD_FORMATS`], in order.
/// Intended for exhaustive-rendering and snapshot scenarios; instants with
/// an explicit offset are rejected by the `U` letter like in [`format`].
pub fn all_renderings(
    instant: &Instant,
    opts: &FormatOptions,
) -> Result<Vec<String>, FormatError> {
    let mut results = Vec::with_capacity(ALL_STANDARD_FORMATS.len());
    let mut buf = [0u8; 4];
    for letter in ALL_STANDARD_FORMATS {
        results.push(format(instant, letter.encode_utf8(&mut buf), opts)?);
    }
    Ok(results)
}

fn default_pattern<'a>(instant: &Instant, opts: &'a FormatOptions) -> &'a str {
    // Ticks below one day are treated as a bare time of day.
    let time_only = instant.ticks() < TICKS_PER_DAY;
    match (instant.offset().is_some(), time_only) {
        (false, true) => "s",
        (false, false) => "G",
        (true, true) => ROUNDTRIP_UNFIXED_PATTERN,
        (true, false) => opts.locale.date_time_offset_pattern,
    }
}

/// Expand a standard format letter into the custom pattern behind it,
/// transforming the instant where the letter requires it.
fn expand_predefined(
    letter: char,
    instant: Instant,
    opts: &FormatOptions,
) -> Result<(Instant, String), FormatError> {
    let locale = &opts.locale;
    let pattern = match letter {
        'd' => locale.short_date_pattern.to_string(),
        'D' => locale.long_date_pattern.to_string(),
        'f' => format!("{} {}", locale.long_date_pattern, locale.short_time_pattern),
        'F' => locale.full_date_time_pattern.to_string(),
        'g' => format!("{} {}", locale.short_date_pattern, locale.short_time_pattern),
        'G' => format!("{} {}", locale.short_date_pattern, locale.long_time_pattern),
        'm' | 'M' => locale.month_day_pattern.to_string(),
        's' => locale.sortable_pattern.to_string(),
        't' => locale.short_time_pattern.to_string(),
        'T' => locale.long_time_pattern.to_string(),
        'u' => {
            // An explicit offset is subtracted to reach UTC; a local-kind
            // instant without one cannot be reinterpreted as already-UTC.
            let adjusted = match instant.offset() {
                Some(offset) => instant.add_ticks(-offset.as_ticks()).without_offset(),
                None if instant.kind() == Kind::Local => {
                    return Err(FormatError::LocalKindNotSupported);
                }
                None => instant,
            };
            return Ok((adjusted, locale.universal_sortable_pattern.to_string()));
        }
        'U' => {
            if instant.offset().is_some() {
                return Err(FormatError::OffsetNotSupported);
            }
            return Ok((
                to_universal(&instant, opts),
                locale.full_date_time_pattern.to_string(),
            ));
        }
        'y' | 'Y' => locale.year_month_pattern.to_string(),
        _ => return Err(FormatError::UnknownStandardFormat { letter }),
    };
    Ok((instant, pattern))
}

/// Convert an instant without explicit offset to UTC. Unspecified kind is
/// treated as local time.
fn to_universal(instant: &Instant, opts: &FormatOptions) -> Instant {
    match instant.kind() {
        Kind::Utc => *instant,
        Kind::Local | Kind::Unspecified => {
            let offset = opts.local_zone.offset_at(instant);
            instant.add_ticks(-offset.as_ticks()).with_kind(Kind::Utc)
        }
    }
}
