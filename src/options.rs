//! Formatting options and configuration.

use crate::digits::{ASCII_DIGITS, PERSIAN_DIGITS};
use crate::instant::{Instant, UtcOffset};
use crate::locale::Locale;

/// The numeral alphabet used when rendering numeric fields.
///
/// Selecting an alphabet never changes field values, only glyphs.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Numerals {
    /// ASCII digits 0-9.
    #[default]
    Ascii,
    /// Extended Arabic-Indic digits as used in Persian text.
    Persian,
}

impl Numerals {
    pub(crate) fn digit(self, d: usize) -> char {
        match self {
            Numerals::Ascii => ASCII_DIGITS[d],
            Numerals::Persian => PERSIAN_DIGITS[d],
        }
    }

    pub(crate) fn zero(self) -> char {
        self.digit(0)
    }
}

/// Resolver for the host UTC offset, used for local-kind instants that do
/// not carry an explicit offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocalZone {
    /// A fixed offset, independent of the instant. Useful for tests and
    /// for builds without the `chrono` feature.
    Fixed(UtcOffset),
    /// The host system zone, resolved through chrono.
    #[cfg(feature = "chrono")]
    System,
}

impl Default for LocalZone {
    fn default() -> Self {
        #[cfg(feature = "chrono")]
        {
            LocalZone::System
        }
        #[cfg(not(feature = "chrono"))]
        {
            LocalZone::Fixed(UtcOffset::ZERO)
        }
    }
}

impl LocalZone {
    /// The host offset in effect right now, used for the time-only
    /// approximation in the `z` formatter.
    pub(crate) fn current_offset(&self) -> UtcOffset {
        match self {
            LocalZone::Fixed(offset) => *offset,
            #[cfg(feature = "chrono")]
            LocalZone::System => {
                use chrono::Offset;
                UtcOffset::from_minutes(chrono::Local::now().offset().fix().local_minus_utc() / 60)
            }
        }
    }

    /// The host offset in effect at the given instant.
    pub(crate) fn offset_at(&self, instant: &Instant) -> UtcOffset {
        match self {
            LocalZone::Fixed(offset) => *offset,
            #[cfg(feature = "chrono")]
            LocalZone::System => {
                use chrono::{NaiveDate, Offset, TimeZone};

                let (year, month, day) = crate::calendar::gregorian_date(instant);
                let naive = NaiveDate::from_ymd_opt(year as i32, month, day).and_then(|d| {
                    d.and_hms_opt(instant.hour(), instant.minute(), instant.second())
                });
                naive
                    .and_then(|dt| chrono::Local.from_local_datetime(&dt).earliest())
                    .map(|dt| UtcOffset::from_minutes(dt.offset().fix().local_minus_utc() / 60))
                    .unwrap_or_else(|| self.current_offset())
            }
        }
    }
}

/// Options for formatting instants.
#[derive(Debug, Clone, Default)]
pub struct FormatOptions {
    /// The numeral alphabet for numeric fields.
    pub numerals: Numerals,
    /// When set, `y`/`yy` render the full year at width 1/2 instead of
    /// year modulo 100.
    pub two_digit_years: bool,
    /// The locale table: name lookups, separators, standard patterns.
    pub locale: Locale,
    /// The local-offset resolver for local-kind instants.
    pub local_zone: LocalZone,
}

impl FormatOptions {
    /// Options rendering Persian digit glyphs instead of ASCII digits.
    pub fn persian_digits() -> Self {
        FormatOptions {
            numerals: Numerals::Persian,
            ..Default::default()
        }
    }
}
