//! The instant value being formatted.
//!
//! An [`Instant`] is a point in time measured in ticks (100-nanosecond
//! units) since 0001-01-01 00:00:00 in the proleptic Gregorian calendar,
//! tagged with a [`Kind`] and an optional explicit UTC offset. Instants are
//! immutable; every adjustment produces a new value.

use crate::calendar;

/// Ticks (100ns units) in one second.
pub const TICKS_PER_SECOND: i64 = 10_000_000;
/// Ticks in one minute.
pub const TICKS_PER_MINUTE: i64 = 60 * TICKS_PER_SECOND;
/// Ticks in one hour.
pub const TICKS_PER_HOUR: i64 = 60 * TICKS_PER_MINUTE;
/// Ticks in one day.
pub const TICKS_PER_DAY: i64 = 24 * TICKS_PER_HOUR;

/// Whether an instant represents local time, UTC, or neither.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Kind {
    #[default]
    Unspecified,
    Local,
    Utc,
}

/// A fixed offset from UTC, stored as total minutes east of UTC.
///
/// An instant without an explicit offset carries `None` rather than a
/// sentinel value, so a legitimate zero offset stays distinguishable from
/// "no offset".
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct UtcOffset {
    minutes: i32,
}

impl UtcOffset {
    pub const ZERO: UtcOffset = UtcOffset { minutes: 0 };

    /// Offset from total minutes east of UTC.
    pub fn from_minutes(minutes: i32) -> Self {
        UtcOffset { minutes }
    }

    /// Offset from an hour count and a minute magnitude (0..60). The sign
    /// of `hours` applies to the whole offset, so `from_hm(-4, 30)` is
    /// -04:30.
    pub fn from_hm(hours: i32, minutes: i32) -> Self {
        let total = if hours < 0 {
            hours * 60 - minutes
        } else {
            hours * 60 + minutes
        };
        UtcOffset { minutes: total }
    }

    /// Total minutes east of UTC (negative for western offsets).
    pub fn total_minutes(&self) -> i32 {
        self.minutes
    }

    pub(crate) fn is_negative(&self) -> bool {
        self.minutes < 0
    }

    /// Hour component of the offset magnitude.
    pub(crate) fn hours_abs(&self) -> i64 {
        (self.minutes.abs() / 60) as i64
    }

    /// Minute component of the offset magnitude.
    pub(crate) fn minutes_abs(&self) -> i64 {
        (self.minutes.abs() % 60) as i64
    }

    pub(crate) fn as_ticks(&self) -> i64 {
        self.minutes as i64 * TICKS_PER_MINUTE
    }
}

/// A point in time plus calendar-kind tag and optional explicit UTC offset.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Instant {
    ticks: i64,
    kind: Kind,
    offset: Option<UtcOffset>,
}

impl Instant {
    /// An instant from raw ticks, with `Unspecified` kind and no offset.
    pub fn from_ticks(ticks: i64) -> Self {
        Instant {
            ticks,
            kind: Kind::Unspecified,
            offset: None,
        }
    }

    /// An instant from proleptic-Gregorian civil fields.
    ///
    /// Returns `None` if any field is out of range.
    pub fn from_gregorian(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        if !calendar::is_valid_gregorian(year, month, day) {
            return None;
        }
        let days = calendar::day_number_from_gregorian(year, month, day);
        Instant::from_parts(days, hour, minute, second)
    }

    /// An instant from Persian (Solar Hijri) civil fields.
    ///
    /// Returns `None` if any field is out of range.
    pub fn from_persian(
        year: i32,
        month: u32,
        day: u32,
        hour: u32,
        minute: u32,
        second: u32,
    ) -> Option<Self> {
        if !calendar::is_valid_persian(year, month, day) {
            return None;
        }
        let days = calendar::day_number_from_persian(year, month, day);
        Instant::from_parts(days, hour, minute, second)
    }

    fn from_parts(days: i64, hour: u32, minute: u32, second: u32) -> Option<Self> {
        if hour > 23 || minute > 59 || second > 59 {
            return None;
        }
        let ticks = days * TICKS_PER_DAY
            + hour as i64 * TICKS_PER_HOUR
            + minute as i64 * TICKS_PER_MINUTE
            + second as i64 * TICKS_PER_SECOND;
        Some(Instant::from_ticks(ticks))
    }

    /// The same instant with a different kind tag.
    pub fn with_kind(self, kind: Kind) -> Self {
        Instant { kind, ..self }
    }

    /// The same instant carrying an explicit UTC offset.
    pub fn with_offset(self, offset: UtcOffset) -> Self {
        Instant {
            offset: Some(offset),
            ..self
        }
    }

    /// The same instant with any explicit offset removed.
    pub fn without_offset(self) -> Self {
        Instant {
            offset: None,
            ..self
        }
    }

    /// The instant shifted by a signed tick count, keeping kind and offset.
    pub fn add_ticks(self, ticks: i64) -> Self {
        Instant {
            ticks: self.ticks + ticks,
            ..self
        }
    }

    pub fn ticks(&self) -> i64 {
        self.ticks
    }

    pub fn kind(&self) -> Kind {
        self.kind
    }

    pub fn offset(&self) -> Option<UtcOffset> {
        self.offset
    }

    /// Whole days since 0001-01-01.
    pub(crate) fn day_number(&self) -> i64 {
        self.ticks.div_euclid(TICKS_PER_DAY)
    }

    pub fn hour(&self) -> u32 {
        (self.ticks.div_euclid(TICKS_PER_HOUR).rem_euclid(24)) as u32
    }

    pub fn minute(&self) -> u32 {
        (self.ticks.div_euclid(TICKS_PER_MINUTE).rem_euclid(60)) as u32
    }

    pub fn second(&self) -> u32 {
        (self.ticks.div_euclid(TICKS_PER_SECOND).rem_euclid(60)) as u32
    }

    /// Sub-second ticks (0..10_000_000).
    pub fn fraction_ticks(&self) -> i64 {
        self.ticks.rem_euclid(TICKS_PER_SECOND)
    }
}

#[cfg(feature = "chrono")]
mod chrono_impls {
    use super::*;
    use chrono::{DateTime, Datelike, FixedOffset, NaiveDateTime, Timelike, Utc};

    fn ticks_from_naive(dt: &NaiveDateTime) -> i64 {
        // num_days_from_ce() is 1 for 0001-01-01.
        let days = dt.date().num_days_from_ce() as i64 - 1;
        days * TICKS_PER_DAY
            + dt.hour() as i64 * TICKS_PER_HOUR
            + dt.minute() as i64 * TICKS_PER_MINUTE
            + dt.second() as i64 * TICKS_PER_SECOND
            + dt.nanosecond() as i64 / 100
    }

    impl From<NaiveDateTime> for Instant {
        fn from(dt: NaiveDateTime) -> Self {
            Instant::from_ticks(ticks_from_naive(&dt))
        }
    }

    impl From<DateTime<Utc>> for Instant {
        fn from(dt: DateTime<Utc>) -> Self {
            Instant::from_ticks(ticks_from_naive(&dt.naive_utc())).with_kind(Kind::Utc)
        }
    }

    impl From<DateTime<FixedOffset>> for Instant {
        fn from(dt: DateTime<FixedOffset>) -> Self {
            // Clock-face time plus the explicit offset, like DateTimeOffset.
            let offset = UtcOffset::from_minutes(dt.offset().local_minus_utc() / 60);
            Instant::from_ticks(ticks_from_naive(&dt.naive_local())).with_offset(offset)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_accessors() {
        let i = Instant::from_gregorian(2024, 3, 20, 14, 5, 9).unwrap();
        assert_eq!(i.hour(), 14);
        assert_eq!(i.minute(), 5);
        assert_eq!(i.second(), 9);
        assert_eq!(i.fraction_ticks(), 0);
    }

    #[test]
    fn test_add_ticks_keeps_kind_and_offset() {
        let i = Instant::from_ticks(0)
            .with_kind(Kind::Utc)
            .with_offset(UtcOffset::ZERO)
            .add_ticks(42);
        assert_eq!(i.ticks(), 42);
        assert_eq!(i.kind(), Kind::Utc);
        assert_eq!(i.offset(), Some(UtcOffset::ZERO));
    }

    #[test]
    fn test_offset_from_hm() {
        let off = UtcOffset::from_hm(-4, 30);
        assert_eq!(off.total_minutes(), -270);
        assert!(off.is_negative());
        assert_eq!(off.hours_abs(), 4);
        assert_eq!(off.minutes_abs(), 30);

        let off = UtcOffset::from_hm(3, 30);
        assert_eq!(off.total_minutes(), 210);
    }

    #[test]
    fn test_invalid_fields_rejected() {
        assert!(Instant::from_gregorian(2024, 13, 1, 0, 0, 0).is_none());
        assert!(Instant::from_gregorian(2024, 2, 30, 0, 0, 0).is_none());
        assert!(Instant::from_gregorian(2024, 3, 20, 24, 0, 0).is_none());
        assert!(Instant::from_persian(1403, 0, 1, 0, 0, 0).is_none());
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_from_naive_datetime() {
        use chrono::NaiveDate;

        let dt = NaiveDate::from_ymd_opt(2024, 3, 20)
            .unwrap()
            .and_hms_opt(14, 5, 9)
            .unwrap();
        let i = Instant::from(dt);
        assert_eq!(i, Instant::from_gregorian(2024, 3, 20, 14, 5, 9).unwrap());
        assert_eq!(i.kind(), Kind::Unspecified);
    }

    #[cfg(feature = "chrono")]
    #[test]
    fn test_from_fixed_offset_datetime() {
        use chrono::{FixedOffset, NaiveDate, TimeZone};

        let tz = FixedOffset::east_opt(3 * 3600 + 30 * 60).unwrap();
        let dt = tz
            .from_local_datetime(
                &NaiveDate::from_ymd_opt(2024, 3, 20)
                    .unwrap()
                    .and_hms_opt(14, 5, 9)
                    .unwrap(),
            )
            .unwrap();
        let i = Instant::from(dt);
        assert_eq!(i.offset(), Some(UtcOffset::from_hm(3, 30)));
        assert_eq!(i.hour(), 14);
    }
}
