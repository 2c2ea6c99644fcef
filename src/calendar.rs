//! Calendar field extraction
//!
//! Converts an instant's day number (days since 0001-01-01, proleptic
//! Gregorian) into Persian (Solar Hijri) or Gregorian civil fields, and
//! computes the day of week. Persian conversion goes through Julian day
//! numbers using the arithmetic (Birashk) Solar Hijri calendar.
//!
//! ## Accuracy
//!
//! The official Iranian calendar is fixed by astronomical observation of the
//! March equinox. The arithmetic calendar used here agrees with it for the
//! overwhelming majority of dates but can disagree by one day around the
//! year boundary in a handful of years per century. The tradeoff is the
//! same one made for tabular religious calendars: deterministic integer
//! arithmetic instead of ephemeris computation.

use crate::instant::Instant;

/// Julian day number of 0001-01-01 (proleptic Gregorian), the ticks epoch.
const JDN_DAY_ZERO: i64 = 1_721_426;

/// Julian day number of Farvardin 1, year 1 AP.
const PERSIAN_EPOCH: i64 = 1_948_321;

/// Days in each Gregorian month for non-leap years.
const GREGORIAN_DAYS_IN_MONTH: [u32; 12] = [31, 28, 31, 30, 31, 30, 31, 31, 30, 31, 30, 31];

/// Persian year/month/day for the given instant.
pub(crate) fn persian_date(instant: &Instant) -> (i64, u32, u32) {
    persian_from_jdn(instant.day_number() + JDN_DAY_ZERO)
}

/// Proleptic-Gregorian year/month/day for the given instant.
pub(crate) fn gregorian_date(instant: &Instant) -> (i64, u32, u32) {
    gregorian_from_day_number(instant.day_number())
}

/// Day of week for the given instant, 0 = Sunday through 6 = Saturday.
pub(crate) fn day_of_week(instant: &Instant) -> u32 {
    // 0001-01-01 was a Monday.
    (instant.day_number() + 1).rem_euclid(7) as u32
}

pub(crate) fn is_gregorian_leap_year(year: i64) -> bool {
    (year % 4 == 0 && year % 100 != 0) || year % 400 == 0
}

fn gregorian_days_in_month(year: i64, month: u32) -> u32 {
    if month == 2 && is_gregorian_leap_year(year) {
        29
    } else {
        GREGORIAN_DAYS_IN_MONTH[(month - 1) as usize]
    }
}

pub(crate) fn is_valid_gregorian(year: i32, month: u32, day: u32) -> bool {
    (1..=12).contains(&month)
        && day >= 1
        && day <= gregorian_days_in_month(year as i64, month)
}

/// Days since 0001-01-01 for a proleptic-Gregorian date.
pub(crate) fn day_number_from_gregorian(year: i32, month: u32, day: u32) -> i64 {
    // Shift of the standard civil-from-days algorithm: its epoch is
    // 1970-01-01, which is day 719_162 of the ticks epoch.
    days_from_civil(year as i64, month, day) + 719_162
}

fn gregorian_from_day_number(days: i64) -> (i64, u32, u32) {
    civil_from_days(days - 719_162)
}

fn days_from_civil(year: i64, month: u32, day: u32) -> i64 {
    let y = if month <= 2 { year - 1 } else { year };
    let era = y.div_euclid(400);
    let yoe = y - era * 400;
    let mp = if month > 2 { month - 3 } else { month + 9 } as i64;
    let doy = (153 * mp + 2) / 5 + day as i64 - 1;
    let doe = yoe * 365 + yoe / 4 - yoe / 100 + doy;
    era * 146_097 + doe - 719_468
}

fn civil_from_days(days: i64) -> (i64, u32, u32) {
    let z = days + 719_468;
    let era = z.div_euclid(146_097);
    let doe = z.rem_euclid(146_097);
    let yoe = (doe - doe / 1460 + doe / 36_524 - doe / 146_096) / 365;
    let y = yoe + era * 400;
    let doy = doe - (365 * yoe + yoe / 4 - yoe / 100);
    let mp = (5 * doy + 2) / 153;
    let d = (doy - (153 * mp + 2) / 5 + 1) as u32;
    let m = if mp < 10 { mp + 3 } else { mp - 9 } as u32;
    (if m <= 2 { y + 1 } else { y }, m, d)
}

/// True if the Persian year has 366 days in the arithmetic calendar.
pub(crate) fn is_persian_leap_year(year: i64) -> bool {
    persian_to_jdn(year + 1, 1, 1) - persian_to_jdn(year, 1, 1) == 366
}

fn persian_days_in_month(year: i64, month: u32) -> u32 {
    match month {
        1..=6 => 31,
        7..=11 => 30,
        12 => {
            if is_persian_leap_year(year) {
                30
            } else {
                29
            }
        }
        _ => 0,
    }
}

pub(crate) fn is_valid_persian(year: i32, month: u32, day: u32) -> bool {
    (1..=12).contains(&month) && day >= 1 && day <= persian_days_in_month(year as i64, month)
}

/// Days since 0001-01-01 for a Persian date.
pub(crate) fn day_number_from_persian(year: i32, month: u32, day: u32) -> i64 {
    persian_to_jdn(year as i64, month, day) - JDN_DAY_ZERO
}

fn persian_to_jdn(year: i64, month: u32, day: u32) -> i64 {
    let epbase = if year >= 0 { year - 474 } else { year - 473 };
    let epyear = 474 + epbase.rem_euclid(2820);
    let month_days = if month <= 7 {
        (month as i64 - 1) * 31
    } else {
        (month as i64 - 1) * 30 + 6
    };
    day as i64
        + month_days
        + (epyear * 682 - 110).div_euclid(2816)
        + (epyear - 1) * 365
        + epbase.div_euclid(2820) * 1_029_983
        + PERSIAN_EPOCH
        - 1
}

fn persian_from_jdn(jdn: i64) -> (i64, u32, u32) {
    let depoch = jdn - persian_to_jdn(475, 1, 1);
    let cycle = depoch.div_euclid(1_029_983);
    let cyear = depoch.rem_euclid(1_029_983);
    let ycycle = if cyear == 1_029_982 {
        2820
    } else {
        let aux1 = cyear.div_euclid(366);
        let aux2 = cyear.rem_euclid(366);
        (2134 * aux1 + 2816 * aux2 + 2815).div_euclid(1_028_522) + aux1 + 1
    };
    let mut year = ycycle + 2820 * cycle + 474;
    if year <= 0 {
        // There is no year 0 AP.
        year -= 1;
    }
    let yday = jdn - persian_to_jdn(year, 1, 1) + 1;
    let month = if yday <= 186 {
        ((yday + 30) / 31) as u32
    } else {
        ((yday + 23) / 30) as u32
    };
    let day = (jdn - persian_to_jdn(year, month, 1) + 1) as u32;
    (year, month, day)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::instant::Instant;

    #[test]
    fn test_nowruz_1403() {
        // Farvardin 1, 1403 was March 20, 2024.
        let i = Instant::from_gregorian(2024, 3, 20, 0, 0, 0).unwrap();
        assert_eq!(persian_date(&i), (1403, 1, 1));
        let p = Instant::from_persian(1403, 1, 1, 0, 0, 0).unwrap();
        assert_eq!(i, p);
    }

    #[test]
    fn test_mid_year_date() {
        // Shahrivar 1, 1403 was August 22, 2024.
        let i = Instant::from_gregorian(2024, 8, 22, 0, 0, 0).unwrap();
        assert_eq!(persian_date(&i), (1403, 6, 1));
    }

    #[test]
    fn test_persian_roundtrip_across_months() {
        for &(y, m, d) in &[
            (1403, 1, 1),
            (1403, 6, 31),
            (1403, 7, 1),
            (1403, 11, 30),
            (1403, 12, 29),
            (1400, 12, 29),
            (1375, 12, 30),
        ] {
            let i = Instant::from_persian(y, m, d, 0, 0, 0).unwrap();
            assert_eq!(persian_date(&i), (y as i64, m, d), "for {y}-{m}-{d}");
        }
    }

    #[test]
    fn test_gregorian_roundtrip() {
        for &(y, m, d) in &[(1, 1, 1), (1582, 10, 15), (2000, 2, 29), (2024, 12, 31)] {
            let i = Instant::from_gregorian(y, m, d, 0, 0, 0).unwrap();
            assert_eq!(gregorian_date(&i), (y as i64, m, d), "for {y}-{m}-{d}");
        }
    }

    #[test]
    fn test_day_of_week() {
        // 2024-03-20 was a Wednesday.
        let i = Instant::from_gregorian(2024, 3, 20, 0, 0, 0).unwrap();
        assert_eq!(day_of_week(&i), 3);
        // 0001-01-01 was a Monday.
        assert_eq!(day_of_week(&Instant::from_ticks(0)), 1);
    }

    #[test]
    fn test_persian_leap_years() {
        // 1375 is a leap year in both the arithmetic and official calendars.
        assert!(is_persian_leap_year(1375));
        assert!(!is_persian_leap_year(1376));
    }
}
