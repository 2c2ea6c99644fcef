//! Built-in locale data.

/// Locale settings for formatting: name tables, separators, and the
/// patterns behind the single-letter standard formats.
///
/// Day name tables are indexed by day of week with 0 = Sunday.
#[derive(Debug, Clone)]
pub struct Locale {
    pub am_string: &'static str,
    pub pm_string: &'static str,
    pub era_name: &'static str,
    pub time_separator: &'static str,
    pub date_separator: &'static str,
    pub month_names_short: [&'static str; 12],
    pub month_names_full: [&'static str; 12],
    pub day_names_short: [&'static str; 7],
    pub day_names_full: [&'static str; 7],
    pub short_date_pattern: &'static str,
    pub long_date_pattern: &'static str,
    pub short_time_pattern: &'static str,
    pub long_time_pattern: &'static str,
    pub full_date_time_pattern: &'static str,
    pub sortable_pattern: &'static str,
    pub universal_sortable_pattern: &'static str,
    pub rfc1123_pattern: &'static str,
    pub month_day_pattern: &'static str,
    pub year_month_pattern: &'static str,
    /// Default pattern for offset-bearing instants formatted with an empty
    /// pattern string.
    pub date_time_offset_pattern: &'static str,
}

impl Default for Locale {
    fn default() -> Self {
        Self::persian()
    }
}

impl Locale {
    /// The Persian (fa-IR) locale with Solar Hijri month and weekday names.
    pub fn persian() -> Self {
        Locale {
            am_string: "ق.ظ",
            pm_string: "ب.ظ",
            era_name: "ه.ش.",
            time_separator: ":",
            date_separator: "/",
            month_names_short: [
                "فرو", "ارد", "خرد", "تیر", "مرد", "شهر", "مهر", "آبا", "آذر", "دی", "بهم", "اسف",
            ],
            month_names_full: [
                "فروردین",
                "اردیبهشت",
                "خرداد",
                "تیر",
                "مرداد",
                "شهریور",
                "مهر",
                "آبان",
                "آذر",
                "دی",
                "بهمن",
                "اسفند",
            ],
            day_names_short: ["بک", "دو", "سه", "چها", "پنج", "جمع", "شنب"],
            day_names_full: [
                "یک‌شنبه",
                "دوشنبه",
                "سه‌شنبه",
                "چهارشنبه",
                "پنج‌شنبه",
                "جمعه",
                "شنبه",
            ],
            short_date_pattern: "yyyy/MM/dd",
            long_date_pattern: "dddd, d MMMM yyyy",
            short_time_pattern: "HH:mm",
            long_time_pattern: "HH:mm:ss",
            full_date_time_pattern: "dddd, d MMMM yyyy HH:mm:ss",
            sortable_pattern: "yyyy'-'MM'-'dd'T'HH':'mm':'ss",
            universal_sortable_pattern: "yyyy'-'MM'-'dd HH':'mm':'ss'Z'",
            rfc1123_pattern: "ddd, dd MMM yyyy HH':'mm':'ss 'GMT'",
            month_day_pattern: "d MMMM",
            year_month_pattern: "MMMM yyyy",
            date_time_offset_pattern: "yyyy/MM/dd HH:mm:ss zzz",
        }
    }
}
