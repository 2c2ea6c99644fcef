//! pdfmt - Persian (Solar Hijri) date/time formatting
//!
//! This crate renders instants as localized strings under .NET-style format
//! patterns, using the Persian calendar with Persian month, weekday, and era
//! names, and optionally Persian numeral glyphs.
//!
//! ```
//! use pdfmt::{format, FormatOptions, Instant};
//!
//! let nowruz = Instant::from_persian(1403, 1, 1, 14, 5, 0).unwrap();
//! let opts = FormatOptions::default();
//! assert_eq!(format(&nowruz, "yyyy/MM/dd", &opts).unwrap(), "1403/01/01");
//! assert_eq!(format(&nowruz, "dddd d MMMM", &opts).unwrap(), "چهارشنبه 1 فروردین");
//! ```

pub mod error;
pub mod instant;
pub mod options;

mod calendar;
mod digits;
mod formatter;
mod locale;
mod pattern;

pub use digits::to_persian_digits;
pub use error::FormatError;
pub use formatter::{all_renderings, format, ALL_STANDARD_FORMATS};
pub use instant::{Instant, Kind, UtcOffset};
pub use locale::Locale;
pub use options::{FormatOptions, LocalZone, Numerals};
