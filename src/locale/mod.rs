//! Locale data for Persian date/time formatting.

mod builtin;

pub use builtin::Locale;
