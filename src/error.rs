//! Error types for pattern interpretation and formatting.

use thiserror::Error;

/// Errors that can occur when formatting an instant.
///
/// Malformed patterns are discovered token by token during the single
/// left-to-right scan; on error no partial output is returned.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FormatError {
    #[error("cannot render negative value {value} as digits")]
    NegativeValue { value: i64 },

    #[error("unterminated quoted literal starting at position {position}")]
    UnterminatedQuote { position: usize },

    #[error("trailing backslash at position {position}")]
    TrailingEscape { position: usize },

    #[error("'%' at position {position} must be followed by a format character other than '%'")]
    DanglingPercent { position: usize },

    #[error("fractional-second specifier at position {position} is longer than 7 digits")]
    TooManyFractionDigits { position: usize },

    #[error("unknown standard format '{letter}'")]
    UnknownStandardFormat { letter: char },

    #[error("the 'U' standard format does not support offset-bearing instants")]
    OffsetNotSupported,

    #[error("the 'u' standard format cannot be applied to a local-kind instant")]
    LocalKindNotSupported,
}
