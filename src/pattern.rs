//! Pattern scanning primitives.
//!
//! Patterns are scanned as character slices: one cursor, advanced by the
//! consumed length of whatever token was just handled. Validity is
//! discovered token by token; nothing is parsed up front.

use crate::error::FormatError;

/// Counts consecutive occurrences of `ch` starting at `pos` (at least 1;
/// `pos` must point at an occurrence of `ch`).
pub(crate) fn count_repeat(pattern: &[char], pos: usize, ch: char) -> usize {
    let mut index = pos + 1;
    while index < pattern.len() && pattern[index] == ch {
        index += 1;
    }
    index - pos
}

/// The character immediately after `pos`, or `None` at end of pattern.
pub(crate) fn peek_next(pattern: &[char], pos: usize) -> Option<char> {
    pattern.get(pos + 1).copied()
}

/// Consumes a quoted literal. `pos` must point at the opening quote
/// character (`'` or `"`); the literal runs until the same quote recurs.
/// Inside the quotes a backslash escapes the following character.
///
/// Returns the number of pattern characters consumed, including both quote
/// delimiters, and the literal text.
pub(crate) fn consume_quoted(
    pattern: &[char],
    pos: usize,
) -> Result<(usize, String), FormatError> {
    let quote = pattern[pos];
    let mut literal = String::new();
    let mut index = pos + 1;

    while index < pattern.len() {
        let ch = pattern[index];
        index += 1;
        if ch == quote {
            return Ok((index - pos, literal));
        }
        if ch == '\\' {
            // Escapes work inside quoted literals too, so a pattern like
            // "'minute:' mm\"" can emit a double quote.
            match pattern.get(index) {
                Some(&escaped) => {
                    literal.push(escaped);
                    index += 1;
                }
                None => return Err(FormatError::TrailingEscape { position: index - 1 }),
            }
        } else {
            literal.push(ch);
        }
    }

    Err(FormatError::UnterminatedQuote { position: pos })
}
