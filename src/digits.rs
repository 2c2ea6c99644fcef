//! Digit rendering with selectable numeral alphabets.

use crate::error::FormatError;
use crate::options::Numerals;

pub(crate) const ASCII_DIGITS: [char; 10] =
    ['0', '1', '2', '3', '4', '5', '6', '7', '8', '9'];

/// Extended Arabic-Indic digits (U+06F0..U+06F9) as used in Persian text.
pub(crate) const PERSIAN_DIGITS: [char; 10] =
    ['۰', '۱', '۲', '۳', '۴', '۵', '۶', '۷', '۸', '۹'];

/// Append `value` as decimal digits, left-padded with zero glyphs to at
/// least `width` characters.
///
/// Width is a minimum, not a maximum: a value with more digits than `width`
/// is emitted in full. Value 0 still emits `width` zero glyphs.
pub(crate) fn append_padded(
    out: &mut String,
    value: i64,
    width: usize,
    numerals: Numerals,
) -> Result<(), FormatError> {
    if value < 0 {
        return Err(FormatError::NegativeValue { value });
    }

    // Collect least-significant first, pad, then emit reversed.
    let mut reversed: Vec<char> = Vec::with_capacity(width.max(4));
    let mut v = value;
    while v != 0 {
        reversed.push(numerals.digit((v % 10) as usize));
        v /= 10;
    }
    while reversed.len() < width {
        reversed.push(numerals.zero());
    }
    out.extend(reversed.iter().rev());
    Ok(())
}

/// Replace every ASCII digit in `text` with the corresponding Persian digit
/// glyph. Non-digit characters are passed through unchanged.
pub fn to_persian_digits(text: &str) -> String {
    text.chars()
        .map(|c| match c.to_digit(10) {
            Some(d) if c.is_ascii_digit() => PERSIAN_DIGITS[d as usize],
            _ => c,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn padded(value: i64, width: usize, numerals: Numerals) -> String {
        let mut s = String::new();
        append_padded(&mut s, value, width, numerals).unwrap();
        s
    }

    #[test]
    fn test_pad_to_width() {
        assert_eq!(padded(7, 1, Numerals::Ascii), "7");
        assert_eq!(padded(7, 2, Numerals::Ascii), "07");
        assert_eq!(padded(7, 4, Numerals::Ascii), "0007");
    }

    #[test]
    fn test_width_is_a_minimum() {
        assert_eq!(padded(1403, 2, Numerals::Ascii), "1403");
        assert_eq!(padded(1403, 5, Numerals::Ascii), "01403");
    }

    #[test]
    fn test_zero_emits_width_zeros() {
        assert_eq!(padded(0, 1, Numerals::Ascii), "0");
        assert_eq!(padded(0, 3, Numerals::Ascii), "000");
    }

    #[test]
    fn test_persian_glyphs() {
        assert_eq!(padded(25, 4, Numerals::Persian), "۰۰۲۵");
    }

    #[test]
    fn test_negative_value_fails() {
        let mut s = String::new();
        assert_eq!(
            append_padded(&mut s, -1, 2, Numerals::Ascii),
            Err(FormatError::NegativeValue { value: -1 })
        );
    }

    #[test]
    fn test_to_persian_digits() {
        assert_eq!(to_persian_digits("2024"), "۲۰۲۴");
        assert_eq!(to_persian_digits("a1b2"), "a۱b۲");
        assert_eq!(to_persian_digits("بدون رقم"), "بدون رقم");
    }
}
