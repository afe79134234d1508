//! Validated digit strings.
//!
//! [`DigitString`] owns the integer value of every character of the input,
//! so later stages never re-parse characters.

use crate::errors::WindowSumError;

/// An owned sequence of decimal digit values (each `0..=9`).
///
/// Every value is built through [`DigitString::parse`] (also behind
/// `FromStr`), which guarantees each element is a valid digit value.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DigitString {
    values: Vec<u8>,
}

impl DigitString {
    /// Parse `input`, failing on the first character outside `'0'..='9'`.
    ///
    /// Only ASCII digits are accepted; other Unicode numerals are rejected.
    /// The empty string parses to an empty `DigitString`.
    pub fn parse(input: &str) -> Result<Self, WindowSumError> {
        let values = input
            .chars()
            .enumerate()
            .map(|(index, ch)| match ch {
                '0'..='9' => Ok(ch as u8 - b'0'),
                _ => Err(WindowSumError::InvalidCharacter { ch, index }),
            })
            .collect::<Result<Vec<u8>, _>>()?;
        Ok(Self { values })
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// Digit values in input order.
    pub fn values(&self) -> &[u8] {
        &self.values
    }

    /// Sum of every digit in the string.
    pub fn total(&self) -> u64 {
        self.values.iter().map(|&d| u64::from(d)).sum()
    }

    /// Sum of the `len` digits starting at `offset`.
    ///
    /// Callers must pass an offset produced by [`crate::offsets`], so the
    /// range is always in bounds.
    pub(crate) fn window_sum(&self, offset: usize, len: usize) -> u64 {
        self.values[offset..offset + len]
            .iter()
            .map(|&d| u64::from(d))
            .sum()
    }
}

impl std::str::FromStr for DigitString {
    type Err = WindowSumError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_values() {
        let digits = DigitString::parse("09121").unwrap();
        assert_eq!(digits.values(), &[0, 9, 1, 2, 1]);
        assert_eq!(digits.len(), 5);
        assert_eq!(digits.total(), 13);
    }

    #[test]
    fn test_parse_empty() {
        let digits = DigitString::parse("").unwrap();
        assert!(digits.is_empty());
        assert_eq!(digits.total(), 0);
    }

    #[test]
    fn test_parse_rejects_first_non_digit() {
        let err = DigitString::parse("12a4b").unwrap_err();
        assert_eq!(err, WindowSumError::InvalidCharacter { ch: 'a', index: 2 });
    }

    #[test]
    fn test_parse_rejects_whitespace_and_sign() {
        assert!(DigitString::parse(" 12").is_err());
        assert!(DigitString::parse("-12").is_err());
        assert!(DigitString::parse("1 2").is_err());
    }

    #[test]
    fn test_parse_rejects_non_ascii_numerals() {
        // Arabic-Indic digit one, then a fullwidth digit.
        let err = DigitString::parse("1\u{0661}").unwrap_err();
        assert_eq!(
            err,
            WindowSumError::InvalidCharacter { ch: '\u{0661}', index: 1 }
        );
        assert!(DigitString::parse("\u{FF11}").is_err());
    }

    #[test]
    fn test_index_counts_chars_not_bytes() {
        let err = "é9x".parse::<DigitString>().unwrap_err();
        assert_eq!(err, WindowSumError::InvalidCharacter { ch: 'é', index: 0 });
    }

    #[test]
    fn test_window_sum() {
        let digits = DigitString::parse("09121").unwrap();
        assert_eq!(digits.window_sum(0, 3), 10);
        assert_eq!(digits.window_sum(1, 3), 12);
        assert_eq!(digits.window_sum(2, 3), 4);
    }
}
