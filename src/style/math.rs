//! Mathematical alphanumeric alphabets.

use super::{CharTransform, CodepointRule, ConvertContext};

// ============================================================================
// MathAlphabet
// ============================================================================

/// A Mathematical Alphanumeric Symbols alphabet.
///
/// ASCII letters map to `base + position` within their case block. Some
/// letters were encoded in Letterlike Symbols before the math block existed,
/// leaving a reserved hole at their arithmetic slot; those are listed as
/// exceptions and map to the older standalone symbol instead.
///
/// Digits are mapped only when the alphabet has a digit block.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MathAlphabet {
    upper: u32,
    lower: u32,
    digits: Option<u32>,
    exceptions: &'static [(char, char)],
}

impl MathAlphabet {
    /// Creates an alphabet from the codepoints of `A` and `a`.
    pub const fn new(upper: u32, lower: u32) -> Self {
        Self {
            upper,
            lower,
            digits: None,
            exceptions: &[],
        }
    }

    /// Adds a digit block starting at the codepoint of `0`.
    pub const fn with_digits(mut self, zero: u32) -> Self {
        self.digits = Some(zero);
        self
    }

    /// Sets the letters that bypass the arithmetic.
    pub const fn with_exceptions(mut self, exceptions: &'static [(char, char)]) -> Self {
        self.exceptions = exceptions;
        self
    }

    /// Returns the exception symbol for `c`, if it is an exception letter.
    pub fn exception(&self, c: char) -> Option<char> {
        self.exceptions
            .iter()
            .find(|&&(from, _)| from == c)
            .map(|&(_, to)| to)
    }

    /// Maps one character, returning it unchanged when not covered.
    pub fn map_char(&self, c: char) -> char {
        if let Some(symbol) = self.exception(c) {
            return symbol;
        }

        let shifted = match c {
            'A'..='Z' => offset(self.upper, c, 'A'),
            'a'..='z' => offset(self.lower, c, 'a'),
            '0'..='9' => self.digits.and_then(|zero| offset(zero, c, '0')),
            _ => None,
        };
        shifted.unwrap_or(c)
    }
}

fn offset(base: u32, c: char, first: char) -> Option<char> {
    char::from_u32(base + (c as u32 - first as u32))
}

impl CharTransform for MathAlphabet {
    fn transform(&self, c: char, _ctx: &mut ConvertContext<'_>, out: &mut String) {
        out.push(self.map_char(c));
    }
}

impl From<MathAlphabet> for CodepointRule {
    fn from(alphabet: MathAlphabet) -> Self {
        Self::Math(alphabet)
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    const BOLD: MathAlphabet = MathAlphabet::new(0x1D400, 0x1D41A);
    const ITALIC: MathAlphabet =
        MathAlphabet::new(0x1D434, 0x1D44E).with_exceptions(&[('h', 'ℎ')]);
    const MONO: MathAlphabet = MathAlphabet::new(0x1D670, 0x1D68A).with_digits(0x1D7F6);

    #[test]
    fn letters_use_block_offsets() {
        assert_eq!(BOLD.map_char('A'), '𝐀');
        assert_eq!(BOLD.map_char('Z'), '𝐙');
        assert_eq!(BOLD.map_char('a'), '𝐚');
        assert_eq!(BOLD.map_char('z'), '𝐳');
    }

    #[test]
    fn exceptions_bypass_arithmetic() {
        assert_eq!(ITALIC.map_char('h'), 'ℎ');
        // The arithmetic slot for italic h is an unassigned hole.
        assert_ne!(ITALIC.map_char('h'), '\u{1D455}');
        assert_eq!(ITALIC.map_char('g'), '𝑔');
        assert_eq!(ITALIC.map_char('H'), '𝐻');
    }

    #[test]
    fn digits_only_with_digit_block() {
        assert_eq!(MONO.map_char('0'), '𝟶');
        assert_eq!(MONO.map_char('9'), '𝟿');
        assert_eq!(BOLD.map_char('7'), '7');
    }

    #[test]
    fn everything_else_passes_through() {
        for c in [' ', '!', 'é', 'Ж', '😀', '\n'] {
            assert_eq!(BOLD.map_char(c), c);
        }
    }
}
