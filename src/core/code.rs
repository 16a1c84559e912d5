//! Codes and the code space
//!
//! A code is an integer in `[0, C^P)` read as P base-C digits, least-significant
//! digit first: peg 1 is `code % C`, peg 2 is `(code / C) % C`, and so on.
//! Codes are rendered most-significant digit first, so for the classic rules the
//! text form of a code is its 5-digit octal value.

use super::Rules;
use std::fmt;

/// A single code (a secret or a guess)
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Code(u32);

impl Code {
    /// Wrap a raw code index
    #[inline]
    #[must_use]
    pub const fn new(value: u32) -> Self {
        Self(value)
    }

    /// Raw code value
    #[inline]
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }

    /// Code value as a table index
    #[inline]
    #[must_use]
    pub const fn index(self) -> usize {
        self.0 as usize
    }
}

/// Error type for code text that does not fit the rules
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CodeError {
    InvalidLength { expected: usize, got: usize },
    InvalidDigit(char),
}

impl fmt::Display for CodeError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidLength { expected, got } => {
                write!(f, "Code must have exactly {expected} pegs, got {got}")
            }
            Self::InvalidDigit(ch) => write!(f, "'{ch}' is not a valid peg color"),
        }
    }
}

impl std::error::Error for CodeError {}

/// Every code for a rule set, with per-code digit and color tables
///
/// The tables turn scoring into a couple of short slice walks, which matters
/// because the minimax search scores every code against every candidate.
#[derive(Debug, Clone)]
pub struct CodeSpace {
    rules: Rules,
    size: usize,
    digits: Vec<u8>,
    color_counts: Vec<u8>,
}

impl CodeSpace {
    /// Enumerate the code space for the given rules
    ///
    /// # Examples
    /// ```
    /// use logik::core::{CodeSpace, Rules};
    ///
    /// let space = CodeSpace::new(Rules::CLASSIC);
    /// assert_eq!(space.len(), 32768);
    /// ```
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        let pegs = rules.pegs();
        let colors = rules.colors();
        let size = rules.space_size();

        let mut digits = Vec::with_capacity(size * pegs);
        let mut color_counts = vec![0u8; size * colors];

        for code in 0..size {
            let mut rest = code;
            let counts = &mut color_counts[code * colors..(code + 1) * colors];
            for _ in 0..pegs {
                let digit = rest % colors;
                digits.push(digit as u8);
                counts[digit] += 1;
                rest /= colors;
            }
        }

        Self {
            rules,
            size,
            digits,
            color_counts,
        }
    }

    /// Rules this space was built for
    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    /// Number of codes (C^P)
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.size
    }

    /// A valid rule set never produces an empty space
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// All codes in increasing order
    pub fn codes(&self) -> impl Iterator<Item = Code> + use<> {
        (0..self.size as u32).map(Code::new)
    }

    /// Check that a code belongs to this space
    #[inline]
    #[must_use]
    pub const fn contains(&self, code: Code) -> bool {
        code.index() < self.size
    }

    /// Peg colors of a code, peg 1 first
    ///
    /// # Panics
    /// Panics if the code is outside the space
    #[inline]
    #[must_use]
    pub fn digits(&self, code: Code) -> &[u8] {
        let pegs = self.rules.pegs();
        &self.digits[code.index() * pegs..(code.index() + 1) * pegs]
    }

    /// Number of pegs of each color in a code
    ///
    /// # Panics
    /// Panics if the code is outside the space
    #[inline]
    #[must_use]
    pub fn color_counts(&self, code: Code) -> &[u8] {
        let colors = self.rules.colors();
        &self.color_counts[code.index() * colors..(code.index() + 1) * colors]
    }

    /// Render a code most-significant peg first, e.g. `01234`
    #[must_use]
    pub fn render(&self, code: Code) -> String {
        let radix = self.rules.colors() as u32;
        self.digits(code)
            .iter()
            .rev()
            .map(|&d| char::from_digit(u32::from(d), radix).unwrap_or('?'))
            .collect()
    }

    /// Parse the text form produced by [`CodeSpace::render`]
    ///
    /// # Errors
    /// Returns `CodeError` if the text does not have exactly P digits or a
    /// digit is not a color of this space.
    ///
    /// # Examples
    /// ```
    /// use logik::core::{CodeSpace, Rules};
    ///
    /// let space = CodeSpace::new(Rules::CLASSIC);
    /// let code = space.parse("00017").unwrap();
    /// assert_eq!(code.value(), 0o17);
    /// assert_eq!(space.render(code), "00017");
    ///
    /// assert!(space.parse("00018").is_err());
    /// ```
    pub fn parse(&self, text: &str) -> Result<Code, CodeError> {
        let pegs = self.rules.pegs();
        let radix = self.rules.colors() as u32;

        let got = text.chars().count();
        if got != pegs {
            return Err(CodeError::InvalidLength {
                expected: pegs,
                got,
            });
        }

        let mut value = 0u32;
        for ch in text.chars() {
            let digit = ch
                .to_digit(radix)
                .ok_or(CodeError::InvalidDigit(ch))?;
            value = value * radix + digit;
        }

        Ok(Code::new(value))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn tiny() -> CodeSpace {
        CodeSpace::new(Rules::new(2, 2).unwrap())
    }

    #[test]
    fn codes_are_enumerated_in_order() {
        let space = tiny();
        let codes: Vec<u32> = space.codes().map(Code::value).collect();
        assert_eq!(codes, vec![0, 1, 2, 3]);
        assert!(!space.is_empty());
        assert!(space.contains(Code::new(3)));
        assert!(!space.contains(Code::new(4)));
    }

    #[test]
    fn digits_are_least_significant_first() {
        let space = CodeSpace::new(Rules::CLASSIC);
        let code = Code::new(0o12345);
        assert_eq!(space.digits(code), &[5, 4, 3, 2, 1]);
    }

    #[test]
    fn color_counts_sum_to_pegs() {
        let space = CodeSpace::new(Rules::new(3, 4).unwrap());
        for code in space.codes() {
            let total: u32 = space.color_counts(code).iter().map(|&n| u32::from(n)).sum();
            assert_eq!(total, 3);
        }
    }

    #[test]
    fn color_counts_with_repeats() {
        let space = CodeSpace::new(Rules::CLASSIC);
        let code = space.parse("70077").unwrap();
        assert_eq!(space.color_counts(code), &[2, 0, 0, 0, 0, 0, 0, 3]);
    }

    #[test]
    fn render_matches_octal_for_classic_rules() {
        let space = CodeSpace::new(Rules::CLASSIC);
        for value in [0u32, 0o7, 0o123, 0o76543, 0o77777] {
            assert_eq!(space.render(Code::new(value)), format!("{value:05o}"));
        }
    }

    #[test]
    fn render_and_parse_tiny_space() {
        let space = tiny();
        let rendered: Vec<String> = space.codes().map(|c| space.render(c)).collect();
        assert_eq!(rendered, vec!["00", "01", "10", "11"]);
        assert_eq!(space.parse("10").unwrap(), Code::new(2));
    }

    #[test]
    fn parse_rejects_bad_input() {
        let space = CodeSpace::new(Rules::CLASSIC);
        assert_eq!(
            space.parse("0123"),
            Err(CodeError::InvalidLength {
                expected: 5,
                got: 4
            })
        );
        assert_eq!(space.parse("01238"), Err(CodeError::InvalidDigit('8')));
        assert_eq!(space.parse("0x123"), Err(CodeError::InvalidDigit('x')));
    }
}
