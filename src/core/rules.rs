//! Game parameters
//!
//! The shipped generator always plays the classic Logik rules (5 pegs, 8 colors).
//! Smaller rule sets exist so the search can be exercised on tiny code spaces.

use std::fmt;

/// Largest code space the generator accepts (2^24 codes)
const MAX_SPACE: usize = 1 << 24;

/// Peg and color counts for a game
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rules {
    pegs: usize,
    colors: usize,
}

/// Error type for unsupported rule sets
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RulesError {
    NoPegs,
    TooFewColors(usize),
    TooManyColors(usize),
    SpaceTooLarge { pegs: usize, colors: usize },
}

impl fmt::Display for RulesError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::NoPegs => write!(f, "A code needs at least one peg"),
            Self::TooFewColors(colors) => {
                write!(f, "At least 2 colors are required, got {colors}")
            }
            Self::TooManyColors(colors) => {
                write!(f, "At most 36 colors can be rendered, got {colors}")
            }
            Self::SpaceTooLarge { pegs, colors } => {
                write!(f, "{colors}^{pegs} codes exceed the supported space")
            }
        }
    }
}

impl std::error::Error for RulesError {}

impl Rules {
    /// Classic Logik: five pegs, eight colors (32,768 codes)
    pub const CLASSIC: Self = Self {
        pegs: 5,
        colors: 8,
    };

    /// Create a rule set
    ///
    /// # Errors
    /// Returns `RulesError` if there are no pegs, fewer than 2 or more than 36
    /// colors, or the resulting code space exceeds 2^24 codes.
    ///
    /// # Examples
    /// ```
    /// use logik::core::Rules;
    ///
    /// let tiny = Rules::new(2, 2).unwrap();
    /// assert_eq!(tiny.space_size(), 4);
    ///
    /// assert!(Rules::new(0, 8).is_err());
    /// ```
    pub fn new(pegs: usize, colors: usize) -> Result<Self, RulesError> {
        if pegs == 0 {
            return Err(RulesError::NoPegs);
        }
        if colors < 2 {
            return Err(RulesError::TooFewColors(colors));
        }
        if colors > 36 {
            return Err(RulesError::TooManyColors(colors));
        }

        let fits = u32::try_from(pegs)
            .ok()
            .and_then(|p| colors.checked_pow(p))
            .is_some_and(|size| size <= MAX_SPACE);
        if !fits {
            return Err(RulesError::SpaceTooLarge { pegs, colors });
        }

        Ok(Self { pegs, colors })
    }

    /// Number of pegs per code (P)
    #[inline]
    #[must_use]
    pub const fn pegs(self) -> usize {
        self.pegs
    }

    /// Number of peg colors (C)
    #[inline]
    #[must_use]
    pub const fn colors(self) -> usize {
        self.colors
    }

    /// Number of distinct codes (C^P)
    #[must_use]
    pub fn space_size(self) -> usize {
        // Bounded by MAX_SPACE at construction
        (0..self.pegs).fold(1, |size, _| size * self.colors)
    }
}

impl Default for Rules {
    fn default() -> Self {
        Self::CLASSIC
    }
}

impl fmt::Display for Rules {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} pegs × {} colors", self.pegs, self.colors)
    }
}
