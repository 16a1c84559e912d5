//! Black-peg / white-peg scoring
//!
//! A score is the pair `(exact, color_only)`:
//! - `exact` counts positions where both codes hold the same color
//! - `color_only` counts the remaining color agreements,
//!   `Σ_c min(count_a(c), count_b(c)) − exact`

use super::{Code, CodeSpace};
use std::fmt;

/// Feedback for one guess against one secret
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Score {
    exact: u8,
    color_only: u8,
}

impl Score {
    /// Create a score from its two counts
    #[inline]
    #[must_use]
    pub const fn new(exact: u8, color_only: u8) -> Self {
        Self { exact, color_only }
    }

    /// The winning score for `pegs` pegs
    #[inline]
    #[must_use]
    pub const fn solved(pegs: usize) -> Self {
        Self::new(pegs as u8, 0)
    }

    /// Pegs with the right color in the right position (black pegs)
    #[inline]
    #[must_use]
    pub const fn exact(self) -> u8 {
        self.exact
    }

    /// Right colors in the wrong position (white pegs)
    #[inline]
    #[must_use]
    pub const fn color_only(self) -> u8 {
        self.color_only
    }

    /// Index into a `(pegs + 1) × (pegs + 1)` bucket table
    #[inline]
    #[must_use]
    pub const fn bucket(self, pegs: usize) -> usize {
        self.exact as usize * (pegs + 1) + self.color_only as usize
    }

    /// Score two codes against each other
    ///
    /// The result is symmetric in `a` and `b`.
    ///
    /// # Examples
    /// ```
    /// use logik::core::{CodeSpace, Rules, Score};
    ///
    /// let space = CodeSpace::new(Rules::CLASSIC);
    /// let a = space.parse("01234").unwrap();
    /// let b = space.parse("43210").unwrap();
    ///
    /// // Only the middle peg is exact; the other four colors are swapped around
    /// assert_eq!(Score::calculate(&space, a, b), Score::new(1, 4));
    /// ```
    #[must_use]
    pub fn calculate(space: &CodeSpace, a: Code, b: Code) -> Self {
        let exact = space
            .digits(a)
            .iter()
            .zip(space.digits(b))
            .filter(|(x, y)| x == y)
            .count() as u8;

        let overlap: u8 = space
            .color_counts(a)
            .iter()
            .zip(space.color_counts(b))
            .map(|(&na, &nb)| na.min(nb))
            .sum();

        Self::new(exact, overlap - exact)
    }
}

impl fmt::Display for Score {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({},{})", self.exact, self.color_only)
    }
}
