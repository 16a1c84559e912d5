//! Response classes
//!
//! The ordered list of scores that can label a child of a tree node. The
//! winning score `(P, 0)` is not a class: a secret equal to the guess ends the
//! game at that node. `(P - 1, 1)` is never achievable and is left out too.

use super::{Rules, Score};

/// Canonically ordered response classes for a rule set
///
/// Order is increasing `exact`, then increasing `color_only`. Child slots,
/// printed output and tie-breaks all follow this order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResponseClasses {
    pegs: usize,
    classes: Vec<Score>,
    by_bucket: Vec<Option<usize>>,
}

impl ResponseClasses {
    /// Enumerate the response classes for the given rules
    ///
    /// # Examples
    /// ```
    /// use logik::core::{ResponseClasses, Rules};
    ///
    /// let classes = ResponseClasses::new(Rules::CLASSIC);
    /// assert_eq!(classes.len(), 19);
    /// ```
    #[must_use]
    pub fn new(rules: Rules) -> Self {
        let pegs = rules.pegs();
        let mut classes = Vec::new();
        let mut by_bucket = vec![None; (pegs + 1) * (pegs + 1)];

        for exact in 0..pegs {
            for color_only in 0..=pegs - exact {
                if exact == pegs - 1 && color_only == 1 {
                    continue;
                }
                let score = Score::new(exact as u8, color_only as u8);
                by_bucket[score.bucket(pegs)] = Some(classes.len());
                classes.push(score);
            }
        }

        Self {
            pegs,
            classes,
            by_bucket,
        }
    }

    /// Number of classes (19 for five pegs)
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.classes.len()
    }

    /// Always false for a valid rule set
    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.classes.is_empty()
    }

    /// Score of the class at `index`
    ///
    /// # Panics
    /// Panics if `index >= len()`
    #[inline]
    #[must_use]
    pub fn get(&self, index: usize) -> Score {
        self.classes[index]
    }

    /// Classes in canonical order
    pub fn iter(&self) -> impl Iterator<Item = Score> + '_ {
        self.classes.iter().copied()
    }

    /// Class index of a score, or `None` for the winning score
    #[inline]
    #[must_use]
    pub fn index_of(&self, score: Score) -> Option<usize> {
        self.by_bucket.get(score.bucket(self.pegs)).copied().flatten()
    }
}
