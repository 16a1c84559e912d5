//! Boolean predicates over the code space
//!
//! Used for both the candidate set (codes still consistent with the path) and
//! the guessed set (codes already played on the path). Sets are plain values:
//! each recursive step clones what it needs and never shares it with a sibling.

use super::Code;

/// A subset of the code space
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CodeSet {
    members: Vec<bool>,
    count: usize,
}

impl CodeSet {
    /// The empty set over a space of `size` codes
    #[must_use]
    pub fn empty(size: usize) -> Self {
        Self {
            members: vec![false; size],
            count: 0,
        }
    }

    /// The set of all `size` codes
    #[must_use]
    pub fn full(size: usize) -> Self {
        Self {
            members: vec![true; size],
            count: size,
        }
    }

    /// Membership test
    #[inline]
    #[must_use]
    pub fn contains(&self, code: Code) -> bool {
        self.members[code.index()]
    }

    /// Add a code to the set
    pub fn insert(&mut self, code: Code) {
        let slot = &mut self.members[code.index()];
        if !*slot {
            *slot = true;
            self.count += 1;
        }
    }

    /// Set of the given codes over a space of `size` codes
    ///
    /// # Panics
    /// Panics if a code lies outside the space
    #[must_use]
    pub fn from_codes(size: usize, codes: impl IntoIterator<Item = Code>) -> Self {
        let mut set = Self::empty(size);
        for code in codes {
            set.insert(code);
        }
        set
    }

    /// Copy of this set with one more code
    #[must_use]
    pub fn with(&self, code: Code) -> Self {
        let mut extended = self.clone();
        extended.insert(code);
        extended
    }

    /// Number of member codes
    #[inline]
    #[must_use]
    pub const fn len(&self) -> usize {
        self.count
    }

    /// True if no code is a member
    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.count == 0
    }

    /// Member codes in increasing order
    pub fn iter(&self) -> impl Iterator<Item = Code> + '_ {
        self.members
            .iter()
            .enumerate()
            .filter(|&(_, &member)| member)
            .map(|(index, _)| Code::new(index as u32))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn full_and_empty() {
        let full = CodeSet::full(8);
        assert_eq!(full.len(), 8);
        assert!(full.contains(Code::new(7)));

        let empty = CodeSet::empty(8);
        assert!(empty.is_empty());
        assert!(!empty.contains(Code::new(0)));
        assert_eq!(empty.iter().count(), 0);
    }

    #[test]
    fn insert_counts_once() {
        let mut set = CodeSet::empty(4);
        set.insert(Code::new(2));
        set.insert(Code::new(2));
        assert_eq!(set.len(), 1);
        assert_eq!(set.iter().collect::<Vec<_>>(), vec![Code::new(2)]);
    }

    #[test]
    fn with_leaves_original_untouched() {
        let base = CodeSet::empty(4);
        let extended = base.with(Code::new(1));
        assert!(base.is_empty());
        assert!(extended.contains(Code::new(1)));
        assert_eq!(extended.len(), 1);
    }

    #[test]
    fn iterates_in_increasing_order() {
        let set = CodeSet::from_codes(8, [5, 1, 3].into_iter().map(Code::new));
        assert_eq!(set.len(), 3);
        let values: Vec<u32> = set.iter().map(Code::value).collect();
        assert_eq!(values, vec![1, 3, 5]);
    }
}
