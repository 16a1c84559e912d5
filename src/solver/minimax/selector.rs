//! Minimax guess selection
//!
//! Picks the guess that minimizes the worst-case number of remaining
//! candidates, scanning the whole code space in increasing order.

use super::calculator::max_remaining_with_cutoff;
use crate::core::{Code, CodeSet, CodeSpace};
use crate::solver::Evaluation;

/// Chosen guess and its worst-case group size
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Selection {
    pub guess: Code,
    pub worst_case: usize,
}

/// Minimax selector over a fixed code space
#[derive(Debug, Clone, Copy)]
pub struct MinimaxSelector<'a> {
    space: &'a CodeSpace,
    evaluation: Evaluation,
}

impl<'a> MinimaxSelector<'a> {
    #[must_use]
    pub const fn new(space: &'a CodeSpace, evaluation: Evaluation) -> Self {
        Self { space, evaluation }
    }

    /// Select the minimax guess for the current candidates
    ///
    /// Every code is a potential guess, not only the candidates. Ties go to
    /// the first code in increasing order, except that a non-candidate best
    /// is replaced by a later candidate with the same worst case.
    ///
    /// Returns `None` only if no code was evaluated at all.
    ///
    /// # Examples
    /// ```
    /// use logik::core::{CodeSet, CodeSpace, Rules};
    /// use logik::solver::Evaluation;
    /// use logik::solver::minimax::MinimaxSelector;
    ///
    /// let space = CodeSpace::new(Rules::new(2, 2).unwrap());
    /// let selector = MinimaxSelector::new(&space, Evaluation::Stale);
    ///
    /// let choice = selector
    ///     .select(&CodeSet::empty(space.len()), &CodeSet::full(space.len()))
    ///     .unwrap();
    /// assert_eq!(space.render(choice.guess), "00");
    /// assert_eq!(choice.worst_case, 2);
    /// ```
    #[must_use]
    pub fn select(&self, guessed: &CodeSet, candidates: &CodeSet) -> Option<Selection> {
        let members: Vec<Code> = candidates.iter().collect();
        let mut buckets = Vec::new();

        // Worst case of the most recently evaluated code; skipped codes reuse it
        let mut cost = usize::MAX;
        let mut best: Option<Selection> = None;

        for guess in self.space.codes() {
            if self.evaluation.evaluates(guess, guessed) {
                let cutoff = best.map_or(usize::MAX, |b| b.worst_case);
                cost = max_remaining_with_cutoff(self.space, guess, &members, cutoff, &mut buckets);
            }
            if cost == usize::MAX {
                continue;
            }

            let candidate = Selection {
                guess,
                worst_case: cost,
            };
            match best {
                None => best = Some(candidate),
                Some(current) => {
                    if cost < current.worst_case
                        || (cost == current.worst_case
                            && !candidates.contains(current.guess)
                            && candidates.contains(guess))
                    {
                        best = Some(candidate);
                    }
                }
            }
        }

        best
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::minimax::calculate_max_remaining;

    fn set_of(space: &CodeSpace, codes: &[&str]) -> CodeSet {
        let mut set = CodeSet::empty(space.len());
        for code in codes {
            set.insert(space.parse(code).unwrap());
        }
        set
    }

    #[test]
    fn tiny_root_picks_first_code() {
        let space = CodeSpace::new(Rules::new(2, 2).unwrap());
        let selector = MinimaxSelector::new(&space, Evaluation::Stale);
        let choice = selector
            .select(&CodeSet::empty(4), &CodeSet::full(4))
            .unwrap();

        assert_eq!(choice.guess, Code::new(0));
        assert_eq!(choice.worst_case, 2);
    }

    #[test]
    fn selected_worst_case_is_the_minimum() {
        let space = CodeSpace::new(Rules::new(3, 3).unwrap());
        let candidates = set_of(&space, &["001", "010", "100", "111", "210", "222"]);
        let members: Vec<Code> = candidates.iter().collect();
        let selector = MinimaxSelector::new(&space, Evaluation::Fresh);

        let choice = selector.select(&CodeSet::empty(space.len()), &candidates).unwrap();
        let minimum = space
            .codes()
            .map(|g| calculate_max_remaining(&space, g, &members))
            .min()
            .unwrap();

        assert_eq!(choice.worst_case, minimum);
        assert_eq!(calculate_max_remaining(&space, choice.guess, &members), minimum);
    }

    #[test]
    fn tie_switches_to_later_candidate() {
        // 01 is the first code splitting {11, 12}, but 11 splits them equally
        // well and could itself be the secret
        let space = CodeSpace::new(Rules::new(2, 3).unwrap());
        let candidates = set_of(&space, &["11", "12"]);
        let selector = MinimaxSelector::new(&space, Evaluation::Stale);

        let choice = selector.select(&CodeSet::empty(space.len()), &candidates).unwrap();
        assert_eq!(space.render(choice.guess), "11");
        assert_eq!(choice.worst_case, 1);
    }

    #[test]
    fn tie_keeps_first_candidate() {
        let space = CodeSpace::new(Rules::new(2, 2).unwrap());
        let candidates = set_of(&space, &["01", "10"]);
        let guessed = set_of(&space, &["00"]);
        let selector = MinimaxSelector::new(&space, Evaluation::Stale);

        let choice = selector.select(&guessed, &candidates).unwrap();
        assert_eq!(space.render(choice.guess), "01");
        assert_eq!(choice.worst_case, 1);
    }

    #[test]
    fn stale_and_fresh_differ_only_on_played_candidates() {
        // A played code that is still a candidate never occurs while building a
        // tree, but it shows the two strategies apart
        let space = CodeSpace::new(Rules::new(2, 2).unwrap());
        let guessed = set_of(&space, &["00"]);
        let all = CodeSet::full(space.len());

        let stale = MinimaxSelector::new(&space, Evaluation::Stale)
            .select(&guessed, &all)
            .unwrap();
        let fresh = MinimaxSelector::new(&space, Evaluation::Fresh)
            .select(&guessed, &all)
            .unwrap();

        assert_eq!(space.render(stale.guess), "01");
        assert_eq!(space.render(fresh.guess), "00");
        assert_eq!(stale.worst_case, fresh.worst_case);
    }

    #[test]
    fn stale_reuses_previous_cost() {
        let space = CodeSpace::new(Rules::new(2, 3).unwrap());
        let candidates = set_of(&space, &["11", "12"]);
        // 11 is skipped and inherits the worst case of 10, which is 2
        let guessed = set_of(&space, &["11"]);

        let stale = MinimaxSelector::new(&space, Evaluation::Stale)
            .select(&guessed, &candidates)
            .unwrap();
        assert_eq!(space.render(stale.guess), "12");
        assert_eq!(stale.worst_case, 1);
    }

    #[test]
    fn all_codes_played_yields_nothing() {
        let space = CodeSpace::new(Rules::new(1, 2).unwrap());
        let selector = MinimaxSelector::new(&space, Evaluation::Stale);
        let choice = selector.select(&CodeSet::full(2), &CodeSet::full(2));
        assert!(choice.is_none());
    }
}
