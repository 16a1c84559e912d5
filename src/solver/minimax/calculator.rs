//! Minimax worst-case calculation
//!
//! Given a guess and the current candidates, computes the size of the largest
//! group of candidates that share a score against the guess.

use crate::core::{Code, CodeSpace, Score};

/// Count candidates per score bucket
///
/// `buckets` is cleared and resized to `(P + 1)²`; the entry for a score is at
/// [`Score::bucket`]. The winning score has a bucket too, so a guess that is
/// itself a candidate contributes a group of size one.
pub fn bucket_counts(space: &CodeSpace, guess: Code, candidates: &[Code], buckets: &mut Vec<usize>) {
    let pegs = space.rules().pegs();
    buckets.clear();
    buckets.resize((pegs + 1) * (pegs + 1), 0);

    for &candidate in candidates {
        buckets[Score::calculate(space, guess, candidate).bucket(pegs)] += 1;
    }
}

/// Calculate the worst-case remaining candidates for a guess
///
/// # Examples
/// ```
/// use logik::core::{CodeSpace, Rules};
/// use logik::solver::minimax::calculate_max_remaining;
///
/// let space = CodeSpace::new(Rules::new(2, 2).unwrap());
/// let candidates: Vec<_> = space.codes().collect();
///
/// // 00 scores (1,0) against both 01 and 10
/// let guess = space.parse("00").unwrap();
/// assert_eq!(calculate_max_remaining(&space, guess, &candidates), 2);
/// ```
#[must_use]
pub fn calculate_max_remaining(space: &CodeSpace, guess: Code, candidates: &[Code]) -> usize {
    let mut buckets = Vec::new();
    bucket_counts(space, guess, candidates, &mut buckets);
    buckets.iter().copied().max().unwrap_or(0)
}

/// Worst case for a guess, giving up as soon as a group grows past `cutoff`
///
/// Returns the exact worst case when it is `<= cutoff`; otherwise returns some
/// value `> cutoff`. Callers that only compare against `cutoff` lose nothing.
pub(crate) fn max_remaining_with_cutoff(
    space: &CodeSpace,
    guess: Code,
    candidates: &[Code],
    cutoff: usize,
    buckets: &mut Vec<usize>,
) -> usize {
    let pegs = space.rules().pegs();
    buckets.clear();
    buckets.resize((pegs + 1) * (pegs + 1), 0);

    let mut worst = 0;
    for &candidate in candidates {
        let slot = &mut buckets[Score::calculate(space, guess, candidate).bucket(pegs)];
        *slot += 1;
        if *slot > worst {
            worst = *slot;
            if worst > cutoff {
                break;
            }
        }
    }
    worst
}
