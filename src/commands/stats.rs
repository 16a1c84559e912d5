//! Tree statistics command
//!
//! Plays every secret through the tree and summarizes how many guesses the
//! strategy needs.

use crate::core::{Code, CodeSpace};
use crate::output::formatters::progress_style;
use crate::tree::{DecisionTree, PlayError, play};
use indicatif::ProgressBar;
use rustc_hash::FxHashMap;

/// Summary of a decision tree
#[derive(Debug)]
pub struct TreeStatistics {
    pub nodes: usize,
    pub finals: usize,
    pub secrets: usize,
    pub total_guesses: usize,
    pub average_guesses: f64,
    pub max_guesses: usize,
    pub min_guesses: usize,
    pub distribution: FxHashMap<usize, usize>,
    pub worst_secrets: Vec<Code>,
}

/// Play every code of the space through the tree
///
/// # Errors
/// Returns the first `PlayError` if some secret is not solved.
pub fn compute_statistics(
    tree: &DecisionTree,
    space: &CodeSpace,
    show_progress: bool,
) -> Result<TreeStatistics, PlayError> {
    let pb = if show_progress {
        let pb = ProgressBar::new(space.len() as u64);
        pb.set_style(progress_style());
        pb.set_message("secrets played");
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut distribution: FxHashMap<usize, usize> = FxHashMap::default();
    let mut total_guesses = 0;
    let mut max_guesses = 0;
    let mut min_guesses = usize::MAX;
    let mut worst_secrets = Vec::new();

    for secret in space.codes() {
        let guesses = play(tree, space, secret)?.len();
        pb.inc(1);

        total_guesses += guesses;
        min_guesses = min_guesses.min(guesses);
        *distribution.entry(guesses).or_insert(0) += 1;

        if guesses > max_guesses {
            max_guesses = guesses;
            worst_secrets.clear();
        }
        if guesses == max_guesses {
            worst_secrets.push(secret);
        }
    }
    pb.finish_and_clear();

    let secrets = space.len();
    Ok(TreeStatistics {
        nodes: tree.len(),
        finals: tree.final_count(),
        secrets,
        total_guesses,
        average_guesses: total_guesses as f64 / secrets as f64,
        max_guesses,
        min_guesses,
        distribution,
        worst_secrets,
    })
}
