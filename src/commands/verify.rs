//! Tree verification command
//!
//! Checks that the tree solves every secret of the code space.

use crate::core::{Code, CodeSpace};
use crate::output::formatters::progress_style;
use crate::tree::{DecisionTree, PlayError, play};
use indicatif::ProgressBar;

/// Outcome of verifying a tree
#[derive(Debug)]
pub struct VerifyReport {
    pub checked: usize,
    pub failures: Vec<(Code, PlayError)>,
}

impl VerifyReport {
    #[must_use]
    pub fn is_valid(&self) -> bool {
        self.failures.is_empty()
    }
}

/// Play every secret through the tree and collect the ones it misses
#[must_use]
pub fn verify_tree(tree: &DecisionTree, space: &CodeSpace, show_progress: bool) -> VerifyReport {
    let pb = if show_progress {
        let pb = ProgressBar::new(space.len() as u64);
        pb.set_style(progress_style());
        pb.set_message("secrets verified");
        pb
    } else {
        ProgressBar::hidden()
    };

    let mut failures = Vec::new();
    for secret in space.codes() {
        if let Err(error) = play(tree, space, secret) {
            failures.push((secret, error));
        }
        pb.inc(1);
    }
    pb.finish_and_clear();

    VerifyReport {
        checked: space.len(),
        failures,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{ResponseClasses, Rules};
    use crate::solver::Evaluation;
    use crate::tree::TreeBuilder;

    #[test]
    fn built_trees_verify() {
        for (pegs, colors) in [(2, 2), (3, 3), (2, 5)] {
            let space = CodeSpace::new(Rules::new(pegs, colors).unwrap());
            let tree = TreeBuilder::new(&space, Evaluation::Stale).build().unwrap();
            let report = verify_tree(&tree, &space, false);
            assert!(report.is_valid(), "{:?}", report.failures);
            assert_eq!(report.checked, space.len());
        }
    }

    #[test]
    fn truncated_tree_fails() {
        let space = CodeSpace::new(Rules::new(2, 2).unwrap());
        let full = TreeBuilder::new(&space, Evaluation::Stale).build().unwrap();

        // Keep only the root, dropping node #1 and its branch target
        let rules = space.rules();
        let root = full.root().clone();
        let truncated = DecisionTree::new(rules, ResponseClasses::new(rules), vec![root]);

        let report = verify_tree(&truncated, &space, false);
        assert!(!report.is_valid());
        // 01 and 10 both go through the missing node
        assert_eq!(report.failures.len(), 2);
        assert!(report.failures.iter().all(|(_, e)| matches!(e, PlayError::UnknownNode(1))));
    }
}
