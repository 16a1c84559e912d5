//! Tree generation command
//!
//! Builds the decision tree for a code space and writes it out in the lookup
//! table format.

use crate::core::CodeSpace;
use crate::output::formatters::progress_style;
use crate::solver::Evaluation;
use crate::tree::{BuildError, DecisionTree, TreeBuilder, write_tree};
use indicatif::ProgressBar;
use std::io::Write;
use std::time::{Duration, Instant};

/// Result of building a tree
pub struct BuildResult {
    pub tree: DecisionTree,
    pub evaluation: Evaluation,
    pub duration: Duration,
}

/// Build the tree, optionally drawing a progress bar on stderr
///
/// # Errors
/// Returns `BuildError` if the build is aborted.
pub fn build_tree(
    space: &CodeSpace,
    evaluation: Evaluation,
    show_progress: bool,
) -> Result<BuildResult, BuildError> {
    let progress = if show_progress {
        let pb = ProgressBar::new(space.len() as u64);
        pb.set_style(progress_style());
        pb.set_message("secrets resolved");
        pb.enable_steady_tick(Duration::from_millis(120));
        pb
    } else {
        ProgressBar::hidden()
    };

    let start = Instant::now();
    let result = TreeBuilder::new(space, evaluation)
        .with_progress(progress.clone())
        .build();
    progress.finish_and_clear();

    Ok(BuildResult {
        tree: result?,
        evaluation,
        duration: start.elapsed(),
    })
}

/// Build the tree and write it to `out`
///
/// Nothing is written unless the whole tree was built.
///
/// # Errors
/// Returns an error if the build is aborted or writing fails.
pub fn generate<W: Write>(
    space: &CodeSpace,
    evaluation: Evaluation,
    show_progress: bool,
    out: &mut W,
) -> anyhow::Result<BuildResult> {
    let result = build_tree(space, evaluation, show_progress)?;
    write_tree(&result.tree, space, out)?;
    out.flush()?;
    Ok(result)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    #[test]
    fn generate_writes_complete_tree() {
        let space = CodeSpace::new(Rules::new(2, 2).unwrap());
        let mut out = Vec::new();
        let result = generate(&space, Evaluation::Stale, false, &mut out).unwrap();

        assert_eq!(result.tree.len(), 2);
        assert_eq!(result.evaluation, Evaluation::Stale);
        assert_eq!(String::from_utf8(out).unwrap(), "#0:00 (0,0)11 (1,0)#1 \n#1:01 (0,2)10 \n");
    }

    #[test]
    fn build_tree_without_progress() {
        let space = CodeSpace::new(Rules::new(3, 3).unwrap());
        let result = build_tree(&space, Evaluation::Fresh, false).unwrap();
        assert!(!result.tree.is_empty());
        assert_eq!(result.tree.root().id(), 0);
    }
}
