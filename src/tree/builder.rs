//! Recursive decision tree construction
//!
//! At every node the minimax guess splits the remaining candidates by
//! response class. A class with one candidate becomes a final guess, a larger
//! class becomes a child node built the same way, an empty class is skipped.

use super::node::{Child, DecisionTree, Node, NodeId};
use crate::core::{Code, CodeSet, CodeSpace, ResponseClasses, Score};
use crate::solver::{Evaluation, MinimaxSelector};
use indicatif::ProgressBar;
use std::fmt;

/// Error type for an aborted build
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// The node arena could not grow
    OutOfMemory { nodes: usize },
    /// Every code was skipped by the selector
    NoGuess { candidates: usize },
}

impl fmt::Display for BuildError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::OutOfMemory { nodes } => {
                write!(f, "Out of memory after allocating {nodes} nodes")
            }
            Self::NoGuess { candidates } => {
                write!(f, "No guess could be selected for {candidates} candidates")
            }
        }
    }
}

impl std::error::Error for BuildError {}

/// Builds the complete decision tree for a code space
///
/// The progress bar advances once per secret that becomes certain, so its
/// length should be the size of the code space.
pub struct TreeBuilder<'a> {
    space: &'a CodeSpace,
    classes: ResponseClasses,
    selector: MinimaxSelector<'a>,
    progress: ProgressBar,
    nodes: Vec<Node>,
}

impl<'a> TreeBuilder<'a> {
    #[must_use]
    pub fn new(space: &'a CodeSpace, evaluation: Evaluation) -> Self {
        Self {
            space,
            classes: ResponseClasses::new(space.rules()),
            selector: MinimaxSelector::new(space, evaluation),
            progress: ProgressBar::hidden(),
            nodes: Vec::new(),
        }
    }

    /// Report resolved secrets on the given progress bar
    #[must_use]
    pub fn with_progress(mut self, progress: ProgressBar) -> Self {
        self.progress = progress;
        self
    }

    /// Build the tree, starting with every code as a candidate
    ///
    /// # Errors
    /// Returns `BuildError` if memory runs out or no guess can be selected.
    /// No partial tree is ever returned.
    ///
    /// # Examples
    /// ```
    /// use logik::core::{CodeSpace, Rules};
    /// use logik::solver::Evaluation;
    /// use logik::tree::TreeBuilder;
    ///
    /// let space = CodeSpace::new(Rules::new(2, 2).unwrap());
    /// let tree = TreeBuilder::new(&space, Evaluation::Stale).build().unwrap();
    ///
    /// assert_eq!(tree.len(), 2);
    /// assert_eq!(tree.final_count(), 2);
    /// ```
    pub fn build(mut self) -> Result<DecisionTree, BuildError> {
        let size = self.space.len();
        self.expand(CodeSet::empty(size), CodeSet::full(size))?;
        Ok(DecisionTree::new(
            self.space.rules(),
            self.classes,
            self.nodes,
        ))
    }

    fn expand(&mut self, guessed: CodeSet, candidates: CodeSet) -> Result<NodeId, BuildError> {
        let selection = self
            .selector
            .select(&guessed, &candidates)
            .ok_or(BuildError::NoGuess {
                candidates: candidates.len(),
            })?;
        let guess = selection.guess;

        let id = self.allocate(guess)?;
        if candidates.contains(guess) {
            self.progress.inc(1);
        }

        let guessed = guessed.with(guess);
        let groups = self.partition(guess, &candidates);
        drop(candidates);

        for (class, group) in groups.into_iter().enumerate() {
            let child = match group.as_slice() {
                [] => continue,
                &[only] => {
                    self.progress.inc(1);
                    Child::Final(only)
                }
                _ => {
                    let narrowed = CodeSet::from_codes(self.space.len(), group.iter().copied());
                    Child::Branch(self.expand(guessed.clone(), narrowed)?)
                }
            };
            self.nodes[id].set_child(class, child);
        }

        Ok(id)
    }

    /// Next sequential id, with a fresh node stored under it
    fn allocate(&mut self, guess: Code) -> Result<NodeId, BuildError> {
        self.nodes
            .try_reserve(1)
            .map_err(|_| BuildError::OutOfMemory {
                nodes: self.nodes.len(),
            })?;

        let id = self.nodes.len();
        self.nodes.push(Node::new(id, guess, self.classes.len()));
        Ok(id)
    }

    /// Group candidates by response class; a candidate equal to the guess has
    /// no class and is dropped
    fn partition(&self, guess: Code, candidates: &CodeSet) -> Vec<Vec<Code>> {
        let mut groups = vec![Vec::new(); self.classes.len()];
        for candidate in candidates.iter() {
            let score = Score::calculate(self.space, guess, candidate);
            if let Some(class) = self.classes.index_of(score) {
                groups[class].push(candidate);
            }
        }
        groups
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;

    fn build(pegs: usize, colors: usize, evaluation: Evaluation) -> (CodeSpace, DecisionTree) {
        let space = CodeSpace::new(Rules::new(pegs, colors).unwrap());
        let tree = TreeBuilder::new(&space, evaluation).build().unwrap();
        (space, tree)
    }

    /// Re-derive every node's candidates from the root and check that the
    /// children split them exactly
    fn check_partition(space: &CodeSpace, tree: &DecisionTree, id: NodeId, candidates: &[Code]) {
        let node = tree.node(id).unwrap();
        let guess = node.guess();
        let classes = tree.classes();

        let mut accounted = usize::from(candidates.contains(&guess));
        for (class, child) in node.children().iter().enumerate() {
            let group: Vec<Code> = candidates
                .iter()
                .copied()
                .filter(|&c| Score::calculate(space, guess, c) == classes.get(class))
                .collect();
            accounted += group.len();

            match (*child, group.as_slice()) {
                (None, []) => {}
                (Some(Child::Final(code)), &[only]) => assert_eq!(code, only),
                (Some(Child::Branch(next)), rest) if rest.len() > 1 => {
                    check_partition(space, tree, next, rest);
                }
                (child, rest) => panic!("node #{id} class {class}: {child:?} for {rest:?}"),
            }
        }
        assert_eq!(accounted, candidates.len(), "node #{id} lost candidates");
    }

    #[test]
    fn tiny_tree_shape() {
        let (space, tree) = build(2, 2, Evaluation::Stale);

        let root = tree.root();
        assert_eq!(space.render(root.guess()), "00");
        // (0,0) -> 11, (1,0) -> node #1
        assert_eq!(root.child(0), Some(Child::Final(space.parse("11").unwrap())));
        assert_eq!(root.child(1), None);
        assert_eq!(root.child(2), None);
        assert_eq!(root.child(3), Some(Child::Branch(1)));

        let inner = tree.node(1).unwrap();
        assert_eq!(space.render(inner.guess()), "01");
        assert_eq!(inner.child(2), Some(Child::Final(space.parse("10").unwrap())));
        assert_eq!(tree.len(), 2);
    }

    #[test]
    fn children_partition_candidates() {
        for (pegs, colors) in [(2, 2), (2, 3), (3, 3), (3, 4), (4, 3)] {
            let (space, tree) = build(pegs, colors, Evaluation::Stale);
            let all: Vec<Code> = space.codes().collect();
            check_partition(&space, &tree, 0, &all);
        }
    }

    #[test]
    fn ids_are_sequential_preorder() {
        let (_, tree) = build(3, 4, Evaluation::Stale);
        for (index, node) in tree.nodes().iter().enumerate() {
            assert_eq!(node.id(), index);
            // Every branch points forward, never back
            for child in node.children().iter().flatten() {
                if let Child::Branch(next) = *child {
                    assert!(next > index);
                }
            }
        }
    }

    #[test]
    fn stale_and_fresh_build_the_same_tree() {
        for (pegs, colors) in [(2, 2), (3, 3), (3, 4), (4, 3)] {
            let (_, stale) = build(pegs, colors, Evaluation::Stale);
            let (_, fresh) = build(pegs, colors, Evaluation::Fresh);
            assert_eq!(stale, fresh, "{pegs} pegs, {colors} colors");
        }
    }

    #[test]
    fn build_is_deterministic() {
        let (_, first) = build(3, 4, Evaluation::Stale);
        let (_, second) = build(3, 4, Evaluation::Stale);
        assert_eq!(first, second);
    }

    #[test]
    fn progress_counts_every_code_once() {
        let space = CodeSpace::new(Rules::new(3, 3).unwrap());
        let progress = ProgressBar::hidden();
        TreeBuilder::new(&space, Evaluation::Stale)
            .with_progress(progress.clone())
            .build()
            .unwrap();
        assert_eq!(progress.position(), space.len() as u64);
    }

    #[test]
    fn build_error_display() {
        assert_eq!(
            BuildError::OutOfMemory { nodes: 12 }.to_string(),
            "Out of memory after allocating 12 nodes"
        );
    }
}
