//! Playing a secret through a finished tree

use super::node::{Child, DecisionTree};
use crate::core::{Code, CodeSpace, Score};
use std::fmt;

/// Error type for a secret the tree does not solve
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum PlayError {
    /// The response to a guess has no entry at the node
    MissingBranch { node: usize, response: Score },
    /// A forced guess turned out not to be the secret
    WrongFinal { node: usize, guess: Code, secret: Code },
    /// A branch refers to a node that does not exist
    UnknownNode(usize),
    /// More guesses than nodes: the tree must contain a loop
    Loop,
}

impl fmt::Display for PlayError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingBranch { node, response } => {
                write!(f, "Node #{node} has no entry for response {response}")
            }
            Self::WrongFinal {
                node,
                guess,
                secret,
            } => write!(
                f,
                "Node #{node} forces code {} but the secret is {}",
                guess.value(),
                secret.value()
            ),
            Self::UnknownNode(id) => write!(f, "Branch to missing node #{id}"),
            Self::Loop => write!(f, "Tree walk does not terminate"),
        }
    }
}

impl std::error::Error for PlayError {}

/// Play `secret` through the tree
///
/// Returns every guess made, in order; the last one is the secret.
///
/// # Errors
/// Returns `PlayError` if the tree cannot solve the secret.
///
/// # Examples
/// ```
/// use logik::core::{CodeSpace, Rules};
/// use logik::solver::Evaluation;
/// use logik::tree::{TreeBuilder, play};
///
/// let space = CodeSpace::new(Rules::new(2, 2).unwrap());
/// let tree = TreeBuilder::new(&space, Evaluation::Stale).build().unwrap();
///
/// let secret = space.parse("10").unwrap();
/// let guesses = play(&tree, &space, secret).unwrap();
/// assert_eq!(guesses.last(), Some(&secret));
/// ```
pub fn play(tree: &DecisionTree, space: &CodeSpace, secret: Code) -> Result<Vec<Code>, PlayError> {
    let classes = tree.classes();
    let mut guesses = Vec::new();
    let mut id = tree.root().id();

    loop {
        if guesses.len() > tree.len() {
            return Err(PlayError::Loop);
        }

        let node = tree.node(id).ok_or(PlayError::UnknownNode(id))?;
        guesses.push(node.guess());
        if node.guess() == secret {
            return Ok(guesses);
        }

        let response = Score::calculate(space, node.guess(), secret);
        let child = classes
            .index_of(response)
            .and_then(|class| node.child(class))
            .ok_or(PlayError::MissingBranch { node: id, response })?;

        match child {
            Child::Final(guess) => {
                guesses.push(guess);
                return if guess == secret {
                    Ok(guesses)
                } else {
                    Err(PlayError::WrongFinal {
                        node: id,
                        guess,
                        secret,
                    })
                };
            }
            Child::Branch(next) => id = next,
        }
    }
}
