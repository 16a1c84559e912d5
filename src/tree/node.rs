//! Decision tree nodes
//!
//! Nodes live in an arena indexed by their id. Ids are handed out in
//! pre-order as nodes are created, starting with 0 for the root. Final
//! (forced) guesses are stored inline in their parent's child slot and get no
//! id of their own.

use crate::core::{Code, ResponseClasses, Rules};

/// Index of a node in its tree
pub type NodeId = usize;

/// What follows a response at a node
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Child {
    /// Only one code is left; guess it
    Final(Code),
    /// Several codes are left; continue at another node
    Branch(NodeId),
}

/// A computed guess and the follow-up for each response class
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Node {
    id: NodeId,
    guess: Code,
    children: Vec<Option<Child>>,
}

impl Node {
    pub(crate) fn new(id: NodeId, guess: Code, classes: usize) -> Self {
        Self {
            id,
            guess,
            children: vec![None; classes],
        }
    }

    #[inline]
    #[must_use]
    pub const fn id(&self) -> NodeId {
        self.id
    }

    #[inline]
    #[must_use]
    pub const fn guess(&self) -> Code {
        self.guess
    }

    /// Follow-up for the response class at `class`
    #[inline]
    #[must_use]
    pub fn child(&self, class: usize) -> Option<Child> {
        self.children.get(class).copied().flatten()
    }

    /// All child slots in response-class order
    #[inline]
    #[must_use]
    pub fn children(&self) -> &[Option<Child>] {
        &self.children
    }

    pub(crate) fn set_child(&mut self, class: usize, child: Child) {
        self.children[class] = Some(child);
    }
}

/// A complete guessing strategy
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DecisionTree {
    rules: Rules,
    classes: ResponseClasses,
    nodes: Vec<Node>,
}

impl DecisionTree {
    pub(crate) fn new(rules: Rules, classes: ResponseClasses, nodes: Vec<Node>) -> Self {
        debug_assert!(!nodes.is_empty(), "a tree always has a root");
        Self {
            rules,
            classes,
            nodes,
        }
    }

    #[inline]
    #[must_use]
    pub const fn rules(&self) -> Rules {
        self.rules
    }

    #[inline]
    #[must_use]
    pub const fn classes(&self) -> &ResponseClasses {
        &self.classes
    }

    /// The first node of every game
    #[inline]
    #[must_use]
    pub fn root(&self) -> &Node {
        &self.nodes[0]
    }

    #[inline]
    #[must_use]
    pub fn node(&self, id: NodeId) -> Option<&Node> {
        self.nodes.get(id)
    }

    /// Nodes in id order
    #[inline]
    #[must_use]
    pub fn nodes(&self) -> &[Node] {
        &self.nodes
    }

    /// Number of non-final nodes
    #[inline]
    #[must_use]
    pub fn len(&self) -> usize {
        self.nodes.len()
    }

    #[inline]
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.nodes.is_empty()
    }

    /// Number of final (forced) guesses across all nodes
    #[must_use]
    pub fn final_count(&self) -> usize {
        self.nodes
            .iter()
            .flat_map(Node::children)
            .filter(|child| matches!(child, Some(Child::Final(_))))
            .count()
    }
}
