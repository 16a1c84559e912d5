//! Decision tree construction, printing and playback

mod builder;
mod node;
mod printer;
mod walk;

pub use builder::{BuildError, TreeBuilder};
pub use node::{Child, DecisionTree, Node, NodeId};
pub use printer::{render_tree, write_tree};
pub use walk::{PlayError, play};
