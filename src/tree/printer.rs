//! Text serialization of a decision tree
//!
//! One line per non-final node, written in pre-order:
//!
//! ```text
//! #<id>:<guess> (<exact>,<color_only>)<final guess> (<exact>,<color_only>)#<child id> ...
//! ```
//!
//! Every entry, including the node header, is followed by a single space. A
//! solver reads the output as a lookup table: start at `#0`, look up the
//! response, then either play the final guess or move to the named node.

use super::node::{Child, DecisionTree, NodeId};
use crate::core::CodeSpace;
use std::io::{self, Write};

/// Write the whole tree, starting at the root
///
/// # Errors
/// Returns any I/O error from `out`.
pub fn write_tree<W: Write>(tree: &DecisionTree, space: &CodeSpace, out: &mut W) -> io::Result<()> {
    write_node(tree, space, tree.root().id(), out)
}

fn write_node<W: Write>(
    tree: &DecisionTree,
    space: &CodeSpace,
    id: NodeId,
    out: &mut W,
) -> io::Result<()> {
    let Some(node) = tree.node(id) else {
        return Ok(());
    };
    let classes = tree.classes();

    write!(out, "#{}:{} ", node.id(), space.render(node.guess()))?;
    for (class, child) in node.children().iter().enumerate() {
        match child {
            Some(Child::Final(code)) => write!(out, "{}{} ", classes.get(class), space.render(*code))?,
            Some(Child::Branch(next)) => write!(out, "{}#{} ", classes.get(class), next)?,
            None => {}
        }
    }
    writeln!(out)?;

    for child in node.children().iter().flatten() {
        if let Child::Branch(next) = *child {
            write_node(tree, space, next, out)?;
        }
    }
    Ok(())
}

/// Render the whole tree into a string
#[must_use]
pub fn render_tree(tree: &DecisionTree, space: &CodeSpace) -> String {
    let mut buffer = Vec::new();
    // Writing into a Vec cannot fail
    let _ = write_tree(tree, space, &mut buffer);
    String::from_utf8_lossy(&buffer).into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::Rules;
    use crate::solver::Evaluation;
    use crate::tree::TreeBuilder;

    fn render(pegs: usize, colors: usize) -> String {
        let space = CodeSpace::new(Rules::new(pegs, colors).unwrap());
        let tree = TreeBuilder::new(&space, Evaluation::Stale).build().unwrap();
        render_tree(&tree, &space)
    }

    #[test]
    fn tiny_tree_output() {
        assert_eq!(render(2, 2), "#0:00 (0,0)11 (1,0)#1 \n#1:01 (0,2)10 \n");
    }

    #[test]
    fn line_k_describes_node_k() {
        let output = render(3, 4);
        for (k, line) in output.lines().enumerate() {
            assert!(line.starts_with(&format!("#{k}:")), "line {k}: {line}");
            assert!(line.ends_with(' '));
        }
    }

    #[test]
    fn one_line_per_node() {
        let space = CodeSpace::new(Rules::new(3, 3).unwrap());
        let tree = TreeBuilder::new(&space, Evaluation::Stale).build().unwrap();
        assert_eq!(render_tree(&tree, &space).lines().count(), tree.len());
    }

    #[test]
    fn output_is_byte_identical_across_runs() {
        assert_eq!(render(4, 3), render(4, 3));
    }

    #[test]
    fn write_tree_to_writer() {
        let space = CodeSpace::new(Rules::new(2, 2).unwrap());
        let tree = TreeBuilder::new(&space, Evaluation::Fresh).build().unwrap();
        let mut out = Vec::new();
        write_tree(&tree, &space, &mut out).unwrap();
        assert_eq!(out, b"#0:00 (0,0)11 (1,0)#1 \n#1:01 (0,2)10 \n");
    }
}
