//! Logik decision-tree generator
//!
//! Computes a complete minimax guessing strategy for the five-peg, eight-color
//! Logik (Mastermind) code-breaking game and prints it as a lookup table.
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use logik::core::{CodeSpace, Rules};
//! use logik::solver::Evaluation;
//! use logik::tree::{TreeBuilder, render_tree};
//!
//! let space = CodeSpace::new(Rules::CLASSIC);
//! let tree = TreeBuilder::new(&space, Evaluation::Stale).build().unwrap();
//! print!("{}", render_tree(&tree, &space));
//! ```

// Core domain types
pub mod core;

// Minimax guess selection
pub mod solver;

// Decision tree
pub mod tree;

// Command implementations
pub mod commands;

// Terminal output formatting
pub mod output;
