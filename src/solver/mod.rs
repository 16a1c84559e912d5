//! Guess search
//!
//! The minimax selector and the evaluation strategies it can run with.

pub mod minimax;
pub mod strategy;

pub use minimax::{MinimaxSelector, Selection};
pub use strategy::Evaluation;
