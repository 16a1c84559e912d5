//! Minimax guess selection
//!
//! Worst-case minimization over the full code space.

mod calculator;
mod selector;

pub use calculator::{bucket_counts, calculate_max_remaining};
pub use selector::{MinimaxSelector, Selection};
