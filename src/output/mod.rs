//! Terminal output formatting
//!
//! Colored summaries and progress bars. Everything here goes to the terminal;
//! the decision tree itself is written by the `generate` command.

pub mod display;
pub mod formatters;

pub use display::{
    print_build_summary, print_score_result, print_statistics, print_verify_report,
};
