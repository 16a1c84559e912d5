//! Command implementations

pub mod generate;
pub mod score;
pub mod stats;
pub mod verify;

pub use generate::{BuildResult, build_tree, generate};
pub use score::{ScoreResult, score_codes};
pub use stats::{TreeStatistics, compute_statistics};
pub use verify::{VerifyReport, verify_tree};
